//! Chart construction.
//!
//! Validation runs coordinates → date/time → ascendant, and each failure
//! aborts the build. After that, each body is computed independently; a
//! body that cannot be computed is logged, recorded in [`Chart::faults`]
//! and left out, and the rest of the chart is still built.

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use sidereal_base::{
    ALL_BODIES, BodyKey, GeoLocation, ascendant_tropical_deg, ayanamsa_deg,
    geocentric_ecliptic_longitude_deg, house_cusps, house_for_longitude, mean_ketu_deg,
    mean_rahu_deg, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
    tropical_to_sidereal,
};
use sidereal_core::{Body, EclipticProvider, EngineError};
use sidereal_time::{Instant, parse_civil};

use crate::error::{ChartError, FaultReason};
use crate::types::{AscendantPosition, BodyFault, BodyPosition, Chart, ChartConfig};

/// Where a body's tropical longitude comes from.
enum Source {
    Provider(Body),
    MeanNode,
    SouthNode,
    Kepler,
}

fn source_of(key: BodyKey) -> Source {
    match key {
        BodyKey::Sun => Source::Provider(Body::Sun),
        BodyKey::Moon => Source::Provider(Body::Moon),
        BodyKey::Mercury => Source::Provider(Body::Mercury),
        BodyKey::Venus => Source::Provider(Body::Venus),
        BodyKey::Mars => Source::Provider(Body::Mars),
        BodyKey::Jupiter => Source::Provider(Body::Jupiter),
        BodyKey::Saturn => Source::Provider(Body::Saturn),
        BodyKey::Uranus => Source::Provider(Body::Uranus),
        BodyKey::Neptune => Source::Provider(Body::Neptune),
        BodyKey::Pluto => Source::Provider(Body::Pluto),
        BodyKey::MeanNode => Source::MeanNode,
        BodyKey::SouthNode => Source::SouthNode,
        BodyKey::Chiron => Source::Kepler,
    }
}

/// Tropical longitude of one body, [0, 360) or NaN.
fn tropical_longitude<P: EclipticProvider + ?Sized>(
    provider: &P,
    key: BodyKey,
    instant: &Instant,
    config: &ChartConfig,
) -> Result<f64, EngineError> {
    let lon = match source_of(key) {
        Source::Provider(body) => provider.longitude_deg(body, instant)?,
        Source::MeanNode => mean_rahu_deg(instant.centuries_tt()),
        Source::SouthNode => mean_ketu_deg(instant.centuries_tt()),
        Source::Kepler => {
            let earth = provider.earth_heliocentric_equatorial_au(instant)?;
            geocentric_ecliptic_longitude_deg(&config.chiron_elements, instant.jd_tt, &earth)
        }
    };
    Ok(normalize_360(lon))
}

fn place_body(
    key: BodyKey,
    tropical: f64,
    ayanamsa: f64,
    asc_sidereal: f64,
    config: &ChartConfig,
) -> BodyPosition {
    let sidereal = tropical_to_sidereal(tropical, ayanamsa);
    let rashi = rashi_from_longitude(sidereal);
    BodyPosition {
        key,
        label: key.label(),
        tropical_longitude_deg: tropical,
        sidereal_longitude_deg: sidereal,
        rashi: rashi.rashi,
        sign_index: rashi.rashi_index,
        degree_in_sign: rashi.degrees_in_rashi,
        house: house_for_longitude(sidereal, asc_sidereal, config.house_system),
        nakshatra: nakshatra_from_longitude(sidereal),
    }
}

/// Build a chart for a civil date/time in the machine's local time zone.
pub fn build_chart<P: EclipticProvider + ?Sized>(
    provider: &P,
    latitude: f64,
    longitude: f64,
    local_date_time: &str,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    build_chart_in_zone(provider, latitude, longitude, local_date_time, &Local, config)
}

/// Build a chart for a civil date/time interpreted in `tz`.
pub fn build_chart_in_zone<P: EclipticProvider + ?Sized, Tz: TimeZone>(
    provider: &P,
    latitude: f64,
    longitude: f64,
    local_date_time: &str,
    tz: &Tz,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    let location = GeoLocation::new(latitude, longitude)?;
    let civil_time = parse_civil(local_date_time, tz)?;
    build_chart_at(provider, location, civil_time, config)
}

/// Build a chart for an already-resolved date/time.
pub fn build_chart_at<P: EclipticProvider + ?Sized>(
    provider: &P,
    location: GeoLocation,
    civil_time: DateTime<FixedOffset>,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    let instant = Instant::from_datetime(&civil_time);
    log::debug!(
        "building chart for {civil_time} at ({}, {}): JD(UT) {}, JD(TT) {}",
        location.latitude_deg,
        location.longitude_deg,
        instant.jd_ut,
        instant.jd_tt
    );

    let ayanamsa = ayanamsa_deg(&instant);
    let asc_tropical = ascendant_tropical_deg(&instant, &location)?;
    let asc_sidereal = tropical_to_sidereal(asc_tropical, ayanamsa);
    let asc_rashi = rashi_from_longitude(asc_sidereal);
    let ascendant = AscendantPosition {
        tropical_longitude_deg: asc_tropical,
        sidereal_longitude_deg: asc_sidereal,
        rashi: asc_rashi.rashi,
        sign_index: asc_rashi.rashi_index,
        degree_in_sign: asc_rashi.degrees_in_rashi,
        nakshatra: nakshatra_from_longitude(asc_sidereal),
    };
    log::debug!("ayanamsa {ayanamsa:.6}°, ascendant {asc_sidereal:.6}° sidereal");

    let mut bodies = Vec::with_capacity(ALL_BODIES.len());
    let mut faults = Vec::new();
    for key in ALL_BODIES {
        let reason = match tropical_longitude(provider, key, &instant, config) {
            Ok(lon) if lon.is_finite() => {
                bodies.push(place_body(key, lon, ayanamsa, asc_sidereal, config));
                continue;
            }
            Ok(_) => FaultReason::NonFiniteLongitude,
            Err(e) => FaultReason::Provider(e),
        };
        log::warn!("{} left out of chart: {reason}", key.key());
        faults.push(BodyFault { body: key, reason });
    }

    Ok(Chart {
        civil_time,
        instant,
        location,
        house_system: config.house_system,
        ayanamsa_deg: ayanamsa,
        ascendant,
        houses: house_cusps(asc_sidereal, config.house_system),
        bodies,
        faults,
    })
}
