//! Plain-text chart output.

use sidereal_base::{deg_to_dms, rashi_from_longitude};
use sidereal_chart::{Chart, format_degrees};

pub fn print_chart(chart: &Chart) {
    println!("Date:      {}", chart.civil_time.to_rfc3339());
    println!(
        "Location:  {:.4}, {:.4}",
        chart.location.latitude_deg, chart.location.longitude_deg
    );
    println!(
        "JD (UT):   {:.6}   JD (TT): {:.6}",
        chart.instant.jd_ut, chart.instant.jd_tt
    );
    println!(
        "Ayanamsa:  {} ({})",
        format_degrees(chart.ayanamsa_deg),
        deg_to_dms(chart.ayanamsa_deg)
    );

    let asc = &chart.ascendant;
    println!(
        "Ascendant: {} {} {} - {} pada {}",
        format_degrees(asc.sidereal_longitude_deg),
        asc.rashi.name(),
        rashi_from_longitude(asc.sidereal_longitude_deg).dms,
        asc.nakshatra.nakshatra.name(),
        asc.nakshatra.pada
    );
    println!("Houses:    {}", chart.house_system);
    println!();

    println!(
        "{:<2} {:<18} {:>9} {:<10} {:>12} {:>5}  {}",
        "", "Body", "Sidereal", "Rashi", "In sign", "House", "Nakshatra"
    );
    for b in &chart.bodies {
        println!(
            "{:<2} {:<18} {:>9} {:<10} {:>12} {:>5}  {} {}",
            b.key.glyph(),
            b.label,
            format_degrees(b.sidereal_longitude_deg),
            b.rashi.name(),
            deg_to_dms(b.degree_in_sign).to_string(),
            b.house,
            b.nakshatra.nakshatra.name(),
            b.nakshatra.pada
        );
    }
    for fault in &chart.faults {
        println!("-- {:<18} unavailable: {}", fault.body.label(), fault.reason);
    }
    println!();

    for cusp in &chart.houses {
        let labels: Vec<_> = chart
            .bodies_in_house(cusp.house)
            .map(|b| b.key.glyph())
            .collect();
        println!(
            "House {:>2}  {:>9} {:<10} {}",
            cusp.house,
            format_degrees(cusp.start_deg),
            cusp.rashi.name(),
            labels.join(" ")
        );
    }

    let aspects = chart.aspects();
    if !aspects.is_empty() {
        println!();
        println!("Aspects:");
        for m in &aspects {
            println!(
                "  {:<18} {:<11} {:<18} orb {:.2}",
                m.body_a.label(),
                m.kind.name(),
                m.body_b.label(),
                m.orb_delta_deg
            );
        }
    }
}
