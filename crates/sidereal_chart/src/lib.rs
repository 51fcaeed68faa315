//! Sidereal chart orchestration.
//!
//! Bridges a position provider and the pure math in `sidereal_base`:
//! resolves the civil time, computes ayanamsa and ascendant once, then
//! places each of the thirteen chart bodies.
//!
//! ```rust,ignore
//! let table = PositionTable::load(Path::new("positions.toml"))?;
//! let chart = build_chart(&table, 35.6892, 51.389, "2024-03-20T12:00", &ChartConfig::default())?;
//! for b in &chart.bodies {
//!     println!("{:<18} {} house {}", b.label, format_degrees(b.sidereal_longitude_deg), b.house);
//! }
//! ```

pub mod build;
pub mod error;
pub mod format;
pub mod types;

pub use build::{build_chart, build_chart_at, build_chart_in_zone};
pub use error::{ChartError, FaultReason};
pub use format::format_degrees;
pub use types::{AscendantPosition, BodyFault, BodyPosition, Chart, ChartConfig};
