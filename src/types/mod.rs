mod year;
mod record;

pub use year::ElectionYear;
pub use record::{GeoRecord, TurnoutRecord};
