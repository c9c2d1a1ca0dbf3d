use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::{error::Result, io, types::TurnoutRecord};

pub const TABLE_COLUMNS: [&str; 3] = ["State", "Turnout Rate (%)", "Relative Turnout Rate (%)"];

/// The per-year dataset as a table. Never filtered by the swing toggle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    pub columns: [&'static str; 3],
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub state_name: String,
    pub turnout_rate: f64,
    pub relative_turnout_rate: f64,
}

/// Direct projection of `records`, in dataset order.
pub fn render_table(records: &[TurnoutRecord]) -> TableSpec {
    TableSpec {
        columns: TABLE_COLUMNS,
        rows: records.iter()
            .map(|r| TableRow {
                state_name: r.state_name.clone(),
                turnout_rate: r.turnout_rate,
                relative_turnout_rate: r.relative_turnout_rate,
            })
            .collect(),
    }
}

impl TableSpec {
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_csv_string(&self) -> Result<String> {
        io::write_csv_string(&mut io::table_frame(self)?)
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        io::write_csv(&mut io::table_frame(self)?, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TurnoutRecord> {
        vec![
            TurnoutRecord::new("Alabama", 63.1, -2.4),
            TurnoutRecord::new("Alaska", 68.8, 3.3),
        ]
    }

    #[test]
    fn projects_every_record_in_order() {
        let table = render_table(&records());
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].state_name, "Alaska");
        assert_eq!(table.rows[0].relative_turnout_rate, -2.4);
        assert_eq!(table.columns[0], "State");
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = render_table(&records()).to_csv_string().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("State,Turnout Rate (%),Relative Turnout Rate (%)"));
        assert!(lines.next().unwrap().starts_with("Alabama,63.1"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn missing_rates_are_empty_in_csv_and_null_in_json() {
        let table = render_table(&[TurnoutRecord::new("Ohio", 64.6, f64::NAN)]);

        let csv = table.to_csv_string().unwrap();
        assert_eq!(csv.lines().nth(1), Some("Ohio,64.6,"));

        let json = table.to_json().unwrap();
        assert_eq!(json["rows"][0]["turnout_rate"], 64.6);
        assert!(json["rows"][0]["relative_turnout_rate"].is_null());
    }

    #[test]
    fn json_lists_rows() {
        let json = render_table(&records()).to_json().unwrap();
        assert_eq!(json["rows"][1]["state_name"], "Alaska");
        assert_eq!(json["columns"][2], "Relative Turnout Rate (%)");
    }
}
