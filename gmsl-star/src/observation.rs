use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StarError};
use crate::measurement::Measurement;

/// One row of the sea level table: a decimal year plus one reading per
/// mission column, aligned index-for-index with the table's mission names.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SeaLevelObservation {
    /// Time of the observation as a decimal year (e.g. 1992.9614)
    pub year: f64,
    /// Per-mission readings, in header order
    pub readings: Vec<Measurement>,
}

impl SeaLevelObservation {
    /// Minimum across this row's non-missing readings.
    pub fn minimum(&self) -> Measurement {
        Measurement::minimum(&self.readings)
    }

    /// Parse a CSV record into an observation.
    ///
    /// `columns` is the full column count of the table including the year
    /// column; the record must match it exactly.
    pub fn from_record(record: &StringRecord, columns: usize) -> Result<Self> {
        if record.len() != columns {
            return Err(StarError::InvalidFormat(format!(
                "Expected {} columns, found {}",
                columns,
                record.len()
            )));
        }

        let year_field = record
            .get(0)
            .ok_or_else(|| StarError::InvalidFormat("Missing year field".to_string()))?;
        let year = year_field.trim().parse::<f64>().map_err(|_| {
            StarError::InvalidFormat(format!("Invalid decimal year: {:?}", year_field))
        })?;

        let readings = record.iter().skip(1).map(Measurement::from).collect();

        Ok(SeaLevelObservation { year, readings })
    }
}
