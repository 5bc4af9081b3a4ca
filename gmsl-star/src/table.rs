use csv::ReaderBuilder;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StarError};
use crate::measurement::Measurement;
use crate::observation::SeaLevelObservation;

/// Default source: NOAA STAR global mean sea level, seasonal signals
/// removed, referenced to a 90-day mean.
///
/// See: <https://www.star.nesdis.noaa.gov/socd/lsa/SeaLevelRise/>
pub const SEA_LEVEL_CSV_URL: &str =
    "https://www.star.nesdis.noaa.gov/socd/lsa/SeaLevelRise/slr/slr_sla_gbl_free_ref_90.csv";

/// Number of metadata lines preceding the header row in the STAR CSV.
pub const PREAMBLE_ROWS: usize = 5;

/// The parsed sea level table: mission names from the header row plus the
/// observations in file order. Immutable once parsed; the derived minimum
/// series is computed from it, never written back.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SeaLevelTable {
    /// Measurement column names, e.g. "TOPEX/Poseidon", "Jason-1"
    pub missions: Vec<String>,
    /// One row per time point, ordered as in the file
    pub observations: Vec<SeaLevelObservation>,
}

impl SeaLevelTable {
    /// Fetches the sea level CSV and parses it into a table.
    ///
    /// A single failed attempt terminates the run; there is no retry.
    pub async fn fetch(client: &Client, url: &str) -> Result<Self> {
        let body = Self::http_request_body(client, url).await?;
        Self::parse(&body)
    }

    /// Fetches the raw CSV response body.
    pub async fn http_request_body(client: &Client, url: &str) -> Result<String> {
        let response = client.get(url).send().await?;
        Ok(response.text().await?)
    }

    /// Parses a STAR sea level CSV body.
    ///
    /// Skips the fixed metadata preamble, reads the header row (year
    /// column first, then one column per mission), and parses every
    /// remaining record.
    pub fn parse(body: &str) -> Result<Self> {
        let mut lines = body.splitn(PREAMBLE_ROWS + 1, '\n');
        let mut skipped = 0;
        for _ in 0..PREAMBLE_ROWS {
            if lines.next().is_some() {
                skipped += 1;
            }
        }
        let rest = lines.next().ok_or(StarError::MissingPreamble {
            expected: PREAMBLE_ROWS,
            found: skipped,
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(rest.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(StarError::InvalidFormat(format!(
                "Expected a year column plus at least one mission column, found {} columns",
                headers.len()
            )));
        }
        let columns = headers.len();
        let missions: Vec<String> = headers
            .iter()
            .skip(1)
            .map(|name| name.trim().to_string())
            .collect();
        debug!("header columns: {:?}", missions);

        let mut observations = Vec::new();
        for record in reader.records() {
            let record = record?;
            observations.push(SeaLevelObservation::from_record(&record, columns)?);
        }
        if observations.is_empty() {
            return Err(StarError::EmptyTable);
        }
        debug!("parsed {} observations", observations.len());

        Ok(SeaLevelTable {
            missions,
            observations,
        })
    }

    /// The derived minimum series: one `(year, minimum)` pair per row,
    /// in row order. Rows where every mission is missing carry
    /// `Measurement::Missing`.
    pub fn minimum_series(&self) -> Vec<(f64, Measurement)> {
        self.observations
            .iter()
            .map(|observation| (observation.year, observation.minimum()))
            .collect()
    }

    /// The fit input: the minimum series restricted to rows with a
    /// non-missing minimum.
    pub fn fit_points(&self) -> Vec<(f64, f64)> {
        self.observations
            .iter()
            .filter_map(|observation| {
                observation
                    .minimum()
                    .as_f64()
                    .map(|minimum| (observation.year, minimum))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit_line;

    const STR_RESULT: &str = "\
NOAA/NESDIS/STAR
Global mean sea level from satellite altimetry
Seasonal signals removed
Units: millimeters
Referenced to a 90-day mean
year,TOPEX/Poseidon,Jason-1,Jason-2,Jason-3,Sentinel-6MF
1992.9614,-21.5,,,,
1993.0123,-25.1,,,,
1994.0400,,,,,
2002.5000,,-3.2,,,
2008.5000,,,4.7,,
2016.5000,,,,48.2,
2021.5000,,,,,62.0
";

    #[test]
    fn test_parse_table() {
        let table = SeaLevelTable::parse(STR_RESULT).unwrap();
        assert_eq!(
            table.missions,
            vec![
                "TOPEX/Poseidon",
                "Jason-1",
                "Jason-2",
                "Jason-3",
                "Sentinel-6MF"
            ]
        );
        assert_eq!(table.observations.len(), 7);
        assert!((table.observations[0].year - 1992.9614).abs() < f64::EPSILON);
        assert_eq!(
            table.observations[0].readings[0],
            Measurement::Recorded(-21.5)
        );
        assert_eq!(table.observations[0].readings[1], Measurement::Missing);
    }

    #[test]
    fn test_minimum_series_follows_row_order() {
        let table = SeaLevelTable::parse(STR_RESULT).unwrap();
        let series = table.minimum_series();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].1, Measurement::Recorded(-21.5));
        assert_eq!(series[2].1, Measurement::Missing);
        assert_eq!(series[6].1, Measurement::Recorded(62.0));
    }

    #[test]
    fn test_fit_points_exclude_missing_rows() {
        let table = SeaLevelTable::parse(STR_RESULT).unwrap();
        let points = table.fit_points();
        assert_eq!(points.len(), 6);
        assert!(points.iter().all(|(year, _)| *year != 1994.04));
    }

    #[test]
    fn test_parse_truncated_preamble() {
        let result = SeaLevelTable::parse("NOAA/NESDIS/STAR\nGlobal mean sea level");
        assert!(matches!(
            result,
            Err(StarError::MissingPreamble {
                expected: 5,
                found: 2
            })
        ));
    }

    #[test]
    fn test_parse_header_without_missions() {
        let body = "1\n2\n3\n4\n5\nyear\n1992.9614\n";
        let result = SeaLevelTable::parse(body);
        assert!(matches!(result, Err(StarError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_no_data_rows() {
        let body = "1\n2\n3\n4\n5\nyear,TOPEX/Poseidon,Jason-1\n";
        let result = SeaLevelTable::parse(body);
        assert!(matches!(result, Err(StarError::EmptyTable)));
    }

    #[test]
    fn test_parse_ragged_row() {
        let body = "1\n2\n3\n4\n5\nyear,TOPEX/Poseidon,Jason-1\n1992.9614,-21.5\n";
        let result = SeaLevelTable::parse(body);
        assert!(matches!(result, Err(StarError::CsvParse(_))));
    }

    #[test]
    fn test_synthetic_pipeline_end_to_end() {
        let body = "\
synthetic dataset
metadata line
metadata line
metadata line
metadata line
year,A,B,C
2000,10,,
2001,,12,
2002,,,14
2003,,,16
";
        let table = SeaLevelTable::parse(body).unwrap();
        let series = table.minimum_series();
        let minima: Vec<f64> = series
            .iter()
            .filter_map(|(_, minimum)| minimum.as_f64())
            .collect();
        assert_eq!(minima, vec![10.0, 12.0, 14.0, 16.0]);

        let fit = fit_line(&table.fit_points()).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-9);
    }

    #[tokio::test]
    #[ignore = "fetches the live NOAA STAR dataset"]
    async fn test_fetch_live_dataset() {
        let client = Client::new();
        let table = SeaLevelTable::fetch(&client, SEA_LEVEL_CSV_URL).await.unwrap();
        assert_eq!(table.missions.len(), 5);
        assert!(table.observations.len() > 1000);
    }
}
