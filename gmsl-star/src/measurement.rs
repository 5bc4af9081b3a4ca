use serde::{Deserialize, Serialize};

/// Represents a single mission's sea level reading for one time point.
/// - `Missing`: the mission did not report at that time (empty field, or
///   a field that does not parse as a finite float)
/// - `Recorded(f64)`: a sea level anomaly in millimeters
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Measurement {
    Missing,
    Recorded(f64),
}

impl Measurement {
    /// The recorded value, or `None` when missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Measurement::Recorded(value) => Some(*value),
            Measurement::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Measurement::Missing)
    }

    /// Minimum across the non-missing readings of a row.
    ///
    /// Missing readings are skipped, not treated as zero. A row with no
    /// non-missing readings reduces to `Missing`. At most one mission
    /// usually reports per time point, but overlapping mission windows
    /// yield the true minimum over every reported value.
    pub fn minimum(readings: &[Measurement]) -> Measurement {
        let mut min: Option<f64> = None;
        for value in readings.iter().filter_map(Measurement::as_f64) {
            min = Some(match min {
                Some(current) if current <= value => current,
                _ => value,
            });
        }
        min.map_or(Measurement::Missing, Measurement::Recorded)
    }
}

impl From<&str> for Measurement {
    fn from(field: &str) -> Self {
        match field.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Measurement::Recorded(value),
            _ => Measurement::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Measurement;

    #[test]
    fn test_minimum_of_multiple_readings() {
        let readings = vec![
            Measurement::Recorded(42.5),
            Measurement::Recorded(-3.1),
            Measurement::Recorded(17.0),
        ];
        assert_eq!(Measurement::minimum(&readings), Measurement::Recorded(-3.1));
    }

    #[test]
    fn test_minimum_skips_missing() {
        let readings = vec![
            Measurement::Missing,
            Measurement::Recorded(12.0),
            Measurement::Missing,
        ];
        assert_eq!(Measurement::minimum(&readings), Measurement::Recorded(12.0));
    }

    #[test]
    fn test_minimum_of_all_missing_is_missing() {
        let readings = vec![Measurement::Missing, Measurement::Missing];
        assert_eq!(Measurement::minimum(&readings), Measurement::Missing);
    }

    #[test]
    fn test_minimum_of_empty_row_is_missing() {
        assert_eq!(Measurement::minimum(&[]), Measurement::Missing);
    }

    #[test]
    fn test_zero_is_a_value_not_missing() {
        let readings = vec![Measurement::Recorded(0.0), Measurement::Missing];
        assert_eq!(Measurement::minimum(&readings), Measurement::Recorded(0.0));
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!(Measurement::from("-21.5"), Measurement::Recorded(-21.5));
        assert_eq!(Measurement::from(" 4.7 "), Measurement::Recorded(4.7));
        assert_eq!(Measurement::from(""), Measurement::Missing);
        assert_eq!(Measurement::from("   "), Measurement::Missing);
        assert_eq!(Measurement::from("---"), Measurement::Missing);
        assert_eq!(Measurement::from("NaN"), Measurement::Missing);
    }
}
