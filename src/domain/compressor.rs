// Compressor domain model and the static sensor catalog
use serde::Serialize;

/// The five monitored compressor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressorId {
    C200A,
    C200B,
    C200C,
    C200D,
    C90Plus,
}

pub const ALL_COMPRESSORS: [CompressorId; 5] = [
    CompressorId::C200A,
    CompressorId::C200B,
    CompressorId::C200C,
    CompressorId::C200D,
    CompressorId::C90Plus,
];

const SENSORS_PER_UNIT: usize = 5;

// Units 200A/200B carry E1/E2 bearing sensors; the later units use the
// E-DE/E-NDE naming. The blank label is an unassigned spare slot.
const BEARING_LABELS_200AB: [&str; SENSORS_PER_UNIT] = ["NDE", "DE", "E1", "E2", " "];
const BEARING_LABELS_LATER: [&str; SENSORS_PER_UNIT] = ["NDE", "DE", "E-DE", "E-NDE", " "];

impl CompressorId {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::C200A),
            "2" => Some(Self::C200B),
            "3" => Some(Self::C200C),
            "4" => Some(Self::C200D),
            "5" => Some(Self::C90Plus),
            _ => None,
        }
    }

    /// Identifier used by the raw-data endpoint and the dropdown value.
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::C200A => "1",
            Self::C200B => "2",
            Self::C200C => "3",
            Self::C200D => "4",
            Self::C90Plus => "5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::C200A => "200A",
            Self::C200B => "200B",
            Self::C200C => "200C",
            Self::C200D => "200D",
            Self::C90Plus => "90+",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            Self::C200A => 0,
            Self::C200B => 1,
            Self::C200C => 2,
            Self::C200D => 3,
            Self::C90Plus => 4,
        }
    }

    /// Sensor options for this unit. Sensor ids are the contiguous decimal
    /// range 0..=24, five per unit in unit order.
    pub fn sensor_options(self) -> Vec<SensorOption> {
        let labels = match self {
            Self::C200A | Self::C200B => &BEARING_LABELS_200AB,
            _ => &BEARING_LABELS_LATER,
        };
        let base = self.ordinal() * SENSORS_PER_UNIT;

        labels
            .iter()
            .enumerate()
            .map(|(offset, label)| SensorOption::new(*label, (base + offset).to_string()))
            .collect()
    }
}

/// One entry in the sensor dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensorOption {
    pub label: String,
    pub value: String,
}

impl SensorOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Sensor options for a raw compressor id as received from the UI.
/// An unknown id yields an empty list rather than an error.
pub fn lookup_sensor_options(raw_id: &str) -> Vec<SensorOption> {
    CompressorId::parse(raw_id)
        .map(CompressorId::sensor_options)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_has_sensor_options() {
        for compressor in ALL_COMPRESSORS {
            assert!(!compressor.sensor_options().is_empty());
        }
    }

    #[test]
    fn unit_200a_catalog() {
        let options = lookup_sensor_options("1");
        let expected: Vec<(&str, &str)> = vec![
            ("NDE", "0"),
            ("DE", "1"),
            ("E1", "2"),
            ("E2", "3"),
            (" ", "4"),
        ];
        let actual: Vec<(&str, &str)> = options
            .iter()
            .map(|o| (o.label.as_str(), o.value.as_str()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn unit_200c_catalog() {
        let options = lookup_sensor_options("3");
        let expected: Vec<(&str, &str)> = vec![
            ("NDE", "10"),
            ("DE", "11"),
            ("E-DE", "12"),
            ("E-NDE", "13"),
            (" ", "14"),
        ];
        let actual: Vec<(&str, &str)> = options
            .iter()
            .map(|o| (o.label.as_str(), o.value.as_str()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn sensor_ids_are_contiguous_across_units() {
        let all_values: Vec<String> = ALL_COMPRESSORS
            .iter()
            .flat_map(|c| c.sensor_options())
            .map(|o| o.value)
            .collect();
        let expected: Vec<String> = (0..25).map(|i| i.to_string()).collect();
        assert_eq!(all_values, expected);
    }

    #[test]
    fn unknown_id_yields_empty_options() {
        assert!(lookup_sensor_options("7").is_empty());
        assert!(lookup_sensor_options("").is_empty());
        assert!(CompressorId::parse("200A").is_none());
    }
}
