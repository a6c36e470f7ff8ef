pub mod csv;
pub mod tab;

pub use csv::parse_csv_line;
pub use tab::parse_tab_line;

use crate::error::CoreError;
use std::path::Path;
use std::str::FromStr;

// One input line split into link and description. The link arrives
// trimmed; the description keeps its original spacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Tab,
    Csv,
}

impl InputFormat {
    // A file name ending in `.csv` (case-sensitive) selects the CSV
    // parser; anything else is treated as tab-delimited.
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".csv") {
            Self::Csv
        } else {
            Self::Tab
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(Self::from_file_name)
            .unwrap_or(Self::Tab)
    }

    pub fn parse_line(self, line: &str) -> Option<RawRecord> {
        match self {
            Self::Tab => parse_tab_line(line),
            Self::Csv => parse_csv_line(line),
        }
    }
}

impl FromStr for InputFormat {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "tab" => Ok(Self::Tab),
            "csv" => Ok(Self::Csv),
            _ => Err(CoreError::InvalidInputFormat(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InputFormat;
    use std::path::Path;

    #[test]
    fn format_sniff_matches_csv_extension() {
        assert_eq!(InputFormat::from_path(Path::new("leads.csv")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("leads.txt")), InputFormat::Tab);
        assert_eq!(InputFormat::from_path(Path::new("leads")), InputFormat::Tab);
    }

    #[test]
    fn format_sniff_is_case_sensitive() {
        assert_eq!(InputFormat::from_path(Path::new("leads.CSV")), InputFormat::Tab);
    }

    #[test]
    fn format_parses_from_str() {
        assert_eq!("tab".parse::<InputFormat>().unwrap(), InputFormat::Tab);
        assert_eq!("csv".parse::<InputFormat>().unwrap(), InputFormat::Csv);
        assert!("tsv".parse::<InputFormat>().is_err());
    }
}
