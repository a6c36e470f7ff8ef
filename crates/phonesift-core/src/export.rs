use crate::domain::Entry;
use crate::error::CoreError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::str::FromStr;

pub const MISSING_NUMBER_NOTICE: &str = "PLEASE CHECK FOR NUMBER MANUALLY. WE COULDN'T FIND ONE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
        }
    }

    pub fn render(self, entries: &[Entry]) -> String {
        match self {
            Self::Txt => export_txt(entries),
            Self::Csv => export_csv(entries),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "txt" => Ok(Self::Txt),
            "csv" => Ok(Self::Csv),
            _ => Err(CoreError::InvalidExportFormat(raw.to_string())),
        }
    }
}

// Which entries an export covers. Unmatched entries are never exported on
// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    NumbersOnly,
    All,
}

impl Dataset {
    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::NumbersOnly => "extracted-numbers",
            Self::All => "extracted-all-data",
        }
    }
}

pub fn export_txt(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let numbers = if entry.has_numbers() {
                entry.joined_numbers()
            } else {
                MISSING_NUMBER_NOTICE.to_string()
            };
            format!("{}\t{}", entry.link, numbers)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_csv(entries: &[Entry]) -> String {
    let mut out = String::from("URL,Phone Numbers\n");
    let rows = entries
        .iter()
        .map(|entry| {
            let numbers = if entry.has_numbers() {
                escape_csv(&entry.joined_numbers())
            } else {
                MISSING_NUMBER_NOTICE.to_string()
            };
            format!("\"{}\",\"{}\"", escape_csv(&entry.link), numbers)
        })
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&rows);
    out
}

fn escape_csv(value: &str) -> String {
    value.replace('"', "\"\"")
}

// `{prefix}-{timestamp}.{ext}`, with `:` and `.` in the ISO 8601 stamp
// replaced by `-` so the name stays filesystem-safe.
pub fn export_file_name(dataset: Dataset, format: ExportFormat, now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}-{}.{}", dataset.file_prefix(), stamp, format.extension())
}

#[cfg(test)]
mod tests {
    use super::{
        export_csv, export_file_name, export_txt, Dataset, ExportFormat, MISSING_NUMBER_NOTICE,
    };
    use crate::domain::Entry;
    use chrono::{TimeZone, Utc};

    fn matched() -> Entry {
        Entry {
            link: "https://x.com".to_string(),
            description: "Call us at (555) 123-4567".to_string(),
            numbers: vec!["5551234567".to_string()],
        }
    }

    fn unmatched() -> Entry {
        Entry {
            link: "https://y.com".to_string(),
            description: "No contact info".to_string(),
            numbers: Vec::new(),
        }
    }

    #[test]
    fn txt_export_tabs_link_and_numbers() {
        let data = export_txt(&[matched()]);
        assert_eq!(data, "https://x.com\t5551234567");
    }

    #[test]
    fn txt_export_writes_notice_for_unmatched() {
        let data = export_txt(&[matched(), unmatched()]);
        let lines: Vec<&str> = data.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], format!("https://y.com\t{}", MISSING_NUMBER_NOTICE));
    }

    #[test]
    fn csv_export_quotes_every_field() {
        let data = export_csv(&[matched()]);
        let lines: Vec<&str> = data.split('\n').collect();
        assert_eq!(lines[0], "URL,Phone Numbers");
        assert_eq!(lines[1], "\"https://x.com\",\"5551234567\"");
    }

    #[test]
    fn csv_export_doubles_embedded_quotes() {
        let entry = Entry {
            link: "a\"b".to_string(),
            description: String::new(),
            numbers: vec!["\"1,2\"".to_string()],
        };
        let data = export_csv(&[entry]);
        let lines: Vec<&str> = data.split('\n').collect();
        assert_eq!(lines[1], "\"a\"\"b\",\"\"\"1,2\"\"\"");
    }

    #[test]
    fn csv_export_has_no_trailing_newline() {
        let data = export_csv(&[matched()]);
        assert!(!data.ends_with('\n'));
    }

    #[test]
    fn file_name_encodes_dataset_format_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 34, 56).unwrap();
        let name = export_file_name(Dataset::NumbersOnly, ExportFormat::Txt, now);
        assert_eq!(name, "extracted-numbers-2026-08-06T12-34-56-000Z.txt");

        let name = export_file_name(Dataset::All, ExportFormat::Csv, now);
        assert_eq!(name, "extracted-all-data-2026-08-06T12-34-56-000Z.csv");
    }

    #[test]
    fn export_format_parses_known_names() {
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
