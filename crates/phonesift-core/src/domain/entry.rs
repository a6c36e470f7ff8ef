use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

// One classified record from one input line. `description` keeps the raw
// text from the file; only the extractor sees the normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub link: String,
    pub description: String,
    pub numbers: Vec<String>,
}

impl Entry {
    pub fn has_numbers(&self) -> bool {
        !self.numbers.is_empty()
    }

    pub fn joined_numbers(&self) -> String {
        self.numbers.join(", ")
    }
}

impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Entry", 4)?;
        state.serialize_field("link", &self.link)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("has_numbers", &self.has_numbers())?;
        state.serialize_field("numbers", &self.numbers)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;

    #[test]
    fn entry_without_numbers_is_unmatched() {
        let entry = Entry {
            link: "https://example.com".to_string(),
            description: "no contact info".to_string(),
            numbers: Vec::new(),
        };
        assert!(!entry.has_numbers());
        assert_eq!(entry.joined_numbers(), "");
    }

    #[test]
    fn entry_joins_numbers_with_comma_space() {
        let entry = Entry {
            link: "https://example.com".to_string(),
            description: "two lines".to_string(),
            numbers: vec!["5551234567".to_string(), "5559876543".to_string()],
        };
        assert_eq!(entry.joined_numbers(), "5551234567, 5559876543");
    }

    #[test]
    fn entry_serializes_derived_bucket_flag() {
        let entry = Entry {
            link: "https://example.com".to_string(),
            description: "call 5551234567".to_string(),
            numbers: vec!["5551234567".to_string()],
        };
        let value = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(value["has_numbers"], true);
        assert_eq!(value["numbers"][0], "5551234567");
    }
}
