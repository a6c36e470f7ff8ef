use crate::domain::Entry;
use crate::extract::extract_numbers;
use crate::normalize::normalize_description;
use crate::parse::{InputFormat, RawRecord};

// One extraction pass over one input file. Owns the two ordered buckets
// for the lifetime of that pass; a new file gets a new session.
#[derive(Debug, Default)]
pub struct Session {
    with_numbers: Vec<Entry>,
    without_numbers: Vec<Entry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(content: &str, format: InputFormat) -> Self {
        let mut session = Self::new();
        for line in content.lines() {
            let Some(record) = format.parse_line(line) else {
                continue;
            };
            session.ingest(record);
        }
        session
    }

    pub fn ingest(&mut self, record: RawRecord) {
        let Some(entry) = classify(record) else {
            return;
        };
        if entry.has_numbers() {
            self.with_numbers.push(entry);
        } else {
            self.without_numbers.push(entry);
        }
    }

    pub fn with_numbers(&self) -> &[Entry] {
        &self.with_numbers
    }

    pub fn without_numbers(&self) -> &[Entry] {
        &self.without_numbers
    }

    pub fn matched(&self) -> usize {
        self.with_numbers.len()
    }

    pub fn unmatched(&self) -> usize {
        self.without_numbers.len()
    }

    pub fn total(&self) -> usize {
        self.with_numbers.len() + self.without_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.with_numbers.is_empty() && self.without_numbers.is_empty()
    }

    // Matched entries first, then unmatched; the all-data export order.
    pub fn all_entries(&self) -> Vec<Entry> {
        let mut all = Vec::with_capacity(self.total());
        all.extend(self.with_numbers.iter().cloned());
        all.extend(self.without_numbers.iter().cloned());
        all
    }
}

// Records with an empty link are discarded. Any description is accepted;
// zero matches just lands the entry in the unmatched bucket.
pub fn classify(record: RawRecord) -> Option<Entry> {
    if record.link.is_empty() {
        return None;
    }

    let cleaned = normalize_description(&record.description);
    let numbers = extract_numbers(&cleaned);

    Some(Entry {
        link: record.link,
        description: record.description,
        numbers,
    })
}
