use super::RawRecord;

// Lines with fewer than two fields are skipped. Extra fields fold back
// into the description with their tabs intact.
pub fn parse_tab_line(line: &str) -> Option<RawRecord> {
    let mut fields = line.split('\t');
    let link = fields.next()?;
    let rest: Vec<&str> = fields.collect();
    if rest.is_empty() {
        return None;
    }

    Some(RawRecord {
        link: link.trim().to_string(),
        description: rest.join("\t"),
    })
}
