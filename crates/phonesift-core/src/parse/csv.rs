use super::RawRecord;

// Commas inside double-quoted fields do not split. Each of the two
// resulting fields loses at most one leading and one trailing quote;
// doubled quotes inside a field stay as written.
pub fn parse_csv_line(line: &str) -> Option<RawRecord> {
    let fields = split_unquoted_commas(line);
    if fields.len() < 2 {
        return None;
    }

    let link = strip_outer_quotes(fields[0].trim()).to_string();
    let description = fields[1..].join(",");
    let description = strip_outer_quotes(&description).to_string();

    Some(RawRecord { link, description })
}

fn split_unquoted_commas(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

fn strip_outer_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
