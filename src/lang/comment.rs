use super::SourceLine;

pub const SEPARATOR: char = ';';

/// Drops comment lines and trailing comments, then lines left empty.
pub fn strip_comments(lines: Vec<SourceLine>) -> Vec<SourceLine> {
    lines
        .into_iter()
        .filter_map(|line| {
            let contents = line.contents().trim();
            if contents.starts_with(SEPARATOR) {
                return None;
            }
            let code = match contents.find(SEPARATOR) {
                Some(index) => contents[..index].trim(),
                None => contents,
            };
            if code.is_empty() {
                None
            } else {
                Some(line.with_contents(code))
            }
        })
        .collect()
}
