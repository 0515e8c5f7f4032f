use super::{tokenize, Error, SourceLine};
use std::collections::HashMap;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

enum Label<'a> {
    Definition(&'a str),
    Reference(&'a str),
}

impl<'a> Label<'a> {
    fn of(token: &'a str) -> Option<Label<'a>> {
        if token.starts_with(':') {
            Some(Label::Reference(&token[1..]))
        } else if token.ends_with(':') {
            Some(Label::Definition(&token[..token.len() - 1]))
        } else {
            None
        }
    }
}

/// Index of every `name:` in the final token stream. Definitions are elided
/// from that stream, so each one counts only the non-label tokens before it.
fn collect(lines: &[SourceLine]) -> Result<HashMap<String, usize>> {
    let mut labels: HashMap<String, usize> = HashMap::new();
    let mut position = 0;
    for line in lines {
        for token in tokenize(line.contents()) {
            if let Some(Label::Definition(name)) = Label::of(token) {
                if labels.contains_key(name) {
                    return Err(error!(Redefinition, line; "LABEL {}:", name));
                }
                labels.insert(name.to_string(), position - labels.len());
            }
            position += 1;
        }
    }
    debug!(count = labels.len(), "labels collected");
    Ok(labels)
}

/// Replaces `:name` with the instruction index of `name:` and removes the
/// definitions.
pub fn resolve_labels(lines: Vec<SourceLine>) -> Result<Vec<SourceLine>> {
    let labels = collect(&lines)?;
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let mut tokens: Vec<String> = vec![];
        for token in tokenize(line.contents()) {
            match Label::of(token) {
                Some(Label::Reference(name)) => match labels.get(name) {
                    Some(index) => tokens.push(index.to_string()),
                    None => return Err(error!(NoSuchLabel, &line; "{}", name)),
                },
                Some(Label::Definition(_)) => {}
                None => tokens.push(token.to_string()),
            }
        }
        if !tokens.is_empty() {
            out.push(line.with_contents(tokens.join(" ")));
        }
    }
    Ok(out)
}
