use super::{tokenize, Error, SourceLine};

type Result<T> = std::result::Result<T, Error>;

fn escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0C'),
        'v' => Some('\x0B'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

fn is_char(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'')
}

fn char_to_int(token: &str, line: &SourceLine) -> Result<String> {
    let inner: Vec<char> = token[1..token.len() - 1].chars().collect();
    let c = match inner.as_slice() {
        [c] => Some(*c),
        ['\\', e] => escape(*e),
        _ => None,
    };
    match c {
        Some(c) => Ok((c as u32).to_string()),
        None => Err(error!(SyntaxError, line; "INVALID CHARACTER {}", token)),
    }
}

/// Replaces `'c'` and escapes like `'\n'` with their character codes.
pub fn convert_chars(lines: Vec<SourceLine>) -> Result<Vec<SourceLine>> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        // ' ' must become a number before anything splits on whitespace
        let contents = line.contents().replace("' '", &(' ' as u32).to_string());
        let mut tokens = vec![];
        for token in tokenize(&contents) {
            if is_char(token) {
                tokens.push(char_to_int(token, &line)?);
            } else {
                tokens.push(token.to_string());
            }
        }
        out.push(line.with_contents(tokens.join(" ")));
    }
    Ok(out)
}
