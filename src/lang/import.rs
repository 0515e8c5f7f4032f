use super::{Error, SourceLine};
use std::collections::{HashMap, HashSet, VecDeque};
use std::io::ErrorKind;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

const DIRECTIVE: &str = "#import";

/// ## Where imported files come from
pub trait Source {
    fn read(&mut self, path: &str) -> std::io::Result<String>;
}

/// Reads paths relative to the working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystem;

impl Source for FileSystem {
    fn read(&mut self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory files keyed by path.
impl Source for HashMap<String, String> {
    fn read(&mut self, path: &str) -> std::io::Result<String> {
        match self.get(path) {
            Some(text) => Ok(text.clone()),
            None => Err(std::io::Error::new(ErrorKind::NotFound, path.to_string())),
        }
    }
}

fn directive(line: &SourceLine) -> Option<&str> {
    let contents = line.contents().trim();
    if contents.starts_with(DIRECTIVE) {
        let path = contents[DIRECTIVE.len()..].trim();
        let bare = path.strip_prefix('<').and_then(|p| p.strip_suffix('>'));
        Some(bare.unwrap_or(path).trim())
    } else {
        None
    }
}

/// Replaces every `#import <path>` with the lines of that file, recursively.
/// A path is expanded at most once per compilation; later imports of the
/// same path vanish.
pub fn import(lines: Vec<SourceLine>, source: &mut dyn Source) -> Result<Vec<SourceLine>> {
    let mut pending: VecDeque<SourceLine> = lines.into();
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(pending.len());
    while let Some(line) = pending.pop_front() {
        let path = match directive(&line) {
            Some(path) => path.to_string(),
            None => {
                out.push(line);
                continue;
            }
        };
        if path.is_empty() {
            return Err(error!(SyntaxError, &line; "MISSING PATH"));
        }
        if seen.contains(&path) {
            debug!(%path, "already imported");
            continue;
        }
        let text = source.read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => error!(FileNotFound, &line; "{}", path),
            _ => error!(IoError, &line; "{}: {}", path, e),
        })?;
        debug!(%path, "importing");
        for imported in SourceLine::from_text(&path, &text).into_iter().rev() {
            pending.push_front(imported);
        }
        seen.insert(path);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn files(list: &[(&str, &str)]) -> HashMap<String, String> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn contents(lines: &[SourceLine]) -> Vec<&str> {
        lines.iter().map(|l| l.contents()).collect()
    }

    #[test]
    fn test_nested() {
        let mut fs = files(&[
            ("import.asm", "MOV [1] 1\n#import import2.asm\nMOV [3] 1"),
            ("import2.asm", "MOV [2] 1\n#import import.asm"),
        ]);
        let code = SourceLine::from_text("<test>", "MOV [0] 1\n#import import.asm");
        let lines = import(code, &mut fs).unwrap();
        assert_eq!(
            contents(&lines),
            vec!["MOV [0] 1", "MOV [1] 1", "MOV [2] 1", "MOV [3] 1"]
        );
        assert_eq!(lines[2].file(), "import2.asm");
        assert_eq!(lines[2].number(), 1);
    }

    #[test]
    fn test_recursive() {
        let mut fs = files(&[
            ("import.asm", "MOV [1] 1\n#import import2.asm\nMOV [3] 1"),
            ("import2.asm", "#import import.asm\nMOV [2] 1"),
        ]);
        let code = SourceLine::from_text("<test>", "MOV [0] 1\n#import import.asm");
        let lines = import(code, &mut fs).unwrap();
        assert_eq!(
            contents(&lines),
            vec!["MOV [0] 1", "MOV [1] 1", "MOV [2] 1", "MOV [3] 1"]
        );
    }

    #[test]
    fn test_nonexistent() {
        let mut fs = files(&[]);
        let code = SourceLine::from_text("<test>", "MOV [0] 1\n#import import.asm");
        let e = import(code, &mut fs).unwrap_err();
        assert_eq!(e.code(), ErrorCode::FileNotFound);
        assert_eq!(e.line().map(|l| l.number()), Some(2));
    }

    #[test]
    fn test_angle_brackets() {
        let mut fs = files(&[("lib/a.asm", "HALT")]);
        let code = SourceLine::from_text("<test>", "#import <lib/a.asm>\n#import lib/a.asm");
        assert_eq!(contents(&import(code, &mut fs).unwrap()), vec!["HALT"]);
    }
}
