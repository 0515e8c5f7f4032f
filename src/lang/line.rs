use std::rc::Rc;

/// ## One physical line of Tiny-ASM source
///
/// Every preprocessor pass rewrites `contents` and leaves the rest alone so
/// diagnostics can always point back at what the programmer typed.

#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    number: usize,
    file: Rc<str>,
    original: Rc<str>,
    contents: String,
}

impl SourceLine {
    pub fn new(number: usize, file: &str, text: &str) -> SourceLine {
        SourceLine {
            number,
            file: file.into(),
            original: text.into(),
            contents: text.to_string(),
        }
    }

    /// Lines of `text`, numbered from 1.
    pub fn from_text(file: &str, text: &str) -> Vec<SourceLine> {
        let file: Rc<str> = file.into();
        text.lines()
            .enumerate()
            .map(|(index, line)| SourceLine {
                number: index + 1,
                file: file.clone(),
                original: line.into(),
                contents: line.to_string(),
            })
            .collect()
    }

    pub fn with_contents<S: Into<String>>(&self, contents: S) -> SourceLine {
        SourceLine {
            number: self.number,
            file: self.file.clone(),
            original: self.original.clone(),
            contents: contents.into(),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.trim().is_empty()
    }
}

impl std::fmt::Display for SourceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_numbers_from_one() {
        let lines = SourceLine::from_text("<test>", "HALT\n\nMOV [0] 1");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].number(), 1);
        assert_eq!(lines[2].number(), 3);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_rewrite_keeps_provenance() {
        let line = SourceLine::new(7, "a.asm", "MOV $a 1 ; set");
        let rewritten = line.with_contents("MOV [0] 1");
        assert_eq!(rewritten.original(), "MOV $a 1 ; set");
        assert_eq!(rewritten.contents(), "MOV [0] 1");
        assert_eq!(rewritten.file(), "a.asm");
        assert_eq!(rewritten.number(), 7);
    }
}
