use super::{Address, Opcode};
use crate::error;
use crate::lang::{Error, SourceLine};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Assembled instruction stream
///
/// A flat list of words: each opcode followed by its operands. Programs
/// that came from source remember which line produced each instruction.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    words: Vec<u64>,
    lines: BTreeMap<Address, SourceLine>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, line: &SourceLine, opcode: &Opcode, operands: &[u64]) {
        self.lines.insert(self.words.len(), line.clone());
        self.words.push(opcode.byte as u64);
        self.words.extend_from_slice(operands);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<u64> {
        self.words.get(addr).copied()
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Source line of the instruction at or before `addr`.
    pub fn line_for(&self, addr: Address) -> Option<&SourceLine> {
        self.lines.range(..=addr).next_back().map(|(_, line)| line)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut words = self.words.iter();
        if let Some(word) = words.next() {
            write!(f, "0x{:02X}", word)?;
        }
        for word in words {
            write!(f, " 0x{:02X}", word)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Program {
    type Err = Error;

    /// Parses the assembled form, e.g. `0x08 0x00 0x05 0xFF`.
    fn from_str(s: &str) -> Result<Program> {
        let mut words = vec![];
        for token in s.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .ok_or_else(|| error!(SyntaxError; "NOT A HEX WORD: {}", token))?;
            match u64::from_str_radix(digits, 16) {
                Ok(word) => words.push(word),
                Err(_) => return Err(error!(InvalidArgument; "NOT A HEX WORD: {}", token)),
            }
        }
        Ok(Program {
            words,
            lines: BTreeMap::new(),
        })
    }
}
