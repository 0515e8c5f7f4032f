use super::{Mnemonic, Opcode, Program};
use crate::config::Config;
use crate::error;
use crate::lang::{tokenize, Diagnostics, Error, Kind, Preprocessor, Source, SourceLine};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Assembles source text with the default configuration, reading imports
/// from the file system and treating warnings as errors.
pub fn assemble(text: &str) -> Result<Program> {
    Assembler::new().assemble("<source>", text)
}

/// ## Tiny-ASM assembler
///
/// Preprocesses source and turns each instruction into its opcode followed
/// by its operands.
#[derive(Default)]
pub struct Assembler<'a> {
    preprocessor: Preprocessor<'a>,
}

impl<'a> Assembler<'a> {
    pub fn new() -> Assembler<'a> {
        Assembler::default()
    }

    pub fn config(self, config: Config) -> Assembler<'a> {
        Assembler {
            preprocessor: self.preprocessor.config(config),
        }
    }

    pub fn source<S: Source + 'a>(self, source: S) -> Assembler<'a> {
        Assembler {
            preprocessor: self.preprocessor.source(source),
        }
    }

    pub fn diagnostics<D: Diagnostics + 'a>(self, diagnostics: D) -> Assembler<'a> {
        Assembler {
            preprocessor: self.preprocessor.diagnostics(diagnostics),
        }
    }

    /// Runs only the preprocessor.
    pub fn preprocess(&mut self, file: &str, text: &str) -> Result<Vec<SourceLine>> {
        self.preprocessor.run(file, text)
    }

    pub fn assemble(&mut self, file: &str, text: &str) -> Result<Program> {
        let lines = self.preprocessor.run(file, text)?;
        let program = codegen(&lines)?;
        debug!(words = program.len(), "assembled");
        Ok(program)
    }
}

/// Assembles already preprocessed lines. Operands must be on the same line
/// as their mnemonic.
pub fn codegen(lines: &[SourceLine]) -> Result<Program> {
    let mut program = Program::new();
    for line in lines {
        let mut tokens = tokenize(line.contents()).into_iter();
        while let Some(token) = tokens.next() {
            let mnemonic = match Mnemonic::from_name(token) {
                Some(mnemonic) => mnemonic,
                None => return Err(error!(UnknownMnemonic, line; "{}", token)),
            };
            let mut operands: Vec<&str> = Vec::with_capacity(mnemonic.arity());
            for _ in 0..mnemonic.arity() {
                match tokens.next() {
                    Some(operand) => operands.push(operand),
                    None => {
                        return Err(error!(SyntaxError, line;
                            "{} EXPECTS {} OPERANDS", mnemonic, mnemonic.arity()))
                    }
                }
            }
            let kinds: Vec<Kind> = operands.iter().map(|s| Kind::of(s)).collect();
            let opcode = match Opcode::select(mnemonic, &kinds) {
                Some(opcode) => opcode,
                None => {
                    let kinds: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
                    return Err(error!(SyntaxError, line;
                        "{} DOES NOT TAKE ({})", mnemonic, kinds.join(", ")));
                }
            };
            let mut words = Vec::with_capacity(operands.len());
            for operand in operands {
                words.push(parse_operand(operand, line)?);
            }
            trace!(%mnemonic, byte = opcode.byte, ?words);
            program.push(line, opcode, &words);
        }
    }
    Ok(program)
}

fn parse_operand(operand: &str, line: &SourceLine) -> Result<u64> {
    let digits = operand.trim_start_matches('[').trim_end_matches(']');
    match digits.parse::<u64>() {
        Ok(n) => Ok(n),
        Err(_) => Err(error!(InvalidArgument, line; "{}", operand)),
    }
}
