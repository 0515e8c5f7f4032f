use super::{
    convert_chars, expand_subroutines, import, resolve_labels, strip_comments,
    substitute_constants, Diagnostics, Error, FileSystem, Source, SourceLine, Strict,
};
use crate::config::Config;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## The preprocessor pipeline
///
/// Runs the passes in their fixed order: imports, comments, subroutines,
/// constants, labels, characters. Each pass relies on the ones before it,
/// e.g. labels can only be counted once subroutines and constants are gone.
pub struct Preprocessor<'a> {
    config: Config,
    source: Box<dyn Source + 'a>,
    diagnostics: Box<dyn Diagnostics + 'a>,
}

impl<'a> Default for Preprocessor<'a> {
    fn default() -> Preprocessor<'a> {
        Preprocessor {
            config: Config::default(),
            source: Box::new(FileSystem),
            diagnostics: Box::new(Strict),
        }
    }
}

impl<'a> Preprocessor<'a> {
    pub fn new() -> Preprocessor<'a> {
        Preprocessor::default()
    }

    pub fn config(self, config: Config) -> Preprocessor<'a> {
        Preprocessor { config, ..self }
    }

    pub fn source<S: Source + 'a>(self, source: S) -> Preprocessor<'a> {
        Preprocessor {
            source: Box::new(source),
            ..self
        }
    }

    pub fn diagnostics<D: Diagnostics + 'a>(self, diagnostics: D) -> Preprocessor<'a> {
        Preprocessor {
            diagnostics: Box::new(diagnostics),
            ..self
        }
    }

    pub fn run(&mut self, file: &str, text: &str) -> Result<Vec<SourceLine>> {
        self.run_lines(SourceLine::from_text(file, text))
    }

    pub fn run_lines(&mut self, lines: Vec<SourceLine>) -> Result<Vec<SourceLine>> {
        debug!(lines = lines.len(), "preprocessing");
        let lines = import(lines, &mut *self.source)?;
        let lines = strip_comments(lines);
        let lines = expand_subroutines(lines)?;
        let lines = substitute_constants(lines, &self.config, &mut *self.diagnostics)?;
        let lines = resolve_labels(lines)?;
        convert_chars(lines)
    }
}
