use super::SourceLine;

pub struct Error {
    code: ErrorCode,
    line: Option<SourceLine>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(format!($($msg)+))
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident, $line:expr; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message(format!($($msg)+))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> Option<&SourceLine> {
        self.line.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> Category {
        self.code.category()
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Attaches source context. Context already present is kept, so
    /// the innermost (most precise) line wins.
    pub fn in_line(self, line: &SourceLine) -> Error {
        if self.line.is_some() {
            return self;
        }
        Error {
            line: Some(line.clone()),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    InvalidArgument = 3,
    UnknownMnemonic = 10,
    NoSuchConstant = 11,
    NoSuchLabel = 12,
    UnknownSubroutine = 13,
    Redefinition = 14,
    ConstantRedefined = 15,
    OutOfMemory = 20,
    MissingHalt = 30,
    InfiniteLoop = 31,
    ArityMismatch = 32,
    InvalidAddress = 33,
    UnknownOpcode = 34,
    FileNotFound = 40,
    IoError = 41,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Syntax,
    Name,
    Resource,
    Runtime,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    SyntaxError,
    FatalError,
}

impl ErrorCode {
    pub fn category(self) -> Category {
        use ErrorCode::*;
        match self {
            SyntaxError | InvalidArgument => Category::Syntax,
            UnknownMnemonic | NoSuchConstant | NoSuchLabel | UnknownSubroutine | Redefinition
            | ConstantRedefined => Category::Name,
            OutOfMemory => Category::Resource,
            MissingHalt | InfiniteLoop | ArityMismatch | InvalidAddress | UnknownOpcode => {
                Category::Runtime
            }
            FileNotFound | IoError => Category::Io,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ErrorCode::ConstantRedefined => Severity::Warning,
            ErrorCode::SyntaxError | ErrorCode::InvalidArgument => Severity::SyntaxError,
            _ => Severity::FatalError,
        }
    }

    fn title(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "SYNTAX ERROR",
            InvalidArgument => "INVALID ARGUMENT",
            UnknownMnemonic => "UNKNOWN MNEMONIC",
            NoSuchConstant => "NO SUCH CONSTANT",
            NoSuchLabel => "NO SUCH LABEL",
            UnknownSubroutine => "UNKNOWN SUBROUTINE",
            Redefinition => "REDEFINITION",
            ConstantRedefined => "CONSTANT REDEFINED",
            OutOfMemory => "OUT OF MEMORY",
            MissingHalt => "MISSING HALT",
            InfiniteLoop => "INFINITE LOOP",
            ArityMismatch => "WRONG NUMBER OF ARGUMENTS",
            InvalidAddress => "INVALID ADDRESS",
            UnknownOpcode => "UNKNOWN OPCODE",
            FileNotFound => "FILE NOT FOUND",
            IoError => "I/O ERROR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::SyntaxError => write!(f, "SYNTAX ERROR"),
            Severity::FatalError => write!(f, "FATAL ERROR"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code.title())?;
        if let Some(line) = &self.line {
            write!(f, " IN {} LINE {}", line.file(), line.number())?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::SourceLine;

    #[test]
    fn test_display_with_context() {
        let line = SourceLine::new(3, "main.asm", "MOV $a 1");
        let e = error!(NoSuchConstant, &line; "${}", "a");
        assert_eq!(e.to_string(), "NO SUCH CONSTANT IN main.asm LINE 3; $a");
        assert_eq!(e.category(), Category::Name);
        assert_eq!(e.severity(), Severity::FatalError);
    }

    #[test]
    fn test_innermost_line_wins() {
        let inner = SourceLine::new(1, "a.asm", "HEY");
        let outer = SourceLine::new(9, "b.asm", "#import a.asm");
        let e = error!(UnknownMnemonic, &inner).in_line(&outer);
        assert_eq!(e.line().map(|l| l.number()), Some(1));
    }

    #[test]
    fn test_warning_severity() {
        assert_eq!(error!(ConstantRedefined).severity(), Severity::Warning);
        assert_eq!(error!(InvalidArgument).severity(), Severity::SyntaxError);
        assert_eq!(error!(MissingHalt).to_string(), "MISSING HALT");
    }
}
