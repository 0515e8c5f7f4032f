extern crate ansi_term;
extern crate ctrlc;
extern crate mortal;
use crate::config::Config;
use crate::lang::{Diagnostics, Error, FileSystem, Severity, Source};
use crate::mach::{Assembler, Event, Input, Runtime};
use crate::error;
use ansi_term::{Colour, Style};
use mortal::{Event as TermEvent, Key, PrepareConfig, Signal, Terminal};
use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

type Result<T> = std::result::Result<T, Error>;

const USAGE: &str = "USAGE: tiny [run|asm|pp] FILE";

pub fn main() {
    init_logging();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = main_loop(&args, interrupted) {
        report(&error);
        std::process::exit(1);
    }
}

/// Log lines go to stderr so they never mix with program output.
/// Filtered by `TINY_LOG`, e.g. `TINY_LOG=tiny=trace`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TINY_LOG").unwrap_or_else(|_| EnvFilter::new("tiny=warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

enum Command {
    Run,
    Asm,
    Pp,
}

fn parse_args(args: &[String]) -> Result<(Command, &str)> {
    match args {
        [path] => Ok((Command::Run, path.as_str())),
        [command, path] => match command.as_str() {
            "run" => Ok((Command::Run, path.as_str())),
            "asm" => Ok((Command::Asm, path.as_str())),
            "pp" => Ok((Command::Pp, path.as_str())),
            _ => Err(error!(InvalidArgument; "{}", USAGE)),
        },
        _ => Err(error!(InvalidArgument; "{}", USAGE)),
    }
}

fn main_loop(args: &[String], interrupted: Arc<AtomicBool>) -> Result<()> {
    let (command, path) = parse_args(args)?;
    let config = Config::from_env()?;
    let text = FileSystem.read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => error!(FileNotFound; "{}", path),
        _ => error!(IoError; "{}: {}", path, e),
    })?;
    let mut assembler = Assembler::new().config(config).diagnostics(Console);
    match command {
        Command::Pp => {
            for line in assembler.preprocess(path, &text)? {
                println!("{}", line);
            }
        }
        Command::Asm => println!("{}", assembler.assemble(path, &text)?),
        Command::Run => {
            let program = assembler.assemble(path, &text)?;
            let mut runtime = Runtime::new(config).input(Keyboard::new());
            runtime.load(program);
            let green = Colour::Green.normal();
            loop {
                if interrupted.load(Ordering::SeqCst) {
                    println!();
                    eprintln!("{}", Style::new().bold().paint("BREAK"));
                    break;
                }
                match runtime.execute(5000)? {
                    Event::Running => {}
                    Event::Print(s) => {
                        print!("{}", green.paint(s));
                        let _ = std::io::stdout().flush();
                    }
                    Event::Stopped => {
                        if !runtime.output().is_empty() && !runtime.output().ends_with('\n') {
                            println!();
                        }
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}

fn style(severity: Severity) -> Style {
    match severity {
        Severity::Warning => Colour::Yellow.normal(),
        Severity::SyntaxError | Severity::FatalError => Colour::Red.bold(),
    }
}

/// Diagnostic text tagged with its severity, e.g. `FATAL ERROR: MISSING HALT`.
fn describe(error: &Error) -> String {
    format!("{}: {}", error.severity(), error)
}

fn report(error: &Error) {
    eprintln!("{}", style(error.severity()).paint(describe(error)));
    if let Some(line) = error.line() {
        eprintln!("    {}", Style::new().dimmed().paint(line.original()));
    }
}

/// Prints warnings and carries on.
struct Console;

impl Diagnostics for Console {
    fn warning(&mut self, warning: Error) -> Result<()> {
        report(&warning);
        Ok(())
    }
}

/// Single keypresses for `AREAD`. Falls back to plain stdin when there
/// is no terminal, e.g. when input is piped.
struct Keyboard {
    terminal: Option<Terminal>,
}

impl Keyboard {
    fn new() -> Keyboard {
        Keyboard {
            terminal: Terminal::new().ok(),
        }
    }
}

impl Input for Keyboard {
    fn read_char(&mut self) -> std::io::Result<Option<char>> {
        let terminal = match &self.terminal {
            Some(terminal) => terminal,
            None => {
                let mut byte = [0u8; 1];
                return match std::io::stdin().read(&mut byte)? {
                    0 => Ok(None),
                    _ => Ok(Some(byte[0] as char)),
                };
            }
        };
        let state = terminal.prepare(PrepareConfig::default())?;
        let key = loop {
            match terminal.read_event(None) {
                Ok(Some(TermEvent::Key(Key::Char(ch)))) => break Ok(Some(ch)),
                Ok(Some(TermEvent::Key(Key::Enter))) => break Ok(Some('\n')),
                Ok(Some(TermEvent::Key(Key::Tab))) => break Ok(Some('\t')),
                Ok(Some(TermEvent::Key(Key::Ctrl('d')))) => break Ok(None),
                Ok(Some(TermEvent::Key(Key::Ctrl('c'))))
                | Ok(Some(TermEvent::Signal(Signal::Interrupt))) => {
                    break Err(std::io::Error::new(ErrorKind::Interrupted, "BREAK"))
                }
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        terminal.restore(state)?;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;
    use crate::lang::SourceLine;

    #[test]
    fn test_describe_tags_severity() {
        let line = SourceLine::new(3, "f.asm", "BOGUS");
        let e = error!(UnknownMnemonic, &line; "BOGUS");
        assert_eq!(describe(&e), "FATAL ERROR: UNKNOWN MNEMONIC IN f.asm LINE 3; BOGUS");
        let e = error!(ConstantRedefined; "$a");
        assert_eq!(describe(&e), "WARNING: CONSTANT REDEFINED; $a");
        let e = error!(InvalidArgument; "JMP a");
        assert_eq!(describe(&e), "SYNTAX ERROR: INVALID ARGUMENT; JMP a");
    }

    #[test]
    fn test_style_by_severity() {
        assert_eq!(style(Severity::Warning), Colour::Yellow.normal());
        assert_eq!(style(Severity::SyntaxError), Colour::Red.bold());
        assert_eq!(style(Severity::FatalError), Colour::Red.bold());
    }

    #[test]
    fn test_parse_args() {
        let args = vec!["asm".to_string(), "a.asm".to_string()];
        assert!(matches!(parse_args(&args), Ok((Command::Asm, "a.asm"))));
        let args = vec!["a.asm".to_string()];
        assert!(matches!(parse_args(&args), Ok((Command::Run, "a.asm"))));
        let args = vec!["bogus".to_string(), "a.asm".to_string()];
        assert!(parse_args(&args).is_err());
    }
}
