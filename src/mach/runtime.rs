use super::{Address, Assembler, Memory, Mnemonic, Opcode, Param, Program};
use crate::config::Config;
use crate::error;
use crate::lang::{Error, Kind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::convert::TryFrom;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Character source for `AREAD`
pub trait Input {
    /// One character, or `None` at end of input.
    fn read_char(&mut self) -> std::io::Result<Option<char>>;
}

impl Input for VecDeque<char> {
    fn read_char(&mut self) -> std::io::Result<Option<char>> {
        Ok(self.pop_front())
    }
}

/// ## Events
///
/// Returned from `Runtime::execute` so a front end can echo output while
/// the program is still running.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Cycle budget used up; call `execute` again to continue.
    Running,
    /// Text printed since the last event.
    Print(String),
    /// The program executed HALT.
    Stopped,
}

enum Outcome {
    Store(u64, u64),
    Jump(Option<Address>),
    Continue,
}

/// ## Virtual machine
///
/// One instance owns all of its state; machines never share anything.
pub struct Runtime {
    config: Config,
    program: Program,
    memory: Memory,
    ip: Address,
    prev_ip: Option<Address>,
    ticks: usize,
    running: bool,
    output: String,
    printed: String,
    rng: StdRng,
    input: Box<dyn Input>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            config,
            program: Program::new(),
            memory: Memory::new(&config),
            ip: 0,
            prev_ip: None,
            ticks: 0,
            running: false,
            output: String::new(),
            printed: String::new(),
            rng: StdRng::from_entropy(),
            input: Box::new(VecDeque::new()),
        }
    }

    /// Makes `RANDOM` reproducible.
    pub fn seed(self, seed: u64) -> Runtime {
        Runtime {
            rng: StdRng::seed_from_u64(seed),
            ..self
        }
    }

    pub fn input<I: Input + 'static>(self, input: I) -> Runtime {
        Runtime {
            input: Box::new(input),
            ..self
        }
    }

    /// Resets the machine and loads an assembled program.
    pub fn load(&mut self, program: Program) {
        self.program = program;
        self.memory.clear();
        self.ip = 0;
        self.prev_ip = None;
        self.ticks = 0;
        self.running = true;
        self.output.clear();
        self.printed.clear();
    }

    /// Assembles source text with this machine's configuration and loads it.
    pub fn enter(&mut self, text: &str) -> Result<()> {
        let program = Assembler::new()
            .config(self.config)
            .assemble("<source>", text)?;
        self.load(program);
        Ok(())
    }

    /// Runs until HALT and returns everything printed.
    pub fn run(&mut self) -> Result<String> {
        while self.running {
            self.step()?;
        }
        self.printed.clear();
        debug!(ticks = self.ticks, "halted");
        Ok(self.output.clone())
    }

    /// Runs at most `cycles` steps. Returns early when something was printed.
    pub fn execute(&mut self, cycles: usize) -> Result<Event> {
        for _ in 0..cycles {
            if !self.running {
                break;
            }
            self.step()?;
            if !self.printed.is_empty() {
                return Ok(Event::Print(std::mem::take(&mut self.printed)));
            }
        }
        if self.running {
            Ok(Event::Running)
        } else {
            Ok(Event::Stopped)
        }
    }

    /// One fetch-decode-execute-advance cycle.
    pub fn step(&mut self) -> Result<()> {
        let ip = self.ip;
        let from = self.prev_ip;
        self.cycle().map_err(|e| {
            // past the end, blame the instruction that got us there
            let at = if ip < self.program.len() { Some(ip) } else { from };
            match at.and_then(|at| self.program.line_for(at)) {
                Some(line) => e.in_line(line),
                None => e,
            }
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    fn fetch(&self, addr: Address) -> Result<u64> {
        match self.program.get(addr) {
            Some(word) => Ok(word),
            None => Err(error!(MissingHalt; "RAN PAST END OF PROGRAM AT {}", addr)),
        }
    }

    fn decode(&self, word: u64) -> Result<&'static Opcode> {
        match u8::try_from(word).ok().and_then(Opcode::decode) {
            Some(opcode) => Ok(opcode),
            None => Err(error!(UnknownOpcode; "0x{:02X} AT {}", word, self.ip)),
        }
    }

    fn cycle(&mut self) -> Result<()> {
        let ip = self.ip;
        self.prev_ip = Some(ip);
        let opcode = self.decode(self.fetch(ip)?)?;
        let mnemonic = opcode.mnemonic;
        let mut args = [0u64; 3];
        for (index, (kind, param)) in opcode.kinds.iter().zip(mnemonic.params()).enumerate() {
            let word = self.fetch(ip + 1 + index)?;
            args[index] = match (kind, param) {
                (Kind::Address, Param::Value) => self.memory.read(word)?,
                _ => word,
            };
        }
        let operands = &args[..mnemonic.arity()];
        trace!(ip, %mnemonic, effect = ?mnemonic.effect(), ?operands);
        match self.instruction(mnemonic, args)? {
            Outcome::Store(addr, value) => self.memory.write(addr, value)?,
            Outcome::Jump(Some(dest)) => {
                if Some(dest) == self.prev_ip {
                    return Err(error!(InfiniteLoop; "{} JUMPS TO ITSELF AT {}", mnemonic, dest));
                }
                self.ip = dest;
                self.ticks += 1;
                return Ok(());
            }
            Outcome::Jump(None) | Outcome::Continue => {}
        }
        self.ip = ip + 1 + mnemonic.arity();
        self.ticks += 1;
        Ok(())
    }

    fn instruction(&mut self, mnemonic: Mnemonic, args: [u64; 3]) -> Result<Outcome> {
        use Mnemonic::*;
        let [a, b, c] = args;
        let jump_if = |test: bool| Outcome::Jump(if test { Some(a as Address) } else { None });
        Ok(match mnemonic {
            And => Outcome::Store(a, self.memory.read(a)? & b),
            Or => Outcome::Store(a, self.memory.read(a)? | b),
            Xor => Outcome::Store(a, self.memory.read(a)? ^ b),
            Not => Outcome::Store(a, !self.memory.read(a)?),
            Mov => Outcome::Store(a, b),
            Random => Outcome::Store(a, self.rng.gen_range(0..=self.config.max_random())),
            Add => Outcome::Store(a, self.memory.read(a)?.wrapping_add(b)),
            Sub => Outcome::Store(a, self.memory.read(a)?.wrapping_sub(b)),
            Jmp => jump_if(true),
            Jz => jump_if(b == 0),
            Jeq => jump_if(b == c),
            Jls => jump_if(b < c),
            Jgt => jump_if(b > c),
            Halt => {
                self.running = false;
                Outcome::Continue
            }
            Aprint => {
                let ch = u32::try_from(a)
                    .ok()
                    .and_then(std::char::from_u32)
                    .unwrap_or(std::char::REPLACEMENT_CHARACTER);
                self.print(&ch.to_string());
                Outcome::Continue
            }
            Dprint => {
                self.print(&a.to_string());
                Outcome::Continue
            }
            Aread => match self.input.read_char() {
                Ok(ch) => Outcome::Store(a, ch.map_or(0, |ch| ch as u64)),
                Err(e) => return Err(error!(IoError; "AREAD: {}", e)),
            },
        })
    }

    fn print(&mut self, s: &str) {
        self.output.push_str(s);
        self.printed.push_str(s);
    }
}
