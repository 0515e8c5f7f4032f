use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub const WORD_SIZE: u32 = 8;
pub const MEMORY_SIZE: usize = 256;
pub const RAND_MAX: u64 = 25;

/// ## Machine parameters
///
/// Shared by the preprocessor (auto-memory bound) and the virtual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    word_size: u32,
    memory_size: usize,
    rand_max: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            word_size: WORD_SIZE,
            memory_size: MEMORY_SIZE,
            rand_max: RAND_MAX,
        }
    }
}

impl Config {
    /// Defaults overridden by `TINY_WORD_SIZE`, `TINY_MEMORY_SIZE` and
    /// `TINY_RAND_MAX` when set.
    pub fn from_env() -> Result<Config> {
        let mut config = Config::default();
        if let Some(word_size) = Config::var("TINY_WORD_SIZE")? {
            config = config.word_size(word_size.min(64) as u32);
        }
        if let Some(memory_size) = Config::var("TINY_MEMORY_SIZE")? {
            let cells = usize::try_from(memory_size)
                .map_err(|_| error!(InvalidArgument; "TINY_MEMORY_SIZE={}", memory_size))?;
            config = config.memory_size(cells);
        }
        if let Some(rand_max) = Config::var("TINY_RAND_MAX")? {
            config = config.rand_max(rand_max);
        }
        Ok(config)
    }

    fn var(name: &str) -> Result<Option<u64>> {
        match std::env::var(name) {
            Ok(s) => match s.trim().parse::<u64>() {
                Ok(n) => Ok(Some(n)),
                Err(_) => Err(error!(InvalidArgument; "{}={}", name, s)),
            },
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(error!(InvalidArgument; "{}: {}", name, e)),
        }
    }

    pub fn word_size(self, bits: u32) -> Config {
        Config {
            word_size: bits.max(1).min(64),
            ..self
        }
    }

    pub fn memory_size(self, cells: usize) -> Config {
        Config {
            memory_size: cells,
            ..self
        }
    }

    pub fn rand_max(self, rand_max: u64) -> Config {
        Config { rand_max, ..self }
    }

    pub fn bits(&self) -> u32 {
        self.word_size
    }

    pub fn cells(&self) -> usize {
        self.memory_size
    }

    pub fn max_random(&self) -> u64 {
        self.rand_max
    }

    /// All bits of one machine word set.
    pub fn word_mask(&self) -> u64 {
        if self.word_size >= 64 {
            u64::max_value()
        } else {
            (1 << self.word_size) - 1
        }
    }
}
