use crate::config::Config;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Machine memory
///
/// A fixed number of unsigned words. Stores wrap modulo 2^WORD_SIZE.

#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    cells: Vec<u64>,
    mask: u64,
}

impl Memory {
    pub fn new(config: &Config) -> Memory {
        Memory {
            cells: vec![0; config.cells()],
            mask: config.word_mask(),
        }
    }

    fn index(&self, addr: u64) -> Result<usize> {
        if addr < self.cells.len() as u64 {
            Ok(addr as usize)
        } else {
            Err(error!(InvalidAddress; "[{}]", addr))
        }
    }

    pub fn read(&self, addr: u64) -> Result<u64> {
        Ok(self.cells[self.index(addr)?])
    }

    pub fn write(&mut self, addr: u64, value: u64) -> Result<()> {
        let index = self.index(addr)?;
        self.cells[index] = value & self.mask;
        Ok(())
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = 0;
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[u64] {
        &self.cells
    }
}
