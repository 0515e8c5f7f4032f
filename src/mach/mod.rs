/*!
## Rust Machine Module

This Rust module is the Tiny-ASM assembler and virtual machine.

*/

pub type Address = usize;

mod assemble;
mod memory;
mod opcode;
mod program;
mod runtime;

pub use assemble::{assemble, codegen, Assembler};
pub use memory::Memory;
pub use opcode::{Effect, Mnemonic, Opcode, Param, MNEMONICS, OPCODES};
pub use program::Program;
pub use runtime::{Event, Input, Runtime};

#[cfg(test)]
mod tests;
