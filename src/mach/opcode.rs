use crate::lang::Kind::{self, Address as A, Literal as L};

/// ## Tiny-ASM instruction set
///
/// Every mnemonic has one or more opcodes, one for each way its operands
/// may be written. The machine has no registers; every operation works on
/// memory cells.
///
/// For example: `ADD [3] 1` assembles to `0x0B 0x03 0x01` and
/// `ADD [3] [1]` to `0x0A 0x03 0x01`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // *** Logic
    /// `M[a] = M[a] & b`
    And,
    /// `M[a] = M[a] | b`
    Or,
    /// `M[a] = M[a] ^ b`
    Xor,
    /// `M[a] = !M[a]`
    Not,

    // *** Memory
    /// `M[a] = b`
    Mov,
    /// `M[a] = random value in 0..=RAND_MAX`
    Random,

    // *** Arithmetic
    /// `M[a] = M[a] + b`, wrapping.
    Add,
    /// `M[a] = M[a] - b`, wrapping.
    Sub,

    // *** Branch control
    /// Jump to `x`.
    Jmp,
    /// Jump to `x` if `a == 0`.
    Jz,
    /// Jump to `x` if `a == b`.
    Jeq,
    /// Jump to `x` if `a < b`.
    Jls,
    /// Jump to `x` if `a > b`.
    Jgt,

    // *** Effects
    Halt,
    /// Print `a` as a character.
    Aprint,
    /// Print `a` in decimal.
    Dprint,
    /// Read one character into `M[a]`.
    Aread,
}

/// What the instruction does with an operand once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// A memory cell written (or read and written) by the instruction.
    Dest,
    /// A plain value. An address operand is dereferenced first.
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Stores a value into memory.
    Data,
    /// Moves the instruction pointer, or not.
    Jump,
    /// Talks to the outside world or stops the machine.
    Effect,
}

pub const MNEMONICS: [Mnemonic; 17] = [
    Mnemonic::And,
    Mnemonic::Or,
    Mnemonic::Xor,
    Mnemonic::Not,
    Mnemonic::Mov,
    Mnemonic::Random,
    Mnemonic::Add,
    Mnemonic::Sub,
    Mnemonic::Jmp,
    Mnemonic::Jz,
    Mnemonic::Jeq,
    Mnemonic::Jls,
    Mnemonic::Jgt,
    Mnemonic::Halt,
    Mnemonic::Aprint,
    Mnemonic::Dprint,
    Mnemonic::Aread,
];

impl Mnemonic {
    /// Case-insensitive lookup.
    pub fn from_name(s: &str) -> Option<Mnemonic> {
        let upper = s.to_ascii_uppercase();
        MNEMONICS.iter().copied().find(|m| m.name() == upper)
    }

    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            Not => "NOT",
            Mov => "MOV",
            Random => "RANDOM",
            Add => "ADD",
            Sub => "SUB",
            Jmp => "JMP",
            Jz => "JZ",
            Jeq => "JEQ",
            Jls => "JLS",
            Jgt => "JGT",
            Halt => "HALT",
            Aprint => "APRINT",
            Dprint => "DPRINT",
            Aread => "AREAD",
        }
    }

    pub fn params(self) -> &'static [Param] {
        use Mnemonic::*;
        use Param::*;
        match self {
            And | Or | Xor | Add | Sub | Mov => &[Dest, Value],
            Not | Random | Aread => &[Dest],
            Jmp | Aprint | Dprint => &[Value],
            Jz => &[Value, Value],
            Jeq | Jls | Jgt => &[Value, Value, Value],
            Halt => &[],
        }
    }

    pub fn arity(self) -> usize {
        self.params().len()
    }

    pub fn effect(self) -> Effect {
        use Mnemonic::*;
        match self {
            And | Or | Xor | Not | Mov | Add | Sub => Effect::Data,
            Jmp | Jz | Jeq | Jls | Jgt => Effect::Jump,
            Random | Halt | Aprint | Dprint | Aread => Effect::Effect,
        }
    }

    pub fn opcodes(self) -> impl Iterator<Item = &'static Opcode> {
        OPCODES.iter().filter(move |op| op.mnemonic == self)
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Opcode {
    pub byte: u8,
    pub mnemonic: Mnemonic,
    pub kinds: &'static [Kind],
}

impl Opcode {
    pub fn decode(byte: u8) -> Option<&'static Opcode> {
        OPCODES.iter().find(|op| op.byte == byte)
    }

    /// The opcode of `mnemonic` whose operands are written as `kinds`.
    pub fn select(mnemonic: Mnemonic, kinds: &[Kind]) -> Option<&'static Opcode> {
        mnemonic.opcodes().find(|op| op.kinds == kinds)
    }
}

macro_rules! opcode {
    ($byte:expr, $mnemonic:ident, [$($kind:ident),*]) => {
        Opcode {
            byte: $byte,
            mnemonic: Mnemonic::$mnemonic,
            kinds: &[$($kind),*],
        }
    };
}

pub static OPCODES: [Opcode; 38] = [
    opcode!(0x00, And, [A, A]),
    opcode!(0x01, And, [A, L]),
    opcode!(0x02, Or, [A, A]),
    opcode!(0x03, Or, [A, L]),
    opcode!(0x04, Xor, [A, A]),
    opcode!(0x05, Xor, [A, L]),
    opcode!(0x06, Not, [A]),
    opcode!(0x07, Mov, [A, A]),
    opcode!(0x08, Mov, [A, L]),
    opcode!(0x09, Random, [A]),
    opcode!(0x0A, Add, [A, A]),
    opcode!(0x0B, Add, [A, L]),
    opcode!(0x0C, Sub, [A, A]),
    opcode!(0x0D, Sub, [A, L]),
    opcode!(0x0E, Jmp, [A]),
    opcode!(0x0F, Jmp, [L]),
    opcode!(0x10, Jz, [A, A]),
    opcode!(0x11, Jz, [A, L]),
    opcode!(0x12, Jz, [L, A]),
    opcode!(0x13, Jz, [L, L]),
    opcode!(0x14, Jeq, [A, A, A]),
    opcode!(0x15, Jeq, [L, A, A]),
    opcode!(0x16, Jeq, [A, A, L]),
    opcode!(0x17, Jeq, [L, A, L]),
    opcode!(0x18, Jls, [A, A, A]),
    opcode!(0x19, Jls, [L, A, A]),
    opcode!(0x1A, Jls, [A, A, L]),
    opcode!(0x1B, Jls, [L, A, L]),
    opcode!(0x1C, Jgt, [A, A, A]),
    opcode!(0x1D, Jgt, [L, A, A]),
    opcode!(0x1E, Jgt, [A, A, L]),
    opcode!(0x1F, Jgt, [L, A, L]),
    opcode!(0x20, Aprint, [A]),
    opcode!(0x21, Aprint, [L]),
    opcode!(0x22, Dprint, [A]),
    opcode!(0x23, Dprint, [L]),
    opcode!(0x24, Aread, [A]),
    opcode!(0xFF, Halt, []),
];
