//! # Tiny-ASM
//!
//! A tiny assembly language, its preprocessor, assembler and a virtual
//! machine to run it on.
//!
//! Install with `cargo install tiny-asm` then run a program with
//! `tiny FILE`. `tiny asm FILE` prints the assembled program and
//! `tiny pp FILE` prints the source after preprocessing.
//! ```text
//! > tiny hello.asm
//! Hello, World!
//! ```
//!
//! The library can be embedded as well.
//! ```
//! use tiny::mach::Runtime;
//! let mut runtime = Runtime::default();
//! runtime.enter("DPRINT 42\nHALT").unwrap();
//! assert_eq!(runtime.run().unwrap(), "42");
//! ```
//!
//! A small library of subroutines lives in `lib/` and can be pulled in
//! with `#import <lib/math/divide.asm>`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod config;
pub mod lang;
pub mod mach;
pub mod term;
