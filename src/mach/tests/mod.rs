use super::*;
use crate::config::Config;
use crate::lang::ErrorCode;
use std::collections::HashSet;

mod opcode_test;

fn run(runtime: &mut Runtime, text: &str) -> String {
    runtime.enter(text).unwrap();
    runtime.run().unwrap()
}

fn run_err(runtime: &mut Runtime, text: &str) -> ErrorCode {
    runtime.enter(text).unwrap();
    runtime.run().unwrap_err().code()
}

#[test]
fn test_add_wraps() {
    let mut r = Runtime::default();
    run(&mut r, "MOV [0] 255\nADD [0] 1\nHALT");
    assert_eq!(r.memory().read(0).unwrap(), 0);
}

#[test]
fn test_sub_wraps() {
    let mut r = Runtime::default();
    run(&mut r, "SUB [0] 1\nHALT");
    assert_eq!(r.memory().read(0).unwrap(), 255);
}

#[test]
fn test_not() {
    let mut r = Runtime::default();
    run(&mut r, "MOV [1] 15\nNOT [1]\nNOT [2]\nHALT");
    assert_eq!(r.memory().read(1).unwrap(), 240);
    assert_eq!(r.memory().read(2).unwrap(), 255);
}

#[test]
fn test_narrow_word() {
    let mut r = Runtime::new(Config::default().word_size(4));
    run(&mut r, "MOV [0] 15\nADD [0] 3\nMOV [1] 300\nHALT");
    assert_eq!(r.memory().read(0).unwrap(), 2);
    assert_eq!(r.memory().read(1).unwrap(), 300 & 0xF);
}

#[test]
fn test_loop_is_not_infinite() {
    let mut r = Runtime::default();
    let s = run(&mut r, "MOV [0] 0\nloop:\nDPRINT [0]\nADD [0] 1\nJLS :loop [0] 3\nHALT");
    assert_eq!(s, "012");
    assert!(!r.is_running());
}

#[test]
fn test_jump_to_self() {
    let mut r = Runtime::default();
    assert_eq!(run_err(&mut r, "start:\nJMP :start"), ErrorCode::InfiniteLoop);
    assert_eq!(run_err(&mut r, "JZ 0 [5]"), ErrorCode::InfiniteLoop);
}

#[test]
fn test_conditional_self_jump_not_taken() {
    let mut r = Runtime::default();
    let s = run(&mut r, "MOV [5] 1\nJZ 3 [5]\nDPRINT 7\nHALT");
    assert_eq!(s, "7");
}

#[test]
fn test_missing_halt() {
    let mut r = Runtime::default();
    assert_eq!(run_err(&mut r, ""), ErrorCode::MissingHalt);
    assert_eq!(run_err(&mut r, "MOV [0] 1"), ErrorCode::MissingHalt);
}

#[test]
fn test_unknown_opcode() {
    let mut r = Runtime::default();
    r.load("0x25 0xFF".parse().unwrap());
    assert_eq!(r.run().unwrap_err().code(), ErrorCode::UnknownOpcode);
}

#[test]
fn test_invalid_address() {
    let mut r = Runtime::default();
    let error = {
        r.enter("MOV [1]  7\nMOV [300] 1\nHALT").unwrap();
        r.run().unwrap_err()
    };
    assert_eq!(error.code(), ErrorCode::InvalidAddress);
    assert_eq!(error.line().unwrap().number(), 2);
}

#[test]
fn test_execute_events() {
    let mut r = Runtime::default();
    r.enter("DPRINT 1\nMOV [0] 0\nAPRINT 65\nHALT").unwrap();
    assert_eq!(r.execute(100).unwrap(), Event::Print("1".to_string()));
    assert_eq!(r.execute(1).unwrap(), Event::Running);
    assert_eq!(r.execute(100).unwrap(), Event::Print("A".to_string()));
    assert_eq!(r.execute(100).unwrap(), Event::Stopped);
    assert_eq!(r.output(), "1A");
    assert_eq!(r.ticks(), 4);
}

#[test]
fn test_memory_bounds() {
    let mut m = Memory::new(&Config::default().memory_size(4));
    assert!(m.write(3, 9).is_ok());
    assert_eq!(m.read(3).unwrap(), 9);
    assert_eq!(m.read(4).unwrap_err().code(), ErrorCode::InvalidAddress);
    m.clear();
    assert!(m.cells().iter().all(|&c| c == 0));
}

#[test]
fn test_opcode_bytes_unique() {
    let bytes: HashSet<u8> = OPCODES.iter().map(|op| op.byte).collect();
    assert_eq!(bytes.len(), OPCODES.len());
}
