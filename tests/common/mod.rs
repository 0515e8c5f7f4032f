#![allow(dead_code)]
use std::collections::HashMap;
use tiny::lang::ErrorCode;
use tiny::mach::{Assembler, Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = match runtime.execute(cycles) {
            Ok(event) => event,
            Err(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
        };
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

/// Assembles and runs `text`, returning output or the first error.
pub fn run(text: &str) -> String {
    let mut r = Runtime::default().seed(7);
    match r.enter(text) {
        Ok(()) => exec(&mut r),
        Err(error) => format!("{}\n", error),
    }
}

pub fn run_code(text: &str) -> ErrorCode {
    let mut r = Runtime::default();
    r.enter(text).unwrap();
    r.run().unwrap_err().code()
}

pub fn asm(text: &str) -> String {
    Assembler::new().assemble("<test>", text).unwrap().to_string()
}

pub fn asm_code(text: &str) -> ErrorCode {
    Assembler::new()
        .assemble("<test>", text)
        .unwrap_err()
        .code()
}

/// Runs `text` with the library files available for `#import`.
pub fn run_with_lib(text: &str) -> String {
    let mut files = HashMap::new();
    files.insert(
        "lib/math/divide.asm".to_string(),
        include_str!("../../lib/math/divide.asm").to_string(),
    );
    files.insert(
        "lib/math/multiply.asm".to_string(),
        include_str!("../../lib/math/multiply.asm").to_string(),
    );
    files.insert(
        "lib/binary/shift.asm".to_string(),
        include_str!("../../lib/binary/shift.asm").to_string(),
    );
    let program = Assembler::new()
        .source(files)
        .assemble("<test>", text)
        .unwrap();
    let mut r = Runtime::default();
    r.load(program);
    exec(&mut r)
}
