//! um32 - run, assemble, and disassemble Universal Machine programs
//!
//! # Usage
//!
//! ```text
//! um32 <program>          run a program image
//! um32 asm <in> <out>     assemble source into a program image
//! um32 dis <in>           print a program image as assembly
//! ```
//!
//! Running exits 0 on a clean halt and with a per-fault-kind code
//! otherwise, naming the fault on stderr along with a register dump.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use anyhow::Context;

use um32::vm::Interpreter;
use um32::{asm, loader};

fn main() {
    let args: Vec<String> = env::args().collect();
    let argv: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    let code = match argv.as_slice() {
        ["-h"] | ["--help"] => {
            print_usage();
            0
        }
        ["asm", input, output] => report(assemble_file(input, output)),
        ["dis", input] => report(disassemble_file(input)),
        [program] => run(program),
        _ => {
            print_usage();
            1
        }
    };
    process::exit(code);
}

fn print_usage() {
    eprintln!("Usage: um32 <program>");
    eprintln!("       um32 asm <in> <out>");
    eprintln!("       um32 dis <in>");
}

fn run(path: &str) -> i32 {
    let program = match loader::load_program(path) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("um32: {path}: {err}");
            return err.exit_code();
        }
    };

    let stdin = io::stdin();
    let mut machine = Interpreter::new(program, stdin.lock(), io::stdout());
    let result = machine.run();
    let _ = io::stdout().flush();

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("um32: {err}");
            eprintln!("{machine}");
            err.exit_code()
        }
    }
}

fn assemble_file(input: &str, output: &str) -> anyhow::Result<()> {
    let source =
        fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?;
    let words = asm::assemble(&source)?;
    fs::write(output, loader::encode_words(&words))
        .with_context(|| format!("failed to write {output}"))?;
    Ok(())
}

fn disassemble_file(input: &str) -> anyhow::Result<()> {
    let words = loader::load_program(input)?;
    let mut stdout = io::stdout().lock();
    for word in &words {
        writeln!(stdout, "{}", asm::disassemble_word(*word))?;
    }
    Ok(())
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("um32: {err:#}");
            1
        }
    }
}
