//! Interpreter - the fetch/decode/dispatch engine
//!
//! One instruction per step: check the program counter, fetch a word,
//! advance, decode the opcode, dispatch. Every handler decodes its
//! operands and establishes its preconditions before touching any
//! state, so a faulting instruction leaves nothing behind except the
//! already-advanced program counter. A program load overwrites that
//! advanced counter, which is what makes it a jump.

use std::fmt;

use crate::error::{Result, VmError};
use crate::io::{ByteInput, ByteOutput};

use super::memory::ArrayTable;
use super::opcode::{immediate, reg_a, reg_b, reg_c, reg_imm, Opcode};
use super::program::ProgramImage;
use super::registers::RegisterFile;
use super::Word;

/// Outcome of executing a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Move on to the next instruction
    Continue,
    /// The program halted cleanly
    Halt,
}

/// The machine: registers, array memory, program image, and the two
/// borrowed byte channels.
pub struct Interpreter<I, O> {
    registers: RegisterFile,
    arrays: ArrayTable,
    program: ProgramImage,
    pc: Word,
    input: I,
    output: O,
}

impl<I: ByteInput, O: ByteOutput> Interpreter<I, O> {
    /// A machine loaded with `program` as array 0, registers zeroed,
    /// program counter at the first word.
    pub fn new(program: Vec<Word>, input: I, output: O) -> Self {
        Self {
            registers: RegisterFile::new(),
            arrays: ArrayTable::new(),
            program: ProgramImage::new(program),
            pc: 0,
            input,
            output,
        }
    }

    /// Run until the program halts or faults.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step()? {
                StepResult::Continue => {}
                StepResult::Halt => return Ok(()),
            }
        }
    }

    /// Execute exactly one instruction.
    pub fn step(&mut self) -> Result<StepResult> {
        let pc = self.pc;
        let Some(word) = self.program.fetch(pc) else {
            return Err(VmError::ProgramOverrun { pc });
        };
        self.pc = pc + 1;
        self.execute(pc, word)
    }

    fn execute(&mut self, pc: Word, word: Word) -> Result<StepResult> {
        let Some(op) = Opcode::from_word(word) else {
            return Err(VmError::InvalidInstruction { pc, word });
        };

        match op {
            Opcode::CondMove => {
                if self.registers[reg_c(word)] != 0 {
                    self.registers[reg_a(word)] = self.registers[reg_b(word)];
                }
            }

            Opcode::ArrayIndex => {
                let id = self.registers[reg_b(word)];
                let offset = self.registers[reg_c(word)];
                self.registers[reg_a(word)] = self.arrays.read(id, offset)?;
            }

            Opcode::ArrayAmend => {
                let id = self.registers[reg_a(word)];
                let offset = self.registers[reg_b(word)];
                self.arrays.write(id, offset, self.registers[reg_c(word)])?;
            }

            Opcode::Add => {
                let value = self.registers[reg_b(word)].wrapping_add(self.registers[reg_c(word)]);
                self.registers[reg_a(word)] = value;
            }

            Opcode::Mul => {
                let value = self.registers[reg_b(word)].wrapping_mul(self.registers[reg_c(word)]);
                self.registers[reg_a(word)] = value;
            }

            Opcode::Div => {
                let divisor = self.registers[reg_c(word)];
                if divisor == 0 {
                    return Err(VmError::DivisionByZero { pc });
                }
                self.registers[reg_a(word)] = self.registers[reg_b(word)] / divisor;
            }

            Opcode::Nand => {
                let value = self.registers[reg_b(word)] & self.registers[reg_c(word)];
                self.registers[reg_a(word)] = !value;
            }

            Opcode::Halt => return Ok(StepResult::Halt),

            Opcode::Allocate => {
                let size = self.registers[reg_c(word)];
                self.registers[reg_b(word)] = self.arrays.allocate(size);
            }

            Opcode::Abandon => {
                self.arrays.free(self.registers[reg_c(word)])?;
            }

            Opcode::Output => {
                let value = self.registers[reg_c(word)];
                if value > 0xFF {
                    return Err(VmError::ByteOutOfRange { value });
                }
                self.output.write_byte(value as u8)?;
            }

            Opcode::Input => {
                self.registers[reg_c(word)] = match self.input.read_byte()? {
                    Some(byte) => byte as Word,
                    None => Word::MAX,
                };
            }

            Opcode::LoadProgram => {
                // Identifier 0 names the running program, so loading
                // from it degenerates to an absolute jump.
                let source = self.registers[reg_b(word)];
                if source != 0 {
                    let image = self.arrays.snapshot(source)?;
                    self.program.replace(image);
                }
                self.pc = self.registers[reg_c(word)];
            }

            Opcode::LoadImmediate => {
                self.registers[reg_imm(word)] = immediate(word);
            }
        }

        Ok(StepResult::Continue)
    }

    /// Current register values, for dumps and assertions
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Current program counter
    pub fn pc(&self) -> Word {
        self.pc
    }
}

impl<I, O> fmt::Display for Interpreter<I, O> {
    /// Diagnostic dump: program counter, registers, array occupancy.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pc = {:#010x}  ({} words loaded)", self.pc, self.program.len())?;
        for (i, value) in self.registers.as_array().iter().enumerate() {
            let sep = if i % 4 == 3 { "\n" } else { "  " };
            write!(f, "r{i} = {value:#010x}{sep}")?;
        }
        write!(f, "arrays active: {}", self.arrays.active_count())
    }
}
