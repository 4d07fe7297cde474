//! The Universal Machine - a 32-bit register VM with array memory
//!
//! Every instruction is one 32-bit word. Two encodings exist:
//!
//! ```text
//! standard:        [OPCODE:4][ignored:19][A:3][B:3][C:3]
//! immediate load:  [  13  :4][REG:3][        VALUE:25   ]
//! ```
//!
//! A, B, C select one of eight general registers. The ignored bits may
//! carry arbitrary payload in conforming programs and never affect
//! decoding.
//!
//! ## Machine state
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ Registers   r0-r7: Word, zeroed at startup       │
//! │ Program     owned word buffer + program counter  │
//! │ Arrays      id → active buffer | free-list slot  │
//! │ Channels    read_byte / write_byte, borrowed     │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Array 0 stands for the running program and can never be abandoned.
//! The program buffer itself is owned by the interpreter, apart from the
//! array table, so a program swap installs an independent copy and the
//! fetch loop never reads through a freed buffer.

mod interpreter;
mod memory;
mod opcode;
mod program;
mod registers;

pub use interpreter::{Interpreter, StepResult};
pub use memory::ArrayTable;
pub use opcode::{
    encode_imm, encode_reg, immediate, reg_a, reg_b, reg_c, reg_imm, Opcode, IMMEDIATE_MASK,
};
pub use program::ProgramImage;
pub use registers::{Reg, RegisterFile};

/// The universal value type: registers, array cells, identifiers, and
/// instructions are all words.
pub type Word = u32;

/// Number of general registers
pub const REGISTER_COUNT: usize = 8;

/// Size of one instruction word in a program file
pub const WORD_BYTES: usize = 4;
