//! # um32 - the Universal Machine
//!
//! An interpreter for a small register machine: 32-bit words, eight
//! general registers, fourteen instructions, and dynamically allocated
//! array memory addressed by 32-bit identifiers. A program is a flat
//! big-endian word file loaded as array 0 and executed until it halts
//! or faults.
//!
//! ## Core components
//!
//! - [`vm`]: word decoding, the register file, the array table with
//!   its LIFO identifier recycling, the owned program image, and the
//!   fetch/decode/dispatch engine
//! - [`loader`]: the big-endian program file format
//! - [`asm`]: a small assembler and disassembler for the instruction set
//! - [`io`]: the two-primitive byte channels the machine runs against
//!
//! ## Example
//!
//! ```
//! use um32::asm::assemble;
//! use um32::vm::Interpreter;
//!
//! let program = assemble("ldi 0 'A'\nout 0\nhlt").unwrap();
//! let mut output = Vec::new();
//! Interpreter::new(program, std::io::empty(), &mut output)
//!     .run()
//!     .unwrap();
//! assert_eq!(output, b"A");
//! ```

pub mod asm;
mod error;
pub mod io;
pub mod loader;
pub mod vm;

pub use error::{Result, VmError};
pub use vm::{Interpreter, Opcode, Word};
