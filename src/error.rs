//! Error types for um32

use thiserror::Error;

use crate::vm::Word;

/// Everything that can stop a machine run, plus host-side failures.
///
/// The machine faults are fatal: nothing is rolled back, and whatever an
/// instruction committed before its failing check stays committed.
#[derive(Debug, Error)]
pub enum VmError {
    /// Instruction word whose opcode field is 14 or 15
    #[error("invalid instruction {word:#010x} at pc {pc:#x}")]
    InvalidInstruction { pc: Word, word: Word },

    /// Array access through an identifier that is out of the table's
    /// range or not currently allocated
    #[error("array {id:#x} is not an active array")]
    InactiveArray { id: Word },

    /// Array access past the end of an active array
    #[error("offset {offset:#x} out of bounds for array {id:#x} of size {size}")]
    OffsetOutOfBounds { id: Word, offset: Word, size: Word },

    /// Abandonment of array 0, an out-of-range identifier, or an
    /// identifier that is already inactive
    #[error("cannot abandon array {id:#x}")]
    CannotAbandon { id: Word },

    /// Division with a zero divisor
    #[error("division by zero at pc {pc:#x}")]
    DivisionByZero { pc: Word },

    /// Program load whose source identifier is in range but inactive
    #[error("cannot load program from inactive array {id:#x}")]
    InactiveProgramSource { id: Word },

    /// Output of a value above 255
    #[error("output value {value:#x} is not a byte")]
    ByteOutOfRange { value: Word },

    /// The program counter reached the end of the program without a halt
    #[error("program counter {pc:#x} ran past the end of the program")]
    ProgramOverrun { pc: Word },

    /// Failure of the program file or a byte channel, not of the machine
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl VmError {
    /// Stable process exit code for the command-line front end, one per
    /// failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInstruction { .. } => 1,
            Self::InactiveArray { .. } | Self::OffsetOutOfBounds { .. } => 2,
            Self::CannotAbandon { .. } => 3,
            Self::DivisionByZero { .. } => 4,
            Self::InactiveProgramSource { .. } => 5,
            Self::ByteOutOfRange { .. } => 6,
            Self::ProgramOverrun { .. } => 7,
            Self::Io(_) => 8,
        }
    }
}

pub type Result<T> = std::result::Result<T, VmError>;
