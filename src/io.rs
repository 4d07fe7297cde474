//! Byte channels between the machine and its host
//!
//! The machine touches the outside world through exactly two
//! primitives: read one byte, write one byte. Anything implementing
//! the standard `Read`/`Write` traits works as a channel, which covers
//! stdin/stdout locks for the command line and in-memory buffers for
//! tests. No flushing contract is imposed here; the host decides.

use std::io::{self, Read, Write};

/// Source of input bytes for the machine.
pub trait ByteInput {
    /// The next byte, or `None` at end of input. Blocks until one of
    /// the two is known.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Sink for output bytes from the machine.
pub trait ByteOutput {
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;
}

impl<R: Read> ByteInput for R {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

impl<W: Write> ByteOutput for W {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_until_end() {
        let mut input: &[u8] = b"ab";
        assert_eq!(input.read_byte().unwrap(), Some(b'a'));
        assert_eq!(input.read_byte().unwrap(), Some(b'b'));
        assert_eq!(input.read_byte().unwrap(), None);
        assert_eq!(input.read_byte().unwrap(), None);
    }

    #[test]
    fn test_write_appends() {
        let mut output = Vec::new();
        output.write_byte(0).unwrap();
        output.write_byte(0xFF).unwrap();
        assert_eq!(output, vec![0, 0xFF]);
    }
}
