//! Program file loading
//!
//! A program file is a flat sequence of big-endian 32-bit words with
//! no header, magic, or checksum. The word count is the byte length
//! divided by four; trailing bytes that do not fill a word are
//! dropped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::vm::{Word, WORD_BYTES};

/// Read a program from any byte source.
pub fn read_program<R: Read>(mut reader: R) -> Result<Vec<Word>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode_words(&bytes))
}

/// Read a program from a file on disk.
pub fn load_program<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    read_program(File::open(path)?)
}

/// Big-endian words from raw bytes; a partial trailing word is dropped.
pub fn decode_words(bytes: &[u8]) -> Vec<Word> {
    bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| Word::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Words back to big-endian bytes, for the assembler's output.
pub fn encode_words(words: &[Word]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * WORD_BYTES);
    for word in words {
        bytes.extend_from_slice(&word.to_be_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_words_are_big_endian() {
        let bytes = [0xD0, 0x00, 0x00, 0x41, 0x70, 0x00, 0x00, 0x00];
        assert_eq!(decode_words(&bytes), vec![0xD000_0041, 0x7000_0000]);
    }

    #[test]
    fn test_partial_trailing_word_dropped() {
        let bytes = [0x70, 0x00, 0x00, 0x00, 0xAA, 0xBB, 0xCC];
        assert_eq!(decode_words(&bytes), vec![0x7000_0000]);
    }

    #[test]
    fn test_empty_input() {
        assert!(decode_words(&[]).is_empty());
        assert!(read_program(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let words = vec![0, 1, 0xFFFF_FFFF, 0x1234_5678];
        assert_eq!(decode_words(&encode_words(&words)), words);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&encode_words(&[0xD000_0041, 0x7000_0000]))
            .unwrap();

        let words = load_program(file.path()).unwrap();
        assert_eq!(words, vec![0xD000_0041, 0x7000_0000]);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_program("definitely/does/not/exist.um");
        assert!(matches!(result, Err(crate::error::VmError::Io(_))));
    }
}
