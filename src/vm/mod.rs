//! # Virtual Machine Module
//!
//! This module contains all things related to the virtual machine: the
//! opcode set, the program store, and the errors a run can produce.
//!
//! ### What data can it use?
//!
//! The tape on this virtual machine is a fixed array of 30000 unsigned
//! 8-bit cells, all zero at startup. Cell arithmetic wraps modulo 256 in
//! both directions. The data pointer must stay inside the tape: moving it
//! out of bounds is a fatal error for the running program, never a wrap.
//!
//! ### What is a program?
//!
//! A program is the raw byte contents of a source file. The eight bytes
//! `> < + - . , [ ]` decode to opcodes; every other byte decodes to
//! [`Op::Comment`] and is skipped by the interpreter. Because comments
//! are resolved at decode time, the program store never needs a parse
//! step — loading a file *is* loading a program.
use core::fmt;
use std::{fs, io, path::Path};

use log::info;
use serde_derive::{Deserialize, Serialize};

pub mod interpreter;
pub use interpreter::*;

/// One instruction of the virtual machine, decoded from a raw program
/// byte. The opcode set is closed: a byte that is not one of the eight
/// recognized instructions decodes to `Comment`, which the interpreter
/// treats as a no-op.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Op {
    /// `>`: move the data pointer one cell to the right.
    Next,
    /// `<`: move the data pointer one cell to the left.
    Prev,
    /// `+`: increment the current cell, wrapping 255 to 0.
    Inc,
    /// `-`: decrement the current cell, wrapping 0 to 255.
    Dec,
    /// `.`: write the current cell to the device output.
    Put,
    /// `,`: read one byte from the device input into the current cell.
    /// End of input leaves the cell unchanged.
    Get,
    /// `[`: if the current cell is zero, skip forward past the matching
    /// `]`; otherwise enter the loop body.
    LoopOpen,
    /// `]`: if the current cell is non-zero, jump back just past the
    /// matching `[`; otherwise leave the loop.
    LoopClose,
    /// Any other byte. Skipped by the dispatch loop.
    Comment,
}

impl From<u8> for Op {
    fn from(byte: u8) -> Self {
        match byte {
            b'>' => Op::Next,
            b'<' => Op::Prev,
            b'+' => Op::Inc,
            b'-' => Op::Dec,
            b'.' => Op::Put,
            b',' => Op::Get,
            b'[' => Op::LoopOpen,
            b']' => Op::LoopClose,
            _ => Op::Comment,
        }
    }
}

/// A program for the virtual machine: an immutable, 0-indexed sequence
/// of raw bytes. Bytes are decoded to [`Op`]s at fetch time, so the
/// stored program is exactly the source file's contents.
#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Program(pub Vec<u8>);

impl Program {
    /// Read a program from a file. The failure is communicated through
    /// the returned `Result`; loading never panics on a bad path.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        info!("loaded program, size: {}", bytes.len());
        Ok(Self(bytes))
    }

    /// The number of bytes in the program.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the program empty? An empty program terminates immediately.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Program {
    fn from(src: &str) -> Self {
        Self(src.as_bytes().to_vec())
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Program({} bytes)", self.0.len())
    }
}

/// An error produced while running a program. Every variant is fatal to
/// the run: the interpreter returns it up through `step` and `run`, and
/// the top-level runner decides what to do with the process.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Error {
    /// The data pointer moved outside the tape, in either direction.
    TapeOutOfBounds,
    /// A `[` skip scan reached the end of the program with its nesting
    /// counter still unresolved.
    UnmatchedLoopOpen,
    /// A `]` rewind scan reached the start of the program with its
    /// nesting counter still unresolved.
    UnmatchedLoopClose,
    /// The device failed to perform an I/O operation. End of input is
    /// *not* a device error; it is defined behavior for `,`.
    Device(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TapeOutOfBounds => write!(f, "data pointer out of bounds"),
            Error::UnmatchedLoopOpen => write!(f, "unmatched ["),
            Error::UnmatchedLoopClose => write!(f, "unmatched ]"),
            Error::Device(e) => write!(f, "device error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_decoding_is_closed() {
        assert_eq!(Op::from(b'>'), Op::Next);
        assert_eq!(Op::from(b'<'), Op::Prev);
        assert_eq!(Op::from(b'+'), Op::Inc);
        assert_eq!(Op::from(b'-'), Op::Dec);
        assert_eq!(Op::from(b'.'), Op::Put);
        assert_eq!(Op::from(b','), Op::Get);
        assert_eq!(Op::from(b'['), Op::LoopOpen);
        assert_eq!(Op::from(b']'), Op::LoopClose);
        for byte in [b' ', b'\n', b'a', b'0', 0u8, 255u8] {
            assert_eq!(Op::from(byte), Op::Comment);
        }
    }

    #[test]
    fn load_missing_file_is_an_err() {
        assert!(Program::load("/no/such/program.bf").is_err());
    }
}
