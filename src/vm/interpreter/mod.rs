//! # The Interpreter Module
//!
//! This module implements the interpreter for the virtual machine. The
//! interpreter is supplied with a `Device` object, which acts as the
//! machine's frontend to the world: the device supplies the program's
//! input one byte at a time and receives its output one byte at a time.
//! For testing, the `TestingDevice` buffers sample input and captures
//! the output to check against the expected bytes.
use std::{
    collections::VecDeque,
    io::{stdin, stdout, Read, Write},
};

mod core;
pub use self::core::*;

/// An input / output device for the virtual machine interpreter to
/// operate on. The method `get` retrieves one byte of the device's
/// input, and `put` writes one byte to the device's output.
pub trait Device {
    /// Get the next input byte. `Ok(None)` means the input is exhausted,
    /// which the interpreter treats as "no value available": the current
    /// cell is left unchanged. Only a genuine I/O failure is an `Err`.
    fn get(&mut self) -> Result<Option<u8>, String>;
    /// Put the given byte to the device's output.
    fn put(&mut self, byte: u8) -> Result<(), String>;
}

/// A device used for testing the interpreter. This simply keeps a buffer
/// of sample input to supply to the virtual machine, and an output
/// buffer to keep track of what the program wrote.
///
/// The tests interpret a program and populate the device with output,
/// then check the device's output against the expected bytes.
#[derive(Clone, Debug, Default)]
pub struct TestingDevice {
    pub input: VecDeque<u8>,
    pub output: Vec<u8>,
}

impl TestingDevice {
    /// Create a new testing device with some given sample input.
    pub fn new(sample_input: impl ToString) -> Self {
        Self {
            input: sample_input.to_string().into_bytes().into(),
            output: vec![],
        }
    }

    /// Get the output of the testing device as a string (lossy ascii).
    pub fn output_str(&self) -> String {
        self.output.iter().map(|&b| b as char).collect()
    }

    /// Get the raw output bytes of the testing device.
    pub fn output_vals(&self) -> &[u8] {
        &self.output
    }
}

impl Device for TestingDevice {
    fn get(&mut self) -> Result<Option<u8>, String> {
        Ok(self.input.pop_front())
    }

    fn put(&mut self, byte: u8) -> Result<(), String> {
        self.output.push(byte);
        Ok(())
    }
}

/// A device used for standard input and output. This retrieves a single
/// byte from standard-in with `get`, and writes a single byte to
/// standard-out with `put`. Output bytes are raw 8-bit values, not
/// guaranteed to be valid text, so they bypass any character encoding.
#[derive(Default)]
pub struct StandardDevice;

impl Device for StandardDevice {
    fn get(&mut self) -> Result<Option<u8>, String> {
        let mut buf = [0];
        if stdout().flush().is_err() {
            return Err("could not flush output".to_string());
        }
        match stdin().read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) => Err(format!("could not get user input: {e}")),
        }
    }

    fn put(&mut self, byte: u8) -> Result<(), String> {
        let mut out = stdout();
        if out.write_all(&[byte]).is_err() || out.flush().is_err() {
            Err(String::from("could not write output"))
        } else {
            Ok(())
        }
    }
}
