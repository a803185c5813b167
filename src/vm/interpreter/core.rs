//! # Core Interpreter Module
//!
//! This module implements the interpreter which runs virtual machine
//! programs: the fetch-dispatch loop, the tape, and the bracket scans.
//!
//! The scans are the only non-trivial algorithm here, and they are
//! deliberately uncached. Every time control flow reaches a bracket that
//! must transfer, the matching bracket is found by a fresh linear walk
//! with a nesting counter. The interpreter never remembers a resolved
//! jump target, so each loop iteration pays the full cost of its scan.
use crate::vm::{Device, Error, Op, Program, StandardDevice};
use crate::TAPE_LEN;

use log::trace;

impl Default for Interpreter<StandardDevice> {
    fn default() -> Self {
        Self::new(StandardDevice)
    }
}

/// The interpreter which runs the virtual machine program.
pub struct Interpreter<T>
where
    T: Device,
{
    /// The interpreter's I/O device.
    device: T,
    /// The tape of byte cells, all zero at startup.
    cells: Vec<u8>,
    /// The data pointer: the index of the currently addressed cell.
    /// Invariant: always inside the tape. The movement handlers enforce
    /// this before any cell access can happen at an invalid position.
    pointer: usize,
    /// The instruction pointer: the index of the next program byte to
    /// fetch. Reaching the program length is the sole termination
    /// condition of the dispatch loop.
    i: usize,
}

impl<T> Interpreter<T>
where
    T: Device,
{
    pub fn new(device: T) -> Self {
        Self {
            device,
            cells: vec![0; TAPE_LEN],
            pointer: 0,
            i: 0,
        }
    }

    /// Has the instruction pointer reached the end of the program?
    pub fn is_done(&self, code: &Program) -> bool {
        self.i >= code.0.len()
    }

    /// The value of the currently addressed cell.
    pub fn cell(&self) -> u8 {
        self.cells[self.pointer]
    }

    /// Move the data pointer one cell to the right. The bound is checked
    /// after the move: walking off the tape is a programmer error in the
    /// running program, and the run fails rather than wrap or clamp.
    fn move_next(&mut self) -> Result<(), Error> {
        self.pointer += 1;
        if self.pointer >= TAPE_LEN {
            return Err(Error::TapeOutOfBounds);
        }
        Ok(())
    }

    /// Move the data pointer one cell to the left, failing the run if it
    /// would leave the tape.
    fn move_prev(&mut self) -> Result<(), Error> {
        if self.pointer == 0 {
            return Err(Error::TapeOutOfBounds);
        }
        self.pointer -= 1;
        Ok(())
    }

    /// Skip forward past the `]` matching the `[` the instruction
    /// pointer has just advanced over. Walks the program with a nesting
    /// counter starting at 1, up on every `[` and down on every `]`,
    /// and leaves the instruction pointer just past the match.
    fn skip_loop(&mut self, code: &Program) -> Result<(), Error> {
        let mut nesting = 1;
        let mut i = self.i;
        while nesting > 0 {
            if i >= code.0.len() {
                return Err(Error::UnmatchedLoopOpen);
            }
            match Op::from(code.0[i]) {
                Op::LoopOpen => nesting += 1,
                Op::LoopClose => nesting -= 1,
                _ => {}
            }
            i += 1;
        }
        trace!("skipped loop body: {} -> {}", self.i, i);
        self.i = i;
        Ok(())
    }

    /// Walk backward to the `[` matching the `]` the instruction pointer
    /// has just advanced over, and leave the instruction pointer just
    /// past it, so the next fetch re-executes the first instruction of
    /// the loop body. The nesting counter mirrors the forward scan: up
    /// on every `]` and down on every `[`.
    fn rewind_loop(&mut self, code: &Program) -> Result<(), Error> {
        let mut nesting = 1;
        // The pointer was pre-advanced past the `]`, so the scan starts
        // on the bracket itself and moves left from there.
        let mut i = self.i - 1;
        loop {
            if i == 0 {
                return Err(Error::UnmatchedLoopClose);
            }
            i -= 1;
            match Op::from(code.0[i]) {
                Op::LoopClose => nesting += 1,
                Op::LoopOpen => nesting -= 1,
                _ => {}
            }
            if nesting == 0 {
                break;
            }
        }
        trace!("rewound loop body: {} -> {}", self.i, i + 1);
        self.i = i + 1;
        Ok(())
    }

    /// Run a program using this interpreter and its device, until the
    /// instruction pointer reaches the end of the program or an
    /// operation fails.
    pub fn run(mut self, code: &Program) -> Result<T, Error> {
        while !self.is_done(code) {
            self.step(code)?
        }
        Ok(self.device)
    }

    /// Run a single step of the interpreter: fetch the byte at the
    /// instruction pointer, advance the pointer, and dispatch on the
    /// decoded opcode. The pointer is advanced *before* the handler
    /// executes; the bracket scans rely on that pre-advance for their
    /// starting point. A step past the end of the program is a no-op.
    pub fn step(&mut self, code: &Program) -> Result<(), Error> {
        let Some(&byte) = code.0.get(self.i) else {
            return Ok(());
        };
        self.i += 1;
        match Op::from(byte) {
            Op::Next => self.move_next()?,
            Op::Prev => self.move_prev()?,
            Op::Inc => self.cells[self.pointer] = self.cells[self.pointer].wrapping_add(1),
            Op::Dec => self.cells[self.pointer] = self.cells[self.pointer].wrapping_sub(1),
            Op::Put => {
                let cell = self.cells[self.pointer];
                self.device.put(cell).map_err(Error::Device)?
            }
            Op::Get => {
                // End of input leaves the cell unchanged.
                if let Some(byte) = self.device.get().map_err(Error::Device)? {
                    self.cells[self.pointer] = byte
                }
            }
            Op::LoopOpen => {
                if self.cell() == 0 {
                    self.skip_loop(code)?
                }
            }
            Op::LoopClose => {
                if self.cell() != 0 {
                    self.rewind_loop(code)?
                }
            }
            Op::Comment => {}
        }
        Ok(())
    }
}
