//! # The BFVM Virtual Machine
//!
//! This crate implements a small virtual machine for the brainfuck
//! esoteric language: a fixed-size tape of byte cells, a data pointer,
//! and eight opcodes for pointer movement, cell arithmetic, I/O, and
//! bracket-delimited looping.
//!
//! ## What is this machine?
//!
//! The machine is a Turing tape with a read/write head. A program is an
//! immutable sequence of raw bytes; the dispatch loop fetches one byte at
//! a time, advances the instruction pointer, and executes the opcode the
//! byte decodes to. Any byte outside the opcode set is a comment and is
//! silently skipped.
//!
//! Loops are the only control flow, and they are resolved *lazily*: no
//! jump table is ever built. When control reaches a bracket whose loop
//! must be skipped or re-entered, the interpreter scans the program
//! linearly with a nesting counter to find the matching bracket. The scan
//! is repeated on every traversal, so a loop costs O(body length) per
//! iteration. That cost profile is part of the machine's contract.
//!
//! ## Index
//!
//! 1. [The Virtual Machine](./vm/index.html)
//! 2. [The Interpreter and its Devices](./vm/interpreter/index.html)
pub mod vm;

/// The number of cells on the tape, allocated once per run and
/// zero-initialized before the first instruction executes.
pub const TAPE_LEN: usize = 30000;
