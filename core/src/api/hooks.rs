//! Input, output and observer hooks.
//!
//! The engine never touches a device itself. Bytes leave through an
//! [`Output`], values arrive through an [`Input`], and an [`Observer`] sees
//! the machine state before the first instruction and after every
//! instruction. All three are called inline and may block; the run makes no
//! progress while a hook is blocked.
//!
//! Infallible closures implement the traits directly:
//!
//! ```
//! use tapevm_core::{run, api::{NoopObserver, RunOptions}};
//!
//! let mut out = Vec::new();
//! run(",.", &RunOptions::default(), &mut |b: u8| out.push(b), &mut || 65_i32, &mut NoopObserver)
//!     .unwrap();
//! assert_eq!(out, [65]);
//! ```
//!
//! Implement the trait on a type instead when the hook needs to stop the run
//! by returning a [`HookError`].

use crate::{HookError, String, Vec};
use alloc::collections::VecDeque;

/// Consumes output bytes, one per `.` instruction.
pub trait Output {
    fn write_byte(&mut self, byte: u8) -> Result<(), HookError>;
}

/// Produces input values, one per `,` instruction.
///
/// Values outside `0..=255` are legal here; the engine treats them as a
/// boundary violation of the `,` instruction.
pub trait Input {
    fn read_value(&mut self) -> Result<i32, HookError>;
}

/// Sees the machine state before the first instruction and after each one.
///
/// `instruction_pointer` may equal the program length on the final call,
/// when the run is about to finish.
pub trait Observer {
    fn observe(
        &mut self,
        memory: &[u8],
        data_pointer: usize,
        instruction_pointer: usize,
    ) -> Result<(), HookError>;
}

impl<F: FnMut(u8)> Output for F {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), HookError> {
        self(byte);
        Ok(())
    }
}

impl<F: FnMut() -> i32> Input for F {
    #[inline]
    fn read_value(&mut self) -> Result<i32, HookError> {
        Ok(self())
    }
}

impl<F: FnMut(&[u8], usize, usize)> Observer for F {
    #[inline]
    fn observe(
        &mut self,
        memory: &[u8],
        data_pointer: usize,
        instruction_pointer: usize,
    ) -> Result<(), HookError> {
        self(memory, data_pointer, instruction_pointer);
        Ok(())
    }
}

/// What an input source yields once it has nothing left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndOfInput {
    /// Fail the run with [`HookError::end_of_input`].
    #[default]
    Fail,
    /// Keep yielding this value.
    ///
    /// `Value(0)` stores zero. `Value(-1)` leaves the cell unchanged under the
    /// lenient policy and raises the input violation under the strict one.
    Value(i32),
}

impl EndOfInput {
    fn resolve(self) -> Result<i32, HookError> {
        match self {
            EndOfInput::Fail => Err(HookError::end_of_input()),
            EndOfInput::Value(value) => Ok(value),
        }
    }
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn observe(&mut self, _: &[u8], _: usize, _: usize) -> Result<(), HookError> {
        Ok(())
    }
}

/// Output sink that keeps every byte in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capture {
    bytes: Vec<u8>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The captured bytes as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Output for Capture {
    fn write_byte(&mut self, byte: u8) -> Result<(), HookError> {
        self.bytes.push(byte);
        Ok(())
    }
}

/// Input source fed from a fixed list of values, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedInput {
    values: VecDeque<i32>,
    end_of_input: EndOfInput,
}

impl ScriptedInput {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            end_of_input: EndOfInput::default(),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().map(|&b| i32::from(b)))
    }

    pub fn with_end_of_input(mut self, end_of_input: EndOfInput) -> Self {
        self.end_of_input = end_of_input;
        self
    }

    /// Number of values not yet read.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Input for ScriptedInput {
    fn read_value(&mut self) -> Result<i32, HookError> {
        match self.values.pop_front() {
            Some(value) => Ok(value),
            None => self.end_of_input.resolve(),
        }
    }
}

/// One observed machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    pub instruction_pointer: usize,
    pub data_pointer: usize,
    /// Value of the cell under the data pointer.
    pub cell: u8,
}

/// Observer that records every state it sees.
///
/// With a limit, only the most recent `limit` states are kept.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    steps: VecDeque<TraceStep>,
    limit: Option<usize>,
    observed: u64,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.back()
    }

    /// Total number of observer calls, including dropped ones.
    pub fn observed(&self) -> u64 {
        self.observed
    }
}

impl Observer for Trace {
    fn observe(
        &mut self,
        memory: &[u8],
        data_pointer: usize,
        instruction_pointer: usize,
    ) -> Result<(), HookError> {
        self.observed += 1;
        if self.limit == Some(0) {
            return Ok(());
        }
        if self.limit == Some(self.steps.len()) {
            self.steps.pop_front();
        }
        self.steps.push_back(TraceStep {
            instruction_pointer,
            data_pointer,
            cell: memory.get(data_pointer).copied().unwrap_or_default(),
        });
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use self::stdio::{StdInput, StdOutput};

#[cfg(feature = "std")]
mod stdio {
    use super::{EndOfInput, Input, Output};
    use crate::HookError;
    use std::io::{self, Read, Write};

    /// Writes each byte to standard output and flushes immediately.
    #[derive(Debug, Default)]
    pub struct StdOutput;

    impl Output for StdOutput {
        fn write_byte(&mut self, byte: u8) -> Result<(), HookError> {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&[byte])?;
            stdout.flush()?;
            Ok(())
        }
    }

    /// Reads one byte per call from standard input, blocking until it arrives.
    #[derive(Debug, Default)]
    pub struct StdInput {
        end_of_input: EndOfInput,
    }

    impl StdInput {
        pub fn new(end_of_input: EndOfInput) -> Self {
            Self { end_of_input }
        }
    }

    impl Input for StdInput {
        fn read_value(&mut self) -> Result<i32, HookError> {
            let mut byte = [0u8; 1];
            match io::stdin().lock().read_exact(&mut byte) {
                Ok(()) => Ok(i32::from(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    self.end_of_input.resolve()
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
