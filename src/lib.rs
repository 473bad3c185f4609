//! TapeVM - a byte-tape virtual machine for the eight-instruction language
//!
//! # Overview
//!
//! Programs are written with the symbols `> < + - . , [ ]`; every other
//! character is a comment. A program runs over a fixed-size array of byte
//! cells with a single data pointer, and ends when its instruction pointer
//! runs off the end of the source text.
//!
//! # Quick Start
//!
//! ```
//! use tapevm::{Capture, NoopObserver, RunOptions, ScriptedInput, run};
//!
//! let mut output = Capture::new();
//! run(
//!     "++++++++[>++++++++<-]>.",
//!     &RunOptions::default(),
//!     &mut output,
//!     &mut ScriptedInput::default(),
//!     &mut NoopObserver,
//! )
//! .unwrap();
//! assert_eq!(output.bytes(), &[64]);
//! ```
//!
//! # Overflow Policy
//!
//! Moving the data pointer off either end of memory, incrementing 255,
//! decrementing 0 or reading a value that does not fit in a byte are boundary
//! violations. Under [`OverflowPolicy::Lenient`] (the default) the offending
//! instruction does nothing; under [`OverflowPolicy::Strict`] the run fails
//! with an [`Error`] carrying the 1-based position of the instruction.
//!
//! # Hooks
//!
//! Output, input and an observer are supplied by the caller; see
//! [`tapevm_core::api::hooks`]. Closures work directly:
//!
//! ```
//! use tapevm::{NoopObserver, RunOptions, run};
//!
//! let mut echoed = Vec::new();
//! run(",.", &RunOptions::default(), &mut |b: u8| echoed.push(b), &mut || 65_i32, &mut NoopObserver)
//!     .unwrap();
//! assert_eq!(echoed, b"A");
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_line, render_error_to, render_error_to_string,
    render_error_to_string_no_color,
};

// Re-export public API from tapevm_core
pub use tapevm_core::api::{
    Capture, DEFAULT_MEMORY_SIZE, EndOfInput, Engine, Input, NoopObserver, Observer, Output,
    OverflowPolicy, RunOptions, ScriptedInput, StdInput, StdOutput, Trace, TraceStep,
};
pub use tapevm_core::vm::{Instruction, Machine};
pub use tapevm_core::{BoundaryViolation, Error, HookError, Program, RunSummary, run};
