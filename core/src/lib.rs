#![cfg_attr(not(feature = "std"), no_std)]

//! Core of TapeVM: a byte-tape virtual machine for the eight-instruction
//! language `> < + - . , [ ]`.
//!
//! ```
//! use tapevm_core::{run, api::{Capture, NoopObserver, RunOptions, ScriptedInput}};
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
//! assert_eq!(output.text(), "@");
//! ```

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod error;
pub mod program;
pub mod vm;


pub use error::{BoundaryViolation, Error, HookError};
pub use program::{BracketDepths, Program};
pub use vm::RunSummary;

use api::{Engine, Input, Observer, Output, RunOptions};

/// Validate `source` and run it to completion.
///
/// Validation happens first: a program with unbalanced brackets fails with
/// [`Error::UnbalancedBrackets`] and the observer is never called. Otherwise
/// the observer is called once before the first instruction and once after
/// each instruction, and the run ends when the instruction pointer leaves the
/// program.
pub fn run<O, I, W>(
    source: &str,
    options: &RunOptions,
    output: &mut O,
    input: &mut I,
    observer: &mut W,
) -> Result<RunSummary, Error>
where
    O: Output + ?Sized,
    I: Input + ?Sized,
    W: Observer + ?Sized,
{
    Engine::new(options.clone()).run(source, output, input, observer)
}
