//! Public API for running tape programs.
//!
//! Two entry points:
//!
//! 1. **One-shot**: [`run`](crate::run) validates and executes a source text in
//!    a single call.
//! 2. **Engine**: [`Engine::compile`] validates once, [`Engine::execute`] runs
//!    the resulting [`Program`](crate::Program) any number of times, each run
//!    with fresh memory.
//!
//! # Example
//!
//! ```
//! use tapevm_core::api::{Capture, Engine, NoopObserver, RunOptions, ScriptedInput};
//!
//! let engine = Engine::new(RunOptions::default());
//! let program = engine.compile("++++++++[>++++++++<-]>.").unwrap();
//!
//! let mut output = Capture::new();
//! let summary = engine
//!     .execute(&program, &mut output, &mut ScriptedInput::default(), &mut NoopObserver)
//!     .unwrap();
//! assert_eq!(output.bytes(), &[64]);
//! assert_eq!(summary.jump_scans, 1);
//! ```

pub mod engine;
pub mod hooks;
pub mod options;

pub use engine::Engine;
pub use hooks::{
    Capture, EndOfInput, Input, NoopObserver, Observer, Output, ScriptedInput, Trace, TraceStep,
};
#[cfg(feature = "std")]
pub use hooks::{StdInput, StdOutput};
pub use options::{DEFAULT_MEMORY_SIZE, OverflowPolicy, RunOptions};
