//! Configuration options for the engine.

use crate::{Error, String};

/// Default number of memory cells.
pub const DEFAULT_MEMORY_SIZE: usize = 30_000;

/// What happens when an instruction would cross a pointer or cell boundary.
///
/// The policy is fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// The offending instruction is a no-op.
    #[default]
    Lenient,
    /// The offending instruction fails the run with a boundary error.
    Strict,
}

impl OverflowPolicy {
    /// Map a `strict_overflow` flag to a policy.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            OverflowPolicy::Strict
        } else {
            OverflowPolicy::Lenient
        }
    }

    pub fn is_strict(self) -> bool {
        self == OverflowPolicy::Strict
    }
}

/// Configuration options for a run.
///
/// # Example
///
/// ```
/// use tapevm_core::api::{OverflowPolicy, RunOptions};
///
/// let options = RunOptions {
///     memory_size: 1024,
///     overflow: OverflowPolicy::Strict,
///     ..RunOptions::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Number of memory cells.
    ///
    /// Default: 30000
    pub memory_size: usize,

    /// Boundary policy.
    ///
    /// Default: [`OverflowPolicy::Lenient`]
    pub overflow: OverflowPolicy,

    /// Maximum number of instructions to execute (if Some).
    ///
    /// Set to `None` for unlimited execution; a program with an endless loop
    /// then runs until a hook fails.
    ///
    /// Default: None
    pub max_steps: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            memory_size: DEFAULT_MEMORY_SIZE,
            overflow: OverflowPolicy::default(),
            max_steps: None,
        }
    }
}

impl RunOptions {
    pub fn strict() -> Self {
        Self {
            overflow: OverflowPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_memory_size(mut self, memory_size: usize) -> Self {
        self.memory_size = memory_size;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Reject options no run could start with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.memory_size == 0 {
            return Err(Error::InvalidOptions(String::from(
                "memory size must be at least one cell",
            )));
        }
        Ok(())
    }
}
