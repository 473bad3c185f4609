//! Errors raised while validating or executing a program.
//!
//! # Error Categories
//!
//! - **Structural errors**: the bracket structure of the program is broken.
//!   These are detected before the first instruction runs and carry no
//!   position, since the imbalance belongs to the program as a whole.
//!
//! - **Boundary errors**: a pointer or cell limit was crossed while running
//!   under [`OverflowPolicy::Strict`](crate::api::OverflowPolicy::Strict).
//!   Under the lenient policy the same conditions are silent no-ops.
//!
//! - **Hook errors**: an input, output or observer hook refused to continue.
//!
//! - **Resource errors**: the optional step limit was reached.
//!
//! Every error that belongs to a single instruction carries the 1-based
//! character position of that instruction in the source text.

use crate::String;
use core::fmt;

/// Error produced by [`Program::parse`](crate::Program::parse) or by a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The program's `[` and `]` do not pair up.
    #[error("Bracket instructions ('[' and ']') do not match.")]
    UnbalancedBrackets,

    /// A boundary was crossed under the strict overflow policy.
    #[error("Character {position}: {violation}")]
    Boundary {
        position: usize,
        violation: BoundaryViolation,
    },

    /// The output sink or input source failed.
    #[error("Character {position}: {source}")]
    Io { position: usize, source: HookError },

    /// The observer stopped the run.
    #[error("Execution aborted by observer: {0}")]
    Aborted(HookError),

    /// The configured step limit was exceeded.
    #[error("Character {position}: Step limit of {limit} instructions exceeded.")]
    StepLimitExceeded { position: usize, limit: u64 },

    /// The run options were rejected before execution.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl Error {
    /// The 1-based character position of the offending instruction, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Boundary { position, .. }
            | Error::Io { position, .. }
            | Error::StepLimitExceeded { position, .. } => Some(*position),
            Error::UnbalancedBrackets | Error::Aborted(_) | Error::InvalidOptions(_) => None,
        }
    }

    /// The message without the `Character <N>:` prefix.
    pub fn message(&self) -> String {
        use crate::ToString;
        match self {
            Error::Boundary { violation, .. } => violation.to_string(),
            Error::Io { source, .. } => source.to_string(),
            Error::StepLimitExceeded { limit, .. } => {
                crate::format!("Step limit of {} instructions exceeded.", limit)
            }
            other => other.to_string(),
        }
    }

    /// Whether this error was raised by validation, before any instruction ran.
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::UnbalancedBrackets)
    }

    /// The boundary that was crossed, for strict-policy failures.
    pub fn violation(&self) -> Option<BoundaryViolation> {
        match self {
            Error::Boundary { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

/// The five boundaries enforced by the strict overflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryViolation {
    /// `>` on the last cell.
    PointerPastEnd,
    /// `<` on the first cell.
    PointerBeforeStart,
    /// `+` on a cell holding 255.
    IncrementOverflow,
    /// `-` on a cell holding 0.
    DecrementUnderflow,
    /// `,` read a value outside `0..=255`.
    InputOutOfRange,
}

impl fmt::Display for BoundaryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            BoundaryViolation::PointerPastEnd => "Cannot move data pointer forward, memory too small.",
            BoundaryViolation::PointerBeforeStart => {
                "Cannot move data pointer backward when it's on the first cell."
            }
            BoundaryViolation::IncrementOverflow => "Cannot increment 255.",
            BoundaryViolation::DecrementUnderflow => "Cannot decrement 0.",
            BoundaryViolation::InputOutOfRange => "Read number is too large to form a byte.",
        };
        f.write_str(message)
    }
}

/// Failure reported by a hook.
///
/// Hooks return this to stop the run; the engine wraps it in [`Error::Io`] or
/// [`Error::Aborted`] depending on which hook failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HookError {
    message: String,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn end_of_input() -> Self {
        Self::new("Unexpected end of input.")
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for HookError {
    fn from(err: std::io::Error) -> Self {
        HookError::new(crate::format!("I/O error: {}", err))
    }
}
