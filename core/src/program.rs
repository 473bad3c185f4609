//! Program decoding and bracket validation.
//!
//! A [`Program`] is the decoded, validated form of a source text. Decoding maps
//! every character to an [`Instruction`]; characters outside the eight-symbol
//! alphabet become [`Instruction::Nop`] and still occupy a position, so
//! positions reported in errors are character offsets into the original text.
//!
//! Validation runs once, before any execution, and produces the bracket depth
//! annotation that the engine uses to pair loops lazily.

use crate::{Error, Vec, vm::Instruction};
use tracing::debug;

/// Nesting depth of every bracket in a program.
///
/// Defined only at `[` and `]` positions. A `[` records the depth before
/// entering its loop and a `]` records the depth after leaving it, so the two
/// brackets of one loop always carry the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketDepths {
    depths: Vec<Option<usize>>,
}

impl BracketDepths {
    /// Scan `instructions` left to right and annotate every bracket.
    ///
    /// Fails with [`Error::UnbalancedBrackets`] if a `]` appears with no open
    /// loop, or if loops are still open at the end of the program.
    pub fn annotate(instructions: &[Instruction]) -> Result<Self, Error> {
        let mut depths = Vec::with_capacity(instructions.len());
        let mut depth: usize = 0;

        for instruction in instructions {
            let recorded = match instruction {
                Instruction::LoopStart => {
                    let recorded = depth;
                    depth += 1;
                    Some(recorded)
                }
                Instruction::LoopEnd => {
                    depth = depth.checked_sub(1).ok_or(Error::UnbalancedBrackets)?;
                    Some(depth)
                }
                _ => None,
            };
            depths.push(recorded);
        }

        if depth != 0 {
            return Err(Error::UnbalancedBrackets);
        }

        Ok(Self { depths })
    }

    /// Depth recorded at `position`, or `None` if it is not a bracket.
    #[inline]
    pub fn at(&self, position: usize) -> Option<usize> {
        self.depths.get(position).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Number of bracket characters in the program.
    pub fn bracket_count(&self) -> usize {
        self.depths.iter().filter(|d| d.is_some()).count()
    }
}

/// A decoded and validated program.
///
/// Immutable once built; any number of independent runs may share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    depths: BracketDepths,
}

impl Program {
    /// Decode `source` and validate its brackets.
    pub fn parse(source: &str) -> Result<Self, Error> {
        let instructions: Vec<Instruction> = source.chars().map(Instruction::decode).collect();
        Self::from_instructions(instructions)
    }

    /// Validate an already decoded instruction sequence.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Result<Self, Error> {
        let depths = BracketDepths::annotate(&instructions)?;
        debug!(
            len = instructions.len(),
            brackets = depths.bracket_count(),
            "program validated"
        );
        Ok(Self {
            instructions,
            depths,
        })
    }

    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<Instruction> {
        self.instructions.get(position).copied()
    }

    pub fn depths(&self) -> &BracketDepths {
        &self.depths
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl core::str::FromStr for Program {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Program::parse(source)
    }
}
