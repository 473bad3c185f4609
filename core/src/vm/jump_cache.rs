use crate::{Error, Program, Vec, vec, vm::Instruction};
use tracing::trace;

/// Lazily filled loop-pairing tables for one run.
///
/// `closing[open]` holds the position of the `]` matching the `[` at `open`,
/// and `opening[close]` the reverse. Entries start unknown and are filled the
/// first time either bracket of a pair is taken as a jump; both directions
/// are stored at once, so each pair costs exactly one linear scan per run no
/// matter how many times the loop iterates. The program is immutable during a
/// run, so an entry is never invalidated.
#[derive(Debug)]
pub struct JumpCache {
    closing: Vec<Option<usize>>,
    opening: Vec<Option<usize>>,
    scans: usize,
}

impl JumpCache {
    pub fn new(program_len: usize) -> Self {
        Self {
            closing: vec![None; program_len],
            opening: vec![None; program_len],
            scans: 0,
        }
    }

    /// Position of the `]` matching the `[` at `open`.
    ///
    /// A position that is not a bracket of `program` is reported as
    /// [`Error::UnbalancedBrackets`].
    #[inline]
    pub fn closing_for(&mut self, program: &Program, open: usize) -> Result<usize, Error> {
        if let Some(close) = self.closing.get(open).copied().flatten() {
            return Ok(close);
        }
        let close = Self::scan(program, open, Instruction::LoopEnd, Direction::Forward)?;
        self.remember(open, close);
        Ok(close)
    }

    /// Position of the `[` matching the `]` at `close`.
    #[inline]
    pub fn opening_for(&mut self, program: &Program, close: usize) -> Result<usize, Error> {
        if let Some(open) = self.opening.get(close).copied().flatten() {
            return Ok(open);
        }
        let open = Self::scan(program, close, Instruction::LoopStart, Direction::Backward)?;
        self.remember(open, close);
        Ok(open)
    }

    /// Number of linear scans performed so far.
    pub fn scans(&self) -> usize {
        self.scans
    }

    /// Number of bracket pairs resolved so far.
    pub fn resolved_pairs(&self) -> usize {
        self.closing.iter().filter(|entry| entry.is_some()).count()
    }

    fn remember(&mut self, open: usize, close: usize) {
        self.scans += 1;
        if let Some(entry) = self.closing.get_mut(open) {
            *entry = Some(close);
        }
        if let Some(entry) = self.opening.get_mut(close) {
            *entry = Some(open);
        }
        trace!(open, close, "resolved loop");
    }

    /// Find the nearest `target` bracket at the same depth as the bracket at `from`.
    ///
    /// Validation guarantees the match exists; a miss means the program and
    /// its depth annotation disagree, which is reported as a structural error.
    fn scan(
        program: &Program,
        from: usize,
        target: Instruction,
        direction: Direction,
    ) -> Result<usize, Error> {
        let depths = program.depths();
        let depth = depths.at(from).ok_or(Error::UnbalancedBrackets)?;
        let is_match = |&position: &usize| {
            program.get(position) == Some(target) && depths.at(position) == Some(depth)
        };
        let found = match direction {
            Direction::Forward => (from + 1..program.len()).find(is_match),
            Direction::Backward => (0..from).rev().find(is_match),
        };
        found.ok_or(Error::UnbalancedBrackets)
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}
