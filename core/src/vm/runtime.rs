use crate::{
    BoundaryViolation, Error, Program, Vec,
    api::{Input, Observer, OverflowPolicy, Output, RunOptions},
    vm::{Instruction, JumpCache, Tape},
};
use tracing::debug;

/// State of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of instructions executed, `Nop`s included.
    pub steps: u64,
    /// Number of linear bracket scans performed.
    pub jump_scans: usize,
    /// Final data pointer.
    pub data_pointer: usize,
    /// Final memory contents.
    pub memory: Vec<u8>,
}

/// The execution context of one run.
///
/// Owns the memory, both pointers and the jump cache. A machine is built for
/// a single run and dropped afterwards; nothing is shared between machines
/// except the immutable [`Program`].
pub struct Machine<'p> {
    program: &'p Program,
    policy: OverflowPolicy,
    max_steps: Option<u64>,
    tape: Tape,
    jumps: JumpCache,
    ip: usize,
    steps: u64,
}

impl<'p> Machine<'p> {
    /// Create a machine with zeroed memory, both pointers at 0.
    pub fn new(program: &'p Program, options: &RunOptions) -> Result<Self, Error> {
        options.validate()?;
        Ok(Machine {
            program,
            policy: options.overflow,
            max_steps: options.max_steps,
            tape: Tape::new(options.memory_size)?,
            jumps: JumpCache::new(program.len()),
            ip: 0,
            steps: 0,
        })
    }

    /// Run until the instruction pointer leaves the program.
    ///
    /// The observer sees the state once before the first instruction and once
    /// after every instruction, including the final state whose instruction
    /// pointer is past the end.
    pub fn run<O, I, W>(
        &mut self,
        output: &mut O,
        input: &mut I,
        observer: &mut W,
    ) -> Result<(), Error>
    where
        O: Output + ?Sized,
        I: Input + ?Sized,
        W: Observer + ?Sized,
    {
        debug!(
            len = self.program.len(),
            memory = self.tape.len(),
            strict = self.policy.is_strict(),
            "run started"
        );
        self.notify(observer)?;

        while let Some(instruction) = self.program.get(self.ip) {
            if let Some(limit) = self.max_steps.filter(|&limit| self.steps >= limit) {
                return Err(Error::StepLimitExceeded {
                    position: self.position(),
                    limit,
                });
            }
            self.step(instruction, output, input)?;
            self.steps += 1;
            self.notify(observer)?;
        }

        debug!(steps = self.steps, scans = self.jumps.scans(), "run finished");
        Ok(())
    }

    /// Execute the instruction at the current position and advance.
    fn step<O, I>(
        &mut self,
        instruction: Instruction,
        output: &mut O,
        input: &mut I,
    ) -> Result<(), Error>
    where
        O: Output + ?Sized,
        I: Input + ?Sized,
    {
        match instruction {
            Instruction::MoveRight => {
                let moved = self.tape.move_right();
                self.check(moved, BoundaryViolation::PointerPastEnd)?;
            }
            Instruction::MoveLeft => {
                let moved = self.tape.move_left();
                self.check(moved, BoundaryViolation::PointerBeforeStart)?;
            }
            Instruction::Increment => {
                let changed = self.tape.increment();
                self.check(changed, BoundaryViolation::IncrementOverflow)?;
            }
            Instruction::Decrement => {
                let changed = self.tape.decrement();
                self.check(changed, BoundaryViolation::DecrementUnderflow)?;
            }
            Instruction::Output => {
                output
                    .write_byte(self.tape.current())
                    .map_err(|source| Error::Io {
                        position: self.position(),
                        source,
                    })?;
            }
            Instruction::Input => {
                let value = input.read_value().map_err(|source| Error::Io {
                    position: self.position(),
                    source,
                })?;
                let stored = self.tape.store(value);
                self.check(stored, BoundaryViolation::InputOutOfRange)?;
            }
            // A taken jump lands on the matching bracket itself, which then
            // runs as the next instruction.
            Instruction::LoopStart => {
                if self.tape.current() == 0 {
                    let close = self.jumps.closing_for(self.program, self.ip)?;
                    self.ip = close;
                    return Ok(());
                }
            }
            Instruction::LoopEnd => {
                if self.tape.current() != 0 {
                    let open = self.jumps.opening_for(self.program, self.ip)?;
                    self.ip = open;
                    return Ok(());
                }
            }
            Instruction::Nop => {}
        }
        self.ip += 1;
        Ok(())
    }

    /// Apply the overflow policy to an operation that may have hit a boundary.
    #[inline]
    fn check(&self, took_effect: bool, violation: BoundaryViolation) -> Result<(), Error> {
        if took_effect || !self.policy.is_strict() {
            return Ok(());
        }
        let position = self.position();
        debug!(position, %violation, "boundary violation");
        Err(Error::Boundary {
            position,
            violation,
        })
    }

    fn notify<W: Observer + ?Sized>(&self, observer: &mut W) -> Result<(), Error> {
        observer
            .observe(self.tape.cells(), self.tape.pointer(), self.ip)
            .map_err(Error::Aborted)
    }

    /// 1-based position of the current instruction.
    #[inline]
    fn position(&self) -> usize {
        self.ip + 1
    }

    pub fn instruction_pointer(&self) -> usize {
        self.ip
    }

    pub fn data_pointer(&self) -> usize {
        self.tape.pointer()
    }

    pub fn memory(&self) -> &[u8] {
        self.tape.cells()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn jump_scans(&self) -> usize {
        self.jumps.scans()
    }

    pub fn into_summary(self) -> RunSummary {
        RunSummary {
            steps: self.steps,
            jump_scans: self.jumps.scans(),
            data_pointer: self.tape.pointer(),
            memory: self.tape.into_cells(),
        }
    }
}
