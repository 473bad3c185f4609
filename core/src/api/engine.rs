//! The tape engine.

use super::{Input, Observer, Output, RunOptions};
use crate::vm::{Machine, RunSummary};
use crate::{Error, Program};

/// Validates programs and runs them with a fixed set of options.
///
/// The engine itself holds no run state: every call to [`Engine::execute`]
/// builds a fresh [`Machine`], so one engine (and one compiled program) can
/// serve any number of independent runs.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: RunOptions,
}

impl Engine {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Decode and validate a source text.
    ///
    /// Fails with [`Error::UnbalancedBrackets`] before anything runs if the
    /// brackets do not pair up.
    pub fn compile(&self, source: &str) -> Result<Program, Error> {
        Program::parse(source)
    }

    /// Run a compiled program to completion with fresh memory.
    pub fn execute<O, I, W>(
        &self,
        program: &Program,
        output: &mut O,
        input: &mut I,
        observer: &mut W,
    ) -> Result<RunSummary, Error>
    where
        O: Output + ?Sized,
        I: Input + ?Sized,
        W: Observer + ?Sized,
    {
        let mut machine = Machine::new(program, &self.options)?;
        machine.run(output, input, observer)?;
        Ok(machine.into_summary())
    }

    /// Compile and run in one call.
    pub fn run<O, I, W>(
        &self,
        source: &str,
        output: &mut O,
        input: &mut I,
        observer: &mut W,
    ) -> Result<RunSummary, Error>
    where
        O: Output + ?Sized,
        I: Input + ?Sized,
        W: Observer + ?Sized,
    {
        let program = self.compile(source)?;
        self.execute(&program, output, input, observer)
    }
}
