#![allow(dead_code)]

use once_cell::sync::Lazy;
use tapevm::{Capture, Error, NoopObserver, RunOptions, ScriptedInput};

/// Run `program` and return everything it wrote.
pub fn run_case(
    program: &str,
    options: &RunOptions,
    input: &mut ScriptedInput,
) -> Result<Vec<u8>, Error> {
    let mut output = Capture::new();
    tapevm::run(program, options, &mut output, input, &mut NoopObserver)?;
    Ok(output.into_bytes())
}

/// Declare a test that runs a program and checks its output or error.
///
/// `input` is a byte string fed to `,` (running out fails the run), and
/// `options` defaults to `RunOptions::default()`.
#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        program: $program:expr,
        $(input: $input:expr,)?
        $(options: $options:expr,)?
        output: $expected:expr $(,)?
    ) => {
        #[test]
        #[allow(unused_variables, unused_mut)]
        fn $name() {
            let options = tapevm::RunOptions::default();
            $(let options = $options;)?
            let mut input = tapevm::ScriptedInput::default();
            $(let mut input = tapevm::ScriptedInput::from_bytes($input);)?

            let expected: Result<&[u8], tapevm::Error> = $expected;
            let result = $crate::cases::run_case($program, &options, &mut input);
            pretty_assertions::assert_eq!(result.as_deref().map_err(Clone::clone), expected);
        }
    };
}

pub struct Sample {
    pub name: &'static str,
    pub program: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

/// Well-behaved programs that must produce the same output under both policies.
pub static SAMPLES: Lazy<Vec<Sample>> = Lazy::new(|| {
    vec![
        Sample {
            name: "multiply",
            program: "++++++++[>++++++++<-]>.",
            input: b"",
            output: b"@",
        },
        Sample {
            name: "echo",
            program: ",.",
            input: b"A",
            output: b"A",
        },
        Sample {
            name: "reverse_three",
            program: ",>,>,.<.<.",
            input: b"abc",
            output: b"cba",
        },
        Sample {
            name: "add_digits",
            // Reads two digits and prints their sum as a digit.
            program: ",>,[<+>-]<------------------------------------------------.",
            input: b"34",
            output: b"7",
        },
        Sample {
            name: "move_cell",
            program: "+++++[>+++++++++++++<-]>.",
            input: b"",
            output: b"A",
        },
        Sample {
            name: "empty",
            program: "",
            input: b"",
            output: b"",
        },
    ]
});
