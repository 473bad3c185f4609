mod cases;

use pretty_assertions::assert_eq;
use tapevm::{
    BoundaryViolation, Capture, Error, NoopObserver, RunOptions, ScriptedInput, render_error_line,
    run,
};

fn boundary(position: usize, violation: BoundaryViolation) -> Error {
    Error::Boundary {
        position,
        violation,
    }
}

test_case!(
    lenient_move_left_at_start,
    program: "<+.",
    output: Ok(&[1]),
);

test_case!(
    lenient_move_right_at_end,
    program: ">>+.<.",
    options: RunOptions::default().with_memory_size(2),
    output: Ok(&[1, 0]),
);

test_case!(
    lenient_decrement_zero,
    program: "-.",
    output: Ok(&[0]),
);

test_case!(
    lenient_increment_saturates,
    program: &format!("{}.", "+".repeat(300)),
    output: Ok(&[255]),
);

test_case!(
    strict_move_left_at_start,
    program: "+<",
    options: RunOptions::strict(),
    output: Err(boundary(2, BoundaryViolation::PointerBeforeStart)),
);

test_case!(
    strict_move_right_at_end,
    program: ">>",
    options: RunOptions::strict().with_memory_size(2),
    output: Err(boundary(2, BoundaryViolation::PointerPastEnd)),
);

test_case!(
    strict_decrement_zero,
    program: "+--",
    options: RunOptions::strict(),
    output: Err(boundary(3, BoundaryViolation::DecrementUnderflow)),
);

test_case!(
    strict_increment_overflow,
    program: &"+".repeat(256),
    options: RunOptions::strict(),
    output: Err(boundary(256, BoundaryViolation::IncrementOverflow)),
);

test_case!(
    strict_positions_count_comments,
    program: "move left now <",
    options: RunOptions::strict(),
    output: Err(boundary(15, BoundaryViolation::PointerBeforeStart)),
);

fn strict_input_error(value: i32) -> Error {
    run(
        "+,",
        &RunOptions::strict(),
        &mut Capture::new(),
        &mut ScriptedInput::new([value]),
        &mut NoopObserver,
    )
    .unwrap_err()
}

#[test]
fn test_strict_input_out_of_range() {
    assert_eq!(
        strict_input_error(256),
        boundary(2, BoundaryViolation::InputOutOfRange)
    );
    assert_eq!(
        strict_input_error(-1),
        boundary(2, BoundaryViolation::InputOutOfRange)
    );
}

#[test]
fn test_lenient_input_out_of_range_keeps_cell() {
    let mut output = Capture::new();
    run(
        "+++,.,.",
        &RunOptions::default(),
        &mut output,
        &mut ScriptedInput::new([1000, -5]),
        &mut NoopObserver,
    )
    .unwrap();
    assert_eq!(output.bytes(), &[3, 3]);
}

#[test]
fn test_input_edges_are_accepted() {
    let mut output = Capture::new();
    run(
        ",.,.",
        &RunOptions::strict(),
        &mut output,
        &mut ScriptedInput::new([0, 255]),
        &mut NoopObserver,
    )
    .unwrap();
    assert_eq!(output.bytes(), &[0, 255]);
}

#[test]
fn test_strict_failure_keeps_earlier_output() {
    let mut output = Capture::new();
    let err = run(
        "+.--",
        &RunOptions::strict(),
        &mut output,
        &mut ScriptedInput::default(),
        &mut NoopObserver,
    )
    .unwrap_err();
    assert_eq!(output.bytes(), &[1]);
    assert_eq!(
        render_error_line(&err),
        "Error: Character 4: Cannot decrement 0."
    );
}

#[test]
fn test_error_lines() {
    let cases = [
        (
            "<",
            "Error: Character 1: Cannot move data pointer backward when it's on the first cell.",
        ),
        ("-", "Error: Character 1: Cannot decrement 0."),
        ("[", "Error: Bracket instructions ('[' and ']') do not match."),
    ];
    for (program, expected) in cases {
        let err = run(
            program,
            &RunOptions::strict(),
            &mut Capture::new(),
            &mut ScriptedInput::default(),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert_eq!(render_error_line(&err), expected);
    }
}
