//! Error rendering using ariadne
//!
//! Positioned errors are rendered as a report pointing at the offending
//! character of the source text. Errors without a position (unbalanced
//! brackets, observer aborts, rejected options) have nothing to point at and
//! render as the one-line form.

use crate::Error;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<program>";

/// The one-line form used by the command line tool.
///
/// `Error: <message>` for unpositioned errors and
/// `Error: Character <N>: <message>` otherwise.
///
/// # Example
/// ```
/// use tapevm::{Program, render_error_line};
///
/// let err = Program::parse("[").unwrap_err();
/// assert_eq!(
///     render_error_line(&err),
///     "Error: Bracket instructions ('[' and ']') do not match."
/// );
/// ```
pub fn render_error_line(error: &Error) -> String {
    format!("Error: {}", error)
}

/// Render an error with its source snippet to stderr
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(position) = error.position() else {
        return writeln!(writer, "{}", render_error_line(error));
    };

    // Positions are 1-based character offsets; ariadne spans count characters too.
    let len = source.chars().count();
    let start = position.saturating_sub(1).min(len);
    let span = start..(start + 1).min(len);
    let message = error.message();

    Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_message(format!("Character {}: {}", position, message))
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capture, NoopObserver, Program, RunOptions, ScriptedInput, run};

    fn strict_error(source: &str) -> Error {
        run(
            source,
            &RunOptions::strict().with_memory_size(4),
            &mut Capture::new(),
            &mut ScriptedInput::default(),
            &mut NoopObserver,
        )
        .unwrap_err()
    }

    #[test]
    fn test_render_line_with_position() {
        let err = strict_error("+--");
        assert_eq!(
            render_error_line(&err),
            "Error: Character 3: Cannot decrement 0."
        );
    }

    #[test]
    fn test_render_structural_error_without_snippet() {
        let err = Program::parse("]").unwrap_err();
        let output = render_error_to_string_no_color(&err, "]");
        assert_eq!(
            output,
            "Error: Bracket instructions ('[' and ']') do not match.\n"
        );
    }

    #[test]
    fn test_render_boundary_error_shows_source() {
        let source = "++ move left <";
        let err = strict_error(source);
        let output = render_error_to_string_no_color(&err, source);

        assert!(output.contains("Character 14"));
        assert!(output.contains(source));
        assert!(output.contains("first cell"));
        // Should be multi-line (ariadne adds formatting)
        assert!(output.lines().count() > 1);
    }
}
