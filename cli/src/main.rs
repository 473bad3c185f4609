use clap::{CommandFactory, Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::process::ExitCode;
use tapevm::{
    EndOfInput, Engine, NoopObserver, Observer, OverflowPolicy, RunOptions, StdInput, StdOutput,
    render_error, render_error_line,
};

/// TapeVM - run programs for the eight-instruction tape machine
#[derive(Parser, Debug)]
#[command(name = "tapevm")]
#[command(about = "Run a tape machine program", long_about = None)]
#[command(disable_help_flag = true)]
struct Args {
    /// Print usage and exit
    #[arg(short, long)]
    help: bool,

    /// Number of memory cells
    #[arg(long, default_value_t = tapevm::DEFAULT_MEMORY_SIZE)]
    memory_size: usize,

    /// Fail on pointer and cell boundary violations instead of ignoring them
    #[arg(long)]
    strict: bool,

    /// What `,` does once standard input is exhausted
    #[arg(long, value_enum, default_value_t = Eof::Error)]
    eof: Eof,

    /// Stop after this many instructions
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print every machine state to stderr
    #[arg(long)]
    trace: bool,

    /// Also render errors with the offending source line on stderr
    #[arg(long)]
    pretty_errors: bool,

    /// Program file
    filename: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Eof {
    /// Fail the run
    Error,
    /// Read a zero byte
    Zero,
    /// Leave the cell unchanged
    Keep,
}

impl From<Eof> for EndOfInput {
    fn from(eof: Eof) -> Self {
        match eof {
            Eof::Error => EndOfInput::Fail,
            Eof::Zero => EndOfInput::Value(0),
            // Out of byte range, so the lenient policy skips the store.
            Eof::Keep => EndOfInput::Value(-1),
        }
    }
}

/// Observer that writes one line per machine state.
struct TraceObserver<W> {
    out: W,
}

impl<W: Write> Observer for TraceObserver<W> {
    fn observe(
        &mut self,
        memory: &[u8],
        data_pointer: usize,
        instruction_pointer: usize,
    ) -> std::result::Result<(), tapevm::HookError> {
        let cell = memory.get(data_pointer).copied().unwrap_or_default();
        writeln!(
            self.out,
            "step ip={} dp={} cell={}",
            instruction_pointer, data_pointer, cell
        )?;
        Ok(())
    }
}

/// Parse the command line into the options and the program filename.
///
/// Returns `None` whenever usage should be printed instead: `--help`, a
/// missing filename, or arguments clap rejects.
fn parse_args<I, T>(argv: I) -> Option<(Args, String)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(mut args) if !args.help => args.filename.take().map(|filename| (args, filename)),
        Ok(_) => None,
        Err(err) => {
            eprint!("{}", err);
            None
        }
    }
}

fn usage_text(program: &str) -> String {
    format!(
        "Filename not specified. Usage: {} <filename>\n\n{}",
        program,
        Args::command().render_help()
    )
}

fn usage() -> ExitCode {
    let program = std::env::args().next().unwrap_or_else(|| "tapevm".to_string());
    println!("{}", usage_text(&program).trim_end());
    ExitCode::FAILURE
}

fn main() -> Result<ExitCode> {
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the log level, WARN by default.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let Some((args, filename)) = parse_args(std::env::args_os()) else {
        return Ok(usage());
    };

    let source = match std::fs::read_to_string(&filename) {
        Ok(source) => source,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!("File {} not found.", filename);
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => {
            return Err(err)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read {}", filename));
        }
    };

    let options = RunOptions {
        memory_size: args.memory_size,
        overflow: OverflowPolicy::from_strict(args.strict),
        max_steps: args.max_steps,
    };
    tracing::debug!(?options, filename = %filename, "running program");

    let mut output = StdOutput;
    let mut input = StdInput::new(args.eof.into());
    let mut tracer = TraceObserver {
        out: std::io::stderr(),
    };
    let mut noop = NoopObserver;
    let observer: &mut dyn Observer = if args.trace { &mut tracer } else { &mut noop };

    match Engine::new(options).run(&source, &mut output, &mut input, observer) {
        Ok(summary) => {
            tracing::debug!(
                steps = summary.steps,
                jump_scans = summary.jump_scans,
                "program finished"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if args.pretty_errors {
                render_error(&err, &source);
            }
            println!("{}", render_error_line(&err));
            Ok(ExitCode::FAILURE)
        }
    }
}
