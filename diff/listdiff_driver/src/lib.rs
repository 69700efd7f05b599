//! Contains the main `run()` function for the `listdiff` command.

use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use input::Projection;
use listdiff_core::{Applier, DiffSection, Summary};
use serde_json::Value;

pub mod input;

/// How an edit script is printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum,
)]
pub enum Format {
    /// One `kind length` line per section.
    #[clap(name = "text")]
    Text,

    /// A JSON array of sections, readable by `apply --script`.
    #[clap(name = "json")]
    Json,
}

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "listdiff",
    about = "Computes and applies edit scripts between JSON arrays",
    author = "Simmypeet"
)]
pub struct Arguments {
    /// The operation to run.
    #[clap(subcommand)]
    pub command: Command,
}

/// The operations the program can run.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Subcommand,
)]
pub enum Command {
    /// Prints the edit script turning the first array into the second.
    Diff(DiffArguments),

    /// Applies an edit script to the first array and prints the result.
    Apply(ApplyArguments),
}

/// The arguments of the `diff` command.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Args)]
pub struct DiffArguments {
    /// The file holding the original JSON array.
    pub first: PathBuf,

    /// The file holding the updated JSON array.
    pub second: PathBuf,

    /// Compares elements by the value at this JSON pointer (or top-level
    /// member name) instead of by their whole content.
    #[clap(short, long)]
    pub key: Option<String>,

    /// Specifies how the edit script is printed.
    #[clap(short, long, default_value = "text")]
    pub format: Format,
}

/// The arguments of the `apply` command.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Args)]
pub struct ApplyArguments {
    /// The file holding the JSON array to transform.
    pub first: PathBuf,

    /// The file holding the JSON array to transform into.
    pub second: PathBuf,

    /// A script written by `diff --format json`. If not specified, the script
    /// is computed from the two arrays.
    #[clap(short, long)]
    pub script: Option<PathBuf>,

    /// Compares elements by the value at this JSON pointer when computing the
    /// script. Ignored when `--script` is given.
    #[clap(short, long)]
    pub key: Option<String>,

    /// Inserts and removes runs of elements in one operation each.
    #[clap(short, long)]
    pub batched: bool,

    /// The output path of the resulting array. If not specified, the array is
    /// written to the standard output.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

/// An error that stops the program.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] input::Error),

    #[error(transparent)]
    Script(#[from] listdiff_core::Error),

    #[error("failed to write the output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize the output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: Arguments) -> ExitCode {
    let result = match argument.command {
        Command::Diff(argument) => diff(&argument),
        Command::Apply(argument) => apply(&argument),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn compute_script(
    first: &[Value],
    second: &[Value],
    key: Option<&str>,
) -> Vec<DiffSection> {
    let script =
        listdiff_core::diff_with(first, second, Projection::new(key))
            .collect::<Vec<_>>();

    let summary = Summary::of(&script);
    log::info!(
        "{} sections: {} copied, {} inserted, {} deleted",
        script.len(),
        summary.copied(),
        summary.inserted(),
        summary.deleted()
    );

    script
}

/// Formats the edit script between the two arrays of `argument`.
///
/// # Errors
///
/// If either input can't be loaded.
pub fn render_diff(argument: &DiffArguments) -> Result<String, Error> {
    let first = input::load_sequence(&argument.first)?;
    let second = input::load_sequence(&argument.second)?;

    let script = compute_script(&first, &second, argument.key.as_deref());

    Ok(match argument.format {
        Format::Text => {
            script.iter().fold(String::new(), |mut text, section| {
                let _ = writeln!(text, "{section}");
                text
            })
        }
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&script)?;
            json.push('\n');
            json
        }
    })
}

fn diff(argument: &DiffArguments) -> Result<(), Error> {
    let rendered = render_diff(argument)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Applies the script described by `argument` and returns the transformed
/// first array.
///
/// # Errors
///
/// If an input can't be loaded or the script doesn't fit the arrays.
pub fn transform(argument: &ApplyArguments) -> Result<Vec<Value>, Error> {
    let mut first = input::load_sequence(&argument.first)?;
    let second = input::load_sequence(&argument.second)?;

    let script = match &argument.script {
        Some(path) => input::load_script(path)?,
        None => compute_script(&first, &second, argument.key.as_deref()),
    };

    if argument.batched {
        Applier::batched(&mut first).apply(&second, script)?;
    } else {
        listdiff_core::apply(&mut first, &second, script)?;
    }

    Ok(first)
}

fn write_output(path: Option<&Path>, value: &[Value]) -> Result<(), Error> {
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        log::info!("wrote {}", path.display());
    } else {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, value)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    Ok(())
}

fn apply(argument: &ApplyArguments) -> Result<(), Error> {
    let result = transform(argument)?;

    write_output(argument.output.as_deref(), &result)
}
