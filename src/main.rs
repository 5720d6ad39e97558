//! queryfmt CLI - Reformat SQL queries for reading

use clap::Parser;
use queryfmt::cli::{self, Cli, Commands};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose, cli.log.as_deref());

    match cli.command {
        Commands::Fmt { write, files } => run_fmt(&files, write),
        Commands::Check { files } => run_check(&files),
    }
}

/// Run the fmt command
fn run_fmt(files: &[PathBuf], write_mode: bool) -> ExitCode {
    let mut had_errors = false;

    for file_path in files {
        // Handle stdin
        if file_path == Path::new("-") {
            match format_stdin() {
                Ok(Some(formatted)) => print!("{}", formatted),
                Ok(None) => warn!("<stdin>: nothing to format"),
                Err(e) => {
                    report(e);
                    had_errors = true;
                }
            }
            continue;
        }

        // Handle files, directories and glob patterns
        let entries = match cli::discover_files(file_path) {
            Ok(entries) => entries,
            Err(e) => {
                report(e);
                had_errors = true;
                continue;
            }
        };

        for entry in entries {
            if let Err(e) = format_file(&entry, write_mode) {
                report(e);
                had_errors = true;
            }
        }
    }

    if had_errors {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

/// Run the check command
fn run_check(files: &[PathBuf]) -> ExitCode {
    let mut needs_formatting = false;
    let mut had_errors = false;

    for file_path in files {
        // Handle stdin
        if file_path == Path::new("-") {
            match read_stdin() {
                Ok(contents) => {
                    if !queryfmt::check(&contents) {
                        eprintln!("<stdin>: needs formatting");
                        needs_formatting = true;
                    }
                }
                Err(e) => {
                    report(e);
                    had_errors = true;
                }
            }
            continue;
        }

        let entries = match cli::discover_files(file_path) {
            Ok(entries) => entries,
            Err(e) => {
                report(e);
                had_errors = true;
                continue;
            }
        };

        for entry in entries {
            match check_file(&entry) {
                Ok(formatted) => {
                    if !formatted {
                        eprintln!("{}: needs formatting", entry.display());
                        needs_formatting = true;
                    }
                }
                Err(e) => {
                    report(e);
                    had_errors = true;
                }
            }
        }
    }

    if had_errors {
        ExitCode::from(2)
    } else if needs_formatting {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Format a single file, returning whether it was rewritten
fn format_file(path: &Path, write_mode: bool) -> queryfmt::Result<bool> {
    let contents = read_file(path)?;

    let Some(formatted) = queryfmt::try_format(&contents) else {
        warn!(file = %path.display(), "nothing to format");
        return Ok(false);
    };
    let formatted = with_trailing_newline(formatted);

    if !write_mode {
        print!("{}", formatted);
        return Ok(false);
    }

    if queryfmt::check(&contents) {
        debug!(file = %path.display(), "already formatted");
        return Ok(false);
    }

    fs::write(path, &formatted).map_err(|source| queryfmt::Error::WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(file = %path.display(), "formatted");

    Ok(true)
}

/// Check a single file
fn check_file(path: &Path) -> queryfmt::Result<bool> {
    let contents = read_file(path)?;
    Ok(queryfmt::check(&contents))
}

/// Format from stdin
fn format_stdin() -> queryfmt::Result<Option<String>> {
    let contents = read_stdin()?;
    Ok(queryfmt::try_format(&contents).map(with_trailing_newline))
}

fn read_stdin() -> queryfmt::Result<String> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}

fn read_file(path: &Path) -> queryfmt::Result<String> {
    fs::read_to_string(path).map_err(|source| queryfmt::Error::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Print an error with its diagnostic code
fn report(error: queryfmt::Error) {
    eprintln!("{:?}", miette::Report::new(error));
}
