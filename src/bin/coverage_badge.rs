//! Rewrites the coverage badge in a documentation file.
//!
//! Usage:
//!
//! ```text
//! coverage_badge <coverage-xml> <readme>
//! ```
//!
//! The coverage percentage is read from the `line-rate` attribute of the
//! coverage XML report; the badge image URL inside the README is replaced
//! with a shields.io URL carrying that percentage. On success the percentage
//! is printed on stdout. This utility shares nothing with the task tracker.

use std::env;
use std::ffi::OsString;
use std::io;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use taskdeck::badge::{BadgeError, CoveragePercent, rewrite_badge};
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors reported by the badge-updater command line.
#[derive(Debug, Error)]
enum BadgeCliError {
    /// The command line did not carry exactly two paths.
    #[error("usage: coverage_badge <coverage-xml> <readme>")]
    Usage,

    /// An argument path was not valid UTF-8.
    #[error("path is not valid UTF-8: {0:?}")]
    NonUtf8Path(OsString),
}

fn main() -> Result<(), BoxError> {
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let (report_path, readme_path) = parse_args(&args)?;
    let percent = update_badge(&report_path, &readme_path)?;

    let stdout = io::stdout();
    writeln!(stdout.lock(), "{percent}")?;
    Ok(())
}

/// Extracts the two path arguments.
fn parse_args(args: &[OsString]) -> Result<(Utf8PathBuf, Utf8PathBuf), BadgeCliError> {
    match args {
        [report, readme] => Ok((utf8_path(report)?, utf8_path(readme)?)),
        _ => Err(BadgeCliError::Usage),
    }
}

/// Converts a raw argument into a UTF-8 path.
fn utf8_path(raw: &OsString) -> Result<Utf8PathBuf, BadgeCliError> {
    Utf8PathBuf::from_path_buf(raw.clone().into())
        .map_err(|_| BadgeCliError::NonUtf8Path(raw.clone()))
}

/// Reads the coverage report, rewrites the README badge, and returns the
/// extracted percentage.
fn update_badge(
    report_path: &Utf8Path,
    readme_path: &Utf8Path,
) -> Result<CoveragePercent, BadgeError> {
    let report = read_file(report_path)?;
    let percent = CoveragePercent::from_coverage_xml(&report)?;

    let content = read_file(readme_path)?;
    let rewritten = rewrite_badge(&content, percent)?;
    write_file(readme_path, &rewritten)?;
    Ok(percent)
}

/// Opens the parent directory of `path` with ambient authority.
fn open_parent(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("path has no file name: {path}")))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Reads a file into a string through its parent directory capability.
fn read_file(path: &Utf8Path) -> Result<String, BadgeError> {
    let (dir, name) = open_parent(path)?;
    Ok(dir.read_to_string(name)?)
}

/// Writes a file through its parent directory capability.
fn write_file(path: &Utf8Path, contents: &str) -> Result<(), BadgeError> {
    let (dir, name) = open_parent(path)?;
    Ok(dir.write(name, contents)?)
}
