//! Path normalization
//!
//! `std::path::absolute("/cygdrive/c/dir/file")` on Windows yields
//! `C:\cygdrive\c\dir\file`, which does not exist. Cygwin drive paths are
//! therefore handed to `cygpath -w` instead.

use crate::error::Result;
use crate::process;
use std::path::{Path, PathBuf};

/// Prefix Cygwin mounts every drive under
pub const CYGWIN_DRIVE_ROOT: &str = "/cygdrive/";

/// Whether `input` names a file on a Cygwin-mounted drive
#[must_use]
pub fn is_cygwin_drive_path(input: &str) -> bool {
    input.starts_with(CYGWIN_DRIVE_ROOT)
}

/// Absolute form of a user-supplied path.
///
/// A leading `~` is expanded to the home directory. The filesystem is not
/// touched, so the result need not exist.
pub fn filepath_abs(input: &str) -> Result<PathBuf> {
    if is_cygwin_drive_path(input) {
        return cygwin_to_windows(input);
    }

    let expanded = shellexpand::tilde(input);
    Ok(std::path::absolute(Path::new(expanded.as_ref()))?)
}

fn cygwin_to_windows(input: &str) -> Result<PathBuf> {
    let result = process::run_command("cygpath", &["-w", input])?.into_success("cygpath")?;

    // cygpath terminates its output with a newline
    let path: String = result
        .stdout
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect();

    tracing::debug!(input, %path, "converted cygwin path");
    Ok(PathBuf::from(path))
}
