//! Program name and build timestamp for `--version`-style output

use chrono::{DateTime, Local};
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Base name of the running executable, without a `.exe` suffix
#[must_use]
pub fn prog_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_stem)
        .map_or_else(
            || env!("CARGO_PKG_NAME").to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        )
}

/// When the running executable was built and where it is installed.
///
/// Uses the executable's modification time. `None` if it cannot be read.
#[must_use]
pub fn build_date_time() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    let modified = std::fs::metadata(&exe).ok()?.modified().ok()?;
    let ago = SystemTime::now()
        .duration_since(modified)
        .unwrap_or_default();

    let installed = std::env::args().next().unwrap_or_else(|| exe.display().to_string());

    Some(describe_build(&prog_name(), modified.into(), ago, &installed))
}

/// `"<name> built <date> (<age> ago) installed <path>"`
#[must_use]
pub fn describe_build(name: &str, built: DateTime<Local>, ago: Duration, installed: &str) -> String {
    format!(
        "{name} built {} ({} ago) installed {installed}",
        built.format("%a %b %e %H:%M:%S %Z %Y"),
        format_age(ago)
    )
}

/// Whole-second age such as `1h2m3s`, `4m0s` or `12s`
#[must_use]
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    let (hours, mins, secs) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    if hours > 0 {
        format!("{hours}h{mins}m{secs}s")
    } else if mins > 0 {
        format!("{mins}m{secs}s")
    } else {
        format!("{secs}s")
    }
}
