//! String flag checks
//!
//! Front ends usually parse flags into plain strings, with `""` meaning the
//! flag was not given. [`check_string_flag`] turns that into a decision
//! without the usual boilerplate:
//!
//! ```rust
//! use toolglue_core::flags::{check_string_flag, Requirement};
//!
//! // Required flag: an Err means the command cannot run.
//! let exists = check_string_flag("r", "input.txt", Requirement::Required)?;
//! assert!(exists);
//!
//! // Optional flag: Ok(false) means "not given, carry on".
//! let exists = check_string_flag("o", "", Requirement::Optional)?;
//! assert!(!exists);
//! # Ok::<(), toolglue_core::Error>(())
//! ```
//!
//! An argument starting with `-` is another flag, which means this flag was
//! not given a value at all. That is always an error, required or not.

use crate::error::{Error, Result};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Whether a flag must be supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    /// Absence is an error
    Required,
    /// Absence is fine
    #[default]
    Optional,
}

impl From<bool> for Requirement {
    fn from(required: bool) -> Self {
        if required {
            Self::Required
        } else {
            Self::Optional
        }
    }
}

fn looks_like_flag(arg: &str) -> bool {
    arg.starts_with('-')
}

/// Check a string flag's argument.
///
/// Returns `Ok(true)` when `arg` is a usable value, `Ok(false)` when an
/// optional flag was not given, and an error otherwise:
///
/// | required | `arg` empty | `arg` starts with `-` | result |
/// |---|---|---|---|
/// | yes | yes | – | [`Error::MissingRequiredFlag`] |
/// | any | no | yes | [`Error::InvalidFlagArgument`] |
/// | any | no | no | `Ok(true)` |
/// | no | yes | – | `Ok(false)` |
pub fn check_string_flag(
    name: &str,
    arg: &str,
    required: impl Into<Requirement>,
) -> Result<bool> {
    let exists = !arg.is_empty();

    if !exists {
        return match required.into() {
            Requirement::Required => Err(Error::missing_required_flag(name)),
            Requirement::Optional => Ok(false),
        };
    }

    if looks_like_flag(arg) {
        return Err(Error::invalid_flag_argument(name, arg));
    }

    Ok(true)
}

/// A string flag slot that remembers how it was set.
///
/// Setting a flag-shaped value never fails; the problem is recorded and
/// reported through [`StringFlag::error`] and [`StringFlag::all_ok`] so the
/// parser can keep going and the front end reports once. A rejected value
/// stays recorded: a later valid [`StringFlag::set`] does not clear it.
///
/// Parsed with [`FromStr`] (e.g. as a clap value type) the flag has no
/// name yet; give it one with [`StringFlag::with_name`] before reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringFlag {
    name: String,
    value: String,
    exists: bool,
    set: bool,
    rejected: Option<String>,
}

impl StringFlag {
    /// An unset flag called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rename the flag; errors report the new name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Record an argument for this flag
    pub fn set(&mut self, s: &str) {
        self.exists = true;
        self.value = s.to_string();

        if looks_like_flag(s) {
            if self.rejected.is_none() {
                self.rejected = Some(s.to_string());
            }
        } else {
            self.set = true;
        }
    }

    /// Flag name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value last given, valid or not
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The flag appeared on the command line
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// The flag has been given a valid value at some point
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// First flag-shaped value this flag was given, as an error
    #[must_use]
    pub fn error(&self) -> Option<Error> {
        self.rejected
            .as_ref()
            .map(|value| Error::invalid_flag_argument(&self.name, value))
    }

    /// Exists, is set, and no flag-shaped value was ever given
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.exists && self.set && self.rejected.is_none()
    }

    /// Take the value, or the recorded error
    pub fn into_result(self) -> Result<String> {
        match self.error() {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

impl fmt::Display for StringFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for StringFlag {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut flag = Self::default();
        flag.set(s);
        Ok(flag)
    }
}
