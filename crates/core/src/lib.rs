//! Shared helpers for Toolglue command-line front ends
//!
//! This crate collects the small pieces of glue every sibling tool needs:
//!
//! - **Flag checks**: decide whether a string flag carries a usable argument
//! - **Piped input**: gulp standard input to end-of-stream, optionally with a timeout
//! - **Paths**: absolutize user paths, including Cygwin drive paths
//! - **Formatting**: run generated source through an injected formatter
//! - **Caller context**: function name and call-site labels for diagnostics
//! - **Numeric / build info**: rounding, word size, executable build time
//!
//! None of the flag or pipe helpers print, log, or exit. They return values
//! and leave reporting to the front end.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use toolglue_core::{flags, pipe};
//!
//! // Optional flag: only act on it when an argument was supplied.
//! if flags::check_string_flag("o", "out.txt", false)? {
//!     // use the flag
//! }
//!
//! if !pipe::can_read() {
//!     let input = pipe::read_pipe(Some(Duration::from_secs(1)))?;
//!     println!("{input}");
//! }
//! # Ok::<(), toolglue_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod build_info;
pub mod caller;
pub mod config;
pub mod error;
pub mod flags;
pub mod format;
pub mod numeric;
pub mod path;
pub mod pipe;
pub mod process;

pub use error::{Error, ErrorCode, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::caller::CallerContext;
    pub use crate::config::Config;
    pub use crate::error::{exit_codes, Error, ErrorCode, Result};
    pub use crate::flags::{check_string_flag, Requirement, StringFlag};
    pub use crate::format::{format_or_keep, NoopFormatter, Rustfmt, SourceFormatter};
    pub use crate::pipe::{can_read, read_pipe};
}
