//! Call-site labels for diagnostics
//!
//! Rust has no portable stack walking, so call sites are captured at compile
//! time instead: `#[track_caller]` for file and line, and the type name of a
//! nested item for the enclosing function. Hosts that already run a tracing
//! subscriber get the same information from spans for free.
//!
//! ```rust
//! use toolglue_core::func_name;
//!
//! fn load_table() -> String {
//!     func_name!()
//! }
//!
//! assert_eq!(load_table(), "load_table()");
//! ```

use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Where a diagnostic was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    /// Full path of the enclosing function, when known
    pub function: Option<String>,
    /// Source file
    pub file: &'static str,
    /// Line in `file`
    pub line: u32,
}

impl CallerContext {
    /// Capture the caller's location.
    ///
    /// Called from a `#[track_caller]` function, this reports that
    /// function's caller instead.
    #[track_caller]
    #[must_use]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            function: None,
            file: location.file(),
            line: location.line(),
        }
    }

    /// Attach the enclosing function's path
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// `file.rs[42]`
    #[must_use]
    pub fn source(&self) -> String {
        format!("{}[{}]", file_base(self.file), self.line)
    }
}

impl fmt::Display for CallerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function {
            Some(function) => write!(f, "{}() at {}", short_name(function), self.source()),
            None => f.write_str(&self.source()),
        }
    }
}

fn file_base(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Strip closure markers and module path: `a::b::load::{{closure}}` → `load`
#[must_use]
pub fn short_name(path: &str) -> &str {
    let mut path = path;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Short source file name and line of the caller: `util.rs[39]`
#[track_caller]
#[must_use]
pub fn func_source() -> String {
    CallerContext::here().source()
}

/// Full path of the enclosing function, e.g. `my_crate::module::load`
#[macro_export]
macro_rules! func_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// Short name of the enclosing function with parentheses: `load()`
#[macro_export]
macro_rules! func_name {
    () => {
        format!("{}()", $crate::caller::short_name($crate::func_path!()))
    };
}

/// Short name of the enclosing function: `load`
#[macro_export]
macro_rules! func_name_no_parens {
    () => {
        $crate::caller::short_name($crate::func_path!()).to_string()
    };
}

/// Source file, line, and full function path: `src/lib.rs[39] my_crate::load`
#[macro_export]
macro_rules! func_name_full {
    () => {
        format!("{}[{}] {}", file!(), line!(), $crate::func_path!())
    };
}

/// [`CallerContext`] for this call site, including the function name
#[macro_export]
macro_rules! caller_context {
    () => {
        $crate::caller::CallerContext::here().with_function($crate::func_path!())
    };
}
