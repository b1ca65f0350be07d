//! JSMin engine — single-pass script minifier.
//!
//! Components, leaf-first:
//! 1. Cursor: byte reader with one slot of pushback, CR → LF
//! 2. Comment elider: `//` and `/* */` removal
//! 3. Literal copier: verbatim string and regex copy
//! 4. Transducer: the `(current, next)` decision table and driver loop
//! 5. Output sink: append-only buffer that drops NUL bytes

pub mod batch;
pub mod comment;
pub mod cursor;
pub mod literal;
pub mod minifier;
pub mod sink;
pub mod transducer;

pub use batch::{BatchEntry, BatchMinifier, BatchOutcome, BatchReport};
pub use jsmin_core::{MinifyConfig, MinifyError, MinifyStats};
pub use minifier::{minify, minify_str, Minifier, MinifyResult};
