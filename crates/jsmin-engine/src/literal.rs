//! Literal copier — strings and regular expressions pass through verbatim.

use jsmin_core::MinifyError;

use crate::cursor::{Cursor, Symbol};
use crate::sink::OutputSink;

/// Bytes after which a `/` opens a regular expression rather than a division.
const REGEX_CONTEXT: &[u8] = b"(,=:[!&|?{};\n";

pub fn opens_regex_after(current: Symbol) -> bool {
    current.byte().is_some_and(|b| REGEX_CONTEXT.contains(&b))
}

/// Copy a string literal opened by `quote`, writing everything up to but not
/// including the closing quote. Returns the closing quote, which becomes the
/// transducer's `current`.
pub fn copy_string(
    cursor: &mut Cursor<'_>,
    sink: &mut OutputSink,
    quote: u8,
) -> Result<Symbol, MinifyError> {
    let start = cursor.position();
    let mut c = Symbol::Byte(quote);
    loop {
        sink.push(c);
        c = cursor.get();
        if c.is(quote) {
            tracing::trace!(start, end = cursor.position(), "copied string literal");
            return Ok(c);
        }
        if c.is(b'\\') {
            sink.push(c);
            c = cursor.get();
        }
        if c == Symbol::Eof {
            return Err(MinifyError::UnterminatedString);
        }
    }
}

/// Copy a regex body after its opening `/` has been written. Returns the
/// closing `/`.
pub fn copy_regex(cursor: &mut Cursor<'_>, sink: &mut OutputSink) -> Result<Symbol, MinifyError> {
    let start = cursor.position();
    loop {
        let mut c = cursor.get();
        if c.is(b'/') {
            tracing::trace!(start, end = cursor.position(), "copied regex literal");
            return Ok(c);
        }
        if c.is(b'\\') {
            sink.push(c);
            c = cursor.get();
        }
        if c == Symbol::Eof {
            return Err(MinifyError::UnterminatedRegex);
        }
        sink.push(c);
    }
}
