//! Comment elider — `//` and `/* */` removal on top of the cursor.

use jsmin_core::MinifyError;

use crate::cursor::{Cursor, Symbol};

/// Next token byte with comments removed.
///
/// A line comment yields the byte that ended it (a control byte, line feed,
/// or `Eof`). A block comment yields a single space.
pub fn next(cursor: &mut Cursor<'_>) -> Result<Symbol, MinifyError> {
    let c = cursor.get();
    if !c.is(b'/') {
        return Ok(c);
    }
    match cursor.peek() {
        Symbol::Byte(b'/') => loop {
            let c = cursor.get();
            if ends_line_comment(c) {
                return Ok(c);
            }
        },
        Symbol::Byte(b'*') => {
            cursor.get();
            skip_block_comment(cursor)
        }
        _ => Ok(c),
    }
}

fn skip_block_comment(cursor: &mut Cursor<'_>) -> Result<Symbol, MinifyError> {
    loop {
        match cursor.get() {
            Symbol::Byte(b'*') => {
                if cursor.peek().is(b'/') {
                    cursor.get();
                    return Ok(Symbol::Byte(b' '));
                }
            }
            Symbol::Eof => return Err(MinifyError::UnterminatedComment),
            _ => {}
        }
    }
}

fn ends_line_comment(c: Symbol) -> bool {
    match c {
        Symbol::Byte(b) => b <= b'\n',
        Symbol::Eof => true,
        Symbol::Start => false,
    }
}
