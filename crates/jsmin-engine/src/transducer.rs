//! Transducer core — the `(current, next)` decision table and driver loop.

use jsmin_core::MinifyError;

use crate::comment;
use crate::cursor::{Cursor, Symbol};
use crate::literal;
use crate::sink::OutputSink;

/// What to do with the pair `(current, next)`.
///
/// Heavier actions include the lighter ones: emitting always advances, and
/// advancing always looks ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write `current`, then advance.
    EmitAndAdvance,
    /// Drop `current`, move `next` into it, then look ahead.
    Advance,
    /// Drop `next` and read a new one.
    Lookahead,
}

/// Letters, digits, `_`, `$`, `\` and every byte above 126.
pub fn is_alphanumeric(c: Symbol) -> bool {
    match c {
        Symbol::Byte(b) => b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'\\') || b > 126,
        Symbol::Start | Symbol::Eof => false,
    }
}

pub fn decide(current: Symbol, next: Symbol) -> Action {
    match current {
        Symbol::Byte(b' ') => {
            if is_alphanumeric(next) { Action::EmitAndAdvance } else { Action::Advance }
        }
        Symbol::Byte(b'\n') => match next {
            Symbol::Byte(b'{' | b'[' | b'(' | b'+' | b'-') => Action::EmitAndAdvance,
            Symbol::Byte(b' ') => Action::Lookahead,
            _ if is_alphanumeric(next) => Action::EmitAndAdvance,
            _ => Action::Advance,
        },
        _ => match next {
            Symbol::Byte(b' ') => {
                if is_alphanumeric(current) { Action::EmitAndAdvance } else { Action::Lookahead }
            }
            Symbol::Byte(b'\n') => match current {
                Symbol::Byte(b'}' | b']' | b')' | b'+' | b'-' | b'"' | b'\'') => Action::EmitAndAdvance,
                _ if is_alphanumeric(current) => Action::EmitAndAdvance,
                _ => Action::Lookahead,
            },
            _ => Action::EmitAndAdvance,
        },
    }
}

pub struct Transducer<'a, 's> {
    cursor: Cursor<'a>,
    sink: &'s mut OutputSink,
    current: Symbol,
    next: Symbol,
}

impl<'a, 's> Transducer<'a, 's> {
    pub fn new(cursor: Cursor<'a>, sink: &'s mut OutputSink) -> Self {
        Self { cursor, sink, current: Symbol::Start, next: Symbol::Start }
    }

    /// Drive the input to completion. On error the sink holds partial output
    /// that the caller must discard.
    pub fn run(mut self) -> Result<(), MinifyError> {
        self.lookahead()?;
        while self.current != Symbol::Eof {
            match decide(self.current, self.next) {
                Action::EmitAndAdvance => self.emit_and_advance()?,
                Action::Advance => self.advance()?,
                Action::Lookahead => self.lookahead()?,
            }
        }
        Ok(())
    }

    fn emit_and_advance(&mut self) -> Result<(), MinifyError> {
        self.sink.push(self.current);
        self.advance()
    }

    fn advance(&mut self) -> Result<(), MinifyError> {
        self.current = self.next;
        if let Symbol::Byte(quote @ (b'\'' | b'"')) = self.current {
            self.current = literal::copy_string(&mut self.cursor, self.sink, quote)?;
        }
        self.lookahead()
    }

    fn lookahead(&mut self) -> Result<(), MinifyError> {
        self.next = comment::next(&mut self.cursor)?;
        if self.next.is(b'/') && literal::opens_regex_after(self.current) {
            self.sink.push(self.current);
            self.sink.push(self.next);
            self.current = literal::copy_regex(&mut self.cursor, self.sink)?;
            self.next = comment::next(&mut self.cursor)?;
        }
        Ok(())
    }
}
