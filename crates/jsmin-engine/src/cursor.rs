//! Input cursor with a single pushback slot.

/// A byte read from the input, or one of the two sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Nothing decided yet; only ever the initial `current`.
    Start,
    Byte(u8),
    Eof,
}

impl Symbol {
    pub fn is(self, byte: u8) -> bool {
        self == Symbol::Byte(byte)
    }

    pub fn byte(self) -> Option<u8> {
        match self {
            Symbol::Byte(b) => Some(b),
            _ => None,
        }
    }
}

pub struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
    pushback: Option<Symbol>,
    control_chars_to_space: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0, pushback: None, control_chars_to_space: false }
    }

    pub fn with_control_chars_to_space(mut self, enabled: bool) -> Self {
        self.control_chars_to_space = enabled;
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Next raw byte, or `Eof` once the input is exhausted.
    pub fn read_raw(&mut self) -> Symbol {
        match self.input.get(self.position) {
            Some(&b) => {
                self.position += 1;
                Symbol::Byte(b)
            }
            None => Symbol::Eof,
        }
    }

    /// Pending pushback byte if any, else the next raw byte. CR becomes LF.
    pub fn get(&mut self) -> Symbol {
        let c = match self.pushback.take() {
            Some(c) => c,
            None => self.read_raw(),
        };
        match c {
            Symbol::Byte(b'\r') => Symbol::Byte(b'\n'),
            Symbol::Byte(b) if self.control_chars_to_space && b < b' ' && b != b'\n' => {
                Symbol::Byte(b' ')
            }
            other => other,
        }
    }

    pub fn peek(&mut self) -> Symbol {
        let c = self.get();
        self.pushback = Some(c);
        c
    }
}
