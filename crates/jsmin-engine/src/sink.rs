use crate::cursor::Symbol;

/// Append-only output buffer. NUL bytes and sentinels are never written.
#[derive(Debug, Default)]
pub struct OutputSink {
    bytes: Vec<u8>,
}

impl OutputSink {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { bytes: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, symbol: Symbol) {
        if let Symbol::Byte(b) = symbol {
            if b != 0 {
                self.bytes.push(b);
            }
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Drop the contents but keep the allocation for the next buffer.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
