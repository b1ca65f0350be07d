//! Public minification API.

use jsmin_core::{MinifyConfig, MinifyError, MinifyStats};
use serde::Serialize;

use crate::cursor::Cursor;
use crate::sink::OutputSink;
use crate::transducer::Transducer;

/// Minified bytes with size statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinifyResult {
    pub output: Vec<u8>,
    pub stats: MinifyStats,
}

impl MinifyResult {
    pub fn output_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.output).ok()
    }
}

/// Reusable minifier. The output buffer is kept between calls; transducer
/// state is rebuilt for every input.
#[derive(Debug, Default)]
pub struct Minifier {
    config: MinifyConfig,
    sink: OutputSink,
}

impl Minifier {
    pub fn new(config: MinifyConfig) -> Self {
        Self { config, sink: OutputSink::default() }
    }

    pub fn config(&self) -> &MinifyConfig {
        &self.config
    }

    /// Forget any output from a previous buffer.
    pub fn reset(&mut self) {
        self.sink.clear();
    }

    /// Minify one complete buffer. Nothing is returned on failure.
    pub fn minify(&mut self, input: &[u8]) -> Result<&[u8], MinifyError> {
        self.reset();
        let cursor = Cursor::new(input).with_control_chars_to_space(self.config.control_chars_to_space);
        if let Err(err) = Transducer::new(cursor, &mut self.sink).run() {
            self.sink.clear();
            return Err(err);
        }
        tracing::debug!(original = input.len(), minified = self.sink.len(), "minified buffer");
        Ok(self.sink.as_slice())
    }

    pub fn minify_with_stats(&mut self, input: &[u8]) -> Result<MinifyResult, MinifyError> {
        let output = self.minify(input)?.to_vec();
        let stats = MinifyStats::new(input.len(), output.len());
        Ok(MinifyResult { output, stats })
    }
}

/// Minify with the default configuration.
pub fn minify(input: &[u8]) -> Result<Vec<u8>, MinifyError> {
    Minifier::default().minify(input).map(<[u8]>::to_vec)
}

/// Minify UTF-8 text. Only ASCII bytes and whole comments are removed, so the
/// output stays valid UTF-8.
pub fn minify_str(input: &str) -> Result<String, MinifyError> {
    let bytes = minify(input.as_bytes())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
