//! Speech output sinks.
//!
//! Synthesis itself lives outside the engine; a sink only receives the native
//! text of each reply while voice output is switched on.

use tracing::info;

pub trait SpeechSink: Send + Sync {
    fn speak(&self, text: &str);
}

/// Drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl SpeechSink for SilentSink {
    fn speak(&self, _text: &str) {}
}

/// Emits each line as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SpeechSink for LogSink {
    fn speak(&self, text: &str) {
        info!(text = %text, "Speak");
    }
}
