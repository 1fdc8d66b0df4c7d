//! Reply line builders
//!
//! Composes the line sequences a real MPD server would send, greeting and
//! terminator included, for feeding into a `ScriptedTransport`.

/// Builder for a sequence of reply lines
#[derive(Debug, Default, Clone)]
pub struct ReplyBuilder {
    lines: Vec<String>,
}

impl ReplyBuilder {
    /// Start an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a sequence with the standard server greeting
    pub fn greeting() -> Self {
        Self::new().line("OK MPD 0.23.5")
    }

    /// Append a raw line
    pub fn line(mut self, raw: impl Into<String>) -> Self {
        self.lines.push(raw.into());
        self
    }

    /// Append a `KEY: VALUE` line
    pub fn pair(self, key: &str, value: &str) -> Self {
        self.line(format!("{key}: {value}"))
    }

    /// Append the `file` and `Time` pairs of one song record
    pub fn song(self, file: &str, seconds: u32) -> Self {
        self.pair("file", file).pair("Time", &seconds.to_string())
    }

    /// Finish the sequence with the `OK` terminator
    pub fn ok(self) -> Vec<String> {
        self.line("OK").lines
    }

    /// Finish the sequence with an `ACK` error line
    pub fn ack(self, code: u16, command: &str, message: &str) -> Vec<String> {
        self.line(format!("ACK [{code}@0] {{{command}}} {message}")).lines
    }

    /// Finish the sequence without a terminator, simulating a connection
    /// that dies mid-reply
    pub fn unterminated(self) -> Vec<String> {
        self.lines
    }
}
