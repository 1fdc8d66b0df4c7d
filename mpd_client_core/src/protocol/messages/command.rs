//! Command type and wire encoding
//!
//! An MPD command is an ordered sequence of tokens joined by single spaces
//! and terminated by CRLF. Tokens must not contain CR or LF; that is the
//! caller's responsibility.

use std::fmt;

/// An outbound MPD command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    /// Create a command from its name; a bare name is the sole token
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tokens: vec![name.into()],
        }
    }

    /// Append an argument token, formatted with `Display`
    ///
    /// Integer arguments render as plain decimal with no locale-specific
    /// separators.
    pub fn arg(mut self, arg: impl fmt::Display) -> Self {
        self.tokens.push(arg.to_string());
        self
    }

    /// Append an argument token if it is present
    pub fn opt_arg(self, arg: Option<impl fmt::Display>) -> Self {
        match arg {
            Some(arg) => self.arg(arg),
            None => self,
        }
    }

    /// Append a boolean flag, serialized as `"1"` or `"0"`
    pub fn flag(self, on: bool) -> Self {
        self.arg(if on { "1" } else { "0" })
    }

    /// The command name (first token)
    pub fn name(&self) -> &str {
        &self.tokens[0]
    }

    /// Encode the command for transmission
    pub fn encode(&self) -> String {
        let mut line = self.tokens.join(" ");
        line.push_str("\r\n");
        line
    }
}

impl From<&str> for Command {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
