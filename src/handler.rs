// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::PoisonError;
use std::sync::RwLock;

use crate::Formatter;
use crate::Level;
use crate::LogMessage;
use crate::error::CompileError;
use crate::sink::Sink;

/// A sink paired with a severity threshold and an owned [`Formatter`].
///
/// A handler emits a message iff its threshold is at or below the message's
/// level: a `Debug` handler sees everything, a `Fatal` handler sees only
/// `FATAL` messages.
///
/// # Examples
///
/// ```
/// use logward::Handler;
/// use logward::Level;
/// use logward::sink::Stderr;
///
/// let handler = Handler::new(Stderr)
///     .with_level(Level::Warn)
///     .with_formatter("{{ created }}; {{ Level }}; {{ Message }}")
///     .unwrap();
/// logward::add_handler(handler);
/// ```
#[derive(Debug)]
pub struct Handler {
    level: Level,
    formatter: RwLock<Formatter>,
    sink: Box<dyn Sink>,
}

impl Handler {
    /// Create a handler over the given sink.
    ///
    /// With no level configured the threshold defaults to [`Level::Debug`],
    /// so the handler emits everything. This is the one deliberate default in
    /// level configuration; an explicitly supplied but invalid rank or name
    /// is always a [`ConfigError`](crate::ConfigError) at parse time, never
    /// coerced.
    pub fn new(sink: impl Sink) -> Handler {
        Handler {
            level: Level::Debug,
            formatter: RwLock::new(Formatter::default()),
            sink: Box::new(sink),
        }
    }

    /// Set the severity threshold.
    pub fn with_level(mut self, level: Level) -> Handler {
        self.level = level;
        self
    }

    /// Replace the formatter at construction time, for chained configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`CompileError`] for a malformed pattern; the handler is
    /// consumed, so a misconfiguration cannot be registered.
    pub fn with_formatter(self, pattern: &str) -> Result<Handler, CompileError> {
        self.set_formatter(pattern)?;
        Ok(self)
    }

    /// Swap the formatter of a live handler.
    ///
    /// The swap is atomic with respect to concurrent emits through this
    /// handler: each render observes either the old or the new formatter,
    /// never a mixture. Other handlers are unaffected.
    ///
    /// # Errors
    ///
    /// Returns the [`CompileError`] for a malformed pattern. The previous
    /// formatter stays in effect.
    pub fn set_formatter(&self, pattern: &str) -> Result<(), CompileError> {
        let formatter = Formatter::compile(pattern)?;
        *self
            .formatter
            .write()
            .unwrap_or_else(PoisonError::into_inner) = formatter;
        Ok(())
    }

    /// The severity threshold of this handler.
    pub fn level(&self) -> Level {
        self.level
    }

    pub(crate) fn enabled(&self, level: Level) -> bool {
        self.level <= level
    }

    pub(crate) fn emit(&self, message: &LogMessage) -> anyhow::Result<()> {
        let bytes = self
            .formatter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .render(message)?;
        self.sink.write(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Buffer;

    #[test]
    fn test_threshold_rule() {
        let handler = Handler::new(Buffer::default()).with_level(Level::Warn);
        assert!(!handler.enabled(Level::Debug));
        assert!(!handler.enabled(Level::Info));
        assert!(handler.enabled(Level::Warn));
        assert!(handler.enabled(Level::Error));
        assert!(handler.enabled(Level::Fatal));
    }

    #[test]
    fn test_default_level_is_debug() {
        let handler = Handler::new(Buffer::default());
        assert_eq!(handler.level(), Level::Debug);
        for level in Level::ALL {
            assert!(handler.enabled(level));
        }
    }

    #[test]
    fn test_with_formatter_rejects_bad_pattern() {
        assert!(
            Handler::new(Buffer::default())
                .with_formatter("{{ .Unclosed")
                .is_err()
        );
    }

    #[test]
    fn test_failed_swap_keeps_previous_formatter() {
        let buffer = Buffer::default();
        let handler = Handler::new(buffer.clone())
            .with_formatter("{{ Level }}|{{ Message }}")
            .unwrap();

        assert!(handler.set_formatter("{{ bogus }}").is_err());

        let message = LogMessage::new(Level::Error, format_args!("boom"));
        handler.emit(&message).unwrap();
        assert_eq!(buffer.contents(), b"ERROR|boom\n");
    }
}
