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

use std::fmt::Arguments;
use std::io::Write;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::RwLock;

use crate::Handler;
use crate::Level;
use crate::LogMessage;
use crate::callsite;
use crate::callsite::CallSite;
use crate::sink::Stdout;

/// The dispatch core: an ordered collection of [`Handler`]s that every
/// emitted message fans out to.
///
/// Handlers are visited in registration order; duplicates are permitted. With
/// no handlers registered, emits fall back to one implicit handler (threshold
/// `DEBUG`, stdout, default pattern) so a caller always sees something before
/// configuring any sink.
///
/// Most applications use the process-wide instance through [`global`] or the
/// crate-root entry points; applications wanting independent loggers
/// construct their own instances.
///
/// # Examples
///
/// ```
/// use logward::Handler;
/// use logward::Level;
/// use logward::Logger;
/// use logward::sink::Stderr;
///
/// let logger = Logger::new();
/// logger.add_handler(Handler::new(Stderr).with_level(Level::Warn));
/// logger.warn(format_args!("disk {}% full", 93));
/// ```
#[derive(Debug)]
pub struct Logger {
    handlers: RwLock<Vec<Arc<Handler>>>,
}

impl Default for Logger {
    fn default() -> Logger {
        Logger::new()
    }
}

impl Logger {
    /// Create a logger with no handlers registered.
    pub fn new() -> Logger {
        Logger {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Append a handler to the fan-out list.
    ///
    /// Accepts a [`Handler`] or an `Arc<Handler>`; pass an `Arc` clone to
    /// keep calling [`Handler::set_formatter`] on a registered handler.
    pub fn add_handler(&self, handler: impl Into<Arc<Handler>>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler.into());
    }

    /// The number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Emit a message at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, args: Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Emit a message at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, args: Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Emit a message at [`Level::Warn`].
    #[track_caller]
    pub fn warn(&self, args: Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Emit a message at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, args: Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Emit a message at [`Level::Fatal`].
    ///
    /// `Fatal` is filtered like any other level and does not terminate the
    /// process.
    #[track_caller]
    pub fn fatal(&self, args: Arguments<'_>) {
        self.log(Level::Fatal, args);
    }

    /// Emit a message at an arbitrary level.
    #[track_caller]
    pub fn log(&self, level: Level, args: Arguments<'_>) {
        let site = CallSite::capture();
        self.dispatch(LogMessage::new(level, args), site, fallback_handler());
    }

    fn dispatch(&self, message: LogMessage, site: CallSite, fallback: &Handler) {
        let _scope = callsite::Scope::enter(site);
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        if handlers.is_empty() {
            emit_to(fallback, &message);
            return;
        }
        for handler in handlers.iter() {
            if handler.enabled(message.level()) {
                emit_to(handler, &message);
            }
        }
    }
}

fn emit_to(handler: &Handler, message: &LogMessage) {
    if let Err(err) = handler.emit(message) {
        handle_error(message, err);
    }
}

// One failing handler must not take down the rest of the fan-out: report the
// failure once on stderr and drop this message for that handler only.
fn handle_error(message: &LogMessage, error: anyhow::Error) {
    let Err(fallback_error) = write!(
        std::io::stderr(),
        r###"
Error performing logging.
    Attempted to log: {level} {body}
    Error: {error}
"###,
        level = message.level(),
        body = message.message(),
        error = error,
    ) else {
        return;
    };

    panic!(
        r###"
Error performing stderr logging after error occurred during regular logging.
    Attempted to log: {level} {body}
    Error: {error}
    Fallback error: {fallback_error}
"###,
        level = message.level(),
        body = message.message(),
        error = error,
        fallback_error = fallback_error,
    );
}

/// The process-wide logger.
///
/// The first call constructs the instance; every later call from any thread
/// returns the same one. The crate-root entry points forward here.
pub fn global() -> &'static Logger {
    static GLOBAL: OnceLock<Logger> = OnceLock::new();
    GLOBAL.get_or_init(Logger::new)
}

// The implicit handler used whenever a logger has no handlers registered.
fn fallback_handler() -> &'static Handler {
    static FALLBACK: OnceLock<Handler> = OnceLock::new();
    FALLBACK.get_or_init(|| Handler::new(Stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Buffer;

    #[test]
    fn test_empty_logger_uses_fallback_handler() {
        let buffer = Buffer::default();
        let fallback = Handler::new(buffer.clone());

        let logger = Logger::new();
        logger.dispatch(
            LogMessage::new(Level::Info, format_args!("x")),
            CallSite::capture(),
            &fallback,
        );

        let output = String::from_utf8(buffer.contents()).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("INFO"));
        assert!(output.contains("x"));
    }

    #[test]
    fn test_fallback_not_used_once_handlers_exist() {
        let registered = Buffer::default();
        let fallback_buffer = Buffer::default();
        let fallback = Handler::new(fallback_buffer.clone());

        let logger = Logger::new();
        logger.add_handler(Handler::new(registered.clone()));
        logger.dispatch(
            LogMessage::new(Level::Info, format_args!("x")),
            CallSite::capture(),
            &fallback,
        );

        assert!(fallback_buffer.contents().is_empty());
        assert!(!registered.contents().is_empty());
    }

    #[test]
    fn test_fallback_handler_is_debug_on_stdout() {
        assert_eq!(fallback_handler().level(), Level::Debug);
    }
}
