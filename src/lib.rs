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

//! Logward is a leveled logging facility: callers emit messages tagged with a
//! severity, and the facility filters, formats, and routes each message to
//! every registered sink whose threshold admits it.
//!
//! # Overview
//!
//! Messages carry one of five severities, `DEBUG < INFO < WARN < ERROR <
//! FATAL`. A [`Handler`] pairs an output [`Sink`](sink::Sink) with a minimum
//! severity and a template [`Formatter`]; the [`Logger`] fans each message out
//! to every eligible handler in registration order. A process-wide logger is
//! available through [`global`] and the crate-root entry points, and emits to
//! stdout until a handler is registered.
//!
//! # Examples
//!
//! Log before configuring anything (the implicit stdout handler applies):
//!
//! ```
//! logward::info!("This is an info message.");
//! ```
//!
//! Register handlers with their own thresholds and patterns:
//!
//! ```
//! use logward::Handler;
//! use logward::Level;
//! use logward::sink::Stderr;
//! use logward::sink::Stdout;
//!
//! logward::add_handler(Handler::new(Stdout));
//! logward::add_handler(
//!     Handler::new(Stderr)
//!         .with_level(Level::Error)
//!         .with_formatter("{{ created }}; {{ fileline }}; {{ LevelNum }}; {{ Message }}")
//!         .unwrap(),
//! );
//!
//! logward::error!("Error message.");
//! logward::info!("Info message, stdout only.");
//! ```

use std::fmt::Arguments;
use std::sync::Arc;

pub mod format;
pub mod sink;

mod callsite;
mod error;
mod handler;
mod level;
mod logger;
mod macros;
mod record;

pub use error::CompileError;
pub use error::ConfigError;
pub use error::RenderError;
pub use format::DEFAULT_PATTERN;
pub use format::Formatter;
pub use handler::Handler;
pub use level::Level;
pub use logger::Logger;
pub use logger::global;
pub use record::LogMessage;

/// Append a handler to the process-wide logger.
pub fn add_handler(handler: impl Into<Arc<Handler>>) {
    global().add_handler(handler);
}

/// Emit a `DEBUG` message to the process-wide logger.
#[track_caller]
pub fn debug(args: Arguments<'_>) {
    global().debug(args);
}

/// Emit an `INFO` message to the process-wide logger.
#[track_caller]
pub fn info(args: Arguments<'_>) {
    global().info(args);
}

/// Emit a `WARN` message to the process-wide logger.
#[track_caller]
pub fn warn(args: Arguments<'_>) {
    global().warn(args);
}

/// Emit an `ERROR` message to the process-wide logger.
#[track_caller]
pub fn error(args: Arguments<'_>) {
    global().error(args);
}

/// Emit a `FATAL` message to the process-wide logger.
#[track_caller]
pub fn fatal(args: Arguments<'_>) {
    global().fatal(args);
}
