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

//! Front-end macros over the process-wide logger.
//!
//! Each macro interpolates its arguments with [`format_args!`] and forwards
//! to the matching crate-root function, so call-site resolution attributes
//! the message to the macro invocation.

/// Emit a `DEBUG` message to the process-wide logger.
///
/// ```
/// logward::debug!("cache warmed in {}ms", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::debug(format_args!($($arg)+)) };
}

/// Emit an `INFO` message to the process-wide logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::info(format_args!($($arg)+)) };
}

/// Emit a `WARN` message to the process-wide logger.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::warn(format_args!($($arg)+)) };
}

/// Emit an `ERROR` message to the process-wide logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::error(format_args!($($arg)+)) };
}

/// Emit a `FATAL` message to the process-wide logger.
///
/// Despite the name this never terminates the process; it is a severity
/// classification only.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::fatal(format_args!($($arg)+)) };
}
