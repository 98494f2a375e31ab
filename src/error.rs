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

//! Error types surfaced by the logging facility.

/// An invalid severity level was supplied during configuration.
///
/// Configuration never coerces bad input to a valid level; the only
/// defaulting behavior is the documented "no level configured means `DEBUG`"
/// rule on [`Handler::new`](crate::Handler::new).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unrecognized level name {0:?}, use DEBUG/INFO/WARN/ERROR/FATAL")]
    UnknownLevelName(String),
    #[error("level rank {0} out of range, valid ranks are 0..=4")]
    RankOutOfRange(u8),
}

/// A pattern string failed to compile into a [`Formatter`](crate::Formatter).
///
/// Compilation happens at construction time so a misconfigured handler fails
/// at setup rather than silently dropping every subsequent message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("unterminated placeholder opened at byte {0}")]
    Unterminated(usize),
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),
    #[error("unknown template name {0:?}")]
    UnknownName(String),
}

/// A compiled template failed while rendering a well-formed message.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to format timestamp: {0}")]
    Time(#[from] jiff::Error),
}
