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

use std::fmt;

use crate::Level;

/// A single log message as it travels through dispatch.
///
/// Built once per emit call and never mutated afterwards: the caller-supplied
/// format arguments are interpolated and newline-terminated up front, so every
/// matching handler renders the same body.
#[derive(Debug, Clone)]
pub struct LogMessage {
    message: String,
    level: Level,
}

impl LogMessage {
    /// Build a message from interpolated format arguments, appending the
    /// trailing newline.
    pub fn new(level: Level, args: fmt::Arguments<'_>) -> LogMessage {
        LogMessage {
            message: format!("{args}\n"),
            level,
        }
    }

    /// The newline-terminated message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity of this message.
    pub fn level(&self) -> Level {
        self.level
    }
}
