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
use std::str::FromStr;

use crate::error::ConfigError;

/// Severity of a log message.
///
/// From least to most severe, the levels are:
///
/// - `Debug`
/// - `Info`
/// - `Warn`
/// - `Error`
/// - `Fatal`
///
/// Each level has a stable integer rank (`Debug` is 0, `Fatal` is 4) and a
/// canonical uppercase name. The rank ordering and the name-to-rank mapping
/// are bijective; comparisons on `Level` follow the rank.
///
/// `Fatal` is a severity classification only. Emitting at `Fatal` never
/// terminates the process; an embedding application that wants
/// terminate-on-fatal layers that on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// All levels, ordered from least to most severe.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// The integer rank of this level.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The canonical uppercase name of this level.
    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Resolve a level from its integer rank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RankOutOfRange`] for ranks outside `0..=4`.
    pub fn from_rank(rank: u8) -> Result<Level, ConfigError> {
        match rank {
            0 => Ok(Level::Debug),
            1 => Ok(Level::Info),
            2 => Ok(Level::Warn),
            3 => Ok(Level::Error),
            4 => Ok(Level::Fatal),
            other => Err(ConfigError::RankOutOfRange(other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the canonical uppercase names only; `"warn"` is not `"WARN"`.
impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Level, ConfigError> {
        match name {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            other => Err(ConfigError::UnknownLevelName(other.to_string())),
        }
    }
}
