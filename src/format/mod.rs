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

//! Template-based message formatting.
//!
//! A pattern string is compiled once into a [`Formatter`] and rendered many
//! times. The pattern language is literal text plus `{{ name }}` placeholders:
//!
//! | Placeholder      | Substitution                                      |
//! |------------------|---------------------------------------------------|
//! | `{{ Message }}`  | the newline-terminated message body               |
//! | `{{ Level }}`    | the canonical level name, e.g. `WARN`             |
//! | `{{ LevelNum }}` | the integer level rank, e.g. `2`                  |
//! | `{{ asctime }}`  | wall-clock time as `YYYY-MM-DD HH:MM:SS`          |
//! | `{{ created }}`  | current Unix epoch seconds                        |
//! | `{{ filename }}` | source file of the originating call               |
//! | `{{ lineno }}`   | source line of the originating call               |
//! | `{{ fileline }}` | `file: line` of the originating call              |
//!
//! A leading dot is accepted for message attributes (`{{.Level}}`), matching
//! the pattern syntax the facility has always used.

use jiff::Zoned;
use jiff::fmt::strtime;

use crate::LogMessage;
use crate::callsite;
use crate::error::CompileError;
use crate::error::RenderError;
use crate::format::template::Field;
use crate::format::template::Func;
use crate::format::template::Segment;

mod template;

/// The pattern used by handlers that never configure one.
pub const DEFAULT_PATTERN: &str = "{{ asctime }}; {{ fileline }}; {{ Level }}; {{ Message }}";

const ASCTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A compiled pattern, reusable across renders.
///
/// Rendering never mutates the formatter, so one instance may serve
/// concurrent emits.
#[derive(Debug, Clone)]
pub struct Formatter {
    segments: Vec<Segment>,
}

impl Formatter {
    /// Compile a pattern string.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] for malformed syntax or an unknown
    /// placeholder name. No partially-usable formatter is constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use logward::Formatter;
    ///
    /// let formatter = Formatter::compile("{{ Level }}: {{ Message }}").unwrap();
    /// assert!(Formatter::compile("{{ .Unclosed").is_err());
    /// # let _ = formatter;
    /// ```
    pub fn compile(pattern: &str) -> Result<Formatter, CompileError> {
        Ok(Formatter {
            segments: template::parse(pattern)?,
        })
    }

    /// Render a message into bytes.
    ///
    /// The call-site placeholders resolve against the emit in progress on
    /// this thread; rendered outside any emit they degrade to `<unknown>`
    /// and `-1`.
    pub fn render(&self, message: &LogMessage) -> Result<Vec<u8>, RenderError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Message) => out.push_str(message.message()),
                Segment::Field(Field::Level) => out.push_str(message.level().name()),
                Segment::Field(Field::LevelNum) => {
                    out.push_str(&message.level().rank().to_string())
                }
                Segment::Func(Func::Asctime) => out.push_str(&asctime()?),
                Segment::Func(Func::Created) => out.push_str(&created().to_string()),
                Segment::Func(Func::Filename) => out.push_str(filename()),
                Segment::Func(Func::Lineno) => out.push_str(&lineno().to_string()),
                Segment::Func(Func::Fileline) => {
                    out.push_str(filename());
                    out.push_str(": ");
                    out.push_str(&lineno().to_string());
                }
            }
        }
        Ok(out.into_bytes())
    }
}

impl Default for Formatter {
    fn default() -> Formatter {
        Formatter::compile(DEFAULT_PATTERN).expect("default pattern compiles")
    }
}

fn asctime() -> Result<String, RenderError> {
    Ok(strtime::format(ASCTIME_FORMAT, &Zoned::now())?)
}

fn created() -> i64 {
    jiff::Timestamp::now().as_second()
}

fn filename() -> &'static str {
    match callsite::current() {
        Some(site) => site.file(),
        None => callsite::UNKNOWN_FILE,
    }
}

fn lineno() -> i64 {
    match callsite::current() {
        Some(site) => i64::from(site.line()),
        None => callsite::UNKNOWN_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn test_render_level_and_message() {
        let formatter = Formatter::compile("{{.Level}}: {{.Message}}").unwrap();
        let message = LogMessage::new(Level::Error, format_args!("boom"));
        let bytes = formatter.render(&message).unwrap();
        assert_eq!(bytes, b"ERROR: boom\n");
    }

    #[test]
    fn test_render_level_num() {
        let formatter = Formatter::compile("{{ LevelNum }}").unwrap();
        let message = LogMessage::new(Level::Warn, format_args!("x"));
        assert_eq!(formatter.render(&message).unwrap(), b"2");
    }

    #[test]
    fn test_render_literal_only() {
        let formatter = Formatter::compile("no placeholders").unwrap();
        let message = LogMessage::new(Level::Info, format_args!("ignored"));
        assert_eq!(formatter.render(&message).unwrap(), b"no placeholders");
    }

    #[test]
    fn test_default_pattern_compiles() {
        let formatter = Formatter::default();
        let message = LogMessage::new(Level::Info, format_args!("x"));
        let rendered = String::from_utf8(formatter.render(&message).unwrap()).unwrap();
        assert!(rendered.contains("INFO"));
        assert!(rendered.ends_with("x\n"));
    }

    #[test]
    fn test_asctime_shape() {
        // 2024-08-11 22:44:57
        let time = asctime().unwrap();
        assert_eq!(time.len(), 19);
        assert_eq!(&time[4..5], "-");
        assert_eq!(&time[13..14], ":");
    }

    #[test]
    fn test_callsite_sentinels_outside_emit() {
        let formatter = Formatter::compile("{{ fileline }}").unwrap();
        let message = LogMessage::new(Level::Debug, format_args!("x"));
        assert_eq!(formatter.render(&message).unwrap(), b"<unknown>: -1");
    }
}
