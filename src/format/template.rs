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

use crate::error::CompileError;

/// A message attribute substituted from the [`LogMessage`](crate::LogMessage)
/// being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Message,
    Level,
    LevelNum,
}

/// A zero-argument template function evaluated at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Func {
    Asctime,
    Created,
    Filename,
    Lineno,
    Fileline,
}

/// One compiled piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Field(Field),
    Func(Func),
}

/// Compile a pattern string into segments.
///
/// Placeholders are delimited by `{{` and `}}`; the name inside may carry
/// surrounding whitespace and an optional leading dot, so `{{.Level}}` and
/// `{{ Level }}` are equivalent. A stray `}}` outside a placeholder is
/// literal text.
pub(crate) fn parse(pattern: &str) -> Result<Vec<Segment>, CompileError> {
    let mut segments = Vec::new();
    let mut rest = pattern;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            segments.push(Segment::Literal(rest[..start].to_string()));
        }
        let opened_at = offset + start;
        let inner = &rest[start + 2..];
        let Some(end) = inner.find("}}") else {
            return Err(CompileError::Unterminated(opened_at));
        };

        let name = inner[..end].trim();
        let name = name.strip_prefix('.').unwrap_or(name);
        let segment = match name {
            "Message" => Segment::Field(Field::Message),
            "Level" => Segment::Field(Field::Level),
            "LevelNum" => Segment::Field(Field::LevelNum),
            "asctime" => Segment::Func(Func::Asctime),
            "created" => Segment::Func(Func::Created),
            "filename" => Segment::Func(Func::Filename),
            "lineno" => Segment::Func(Func::Lineno),
            "fileline" => Segment::Func(Func::Fileline),
            "" => return Err(CompileError::EmptyPlaceholder(opened_at)),
            other => return Err(CompileError::UnknownName(other.to_string())),
        };
        segments.push(segment);

        rest = &inner[end + 2..];
        offset = opened_at + 2 + end + 2;
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }
    Ok(segments)
}
