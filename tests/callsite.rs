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

//! Pins call-site resolution to literal call lines. If a forwarding layer is
//! added or removed without carrying `#[track_caller]`, these assertions fail
//! instead of silently mis-attributing file and line.

use logward::Handler;
use logward::Logger;
use logward::sink::Buffer;

#[test]
fn test_logger_method_resolves_caller_line() {
    let buffer = Buffer::default();
    let logger = Logger::new();
    logger.add_handler(
        Handler::new(buffer.clone())
            .with_formatter("{{ fileline }}")
            .unwrap(),
    );

    // The literal line of the call, captured on the same line.
    let line = line!(); logger.info(format_args!("x"));

    let expected = format!("{}: {}", file!(), line);
    assert_eq!(buffer.contents(), expected.as_bytes());
}

#[test]
fn test_macro_resolves_caller_line() {
    let buffer = Buffer::default();
    logward::add_handler(
        Handler::new(buffer.clone())
            .with_formatter("{{ lineno }}")
            .unwrap(),
    );

    let line = line!(); logward::warn!("x");

    assert_eq!(buffer.contents(), line.to_string().as_bytes());
}

#[test]
fn test_generic_entry_point_resolves_caller_line() {
    let buffer = Buffer::default();
    let logger = Logger::new();
    logger.add_handler(
        Handler::new(buffer.clone())
            .with_formatter("{{ lineno }}")
            .unwrap(),
    );

    let line = line!(); logger.log(logward::Level::Error, format_args!("x"));

    assert_eq!(buffer.contents(), line.to_string().as_bytes());
}
