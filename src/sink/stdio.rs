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

use std::io::Write;

use crate::sink::Sink;

/// A sink that writes rendered messages to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Sink for Stdout {
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        std::io::stdout().write_all(bytes)?;
        Ok(())
    }
}

/// A sink that writes rendered messages to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl Sink for Stderr {
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        std::io::stderr().write_all(bytes)?;
        Ok(())
    }
}
