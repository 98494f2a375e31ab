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
use std::io;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::sink::Sink;

/// A sink around any caller-opened [`io::Write`] destination, such as a file
/// handle or an already-connected socket.
///
/// The destination's lifetime stays the caller's responsibility; dropping the
/// handler drops the writer without closing anything beyond what the writer's
/// own `Drop` does.
pub struct Writer<W> {
    inner: Mutex<W>,
}

impl<W: io::Write + Send + 'static> Writer<W> {
    /// Wrap an open destination.
    pub fn new(writer: W) -> Writer<W> {
        Writer {
            inner: Mutex::new(writer),
        }
    }
}

impl<W> fmt::Debug for Writer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer").finish_non_exhaustive()
    }
}

impl<W: io::Write + Send + 'static> Sink for Writer<W> {
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(bytes)?;
        Ok(())
    }
}
