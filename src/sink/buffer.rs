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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::sink::Sink;

/// An in-memory sink capturing everything written to it.
///
/// Clones share the same storage, so a test can keep one clone and hand the
/// other to a handler:
///
/// ```
/// use logward::Handler;
/// use logward::Logger;
/// use logward::sink::Buffer;
///
/// let buffer = Buffer::default();
/// let logger = Logger::new();
/// logger.add_handler(Handler::new(buffer.clone()));
/// logger.info(format_args!("captured"));
/// assert!(!buffer.contents().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl Buffer {
    /// A copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Sink for Buffer {
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(())
    }
}
