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

//! Output destinations for rendered log messages.
//!
//! The facility only requires a "write bytes" capability: it neither opens
//! nor closes destinations, performs no retries, and places no timeout
//! around a write.

use std::fmt;

mod buffer;
mod stdio;
mod writer;

pub use self::buffer::Buffer;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::writer::Writer;

/// A byte-accepting destination for rendered messages.
///
/// Implementors must be safe to share across threads; writes arrive
/// concurrently from every thread that emits.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Write one rendered message.
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()>;
}
