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

//! Call-site resolution: attributing each message to the user code that
//! invoked a leveled entry point, never to an internal dispatch frame.
//!
//! Resolution relies on a `#[track_caller]` chain instead of walking a fixed
//! number of stack frames, which inlining makes unreliable. The chain is the
//! fragile part: every public leveled entry point and every internal
//! forwarding layer between user code and [`CallSite::capture`] must carry
//! `#[track_caller]`, and capture must happen in that one function only. A
//! layer added without the attribute mis-attributes all messages to itself;
//! `tests/callsite.rs` pins resolution to a literal call line so such a
//! refactor fails loudly.
//!
//! The captured site travels to the formatter through a thread-local scope
//! installed around fan-out, keeping the template functions zero-argument.
//! Rendering outside any scope degrades to the `<unknown>` / `-1` sentinels
//! rather than failing.

use std::cell::Cell;
use std::panic::Location;

/// Filename sentinel when no call site is in scope.
pub(crate) const UNKNOWN_FILE: &str = "<unknown>";

/// Line sentinel when no call site is in scope.
pub(crate) const UNKNOWN_LINE: i64 = -1;

/// The source location of a leveled entry point invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Capture the caller's location. Meaningful only when every frame
    /// between here and user code carries `#[track_caller]`.
    #[track_caller]
    pub(crate) fn capture() -> CallSite {
        let location = Location::caller();
        CallSite {
            file: location.file(),
            line: location.line(),
        }
    }

    pub(crate) fn file(self) -> &'static str {
        self.file
    }

    pub(crate) fn line(self) -> u32 {
        self.line
    }
}

thread_local! {
    static CURRENT: Cell<Option<CallSite>> = const { Cell::new(None) };
}

/// The call site installed by the innermost active [`Scope`], if any.
pub(crate) fn current() -> Option<CallSite> {
    CURRENT.get()
}

/// Installs a call site for the duration of a fan-out, restoring the previous
/// one on drop so reentrant emits (say, a `Display` impl that logs) resolve
/// their own site.
pub(crate) struct Scope {
    previous: Option<CallSite>,
}

impl Scope {
    pub(crate) fn enter(site: CallSite) -> Scope {
        Scope {
            previous: CURRENT.replace(Some(site)),
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        CURRENT.set(self.previous);
    }
}
