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

//! Exercises the process-wide logger. Everything shares one global instance,
//! so the phases run inside a single test function.

use std::sync::Arc;
use std::sync::Barrier;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;

use logward::Handler;
use logward::Logger;
use logward::global;
use logward::sink::Sink;

/// A sink that only counts writes.
#[derive(Debug, Default)]
struct Counter(AtomicUsize);

impl Sink for Counter {
    fn write(&self, _bytes: &[u8]) -> anyhow::Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn test_process_wide_logger() {
    singleton_is_idempotent();
    crate_root_entry_points_reach_registered_handlers();
    concurrent_adds_and_emits();
}

fn singleton_is_idempotent() {
    let first = global() as *const Logger as usize;

    let threads: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| global() as *const Logger as usize))
        .collect();
    for thread in threads {
        assert_eq!(thread.join().unwrap(), first);
    }
}

fn crate_root_entry_points_reach_registered_handlers() {
    let buffer = logward::sink::Buffer::default();
    logward::add_handler(
        Handler::new(buffer.clone())
            .with_formatter("{{ Message }}")
            .unwrap(),
    );

    logward::debug!("Testing {}:{}", "hello", 0);
    logward::fatal(format_args!("fatal is just a level"));

    let output = String::from_utf8(buffer.contents()).unwrap();
    assert!(output.contains("Testing hello:0\n"));
    assert!(output.contains("fatal is just a level\n"));
}

fn concurrent_adds_and_emits() {
    const THREADS: usize = 8;
    const EMITS: usize = 50;

    let before = global().handler_count();
    let barrier = Arc::new(Barrier::new(THREADS));

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                logward::add_handler(Handler::new(Counter::default()));
                for i in 0..EMITS {
                    logward::info!("emit {i}");
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    // No handlers lost, none duplicated.
    assert_eq!(global().handler_count(), before + THREADS);
}
