//! Checksum harness: W producers, one consumer, totals compared at the end.
//!
//! Each producer pushes `ELEMENTS` pseudo-random values and records their sum.
//! The main thread pops until every producer has finished and the ring is
//! empty, then checks the two totals agree.
//!
//! Run with: cargo run --example checksum -- 8
//! Add `--features tracing` and `RUST_LOG=bounded_ring_core=trace` to watch
//! producers and the consumer block.

use std::{
    process::ExitCode,
    sync::{
        Condvar, Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
    thread,
};

use bounded_ring_core::{BoundedRing, HeapRing, init_tracing};

const ELEMENTS: u64 = 1000;
const CAPACITY: usize = 1000;
const DEFAULT_WORKERS: usize = 4;

/// Countdown latch: `wait` returns once `done` was called `count` times.
struct Completion {
    remaining: Mutex<usize>,
    zero: Condvar,
}

impl Completion {
    fn new(count: usize) -> Self {
        Self {
            remaining: Mutex::new(count),
            zero: Condvar::new(),
        }
    }

    fn done(&self) {
        let mut remaining = self.remaining.lock().unwrap_or_else(PoisonError::into_inner);
        *remaining -= 1;
        if *remaining == 0 {
            self.zero.notify_all();
        }
    }

    fn wait(&self) {
        let remaining = self.remaining.lock().unwrap_or_else(PoisonError::into_inner);
        let _remaining = self
            .zero
            .wait_while(remaining, |n| *n > 0)
            .unwrap_or_else(PoisonError::into_inner);
    }
}

/// Everything the workers share.
struct Harness {
    ring: HeapRing<u64, CAPACITY>,
    sent: AtomicU64,
    producers: Completion,
}

/// Small xorshift so each worker produces a distinct, repeatable stream.
fn values(seed: u64) -> impl Iterator<Item = u64> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    core::iter::repeat_with(move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % 1000
    })
}

fn produce(harness: &Harness, id: usize) {
    let mut sum = 0;
    for value in values(id as u64 + 1).take(ELEMENTS as usize) {
        harness.ring.push(value);
        sum += value;
    }
    harness.sent.fetch_add(sum, Ordering::SeqCst);
    harness.producers.done();
}

/// Pop every item the producers will send, then wait for their totals.
fn consume(harness: &Harness, workers: usize) -> u64 {
    let expected = workers as u64 * ELEMENTS;
    let mut received = 0;
    for _ in 0..expected {
        received += harness.ring.pop();
    }

    // Every push was popped; producers are at most finishing their bookkeeping.
    harness.producers.wait();
    received
}

fn main() -> ExitCode {
    init_tracing();

    let workers = match std::env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        None => DEFAULT_WORKERS,
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            eprintln!("usage: checksum [WORKERS]   (WORKERS must be a positive integer)");
            return ExitCode::FAILURE;
        }
    };

    let harness = Harness {
        ring: BoundedRing::new_heap(),
        sent: AtomicU64::new(0),
        producers: Completion::new(workers),
    };

    let received = thread::scope(|s| {
        for id in 0..workers {
            let harness = &harness;
            s.spawn(move || produce(harness, id));
        }
        consume(&harness, workers)
    });

    let sent = harness.sent.load(Ordering::SeqCst);
    println!("{workers} producers, {} items", workers as u64 * ELEMENTS);

    if sent == received && harness.ring.is_empty() {
        println!("Test passed: sent {sent}, received {received}");
        ExitCode::SUCCESS
    } else {
        println!("Test failed: sent {sent}, received {received}");
        ExitCode::FAILURE
    }
}
