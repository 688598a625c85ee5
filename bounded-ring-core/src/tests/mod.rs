mod read;

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Counts how many times values sharing one counter were dropped.
#[derive(Debug)]
struct DropCounter(Arc<AtomicUsize>);

impl DropCounter {
    fn new(counter: &Arc<AtomicUsize>) -> Self {
        Self(Arc::clone(counter))
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}
