//! Bounded drop-oldest line queue between the input thread and the render loop.
//!
//! The queue never blocks either side: `push` evicts the oldest unread line
//! when full, `try_pop` returns `None` immediately when empty. The only way to
//! reach a queue from another thread is through the [`LineSender`] /
//! [`LineReceiver`] pair returned by [`line_channel`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Default number of buffered lines.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Fixed-capacity FIFO of owned text lines.
#[derive(Debug)]
pub struct LineQueue {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl LineQueue {
    /// Creates a queue holding at most `capacity` lines (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a line, evicting the oldest one first if the queue is full.
    ///
    /// Returns `true` if a line was evicted.
    pub fn push(&self, line: String) -> bool {
        let mut lines = self.lock();
        let evicted = if lines.len() >= self.capacity {
            lines.pop_front().is_some()
        } else {
            false
        };
        lines.push_back(line);
        evicted
    }

    /// Removes and returns the oldest line, or `None` if the queue is empty.
    pub fn try_pop(&self) -> Option<String> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the deque half-modified,
    // so a poisoned mutex is still usable.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Producer half. Owned by the input thread.
#[derive(Debug)]
pub struct LineSender {
    queue: Arc<LineQueue>,
}

impl LineSender {
    /// Pushes a line; see [`LineQueue::push`].
    pub fn send(&self, line: String) -> bool {
        self.queue.push(line)
    }
}

/// Consumer half. Owned by the render loop.
#[derive(Debug)]
pub struct LineReceiver {
    queue: Arc<LineQueue>,
}

impl LineReceiver {
    /// Non-blocking receive.
    pub fn try_recv(&self) -> Option<String> {
        self.queue.try_pop()
    }

    /// Drains every line currently queued, oldest first.
    pub fn drain(&self) -> Drain<'_> {
        Drain { receiver: self }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Iterator returned by [`LineReceiver::drain`]. Ends at the first empty poll.
pub struct Drain<'a> {
    receiver: &'a LineReceiver,
}

impl Iterator for Drain<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.receiver.try_recv()
    }
}

/// Creates a bounded drop-oldest channel of text lines.
pub fn line_channel(capacity: usize) -> (LineSender, LineReceiver) {
    let queue = Arc::new(LineQueue::new(capacity));
    (
        LineSender {
            queue: Arc::clone(&queue),
        },
        LineReceiver { queue },
    )
}
