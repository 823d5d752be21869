//! Blocking mouse event queue
//!
//! The UI thread pushes mouse events, application threads block until one
//! arrives. The queue is unbounded so the UI thread never waits on a slow
//! consumer. Closing the queue releases every blocked consumer; events that
//! were already queued are still handed out before consumers see
//! [`QueueClosed`].

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use thiserror::Error;

use crate::event::MouseEvent;

/// The queue was closed and holds no more events
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("mouse event queue closed")]
pub struct QueueClosed;

/// Error returned by [`MouseQueue::try_recv`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    #[error("no mouse event available")]
    Empty,
    #[error("mouse event queue closed")]
    Closed,
}

/// Error returned by [`MouseQueue::recv_timeout`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecvTimeoutError {
    #[error("timed out waiting for a mouse event")]
    Timeout,
    #[error("mouse event queue closed")]
    Closed,
}

#[derive(Default)]
struct State {
    events: VecDeque<MouseEvent>,
    closed: bool,
}

#[derive(Default)]
struct Shared {
    state: Mutex<State>,
    available: Condvar,
}

/// Unbounded multi-producer, multi-consumer queue of mouse events
#[derive(Clone, Default)]
pub struct MouseQueue {
    shared: Arc<Shared>,
}

impl MouseQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Returns false (and drops the event) once closed.
    pub fn push(&self, event: MouseEvent) -> bool {
        let mut state = self.shared.state.lock();
        if state.closed {
            tracing::debug!("Dropping {} after queue close", event);
            return false;
        }
        state.events.push_back(event);
        drop(state);
        self.shared.available.notify_one();
        true
    }

    /// Block until an event is available or the queue is closed.
    pub fn recv(&self) -> Result<MouseEvent, QueueClosed> {
        let mut state = self.shared.state.lock();
        loop {
            if let Some(event) = state.events.pop_front() {
                return Ok(event);
            }
            if state.closed {
                return Err(QueueClosed);
            }
            self.shared.available.wait(&mut state);
        }
    }

    /// Like [`recv`](Self::recv), giving up after `timeout`.
    ///
    /// A timeout too large to represent as a deadline waits without limit.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<MouseEvent, RecvTimeoutError> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.recv().map_err(|QueueClosed| RecvTimeoutError::Closed);
        };
        let mut state = self.shared.state.lock();
        loop {
            if let Some(event) = state.events.pop_front() {
                return Ok(event);
            }
            if state.closed {
                return Err(RecvTimeoutError::Closed);
            }
            if self
                .shared
                .available
                .wait_until(&mut state, deadline)
                .timed_out()
            {
                return match state.events.pop_front() {
                    Some(event) => Ok(event),
                    None if state.closed => Err(RecvTimeoutError::Closed),
                    None => Err(RecvTimeoutError::Timeout),
                };
            }
        }
    }

    /// Take an event without blocking.
    pub fn try_recv(&self) -> Result<MouseEvent, TryRecvError> {
        let mut state = self.shared.state.lock();
        match state.events.pop_front() {
            Some(event) => Ok(event),
            None if state.closed => Err(TryRecvError::Closed),
            None => Err(TryRecvError::Empty),
        }
    }

    /// Close the queue and wake every blocked consumer.
    pub fn close(&self) {
        let mut state = self.shared.state.lock();
        if !state.closed {
            state.closed = true;
            tracing::debug!("Mouse queue closed with {} pending events", state.events.len());
        }
        drop(state);
        self.shared.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    /// Number of events waiting to be received
    pub fn len(&self) -> usize {
        self.shared.state.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for MouseQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("MouseQueue")
            .field("pending", &state.events.len())
            .field("closed", &state.closed)
            .finish()
    }
}
