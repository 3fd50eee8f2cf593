use std::collections::VecDeque;
use std::sync::Arc;
use parking_lot::Mutex;

use crate::viewport::{MarkerCallback, MarkerId};

/// A marker was dragged to a raw (unclamped, unrounded) value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerMoved {
    pub marker: MarkerId,
    pub value: f64,
}

/// FIFO of marker events shared between the views and the controller.
///
/// Views push from their drag handlers through [`MarkerEventQueue::callback`];
/// the owner drains once per frame and feeds the controller one event at a
/// time, so a reconciliation never starts inside another.
#[derive(Clone, Default)]
pub struct MarkerEventQueue {
    events: Arc<Mutex<VecDeque<MarkerMoved>>>,
}

impl MarkerEventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an event
    pub fn push(&self, event: MarkerMoved) {
        self.events.lock().push_back(event);
    }

    /// Take every queued event in arrival order
    pub fn drain(&self) -> Vec<MarkerMoved> {
        self.events.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// A view callback that publishes into this queue
    pub fn callback(&self) -> MarkerCallback {
        let queue = self.clone();
        Box::new(move |marker, value| queue.push(MarkerMoved { marker, value }))
    }
}
