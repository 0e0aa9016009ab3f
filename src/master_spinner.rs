// SPDX-License-Identifier: MPL-2.0
//! Shared loading coordination across carousel slides.
//!
//! A carousel can defer to one master spinner instead of letting every slide
//! draw its own. Slides that opt in register themselves at construction;
//! the carousel drops the overlay once every registered slide has settled.
//!
//! # Coordination Strategy
//!
//! Registration is a one-shot signal sent during element construction, so
//! the coordinator only needs a counter:
//!
//! ```text
//! ┌─────────┐ subscribe()    ┌───────────────┐
//! │ Slide 1 │───────────────▶│               │
//! ├─────────┤ subscribe()    │ MasterSpinner │──▶ is_spinning()
//! │ Slide 2 │───────────────▶│  pending: 2   │
//! └─────────┘                └───────────────┘
//!                                   ▲
//!                    mark_settled() │ (per terminal outcome)
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Registration point for slides that defer to a shared spinner.
///
/// Implementations only learn that a slide exists; settlement is reported
/// to the concrete coordinator by whoever routes the slide's load outcomes.
pub trait SpinnerCoordinator {
    /// Registers one slide. Called exactly once per opted-in slide, at
    /// construction.
    fn subscribe(&self);
}

/// Shared handle to a spinner coordinator.
pub type SharedSpinner = Arc<dyn SpinnerCoordinator + Send + Sync>;

/// Counter-based coordinator for a carousel-wide loading overlay.
///
/// This struct is lock-free, using an atomic for the pending count.
#[derive(Debug)]
pub struct MasterSpinner {
    /// Number of subscribed slides that have not yet settled.
    pending: AtomicUsize,
}

impl Default for MasterSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl MasterSpinner {
    /// Creates a coordinator with no registered slides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: AtomicUsize::new(0),
        }
    }

    /// Records that one subscribed slide reached a terminal state.
    ///
    /// Settling more slides than were registered is ignored; the count
    /// never wraps below zero.
    pub fn mark_settled(&self) {
        let _ = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                count.checked_sub(1)
            });
    }

    /// Returns the number of subscribed slides still loading.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Returns true while any subscribed slide is still loading.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.pending() > 0
    }
}

impl SpinnerCoordinator for MasterSpinner {
    fn subscribe(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }
}
