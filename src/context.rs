// SPDX-License-Identifier: MPL-2.0
//! Shared services handed to every element in a carousel.

use std::fmt;
use std::sync::Arc;

use crate::diagnostics::DiagnosticsHandle;
use crate::master_spinner::{MasterSpinner, SharedSpinner};

/// Services shared by all elements of one carousel.
///
/// Cloning is cheap: the context only holds handles. Elements receive a
/// reference at construction and register with the services they use.
#[derive(Clone)]
pub struct CarouselContext {
    spinner: SharedSpinner,
    diagnostics: DiagnosticsHandle,
}

impl CarouselContext {
    /// Creates a context around an explicit coordinator and diagnostics sink.
    #[must_use]
    pub fn new(spinner: SharedSpinner, diagnostics: DiagnosticsHandle) -> Self {
        Self {
            spinner,
            diagnostics,
        }
    }

    /// Coordinator for slides that defer to the shared spinner.
    #[must_use]
    pub fn spinner(&self) -> &SharedSpinner {
        &self.spinner
    }

    /// Sink for diagnostic events.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }
}

impl Default for CarouselContext {
    /// Context with a private coordinator and discarded diagnostics.
    fn default() -> Self {
        Self {
            spinner: Arc::new(MasterSpinner::new()),
            diagnostics: DiagnosticsHandle::detached(),
        }
    }
}

impl fmt::Debug for CarouselContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselContext")
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}
