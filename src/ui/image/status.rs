// SPDX-License-Identifier: MPL-2.0
//! Load lifecycle status for the image element.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The three legal load states of an image element.
///
/// The status starts at `Loading` and makes at most one transition, to
/// `Success` or to `Error`. Both of those are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Loading,
    Success,
    Error,
}

impl ImageStatus {
    /// Canonical literal for the loading state.
    pub const LOADING: &'static str = "loading";
    /// Canonical literal for the success state.
    pub const SUCCESS: &'static str = "success";
    /// Canonical literal for the error state.
    pub const ERROR: &'static str = "error";

    /// Returns the canonical lowercase literal for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ImageStatus::Loading => Self::LOADING,
            ImageStatus::Success => Self::SUCCESS,
            ImageStatus::Error => Self::ERROR,
        }
    }

    /// Returns true once the load outcome is settled.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, ImageStatus::Success | ImageStatus::Error)
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageStatus {
    type Err = Error;

    /// Parses a canonical status literal.
    ///
    /// This is the only path by which an external string becomes a status.
    /// Any value outside the three recognized literals fails with
    /// [`Error::InvalidState`] instead of being silently coerced.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            Self::LOADING => Ok(ImageStatus::Loading),
            Self::SUCCESS => Ok(ImageStatus::Success),
            Self::ERROR => Ok(ImageStatus::Error),
            other => Err(Error::InvalidState(other.to_string())),
        }
    }
}
