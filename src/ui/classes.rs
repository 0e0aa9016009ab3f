// SPDX-License-Identifier: MPL-2.0
//! Marker classes attached to carousel elements.
//!
//! Styling is resolved from these markers rather than from widget identity,
//! so a rendered element advertises its role and state through its class
//! list alone. Embedders that relayer the widgets keep working as long as
//! the markers survive.

/// Base marker present on every image element.
pub const IMAGE: &str = "carousel__image";

/// Marker added while the image is still loading.
pub const IMAGE_LOADING: &str = "carousel__image--loading";

/// Marker added after a failed load when no custom error handler is set.
pub const IMAGE_ERROR: &str = "carousel__image--error";

/// Marker added when the element draws its image as a background fill.
pub const WITH_BACKGROUND: &str = "carousel__image--with-background";

/// Joins markers into a single space separated attribute string.
#[must_use]
pub fn join(classes: &[&str]) -> String {
    classes.join(" ")
}
