// SPDX-License-Identifier: MPL-2.0
//! Carousel image element.
//!
//! One element owns one slide image through its whole lifecycle: the source
//! resolves asynchronously while a loading placeholder renders, then the
//! element settles into a success or error rendering exactly once. Marker
//! classes on the root advertise the current state for styling.

pub mod component;
pub mod props;
pub mod status;
pub mod view;

pub use component::{Effect, Message, State};
pub use props::{LoadCallback, Props, RenderOverride, RootTag};
pub use status::ImageStatus;
pub use view::{view, Content, ViewModel};
