// SPDX-License-Identifier: MPL-2.0
//! Construction-time configuration for the image element.

use std::fmt;

use iced::Element;

use super::component::Message;

/// Root widget the element renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootTag {
    /// Native inline image widget.
    #[default]
    Image,
    /// Generic container that can host a background fill.
    Container,
}

/// Callback invoked on a terminal load transition.
pub type LoadCallback = Box<dyn Fn()>;

/// Caller-supplied markup replacing a lifecycle state's default rendering.
pub type RenderOverride = Box<dyn Fn() -> Element<'static, Message>>;

/// Configuration for one image element, built fluently:
///
/// ```
/// use iced_carousel::ui::image::{Props, RootTag};
///
/// let props = Props::new("photos/beach.jpg")
///     .tag(RootTag::Container)
///     .bg_image(true)
///     .master_spinner(true)
///     .alt("Beach at sunset");
/// ```
///
/// Everything except `src` is optional. The config is consumed at element
/// construction and never mutated afterwards.
pub struct Props {
    pub(crate) src: String,
    pub(crate) tag: RootTag,
    pub(crate) is_bg_image: bool,
    pub(crate) has_master_spinner: bool,
    pub(crate) alt: Option<String>,
    pub(crate) class: Option<String>,
    pub(crate) width: Option<f32>,
    pub(crate) height: Option<f32>,
    pub(crate) on_load: Option<LoadCallback>,
    pub(crate) on_error: Option<LoadCallback>,
    pub(crate) render_loading: Option<RenderOverride>,
    pub(crate) render_error: Option<RenderOverride>,
}

impl Props {
    /// Creates a configuration for the given source string.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            tag: RootTag::default(),
            is_bg_image: false,
            has_master_spinner: false,
            alt: None,
            class: None,
            width: None,
            height: None,
            on_load: None,
            on_error: None,
            render_loading: None,
            render_error: None,
        }
    }

    /// Sets the root widget kind.
    #[must_use]
    pub fn tag(mut self, tag: RootTag) -> Self {
        self.tag = tag;
        self
    }

    /// Renders the resource as a background fill instead of an inline image.
    ///
    /// Only honored on a [`RootTag::Container`] root; combined with an
    /// inline image root it degrades to inline rendering with a diagnostic.
    #[must_use]
    pub fn bg_image(mut self, is_bg_image: bool) -> Self {
        self.is_bg_image = is_bg_image;
        self
    }

    /// Registers this element with the carousel's shared spinner.
    #[must_use]
    pub fn master_spinner(mut self, has_master_spinner: bool) -> Self {
        self.has_master_spinner = has_master_spinner;
        self
    }

    /// Sets the textual description shown when the image cannot be drawn.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Appends a caller-supplied class to the element's marker classes.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Fixes the element width in logical pixels.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Fixes the element height in logical pixels.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the callback invoked when the load succeeds.
    #[must_use]
    pub fn on_load(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_load = Some(Box::new(callback));
        self
    }

    /// Sets the callback invoked when the load fails.
    ///
    /// Supplying this suppresses the default error marker class.
    #[must_use]
    pub fn on_error(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Replaces the default loading markup.
    #[must_use]
    pub fn render_loading(
        mut self,
        render: impl Fn() -> Element<'static, Message> + 'static,
    ) -> Self {
        self.render_loading = Some(Box::new(render));
        self
    }

    /// Replaces the default error markup.
    #[must_use]
    pub fn render_error(
        mut self,
        render: impl Fn() -> Element<'static, Message> + 'static,
    ) -> Self {
        self.render_error = Some(Box::new(render));
        self
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("src", &self.src)
            .field("tag", &self.tag)
            .field("is_bg_image", &self.is_bg_image)
            .field("has_master_spinner", &self.has_master_spinner)
            .field("alt", &self.alt)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}
