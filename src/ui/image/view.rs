// SPDX-License-Identifier: MPL-2.0
//! Default rendering for the image element.

use iced::widget::{Column, Container, Image, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

use super::component::Message;
use super::props::RenderOverride;
use crate::media::ImageData;
use crate::ui::classes;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;

/// What the element draws inside its styled root.
pub enum Content<'a> {
    /// Default spinner markup while loading.
    LoadingPlaceholder { rotation: f32 },
    /// Caller-supplied loading markup.
    LoadingOverride(&'a RenderOverride),
    /// Default error markup.
    ErrorPlaceholder,
    /// Caller-supplied error markup.
    ErrorOverride(&'a RenderOverride),
    /// Native inline image widget. The data is absent when a success
    /// status was injected without a decoded image.
    Inline(Option<&'a ImageData>),
    /// Cover-fit background fill inside a generic container.
    Background(Option<&'a ImageData>),
}

/// Render-ready snapshot of one image element.
///
/// Derived by `State::view_model` and consumed by [`view`]. Tests assert
/// on the snapshot directly instead of walking a widget tree.
pub struct ViewModel<'a> {
    /// Marker classes on the root, in application order.
    pub markers: Vec<&'static str>,
    /// Caller-supplied class appended after the markers.
    pub user_class: Option<&'a str>,
    /// Textual fallback description.
    pub alt: Option<&'a str>,
    /// Fixed width in logical pixels, if configured.
    pub width: Option<f32>,
    /// Fixed height in logical pixels, if configured.
    pub height: Option<f32>,
    /// Body to draw inside the root.
    pub content: Content<'a>,
}

impl ViewModel<'_> {
    /// Class attribute equivalent: markers first, caller class last.
    #[must_use]
    pub fn class_string(&self) -> String {
        match self.user_class {
            Some(class) => format!("{} {}", classes::join(&self.markers), class),
            None => classes::join(&self.markers),
        }
    }

    /// True when the root carries the given marker.
    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|candidate| *candidate == marker)
    }
}

/// Builds the widget tree for one image element.
///
/// The root is a container styled from the element's markers. Render
/// overrides replace only the inner markup; the root and its markers stay
/// in place around whatever the override returns.
pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let style = styles::for_markers(&model.markers);

    let body: Element<'_, Message> = match model.content {
        Content::LoadingPlaceholder { rotation } => {
            AnimatedSpinner::new(palette::PRIMARY_500, rotation)
                .with_size(sizing::SPINNER_SM)
                .into_element()
        }
        Content::LoadingOverride(render) | Content::ErrorOverride(render) => render(),
        Content::ErrorPlaceholder => error_placeholder(model.alt),
        Content::Inline(Some(image)) => Image::new(image.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Content::Background(Some(image)) => Image::new(image.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Content::Inline(None) | Content::Background(None) => {
            Space::new().width(Length::Fill).height(Length::Fill).into()
        }
    };

    let width = model.width.map_or(Length::Fill, Length::Fixed);
    let height = model.height.map_or(Length::Fill, Length::Fixed);

    Container::new(body)
        .style(style)
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Glyph-and-caption markup shown after a failed load.
fn error_placeholder(alt: Option<&str>) -> Element<'_, Message> {
    let glyph = Text::new("!")
        .size(sizing::ERROR_GLYPH)
        .color(palette::ERROR_500);

    let mut content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(glyph);

    if let Some(alt) = alt {
        content = content.push(Text::new(alt).size(typography::CAPTION));
    }

    content.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn model_with(content: Content<'_>) -> ViewModel<'_> {
        ViewModel {
            markers: vec![classes::IMAGE],
            user_class: None,
            alt: None,
            width: None,
            height: None,
            content,
        }
    }

    #[test]
    fn class_string_joins_markers_in_order() {
        let mut model = model_with(Content::LoadingPlaceholder { rotation: 0.0 });
        model.markers = vec![classes::IMAGE, classes::IMAGE_LOADING];

        assert_eq!(
            model.class_string(),
            "carousel__image carousel__image--loading"
        );
    }

    #[test]
    fn class_string_appends_user_class_last() {
        let mut model = model_with(Content::ErrorPlaceholder);
        model.markers = vec![classes::IMAGE, classes::IMAGE_ERROR];
        model.user_class = Some("hero");

        assert_eq!(
            model.class_string(),
            "carousel__image carousel__image--error hero"
        );
    }

    #[test]
    fn has_marker_matches_exact_entries() {
        let model = model_with(Content::ErrorPlaceholder);

        assert!(model.has_marker(classes::IMAGE));
        assert!(!model.has_marker(classes::IMAGE_ERROR));
    }

    #[test]
    fn view_invokes_loading_override_exactly_once() {
        let calls = Rc::new(Cell::new(0_u32));
        let seen = calls.clone();
        let render: RenderOverride = Box::new(move || {
            seen.set(seen.get() + 1);
            Text::new("custom loading").into()
        });

        let _element = view(model_with(Content::LoadingOverride(&render)));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn view_invokes_error_override_exactly_once() {
        let calls = Rc::new(Cell::new(0_u32));
        let seen = calls.clone();
        let render: RenderOverride = Box::new(move || {
            seen.set(seen.get() + 1);
            Text::new("custom error").into()
        });

        let _element = view(model_with(Content::ErrorOverride(&render)));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn view_builds_every_default_content_variant() {
        let image = ImageData::from_rgba(1, 1, vec![0_u8; 4]);

        let _loading = view(model_with(Content::LoadingPlaceholder { rotation: 1.0 }));
        let _error = view(model_with(Content::ErrorPlaceholder));
        let _inline = view(model_with(Content::Inline(Some(&image))));
        let _background = view(model_with(Content::Background(Some(&image))));
        let _missing = view(model_with(Content::Inline(None)));
    }
}
