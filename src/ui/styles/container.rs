// SPDX-License-Identifier: MPL-2.0
//! Container styles resolved from marker classes.
//!
//! Image elements describe themselves through marker classes; the widget
//! tree never picks a style directly. Resolving the style from the marker
//! list keeps the two in lockstep and lets embedders restyle a state by
//! matching on the same markers.

use crate::ui::classes;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Resolves a container style from an element's marker classes.
///
/// State markers take precedence over the base marker. The background
/// marker only shapes the frame; the image fill itself is drawn by the
/// widget tree.
pub fn for_markers(markers: &[&'static str]) -> impl Fn(&Theme) -> container::Style {
    let loading = markers.contains(&classes::IMAGE_LOADING);
    let error = markers.contains(&classes::IMAGE_ERROR);
    let background = markers.contains(&classes::WITH_BACKGROUND);

    move |theme: &Theme| {
        if error {
            error_placeholder(theme)
        } else if loading {
            loading_placeholder(theme)
        } else if background {
            background_frame(theme)
        } else {
            image_frame(theme)
        }
    }
}

/// Neutral frame around a successfully loaded inline image.
#[must_use]
pub fn image_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed surface shown while the image is still loading.
///
/// The fill is derived from the active Iced `Theme` background so the
/// placeholder stays readable in both light and dark modes without
/// hard-coding colors.
pub fn loading_placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Accented surface shown after a failed load with no custom handler.
pub fn error_placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Rounded frame for background-fill rendering.
#[must_use]
pub fn background_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Card surface around each slide in the gallery strip.
pub fn slide(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
