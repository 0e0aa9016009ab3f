// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the master spinner scrim and slide captions.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scrim_background() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..BLACK
    }
}

fn caption_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Full-surface scrim drawn behind the master spinner while any
/// subscribed slide is still loading.
#[must_use]
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scrim_background())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill-shaped caption overlaid on a slide.
pub fn caption(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: caption_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::radius;

    #[test]
    fn scrim_is_translucent_black() {
        let style = scrim(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.a > 0.0 && bg.a < 1.0);
        assert_eq!(bg.r, 0.0);
    }

    #[test]
    fn caption_carries_requested_radius() {
        let style = caption(radius::SM)(&Theme::Light);
        assert_eq!(style.border.radius, radius::SM.into());
    }
}
