// SPDX-License-Identifier: MPL-2.0
//! View construction for the gallery shell.
//!
//! The shell renders a horizontally scrollable strip of slide cards. While
//! any subscribed slide is still loading, a scrim with the master spinner is
//! stacked on top of the whole strip.

use std::path::Path;

use iced::widget::{scrollable, stack, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

use super::Message;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::image;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;

/// Borrowed state needed to draw one frame of the gallery.
pub struct ViewContext<'a> {
    pub slides: &'a [image::State],
    pub master_spinning: bool,
    pub overlay_rotation: f32,
}

/// Builds the gallery scene from the current application state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.slides.is_empty() {
        return empty_state();
    }

    let row = ctx
        .slides
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::MD), |row, (index, slide)| {
            row.push(view_slide(index, slide))
        });

    let strip: Element<'_, Message> = Container::new(
        scrollable(Container::new(row).padding(spacing::LG))
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new(),
            ))
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .into();

    if ctx.master_spinning {
        stack![strip, view_master_overlay(ctx.overlay_rotation)].into()
    } else {
        strip
    }
}

/// One slide card: the image element in a fixed frame plus a caption pill.
fn view_slide(index: usize, slide: &image::State) -> Element<'_, Message> {
    let image_view =
        image::view(slide.view_model()).map(move |message| Message::Slide(index, message));

    let caption_text = slide
        .alt()
        .map(str::to_string)
        .unwrap_or_else(|| file_label(slide.src()));

    let caption = Container::new(Text::new(caption_text).size(typography::CAPTION))
        .style(styles::overlay::caption(radius::SM))
        .padding([spacing::XXS, spacing::XS]);

    let frame = Container::new(image_view)
        .width(Length::Fixed(sizing::SLIDE_WIDTH))
        .height(Length::Fixed(sizing::SLIDE_HEIGHT));

    let card = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(frame)
        .push(caption);

    Container::new(card)
        .padding(spacing::SM)
        .style(styles::container::slide)
        .into()
}

/// Scrim with the shared spinner, stacked over the strip while subscribed
/// slides are loading.
fn view_master_overlay(rotation: f32) -> Element<'static, Message> {
    Container::new(
        AnimatedSpinner::new(palette::WHITE, rotation)
            .with_size(sizing::SPINNER_LG)
            .into_element(),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::overlay::scrim)
    .into()
}

/// Centered hint shown when no slides are configured.
fn empty_state() -> Element<'static, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("No slides configured").size(typography::TITLE_MD))
        .push(
            Text::new("Pass image paths on the command line or list them in gallery.toml")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Caption fallback derived from the source string.
fn file_label(src: &str) -> String {
    Path::new(src)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(src)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_label_strips_directories() {
        assert_eq!(file_label("photos/cats/whiskers.png"), "whiskers.png");
    }

    #[test]
    fn file_label_keeps_bare_names() {
        assert_eq!(file_label("hero.jpg"), "hero.jpg");
    }

    #[test]
    fn file_label_takes_the_last_url_segment() {
        assert_eq!(file_label("https://example.com/photos/a.png"), "a.png");
    }

    #[test]
    fn file_label_falls_back_to_the_raw_source() {
        assert_eq!(file_label(""), "");
    }
}
