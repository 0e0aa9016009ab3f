// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u32 = 30;

/// Animated spinner that rotates smoothly.
///
/// Slides draw it small inside their loading placeholder; the carousel
/// overlay draws it large on top of the whole strip.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER_MD,
        }
    }

    /// Sets the spinner diameter.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Updates the rotation angle and invalidates the cache.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self.cache.clear();
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Approximates a circular arc with line segments.
///
/// Canvas paths have no arc primitive that plays well with strokes, so the
/// arc is sampled at a resolution where the segments are invisible at
/// spinner sizes.
fn arc_path(center: Point, radius: f32, start_angle: f32, end_angle: f32) -> Path {
    let mut builder = canvas::path::Builder::new();

    let point_at = |angle: f32| {
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    };

    builder.move_to(point_at(start_angle));
    #[allow(clippy::cast_precision_loss)] // segment index is tiny, no precision loss
    for i in 1..=ARC_SEGMENTS {
        let t = i as f32 / ARC_SEGMENTS as f32;
        builder.line_to(point_at(start_angle + (end_angle - start_angle) * t));
    }

    builder.build()
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                // Static track circle behind the arc
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Half-circle arc, offset so rotation zero starts at the top
                let start_angle = self.rotation - PI / 2.0;
                let arc = arc_path(center, radius, start_angle, start_angle + PI);
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
