// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Angular speed of the arc, in radians per second.
pub const RADIANS_PER_SECOND: f32 = TAU;

const STROKE_WIDTH: f32 = 3.0;

/// Advances `rotation` by `elapsed`, wrapped into `[0, TAU)`.
#[must_use]
pub fn advance(rotation: f32, elapsed: Duration) -> f32 {
    (rotation + RADIANS_PER_SECOND * elapsed.as_secs_f32()).rem_euclid(TAU)
}

/// A faint ring with a half-circle arc rotating over it.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_LG,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
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
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color {
                    a: 0.25,
                    ..self.color
                }),
        );

        // Starts at 12 o'clock.
        let start_angle = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start_angle),
                end_angle: Radians(start_angle + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_after_full_turn() {
        let rotation = advance(0.0, Duration::from_millis(1500));
        assert!((rotation - PI).abs() < 1e-4, "got {rotation}");
    }

    #[test]
    fn advance_without_time_is_identity() {
        assert_eq!(advance(1.0, Duration::ZERO), 1.0);
    }
}
