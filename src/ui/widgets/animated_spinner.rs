// SPDX-License-Identifier: MPL-2.0
//! Progress indicator drawn on a Canvas.
//!
//! The spinner holds no clock of its own: the owner advances a rotation angle
//! on every animation tick with [`advance`] and rebuilds the widget.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians added per animation tick.
pub const ROTATION_STEP: f32 = PI / 12.0;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u16 = 30;

/// Advances `rotation` by one tick, wrapping into `0..TAU`.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP).rem_euclid(TAU)
}

/// Half-circle arc rotating over a faint full circle.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
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
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color { a: 0.25, ..self.color }),
                );

                // Start at the top, sweep half a turn
                let start_angle = self.rotation - PI / 2.0;
                let point_at = |angle: f32| {
                    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
                };

                let mut arc = canvas::path::Builder::new();
                arc.move_to(point_at(start_angle));
                for i in 1..=ARC_SEGMENTS {
                    let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                    arc.line_to(point_at(start_angle + PI * t));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_by_one_step() {
        assert!((advance(0.0) - ROTATION_STEP).abs() < f32::EPSILON);
    }

    #[test]
    fn advance_wraps_past_full_turn() {
        let rotation = advance(TAU - ROTATION_STEP / 2.0);
        assert!(rotation >= 0.0 && rotation < ROTATION_STEP, "rotation = {rotation}");
    }

    #[test]
    fn advance_stays_within_one_turn() {
        let mut rotation = 0.0;
        for _ in 0..100 {
            rotation = advance(rotation);
            assert!((0.0..TAU).contains(&rotation));
        }
    }
}
