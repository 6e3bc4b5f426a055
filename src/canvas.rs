use raylib::prelude::*;
use crate::constants::*;
use crate::theme::{Theme, mix};

/// Two-stop radial gradient between an inner and an outer circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub center: Vector2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start: Color,
    pub end: Color,
}

impl RadialGradient {
    pub fn for_viewport(theme: &Theme, width: f32, height: f32) -> Self {
        Self {
            center: Vector2::new(width / 2.0, height / 2.0),
            inner_radius: width.min(height) * GRADIENT_INNER_RATIO,
            outer_radius: width.max(height) * GRADIENT_OUTER_RATIO,
            start: theme.gradient_start,
            end: theme.gradient_end,
        }
    }

    /// Color at `distance` from the center: start inside the inner circle,
    /// end outside the outer one.
    pub fn color_at(&self, distance: f32) -> Color {
        let span = self.outer_radius - self.inner_radius;
        let t = if span > 0.0 {
            (distance - self.inner_radius) / span
        } else if distance <= self.inner_radius {
            0.0
        } else {
            1.0
        };
        mix(self.start, self.end, t)
    }
}

/// Drawing primitives a frame needs, in logical coordinates.
pub trait Canvas {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, width: f32, height: f32);
    fn fill_glowing_circle(&mut self, center: Vector2, radius: f32, color: Color, blur: f32);
}

/// Canvas over any raylib draw handle (texture mode, 2D camera mode, screen).
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(d: &'a mut D) -> Self {
        Self { d }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.d.clear_background(Color::BLANK);
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, width: f32, height: f32) {
        self.d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, width, height), gradient.end);
        if gradient.outer_radius <= 0.0 {
            return;
        }

        // Outer to inner so each disc covers the previous band's center
        let span = gradient.outer_radius - gradient.inner_radius;
        for band in (1..=GRADIENT_BANDS).rev() {
            let radius = gradient.inner_radius + span * band as f32 / GRADIENT_BANDS as f32;
            self.d.draw_circle_v(gradient.center, radius, gradient.color_at(radius));
        }
        if gradient.inner_radius > 0.0 {
            self.d.draw_circle_v(gradient.center, gradient.inner_radius, gradient.start);
        }
    }

    fn fill_glowing_circle(&mut self, center: Vector2, radius: f32, color: Color, blur: f32) {
        let halo = Color::new(color.r, color.g, color.b, 0);
        self.d.draw_circle_gradient(
            center.x.round() as i32,
            center.y.round() as i32,
            radius + blur * 0.5,
            color,
            halo,
        );
        self.d.draw_circle_v(center, radius, color);
    }
}

/// Steps a frame without producing pixels, used while the surface has no area.
pub struct Discard;

impl Canvas for Discard {
    fn clear(&mut self, _width: f32, _height: f32) {}
    fn fill_radial_gradient(&mut self, _gradient: &RadialGradient, _width: f32, _height: f32) {}
    fn fill_glowing_circle(&mut self, _center: Vector2, _radius: f32, _color: Color, _blur: f32) {}
}
