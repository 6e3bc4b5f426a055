use rand::rngs::StdRng;
use raylib::prelude::*;
use crate::canvas::{Canvas, RadialGradient};
use crate::config::Motion;
use crate::particle::Particle;
use crate::state::AnimatorState;
use crate::theme::{Theme, ThemeSet};
use crate::viewport::ViewportState;

/// Physical extent and breakpoint a batch is generated for.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Field {
    physical_width: f32,
    physical_height: f32,
    narrow: bool,
}

/// Owns the particle batch and the active theme, and renders one frame at a
/// time. Re-invoking `render_frame` every display refresh is up to the host.
pub struct Animator {
    themes: ThemeSet,
    active: usize,
    theme_applied: bool,

    particles: Vec<Particle>,
    field: Field,
    generation: u64,

    state: AnimatorState,
    motion: Motion,
    rng: StdRng,
}

impl Animator {
    pub fn new(themes: ThemeSet, motion: Motion, rng: StdRng) -> Self {
        Self {
            themes,
            active: 0,
            theme_applied: false,
            particles: Vec::new(),
            field: Field { physical_width: 0.0, physical_height: 0.0, narrow: false },
            generation: 0,
            state: AnimatorState::Uninitialized,
            motion,
            rng,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of batches generated so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_theme(&self) -> &Theme {
        self.themes.get(self.active)
    }

    /// Records the geometry later theme changes regenerate for.
    pub fn set_field(&mut self, viewport: &ViewportState) {
        self.field = Field {
            physical_width: viewport.physical_width() as f32,
            physical_height: viewport.physical_height() as f32,
            narrow: viewport.tier().is_narrow(),
        };
    }

    /// Replaces the whole batch with `count` fresh particles of one color.
    pub fn regenerate(&mut self, color: Color, count: usize, physical_width: f32, physical_height: f32, narrow: bool) {
        self.field = Field { physical_width, physical_height, narrow };
        self.particles = (0..count)
            .map(|_| Particle::spawn(&mut self.rng, color, physical_width, physical_height, narrow))
            .collect();
        self.generation += 1;
        log::debug!(
            "Generation {}: {} particles over {}x{} (narrow: {})",
            self.generation,
            count,
            physical_width,
            physical_height,
            narrow
        );
        self.refresh_state();
    }

    /// Activates a theme and always regenerates the batch in its color, at the
    /// current particle count.
    pub fn apply_theme(&mut self, index: usize) -> &Theme {
        self.active = self.themes.wrap(index);
        self.theme_applied = true;

        let color = self.active_theme().particle_color;
        let Field { physical_width, physical_height, narrow } = self.field;
        self.regenerate(color, self.particles.len(), physical_width, physical_height, narrow);
        self.active_theme()
    }

    /// Clears, paints the gradient, then draws and moves every particle.
    pub fn render_frame<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        logical_width: f32,
        logical_height: f32,
        device_pixel_ratio: f32,
    ) {
        let ratio = crate::viewport::sanitize_pixel_ratio(device_pixel_ratio);
        canvas.clear(logical_width, logical_height);
        if self.state == AnimatorState::Uninitialized {
            return;
        }

        let gradient = RadialGradient::for_viewport(self.active_theme(), logical_width, logical_height);
        canvas.fill_radial_gradient(&gradient, logical_width, logical_height);

        for particle in self.particles.iter_mut() {
            canvas.fill_glowing_circle(
                particle.logical_position(ratio),
                particle.radius,
                particle.color,
                particle.glow_blur(),
            );
            particle.advance(ratio, self.motion.velocity_units);
            particle.reflect(logical_width, logical_height, ratio, self.motion.edge_mode);
        }
        log::trace!("Frame with {} particles", self.particles.len());
    }

    fn refresh_state(&mut self) {
        if self.state == AnimatorState::Uninitialized && self.theme_applied && self.generation > 0 {
            self.state = AnimatorState::Running;
            log::debug!("Animator running with theme '{}'", self.active_theme().name);
        }
    }
}
