use crate::animator::Animator;
use crate::constants::*;

/// Width breakpoint driving particle count, size and speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Narrow,
    Medium,
    Wide,
}

impl Tier {
    pub fn for_width(logical_width: f32) -> Self {
        if logical_width <= NARROW_MAX_WIDTH {
            Tier::Narrow
        } else if logical_width <= MEDIUM_MAX_WIDTH {
            Tier::Medium
        } else {
            Tier::Wide
        }
    }

    pub fn particle_count(self) -> usize {
        match self {
            Tier::Narrow => NARROW_PARTICLE_COUNT,
            Tier::Medium => MEDIUM_PARTICLE_COUNT,
            Tier::Wide => WIDE_PARTICLE_COUNT,
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Tier::Narrow
    }
}

pub fn particle_count_target(logical_width: f32) -> usize {
    Tier::for_width(logical_width).particle_count()
}

/// Missing, zero, negative or NaN ratios fall back to 1.
pub fn sanitize_pixel_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 }
}

fn sanitize_extent(extent: f32) -> f32 {
    if extent.is_finite() && extent > 0.0 { extent } else { 0.0 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    logical_width: f32,
    logical_height: f32,
    device_pixel_ratio: f32,
    physical_width: u32,
    physical_height: u32,
}

impl ViewportState {
    pub fn new(logical_width: f32, logical_height: f32, device_pixel_ratio: f32) -> Self {
        let logical_width = sanitize_extent(logical_width);
        let logical_height = sanitize_extent(logical_height);
        let device_pixel_ratio = sanitize_pixel_ratio(device_pixel_ratio);
        Self {
            logical_width,
            logical_height,
            device_pixel_ratio,
            physical_width: (logical_width * device_pixel_ratio).round() as u32,
            physical_height: (logical_height * device_pixel_ratio).round() as u32,
        }
    }

    pub fn logical_width(&self) -> f32 {
        self.logical_width
    }

    pub fn logical_height(&self) -> f32 {
        self.logical_height
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    pub fn physical_width(&self) -> u32 {
        self.physical_width
    }

    pub fn physical_height(&self) -> u32 {
        self.physical_height
    }

    /// Isotropic scale mapping logical draw calls onto the physical buffer.
    pub fn transform_scale(&self) -> f32 {
        self.device_pixel_ratio
    }

    pub fn tier(&self) -> Tier {
        Tier::for_width(self.logical_width)
    }

    pub fn is_empty(&self) -> bool {
        self.physical_width == 0 || self.physical_height == 0
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Tracks the logical/physical geometry of the drawing surface and keeps the
/// particle batch sized for it.
#[derive(Debug, Default)]
pub struct SurfaceManager {
    viewport: ViewportState,
    evaluated: bool,
}

impl SurfaceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Nothing is drawn before the first particle count evaluation.
    pub fn is_ready(&self) -> bool {
        self.evaluated
    }

    /// Returns true when the geometry actually changed.
    pub fn resize(&mut self, logical_width: f32, logical_height: f32, device_pixel_ratio: f32) -> bool {
        let viewport = ViewportState::new(logical_width, logical_height, device_pixel_ratio);
        if viewport == self.viewport {
            return false;
        }
        log::debug!(
            "Viewport {}x{} @{} -> buffer {}x{}",
            viewport.logical_width,
            viewport.logical_height,
            viewport.device_pixel_ratio,
            viewport.physical_width,
            viewport.physical_height
        );
        self.viewport = viewport;
        true
    }

    /// Regenerates the batch only when the breakpoint target differs from the
    /// current particle count. Returns true when it did.
    pub fn adapt_particle_count_to_screen(&mut self, animator: &mut Animator) -> bool {
        self.evaluated = true;
        animator.set_field(&self.viewport);

        let target = particle_count_target(self.viewport.logical_width);
        if animator.particle_count() == target {
            return false;
        }
        let color = animator.active_theme().particle_color;
        animator.regenerate(
            color,
            target,
            self.viewport.physical_width as f32,
            self.viewport.physical_height as f32,
            self.viewport.tier().is_narrow(),
        );
        true
    }
}
