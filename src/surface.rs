use anyhow::{Result, anyhow};
use raylib::prelude::*;
use crate::canvas::{Discard, RaylibCanvas};
use crate::engine::Backdrop;
use crate::viewport::ViewportState;

/// Render texture sized in physical pixels, drawn through a camera that scales
/// logical coordinates by the device pixel ratio.
pub struct Surface {
    target: Option<RenderTexture2D>,
    size: (u32, u32),
    scale: f32,
}

impl Surface {
    pub fn new() -> Self {
        Self { target: None, size: (0, 0), scale: 1.0 }
    }

    /// Reallocates the buffer when the physical size changed.
    pub fn sync(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, viewport: &ViewportState) -> Result<()> {
        self.scale = viewport.transform_scale();
        let size = (viewport.physical_width(), viewport.physical_height());
        if self.size == size && (self.target.is_some() || viewport.is_empty()) {
            return Ok(());
        }

        // Release the old buffer before asking for a new one
        self.target = None;
        self.size = size;
        if viewport.is_empty() {
            log::debug!("Surface has no area, frames are stepped without drawing");
            return Ok(());
        }

        let target = rl
            .load_render_texture(thread, size.0, size.1)
            .map_err(|e| anyhow!("Failed to create {}x{} render texture: {}", size.0, size.1, e))?;
        log::debug!("Render texture {}x{} at scale {}", size.0, size.1, self.scale);
        self.target = Some(target);
        Ok(())
    }

    /// Runs one backdrop frame into the buffer. Returns false once the
    /// backdrop has stopped.
    pub fn render(&mut self, d: &mut RaylibDrawHandle, thread: &RaylibThread, backdrop: &mut Backdrop) -> bool {
        let Some(target) = self.target.as_mut() else {
            return backdrop.render_frame(&mut Discard);
        };

        let camera = Camera2D {
            offset: Vector2::new(0.0, 0.0),
            target: Vector2::new(0.0, 0.0),
            rotation: 0.0,
            zoom: self.scale,
        };
        let mut texture_mode = d.begin_texture_mode(thread, target);
        let mut scaled = texture_mode.begin_mode2D(camera);
        backdrop.render_frame(&mut RaylibCanvas::new(&mut scaled))
    }

    /// Blits the buffer over the logical window area.
    pub fn present(&self, d: &mut RaylibDrawHandle, viewport: &ViewportState) {
        let Some(target) = self.target.as_ref() else {
            return;
        };

        // Render textures are stored bottom-up, hence the negative source height
        d.draw_texture_pro(
            target,
            Rectangle::new(0.0, 0.0, self.size.0 as f32, -(self.size.1 as f32)),
            Rectangle::new(0.0, 0.0, viewport.logical_width(), viewport.logical_height()),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
