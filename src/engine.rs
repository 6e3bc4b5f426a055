use rand::rngs::StdRng;
use crate::animator::Animator;
use crate::canvas::Canvas;
use crate::config::Motion;
use crate::slideshow::{Direction, Slideshow, ThemeListener};
use crate::theme::ThemeSet;
use crate::viewport::{SurfaceManager, ViewportState};

/// Host events, serialized onto the render thread between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Resized {
        logical_width: f32,
        logical_height: f32,
        device_pixel_ratio: f32,
    },
    Advance(Direction),
    Stop,
}

/// Surface manager, animator and slideshow wired together. The host calls
/// `render_frame` once per display refresh until it returns false.
pub struct Backdrop {
    surface: SurfaceManager,
    animator: Animator,
    slideshow: Slideshow,
    running: bool,
}

impl Backdrop {
    pub fn new(themes: ThemeSet, motion: Motion, rng: StdRng, initial_theme: usize) -> Self {
        Self {
            surface: SurfaceManager::new(),
            animator: Animator::new(themes, motion, rng),
            slideshow: Slideshow::new(initial_theme),
            running: true,
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn ThemeListener>) {
        self.slideshow.subscribe(listener);
    }

    /// Shows the initial theme. Expects the first `Resized` to have been handled.
    pub fn start(&mut self) {
        self.slideshow.start(&mut self.animator);
        log::info!(
            "Backdrop started: {} particles, theme '{}'",
            self.animator.particle_count(),
            self.animator.active_theme().name
        );
    }

    pub fn viewport(&self) -> &ViewportState {
        self.surface.viewport()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle(&mut self, event: Event) {
        if !self.running {
            return;
        }
        match event {
            Event::Resized { logical_width, logical_height, device_pixel_ratio } => {
                let changed = self.surface.resize(logical_width, logical_height, device_pixel_ratio);
                if changed || !self.surface.is_ready() {
                    self.surface.adapt_particle_count_to_screen(&mut self.animator);
                }
            }
            Event::Advance(direction) => {
                self.slideshow.advance(direction, &mut self.animator);
            }
            Event::Stop => {
                log::info!("Backdrop stopped after {} generations", self.animator.generation());
                self.running = false;
            }
        }
    }

    /// One frame step. Draws nothing before the first particle count
    /// evaluation, and returns false once stopped.
    pub fn render_frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> bool {
        if !self.running {
            return false;
        }
        if self.surface.is_ready() {
            let viewport = *self.surface.viewport();
            self.animator.render_frame(
                canvas,
                viewport.logical_width(),
                viewport.logical_height(),
                viewport.device_pixel_ratio(),
            );
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::RecordingCanvas;
    use crate::slideshow::ThemeChange;
    use crate::state::AnimatorState;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn resized(width: f32, height: f32, ratio: f32) -> Event {
        Event::Resized { logical_width: width, logical_height: height, device_pixel_ratio: ratio }
    }

    fn backdrop() -> Backdrop {
        Backdrop::new(ThemeSet::builtin(), Motion::default(), StdRng::seed_from_u64(5), 0)
    }

    struct Titles(Rc<RefCell<Vec<String>>>);

    impl ThemeListener for Titles {
        fn theme_changed(&mut self, change: &ThemeChange) {
            self.0.borrow_mut().push(change.css_background.clone());
        }
    }

    #[test]
    fn nothing_is_drawn_before_first_resize() {
        let mut backdrop = backdrop();
        let mut canvas = RecordingCanvas::default();
        assert!(backdrop.render_frame(&mut canvas));
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn startup_sequence_reaches_running() {
        let mut backdrop = backdrop();
        backdrop.handle(resized(375.0, 812.0, 3.0));
        assert_eq!(backdrop.animator().particle_count(), 18);
        backdrop.start();
        assert_eq!(backdrop.animator().state(), AnimatorState::Running);
        assert_eq!(backdrop.animator().generation(), 2);
        assert_eq!(backdrop.viewport().physical_width(), 1125);

        let mut canvas = RecordingCanvas::default();
        backdrop.render_frame(&mut canvas);
        assert_eq!(canvas.circles().len(), 18);
    }

    #[test]
    fn resizing_within_a_tier_keeps_the_batch() {
        let mut backdrop = backdrop();
        backdrop.handle(resized(800.0, 600.0, 1.0));
        backdrop.start();
        let generation = backdrop.animator().generation();

        backdrop.handle(resized(850.0, 640.0, 1.0));
        backdrop.handle(resized(850.0, 640.0, 2.0));
        assert_eq!(backdrop.animator().generation(), generation);

        backdrop.handle(resized(1400.0, 900.0, 2.0));
        assert_eq!(backdrop.animator().generation(), generation + 1);
        assert_eq!(backdrop.animator().particle_count(), 40);
    }

    #[test]
    fn theme_change_keeps_particles_in_current_buffer() {
        let mut backdrop = backdrop();
        backdrop.handle(resized(800.0, 600.0, 1.0));
        backdrop.start();
        backdrop.handle(resized(600.0, 300.0, 2.0));
        backdrop.handle(Event::Advance(Direction::Forward));
        for particle in backdrop.animator().particles() {
            assert!(particle.x < 1200.0 && particle.y < 600.0);
        }
    }

    #[test]
    fn advance_events_publish_backgrounds() {
        let mut backdrop = backdrop();
        let titles = Rc::new(RefCell::new(Vec::new()));
        backdrop.subscribe(Box::new(Titles(titles.clone())));
        backdrop.handle(resized(1280.0, 720.0, 1.0));
        backdrop.start();
        backdrop.handle(Event::Advance(Direction::Forward));
        backdrop.handle(Event::Advance(Direction::Forward));

        assert_eq!(
            *titles.borrow(),
            [
                "radial-gradient(circle at center, #ffffff, #d41212)",
                "radial-gradient(circle at center, #ffffff, #189952)",
                "radial-gradient(circle at center, #ffffff, #0f0f0f)",
            ]
        );
        assert_eq!(backdrop.animator().active_index(), 2);
    }

    #[test]
    fn stop_ends_the_frame_loop() {
        let mut backdrop = backdrop();
        backdrop.handle(resized(1280.0, 720.0, 1.0));
        backdrop.start();
        backdrop.handle(Event::Stop);
        assert!(!backdrop.is_running());

        let generation = backdrop.animator().generation();
        backdrop.handle(Event::Advance(Direction::Forward));
        assert_eq!(backdrop.animator().generation(), generation);

        let mut canvas = RecordingCanvas::default();
        assert!(!backdrop.render_frame(&mut canvas));
        assert!(canvas.calls.is_empty());
    }
}
