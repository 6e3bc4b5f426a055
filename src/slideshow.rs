use crate::animator::Animator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Published whenever the active theme changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeChange {
    pub index: usize,
    pub name: String,
    pub css_background: String,
}

/// Hook for whatever UI has to follow the backdrop (container background,
/// window title, panels).
pub trait ThemeListener {
    fn theme_changed(&mut self, change: &ThemeChange);
}

/// Owns the current slide index and turns direction events into theme changes.
pub struct Slideshow {
    current: usize,
    listeners: Vec<Box<dyn ThemeListener>>,
}

impl Slideshow {
    pub fn new(initial: usize) -> Self {
        Self { current: initial, listeners: Vec::new() }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn subscribe(&mut self, listener: Box<dyn ThemeListener>) {
        self.listeners.push(listener);
    }

    /// Applies and publishes the initial theme.
    pub fn start(&mut self, animator: &mut Animator) {
        self.current = animator.themes().wrap(self.current);
        self.show(animator);
    }

    pub fn advance(&mut self, direction: Direction, animator: &mut Animator) -> usize {
        let count = animator.themes().len();
        self.current = match direction {
            Direction::Forward => (self.current + 1) % count,
            Direction::Backward => (self.current + count - 1) % count,
        };
        self.show(animator);
        self.current
    }

    fn show(&mut self, animator: &mut Animator) {
        let theme = animator.apply_theme(self.current);
        let change = ThemeChange {
            index: self.current,
            name: theme.name.clone(),
            css_background: theme.css_background(),
        };
        for listener in self.listeners.iter_mut() {
            listener.theme_changed(&change);
        }
    }
}
