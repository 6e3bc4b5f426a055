use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use crate::constants::*;
use crate::theme::ThemeSet;

/// Unit in which particle velocities are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VelocityUnits {
    /// Logical pixels per frame, same apparent speed on every display density
    #[default]
    Logical,
    /// Physical pixels per frame, slower drift on high density displays
    Physical,
}

/// What happens to a particle that crossed a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EdgeMode {
    /// Bounce on the next frame, the particle may be drawn one step outside
    #[default]
    Tolerate,
    /// Bounce and pull the particle back onto the edge
    Clamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Motion {
    pub velocity_units: VelocityUnits,
    pub edge_mode: EdgeMode,
}

#[derive(Debug, Parser)]
#[command(name = "backdrop", version, about = "Animated gradient and particle backdrop following a slideshow theme")]
pub struct Cli {
    /// Initial logical window width
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    pub width: i32,

    /// Initial logical window height
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Index of the theme shown first (wraps around)
    #[arg(long, default_value_t = 0)]
    pub theme: usize,

    /// TOML palette replacing the built-in themes
    #[arg(long, value_name = "FILE")]
    pub themes: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = VelocityUnits::Logical)]
    pub velocity_units: VelocityUnits,

    #[arg(long, value_enum, default_value_t = EdgeMode::Tolerate)]
    pub edge_mode: EdgeMode,

    /// Seed for reproducible particle batches
    #[arg(long)]
    pub seed: Option<u64>,

    /// Device pixel ratio override, defaults to the scale reported by the window
    #[arg(long)]
    pub dpr: Option<f32>,
}

impl Cli {
    pub fn load_themes(&self) -> Result<ThemeSet> {
        match &self.themes {
            Some(path) => ThemeSet::load(path)
                .with_context(|| format!("Failed to load themes from {}", path.display())),
            None => Ok(ThemeSet::builtin()),
        }
    }

    pub fn motion(&self) -> Motion {
        Motion {
            velocity_units: self.velocity_units,
            edge_mode: self.edge_mode,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::parse_from(["backdrop"]);
        assert_eq!(cli.width, 1280);
        assert_eq!(cli.height, 720);
        assert_eq!(cli.fps, 60);
        assert_eq!(cli.theme, 0);
        assert_eq!(cli.motion(), Motion::default());
        assert!(cli.dpr.is_none());
        assert_eq!(cli.load_themes().unwrap().len(), 3);
    }

    #[test]
    fn parses_motion_flags() {
        let cli = Cli::parse_from([
            "backdrop",
            "--velocity-units",
            "physical",
            "--edge-mode",
            "clamp",
            "--dpr",
            "2",
        ]);
        assert_eq!(cli.motion().velocity_units, VelocityUnits::Physical);
        assert_eq!(cli.motion().edge_mode, EdgeMode::Clamp);
        assert_eq!(cli.dpr, Some(2.0));
    }

    #[test]
    fn seed_makes_rng_reproducible() {
        let cli = Cli::parse_from(["backdrop", "--seed", "42"]);
        let a: u64 = cli.rng().random();
        let b: u64 = cli.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_theme_file_is_reported() {
        let cli = Cli::parse_from(["backdrop", "--themes", "/nonexistent/themes.toml"]);
        let error = cli.load_themes().unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/themes.toml"));
    }
}
