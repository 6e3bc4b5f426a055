use std::fmt;
use std::path::Path;
use raylib::prelude::*;
use serde::Deserialize;

/// Background gradient plus particle color, selected by slideshow position.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub gradient_start: Color,
    pub gradient_end: Color,
    pub particle_color: Color,
}

impl Theme {
    pub fn new(name: &str, gradient: [&str; 2], particle: &str) -> Result<Self, ThemeError> {
        Ok(Self {
            name: name.to_string(),
            gradient_start: parse_hex_color(gradient[0])?,
            gradient_end: parse_hex_color(gradient[1])?,
            particle_color: parse_hex_color(particle)?,
        })
    }

    /// CSS equivalent of the backdrop gradient, published to the slideshow UI.
    pub fn css_background(&self) -> String {
        format!(
            "radial-gradient(circle at center, {}, {})",
            css_hex(self.gradient_start),
            css_hex(self.gradient_end)
        )
    }
}

/// Fixed, ordered, never empty sequence of themes.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    themes: Vec<Theme>,
}

impl ThemeSet {
    /// Red, green and black: one theme per slide of the stock storefront.
    pub fn builtin() -> Self {
        // The literals are known good, parsing cannot fail here.
        let themes = [
            ("red", ["#ffffff", "#d41212"], "#ec3737ff"),
            ("green", ["#ffffff", "#189952ff"], "#278d51ff"),
            ("black", ["#ffffff", "#0f0f0f"], "#444444"),
        ]
        .into_iter()
        .filter_map(|(name, gradient, particle)| Theme::new(name, gradient, particle).ok())
        .collect();
        Self { themes }
    }

    pub fn from_themes(themes: Vec<Theme>) -> Result<Self, ThemeError> {
        if themes.is_empty() {
            return Err(ThemeError::Empty);
        }
        Ok(Self { themes })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(contents)?;
        let themes = file
            .themes
            .iter()
            .map(|entry| {
                Theme::new(
                    &entry.name,
                    [entry.gradient[0].as_str(), entry.gradient[1].as_str()],
                    &entry.particle,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_themes(themes)
    }

    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Maps any index onto the sequence.
    pub fn wrap(&self, index: usize) -> usize {
        index % self.themes.len()
    }

    pub fn get(&self, index: usize) -> &Theme {
        &self.themes[self.wrap(index)]
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(rename = "theme", default)]
    themes: Vec<ThemeEntry>,
}

#[derive(Debug, Deserialize)]
struct ThemeEntry {
    name: String,
    gradient: [String; 2],
    particle: String,
}

#[derive(Debug)]
pub enum ThemeError {
    InvalidColor(String),
    Empty,
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(value) => write!(formatter, "invalid color '{value}'"),
            Self::Empty => write!(formatter, "theme list is empty"),
            Self::Io(error) => write!(formatter, "IO error: {error}"),
            Self::Toml(error) => write!(formatter, "TOML parse error: {error}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(error: toml::de::Error) -> Self {
        Self::Toml(error)
    }
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`, the `#` being optional.
pub fn parse_hex_color(value: &str) -> Result<Color, ThemeError> {
    let invalid = || ThemeError::InvalidColor(value.to_string());
    let digits = value.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
    match digits.len() {
        3 => {
            let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
            Ok(Color::new(short(0)?, short(1)?, short(2)?, 255))
        }
        6 => Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?)),
        _ => Err(invalid()),
    }
}

/// Lowercase `#rrggbb`, or `#rrggbbaa` when the color is not opaque.
pub fn css_hex(color: Color) -> String {
    if color.a == 255 {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", color.r, color.g, color.b, color.a)
    }
}

/// Linear blend between two colors, `t` clamped to [0, 1].
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
        channel(from.a, to.a),
    )
}
