use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Always
        } else {
            Self::Never
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Plain output: no colors regardless of environment.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Resolve the environment defaults against the `--plain` flag and the
    /// `use_color` config setting. `--plain` always wins.
    pub fn resolve(plain: bool, use_color: Option<bool>) -> Self {
        if plain {
            return Self::plain();
        }
        match use_color {
            Some(enabled) if env::var("NO_COLOR").is_err() => Self::new(enabled.into()),
            _ => Self::from_env(),
        }
    }

    pub fn use_color(&self) -> bool {
        self.color.should_use_color()
    }
}

/// Color and emphasis helpers that degrade to plain text when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(config: FormattingConfig) -> Self {
        let color = config.use_color();
        colored::control::set_override(color);
        Self { color }
    }

    pub fn use_color(&self) -> bool {
        self.color
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |s| s.blue().bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |s| s.dimmed())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
