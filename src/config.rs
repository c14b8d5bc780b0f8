//! Game settings
//!
//! Tuning values live in an optional RON file (`assets/dasher.ron`). Every
//! field has a built-in default, so the file only needs
//! the values being changed:
//!
//! ```ron
//! (
//!     gravity: 1500.0,
//!     fps_limit: Fps30,
//! )
//! ```

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::anim::SheetLayout;

/// Window size is fixed at compile time (macroquad reads it before `main` runs)
pub const WINDOW_WIDTH: i32 = 512;
pub const WINDOW_HEIGHT: i32 = 380;
pub const WINDOW_TITLE: &str = "Dapper Dasher!";

/// Default location of the settings file
pub const SETTINGS_PATH: &str = "assets/dasher.ron";

/// Number of obstacles spawned per run
pub const OBSTACLE_COUNT: usize = 10;

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as possible
    Unlocked,
}

impl FpsLimit {
    /// Target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// Texture file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub obstacle: String,
    pub player: String,
    pub background: String,
    pub midground: String,
    pub foreground: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            obstacle: "assets/textures/12_nebula_spritesheet.png".to_string(),
            player: "assets/textures/scarfy.png".to_string(),
            background: "assets/textures/far-buildings.png".to_string(),
            midground: "assets/textures/back-buildings.png".to_string(),
            foreground: "assets/textures/foreground.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Downward acceleration (pixels/s^2)
    pub gravity: f32,
    /// Vertical impulse added on jump (pixels/s, negative is up)
    pub jump_velocity: f32,
    /// Horizontal step per frame while a move key is held (pixels)
    pub player_speed: f32,
    /// Obstacle and finish line scroll speed (pixels/s, negative is left)
    pub obstacle_velocity: f32,
    /// Horizontal gap between spawned obstacles (pixels)
    pub obstacle_spacing: f32,
    /// Inset applied to each obstacle's draw rect for collision (pixels)
    pub hitbox_padding: f32,
    /// Seconds per animation frame
    pub player_update_time: f32,
    pub obstacle_update_time: f32,
    pub player_sheet: SheetLayout,
    pub obstacle_sheet: SheetLayout,
    /// Scroll speed of the far background layer; mid and fore run at 2x and 4x
    pub parallax_speed: f32,
    /// Draw scale of the background images
    pub background_scale: f32,
    pub fps_limit: FpsLimit,
    /// Print one line of simulation state per frame
    pub debug_log: bool,
    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: 1_000.0,
            jump_velocity: -600.0,
            player_speed: 10.0,
            obstacle_velocity: -300.0,
            obstacle_spacing: 400.0,
            hitbox_padding: 50.0,
            player_update_time: 1.0 / 12.0,
            obstacle_update_time: 1.0 / 12.0,
            player_sheet: SheetLayout::new(6, 1),
            obstacle_sheet: SheetLayout::new(8, 8),
            parallax_speed: 20.0,
            background_scale: 2.0,
            fps_limit: FpsLimit::default(),
            debug_log: false,
            assets: AssetPaths::default(),
        }
    }
}

/// Error type for settings loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

fn check_finite(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be finite (got {})", name, value))
    }
}

fn check_sheet(name: &str, sheet: &SheetLayout) -> Result<(), String> {
    if sheet.columns == 0 || sheet.rows == 0 {
        return Err(format!("{}: sheet needs at least one row and column", name));
    }
    Ok(())
}

impl Settings {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(ConfigError::ValidationError)
    }

    fn check(&self) -> Result<(), String> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("player_speed", self.player_speed),
            ("obstacle_velocity", self.obstacle_velocity),
            ("obstacle_spacing", self.obstacle_spacing),
            ("hitbox_padding", self.hitbox_padding),
            ("player_update_time", self.player_update_time),
            ("obstacle_update_time", self.obstacle_update_time),
            ("parallax_speed", self.parallax_speed),
            ("background_scale", self.background_scale),
        ] {
            check_finite(name, value)?;
        }
        if self.gravity < 0.0 {
            return Err(format!("gravity must be >= 0 (got {})", self.gravity));
        }
        if self.obstacle_velocity > 0.0 {
            return Err(format!(
                "obstacle_velocity must scroll left (<= 0, got {})",
                self.obstacle_velocity
            ));
        }
        if self.obstacle_spacing <= 0.0 {
            return Err(format!("obstacle_spacing must be > 0 (got {})", self.obstacle_spacing));
        }
        if self.hitbox_padding < 0.0 {
            return Err(format!("hitbox_padding must be >= 0 (got {})", self.hitbox_padding));
        }
        if self.player_update_time <= 0.0 || self.obstacle_update_time <= 0.0 {
            return Err("animation update times must be > 0".to_string());
        }
        if self.background_scale <= 0.0 {
            return Err(format!("background_scale must be > 0 (got {})", self.background_scale));
        }
        check_sheet("player_sheet", &self.player_sheet)?;
        check_sheet("obstacle_sheet", &self.obstacle_sheet)?;
        Ok(())
    }

    /// Padding that swallows a whole obstacle frame would leave a zero-size
    /// hit-box that still collides (see `Rect::pad`), so refuse it once the
    /// sheet size is known.
    pub fn validate_hitbox(&self, obstacle_frame: (f32, f32)) -> Result<(), ConfigError> {
        let (w, h) = obstacle_frame;
        if self.hitbox_padding * 2.0 > w.min(h) {
            return Err(ConfigError::ValidationError(format!(
                "hitbox_padding {} leaves no hit-box on a {}x{} obstacle frame",
                self.hitbox_padding, w, h
            )));
        }
        Ok(())
    }

    /// Parse and validate RON text
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = ron::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from a file on disk (native only)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let config = ron::ser::PrettyConfig::new().depth_limit(3);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }
}

/// Load settings, falling back to defaults.
///
/// A missing file means defaults; a broken one is reported and also falls
/// back to defaults. WASM goes through macroquad's file API since there is
/// no filesystem.
pub async fn load_or_default(path: &str) -> Settings {
    #[cfg(not(target_arch = "wasm32"))]
    let result = if Path::new(path).exists() {
        Some(Settings::load(path))
    } else {
        None
    };

    #[cfg(target_arch = "wasm32")]
    let result = match macroquad::file::load_string(path).await {
        Ok(contents) => Some(Settings::from_ron_str(&contents)),
        Err(_) => None,
    };

    let settings = match result {
        None => {
            println!("Settings: {} not found, using defaults", path);
            Settings::default()
        }
        Some(Ok(settings)) => {
            println!("Settings: loaded {}", path);
            settings
        }
        Some(Err(e)) => {
            eprintln!("Settings: failed to load {}: {}, using defaults", path, e);
            Settings::default()
        }
    };

    if settings.debug_log {
        match settings.to_ron_string() {
            Ok(ron) => println!("Settings: effective values\n{}", ron),
            Err(e) => eprintln!("Settings: could not print values: {}", e),
        }
    }
    settings
}
