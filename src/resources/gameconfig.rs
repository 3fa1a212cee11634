//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration. Values
//! are clamped later by the components that consume them, so a malformed
//! number degrades to the nearest valid value instead of failing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 1000
//! height = 800
//! margin = 50
//! fps = 60
//! object_limit = 200
//! seed = 0
//!
//! [spawn]
//! asteroids_per_second = 0.6
//! powerups_per_second = 0.05
//!
//! [player]
//! health = 50
//! speed = 5
//! ability = machine_gun
//! ability_duration = 6
//! cooldown = 8
//! firerate = 3
//! barrels = 1
//! damage = 5
//! projectile_speed = 8
//! autopilot = true
//!
//! [boss]
//! ; same keys as [player]
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::weapon::WeaponStats;

/// Default safe values for startup
const DEFAULT_WIDTH: u32 = 1000;
const DEFAULT_HEIGHT: u32 = 800;
const DEFAULT_MARGIN: u32 = 50;
const DEFAULT_FPS: u32 = 60;
const DEFAULT_OBJECT_LIMIT: usize = 200;
const DEFAULT_ASTEROIDS_PER_SECOND: f32 = 0.6;
const DEFAULT_POWERUPS_PER_SECOND: f32 = 0.05;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Tunables for one ship.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipConfig {
    pub health: i32,
    pub speed: f32,
    /// Ability catalog name.
    pub ability: String,
    pub ability_duration: f32,
    pub cooldown: f32,
    pub weapon: WeaponStats,
    pub autopilot: bool,
}

impl ShipConfig {
    pub fn player() -> Self {
        Self {
            health: 50,
            speed: 5.0,
            ability: "machine_gun".to_string(),
            ability_duration: 6.0,
            cooldown: 8.0,
            weapon: WeaponStats::new(3.0, 1, 5, 8.0),
            autopilot: true,
        }
    }

    pub fn boss() -> Self {
        Self {
            health: 200,
            speed: 3.0,
            ability: "fanfire".to_string(),
            ability_duration: 4.0,
            cooldown: 10.0,
            weapon: WeaponStats::new(1.5, 2, 6, 6.0),
            autopilot: true,
        }
    }

    fn load(&mut self, config: &Ini, section: &str) {
        if let Some(health) = config.getint(section, "health").ok().flatten() {
            self.health = health.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        }
        if let Some(speed) = config.getfloat(section, "speed").ok().flatten() {
            self.speed = speed as f32;
        }
        if let Some(ability) = config.get(section, "ability") {
            self.ability = ability.trim().to_string();
        }
        if let Some(duration) = config.getfloat(section, "ability_duration").ok().flatten() {
            self.ability_duration = duration as f32;
        }
        if let Some(cooldown) = config.getfloat(section, "cooldown").ok().flatten() {
            self.cooldown = cooldown as f32;
        }
        if let Some(firerate) = config.getfloat(section, "firerate").ok().flatten() {
            self.weapon.firerate = firerate as f32;
        }
        if let Some(barrels) = config.getuint(section, "barrels").ok().flatten() {
            self.weapon.barrels = barrels.min(u8::MAX as u64) as u8;
        }
        if let Some(damage) = config.getint(section, "damage").ok().flatten() {
            self.weapon.damage = damage.clamp(0, i32::MAX as i64) as i32;
        }
        if let Some(speed) = config.getfloat(section, "projectile_speed").ok().flatten() {
            self.weapon.projectile_speed = speed as f32;
        }
        if let Some(autopilot) = config.getbool(section, "autopilot").ok().flatten() {
            self.autopilot = autopilot;
        }
    }

    fn save(&self, config: &mut Ini, section: &str) {
        config.set(section, "health", Some(self.health.to_string()));
        config.set(section, "speed", Some(self.speed.to_string()));
        config.set(section, "ability", Some(self.ability.clone()));
        config.set(
            section,
            "ability_duration",
            Some(self.ability_duration.to_string()),
        );
        config.set(section, "cooldown", Some(self.cooldown.to_string()));
        config.set(section, "firerate", Some(self.weapon.firerate.to_string()));
        config.set(section, "barrels", Some(self.weapon.barrels.to_string()));
        config.set(section, "damage", Some(self.weapon.damage.to_string()));
        config.set(
            section,
            "projectile_speed",
            Some(self.weapon.projectile_speed.to_string()),
        );
        config.set(section, "autopilot", Some(self.autopilot.to_string()));
    }
}

/// Game configuration resource.
///
/// Stores play-field size, frame rate, spawn rates and the two ship setups.
/// [`Simulation::new`](crate::simulation::Simulation::new) reads it once to
/// build the world.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Play-field width in pixels.
    pub width: u32,
    /// Play-field height in pixels.
    pub height: u32,
    /// Distance past an edge before objects are culled.
    pub margin: u32,
    /// Simulated frames per second.
    pub fps: u32,
    /// Hard cap on live objects.
    pub object_limit: usize,
    /// RNG seed, 0 for a random one.
    pub seed: u64,
    pub asteroids_per_second: f32,
    pub powerups_per_second: f32,
    pub player: ShipConfig,
    pub boss: ShipConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            fps: DEFAULT_FPS,
            object_limit: DEFAULT_OBJECT_LIMIT,
            seed: 0,
            asteroids_per_second: DEFAULT_ASTEROIDS_PER_SECOND,
            powerups_per_second: DEFAULT_POWERUPS_PER_SECOND,
            player: ShipConfig::player(),
            boss: ShipConfig::boss(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [world] section
        if let Some(width) = config.getuint("world", "width").ok().flatten() {
            self.width = width.min(u32::MAX as u64) as u32;
        }
        if let Some(height) = config.getuint("world", "height").ok().flatten() {
            self.height = height.min(u32::MAX as u64) as u32;
        }
        if let Some(margin) = config.getuint("world", "margin").ok().flatten() {
            self.margin = margin.min(u32::MAX as u64) as u32;
        }
        if let Some(fps) = config.getuint("world", "fps").ok().flatten() {
            self.fps = (fps.min(u32::MAX as u64) as u32).max(1);
        }
        if let Some(limit) = config.getuint("world", "object_limit").ok().flatten() {
            self.object_limit = (limit as usize).max(1);
        }
        if let Some(seed) = config.getuint("world", "seed").ok().flatten() {
            self.seed = seed;
        }

        // [spawn] section
        if let Some(rate) = config
            .getfloat("spawn", "asteroids_per_second")
            .ok()
            .flatten()
        {
            self.asteroids_per_second = (rate as f32).max(0.0);
        }
        if let Some(rate) = config
            .getfloat("spawn", "powerups_per_second")
            .ok()
            .flatten()
        {
            self.powerups_per_second = (rate as f32).max(0.0);
        }

        // [player] and [boss] sections
        self.player.load(config, "player");
        self.boss.load(config, "boss");

        info!(
            "Loaded config: {}x{} field, margin={}, fps={}, object_limit={}, player ability={}, boss ability={}",
            self.width,
            self.height,
            self.margin,
            self.fps,
            self.object_limit,
            self.player.ability,
            self.boss.ability
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [world] section
        config.set("world", "width", Some(self.width.to_string()));
        config.set("world", "height", Some(self.height.to_string()));
        config.set("world", "margin", Some(self.margin.to_string()));
        config.set("world", "fps", Some(self.fps.to_string()));
        config.set("world", "object_limit", Some(self.object_limit.to_string()));
        config.set("world", "seed", Some(self.seed.to_string()));

        // [spawn] section
        config.set(
            "spawn",
            "asteroids_per_second",
            Some(self.asteroids_per_second.to_string()),
        );
        config.set(
            "spawn",
            "powerups_per_second",
            Some(self.powerups_per_second.to_string()),
        );

        self.player.save(&mut config, "player");
        self.boss.save(&mut config, "boss");
        config
    }

    /// Set play-field size.
    pub fn set_field_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Get the play-field size.
    pub fn field_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
