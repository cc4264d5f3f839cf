use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::{EngagementWeights, HookWeights};
use crate::LengthClass;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TweetBounds {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthConfig {
    pub short: TweetBounds,
    pub medium: TweetBounds,
    pub long: TweetBounds,
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            short: TweetBounds { min: 3, max: 5 },
            medium: TweetBounds { min: 7, max: 10 },
            long: TweetBounds { min: 12, max: 18 },
        }
    }
}

impl LengthConfig {
    pub fn bounds(&self, class: LengthClass) -> TweetBounds {
        match class {
            LengthClass::Short => self.short,
            LengthClass::Medium => self.medium,
            LengthClass::Long => self.long,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShitpostConfig {
    pub min_posts: usize,
    pub max_posts: usize,
    pub score_floor: i32,
    pub score_ceiling: i32,
}

impl Default for ShitpostConfig {
    fn default() -> Self {
        Self {
            min_posts: 8,
            max_posts: 14,
            score_floor: 40,
            score_ceiling: 95,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub lengths: LengthConfig,
    pub hook: HookWeights,
    pub engagement: EngagementWeights,
    pub shitpost: ShitpostConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lengths: LengthConfig::default(),
            hook: HookWeights::default(),
            engagement: EngagementWeights::default(),
            shitpost: ShitpostConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngineConfig::default()
            }
        } else {
            EngineConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(floor) = env::var("ENGINE_SCORE_FLOOR") {
            if let Ok(value) = floor.parse::<i32>() {
                self.hook.floor = value;
                self.engagement.floor = value;
            }
        }
        if let Ok(ceiling) = env::var("ENGINE_SCORE_CEILING") {
            if let Ok(value) = ceiling.parse::<i32>() {
                self.hook.ceiling = value;
                self.engagement.ceiling = value;
            }
        }
        if let Ok(min_posts) = env::var("ENGINE_SHITPOST_MIN_POSTS") {
            if let Ok(value) = min_posts.parse::<usize>() {
                self.shitpost.min_posts = value;
            }
        }
        if let Ok(max_posts) = env::var("ENGINE_SHITPOST_MAX_POSTS") {
            if let Ok(value) = max_posts.parse::<usize>() {
                self.shitpost.max_posts = value;
            }
        }
    }
}

pub fn load_default() -> EngineConfig {
    EngineConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default()
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ENGINE_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/engine.toml")))
}
