use serde::{Deserialize, Serialize};

use crate::level::MAX_LEVEL;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reserves room in the head sentinel for this many levels above 0.
    /// Only avoids early reallocation; never changes behavior. Values above
    /// the generator's highest level are clamped to it.
    pub initial_level_hint: usize,
    /// Highest level the default generator will hand out.
    pub max_level: usize,
    /// Fixed seed for level generation. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_level_hint: 0,
            max_level: MAX_LEVEL,
            seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_level_hint(mut self, hint: usize) -> Self {
        self.initial_level_hint = hint;
        self
    }

    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_level > MAX_LEVEL {
            return Err(Error::InvalidConfig(format!(
                "max_level must be at most {}, got {}",
                MAX_LEVEL, self.max_level
            )));
        }

        Ok(())
    }
}
