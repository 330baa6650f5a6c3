pub mod error;
pub mod config;
pub mod level;

mod node;
pub mod skiplist;

pub use error::{Error, Result};
pub use config::Config;
pub use level::{GeometricLevelGenerator, LevelGenerator, MAX_LEVEL};
pub use skiplist::SkipList;
