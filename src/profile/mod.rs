mod loader;
mod types;

pub use loader::load_profile;
pub use types::{GolfProfile, HandicapSnapshot, PerformanceStats, ScoreRecord};
