pub mod engine;
pub mod error;
pub mod factors;
pub mod summary;
pub mod validation;
pub mod weights;

pub use engine::{score, Dimension, DimensionScore, ScoreResult};
pub use error::ScoreError;
pub use summary::MATCH_THRESHOLD;
pub use validation::validate_profile;
pub use weights::Weights;
