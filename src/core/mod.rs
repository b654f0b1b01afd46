// Core algorithm exports
pub mod advice;
pub mod analysis;
pub mod assembler;
pub mod scoring;
pub mod traits;

pub use advice::compose_local;
pub use analysis::{disliked_features, feature_scores, liked_features, partition, SwipeAnalysis};
pub use assembler::{assemble, recommend_accessories};
pub use scoring::{score_camera, score_catalog};
pub use traits::{infer_user_type, name_candidates, FixedPicker, NamePicker, RandomPicker};
