//! Career recommendation and skill-gap analysis engine.
//!
//! Matches a user-supplied set of skills against a fixed catalog of career
//! profiles, ranks careers by TF-IDF cosine similarity, partitions each top
//! match's required skills into matched and missing, and synthesizes a
//! learning path for the gaps.
//!
//! The pipeline is synchronous and stateless per call:
//! normalize → score & rank → take top N → gap-analyze → learning path.
//! The catalog and resource library are immutable after construction, so a
//! shared engine can serve concurrent callers without locking.
//!
//! ```
//! use waypoint_engine::RecommendationEngine;
//!
//! let engine = RecommendationEngine::builtin();
//! let results = engine.analyze("Python, SQL, Machine Learning");
//! for rec in &results {
//!     println!(
//!         "{}: {:.0}% match, {} skills to learn",
//!         rec.career.title,
//!         rec.match_percentage,
//!         rec.missing_skills.len()
//!     );
//! }
//! ```

mod catalog;
mod engine;
mod error;
mod gap;
mod learning;
mod normalize;
mod scoring;

pub use catalog::{CareerCatalog, CareerRecord, GrowthOutlook, SalaryRange};
pub use engine::{EngineConfig, Recommendation, RecommendationEngine};
pub use error::EngineError;
pub use gap::{analyze_gap, GapReport};
pub use learning::{
    LearningPathEntry, LearningTemplate, Resource, ResourceLibrary, TimeEstimate, TimeUnit,
};
pub use normalize::{normalize_token, SkillSet};
pub use scoring::{RankedCareer, SimilarityScorer, TfidfScorer};
