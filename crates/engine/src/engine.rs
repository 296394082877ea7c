//! Recommendation engine: the orchestrator that ties normalization, scoring,
//! gap analysis, and learning-path generation into one synchronous pipeline.
//!
//! The engine holds no mutable state between calls. The catalog, resource
//! library, and scorer are fixed at construction, so `analyze` is safe to
//! invoke concurrently through a shared reference.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{CareerCatalog, CareerRecord};
use crate::gap::analyze_gap;
use crate::learning::{LearningPathEntry, ResourceLibrary, TimeEstimate};
use crate::normalize::SkillSet;
use crate::scoring::{SimilarityScorer, TfidfScorer};

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How many top-ranked careers `analyze` returns.
    pub top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

/// One ranked career with its gap analysis and learning path.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub career: CareerRecord,
    /// Cosine similarity in [0, 1].
    pub score: f64,
    /// 100 × |matched| / |required|; 0 when the career requires no skills.
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// One entry per missing skill, in missing order.
    pub learning_path: Vec<LearningPathEntry>,
    /// Summed estimate across the learning path; `None` when nothing is missing.
    pub estimated_total: Option<TimeEstimate>,
}

/// The sole entry point consumed by the UI shell.
pub struct RecommendationEngine {
    catalog: CareerCatalog,
    library: ResourceLibrary,
    scorer: Box<dyn SimilarityScorer>,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Builds an engine over an already-validated catalog and library, with
    /// the default TF-IDF scorer and default config.
    pub fn new(catalog: CareerCatalog, library: ResourceLibrary) -> Self {
        Self {
            catalog,
            library,
            scorer: Box::new(TfidfScorer),
            config: EngineConfig::default(),
        }
    }

    /// Engine over the embedded catalog and resource library.
    pub fn builtin() -> Self {
        Self::new(CareerCatalog::builtin(), ResourceLibrary::builtin())
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Swaps the scoring backend without touching the rest of the pipeline.
    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    /// Analyzes raw skill input and returns the configured number of top
    /// matches. Empty or blank input yields an empty list; messaging the user
    /// about it is the caller's concern.
    pub fn analyze(&self, raw_skills: &str) -> Vec<Recommendation> {
        self.analyze_top(raw_skills, self.config.top_n)
    }

    /// `analyze` with an explicit result-count cap. The returned list has
    /// length `min(top_n, catalog size)`, ranked by descending score with
    /// catalog order breaking ties.
    pub fn analyze_top(&self, raw_skills: &str, top_n: usize) -> Vec<Recommendation> {
        let user = SkillSet::parse(raw_skills);
        if user.is_empty() {
            debug!("empty skill input, no recommendations");
            return Vec::new();
        }
        debug!(skills = user.len(), "normalized user input");

        let ranked = self.scorer.rank(&user, &self.catalog);

        ranked
            .into_iter()
            .take(top_n)
            .map(|ranked_career| {
                let career = &self.catalog.records()[ranked_career.index];
                let gap = analyze_gap(career, &user);
                let learning_path = self.library.path_for(&gap.missing);
                let estimated_total = ResourceLibrary::total_estimate(&learning_path);

                debug!(
                    career = %career.id,
                    score = ranked_career.score,
                    matched = gap.matched.len(),
                    missing = gap.missing.len(),
                    "ranked career"
                );

                Recommendation {
                    career: career.clone(),
                    score: ranked_career.score,
                    match_percentage: gap.match_percentage,
                    matched_skills: gap.matched,
                    missing_skills: gap.missing,
                    learning_path,
                    estimated_total,
                }
            })
            .collect()
    }
}
