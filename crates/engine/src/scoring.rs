//! Similarity scoring: pluggable, trait-based scorer that ranks the career
//! catalog against a user skill set.
//!
//! Default: `TfidfScorer` (pure-Rust TF-IDF + cosine, deterministic).
//! The engine holds the scorer as `Box<dyn SimilarityScorer>` so callers can
//! swap in an alternate backend without touching the orchestration code.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::CareerCatalog;
use crate::normalize::SkillSet;

/// One catalog record's position and similarity score in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedCareer {
    /// Index into the catalog's record list.
    pub index: usize,
    /// Cosine similarity in [0, 1].
    pub score: f64,
}

/// The similarity scorer seam.
///
/// Implementations must be deterministic: for a fixed catalog and skill set,
/// the returned sequence is bit-for-bit reproducible, with equal scores kept
/// in catalog insertion order.
pub trait SimilarityScorer: Send + Sync {
    /// Ranks every catalog record by descending similarity to `user`.
    fn rank(&self, user: &SkillSet, catalog: &CareerCatalog) -> Vec<RankedCareer>;
}

/// TF-IDF / cosine scorer.
///
/// Each normalized skill token is one vocabulary term (multi-word skills such
/// as "machine learning" are not split), which keeps scoring consistent with
/// gap analysis. The corpus is the user document plus one document per
/// career record. Smoothed IDF keeps every weight positive, so cosine lies
/// in [0, 1] without clamping surprises.
#[derive(Debug, Default)]
pub struct TfidfScorer;

impl SimilarityScorer for TfidfScorer {
    fn rank(&self, user: &SkillSet, catalog: &CareerCatalog) -> Vec<RankedCareer> {
        let career_docs: Vec<Vec<String>> = catalog
            .records()
            .iter()
            .map(|record| record.skill_tokens())
            .collect();

        // Vocabulary in stable first-seen order: user tokens, then records in
        // catalog order. The HashMap is lookup-only, never iterated, so no
        // hashing-order dependence leaks into the result.
        let mut vocab_size = 0usize;
        let mut term_index: HashMap<&str, usize> = HashMap::new();
        for token in user
            .tokens()
            .iter()
            .chain(career_docs.iter().flatten())
        {
            term_index.entry(token.as_str()).or_insert_with(|| {
                let i = vocab_size;
                vocab_size += 1;
                i
            });
        }

        // Document frequency per term. Every document is already
        // deduplicated, so each occurrence counts once.
        let doc_count = career_docs.len() + 1;
        let mut df = vec![0usize; vocab_size];
        for doc in std::iter::once(user.tokens()).chain(career_docs.iter().map(Vec::as_slice)) {
            for token in doc {
                df[term_index[token.as_str()]] += 1;
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1, always > 0.
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1 + doc_count) as f64 / (1 + d) as f64).ln() + 1.0)
            .collect();

        let user_vector = weigh(user.tokens(), &term_index, &idf, vocab_size);
        let user_norm = norm(&user_vector);

        let mut ranked: Vec<RankedCareer> = career_docs
            .iter()
            .enumerate()
            .map(|(index, doc)| {
                let career_vector = weigh(doc, &term_index, &idf, vocab_size);
                RankedCareer {
                    index,
                    score: cosine(&user_vector, user_norm, &career_vector),
                }
            })
            .collect();

        // Stable sort: equal scores keep catalog insertion order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// TF-IDF weight vector for one document over the shared vocabulary.
fn weigh(
    doc: &[String],
    term_index: &HashMap<&str, usize>,
    idf: &[f64],
    vocab_size: usize,
) -> Vec<f64> {
    let mut vector = vec![0.0_f64; vocab_size];
    for token in doc {
        let i = term_index[token.as_str()];
        // Documents are deduplicated sets, so term frequency is 1.
        vector[i] = idf[i];
    }
    vector
}

fn norm(vector: &[f64]) -> f64 {
    vector.iter().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity, 0.0 when either vector is zero.
fn cosine(user: &[f64], user_norm: f64, career: &[f64]) -> f64 {
    let career_norm = norm(career);
    if user_norm == 0.0 || career_norm == 0.0 {
        return 0.0;
    }
    let dot: f64 = user.iter().zip(career).map(|(a, b)| a * b).sum();
    (dot / (user_norm * career_norm)).clamp(0.0, 1.0)
}
