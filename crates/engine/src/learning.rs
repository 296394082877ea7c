//! Learning paths: maps missing skills to curated resources and time
//! estimates from a static lookup table, with a generic fallback for skills
//! the table does not know.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineError;
use crate::normalize::normalize_token;

/// Embedded default resource library. Consumers can substitute their own via
/// [`ResourceLibrary::from_json`].
const BUILTIN_RESOURCES: &str = include_str!("../data/resources.json");

/// A single learning resource: display name plus reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Weeks,
    Months,
}

/// Estimated time-to-competency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub min: u32,
    pub max: u32,
    pub unit: TimeUnit,
}

impl TimeEstimate {
    /// Bounds expressed in months. Week-denominated estimates convert at 4
    /// weeks per month, rounding up, so aggregates stay conservative.
    fn bounds_in_months(&self) -> (u32, u32) {
        match self.unit {
            TimeUnit::Months => (self.min, self.max),
            TimeUnit::Weeks => (self.min.div_ceil(4), self.max.div_ceil(4)),
        }
    }
}

/// Per-skill learning recipe as authored in the resource table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTemplate {
    /// Target competency band, e.g. "Beginner-Intermediate".
    pub level: String,
    pub resources: Vec<Resource>,
    pub estimated_time: TimeEstimate,
}

/// One missing skill paired with its learning recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPathEntry {
    pub skill: String,
    pub level: String,
    pub resources: Vec<Resource>,
    pub estimated_time: TimeEstimate,
}

#[derive(Debug, Deserialize)]
struct LibraryData {
    fallback: LearningTemplate,
    skills: HashMap<String, LearningTemplate>,
}

/// Static skill → learning-template table, immutable after construction.
///
/// Every lookup succeeds: tokens absent from the table resolve to the
/// fallback template, so a missing skill always receives actionable output.
#[derive(Debug, Clone)]
pub struct ResourceLibrary {
    skills: HashMap<String, LearningTemplate>,
    fallback: LearningTemplate,
}

impl ResourceLibrary {
    /// Validates and wraps a skill table plus fallback. Keys are normalized
    /// so lookup agrees with how the rest of the engine compares tokens.
    pub fn new(
        skills: HashMap<String, LearningTemplate>,
        fallback: LearningTemplate,
    ) -> Result<Self, EngineError> {
        if fallback.resources.is_empty() {
            return Err(EngineError::Library(
                "fallback template must list at least one resource".to_string(),
            ));
        }

        let mut normalized: HashMap<String, LearningTemplate> = HashMap::new();
        for (key, template) in skills {
            let token = normalize_token(&key).ok_or_else(|| {
                EngineError::Library("skill table contains a blank key".to_string())
            })?;
            if normalized.insert(token.clone(), template).is_some() {
                return Err(EngineError::Library(format!(
                    "skill table keys collide after normalization: '{token}'"
                )));
            }
        }

        info!(skills = normalized.len(), "resource library loaded");
        Ok(Self {
            skills: normalized,
            fallback,
        })
    }

    /// Loads a library from JSON: `{ "fallback": {...}, "skills": {...} }`.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let data: LibraryData = serde_json::from_str(json)?;
        Self::new(data.skills, data.fallback)
    }

    /// The embedded default library.
    pub fn builtin() -> Self {
        // Embedded asset, shape verified by tests.
        Self::from_json(BUILTIN_RESOURCES).expect("embedded resource library is valid")
    }

    /// One entry per missing token, in the order the tokens are listed.
    /// Unknown tokens receive the fallback template.
    pub fn path_for(&self, missing: &[String]) -> Vec<LearningPathEntry> {
        missing
            .iter()
            .map(|token| {
                let template = self.skills.get(token).unwrap_or(&self.fallback);
                LearningPathEntry {
                    skill: token.clone(),
                    level: template.level.clone(),
                    resources: template.resources.clone(),
                    estimated_time: template.estimated_time,
                }
            })
            .collect()
    }

    /// Summed time estimate across a learning path, in months.
    /// `None` when the path is empty.
    pub fn total_estimate(path: &[LearningPathEntry]) -> Option<TimeEstimate> {
        if path.is_empty() {
            return None;
        }
        let (min, max) = path
            .iter()
            .map(|entry| entry.estimated_time.bounds_in_months())
            .fold((0, 0), |(lo, hi), (min, max)| (lo + min, hi + max));
        Some(TimeEstimate {
            min,
            max,
            unit: TimeUnit::Months,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_template(level: &str, min: u32, max: u32, unit: TimeUnit) -> LearningTemplate {
        LearningTemplate {
            level: level.to_string(),
            resources: vec![Resource {
                name: "A Course".to_string(),
                url: "https://example.com/course".to_string(),
            }],
            estimated_time: TimeEstimate { min, max, unit },
        }
    }

    fn make_library() -> ResourceLibrary {
        let skills = HashMap::from([
            (
                "python".to_string(),
                make_template("Beginner", 2, 3, TimeUnit::Months),
            ),
            (
                "git".to_string(),
                make_template("Beginner", 2, 4, TimeUnit::Weeks),
            ),
        ]);
        ResourceLibrary::new(skills, make_template("Intermediate", 2, 3, TimeUnit::Months))
            .unwrap()
    }

    #[test]
    fn test_builtin_library_parses() {
        let library = ResourceLibrary::builtin();
        let path = library.path_for(&["python".to_string()]);
        assert_eq!(path[0].skill, "python");
        assert!(!path[0].resources.is_empty());
    }

    #[test]
    fn test_known_skill_gets_its_template() {
        let library = make_library();
        let path = library.path_for(&["python".to_string()]);
        assert_eq!(path[0].estimated_time.min, 2);
        assert_eq!(path[0].estimated_time.unit, TimeUnit::Months);
    }

    #[test]
    fn test_unknown_skill_gets_fallback_not_omitted() {
        let library = make_library();
        let path = library.path_for(&["underwater basket weaving".to_string()]);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].skill, "underwater basket weaving");
        assert_eq!(path[0].level, "Intermediate");
        assert!(!path[0].resources.is_empty());
    }

    #[test]
    fn test_path_preserves_missing_order() {
        let library = make_library();
        let missing = vec!["git".to_string(), "python".to_string()];
        let path = library.path_for(&missing);
        assert_eq!(path[0].skill, "git");
        assert_eq!(path[1].skill, "python");
    }

    #[test]
    fn test_empty_missing_set_yields_empty_path() {
        assert!(make_library().path_for(&[]).is_empty());
    }

    #[test]
    fn test_keys_normalized_at_load() {
        let skills = HashMap::from([(
            "  Machine   Learning ".to_string(),
            make_template("Advanced", 3, 4, TimeUnit::Months),
        )]);
        let library =
            ResourceLibrary::new(skills, make_template("Intermediate", 2, 3, TimeUnit::Months))
                .unwrap();
        let path = library.path_for(&["machine learning".to_string()]);
        assert_eq!(path[0].level, "Advanced");
    }

    #[test]
    fn test_colliding_keys_rejected() {
        let skills = HashMap::from([
            (
                "Python".to_string(),
                make_template("Beginner", 1, 2, TimeUnit::Months),
            ),
            (
                "python ".to_string(),
                make_template("Advanced", 3, 4, TimeUnit::Months),
            ),
        ]);
        let result =
            ResourceLibrary::new(skills, make_template("Intermediate", 2, 3, TimeUnit::Months));
        assert!(matches!(result, Err(EngineError::Library(_))));
    }

    #[test]
    fn test_empty_fallback_resources_rejected() {
        let mut fallback = make_template("Intermediate", 2, 3, TimeUnit::Months);
        fallback.resources.clear();
        assert!(matches!(
            ResourceLibrary::new(HashMap::new(), fallback),
            Err(EngineError::Library(_))
        ));
    }

    #[test]
    fn test_total_estimate_sums_in_months() {
        let library = make_library();
        // python: 2-3 months, git: 2-4 weeks → 1 month both bounds (ceil)
        let path = library.path_for(&["python".to_string(), "git".to_string()]);
        let total = ResourceLibrary::total_estimate(&path).unwrap();
        assert_eq!(total.unit, TimeUnit::Months);
        assert_eq!(total.min, 3);
        assert_eq!(total.max, 4);
    }

    #[test]
    fn test_total_estimate_empty_path_is_none() {
        assert!(ResourceLibrary::total_estimate(&[]).is_none());
    }
}
