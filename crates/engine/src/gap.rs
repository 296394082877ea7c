//! Gap analysis: which of a career's required skills the user already has,
//! and which are missing.

use serde::Serialize;

use crate::catalog::CareerRecord;
use crate::normalize::{normalize_token, SkillSet};

/// Matched/missing partition of one career's required skills.
///
/// Invariant: `matched` and `missing` are disjoint and together cover the
/// record's required-skill set exactly, both in the record's canonical
/// display order.
#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// 100 × |matched| / |required|; 0 when the required set is empty.
    pub match_percentage: f64,
}

/// Partitions `record`'s required skills against the user's skill set.
/// Comparison is exact equality on normalized tokens.
pub fn analyze_gap(record: &CareerRecord, user: &SkillSet) -> GapReport {
    let mut matched: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();

    for skill in &record.skills {
        let Some(token) = normalize_token(skill) else {
            continue;
        };
        if matched.contains(&token) || missing.contains(&token) {
            continue;
        }
        if user.contains(&token) {
            matched.push(token);
        } else {
            missing.push(token);
        }
    }

    let required = matched.len() + missing.len();
    let match_percentage = if required == 0 {
        0.0
    } else {
        100.0 * matched.len() as f64 / required as f64
    };

    GapReport {
        matched,
        missing,
        match_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CareerRecord, GrowthOutlook, SalaryRange};

    fn make_record(skills: &[&str]) -> CareerRecord {
        CareerRecord {
            id: "data-analyst".to_string(),
            title: "Data Analyst".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            salary: SalaryRange {
                min: 60_000,
                max: 100_000,
            },
            growth: GrowthOutlook::Medium,
            experience_level: "1-3 years".to_string(),
        }
    }

    #[test]
    fn test_partition_matches_spec_example() {
        let record = make_record(&["Python", "SQL", "Excel"]);
        let user = SkillSet::parse("Python, SQL");
        let report = analyze_gap(&record, &user);

        assert_eq!(report.matched, ["python", "sql"]);
        assert_eq!(report.missing, ["excel"]);
        assert!(
            (report.match_percentage - 66.666).abs() < 0.1,
            "expected ~66.7, got {}",
            report.match_percentage
        );
    }

    #[test]
    fn test_matched_and_missing_cover_required_set() {
        let record = make_record(&["Python", "SQL", "ETL", "Spark"]);
        let user = SkillSet::parse("sql, spark");
        let report = analyze_gap(&record, &user);

        let mut all: Vec<String> = report.matched.clone();
        all.extend(report.missing.clone());
        all.sort();
        assert_eq!(all, ["etl", "python", "spark", "sql"]);
        assert!(report.matched.iter().all(|s| !report.missing.contains(s)));
    }

    #[test]
    fn test_empty_required_set_reports_zero_percent() {
        let record = make_record(&[]);
        let report = analyze_gap(&record, &SkillSet::parse("python"));
        assert_eq!(report.match_percentage, 0.0);
        assert!(report.matched.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_empty_user_set_misses_everything() {
        let record = make_record(&["Python", "SQL"]);
        let report = analyze_gap(&record, &SkillSet::parse(""));
        assert!(report.matched.is_empty());
        assert_eq!(report.missing, ["python", "sql"]);
        assert_eq!(report.match_percentage, 0.0);
    }

    #[test]
    fn test_no_substring_matching() {
        // "machine learning" is required; knowing "machine" alone is not a
        // match — comparison is whole-token equality.
        let record = make_record(&["Machine Learning"]);
        let report = analyze_gap(&record, &SkillSet::parse("machine"));
        assert!(report.matched.is_empty());
        assert_eq!(report.missing, ["machine learning"]);
    }

    #[test]
    fn test_duplicate_required_skills_counted_once() {
        let record = make_record(&["Python", "python", " PYTHON "]);
        let report = analyze_gap(&record, &SkillSet::parse("python"));
        assert_eq!(report.matched, ["python"]);
        assert_eq!(report.match_percentage, 100.0);
    }

    #[test]
    fn test_output_preserves_display_order() {
        let record = make_record(&["Spark", "Python", "ETL"]);
        let report = analyze_gap(&record, &SkillSet::parse("etl, spark"));
        assert_eq!(report.matched, ["spark", "etl"]);
        assert_eq!(report.missing, ["python"]);
    }
}
