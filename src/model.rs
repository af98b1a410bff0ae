//! Response types for the demographic analytics API.
//!
//! Every numeric field is optional: a missing or unknown value renders as
//! a placeholder rather than failing the whole payload.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub summary: DashboardSummary,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_patients: Option<u64>,
    #[serde(default)]
    pub age_group_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub gender_distribution: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenderAnalysis {
    #[serde(default)]
    pub gender_comparisons: BTreeMap<String, GenderComparison>,
}

/// Per-metric male/female cohort means with a t-test p-value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenderComparison {
    #[serde(default)]
    pub male_mean: Option<f64>,
    #[serde(default)]
    pub female_mean: Option<f64>,
    #[serde(default)]
    pub p_value: Option<f64>,
}

impl GenderComparison {
    /// Conventional 5% significance threshold, display only.
    pub fn significant(&self) -> bool {
        self.p_value.map(|p| p < 0.05).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgeGroupTrends {
    #[serde(default)]
    pub age_group_counts: BTreeMap<String, u64>,
    /// metric -> age group -> stats
    #[serde(default)]
    pub age_group_means: BTreeMap<String, BTreeMap<String, MetricStat>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricStat {
    #[serde(default)]
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopulationRisk {
    #[serde(default)]
    pub high_risk_demographics: Vec<RiskDemographicEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskDemographicEntry {
    #[serde(default)]
    pub demographic: String,
    #[serde(default)]
    pub mean_risk: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tolerates_missing_fields() {
        let parsed: DashboardResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.summary.total_patients.is_none());
        assert!(parsed.summary.age_group_distribution.is_empty());
    }

    #[test]
    fn comparison_without_p_value_is_not_significant() {
        let parsed: GenderComparison =
            serde_json::from_str(r#"{"male_mean": 82.0, "female_mean": 79.5}"#).unwrap();
        assert!(!parsed.significant());
        assert_eq!(parsed.male_mean, Some(82.0));
    }

    #[test]
    fn significance_threshold() {
        let sig = GenderComparison { p_value: Some(0.03), ..Default::default() };
        let not_sig = GenderComparison { p_value: Some(0.05), ..Default::default() };
        assert!(sig.significant());
        assert!(!not_sig.significant());
    }

    #[test]
    fn risk_entries_parse_with_null_scores() {
        let parsed: PopulationRisk = serde_json::from_str(
            r#"{"high_risk_demographics": [{"demographic": "Geriatric M", "mean_risk": null}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.high_risk_demographics.len(), 1);
        assert!(parsed.high_risk_demographics[0].mean_risk.is_none());
    }
}
