//! Static demographic tables: the nine clinical age buckets, their
//! representative ages, and risk tier thresholds.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeGroup {
    Neonate,
    Infant,
    Toddler,
    Preschool,
    SchoolAge,
    Adolescent,
    YoungAdult,
    MiddleAdult,
    Geriatric,
}

/// Clinical ordering, youngest first.
pub const AGE_GROUP_ORDER: [AgeGroup; 9] = [
    AgeGroup::Neonate,
    AgeGroup::Infant,
    AgeGroup::Toddler,
    AgeGroup::Preschool,
    AgeGroup::SchoolAge,
    AgeGroup::Adolescent,
    AgeGroup::YoungAdult,
    AgeGroup::MiddleAdult,
    AgeGroup::Geriatric,
];

impl AgeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Neonate => "Neonate",
            AgeGroup::Infant => "Infant",
            AgeGroup::Toddler => "Toddler",
            AgeGroup::Preschool => "Preschool",
            AgeGroup::SchoolAge => "School Age",
            AgeGroup::Adolescent => "Adolescent",
            AgeGroup::YoungAdult => "Young Adult",
            AgeGroup::MiddleAdult => "Middle Adult",
            AgeGroup::Geriatric => "Geriatric",
        }
    }

    pub fn long_label(&self) -> &'static str {
        match self {
            AgeGroup::Neonate => "Neonate (0-28 days)",
            AgeGroup::Infant => "Infant (29 days - 1 year)",
            AgeGroup::Toddler => "Toddler (1-3 years)",
            AgeGroup::Preschool => "Preschool (3-5 years)",
            AgeGroup::SchoolAge => "School Age (5-12 years)",
            AgeGroup::Adolescent => "Adolescent (12-18 years)",
            AgeGroup::YoungAdult => "Young Adult (18-40 years)",
            AgeGroup::MiddleAdult => "Middle Adult (40-65 years)",
            AgeGroup::Geriatric => "Geriatric (>65 years)",
        }
    }

    /// Midpoint age in years, used only for the approximate average-age
    /// display. Neonate is 14 days.
    pub fn representative_age(&self) -> f64 {
        match self {
            AgeGroup::Neonate => 0.04,
            AgeGroup::Infant => 0.5,
            AgeGroup::Toddler => 2.0,
            AgeGroup::Preschool => 4.0,
            AgeGroup::SchoolAge => 8.5,
            AgeGroup::Adolescent => 15.0,
            AgeGroup::YoungAdult => 29.0,
            AgeGroup::MiddleAdult => 52.0,
            AgeGroup::Geriatric => 75.0,
        }
    }

    /// Matches either the short label or the long parenthesized form the
    /// API serves.
    pub fn from_label(label: &str) -> Option<AgeGroup> {
        AGE_GROUP_ORDER
            .iter()
            .copied()
            .find(|g| label == g.label() || label == g.long_label())
    }
}

/// Bucket an age in years. 28 days is 0.0767 years.
pub fn age_group_for(age_years: f64) -> AgeGroup {
    if age_years < 0.0767 {
        AgeGroup::Neonate
    } else if age_years < 1.0 {
        AgeGroup::Infant
    } else if age_years < 3.0 {
        AgeGroup::Toddler
    } else if age_years < 5.0 {
        AgeGroup::Preschool
    } else if age_years < 12.0 {
        AgeGroup::SchoolAge
    } else if age_years < 18.0 {
        AgeGroup::Adolescent
    } else if age_years < 40.0 {
        AgeGroup::YoungAdult
    } else if age_years < 65.0 {
        AgeGroup::MiddleAdult
    } else {
        AgeGroup::Geriatric
    }
}

/// Fallback representative age for labels not in the bucket table.
const DEFAULT_REPRESENTATIVE_AGE: f64 = 40.0;

/// Weighted mean age from a bucketed count distribution, rounded to the
/// nearest year. Returns 0 for an empty distribution.
pub fn average_age_estimate(distribution: &BTreeMap<String, u64>) -> u32 {
    let total: u64 = distribution.values().sum();
    if total == 0 {
        return 0;
    }
    let weighted: f64 = distribution
        .iter()
        .map(|(label, count)| {
            let age = AgeGroup::from_label(label)
                .map(|g| g.representative_age())
                .unwrap_or(DEFAULT_REPRESENTATIVE_AGE);
            *count as f64 * age
        })
        .sum();
    (weighted / total as f64).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Score thresholds: < 2 low, < 5 medium, >= 5 high.
    pub fn from_score(score: f64) -> RiskTier {
        if score < 2.0 {
            RiskTier::Low
        } else if score < 5.0 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}
