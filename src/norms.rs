//! Population norms reference table.
//!
//! Static sample data, never sourced from the API. Rendered once at startup
//! and kept visually separate from fetched values.

use crate::demographics::{AgeGroup, AGE_GROUP_ORDER};

#[derive(Debug, Clone, Copy)]
pub struct PopulationNorm {
    pub age_group: AgeGroup,
    /// bpm
    pub heart_rate: &'static str,
    /// systolic mmHg
    pub blood_pressure: &'static str,
    /// breaths/min
    pub respiratory_rate: &'static str,
    /// degrees C
    pub temperature: &'static str,
    pub risk_multiplier: f64,
}

pub fn norm_for(age_group: AgeGroup) -> PopulationNorm {
    match age_group {
        AgeGroup::Neonate => PopulationNorm {
            age_group,
            heart_rate: "120-160",
            blood_pressure: "60-90",
            respiratory_rate: "30-60",
            temperature: "36.5-37.5",
            risk_multiplier: 3.5,
        },
        AgeGroup::Infant => PopulationNorm {
            age_group,
            heart_rate: "80-140",
            blood_pressure: "70-100",
            respiratory_rate: "20-40",
            temperature: "36.6-37.7",
            risk_multiplier: 2.8,
        },
        AgeGroup::Toddler => PopulationNorm {
            age_group,
            heart_rate: "70-120",
            blood_pressure: "80-110",
            respiratory_rate: "20-30",
            temperature: "36.7-37.8",
            risk_multiplier: 2.0,
        },
        AgeGroup::Preschool => PopulationNorm {
            age_group,
            heart_rate: "65-110",
            blood_pressure: "85-115",
            respiratory_rate: "20-30",
            temperature: "36.5-37.5",
            risk_multiplier: 1.5,
        },
        AgeGroup::SchoolAge => PopulationNorm {
            age_group,
            heart_rate: "60-100",
            blood_pressure: "90-120",
            respiratory_rate: "15-25",
            temperature: "36.5-37.5",
            risk_multiplier: 1.2,
        },
        AgeGroup::Adolescent => PopulationNorm {
            age_group,
            heart_rate: "55-100",
            blood_pressure: "95-130",
            respiratory_rate: "12-20",
            temperature: "36.5-37.5",
            risk_multiplier: 1.0,
        },
        AgeGroup::YoungAdult => PopulationNorm {
            age_group,
            heart_rate: "60-100",
            blood_pressure: "105-135",
            respiratory_rate: "12-20",
            temperature: "36.5-37.5",
            risk_multiplier: 1.0,
        },
        AgeGroup::MiddleAdult => PopulationNorm {
            age_group,
            heart_rate: "60-100",
            blood_pressure: "110-140",
            respiratory_rate: "12-20",
            temperature: "36.5-37.5",
            risk_multiplier: 1.3,
        },
        AgeGroup::Geriatric => PopulationNorm {
            age_group,
            heart_rate: "60-100",
            blood_pressure: "115-145",
            respiratory_rate: "12-25",
            temperature: "36.0-37.2",
            risk_multiplier: 2.5,
        },
    }
}

/// All nine norms in clinical order.
pub fn all_norms() -> Vec<PopulationNorm> {
    AGE_GROUP_ORDER.iter().map(|g| norm_for(*g)).collect()
}
