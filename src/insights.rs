//! Static clinical advisories per demographic bucket. No parameters, no
//! failure modes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightBucket {
    Female,
    Male,
    Geriatric,
    Pediatric,
}

pub const INSIGHT_BUCKETS: [InsightBucket; 4] = [
    InsightBucket::Female,
    InsightBucket::Male,
    InsightBucket::Geriatric,
    InsightBucket::Pediatric,
];

impl InsightBucket {
    pub fn title(&self) -> &'static str {
        match self {
            InsightBucket::Female => "Female patients",
            InsightBucket::Male => "Male patients",
            InsightBucket::Geriatric => "Geriatric patients",
            InsightBucket::Pediatric => "Pediatric patients",
        }
    }

    pub fn advisories(&self) -> &'static [&'static str] {
        match self {
            InsightBucket::Female => &[
                "Consider pregnancy status and gynecological sources of infection",
                "Higher autoimmune disease prevalence may complicate diagnosis",
                "Slower drug clearance may require adjusted medication dosing",
            ],
            InsightBucket::Male => &[
                "Higher baseline mortality risk from sepsis",
                "Consider prostate and urinary sources in older males",
                "Testosterone has an immunosuppressive effect on infection response",
            ],
            InsightBucket::Geriatric => &[
                "Atypical presentation common: watch for delirium, falls, or functional decline",
                "Lower fever threshold in elderly (>=37.8 C may be significant)",
                "High comorbidity burden elevates baseline sepsis risk",
            ],
            InsightBucket::Pediatric => &[
                "Neonate: sepsis may present with temperature instability, feeding difficulties, or lethargy",
                "Consider maternal risk factors and early-onset vs late-onset sepsis",
                "Immature immune system warrants a lower threshold for antibiotic initiation",
            ],
        }
    }
}
