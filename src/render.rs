//! Projection of fetched data into named display panels.
//!
//! Each render function owns one surface and replaces the panel's content
//! wholesale, so re-rendering with the same input is idempotent. Missing
//! numeric fields render as "N/A" instead of failing.

use std::collections::BTreeMap;

use crate::demographics::{average_age_estimate, AgeGroup, RiskTier, AGE_GROUP_ORDER};
use crate::insights::INSIGHT_BUCKETS;
use crate::model::{AgeGroupTrends, DashboardSummary, GenderAnalysis, PopulationRisk};
use crate::norms::all_norms;

pub const PLACEHOLDER: &str = "N/A";

const BAR_WIDTH: usize = 24;

#[derive(Debug, Default)]
pub struct Panel {
    pub title: &'static str,
    lines: Vec<String>,
}

impl Panel {
    fn new(title: &'static str) -> Self {
        Self { title, lines: Vec::new() }
    }

    /// Replaces the whole content; never appends to what is already there.
    fn set(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Display state owned by the orchestrator and passed to render functions.
#[derive(Debug)]
pub struct DashboardView {
    pub overview: Panel,
    pub gender: Panel,
    pub age_groups: Panel,
    pub risk: Panel,
    pub insights: Panel,
    pub norms: Panel,
    pub notice: Option<Notice>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            overview: Panel::new("Overview"),
            gender: Panel::new("Gender Comparison"),
            age_groups: Panel::new("Age Groups"),
            risk: Panel::new("Risk Stratification"),
            insights: Panel::new("Clinical Insights"),
            norms: Panel::new("Population Norms"),
            notice: None,
        }
    }

    pub fn set_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice { kind, message: message.into() });
    }

    pub fn draw(&self) {
        if let Some(notice) = &self.notice {
            let tag = match notice.kind {
                NoticeKind::Success => "ok",
                NoticeKind::Error => "error",
            };
            println!("[{}] {}", tag, notice.message);
            println!();
        }
        for panel in [
            &self.overview,
            &self.gender,
            &self.age_groups,
            &self.risk,
            &self.insights,
            &self.norms,
        ] {
            println!("== {} ==", panel.title);
            for line in panel.lines() {
                println!("{}", line);
            }
            println!();
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => PLACEHOLDER.to_string(),
    }
}

fn fmt_count(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

fn bar(count: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}

/// Looks a bucket up by short or long label.
fn bucket_count(counts: &BTreeMap<String, u64>, group: AgeGroup) -> u64 {
    counts
        .get(group.label())
        .or_else(|| counts.get(group.long_label()))
        .copied()
        .unwrap_or(0)
}

pub fn render_overview(view: &mut DashboardView, summary: &DashboardSummary) {
    let mut lines = Vec::new();
    lines.push(format!("Total patients: {}", fmt_count(summary.total_patients)));
    lines.push(format!(
        "Estimated average age: {}",
        average_age_estimate(&summary.age_group_distribution)
    ));
    let gender = &summary.gender_distribution;
    lines.push(format!(
        "Gender: male {} / female {} / other {}",
        gender.get("male").copied().unwrap_or(0),
        gender.get("female").copied().unwrap_or(0),
        gender.get("other").copied().unwrap_or(0),
    ));
    view.overview.set(lines);
}

pub fn render_gender_comparison(view: &mut DashboardView, analysis: &GenderAnalysis) {
    let mut lines = Vec::new();
    if analysis.gender_comparisons.is_empty() {
        lines.push("no comparison data".to_string());
    }
    for (metric, cmp) in &analysis.gender_comparisons {
        let marker = if cmp.significant() { " *" } else { "" };
        lines.push(format!(
            "{:<18} M {:>7}  F {:>7}  p={}{}",
            metric,
            fmt_opt(cmp.male_mean, 1),
            fmt_opt(cmp.female_mean, 1),
            fmt_opt(cmp.p_value, 3),
            marker,
        ));
    }
    view.gender.set(lines);
}

pub fn render_age_groups(view: &mut DashboardView, trends: &AgeGroupTrends) {
    let max = AGE_GROUP_ORDER
        .iter()
        .map(|g| bucket_count(&trends.age_group_counts, *g))
        .max()
        .unwrap_or(0);

    let hr_means = trends.age_group_means.get("heart_rate");

    let mut lines = Vec::new();
    for group in AGE_GROUP_ORDER {
        let count = bucket_count(&trends.age_group_counts, group);
        let hr = hr_means
            .and_then(|by_group| {
                by_group
                    .get(group.label())
                    .or_else(|| by_group.get(group.long_label()))
            })
            .and_then(|stat| stat.mean);
        lines.push(format!(
            "{:<13} {:>5}  {:<24} HR {}",
            group.label(),
            count,
            bar(count, max),
            fmt_opt(hr, 1),
        ));
    }
    view.age_groups.set(lines);
}

/// Fixed reference cohorts shown alongside fetched risk entries. Kept on a
/// separate, explicitly labeled path so sample data is never mistaken for
/// live clinical data.
pub fn sample_cohorts() -> &'static [(&'static str, f64)] {
    &[
        ("Geriatric male, multiple comorbidities", 6.8),
        ("Neonate, premature", 5.9),
        ("Middle adult male, diabetic", 3.4),
        ("Young adult female", 1.2),
    ]
}

pub fn render_risk(view: &mut DashboardView, risk: &PopulationRisk) {
    let mut tiers: [Vec<String>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    let mut unscored = Vec::new();

    for entry in &risk.high_risk_demographics {
        match entry.mean_risk {
            Some(score) => {
                let idx = match RiskTier::from_score(score) {
                    RiskTier::High => 0,
                    RiskTier::Medium => 1,
                    RiskTier::Low => 2,
                };
                tiers[idx].push(format!("  {} ({:.1})", entry.demographic, score));
            }
            None => unscored.push(format!("  {} ({})", entry.demographic, PLACEHOLDER)),
        }
    }

    let mut lines = Vec::new();
    for (title, entries) in [
        ("High risk:", &tiers[0]),
        ("Medium risk:", &tiers[1]),
        ("Low risk:", &tiers[2]),
    ] {
        lines.push(title.to_string());
        if entries.is_empty() {
            lines.push("  none".to_string());
        } else {
            lines.extend(entries.iter().cloned());
        }
    }
    if !unscored.is_empty() {
        lines.push("Unscored:".to_string());
        lines.extend(unscored);
    }

    lines.push("Reference samples (not fetched):".to_string());
    for (label, score) in sample_cohorts() {
        lines.push(format!(
            "  {} ({:.1}, {}) [sample]",
            label,
            score,
            RiskTier::from_score(*score).label()
        ));
    }
    view.risk.set(lines);
}

pub fn render_insights(view: &mut DashboardView) {
    let mut lines = Vec::new();
    for bucket in INSIGHT_BUCKETS {
        lines.push(format!("{}:", bucket.title()));
        for advisory in bucket.advisories() {
            lines.push(format!("  - {}", advisory));
        }
    }
    view.insights.set(lines);
}

pub fn render_norms(view: &mut DashboardView) {
    let mut lines = Vec::new();
    lines.push(format!(
        "{:<13} {:>8} {:>8} {:>6} {:>10} {:>5}",
        "Group", "HR", "SysBP", "RR", "Temp", "Risk"
    ));
    for norm in all_norms() {
        lines.push(format!(
            "{:<13} {:>8} {:>8} {:>6} {:>10} {:>4.1}x",
            norm.age_group.label(),
            norm.heart_rate,
            norm.blood_pressure,
            norm.respiratory_rate,
            norm.temperature,
            norm.risk_multiplier,
        ));
    }
    lines.push("(static reference data)".to_string());
    view.norms.set(lines);
}
