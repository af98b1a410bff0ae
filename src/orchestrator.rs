//! Sequences fetch and render on initial load and on a fixed interval.
//!
//! The independent data sets are fetched concurrently and each outcome is
//! applied in isolation, so one failing endpoint never suppresses the
//! others. Cycles are serialized: a tick that fires while a cycle is still
//! running is skipped.

use anyhow::Result;
use serde_json::Value;
use tokio::time::{interval, Duration, Interval, MissedTickBehavior};

use crate::client::{DashboardClient, FetchError};
use crate::logging::{json_log, log, obj, v_str, Level};
use crate::render::{
    render_age_groups, render_gender_comparison, render_insights, render_norms,
    render_overview, render_risk, DashboardView, NoticeKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// Refresh timer. Skipping missed ticks serializes cycles: a cycle that
/// outlives the interval causes the next tick to be dropped instead of
/// firing a burst of overlapping cycles.
pub fn refresh_ticker(refresh_secs: u64) -> Interval {
    let mut ticker = interval(Duration::from_secs(refresh_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

pub struct Orchestrator {
    client: DashboardClient,
    pub view: DashboardView,
    phase: Phase,
    refresh_secs: u64,
}

fn log_fetch_failure(step: &str, err: &FetchError) {
    log(
        Level::Error,
        "fetch",
        obj(&[("step", v_str(step)), ("error", v_str(&err.to_string()))]),
    );
}

impl Orchestrator {
    pub fn new(client: DashboardClient, refresh_secs: u64) -> Self {
        Self {
            client,
            view: DashboardView::new(),
            phase: Phase::Idle,
            refresh_secs,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Full load: all four endpoints plus the static insight and norms
    /// panels. Returns true only when every fetch succeeded.
    pub async fn initial_load(&mut self) -> bool {
        self.phase = Phase::Loading;

        let (overview, gender, age, risk) = tokio::join!(
            self.client.fetch_dashboard(),
            self.client.fetch_gender_analysis(),
            self.client.fetch_age_group_trends(),
            self.client.fetch_population_risk(),
        );

        let mut failures = 0u32;
        match overview {
            Ok(data) => render_overview(&mut self.view, &data.summary),
            Err(err) => {
                log_fetch_failure("overview", &err);
                failures += 1;
            }
        }
        match gender {
            Ok(data) => render_gender_comparison(&mut self.view, &data),
            Err(err) => {
                log_fetch_failure("gender_analysis", &err);
                failures += 1;
            }
        }
        match age {
            Ok(data) => render_age_groups(&mut self.view, &data),
            Err(err) => {
                log_fetch_failure("age_group_trends", &err);
                failures += 1;
            }
        }
        match risk {
            Ok(data) => render_risk(&mut self.view, &data),
            Err(err) => {
                log_fetch_failure("population_risk", &err);
                failures += 1;
            }
        }

        render_insights(&mut self.view);
        render_norms(&mut self.view);

        if failures > 0 {
            self.view
                .set_notice(NoticeKind::Error, "Failed to load some demographic data");
        }

        self.phase = Phase::Idle;
        failures == 0
    }

    /// Reduced subset for the periodic refresh: overview, gender analysis,
    /// age group trends. The static panels are not refreshed.
    pub async fn refresh_cycle(&mut self) -> bool {
        self.phase = Phase::Loading;
        // A notice describes the current cycle only; never carry a stale
        // success banner into a cycle that may fail.
        self.view.notice = None;

        let (overview, gender, age) = tokio::join!(
            self.client.fetch_dashboard(),
            self.client.fetch_gender_analysis(),
            self.client.fetch_age_group_trends(),
        );

        let mut failures = 0u32;
        match overview {
            Ok(data) => render_overview(&mut self.view, &data.summary),
            Err(err) => {
                log_fetch_failure("overview", &err);
                failures += 1;
            }
        }
        match gender {
            Ok(data) => render_gender_comparison(&mut self.view, &data),
            Err(err) => {
                log_fetch_failure("gender_analysis", &err);
                failures += 1;
            }
        }
        match age {
            Ok(data) => render_age_groups(&mut self.view, &data),
            Err(err) => {
                log_fetch_failure("age_group_trends", &err);
                failures += 1;
            }
        }

        // Refresh failures are logged only; a notice is shown just for a
        // fully successful cycle.
        if failures == 0 {
            self.view.set_notice(NoticeKind::Success, "Dashboard refreshed");
        }

        self.phase = Phase::Idle;
        failures == 0
    }

    /// Initial load, then refresh every `refresh_secs`. A cycle failure
    /// never cancels the timer.
    pub async fn run(&mut self) -> Result<()> {
        let ok = self.initial_load().await;
        json_log(
            "orchestrator",
            obj(&[("event", v_str("initial_load")), ("ok", Value::Bool(ok))]),
        );
        self.view.draw();

        let mut ticker = refresh_ticker(self.refresh_secs);
        ticker.tick().await; // first tick resolves immediately

        loop {
            ticker.tick().await;
            let ok = self.refresh_cycle().await;
            json_log(
                "orchestrator",
                obj(&[("event", v_str("refresh_cycle")), ("ok", Value::Bool(ok))]),
            );
            self.view.draw();
        }
    }
}
