//! Print the analysis plan for a granularity at the current instant.
//!
//! Usage: `watchtower-plan <granularity> [intervals]`

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;

use watchtower_core::{Granularity, LookbackIntervals, calendar};
use watchtower_scheduling::{AnalysisWindow, look_forward_until};
use watchtower_store::{AccessorType, BackendSettings, params_for};

#[derive(Serialize)]
struct Plan {
    granularity: Granularity,
    period: &'static str,
    now: DateTime<Utc>,
    interval_end: DateTime<Utc>,
    next_boundary: DateTime<Utc>,
    window: AnalysisWindow,
    look_forward_until: DateTime<Utc>,
}

fn main() -> anyhow::Result<()> {
    watchtower_observability::init();

    let mut args = std::env::args().skip(1);
    let Some(token) = args.next() else {
        bail!(
            "usage: watchtower-plan <granularity> [intervals]; granularity is one of {}",
            Granularity::all_names().join(", ")
        );
    };
    let granularity: Granularity = token.parse()?;
    let intervals = args
        .next()
        .map(|raw| raw.parse::<u32>())
        .transpose()
        .context("intervals must be a non-negative integer")?;

    let lookback = LookbackIntervals::from_env()?;
    let settings = BackendSettings::from_env()?;
    for accessor in AccessorType::ALL {
        let params = params_for(accessor, &settings);
        tracing::info!(
            accessor = %accessor,
            ordinal = accessor.ordinal(),
            params = params.len(),
            "store layout"
        );
    }

    let now = Utc::now();
    let interval_end = calendar::from_epoch_minutes(granularity.interval_end_minutes(now));
    let plan = Plan {
        granularity,
        period: granularity.period_token(),
        now,
        interval_end,
        next_boundary: calendar::from_epoch_minutes(granularity.next_boundary_minutes(now)),
        window: AnalysisWindow::ending_at(granularity, interval_end, intervals, &lookback)?,
        look_forward_until: look_forward_until(granularity, now),
    };
    tracing::info!(%granularity, start = %plan.window.start, "plan computed");
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
