// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sb run <scenario>` - Run a scenario against a live queue

use crate::output::{self, OutputFormat};
use crate::scenario::{self, Scenario};
use anyhow::Result;
use clap::Args;
use sb_core::{TokioExecutor, TracedExecutor};
use std::path::PathBuf;

#[derive(Args)]
pub struct RunArgs {
    /// Scenario file (TOML)
    pub scenario: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    tracing::info!(
        scenario = %args.scenario.display(),
        steps = scenario.steps.len(),
        queue = %scenario.queue.name,
        "running scenario"
    );

    let executor = TracedExecutor::new(TokioExecutor::try_current()?, "listeners");
    let report = scenario::run(&scenario, executor).await;

    output::print(&report, args.format)?;
    Ok(())
}
