// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sb check <scenario>` - Validate a scenario without running it

use crate::scenario::Scenario;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Scenario file (TOML)
    pub scenario: PathBuf,
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    println!(
        "ok: {} steps, {} listeners",
        scenario.steps.len(),
        scenario.listeners().count()
    );
    Ok(())
}
