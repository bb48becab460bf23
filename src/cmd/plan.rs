use anyhow::Result;
use serde_json::json;

use fitcalc::core::periodization::{self, Objective};
use fitcalc::core::progression::{self, ProgressionStrategy};
use fitcalc::output::human;

use super::{Context, print_success};

pub fn run_periodize(weeks: u32, objective: &str, human_flag: bool) -> Result<()> {
    let objective: Objective = objective.parse()?;
    let plan = periodization::generate_periodization_phases(weeks, objective)?;
    if human_flag {
        println!("{}", human::format_periodization(&plan));
    } else {
        print_success("periodize", json!({ "plan": plan }))?;
    }
    Ok(())
}

pub fn run_progress(
    current: f64,
    target: f64,
    weeks: u32,
    strategy: &str,
    human_flag: bool,
) -> Result<()> {
    let ctx = Context::load()?;
    let strategy: ProgressionStrategy = strategy.parse()?;
    let plan = progression::generate_progression_weeks(
        ctx.mass_in(current),
        ctx.mass_in(target),
        weeks,
        strategy,
    )?;
    if human_flag {
        println!("{}", human::format_progression(&plan, ctx.units));
    } else {
        print_success("progress", json!({ "plan": plan }))?;
    }
    Ok(())
}
