use anyhow::Result;
use serde_json::json;

use fitcalc::core::balance::{self, Experience};
use fitcalc::core::body::{self, Circumferences};
use fitcalc::core::energy::{self, BmrMethod};
use fitcalc::core::error::{self as validation, ValidationError};
use fitcalc::core::glycemic::{self, FoodItem};
use fitcalc::core::hydration::{self, Climate};
use fitcalc::core::macros::{self, GoalProfile, Macro, MacroRatios};
use fitcalc::core::protein::{self, ProteinObjective};
use fitcalc::core::strength;
use fitcalc::core::volume::{self, SetGroup, Tempo};
use fitcalc::models::profile::{ActivityLevel, Demographics};
use fitcalc::output::human;

use super::{Context, print_success};
use crate::cli::BodyArgs;

pub fn run_bmr(body: &BodyArgs, method: Option<&str>, human_flag: bool) -> Result<()> {
    let ctx = Context::load()?;
    let stored = ctx.store.user_profile()?;

    let method: BmrMethod = match method {
        Some(m) => m.parse()?,
        None => stored
            .as_ref()
            .map(|p| p.preferences.bmr_method)
            .unwrap_or(ctx.config.defaults.bmr_method),
    };
    let base = stored.map(|p| p.demographics).unwrap_or_default();
    let mut d = ctx.demographics(base, body)?;
    if d.body_fat.is_none() {
        d.body_fat = ctx
            .store
            .tracking_data()?
            .latest_body_fat()
            .map(|e| e.percent);
    }

    let result = energy::compute_bmr(&d, method)?;
    if human_flag {
        println!("{}", human::format_bmr(&result));
    } else {
        print_success("bmr", json!({ "demographics": d, "result": result }))?;
    }
    Ok(())
}

pub struct MacroArgs<'a> {
    pub calories: Option<f64>,
    pub goal: Option<&'a str>,
    pub protein: Option<u32>,
    pub fat: Option<u32>,
    pub carb: Option<u32>,
}

pub fn run_macros(args: MacroArgs<'_>, human_flag: bool) -> Result<()> {
    let ctx = Context::load()?;
    let profile = ctx.profile()?;

    let (goal, base) = match args.goal {
        Some(g) => {
            let goal: GoalProfile = g.parse()?;
            (goal, goal.preset_ratios())
        }
        None => {
            let goal = profile.goals.objective;
            let ratios = profile
                .preferences
                .macro_ratios
                .unwrap_or_else(|| goal.preset_ratios());
            (goal, ratios)
        }
    };
    let ratios = resolve_ratios(base, args.protein, args.fat, args.carb)?;

    let calories = match args.calories {
        Some(c) => c,
        None => {
            let bmr = energy::compute_bmr(&profile.demographics, profile.preferences.bmr_method)?;
            bmr.tdee * goal.calorie_factor()
        }
    };

    let result = macros::compute_macros(calories, ratios)?;
    if human_flag {
        println!("{}", human::format_macros(&result));
    } else {
        print_success("macros", json!({ "goal": goal, "result": result }))?;
    }
    Ok(())
}

/// One pinned macro rebalances the other two; two pinned fix the third;
/// all three must add up to 100.
fn resolve_ratios(
    base: MacroRatios,
    protein: Option<u32>,
    fat: Option<u32>,
    carb: Option<u32>,
) -> Result<MacroRatios> {
    for (field, pct) in [("protein", protein), ("fat", fat), ("carb", carb)] {
        if let Some(p) = pct {
            validation::within(field, p as f64, 0.0, 100.0)?;
        }
    }

    let ratios = match (protein, fat, carb) {
        (None, None, None) => base,
        (Some(p), Some(f), Some(c)) => MacroRatios::new(p, f, c)?,
        (Some(p), None, None) => base.rebalance(Macro::Protein, p),
        (None, Some(f), None) => base.rebalance(Macro::Fat, f),
        (None, None, Some(c)) => base.rebalance(Macro::Carb, c),
        (p, f, c) => {
            let given = p.unwrap_or(0) + f.unwrap_or(0) + c.unwrap_or(0);
            let rest = 100u32
                .checked_sub(given)
                .ok_or(ValidationError::InvalidRatios { sum: given })?;
            MacroRatios::new(p.unwrap_or(rest), f.unwrap_or(rest), c.unwrap_or(rest))?
        }
    };
    Ok(ratios)
}

pub fn run_protein(
    objective: &str,
    weight: Option<f64>,
    meals: Option<u32>,
    human_flag: bool,
) -> Result<()> {
    let ctx = Context::load()?;
    let profile = ctx.profile()?;
    let objective: ProteinObjective = objective.parse()?;
    let weight = weight
        .map(|w| ctx.mass_in(w))
        .unwrap_or(profile.demographics.weight);
    let meals = meals.unwrap_or(profile.preferences.meals_per_day);

    let result = protein::compute_protein_needs(weight, objective, meals)?;
    if human_flag {
        println!("{}", human::format_protein(&result));
    } else {
        print_success("protein", json!({ "weight": weight, "result": result }))?;
    }
    Ok(())
}

pub fn run_hydration(
    weight: Option<f64>,
    activity: Option<&str>,
    climate: Option<&str>,
    exercise_minutes: u32,
    human_flag: bool,
) -> Result<()> {
    let ctx = Context::load()?;
    let stored = ctx.store.user_profile()?;

    let weight = match weight {
        Some(w) => ctx.mass_in(w),
        None => stored
            .as_ref()
            .map(|p| p.demographics.weight)
            .unwrap_or_else(|| Demographics::default().weight),
    };
    let activity: ActivityLevel = match activity {
        Some(a) => a.parse()?,
        None => stored
            .as_ref()
            .map(|p| p.demographics.activity_level)
            .unwrap_or(ActivityLevel::Moderate),
    };
    let climate: Climate = match climate {
        Some(c) => c.parse()?,
        None => stored
            .as_ref()
            .map(|p| p.preferences.climate)
            .unwrap_or(ctx.config.defaults.climate),
    };

    let result = hydration::compute_hydration_needs(weight, activity, climate, exercise_minutes)?;
    if human_flag {
        println!("{}", human::format_hydration(&result, ctx.units));
    } else {
        print_success("hydration", json!({ "climate": climate, "result": result }))?;
    }
    Ok(())
}

pub fn run_glycemic(
    gi: Option<f64>,
    carbs: Option<f64>,
    fiber: f64,
    meal: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    if let Some(meal_json) = meal {
        let items: Vec<FoodItem> = serde_json::from_str(meal_json)?;
        let result = glycemic::meal_glycemic_load(&items)?;
        if human_flag {
            println!("{}", human::format_meal_glycemic(&result));
        } else {
            print_success("glycemic", json!({ "meal": result }))?;
        }
        return Ok(());
    }

    let (Some(gi), Some(carbs)) = (gi, carbs) else {
        anyhow::bail!("glycemic index and carbs are required without --meal");
    };
    let result = glycemic::compute_glycemic_load(gi, carbs, fiber)?;
    if human_flag {
        println!("{}", human::format_glycemic(&result));
    } else {
        print_success("glycemic", json!({ "result": result }))?;
    }
    Ok(())
}

pub fn run_one_rm(weight: f64, reps: u32, human_flag: bool) -> Result<()> {
    let ctx = Context::load()?;
    let result = strength::compute_one_rep_max(ctx.mass_in(weight), reps)?;
    if human_flag {
        println!("{}", human::format_one_rep_max(&result, ctx.units));
    } else {
        print_success("one-rm", json!({ "result": result }))?;
    }
    Ok(())
}

pub fn run_volume(
    sets: &[String],
    one_rm: Option<f64>,
    tempo: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    let ctx = Context::load()?;
    let groups = sets
        .iter()
        .map(|s| {
            let mut g: SetGroup = s.parse()?;
            g.weight = ctx.mass_in(g.weight);
            Ok(g)
        })
        .collect::<Result<Vec<_>>>()?;
    let tempo = tempo.map(str::parse::<Tempo>).transpose()?;
    let one_rm = one_rm.map(|w| ctx.mass_in(w));

    let summary = volume::summarize_volume(&groups, one_rm, tempo)?;
    if human_flag {
        println!("{}", human::format_volume(&summary, ctx.units));
    } else {
        print_success("volume", json!({ "result": summary }))?;
    }
    Ok(())
}

pub fn run_body(
    body_args: &BodyArgs,
    waist: Option<f64>,
    neck: Option<f64>,
    hip: Option<f64>,
    human_flag: bool,
) -> Result<()> {
    let ctx = Context::load()?;
    let d = ctx.demographics(ctx.profile()?.demographics, body_args)?;

    let bmi = body::compute_bmi(d.weight, d.height)?;
    let body_fat = match (waist, neck) {
        (Some(w), Some(n)) => {
            let c = Circumferences {
                waist: ctx.length_in(w),
                neck: ctx.length_in(n),
                hip: hip.map(|h| ctx.length_in(h)),
            };
            Some(body::compute_body_fat(d.gender, d.weight, d.height, c)?)
        }
        (None, None) => None,
        _ => anyhow::bail!("body fat needs both --waist and --neck"),
    };

    if human_flag {
        println!("{}", human::format_bmi(&bmi, ctx.units));
        if let Some(bf) = &body_fat {
            println!("{}", human::format_body_fat(bf, ctx.units));
        }
    } else {
        print_success("body", json!({ "bmi": bmi, "body_fat": body_fat }))?;
    }
    Ok(())
}

pub fn run_balance(intake: f64, weeks: u32, experience: &str, human_flag: bool) -> Result<()> {
    let ctx = Context::load()?;
    let profile = ctx.profile()?;
    let experience: Experience = experience.parse()?;

    let tdee = energy::compute_bmr(&profile.demographics, profile.preferences.bmr_method)?.tdee;
    let start = ctx
        .store
        .tracking_data()?
        .latest_weight()
        .map(|w| w.weight)
        .unwrap_or(profile.demographics.weight);

    let projection = balance::project_weight(start, tdee, intake, weeks, experience)?;
    if human_flag {
        println!("{}", human::format_balance(&projection, ctx.units));
    } else {
        print_success(
            "balance",
            json!({ "start_weight": start, "tdee": tdee, "result": projection }),
        )?;
    }
    Ok(())
}
