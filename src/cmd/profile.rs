use anyhow::Result;
use serde_json::json;

use fitcalc::core::units;
use fitcalc::models::profile::ProfileUpdate;
use fitcalc::models::settings::UnitSystem;
use fitcalc::output::human;

use super::{Context, print_success};
use crate::cli::BodyArgs;

pub fn run_show(human_flag: bool) -> Result<()> {
    let ctx = Context::load()?;
    let profile = ctx.store.user_profile()?;

    if human_flag {
        match &profile {
            Some(p) => println!("{}", human::format_profile(p)),
            None => println!("No profile saved. Run `fitcalc profile set` or `fitcalc init`."),
        }
    } else {
        print_success("profile", json!({ "profile": profile }))?;
    }
    Ok(())
}

pub struct ProfileArgs<'a> {
    pub body: &'a BodyArgs,
    pub goal: Option<&'a str>,
    pub target_weight: Option<f64>,
    pub bmr_method: Option<&'a str>,
    pub meals: Option<u32>,
    pub climate: Option<&'a str>,
    pub units: Option<&'a str>,
}

impl ProfileArgs<'_> {
    fn touches_body(&self) -> bool {
        let b = self.body;
        b.age.is_some()
            || b.gender.is_some()
            || b.weight.is_some()
            || b.height.is_some()
            || b.activity.is_some()
            || b.body_fat.is_some()
    }
}

pub fn run_set(args: ProfileArgs<'_>, human_flag: bool) -> Result<()> {
    let mut ctx = Context::load()?;
    let current = ctx.profile()?;
    let mut update = ProfileUpdate::default();

    if let Some(u) = args.units {
        let system: UnitSystem = u.parse()?;
        let mut settings = ctx.store.settings()?;
        settings.units = system;
        ctx.store.save_settings(&settings)?;
        ctx.units = system;
        update.settings = Some(settings);
    }

    if args.touches_body() {
        update.demographics = Some(ctx.demographics(current.demographics.clone(), args.body)?);
    }

    if args.goal.is_some() || args.target_weight.is_some() {
        let mut goals = current.goals.clone();
        if let Some(g) = args.goal {
            goals.objective = g.parse()?;
        }
        if let Some(t) = args.target_weight {
            goals.target_weight = Some(ctx.mass_in(t));
        }
        update.goals = Some(goals);
    }

    if args.bmr_method.is_some() || args.meals.is_some() || args.climate.is_some() {
        let mut prefs = current.preferences.clone();
        if let Some(m) = args.bmr_method {
            prefs.bmr_method = m.parse()?;
        }
        if let Some(n) = args.meals {
            prefs.meals_per_day = n;
        }
        if let Some(c) = args.climate {
            prefs.climate = c.parse()?;
        }
        update.preferences = Some(prefs);
    }

    if update.demographics.is_none()
        && update.goals.is_none()
        && update.preferences.is_none()
        && update.settings.is_none()
    {
        anyhow::bail!("nothing to update: pass at least one profile flag");
    }

    let profile = ctx.store.save_user_profile(update)?;
    if human_flag {
        let (w, unit) = units::to_display(
            profile.demographics.weight,
            units::Quantity::Mass,
            ctx.units,
        );
        println!("Profile saved ({} {}).", w, unit);
    } else {
        print_success("profile", json!({ "profile": profile }))?;
    }
    Ok(())
}
