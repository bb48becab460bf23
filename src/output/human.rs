use colored::Colorize;
use comfy_table::Table;

use crate::core::balance::BalanceProjection;
use crate::core::body::{BmiResult, BodyFatResult};
use crate::core::energy::BmrResult;
use crate::core::glycemic::{GlycemicResult, MealGlycemicResult};
use crate::core::hydration::HydrationResult;
use crate::core::macros::MacroResult;
use crate::core::periodization::PeriodizationPlan;
use crate::core::progression::ProgressionPlan;
use crate::core::protein::ProteinResult;
use crate::core::strength::OneRepMaxResult;
use crate::core::units::{self, Quantity};
use crate::core::volume::VolumeSummary;
use crate::models::profile::UserProfile;
use crate::models::settings::UnitSystem;
use crate::models::tracking::TrackingData;

fn mass(kg: f64, u: UnitSystem) -> String {
    let (v, unit) = units::to_display(kg, Quantity::Mass, u);
    format!("{} {}", v, unit)
}

pub fn format_bmr(r: &BmrResult) -> String {
    format!(
        "BMR ({}): {} kcal\nTDEE ({}): {} kcal\nMaintenance: {} kcal | Bulk (+15%): {} kcal | Cut (-20%): {} kcal",
        r.method, r.bmr, r.activity_level, r.tdee, r.maintenance, r.bulk, r.cut
    )
}

pub fn format_macros(r: &MacroResult) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Macro", "%", "Grams", "kcal"]);
    table.add_row(vec![
        "Protein".to_string(),
        r.ratios.protein.to_string(),
        r.protein_g.to_string(),
        r.protein_kcal.to_string(),
    ]);
    table.add_row(vec![
        "Fat".to_string(),
        r.ratios.fat.to_string(),
        r.fat_g.to_string(),
        r.fat_kcal.to_string(),
    ]);
    table.add_row(vec![
        "Carbs".to_string(),
        r.ratios.carb.to_string(),
        r.carb_g.to_string(),
        r.carb_kcal.to_string(),
    ]);
    format!("Daily target: {} kcal\n{}", r.calories, table)
}

pub fn format_protein(r: &ProteinResult) -> String {
    format!(
        "Protein: {}-{} g/day (target {} g, {} g per meal over {} meals)",
        r.min_g, r.max_g, r.target_g, r.per_meal_g, r.meals_per_day
    )
}

pub fn format_hydration(r: &HydrationResult, u: UnitSystem) -> String {
    let (total, unit) = units::to_display(r.total_ml, Quantity::Volume, u);
    format!(
        "Water: {} {} per day ({} L, ~{} glasses)\n  base {} ml + activity {} ml, x{} climate, + exercise {} ml",
        total,
        unit,
        r.total_liters,
        r.glasses,
        r.base_ml,
        r.activity_bonus_ml,
        r.climate_multiplier,
        r.exercise_bonus_ml
    )
}

pub fn format_glycemic(r: &GlycemicResult) -> String {
    format!(
        "Glycemic load: {} ({:?}) from GI {} ({:?}) and {} g available carbs",
        r.glycemic_load, r.load_band, r.glycemic_index, r.index_band, r.available_carbs_g
    )
}

pub fn format_meal_glycemic(r: &MealGlycemicResult) -> String {
    let mut out = String::new();
    for item in &r.items {
        out.push_str(&format_glycemic(item));
        out.push('\n');
    }
    out.push_str(&format!("Meal total: {} ({:?})", r.total_load, r.load_band));
    out
}

pub fn format_one_rep_max(r: &OneRepMaxResult, u: UnitSystem) -> String {
    let mut out = format!(
        "Estimated 1RM: {} (from {} x {})\n  Brzycki {} | Epley {} | McGlothin {} | Lombardi {}\n",
        mass(r.one_rep_max, u).bold(),
        mass(r.weight, u),
        r.reps,
        r.estimates.brzycki,
        r.estimates.epley,
        r.estimates.mcglothin,
        r.estimates.lombardi
    );
    let mut table = Table::new();
    table.set_header(vec!["%1RM", "Load", "Reps", "Purpose"]);
    for row in &r.table {
        table.add_row(vec![
            format!("{}%", row.percent),
            mass(row.load, u),
            format!("{}-{}", row.reps.min, row.reps.max),
            row.purpose.to_string(),
        ]);
    }
    out.push_str(&table.to_string());
    out
}

pub fn format_volume(v: &VolumeSummary, u: UnitSystem) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Exercise", "Sets", "Reps", "Tonnage"]);
    for (name, e) in &v.by_exercise {
        table.add_row(vec![
            name.clone(),
            e.sets.to_string(),
            e.reps.to_string(),
            mass(e.tonnage, u),
        ]);
    }
    let mut out = format!(
        "{}\nTotal: {} sets, {} reps, {} moved, average load {}",
        table,
        v.total_sets,
        v.total_reps,
        mass(v.tonnage, u),
        mass(v.average_load, u)
    );
    if let Some(ri) = v.relative_intensity {
        out.push_str(&format!("\nRelative intensity: {}% 1RM", ri));
    }
    if let Some(tut) = v.time_under_tension_s {
        out.push_str(&format!("\nTime under tension: {} s", tut));
    }
    out
}

pub fn format_bmi(r: &BmiResult, u: UnitSystem) -> String {
    format!(
        "BMI: {} ({:?}), healthy weight {} - {}",
        r.bmi,
        r.category,
        mass(r.healthy_range_kg.0, u),
        mass(r.healthy_range_kg.1, u)
    )
}

pub fn format_body_fat(r: &BodyFatResult, u: UnitSystem) -> String {
    format!(
        "Body fat: {}% (fat {}, lean {})",
        r.body_fat_pct,
        mass(r.fat_mass_kg, u),
        mass(r.lean_mass_kg, u)
    )
}

pub fn format_balance(p: &BalanceProjection, u: UnitSystem) -> String {
    let mut out = format!(
        "Daily balance: {} kcal, {} per week, {} over {} weeks",
        p.daily_balance_kcal,
        mass(p.weekly_change_kg, u),
        mass(p.total_change_kg, u),
        p.weeks.len()
    );
    if p.lean_gain_kg > 0.0 {
        out.push_str(&format!(
            "\n  lean {} / fat {}",
            mass(p.lean_gain_kg, u),
            mass(p.fat_change_kg, u)
        ));
    }
    if let Some(days) = p.refeed_every_days {
        out.push_str(&format!("\n  refeed at maintenance every {} days", days));
    }
    if let Some(last) = p.weeks.last() {
        out.push_str(&format!("\nProjected weight: {}", mass(last.weight, u)));
    }
    out
}

pub fn format_periodization(p: &PeriodizationPlan) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Phase", "Weeks", "Span", "Intensity", "Volume", "Reps", "Focus"]);
    for ph in &p.phases {
        table.add_row(vec![
            ph.name.to_string(),
            ph.weeks.to_string(),
            format!("{}-{}", ph.start_week, ph.end_week),
            ph.intensity.to_string(),
            ph.volume.to_string(),
            ph.rep_range.to_string(),
            ph.focus.to_string(),
        ]);
    }
    let deloads: Vec<String> = p.deload_weeks.iter().map(|w| w.to_string()).collect();
    format!(
        "{} cycle, {} weeks\n{}\nDeload weeks: {}",
        p.objective,
        p.total_weeks,
        table,
        if deloads.is_empty() {
            "none".to_string()
        } else {
            deloads.join(", ")
        }
    )
}

pub fn format_progression(p: &ProgressionPlan, u: UnitSystem) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Week", "Load", "Sets x Reps", "Note"]);
    for w in &p.weeks {
        let note = if w.deload {
            w.note.yellow().to_string()
        } else {
            w.note.to_string()
        };
        table.add_row(vec![
            w.week.to_string(),
            mass(w.weight, u),
            format!("{} x {}", w.sets, w.reps),
            note,
        ]);
    }
    format!(
        "{} progression: {} -> {}\n{}",
        p.strategy,
        mass(p.current_weight, u),
        mass(p.target_weight, u),
        table
    )
}

pub fn format_profile(p: &UserProfile) -> String {
    let d = &p.demographics;
    let u = p.settings.units;
    let (height, height_unit) = units::to_display(d.height, Quantity::Length, u);
    let mut out = format!(
        "Profile {}\n  {} y, {}, {}, {} {}, activity {}",
        p.id,
        d.age,
        d.gender,
        mass(d.weight, u),
        height,
        height_unit,
        d.activity_level
    );
    if let Some(bf) = d.body_fat {
        out.push_str(&format!(", body fat {}%", bf));
    }
    out.push_str(&format!(
        "\n  goal {}, BMR method {}, {} meals/day, climate {}",
        p.goals.objective,
        p.preferences.bmr_method,
        p.preferences.meals_per_day,
        p.preferences.climate
    ));
    if let Some(t) = p.goals.target_weight {
        out.push_str(&format!(", target {}", mass(t, u)));
    }
    out.push_str(&format!(
        "\n  updated {}",
        p.updated_at.format("%Y-%m-%d %H:%M")
    ));
    out
}

pub fn format_tracking(t: &TrackingData, u: UnitSystem) -> String {
    let mut out = format!("{} entries logged", t.entry_count());
    if let Some(w) = t.latest_weight() {
        out.push_str(&format!("\nWeight: {} on {}", mass(w.weight, u), w.date));
    }
    if let Some(bf) = t.latest_body_fat() {
        out.push_str(&format!("\nBody fat: {}% on {}", bf.percent, bf.date));
    }
    for (part, entries) in &t.measurements {
        if let Some(last) = entries.last() {
            let (v, unit) = units::to_display(last.value, Quantity::Length, u);
            out.push_str(&format!("\n{}: {} {} on {}", part, v, unit, last.date));
        }
    }
    for exercise in t.performance.keys() {
        if let Some(best) = t.best_one_rep_max(exercise) {
            out.push_str(&format!("\n{} best 1RM: {}", exercise, mass(best, u)));
        }
    }
    out
}
