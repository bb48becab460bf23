use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::{Value, json};

use fitcalc::core::error as validation;
use fitcalc::core::strength;
use fitcalc::core::units::{self, Quantity};
use fitcalc::models::tracking::{
    BodyFatEntry, HydrationEntry, InjuryEntry, MeasurementEntry, NutritionEntry, PerformanceEntry,
    ScoreEntry, ScoreKind, SleepEntry, TrackingUpdate, WeightEntry, WorkoutEntry,
};
use fitcalc::output::human;

use super::{Context, print_success};
use crate::cli::TrackAction;

pub fn run(action: TrackAction, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let ctx = Context::load()?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let current = ctx.store.tracking_data()?;

    let (kind, update, entry): (&str, TrackingUpdate, Value) = match action {
        TrackAction::Show => return run_show(&ctx, human_flag),
        TrackAction::Weight { value, note } => {
            let weight = validation::positive("weight", ctx.mass_in(value))?;
            let e = WeightEntry { date, weight, note };
            let v = json!(e);
            ("weight", TrackingUpdate::append_weight(&current, e), v)
        }
        TrackAction::Measure { body_part, value } => {
            let value = validation::positive("value", ctx.length_in(value))?;
            let e = MeasurementEntry { date, value };
            let v = json!({ "body_part": body_part, "entry": e });
            (
                "measurement",
                TrackingUpdate::append_measurement(&current, &body_part, e),
                v,
            )
        }
        TrackAction::Lift {
            exercise,
            weight,
            reps,
        } => {
            let weight = ctx.mass_in(weight);
            let one_rep_max = strength::one_rep_max(weight, reps)?;
            let e = PerformanceEntry {
                date,
                weight,
                reps,
                one_rep_max,
            };
            let v = json!({ "exercise": exercise, "entry": e });
            (
                "performance",
                TrackingUpdate::append_performance(&current, &exercise, e),
                v,
            )
        }
        TrackAction::Water { amount } => {
            let amount = validation::positive(
                "amount",
                units::from_input(amount, Quantity::Volume, ctx.units),
            )?;
            let e = HydrationEntry { date, amount };
            let v = json!(e);
            ("hydration", TrackingUpdate::append_hydration(&current, e), v)
        }
        TrackAction::BodyFat { percent } => {
            let percent = validation::within("percent", percent, 0.0, 100.0)?;
            let e = BodyFatEntry { date, percent };
            let v = json!(e);
            ("body_fat", TrackingUpdate::append_body_fat(&current, e), v)
        }
        TrackAction::Sleep { hours, quality } => {
            let hours = validation::within("hours", hours, 0.0, 24.0)?;
            if let Some(q) = quality {
                validation::within("quality", q as f64, 1.0, 5.0)?;
            }
            let e = SleepEntry {
                date,
                hours,
                quality,
            };
            let v = json!(e);
            ("sleep", TrackingUpdate::append_sleep(&current, e), v)
        }
        TrackAction::Meal {
            calories,
            protein,
            carbs,
            fat,
        } => {
            let e = NutritionEntry {
                date,
                calories: validation::non_negative("calories", calories)?,
                protein: validation::non_negative("protein", protein)?,
                carbs: validation::non_negative("carbs", carbs)?,
                fat: validation::non_negative("fat", fat)?,
            };
            let v = json!(e);
            ("nutrition", TrackingUpdate::append_nutrition(&current, e), v)
        }
        TrackAction::Workout {
            name,
            minutes,
            volume,
        } => {
            let e = WorkoutEntry {
                date,
                name,
                duration_minutes: minutes,
                volume: volume.map(|v| ctx.mass_in(v)),
            };
            let v = json!(e);
            ("workout", TrackingUpdate::append_workout(&current, e), v)
        }
        TrackAction::Score { kind, score } => {
            let kind: ScoreKind = kind.parse()?;
            validation::within("score", score as f64, 1.0, 10.0)?;
            let e = ScoreEntry { date, score };
            let v = json!({ "kind": kind, "entry": e });
            ("score", TrackingUpdate::append_score(&current, kind, e), v)
        }
        TrackAction::Injury {
            body_part,
            severity,
            note,
        } => {
            validation::within("severity", severity as f64, 1.0, 10.0)?;
            let e = InjuryEntry {
                date,
                body_part,
                severity,
                note,
            };
            let v = json!(e);
            ("injury", TrackingUpdate::append_injury(&current, e), v)
        }
    };

    let data = ctx.store.save_tracking_data(update)?;
    if human_flag {
        println!(
            "Logged {} on {} ({} entries total)",
            kind,
            date,
            data.entry_count()
        );
    } else {
        print_success("track", json!({ "kind": kind, "entry": entry }))?;
    }
    Ok(())
}

fn run_show(ctx: &Context, human_flag: bool) -> Result<()> {
    let data = ctx.store.tracking_data()?;
    if human_flag {
        println!("{}", human::format_tracking(&data, ctx.units));
    } else {
        print_success("track", json!({ "tracking": data }))?;
    }
    Ok(())
}
