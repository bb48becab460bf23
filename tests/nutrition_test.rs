mod common;

use fitcalc::core::ValidationError;
use fitcalc::core::glycemic::{self, FoodItem, GlycemicBand};
use fitcalc::core::hydration::{self, Climate};
use fitcalc::core::macros::{self, GoalProfile, Macro, MacroRatios};
use fitcalc::core::protein::{self, ProteinObjective};
use fitcalc::models::profile::ActivityLevel;

// ── macros ──────────────────────────────────────────────────────────────────

#[test]
fn test_macros_from_explicit_ratios() {
    let ratios = MacroRatios::new(30, 30, 40).unwrap();
    let r = macros::compute_macros(2000.0, ratios).unwrap();
    assert_eq!(r.protein_g, 150.0);
    assert_eq!(r.fat_g, 67.0);
    assert_eq!(r.carb_g, 200.0);
    assert_eq!(r.protein_kcal + r.fat_kcal + r.carb_kcal, 2000.0);
}

/// Scenario: cutting applies the 20% deficit and the 35/25/40 split.
#[test]
fn test_goal_macros_cutting() {
    let r = macros::compute_goal_macros(2500.0, GoalProfile::Cutting).unwrap();
    assert_eq!(r.calories, 2000.0);
    assert_eq!(r.ratios, MacroRatios::new(35, 25, 40).unwrap());
    assert_eq!(r.protein_g, 175.0);
    assert_eq!(r.fat_g, 56.0);
    assert_eq!(r.carb_g, 200.0);
}

#[test]
fn test_goal_macros_bulking_calories() {
    let r = macros::compute_goal_macros(2000.0, GoalProfile::Bulking).unwrap();
    assert_eq!(r.calories, 2300.0);
    assert_eq!(r.ratios.carb, 50);
}

#[test]
fn test_every_preset_sums_to_100() {
    for goal in [
        GoalProfile::Cutting,
        GoalProfile::Maintenance,
        GoalProfile::Bulking,
        GoalProfile::Recomposition,
    ] {
        assert_eq!(goal.preset_ratios().sum(), 100, "{}", goal);
    }
}

#[test]
fn test_ratios_not_summing_to_100_rejected() {
    let err = MacroRatios::new(40, 40, 30).unwrap_err();
    assert_eq!(err, ValidationError::InvalidRatios { sum: 110 });
}

#[test]
fn test_compute_macros_revalidates_ratios() {
    let bad = MacroRatios {
        protein: 10,
        fat: 10,
        carb: 10,
    };
    assert!(macros::compute_macros(2000.0, bad).is_err());
}

/// Scenario: pinning protein at 40% splits the other 60 by the old 30:40 weights.
#[test]
fn test_rebalance_keeps_proportions() {
    let base = MacroRatios::new(30, 30, 40).unwrap();
    let r = base.rebalance(Macro::Protein, 40);
    assert_eq!(r.protein, 40);
    assert_eq!(r.fat, 26);
    assert_eq!(r.carb, 34);
    assert_eq!(r.sum(), 100);
}

#[test]
fn test_rebalance_from_zero_weights_splits_evenly() {
    let base = MacroRatios::new(100, 0, 0).unwrap();
    let r = base.rebalance(Macro::Protein, 50);
    assert_eq!((r.protein, r.fat, r.carb), (50, 25, 25));
}

#[test]
fn test_zero_calories_rejected() {
    let ratios = GoalProfile::Maintenance.preset_ratios();
    assert!(macros::compute_macros(0.0, ratios).is_err());
}

// ── protein ─────────────────────────────────────────────────────────────────

#[test]
fn test_protein_strength_band() {
    let r = protein::compute_protein_needs(80.0, ProteinObjective::Strength, 4).unwrap();
    assert_eq!(r.min_g, 128.0);
    assert_eq!(r.max_g, 176.0);
    assert_eq!(r.target_g, 152.0);
    assert_eq!(r.per_meal_g, 38.0);
}

#[test]
fn test_protein_fat_loss_is_highest() {
    let fat_loss = protein::compute_protein_needs(70.0, ProteinObjective::FatLoss, 3).unwrap();
    let sedentary = protein::compute_protein_needs(70.0, ProteinObjective::Sedentary, 3).unwrap();
    assert!(fat_loss.target_g > sedentary.target_g);
}

#[test]
fn test_protein_zero_meals_rejected() {
    assert!(protein::compute_protein_needs(80.0, ProteinObjective::Strength, 0).is_err());
}

#[test]
fn test_protein_objective_parse() {
    assert_eq!(
        "fat-loss".parse::<ProteinObjective>().unwrap(),
        ProteinObjective::FatLoss
    );
    assert!("keto".parse::<ProteinObjective>().is_err());
}

// ── hydration ───────────────────────────────────────────────────────────────

/// Scenario: 70 kg, moderate, temperate, 30 minutes of training.
#[test]
fn test_hydration_reference() {
    let r = hydration::compute_hydration_needs(70.0, ActivityLevel::Moderate, Climate::Temperate, 30)
        .unwrap();
    assert_eq!(r.base_ml, 2450.0);
    assert_eq!(r.activity_bonus_ml, 500.0);
    assert_eq!(r.exercise_bonus_ml, 300.0);
    assert_eq!(r.total_ml, 3250.0);
    assert_eq!(r.total_liters, 3.3);
    assert_eq!(r.glasses, 13);
}

/// Scenario: only whole 15-minute blocks earn the exercise bonus.
#[test]
fn test_hydration_partial_block_ignored() {
    let r = hydration::compute_hydration_needs(70.0, ActivityLevel::Moderate, Climate::Temperate, 29)
        .unwrap();
    assert_eq!(r.exercise_bonus_ml, 150.0);
}

#[test]
fn test_hydration_climate_scales_base_and_activity() {
    let r = hydration::compute_hydration_needs(70.0, ActivityLevel::Moderate, Climate::Hot, 0)
        .unwrap();
    assert_eq!(r.total_ml, 3540.0);

    let cold =
        hydration::compute_hydration_needs(70.0, ActivityLevel::Sedentary, Climate::Cold, 0)
            .unwrap();
    assert_eq!(cold.total_ml, 2205.0);
}

#[test]
fn test_hydration_rejects_negative_weight() {
    assert!(
        hydration::compute_hydration_needs(-1.0, ActivityLevel::Light, Climate::Temperate, 0)
            .is_err()
    );
}

#[test]
fn test_climate_parse() {
    assert_eq!("hot-humid".parse::<Climate>().unwrap(), Climate::HotHumid);
    assert_eq!(Climate::HotHumid.to_string(), "hot_humid");
    assert!("arctic".parse::<Climate>().is_err());
}

// ── glycemic load ───────────────────────────────────────────────────────────

#[test]
fn test_glycemic_load_subtracts_fiber() {
    let r = glycemic::compute_glycemic_load(55.0, 30.0, 5.0).unwrap();
    assert_eq!(r.available_carbs_g, 25.0);
    assert_eq!(r.glycemic_load, 13.8);
    assert_eq!(r.index_band, GlycemicBand::Low);
    assert_eq!(r.load_band, GlycemicBand::Medium);
}

#[test]
fn test_glycemic_bands_at_edges() {
    assert_eq!(GlycemicBand::for_index(55.0), GlycemicBand::Low);
    assert_eq!(GlycemicBand::for_index(56.0), GlycemicBand::Medium);
    assert_eq!(GlycemicBand::for_index(70.0), GlycemicBand::High);
    assert_eq!(GlycemicBand::for_load(10.0), GlycemicBand::Low);
    assert_eq!(GlycemicBand::for_load(19.9), GlycemicBand::Medium);
    assert_eq!(GlycemicBand::for_load(20.0), GlycemicBand::High);
}

#[test]
fn test_fiber_above_carbs_gives_zero_load() {
    let r = glycemic::compute_glycemic_load(60.0, 5.0, 8.0).unwrap();
    assert_eq!(r.available_carbs_g, 0.0);
    assert_eq!(r.glycemic_load, 0.0);
}

#[test]
fn test_glycemic_index_over_100_rejected() {
    let err = glycemic::compute_glycemic_load(120.0, 30.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::OutOfRange {
            field: "glycemic_index",
            ..
        }
    ));
}

#[test]
fn test_meal_load_adds_items() {
    let items = vec![
        FoodItem {
            name: "rice".into(),
            glycemic_index: 70.0,
            carbs_g: 40.0,
            fiber_g: 0.0,
        },
        FoodItem {
            name: "lentils".into(),
            glycemic_index: 30.0,
            carbs_g: 20.0,
            fiber_g: 8.0,
        },
    ];
    let r = glycemic::meal_glycemic_load(&items).unwrap();
    assert_eq!(r.items.len(), 2);
    assert_eq!(r.items[0].glycemic_load, 28.0);
    assert_eq!(r.items[1].glycemic_load, 3.6);
    assert_eq!(r.total_load, 31.6);
    assert_eq!(r.load_band, GlycemicBand::High);
}

#[test]
fn test_meal_with_invalid_item_fails() {
    let items = vec![FoodItem {
        name: "bad".into(),
        glycemic_index: 50.0,
        carbs_g: -3.0,
        fiber_g: 0.0,
    }];
    assert!(glycemic::meal_glycemic_load(&items).is_err());
}
