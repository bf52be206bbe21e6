use crate::error::{NutriError, Result};
use crate::models::{MealFrequency, MealSlot, NutritionalTargets};

/// A slot's fraction of the whole-day targets.
#[derive(Debug, Clone, Copy)]
pub struct SlotShare {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

const fn share(calories: f64, protein: f64, carbs: f64, fat: f64) -> SlotShare {
    SlotShare {
        calories,
        protein,
        carbs,
        fat,
    }
}

use crate::models::MealSlot::{AfternoonSnack, Breakfast, Dinner, LateSnack, Lunch, MidMorningSnack};

const THREE_MEALS: &[(MealSlot, SlotShare)] = &[
    (Breakfast, share(0.30, 0.25, 0.35, 0.25)),
    (Lunch, share(0.45, 0.50, 0.45, 0.50)),
    (Dinner, share(0.25, 0.25, 0.20, 0.25)),
];

const FOUR_MEALS: &[(MealSlot, SlotShare)] = &[
    (Breakfast, share(0.25, 0.20, 0.30, 0.20)),
    (MidMorningSnack, share(0.15, 0.15, 0.20, 0.15)),
    (Lunch, share(0.35, 0.40, 0.35, 0.40)),
    (Dinner, share(0.25, 0.25, 0.15, 0.25)),
];

const FIVE_MEALS: &[(MealSlot, SlotShare)] = &[
    (Breakfast, share(0.25, 0.20, 0.30, 0.20)),
    (MidMorningSnack, share(0.10, 0.15, 0.15, 0.10)),
    (Lunch, share(0.35, 0.40, 0.35, 0.40)),
    (AfternoonSnack, share(0.15, 0.15, 0.15, 0.15)),
    (Dinner, share(0.15, 0.10, 0.05, 0.15)),
];

const SIX_MEALS: &[(MealSlot, SlotShare)] = &[
    (Breakfast, share(0.25, 0.20, 0.30, 0.20)),
    (MidMorningSnack, share(0.10, 0.15, 0.15, 0.10)),
    (Lunch, share(0.35, 0.40, 0.35, 0.40)),
    (AfternoonSnack, share(0.10, 0.10, 0.10, 0.10)),
    (Dinner, share(0.15, 0.10, 0.08, 0.15)),
    (LateSnack, share(0.05, 0.05, 0.02, 0.05)),
];

/// The active slots for a meal frequency, in chronological order, each with
/// its share of the day's targets.
pub fn distribution_for(frequency: MealFrequency) -> &'static [(MealSlot, SlotShare)] {
    match frequency {
        MealFrequency::Three => THREE_MEALS,
        MealFrequency::Four => FOUR_MEALS,
        MealFrequency::Five => FIVE_MEALS,
        MealFrequency::Six => SIX_MEALS,
    }
}

/// A slot's targets: the day targets scaled by its share, each component
/// rounded to the nearest whole unit.
pub fn slot_targets(day: &NutritionalTargets, share: &SlotShare) -> NutritionalTargets {
    NutritionalTargets {
        calories: (day.calories * share.calories).round(),
        protein: (day.protein * share.protein).round(),
        carbs: (day.carbs * share.carbs).round(),
        fat: (day.fat * share.fat).round(),
    }
}

/// Verify every distribution table splits 100% of each nutrient.
///
/// Run at startup; a table that silently over- or under-allocates a
/// nutrient would skew every generated plan.
pub fn validate_distributions() -> Result<()> {
    for frequency in MealFrequency::ALL {
        let table = distribution_for(frequency);

        let sums = table.iter().fold([0.0f64; 4], |acc, (_, s)| {
            [
                acc[0] + s.calories,
                acc[1] + s.protein,
                acc[2] + s.carbs,
                acc[3] + s.fat,
            ]
        });

        for (column, total) in ["calories", "protein", "carbs", "fat"].iter().zip(sums) {
            if (total - 1.0).abs() > 1e-9 {
                return Err(NutriError::InvalidDistribution(format!(
                    "{} meals: {column} column sums to {total}, expected 1.0",
                    frequency.meal_count()
                )));
            }
        }
    }
    Ok(())
}
