use rand::Rng;

use crate::catalog::FoodCatalog;
use crate::models::{Food, FoodCategory, MealSlot, UserPreferences};
use crate::planner::filter::{filter_by_preferences, passes_preferences};

/// One role inside a meal template: a nutritional function and the food
/// that fills it by default.
pub type TemplateRole = (FoodCategory, &'static str);

/// A template variant is an ordered role list. The first role is the
/// primary item the portion optimizer adjusts, so variants lead with their
/// main energy source.
pub type Template = &'static [TemplateRole];

use crate::models::FoodCategory::{Carb, Dairy, Fat, Fruit, Legume, Protein, Vegetable};

const BREAKFAST: &[Template] = &[
    &[(Carb, "oats"), (Protein, "eggs"), (Fruit, "banana"), (Dairy, "skim_milk")],
    &[(Carb, "whole_bread"), (Dairy, "cottage_cheese"), (Fruit, "orange")],
    &[(Dairy, "greek_yogurt"), (Carb, "oats"), (Fruit, "apple")],
];

const LUNCH: &[Template] = &[
    &[
        (Carb, "brown_rice"),
        (Legume, "black_beans"),
        (Protein, "chicken_breast"),
        (Vegetable, "broccoli"),
        (Fat, "olive_oil"),
    ],
    &[(Carb, "pasta"), (Protein, "lean_beef"), (Vegetable, "tomato"), (Fat, "olive_oil")],
    &[(Carb, "potato"), (Protein, "salmon"), (Vegetable, "spinach"), (Fat, "avocado")],
];

const DINNER: &[Template] = &[
    &[
        (Carb, "sweet_potato"),
        (Protein, "tilapia"),
        (Vegetable, "carrot"),
        (Fat, "olive_oil"),
    ],
    &[
        (Carb, "white_rice"),
        (Legume, "lentils"),
        (Protein, "chicken_breast"),
        (Vegetable, "spinach"),
    ],
    &[(Carb, "potato"), (Protein, "salmon"), (Vegetable, "broccoli"), (Fat, "olive_oil")],
];

// Both snack slots draw from the same pool.
const SNACK: &[Template] = &[
    &[(Fruit, "banana"), (Fat, "almonds")],
    &[(Dairy, "greek_yogurt"), (Fruit, "apple")],
    &[(Carb, "whole_bread"), (Fat, "peanut_butter")],
];

const LATE_SNACK: &[Template] = &[
    &[(Dairy, "skim_milk"), (Carb, "oats")],
    &[(Dairy, "greek_yogurt"), (Fruit, "banana")],
];

/// Fixed template variants for a meal slot.
pub fn template_variants(slot: MealSlot) -> &'static [Template] {
    match slot {
        MealSlot::Breakfast => BREAKFAST,
        MealSlot::Lunch => LUNCH,
        MealSlot::Dinner => DINNER,
        MealSlot::MidMorningSnack | MealSlot::AfternoonSnack => SNACK,
        MealSlot::LateSnack => LATE_SNACK,
    }
}

/// Pick one variant uniformly at random.
pub fn select_template<R: Rng>(slot: MealSlot, rng: &mut R) -> Template {
    let variants = template_variants(slot);
    variants[rng.gen_range(0..variants.len())]
}

/// Resolve a template's roles to concrete foods under the user's
/// preferences.
///
/// A role keeps its assigned food if the food survives the preference
/// filter. Otherwise the full catalog is searched for same-category
/// alternatives; the first survivor (by id) substitutes. A role with no
/// surviving alternative is dropped rather than failing the meal.
pub fn resolve_template<'a>(
    catalog: &'a FoodCatalog,
    template: Template,
    preferences: &UserPreferences,
) -> Vec<&'a Food> {
    let mut resolved = Vec::with_capacity(template.len());

    for &(role, food_id) in template {
        match catalog.get(food_id) {
            Some(food) if passes_preferences(food, preferences) => resolved.push(food),
            _ => {
                let candidates = catalog.foods_in_category(role);
                let survivors = filter_by_preferences(&candidates, preferences);
                if let Some(substitute) = survivors.first() {
                    resolved.push(substitute);
                }
            }
        }
    }

    resolved
}
