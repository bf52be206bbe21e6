use crate::models::{Food, UserPreferences};

fn matches_any(food: &Food, terms: &[String]) -> bool {
    let name = food.name.to_lowercase();
    let category = food.category.label();
    terms.iter().any(|term| {
        let term = term.to_lowercase();
        !term.is_empty() && (name.contains(&term) || category.contains(&term))
    })
}

/// Does a single food survive the user's preferences?
///
/// Avoided substrings always exclude; preferred substrings, when any exist,
/// are required. Matching is case-insensitive over name and category label.
pub fn passes_preferences(food: &Food, preferences: &UserPreferences) -> bool {
    if matches_any(food, &preferences.avoided_foods) {
        return false;
    }
    if preferences.preferred_foods.is_empty() {
        return true;
    }
    matches_any(food, &preferences.preferred_foods)
}

/// Narrow a candidate list by the user's preferences.
///
/// May return an empty list; falling back to a wider pool (or dropping the
/// role) is the caller's decision, never this function's.
pub fn filter_by_preferences<'a>(
    foods: &[&'a Food],
    preferences: &UserPreferences,
) -> Vec<&'a Food> {
    foods
        .iter()
        .copied()
        .filter(|food| passes_preferences(food, preferences))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FoodCatalog;
    use crate::models::MealFrequency;

    fn prefs(preferred: &[&str], avoided: &[&str]) -> UserPreferences {
        UserPreferences {
            preferred_foods: preferred.iter().map(|s| s.to_string()).collect(),
            avoided_foods: avoided.iter().map(|s| s.to_string()).collect(),
            meal_frequency: MealFrequency::Three,
        }
    }

    #[test]
    fn test_avoided_name_substring() {
        let catalog = FoodCatalog::builtin();
        let foods = catalog.all();
        let filtered = filter_by_preferences(&foods, &prefs(&[], &["chicken"]));

        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|f| !f.name.to_lowercase().contains("chicken")));
    }

    #[test]
    fn test_avoided_category_label() {
        let catalog = FoodCatalog::builtin();
        let foods = catalog.all();
        let filtered = filter_by_preferences(&foods, &prefs(&[], &["dairy"]));

        assert!(filtered.iter().all(|f| f.category.label() != "dairy"));
    }

    #[test]
    fn test_preferred_narrows() {
        let catalog = FoodCatalog::builtin();
        let foods = catalog.all();
        let filtered = filter_by_preferences(&foods, &prefs(&["rice"], &[]));

        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|f| f.name.to_lowercase().contains("rice")));
    }

    #[test]
    fn test_empty_preferred_keeps_all_survivors() {
        let catalog = FoodCatalog::builtin();
        let foods = catalog.all();
        let filtered = filter_by_preferences(&foods, &prefs(&[], &[]));
        assert_eq!(filtered.len(), foods.len());
    }

    #[test]
    fn test_avoidance_beats_preference() {
        let catalog = FoodCatalog::builtin();
        let foods = catalog.all();
        // "rice" preferred but "brown" avoided: brown rice must not survive.
        let filtered = filter_by_preferences(&foods, &prefs(&["rice"], &["brown"]));

        assert!(filtered.iter().any(|f| f.id == "white_rice"));
        assert!(filtered.iter().all(|f| f.id != "brown_rice"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = FoodCatalog::builtin();
        let foods = catalog.all();
        let filtered = filter_by_preferences(&foods, &prefs(&[], &["CHICKEN"]));
        assert!(filtered.iter().all(|f| f.id != "chicken_breast"));
    }
}
