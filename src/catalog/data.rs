use crate::models::{Food, FoodCategory, MeasureUnit};

fn food(
    id: &str,
    name: &str,
    category: FoodCategory,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    unit: MeasureUnit,
    common_serving: f64,
) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        category,
        calories,
        protein,
        carbs,
        fat,
        fiber,
        unit,
        common_serving,
    }
}

/// The builtin food table.
///
/// Mass/volume foods carry values per 100 g / 100 ml; count-based foods
/// (eggs, bread slices, whole fruit) carry values per single unit.
pub fn builtin_foods() -> Vec<Food> {
    use FoodCategory::*;
    use MeasureUnit::*;

    vec![
        // Proteins
        food("chicken_breast", "Chicken breast", Protein, 165.0, 31.0, 0.0, 3.6, 0.0, Grams, 120.0),
        food("salmon", "Salmon", Protein, 208.0, 22.0, 0.0, 13.0, 0.0, Grams, 100.0),
        food("lean_beef", "Lean beef", Protein, 250.0, 26.0, 0.0, 15.0, 0.0, Grams, 100.0),
        food("tuna", "Tuna", Protein, 144.0, 30.0, 0.0, 1.0, 0.0, Grams, 80.0),
        food("tilapia", "Tilapia", Protein, 96.0, 20.0, 0.0, 1.7, 0.0, Grams, 120.0),
        food("eggs", "Eggs", Protein, 78.0, 6.3, 0.6, 5.3, 0.0, Unit, 2.0),
        // Carbohydrates
        food("brown_rice", "Brown rice", Carb, 123.0, 2.6, 23.0, 0.9, 1.8, Grams, 150.0),
        food("white_rice", "White rice", Carb, 130.0, 2.7, 28.0, 0.3, 0.4, Grams, 150.0),
        food("sweet_potato", "Sweet potato", Carb, 86.0, 1.6, 20.0, 0.1, 3.0, Grams, 200.0),
        food("potato", "Potato", Carb, 77.0, 2.0, 17.0, 0.1, 2.2, Grams, 200.0),
        food("oats", "Oats", Carb, 389.0, 17.0, 66.0, 7.0, 10.0, Grams, 40.0),
        food("pasta", "Pasta", Carb, 158.0, 5.8, 31.0, 0.9, 1.8, Grams, 120.0),
        food("whole_bread", "Whole wheat bread", Carb, 80.0, 4.0, 13.7, 1.1, 2.0, Unit, 2.0),
        // Fats
        food("avocado", "Avocado", Fat, 160.0, 2.0, 9.0, 15.0, 7.0, Grams, 100.0),
        food("olive_oil", "Olive oil", Fat, 884.0, 0.0, 0.0, 100.0, 0.0, Milliliters, 10.0),
        food("almonds", "Almonds", Fat, 579.0, 21.0, 22.0, 50.0, 12.0, Grams, 30.0),
        food("peanut_butter", "Peanut butter", Fat, 588.0, 25.0, 20.0, 50.0, 8.0, Grams, 20.0),
        // Vegetables
        food("broccoli", "Broccoli", Vegetable, 34.0, 2.8, 7.0, 0.4, 2.6, Grams, 150.0),
        food("spinach", "Spinach", Vegetable, 23.0, 2.9, 3.6, 0.4, 2.2, Grams, 100.0),
        food("tomato", "Tomato", Vegetable, 18.0, 0.9, 3.9, 0.2, 1.2, Grams, 150.0),
        food("lettuce", "Lettuce", Vegetable, 15.0, 1.4, 2.9, 0.2, 1.3, Grams, 80.0),
        food("carrot", "Carrot", Vegetable, 41.0, 0.9, 10.0, 0.2, 2.8, Grams, 100.0),
        // Dairy
        food("greek_yogurt", "Greek yogurt", Dairy, 59.0, 10.0, 3.6, 0.4, 0.0, Grams, 170.0),
        food("cottage_cheese", "Cottage cheese", Dairy, 98.0, 11.0, 3.4, 4.3, 0.0, Grams, 100.0),
        food("skim_milk", "Skim milk", Dairy, 34.0, 3.4, 5.0, 0.1, 0.0, Milliliters, 200.0),
        // Fruit
        food("banana", "Banana", Fruit, 105.0, 1.3, 27.0, 0.4, 3.1, Unit, 1.0),
        food("apple", "Apple", Fruit, 95.0, 0.5, 25.0, 0.3, 4.4, Unit, 1.0),
        food("orange", "Orange", Fruit, 62.0, 1.2, 15.0, 0.2, 3.1, Unit, 1.0),
        food("strawberries", "Strawberries", Fruit, 32.0, 0.7, 7.7, 0.3, 2.0, Grams, 150.0),
        // Legumes
        food("black_beans", "Black beans", Legume, 132.0, 8.9, 24.0, 0.5, 8.7, Grams, 100.0),
        food("lentils", "Lentils", Legume, 116.0, 9.0, 20.0, 0.4, 7.9, Grams, 100.0),
        food("chickpeas", "Chickpeas", Legume, 164.0, 8.9, 27.0, 2.6, 7.6, Grams, 100.0),
    ]
}
