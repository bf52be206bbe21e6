use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use nutriplan_rs::catalog::{import_foods_csv, FoodCatalog};
use nutriplan_rs::cli::{Cli, Command};
use nutriplan_rs::error::{NutriError, Result};
use nutriplan_rs::interface::{
    display_food_catalog, display_meal_plan, display_progress_history, display_streaks,
    display_targets, display_weekly_stats, prompt_completed_meals, prompt_goals,
    prompt_preferences, prompt_profile, prompt_yes_no,
};
use nutriplan_rs::models::{GoalSettings, NutritionalTargets, UserPreferences, UserProfile};
use nutriplan_rs::planner::{assemble, validate_distributions};
use nutriplan_rs::progress::{
    adherence_score, streaks, weekly_stats, DailyProgress, JsonProgressStore, MacroIntake,
    ProgressRepository,
};
use nutriplan_rs::state::{load_state, save_state, AppState};
use nutriplan_rs::targets::derive_targets;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    validate_distributions()?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { seed } => cmd_plan(&cli.file, seed),
        Command::Onboard => cmd_onboard(&cli.file),
        Command::Log => cmd_log(&cli.file, &cli.progress_file),
        Command::Progress { weeks } => cmd_progress(&cli.progress_file, weeks),
        Command::Foods { import } => cmd_foods(&cli.file, import.as_deref()),
    }
}

/// Everything cmd_plan and cmd_log need from a configured state.
fn configured(
    state: &AppState,
) -> Result<(&UserProfile, GoalSettings, UserPreferences, NutritionalTargets)> {
    let profile = state.profile.as_ref().ok_or(NutriError::ProfileMissing)?;
    let goals = state.goals.clone().unwrap_or_default();
    let preferences = state.preferences.clone().unwrap_or_default();
    let targets = derive_targets(profile, &goals);
    Ok((profile, goals, preferences, targets))
}

/// Run the onboarding questionnaire and persist the answers.
fn cmd_onboard(file_path: &str) -> Result<()> {
    let mut state = load_state(file_path)?;
    let catalog = FoodCatalog::with_custom(&state.custom_foods);

    println!("Let's set up your nutrition profile.");
    println!();

    let profile = prompt_profile()?;
    let goals = prompt_goals()?;
    let preferences = prompt_preferences(&catalog)?;

    let targets = derive_targets(&profile, &goals);
    display_targets(&profile, &goals, &targets);

    state.profile = Some(profile);
    state.goals = Some(goals);
    state.preferences = Some(preferences);
    save_state(file_path, &state)?;

    println!("Profile saved. Run 'nutriplan plan' to generate a meal plan.");
    Ok(())
}

/// Generate a meal plan for the day and optionally keep it as active.
fn cmd_plan(file_path: &str, seed: Option<u64>) -> Result<()> {
    let mut state = load_state(file_path)?;
    let (profile, goals, preferences, targets) = configured(&state)?;
    let catalog = FoodCatalog::with_custom(&state.custom_foods);

    display_targets(profile, &goals, &targets);
    println!(
        "Generating a {}-meal plan...",
        preferences.meal_frequency.meal_count()
    );

    let plan = match seed {
        Some(seed) => assemble(&catalog, &targets, &preferences, &mut StdRng::seed_from_u64(seed)),
        None => assemble(&catalog, &targets, &preferences, &mut thread_rng()),
    };

    display_meal_plan(&plan, &targets, &catalog);

    if prompt_yes_no("Save as today's active plan?", true)? {
        state.active_plan = Some(plan);
        save_state(file_path, &state)?;
        println!("Plan saved. Use 'nutriplan log' to track it.");
    }

    Ok(())
}

/// Record today's completed meals against the active plan.
fn cmd_log(file_path: &str, progress_path: &str) -> Result<()> {
    let state = load_state(file_path)?;
    let (_, _, _, targets) = configured(&state)?;
    let plan = state.active_plan.as_ref().ok_or(NutriError::NoActivePlan)?;

    let completed = prompt_completed_meals(plan)?;

    let consumed: nutriplan_rs::Nutrition = completed
        .iter()
        .map(|&idx| plan.meals[idx].total_nutrition)
        .sum();

    let score = adherence_score(
        completed.len() as u32,
        plan.meals.len() as u32,
        consumed.calories,
        targets.calories,
    );

    let record = DailyProgress {
        date: Local::now().date_naive(),
        completed_meals: completed.len() as u32,
        total_meals: plan.meals.len() as u32,
        consumed_calories: consumed.calories,
        target_calories: targets.calories,
        consumed_macros: MacroIntake {
            protein: consumed.protein,
            carbs: consumed.carbs,
            fat: consumed.fat,
        },
        target_macros: MacroIntake {
            protein: targets.protein,
            carbs: targets.carbs,
            fat: targets.fat,
        },
        adherence_score: score,
    };

    let mut store = JsonProgressStore::new(progress_path);
    store.save(record)?;

    println!();
    println!(
        "Logged {}/{} meals, {:.0} kcal. Adherence score: {}",
        completed.len(),
        plan.meals.len(),
        consumed.calories,
        score
    );
    Ok(())
}

/// Show adherence history, weekly aggregates, and streaks.
fn cmd_progress(progress_path: &str, weeks: u32) -> Result<()> {
    let store = JsonProgressStore::new(progress_path);
    let records = store.get_all()?;

    display_progress_history(&records);

    if !records.is_empty() {
        let today = Local::now().date_naive();
        display_weekly_stats(&weekly_stats(&records, weeks, today));
        display_streaks(&streaks(&records));
    }

    Ok(())
}

/// List the catalog; with --import, merge custom foods first.
fn cmd_foods(file_path: &str, import: Option<&std::path::Path>) -> Result<()> {
    let mut state = load_state(file_path)?;

    if let Some(path) = import {
        let imported = import_foods_csv(path)?;
        let count = imported.len();

        for food in imported {
            // Re-importing an id replaces the earlier definition.
            state.custom_foods.retain(|f| f.key() != food.key());
            state.custom_foods.push(food);
        }

        save_state(file_path, &state)?;
        println!("Imported {count} custom food(s).");
    }

    let catalog = FoodCatalog::with_custom(&state.custom_foods);
    display_food_catalog(&catalog);
    Ok(())
}
