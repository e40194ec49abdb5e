//! Built-in catalogs: recovery milestones, savings goals and purchasable items.

use crate::goals::{GoalSource, PurchasableItem, SavingsGoal};
use crate::milestones::Milestone;

const MILESTONES: &[(&str, &str, &str, u32)] = &[
    ("day-1", "First Day", "🌱", 1),
    ("days-3", "3 Days", "🌿", 3),
    ("week-1", "1 Week", "⭐", 7),
    ("weeks-2", "2 Weeks", "🌟", 14),
    ("month-1", "1 Month", "🏅", 30),
    ("days-60", "60 Days", "🎖️", 60),
    ("days-90", "90 Days", "🏆", 90),
    ("months-6", "6 Months", "💎", 180),
    ("year-1", "1 Year", "👑", 365),
    ("months-18", "18 Months", "🚀", 545),
    ("years-2", "2 Years", "🌈", 730),
    ("years-5", "5 Years", "🦅", 1825),
];

const GOALS: &[(&str, &str, &str, f64)] = &[
    ("nice-dinner", "Nice Dinner Out", "🍽️", 100.0),
    ("concert", "Concert Tickets", "🎵", 250.0),
    ("weekend-getaway", "Weekend Getaway", "🏕️", 500.0),
    ("new-phone", "New Phone", "📱", 800.0),
    ("emergency-fund", "Emergency Fund", "🛟", 1000.0),
    ("vacation", "Dream Vacation", "🏝️", 2500.0),
];

const ITEMS: &[(&str, &str, &str, f64, f64)] = &[
    ("movie-night", "Movie Night", "🎬", 15.0, 40.0),
    ("books", "Stack of Books", "📚", 30.0, 80.0),
    ("gym", "Gym Membership", "🏋️", 40.0, 120.0),
    ("shoes", "Running Shoes", "👟", 80.0, 200.0),
    ("headphones", "Headphones", "🎧", 100.0, 350.0),
    ("console", "Gaming Console", "🎮", 300.0, 550.0),
    ("bike", "Bicycle", "🚲", 400.0, 1200.0),
    ("laptop", "Laptop", "💻", 800.0, 2000.0),
    ("trip", "Trip Abroad", "✈️", 1500.0, 5000.0),
];

/// Recovery milestones, ascending by threshold.
pub fn default_milestones() -> Vec<Milestone> {
    MILESTONES
        .iter()
        .map(|&(id, title, icon, threshold_days)| Milestone::new(id, title, icon, threshold_days))
        .collect()
}

/// Savings goals offered to every user.
pub fn builtin_goals() -> Vec<SavingsGoal> {
    GOALS
        .iter()
        .map(|&(id, name, icon, amount)| SavingsGoal {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            amount,
            source: GoalSource::Builtin,
        })
        .collect()
}

/// Items shown in the "what your savings could buy" carousel.
pub fn purchasable_items() -> Vec<PurchasableItem> {
    ITEMS
        .iter()
        .map(|&(id, name, icon, min_cost, max_cost)| PurchasableItem {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            min_cost,
            max_cost,
        })
        .collect()
}
