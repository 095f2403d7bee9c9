mod date_range;
mod meal_grid;
mod week_menu;

pub use date_range::{WeekRange, DAYS_PER_WEEK};
pub use meal_grid::MealGrid;
pub use week_menu::{ParseOptions, WeekMenu};
