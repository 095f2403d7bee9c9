mod cell_text;
mod error;
mod static_selector;
mod week_page;
mod whitespace;

pub use cell_text::cell_text;
pub use error::Error;
pub use week_page::{MealGrid, ParseOptions, WeekMenu, WeekRange, DAYS_PER_WEEK};
pub use whitespace::TextCleanup;
