mod day_record;

pub use day_record::{DateFormat, DayRecord};

use crate::{
    parse::{MealGrid, WeekRange},
    transpose::transposed,
};

/// Pairs the `i`th column of the grid with the `i`th day of the week.
pub fn assemble(week: &WeekRange, grid: MealGrid) -> Vec<DayRecord> {
    week.days()
        .zip(transposed(grid.into_rows()))
        .map(|(date, meals)| {
            let mut meals = meals.into_iter();
            let mut next = || meals.next().unwrap_or_default();
            DayRecord {
                date,
                breakfast: next(),
                lunch: next(),
                dinner: next(),
                supper: next(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn grid() -> MealGrid {
        let row = |meal: &str| (0..7).map(|d| format!("{meal} {d}")).collect::<Vec<_>>();
        MealGrid::new([row("aamu"), row("lounas"), row("päivä"), row("ilta")]).unwrap()
    }

    #[test]
    fn test_assemble_pairs_by_index() {
        let week = WeekRange::ending_on(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()).unwrap();
        let days = assemble(&week, grid());
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(days[6].date, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.breakfast, format!("aamu {i}"));
            assert_eq!(day.lunch, format!("lounas {i}"));
            assert_eq!(day.dinner, format!("päivä {i}"));
            assert_eq!(day.supper, format!("ilta {i}"));
        }
    }

    #[test]
    fn test_assemble_across_year_end() {
        let week = WeekRange::ending_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
        let days = assemble(&week, grid());
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2023, 12, 26).unwrap());
        for pair in days.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            assert_eq!(pair[1].epoch_seconds() - pair[0].epoch_seconds(), 86_400);
        }
    }

    #[test]
    fn test_grid_needs_seven_days() {
        let short = vec![String::new(); 6];
        let full = vec![String::new(); 7];
        assert!(MealGrid::new([full.clone(), full.clone(), short, full]).is_err());
    }
}
