use scraper::{ElementRef, Html};

use super::date_range::DAYS_PER_WEEK;
use crate::parse::{cell_text, Error, TextCleanup};
use crate::static_selector;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Supper,
}

impl MealSlot {
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Supper];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Supper => "supper",
        }
    }
}

/// Where the menu table keeps its data. Rows are counted from the top of the first table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TableLayout {
    /// Row whose last cell holds the date range of the week.
    pub anchor_row: usize,
    /// Rows in `MealSlot::ALL` order.
    pub slot_rows: [usize; 4],
    /// Leading cells in each meal row that hold the row label.
    pub label_columns: usize,
}

impl TableLayout {
    pub const LEIJONA: Self = Self {
        anchor_row: 0,
        slot_rows: [2, 3, 4, 5],
        label_columns: 1,
    };

    pub const fn row_of(&self, slot: MealSlot) -> usize {
        self.slot_rows[slot as usize]
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::LEIJONA
    }
}

/// The rows of the first table on a menu page.
#[derive(Debug)]
pub struct MenuTable<'a> {
    rows: Vec<ElementRef<'a>>,
}

impl<'a> MenuTable<'a> {
    pub fn from_html(html: &'a Html) -> Result<Self, Error> {
        static_selector!(TABLE_SELECTOR <- "table");
        static_selector!(ROW_SELECTOR <- "tr");
        let table = html
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or_else(|| Error::html_parse_error("The menu page should contain a table."))?;
        Ok(Self {
            rows: table.select(&ROW_SELECTOR).collect(),
        })
    }

    fn cells(&self, index: usize, label: &str) -> Result<Vec<ElementRef<'a>>, Error> {
        static_selector!(CELL_SELECTOR <- "td");
        let row = self.rows.get(index).ok_or_else(|| {
            Error::HtmlParse(format!(
                "The menu table should have a {label} row at index {index} but has {} rows.",
                self.rows.len()
            ))
        })?;
        Ok(row.select(&CELL_SELECTOR).collect())
    }

    /// Text of the cell holding the week's date range.
    pub fn anchor_text(&self, layout: &TableLayout) -> Result<String, Error> {
        let cells = self.cells(layout.anchor_row, "date")?;
        let cell = cells
            .last()
            .ok_or_else(|| Error::html_parse_error("The date row should have at least one cell."))?;
        Ok(cell_text(*cell))
    }

    pub fn meal_grid(&self, layout: &TableLayout, cleanup: TextCleanup) -> Result<MealGrid, Error> {
        let mut slots: [Vec<String>; 4] = Default::default();
        for (slot, texts) in MealSlot::ALL.into_iter().zip(slots.iter_mut()) {
            let cells = self.cells(layout.row_of(slot), slot.name())?;
            let needed = layout.label_columns + DAYS_PER_WEEK;
            if cells.len() < needed {
                return Err(Error::HtmlParse(format!(
                    "The {} row should have {needed} cells but has {}.",
                    slot.name(),
                    cells.len()
                )));
            }
            *texts = cells[layout.label_columns..needed]
                .iter()
                .map(|cell| cleanup.apply(&cell_text(*cell)))
                .collect();
        }
        MealGrid::new(slots)
    }
}

/// Meal texts of one week, one row of `DAYS_PER_WEEK` entries per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealGrid {
    slots: [Vec<String>; 4],
}

impl MealGrid {
    /// Fails unless every slot has exactly `DAYS_PER_WEEK` entries.
    pub fn new(slots: [Vec<String>; 4]) -> Result<Self, Error> {
        for (slot, texts) in MealSlot::ALL.into_iter().zip(&slots) {
            if texts.len() != DAYS_PER_WEEK {
                return Err(Error::HtmlParse(format!(
                    "The {} row should have {DAYS_PER_WEEK} days but has {}.",
                    slot.name(),
                    texts.len()
                )));
            }
        }
        Ok(Self { slots })
    }

    #[cfg(test)]
    pub fn slot(&self, slot: MealSlot) -> &[String] {
        &self.slots[slot as usize]
    }

    /// Rows in `MealSlot::ALL` order.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.slots.into()
    }
}
