//! Copyright notice derived from the brand and the current year.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::domain::entities::Brand;

/// `© <brand> <year>`, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyrightNotice {
    brand: String,
    year: i32,
}

impl CopyrightNotice {
    /// Builds the notice for the calendar year of `today`.
    pub fn for_date(brand: &Brand, today: NaiveDate) -> Self {
        Self {
            brand: brand.name().to_string(),
            year: today.year(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for CopyrightNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "© {} {}", self.brand, self.year)
    }
}
