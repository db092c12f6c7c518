#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;
use storefront::prelude::*;

pub fn fixed_layout(y: i32, m: u32, d: u32, variant: NavVariant) -> LayoutService {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    LayoutService::with_clock(Arc::new(FixedClock::new(date))).with_variant(variant)
}

pub fn create_test_state(variant: NavVariant) -> AppState {
    AppState::new(Arc::new(fixed_layout(2024, 6, 1, variant)))
}
