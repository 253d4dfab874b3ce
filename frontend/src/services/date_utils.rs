use shared::CalendarMonth;

/// Calendar month for the browser's current local date
pub fn current_calendar_month() -> CalendarMonth {
    use js_sys::Date;
    let now = Date::new_0();

    CalendarMonth {
        year: now.get_full_year() as i32,
        month: now.get_month() + 1, // JavaScript months are 0-indexed
        today: now.get_date(),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_current_calendar_month_is_consistent() {
        let calendar = current_calendar_month();
        assert!((1..=12).contains(&calendar.month));
        assert!(calendar.today >= 1 && calendar.today <= calendar.days_in_month());
        assert!(calendar.is_bookable(calendar.today));
    }
}
