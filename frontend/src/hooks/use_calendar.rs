use yew::prelude::*;
use shared::CalendarMonth;
use crate::services::date_utils::current_calendar_month;

/// The month on screen. Read from the clock once at mount and never navigated.
#[hook]
pub fn use_calendar() -> CalendarMonth {
    let calendar = use_state(current_calendar_month);
    *calendar
}
