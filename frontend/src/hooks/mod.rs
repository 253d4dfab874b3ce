pub mod use_booking_form;
pub mod use_bookings;
pub mod use_calendar;
