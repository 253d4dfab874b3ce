pub mod booking_modal;
pub mod calendar;
pub mod header;
