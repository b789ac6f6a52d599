pub mod back_to_top;
pub mod contact_form;
pub mod navbar;
pub mod stat_counter;
pub mod tilt_card;
