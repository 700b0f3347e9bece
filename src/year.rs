use chrono::{Datelike, Local};
use log::debug;

use crate::page::Page;

pub const YEAR_SELECTOR: &str = "#year";

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Writes `year` into the footer year slot. Returns whether one was found.
pub fn mount(page: &dyn Page, year: i32) -> bool {
    match page.find(YEAR_SELECTOR) {
        Some(slot) => {
            slot.set_text(&year.to_string());
            true
        }
        None => {
            debug!("No footer year slot");
            false
        }
    }
}
