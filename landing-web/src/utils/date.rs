//! Browser clock helpers

use shared::copyright_line;

use super::constants::OWNER_NAME;

/// Current year from the browser clock.
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Footer notice for the current year.
pub fn footer_text() -> String {
    copyright_line(current_year(), OWNER_NAME)
}
