//! Per-weekday section group rendering.

use super::section::render_section;
use crate::types::{Section, Weekday};

/// Renders one weekday group: the day label followed by its sections in
/// ascending start-time order.
pub fn render_day(day: Weekday, sections: &[Section]) -> String {
    let mut ordered: Vec<&Section> = sections.iter().collect();
    sort_by_start_time(&mut ordered);

    let mut out = format!("{day}\n");
    for section in ordered {
        out.push_str(&render_section(section));
    }
    out
}

/// Sorts sections ascending by parsed start time. Unparsable times sort last.
pub(crate) fn sort_by_start_time(sections: &mut [&Section]) {
    sections.sort_by_key(|s| {
        let time = s.default_spacetime.parsed_start_time();
        (time.is_none(), time)
    });
}
