//! Wire types for the scheduler API.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock format used by the scheduler API (24-hour).
pub const API_TIME_FORMAT: &str = "%H:%M:%S";

/// 12-hour format used for display.
pub const DISPLAY_TIME_FORMAT: &str = "%I:%M %p";

/// A course as returned by `GET /scheduler/courses/{name}`.
///
/// Immutable once fetched; replaced wholesale on re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// Day of the week as labeled by the scheduler API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Fixed Monday-first ordering for weekday groups in the rendered view.
pub const DAY_ORDER: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Position of this day in the fixed display ordering.
    pub fn order_index(self) -> usize {
        DAY_ORDER
            .iter()
            .position(|d| *d == self)
            .unwrap_or(DAY_ORDER.len())
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where and when a section meets by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacetime {
    pub day_of_week: Weekday,
    /// Wall-clock start time, `HH:mm:ss` on the wire
    pub start_time: String,
    pub location: String,
}

impl Spacetime {
    /// Parses the wire start time, if well-formed.
    pub fn parsed_start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.start_time, API_TIME_FORMAT).ok()
    }

    /// 12-hour display form of the start time, falling back to the raw wire
    /// string when it does not parse.
    pub fn display_start_time(&self) -> String {
        match self.parsed_start_time() {
            Some(t) => t.format(DISPLAY_TIME_FORMAT).to_string(),
            None => self.start_time.clone(),
        }
    }
}

/// A section as returned by `GET /scheduler/courses/{name}/sections/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: i64,
    pub capacity: i64,
    pub enrolled_students: i64,
    pub default_spacetime: Spacetime,
}

impl Section {
    /// Remaining open spots. Negative when a section is over-enrolled; the
    /// view still renders that.
    pub fn available(&self) -> i64 {
        self.capacity - self.enrolled_students
    }
}

/// One enrollment of the viewer, from `GET /scheduler/profiles/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Identifier of the course this enrollment belongs to
    pub course: i64,
}

/// Body of an enroll response. Both fields are absent on success and may be
/// absent on failure; rejection reasons arrive in `short_code`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollResponse {
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_order_is_monday_first() {
        assert_eq!(Weekday::Monday.order_index(), 0);
        assert_eq!(Weekday::Sunday.order_index(), 6);
        assert!(Weekday::Tuesday.order_index() < Weekday::Saturday.order_index());
    }

    #[test]
    fn test_section_decodes_from_wire_json() {
        let json = r#"{
            "id": 42,
            "capacity": 5,
            "enrolledStudents": 4,
            "defaultSpacetime": {
                "dayOfWeek": "Wednesday",
                "startTime": "13:30:00",
                "location": "Soda 283F"
            }
        }"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.id, 42);
        assert_eq!(section.available(), 1);
        assert_eq!(section.default_spacetime.day_of_week, Weekday::Wednesday);
        assert_eq!(section.default_spacetime.location, "Soda 283F");
    }

    #[test]
    fn test_available_can_go_negative() {
        let section: Section = serde_json::from_str(
            r#"{"id":1,"capacity":3,"enrolledStudents":5,
                "defaultSpacetime":{"dayOfWeek":"Monday","startTime":"09:00:00","location":"Cory 540"}}"#,
        )
        .unwrap();
        assert_eq!(section.available(), -2);
    }

    #[test]
    fn test_start_time_formats_as_12_hour() {
        let spacetime = Spacetime {
            day_of_week: Weekday::Monday,
            start_time: "13:30:00".to_string(),
            location: "Soda 283F".to_string(),
        };
        assert_eq!(spacetime.display_start_time(), "01:30 PM");

        let morning = Spacetime {
            start_time: "09:05:00".to_string(),
            ..spacetime.clone()
        };
        assert_eq!(morning.display_start_time(), "09:05 AM");
    }

    #[test]
    fn test_unparsable_start_time_falls_back_to_raw() {
        let spacetime = Spacetime {
            day_of_week: Weekday::Friday,
            start_time: "sometime".to_string(),
            location: "TBD".to_string(),
        };
        assert!(spacetime.parsed_start_time().is_none());
        assert_eq!(spacetime.display_start_time(), "sometime");
    }

    #[test]
    fn test_enroll_response_fields_are_optional() {
        let empty: EnrollResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.short_code.is_none());
        assert!(empty.message.is_none());

        let full: EnrollResponse =
            serde_json::from_str(r#"{"shortCode":"section_full","message":"no room"}"#).unwrap();
        assert_eq!(full.short_code.as_deref(), Some("section_full"));
        assert_eq!(full.message.as_deref(), Some("no room"));
    }
}
