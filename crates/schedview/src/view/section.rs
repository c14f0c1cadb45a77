//! Rendering and enroll handling for a single section.

use crate::client::{EnrollOutcome, SchedulerClient};
use crate::error::SchedulerError;
use crate::types::Section;
use tracing::warn;

/// What the view reports after an enroll attempt resolves.
#[derive(Debug, Clone)]
pub struct EnrollReport {
    /// Fixed user-facing message for this outcome
    pub message: String,
    pub outcome: EnrollOutcome,
}

/// Renders one section as an indented block:
/// location and 12-hour start time, then counts and remaining spots.
pub fn render_section(section: &Section) -> String {
    let spacetime = &section.default_spacetime;
    let available = section.available();
    format!(
        "  [{id}] {location} - {time}\n      {enrolled}/{capacity} - {available} {word} available\n",
        id = section.id,
        location = spacetime.location,
        time = spacetime.display_start_time(),
        enrolled = section.enrolled_students,
        capacity = section.capacity,
        available = available,
        word = spot_word(available),
    )
}

/// Singular only for exactly one remaining spot; zero and negative counts
/// still read "spots".
pub(crate) fn spot_word(available: i64) -> &'static str {
    if available == 1 {
        "spot"
    } else {
        "spots"
    }
}

/// Fixed user-facing message for an enroll outcome against this section.
pub fn enroll_message(outcome: &EnrollOutcome, section: &Section) -> String {
    match outcome {
        EnrollOutcome::Enrolled => format!(
            "You've successfully enrolled in section {} at {}, {}",
            section.id,
            section.default_spacetime.location,
            section.default_spacetime.display_start_time()
        ),
        EnrollOutcome::AlreadyEnrolled => {
            "You are already enrolled in this course. \
             You can only enroll in one section per course."
                .to_string()
        }
        EnrollOutcome::SectionFull => {
            "This section is full. Please try enrolling in another section.".to_string()
        }
        EnrollOutcome::Unknown { .. } => "An unknown error has occurred.".to_string(),
    }
}

/// Issues the enroll request for `section` and reports the outcome.
///
/// Once the server has answered, `update` fires exactly once whether the
/// attempt succeeded or was rejected, so the parent re-fetches server truth.
/// A transport error propagates without firing `update`.
pub async fn enroll_in_section<F>(
    client: &SchedulerClient,
    section: &Section,
    update: F,
) -> Result<EnrollReport, SchedulerError>
where
    F: FnMut(),
{
    let outcome = client.enroll(section.id).await?;
    Ok(complete_enroll(outcome, section, update))
}

fn complete_enroll<F>(outcome: EnrollOutcome, section: &Section, mut update: F) -> EnrollReport
where
    F: FnMut(),
{
    if let EnrollOutcome::Unknown {
        message: Some(detail),
    } = &outcome
    {
        warn!(section_id = section.id, detail = %detail, "unrecognized enroll rejection");
    }

    update();

    EnrollReport {
        message: enroll_message(&outcome, section),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Spacetime, Weekday};

    fn section() -> Section {
        Section {
            id: 7,
            capacity: 5,
            enrolled_students: 4,
            default_spacetime: Spacetime {
                day_of_week: Weekday::Thursday,
                start_time: "14:00:00".to_string(),
                location: "Soda 283F".to_string(),
            },
        }
    }

    #[test]
    fn test_spot_word_pluralization() {
        assert_eq!(spot_word(1), "spot");
        assert_eq!(spot_word(0), "spots");
        assert_eq!(spot_word(2), "spots");
        assert_eq!(spot_word(-3), "spots");
    }

    #[test]
    fn test_render_includes_counts_and_time() {
        let rendered = render_section(&section());
        assert!(rendered.contains("Soda 283F - 02:00 PM"));
        assert!(rendered.contains("4/5 - 1 spot available"));
    }

    #[test]
    fn test_render_over_enrolled_section() {
        let mut over = section();
        over.enrolled_students = 7;
        let rendered = render_section(&over);
        assert!(rendered.contains("7/5 - -2 spots available"));
    }

    #[test]
    fn test_success_message_names_location_and_time() {
        let message = enroll_message(&EnrollOutcome::Enrolled, &section());
        assert!(message.contains("section 7"));
        assert!(message.contains("Soda 283F"));
        assert!(message.contains("02:00 PM"));
    }

    #[test]
    fn test_rejection_messages_are_fixed() {
        let section = section();
        assert_eq!(
            enroll_message(&EnrollOutcome::SectionFull, &section),
            "This section is full. Please try enrolling in another section."
        );
        assert!(enroll_message(&EnrollOutcome::AlreadyEnrolled, &section)
            .starts_with("You are already enrolled in this course."));
        assert_eq!(
            enroll_message(&EnrollOutcome::Unknown { message: None }, &section),
            "An unknown error has occurred."
        );
    }

    #[test]
    fn test_update_fires_exactly_once_per_outcome() {
        let section = section();
        for outcome in [
            EnrollOutcome::Enrolled,
            EnrollOutcome::AlreadyEnrolled,
            EnrollOutcome::SectionFull,
            EnrollOutcome::Unknown { message: None },
        ] {
            let mut fired = 0;
            let report = complete_enroll(outcome.clone(), &section, || fired += 1);
            assert_eq!(fired, 1, "update must fire once for {outcome:?}");
            assert_eq!(report.outcome, outcome);
        }
    }
}
