//! Course detail view: state ownership, refresh orchestration, rendering.
//!
//! [`CourseView`] owns the latest known snapshot of one course: the course
//! record, its sections grouped by weekday, and whether the viewer is
//! enrolled. Nothing is mutated in place; a refresh replaces the whole
//! snapshot with what the server returned.

mod day;
mod section;

pub use section::{enroll_in_section, enroll_message, render_section, EnrollReport};

use crate::client::SchedulerClient;
use crate::config::ErrorDisplay;
use crate::error::SchedulerError;
use crate::types::{Course, Profile, Section, Weekday};
use futures::future;
use std::collections::HashMap;
use tracing::{debug, info};

/// One fully-fetched state snapshot, applied wholesale.
#[derive(Debug)]
struct Snapshot {
    course: Course,
    sections: HashMap<Weekday, Vec<Section>>,
    enrolled: bool,
}

/// View state for one course's detail page.
pub struct CourseView {
    course_name: String,
    course: Option<Course>,
    sections: HashMap<Weekday, Vec<Section>>,
    enrolled: bool,
    last_error: Option<String>,
    error_display: ErrorDisplay,
    /// Bumped on every course switch; snapshots from older refreshes are
    /// discarded instead of overwriting newer state.
    generation: u64,
}

impl CourseView {
    pub fn new(course_name: impl Into<String>, error_display: ErrorDisplay) -> Self {
        Self {
            course_name: course_name.into(),
            course: None,
            sections: HashMap::new(),
            enrolled: false,
            last_error: None,
            error_display,
            generation: 0,
        }
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    pub fn enrolled(&self) -> bool {
        self.enrolled
    }

    /// Switches the view to another course. State resets to a name-only
    /// placeholder until the next refresh lands, so the old course's sections
    /// never show under the new name.
    pub fn set_course(&mut self, course_name: impl Into<String>) {
        self.course_name = course_name.into();
        self.course = None;
        self.sections.clear();
        self.enrolled = false;
        self.last_error = None;
        self.generation += 1;
    }

    /// Re-runs the full fetch sequence and applies the result as one
    /// snapshot: course by name first, then the viewer's profiles and the
    /// course's sections concurrently.
    pub async fn refresh(&mut self, client: &SchedulerClient) -> Result<(), SchedulerError> {
        let generation = self.generation;
        let name = self.course_name.clone();
        info!(course = %name, "refreshing course view");

        match fetch_snapshot(client, &name).await {
            Ok(snapshot) => {
                self.apply(generation, snapshot);
                Ok(())
            }
            Err(e) => {
                if generation == self.generation {
                    self.last_error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Applies a snapshot, unless the view has moved on to a newer
    /// generation in the meantime. Returns whether it was applied.
    fn apply(&mut self, generation: u64, snapshot: Snapshot) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "discarding superseded snapshot"
            );
            return false;
        }
        self.course = Some(snapshot.course);
        self.sections = snapshot.sections;
        self.enrolled = snapshot.enrolled;
        self.last_error = None;
        true
    }

    /// Looks up a section in the current snapshot by id.
    pub fn find_section(&self, section_id: i64) -> Option<&Section> {
        self.sections
            .values()
            .flatten()
            .find(|s| s.id == section_id)
    }

    /// Renders the whole view as text: course header, optional error banner,
    /// then one group per weekday in fixed Monday-first order.
    pub fn render(&self) -> String {
        let mut out = format!("# {}", self.course_name);
        if self.enrolled {
            out.push_str(" (enrolled)");
        }
        out.push('\n');

        if self.error_display == ErrorDisplay::Banner {
            if let Some(err) = &self.last_error {
                out.push_str(&format!("! refresh failed: {err}\n"));
            }
        }
        out.push('\n');

        let mut days: Vec<Weekday> = self.sections.keys().copied().collect();
        days.sort_by_key(|d| d.order_index());
        for day in days {
            if let Some(sections) = self.sections.get(&day) {
                out.push_str(&day::render_day(day, sections));
                out.push('\n');
            }
        }
        out
    }
}

async fn fetch_snapshot(
    client: &SchedulerClient,
    course_name: &str,
) -> Result<Snapshot, SchedulerError> {
    let course = client.get_course(course_name).await?;

    // Both depend only on the completed course fetch; run them together
    let (profiles, sections) =
        future::try_join(client.get_profiles(), client.get_sections(course_name)).await?;

    Ok(Snapshot {
        enrolled: is_enrolled(&profiles, course.id),
        sections: group_by_weekday(sections),
        course,
    })
}

/// True iff any of the viewer's enrollments reference the given course.
fn is_enrolled(profiles: &[Profile], course_id: i64) -> bool {
    profiles.iter().any(|p| p.course == course_id)
}

/// Groups sections by their default meeting day. Within a group, fetch order
/// is kept; rendering re-sorts by start time.
fn group_by_weekday(sections: Vec<Section>) -> HashMap<Weekday, Vec<Section>> {
    let mut grouped: HashMap<Weekday, Vec<Section>> = HashMap::new();
    for section in sections {
        grouped
            .entry(section.default_spacetime.day_of_week)
            .or_default()
            .push(section);
    }
    grouped
}
