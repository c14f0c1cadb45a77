//! HTTP client for the scheduler service.
//!
//! Wraps the four operations the course view needs:
//! 1. GET a course by name
//! 2. GET the viewer's profiles (their enrollments)
//! 3. GET a course's sections
//! 4. POST an enroll request for one section
//!
//! GET failures are surfaced as [`SchedulerError`]; enroll rejections are a
//! normal [`EnrollOutcome`], not an error, since the server reports them with
//! a parseable body.

use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::types::{Course, EnrollResponse, Profile, Section};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

/// Outcome of an enroll attempt, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// 2xx response; the viewer now holds a seat in the section
    Enrolled,
    /// The viewer already holds a section in this course
    AlreadyEnrolled,
    /// No open seats remain
    SectionFull,
    /// Rejected with an unrecognized or absent short code
    Unknown { message: Option<String> },
}

/// Client for the scheduler's course/enrollment endpoints.
pub struct SchedulerClient {
    client: Client,
    config: SchedulerConfig,
}

impl SchedulerClient {
    /// Creates a client with default configuration.
    pub fn new() -> Result<Self, SchedulerError> {
        Self::with_config(SchedulerConfig::default())
    }

    /// Creates a client with custom configuration.
    ///
    /// The cookie jar is enabled so the backend's session cookie survives
    /// across requests; obtaining that session is out of scope here.
    pub fn with_config(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        // Fail at construction on a malformed base URL
        url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SchedulerError::Network {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Fetches a course by its display name.
    pub async fn get_course(&self, name: &str) -> Result<Course, SchedulerError> {
        let url = format!("{}/scheduler/courses/{}", self.base(), name);
        self.get_json(&url).await
    }

    /// Fetches the viewer's enrollments.
    pub async fn get_profiles(&self) -> Result<Vec<Profile>, SchedulerError> {
        let url = format!("{}/scheduler/profiles/", self.base());
        self.get_json(&url).await
    }

    /// Fetches all sections of a course.
    pub async fn get_sections(&self, course_name: &str) -> Result<Vec<Section>, SchedulerError> {
        let url = format!("{}/scheduler/courses/{}/sections/", self.base(), course_name);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SchedulerError> {
        info!(url = %url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "GET failed");
            return Err(SchedulerError::UnexpectedStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| SchedulerError::Decode {
            endpoint: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Attempts to enroll the viewer in a section.
    ///
    /// A non-2xx response is a rejection, not a transport error; the body's
    /// short code picks the [`EnrollOutcome`] variant.
    pub async fn enroll(&self, section_id: i64) -> Result<EnrollOutcome, SchedulerError> {
        let url = format!("{}/scheduler/sections/{}/enroll", self.base(), section_id);
        info!(url = %url, section_id, "POST enroll");

        let response = self.client.post(&url).send().await?;
        let ok = response.status().is_success();
        let status = response.status().as_u16();
        // Rejection bodies that fail to parse classify as Unknown
        let body: EnrollResponse = response.json().await.unwrap_or_default();

        let outcome = classify_enroll(ok, &body);
        match &outcome {
            EnrollOutcome::Enrolled => info!(section_id, "enrolled"),
            other => warn!(section_id, status, outcome = ?other, "enroll rejected"),
        }

        Ok(outcome)
    }
}

/// Maps an enroll response to its outcome. A success status wins regardless
/// of body content; rejection reasons come from the body's short code.
pub fn classify_enroll(ok: bool, body: &EnrollResponse) -> EnrollOutcome {
    if ok {
        return EnrollOutcome::Enrolled;
    }
    match body.short_code.as_deref() {
        Some("already_enrolled") => EnrollOutcome::AlreadyEnrolled,
        Some("section_full") => EnrollOutcome::SectionFull,
        _ => EnrollOutcome::Unknown {
            message: body.message.clone(),
        },
    }
}
