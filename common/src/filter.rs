//! Query evaluator: narrows a job list down to the featured and full feeds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FilterError;
use crate::model::JobRecord;
use crate::salary::{SalaryRange, salary_floor};

/// How the location filter compares against a posting's location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationMatch {
    #[default]
    Exact,
    Substring,
}

impl FromStr for LocationMatch {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(LocationMatch::Exact),
            "substring" => Ok(LocationMatch::Substring),
            _ => Err(FilterError::InvalidLocationMatch(s.to_string())),
        }
    }
}

impl fmt::Display for LocationMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LocationMatch::Exact => "exact",
            LocationMatch::Substring => "substring",
        })
    }
}

/// Active filter criteria. `None` on a dropdown filter means "any".
///
/// The default value matches every job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub query: String,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub location: Option<String>,
    pub salary: Option<SalaryRange>,
    pub location_match: LocationMatch,
}

impl FilterSpec {
    /// Builds a filter from raw widget values, where an empty string is "any".
    pub fn from_inputs(
        query: &str,
        employment_type: &str,
        experience_level: &str,
        location: &str,
        salary: &str,
    ) -> Result<Self, FilterError> {
        Ok(FilterSpec {
            query: query.trim().to_string(),
            employment_type: any_if_empty(employment_type),
            experience_level: any_if_empty(experience_level),
            location: any_if_empty(location),
            salary: SalaryRange::parse_optional(salary)?,
            location_match: LocationMatch::default(),
        })
    }

    pub fn with_location_match(mut self, mode: LocationMatch) -> Self {
        self.location_match = mode;
        self
    }

    /// True when every predicate is open.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
            && self.employment_type.is_none()
            && self.experience_level.is_none()
            && self.location.is_none()
            && self.salary.is_none()
    }

    pub fn matches(&self, job: &JobRecord) -> bool {
        self.matches_text(job)
            && exact_or_any(self.employment_type.as_deref(), &job.employment_type)
            && exact_or_any(self.experience_level.as_deref(), &job.experience_level)
            && self.matches_location(job)
            && self.matches_salary(job)
    }

    fn matches_text(&self, job: &JobRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        [&job.title, &job.company, &job.description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_location(&self, job: &JobRecord) -> bool {
        match (self.location.as_deref(), self.location_match) {
            (None, _) => true,
            (Some(wanted), LocationMatch::Exact) => job.location == wanted,
            (Some(wanted), LocationMatch::Substring) => job.location.contains(wanted),
        }
    }

    fn matches_salary(&self, job: &JobRecord) -> bool {
        match &self.salary {
            None => true,
            Some(range) => range.contains(salary_floor(job.salary_text())),
        }
    }
}

/// Result of evaluating a filter: both views keep the input order, and
/// `all` includes the featured jobs too.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Feed<'a> {
    pub featured: Vec<&'a JobRecord>,
    pub all: Vec<&'a JobRecord>,
}

/// Applies `spec` to `jobs` without side effects.
pub fn evaluate<'a>(jobs: &'a [JobRecord], spec: &FilterSpec) -> Feed<'a> {
    let all: Vec<&JobRecord> = jobs.iter().filter(|job| spec.matches(job)).collect();
    let featured = all.iter().copied().filter(|job| job.is_featured).collect();
    Feed { featured, all }
}

fn exact_or_any(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|wanted| wanted == actual)
}

// Blank means "any"; anything else is compared verbatim.
fn any_if_empty(raw: &str) -> Option<String> {
    (!raw.trim().is_empty()).then(|| raw.to_string())
}
