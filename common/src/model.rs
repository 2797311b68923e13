use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Logo shown for postings that were submitted without one.
pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/30/64748b/ffffff?text=Co";

/// Salary label shown when a posting has no salary text.
pub const COMPETITIVE: &str = "Competitive";

/// Days a posting stays open when no expiry date was given.
pub const DEFAULT_EXPIRY_DAYS: u64 = 30;

/// One job posting as it is persisted.
///
/// Field names on the wire match the stored blob (`type`, `experience`,
/// `salary`, `isFeatured`, ...), so existing saved lists load unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: i64,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    #[serde(rename = "experience")]
    pub experience_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl JobRecord {
    pub fn logo_url(&self) -> &str {
        non_blank(self.logo.as_deref()).unwrap_or(PLACEHOLDER_LOGO)
    }

    pub fn salary_label(&self) -> &str {
        non_blank(self.salary.as_deref()).unwrap_or(COMPETITIVE)
    }

    /// Salary text used for range filtering; empty when absent.
    pub fn salary_text(&self) -> &str {
        self.salary.as_deref().unwrap_or_default()
    }

    /// Expiry date, or `today` plus the default window when the stored
    /// value is missing or not a `YYYY-MM-DD` date.
    pub fn expires_on(&self, today: NaiveDate) -> NaiveDate {
        non_blank(self.expiry_date.as_deref())
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .or_else(|| today.checked_add_days(Days::new(DEFAULT_EXPIRY_DAYS)))
            .unwrap_or(today)
    }
}

/// A posting as submitted through the "post a job" form.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: String,
    #[serde(rename = "experience")]
    pub experience_level: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl NewJob {
    /// Blank optional inputs are dropped so defaults apply at display time.
    pub fn into_record(self, id: i64) -> JobRecord {
        JobRecord {
            id,
            title: self.title,
            company: self.company,
            logo: blank_to_none(self.logo),
            location: self.location,
            employment_type: self.employment_type,
            experience_level: self.experience_level,
            salary: blank_to_none(self.salary),
            description: self.description,
            posted_date: Some("Just now".to_string()),
            expiry_date: blank_to_none(self.expiry_date),
            is_featured: false,
        }
    }
}

/// Creation-timestamp id, moved past the largest existing id on collision.
/// `None` when the largest existing id is already `i64::MAX`.
pub fn next_id(now_millis: i64, existing: &[JobRecord]) -> Option<i64> {
    match existing.iter().map(|job| job.id).max() {
        Some(max) if max >= now_millis => max.checked_add(1),
        _ => Some(now_millis),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> JobRecord {
        NewJob {
            title: "Data Analyst".into(),
            company: "Savanna Analytics".into(),
            logo: Some("   ".into()),
            location: "Nairobi".into(),
            salary: Some(String::new()),
            employment_type: "Full-time".into(),
            experience_level: "Mid Level".into(),
            expiry_date: None,
            description: "Build dashboards.".into(),
        }
        .into_record(42)
    }

    #[test]
    fn test_submission_defaults() {
        let job = record();
        assert_eq!(job.id, 42);
        assert!(!job.is_featured);
        assert_eq!(job.posted_date.as_deref(), Some("Just now"));
        assert_eq!(job.logo, None);
        assert_eq!(job.logo_url(), PLACEHOLDER_LOGO);
        assert_eq!(job.salary_label(), "Competitive");
        assert_eq!(job.salary_text(), "");
    }

    #[test]
    fn test_expiry_falls_back_to_thirty_days() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut job = record();
        assert_eq!(job.expires_on(today), NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());

        job.expiry_date = Some("not a date".into());
        assert_eq!(job.expires_on(today), NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());

        job.expiry_date = Some("2024-03-01".into());
        assert_eq!(job.expires_on(today), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_next_id_stays_unique() {
        let mut existing = vec![record()];
        existing[0].id = 1_000;
        assert_eq!(next_id(5_000, &existing), Some(5_000));
        assert_eq!(next_id(1_000, &existing), Some(1_001));
        assert_eq!(next_id(10, &[]), Some(10));
    }

    #[test]
    fn test_next_id_at_max() {
        let mut existing = vec![record()];
        existing[0].id = i64::MAX;
        assert_eq!(next_id(1_000, &existing), None);
        assert_eq!(next_id(i64::MAX, &existing), None);
    }

    #[test]
    fn test_stored_blob_field_names() {
        let json = r#"{
            "id": 7,
            "title": "Remote Marketing Specialist",
            "company": "Global Growth Co.",
            "location": "Remote",
            "type": "Remote",
            "experience": "Mid Level",
            "salary": "Ksh70,000 - Ksh90,000",
            "description": "Campaigns.",
            "postedDate": "4 days ago"
        }"#;
        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.employment_type, "Remote");
        assert_eq!(job.experience_level, "Mid Level");
        assert!(!job.is_featured);
        assert_eq!(job.logo, None);

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["isFeatured"], false);
        assert_eq!(value["type"], "Remote");
        assert!(value.get("logo").is_none());
    }
}
