//! Plain-text job cards for terminal output.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::model::JobRecord;

pub const EMPTY_STATE: &str = "No Jobs Found\nTry adjusting your search or filter criteria. We're constantly adding new openings!";

pub fn render_card(job: &JobRecord, today: NaiveDate) -> String {
    let mut card = String::new();
    let star = if job.is_featured { "★ " } else { "" };
    let _ = writeln!(card, "{star}[{}] [{}] #{}", job.employment_type, job.experience_level, job.id);
    let _ = writeln!(card, "{}", job.title);
    let _ = writeln!(card, "  {} ({})", job.company, job.logo_url());
    let _ = writeln!(card, "  📍 {}   💰 {}", job.location, job.salary_label());
    if !job.description.is_empty() {
        let _ = writeln!(card, "  {}", job.description);
    }
    let _ = write!(card, "  Expires: {}", job.expires_on(today).format("%Y-%m-%d"));
    card
}

/// A titled list of cards, or the empty-state message when there are none.
pub fn render_section(title: &str, jobs: &[&JobRecord], today: NaiveDate) -> String {
    let mut section = format!("== {title} ({}) ==\n", jobs.len());
    if jobs.is_empty() {
        section.push_str(EMPTY_STATE);
        section.push('\n');
        return section;
    }

    for job in jobs {
        section.push_str(&render_card(job, today));
        section.push_str("\n\n");
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_jobs;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_card_uses_defaults() {
        let mut job = seed_jobs().remove(2);
        job.salary = None;
        job.logo = None;

        let card = render_card(&job, today());
        assert!(card.starts_with("[Full-time] [Entry Level] #3\n"));
        assert!(card.contains("💰 Competitive"));
        assert!(card.contains("text=Co"));
        assert!(card.ends_with("Expires: 2024-07-01"));
    }

    #[test]
    fn test_featured_card_is_marked() {
        let job = &seed_jobs()[0];
        assert!(render_card(job, today()).starts_with("★ "));
    }

    #[test]
    fn test_empty_section() {
        let section = render_section("Featured Jobs", &[], today());
        assert!(section.starts_with("== Featured Jobs (0) ==\n"));
        assert!(section.contains("No Jobs Found"));
    }

    #[test]
    fn test_section_lists_cards_in_order() {
        let jobs = seed_jobs();
        let refs: Vec<&JobRecord> = jobs.iter().collect();
        let section = render_section("All Jobs", &refs, today());
        let first = section.find("Innovatech").unwrap();
        let last = section.find("Global Growth").unwrap();
        assert!(first < last);
    }
}
