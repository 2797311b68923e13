use crate::model::JobRecord;

/// Default job list used until something has been saved.
pub fn seed_jobs() -> Vec<JobRecord> {
    vec![
        seed(
            1,
            "Senior Frontend Developer (React/Vue)",
            "Innovatech Solutions",
            "https://via.placeholder.com/30/2563eb/ffffff?text=IS",
            "Remote",
            "Full-time",
            "Senior Level",
            "Ksh120,000 - Ksh150,000",
            "Develop and maintain user-facing features using modern JavaScript frameworks. Requires 5+ years of experience and deep knowledge of component-based architecture.",
            "2 days ago",
            true,
        ),
        seed(
            2,
            "Product Designer (UI/UX)",
            "Creative Labs",
            "https://via.placeholder.com/30/10b981/ffffff?text=CL",
            "New York",
            "Contract",
            "Mid Level",
            "Ksh80,000 - Ksh100,000",
            "Design intuitive and beautiful interfaces for web and mobile applications. Proficiency in Figma/Sketch is a must.",
            "1 week ago",
            true,
        ),
        seed(
            3,
            "Junior Backend Engineer (Node.js)",
            "DataStream Inc.",
            "https://via.placeholder.com/30/ef4444/ffffff?text=DS",
            "London",
            "Full-time",
            "Entry Level",
            "Ksh50,000 - Ksh70,000",
            "Assist in building and maintaining scalable RESTful APIs. Knowledge of database design and cloud services is a plus.",
            "3 hours ago",
            false,
        ),
        seed(
            4,
            "Remote Marketing Specialist",
            "Global Growth Co.",
            "https://via.placeholder.com/30/f59e0b/ffffff?text=GG",
            "Remote",
            "Remote",
            "Mid Level",
            "Ksh70,000 - Ksh90,000",
            "Develop and execute digital marketing campaigns across multiple channels.",
            "4 days ago",
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: i64,
    title: &str,
    company: &str,
    logo: &str,
    location: &str,
    employment_type: &str,
    experience_level: &str,
    salary: &str,
    description: &str,
    posted_date: &str,
    is_featured: bool,
) -> JobRecord {
    JobRecord {
        id,
        title: title.to_string(),
        company: company.to_string(),
        logo: Some(logo.to_string()),
        location: location.to_string(),
        employment_type: employment_type.to_string(),
        experience_level: experience_level.to_string(),
        salary: Some(salary.to_string()),
        description: description.to_string(),
        posted_date: Some(posted_date.to_string()),
        expiry_date: None,
        is_featured,
    }
}
