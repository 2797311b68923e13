//! The job store: owns the persisted job list.

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::model::{JobRecord, NewJob, next_id};
use crate::seed::seed_jobs;
use crate::storage::Storage;

/// Storage key the job list is saved under.
pub const JOBS_KEY: &str = "kaziConnectJobs";

pub struct JobStore<S> {
    storage: S,
}

impl<S: Storage> JobStore<S> {
    pub fn new(storage: S) -> Self {
        JobStore { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Returns the saved job list, or the seed list when nothing usable is saved.
    pub fn load(&self) -> Vec<JobRecord> {
        let content = match self.storage.get_item(JOBS_KEY) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!("no saved jobs, using seed data");
                return seed_jobs();
            }
            Err(e) => {
                warn!(error = %e, "failed to read saved jobs, using seed data");
                return seed_jobs();
            }
        };

        match serde_json::from_str::<Vec<JobRecord>>(&content) {
            Ok(jobs) => {
                debug!(count = jobs.len(), "loaded saved jobs");
                jobs
            }
            Err(e) => {
                warn!(error = %e, "saved jobs are unreadable, using seed data");
                seed_jobs()
            }
        }
    }

    /// Replaces the saved job list with `jobs`.
    pub fn save(&mut self, jobs: &[JobRecord]) -> Result<(), StoreError> {
        let json_output = serde_json::to_string(jobs)?;
        self.storage.set_item(JOBS_KEY, &json_output)?;
        info!(count = jobs.len(), "saved jobs");
        Ok(())
    }

    /// Publishes a submitted posting: assigns an id, prepends it and saves.
    pub fn publish(&mut self, submission: NewJob, now_millis: i64) -> Result<JobRecord, StoreError> {
        let jobs = self.load();
        let id = next_id(now_millis, &jobs).ok_or(StoreError::IdsExhausted(i64::MAX))?;
        let record = submission.into_record(id);
        let jobs = add_job(record.clone(), jobs);
        self.save(&jobs)?;
        info!(id = record.id, title = %record.title, "published job");
        Ok(record)
    }

    pub fn find(&self, id: i64) -> Option<JobRecord> {
        self.load().into_iter().find(|job| job.id == id)
    }
}

/// Returns `jobs` with `record` in front. The caller still has to save.
pub fn add_job(record: JobRecord, mut jobs: Vec<JobRecord>) -> Vec<JobRecord> {
    jobs.insert(0, record);
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    fn submission(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            company: "Kilimo Tech".to_string(),
            location: "Nairobi".to_string(),
            salary: Some("Ksh90,000 - Ksh110,000".to_string()),
            employment_type: "Full-time".to_string(),
            experience_level: "Senior Level".to_string(),
            description: "Lead the platform team.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_without_saved_state_returns_seed() {
        let store = JobStore::new(MemoryStorage::new());
        assert_eq!(store.load(), seed_jobs());
    }

    #[test]
    fn test_load_corrupt_blob_returns_seed() {
        let mut storage = MemoryStorage::new();
        storage.set_item(JOBS_KEY, "{not json").unwrap();
        let store = JobStore::new(storage);
        assert_eq!(store.load(), seed_jobs());
    }

    #[test]
    fn test_add_job_prepends() {
        let jobs = seed_jobs();
        let record = submission("Platform Lead").into_record(99);
        let jobs = add_job(record.clone(), jobs);
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs[0], record);
        assert_eq!(jobs[1].id, 1);
    }

    #[test]
    fn test_add_then_save_then_load() {
        let dir = tempdir().unwrap();
        let mut store = JobStore::new(FileStorage::new(dir.path()));
        let before = store.load();

        let record = submission("Platform Lead").into_record(1_700_000_000_000);
        let jobs = add_job(record.clone(), before.clone());
        store.save(&jobs).unwrap();

        let reopened = JobStore::new(FileStorage::new(dir.path()));
        let after = reopened.load();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0], record);
    }

    #[test]
    fn test_publish_assigns_unique_ids() {
        let mut store = JobStore::new(MemoryStorage::new());
        let first = store.publish(submission("First"), 1_000).unwrap();
        let second = store.publish(submission("Second"), 1_000).unwrap();

        assert_eq!(first.id, 1_000);
        assert_eq!(second.id, 1_001);
        assert!(!second.is_featured);

        let jobs = store.load();
        assert_eq!(jobs.len(), 6);
        assert_eq!(jobs[0].title, "Second");
        assert_eq!(jobs[1].title, "First");
        assert_eq!(store.find(1_000).map(|job| job.title), Some("First".to_string()));
        assert_eq!(store.find(-1), None);
    }

    #[test]
    fn test_publish_with_max_id_fails_without_saving() {
        let mut store = JobStore::new(MemoryStorage::new());
        let mut jobs = seed_jobs();
        jobs[0].id = i64::MAX;
        store.save(&jobs).unwrap();

        let result = store.publish(submission("Overflow"), 1_000);
        assert!(matches!(result, Err(StoreError::IdsExhausted(i64::MAX))));
        assert_eq!(store.load(), jobs);
    }
}
