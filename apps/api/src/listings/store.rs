//! In-memory listing store.
//!
//! The store is constructed once at startup and handed to handlers through
//! `AppState`. Ids are `size + 1` as a decimal string; listings are never
//! removed, so ids cannot collide.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::listings::seed::sample_jobs;
use crate::models::job::{Job, JobFilters, NewJob};

#[derive(Debug, Default)]
pub struct JobStore {
    // Insertion order; index i holds id i + 1.
    jobs: RwLock<Vec<Job>>,
}

impl JobStore {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the fixed sample listings.
    pub fn with_sample_jobs() -> Self {
        Self {
            jobs: RwLock::new(sample_jobs()),
        }
    }

    /// Jobs matching every supplied filter, most recently posted first.
    pub fn list(&self, filters: Option<&JobFilters>) -> Vec<Job> {
        let jobs = self.read();
        let mut matched: Vec<Job> = jobs
            .iter()
            .rev()
            .filter(|job| filters.map_or(true, |f| f.matches(job)))
            .cloned()
            .collect();
        // Stable sort over reversed insertion order: later inserts win ties.
        matched.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        matched
    }

    pub fn get_by_id(&self, id: &str) -> Option<Job> {
        self.read().iter().find(|job| job.id == id).cloned()
    }

    pub fn insert(&self, new_job: NewJob) -> Job {
        self.insert_at(new_job, Utc::now())
    }

    /// Inserts with an explicit clock reading. The stored `posted_date` is
    /// clamped to the latest existing one so it never goes backwards.
    pub(crate) fn insert_at(&self, new_job: NewJob, now: DateTime<Utc>) -> Job {
        let mut jobs = self.write();

        let posted_date = jobs
            .iter()
            .map(|job| job.posted_date)
            .max()
            .map_or(now, |latest| latest.max(now));

        let job = Job {
            id: (jobs.len() + 1).to_string(),
            title: new_job.title,
            company: new_job.company,
            location: new_job.location,
            description: new_job.description,
            category: new_job.category,
            employment_type: new_job.employment_type,
            posted_date,
        };

        jobs.push(job.clone());
        job
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave a half-written Vec behind,
    // so a poisoned lock is still safe to read.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Job>> {
        self.jobs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Job>> {
        self.jobs.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::EmploymentType;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    fn new_job(title: &str, category: &str, employment_type: EmploymentType) -> NewJob {
        NewJob {
            title: title.to_string(),
            company: "Acme Corp".to_string(),
            location: "Remote".to_string(),
            description: "A role with plenty of interesting work.".to_string(),
            category: category.to_string(),
            employment_type,
        }
    }

    fn assert_sorted_desc(jobs: &[Job]) {
        for pair in jobs.windows(2) {
            assert!(
                pair[0].posted_date >= pair[1].posted_date,
                "{} posted before {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_sample_store_lists_newest_first() {
        let store = JobStore::with_sample_jobs();
        let jobs = store.list(None);
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs[0].id, "5");
        assert_eq!(jobs[4].id, "1");
        assert_sorted_desc(&jobs);
    }

    #[test]
    fn test_list_with_no_matches_is_empty() {
        let store = JobStore::with_sample_jobs();
        let filters = JobFilters {
            query: Some("quantum basket weaving".to_string()),
            ..Default::default()
        };
        assert!(store.list(Some(&filters)).is_empty());
    }

    #[test]
    fn test_list_filters_are_conjunctive() {
        let store = JobStore::with_sample_jobs();
        let combos = [
            JobFilters {
                query: Some("team".to_string()),
                ..Default::default()
            },
            JobFilters {
                query: Some("team".to_string()),
                employment_type: Some("Full-time".to_string()),
                ..Default::default()
            },
            JobFilters {
                location: Some("remote".to_string()),
                category: Some("Design".to_string()),
                ..Default::default()
            },
            JobFilters {
                category: Some("all".to_string()),
                employment_type: Some("Internship".to_string()),
                ..Default::default()
            },
        ];

        let all = store.list(None);
        for filters in &combos {
            let listed = store.list(Some(filters));
            assert_sorted_desc(&listed);
            let expected: Vec<&str> = all
                .iter()
                .filter(|j| filters.matches(j))
                .map(|j| j.id.as_str())
                .collect();
            let got: Vec<&str> = listed.iter().map(|j| j.id.as_str()).collect();
            assert_eq!(got, expected, "filters: {filters:?}");
        }
    }

    #[test]
    fn test_list_by_location_substring() {
        let store = JobStore::with_sample_jobs();
        let filters = JobFilters {
            location: Some(", ma".to_string()),
            ..Default::default()
        };
        let jobs = store.list(Some(&filters));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "AI Forward");
    }

    #[test]
    fn test_get_by_id_returns_inserted_job() {
        let store = JobStore::with_sample_jobs();
        let inserted = store.insert(new_job("Platform Engineer", "Engineering", EmploymentType::FullTime));
        assert_eq!(inserted.id, "6");
        assert_eq!(store.get_by_id(&inserted.id), Some(inserted));
    }

    #[test]
    fn test_get_by_id_missing_is_none() {
        let store = JobStore::with_sample_jobs();
        assert!(store.get_by_id("999").is_none());
        assert!(store.get_by_id("").is_none());
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let store = JobStore::empty();
        assert!(store.is_empty());
        for i in 0..20 {
            store.insert(new_job(&format!("Role {i}"), "Other", EmploymentType::Contract));
        }
        let ids: HashSet<String> = store.list(None).into_iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(store.len(), 20);
    }

    #[test]
    fn test_posted_date_never_goes_backwards() {
        let store = JobStore::empty();
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let first = store.insert_at(new_job("First", "Other", EmploymentType::FullTime), t0);
        // Clock stepped backwards between inserts.
        let second = store.insert_at(
            new_job("Second", "Other", EmploymentType::FullTime),
            t0 - Duration::hours(1),
        );
        assert_eq!(first.posted_date, t0);
        assert!(second.posted_date >= first.posted_date);

        // Equal timestamps: the later insertion is listed first.
        let listed = store.list(None);
        assert_eq!(listed[0].id, "2");
        assert_eq!(listed[1].id, "1");
    }

    #[test]
    fn test_insert_after_seed_is_newest() {
        let store = JobStore::with_sample_jobs();
        let inserted = store.insert(new_job("Support Lead", "Customer Support", EmploymentType::PartTime));
        let listed = store.list(None);
        assert_eq!(listed[0], inserted);
    }
}
