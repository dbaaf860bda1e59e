//! External document-store seam.
//!
//! The marketplace's persistence lives in a hosted document database; this
//! crate only sees collection-scoped async calls that may fail or come back
//! empty. `DocumentStore` is that boundary. `MemoryStore` is the reference
//! implementation used by the CLI and as the test double.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::models::{Job, JobApplication, JobRequest};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failure classes observed at the store boundary. Loads absorb these and
/// fall back to fixture data; mutations propagate them to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("permission denied: {0}")]
    Permission(String),

    #[error("missing index for query: {0}")]
    MissingIndex(String),

    #[error("not found: {0}")]
    NotFound(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All open jobs, newest first.
    async fn open_jobs(&self) -> Result<Vec<Job>>;

    /// One vendor's jobs regardless of status, newest first.
    async fn jobs_by_vendor(&self, vendor_id: &str) -> Result<Vec<Job>>;

    /// Insert a job; the store assigns the id and timestamps.
    async fn create_job(&self, job: Job) -> Result<String>;

    /// One worker's applications, newest first.
    async fn applications_by_worker(&self, worker_id: &str) -> Result<Vec<JobApplication>>;

    /// Applications against one job, newest first.
    async fn applications_by_job(&self, job_id: &str) -> Result<Vec<JobApplication>>;

    async fn create_application(&self, application: JobApplication) -> Result<String>;

    /// Accept or reject an application. Accepting stamps `accepted_at`.
    async fn set_application_status(&self, id: &str, status: &str) -> Result<()>;

    /// Job requests still awaiting a vendor, newest first.
    async fn pending_requests(&self) -> Result<Vec<JobRequest>>;

    /// Accept or reject a request. Accepting records the vendor and time.
    async fn set_request_status(
        &self,
        id: &str,
        status: &str,
        accepted_by: Option<&str>,
    ) -> Result<()>;
}

// --- In-memory implementation ---

#[derive(Default)]
struct Collections {
    jobs: HashMap<String, Job>,
    applications: HashMap<String, JobApplication>,
    requests: HashMap<String, JobRequest>,
    next_id: u64,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requests(requests: Vec<JobRequest>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().expect("store lock poisoned");
            for request in requests {
                inner.requests.insert(request.id.clone(), request);
            }
        }
        store
    }

    fn next_id(inner: &mut Collections, prefix: &str) -> String {
        inner.next_id += 1;
        format!("{}-{}", prefix, inner.next_id)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn open_jobs(&self) -> Result<Vec<Job>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut jobs: Vec<Job> = inner
            .jobs
            .values()
            .filter(|j| j.status == "open")
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn jobs_by_vendor(&self, vendor_id: &str) -> Result<Vec<Job>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut jobs: Vec<Job> = inner
            .jobs
            .values()
            .filter(|j| j.vendor_id == vendor_id)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn create_job(&self, mut job: Job) -> Result<String> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let id = Self::next_id(&mut inner, "job");
        let now = Utc::now();
        job.id = id.clone();
        job.created_at = now;
        job.updated_at = now;
        inner.jobs.insert(id.clone(), job);
        Ok(id)
    }

    async fn applications_by_worker(&self, worker_id: &str) -> Result<Vec<JobApplication>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut apps: Vec<JobApplication> = inner
            .applications
            .values()
            .filter(|a| a.worker_id == worker_id)
            .cloned()
            .collect();
        apps.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(apps)
    }

    async fn applications_by_job(&self, job_id: &str) -> Result<Vec<JobApplication>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut apps: Vec<JobApplication> = inner
            .applications
            .values()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect();
        apps.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(apps)
    }

    async fn create_application(&self, mut application: JobApplication) -> Result<String> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let id = Self::next_id(&mut inner, "app");
        application.id = id.clone();
        application.applied_at = Utc::now();
        inner.applications.insert(id.clone(), application);
        Ok(id)
    }

    async fn set_application_status(&self, id: &str, status: &str) -> Result<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let app = inner
            .applications
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("application {}", id)))?;
        app.status = status.to_string();
        if status == "accepted" {
            app.accepted_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn pending_requests(&self) -> Result<Vec<JobRequest>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut requests: Vec<JobRequest> = inner
            .requests
            .values()
            .filter(|r| r.status == "pending")
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn set_request_status(
        &self,
        id: &str,
        status: &str,
        accepted_by: Option<&str>,
    ) -> Result<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let request = inner
            .requests
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("job request {}", id)))?;
        request.status = status.to_string();
        if status == "accepted" {
            request.accepted_by = accepted_by.map(|v| v.to_string());
            request.accepted_at = Some(Utc::now());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Origin;

    fn sample_job(vendor: &str, title: &str) -> Job {
        Job {
            id: String::new(),
            vendor_id: vendor.to_string(),
            title: title.to_string(),
            description: "test".to_string(),
            work_type: "Plumbing".to_string(),
            required_skills: vec!["Plumbing".to_string()],
            pay_min: 500,
            pay_max: 900,
            location: "Mumbai, Maharashtra".to_string(),
            hours: 4,
            status: "open".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            origin: Origin::Live,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_jobs() {
        let store = MemoryStore::new();
        let id = store.create_job(sample_job("v1", "Pipe fitting")).await.unwrap();
        assert!(!id.is_empty());

        let open = store.open_jobs().await.unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, id);

        let by_vendor = store.jobs_by_vendor("v1").await.unwrap();
        assert_eq!(by_vendor.len(), 1);
        assert!(store.jobs_by_vendor("v2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_application_lifecycle() {
        let store = MemoryStore::new();
        let job_id = store.create_job(sample_job("v1", "Pipe fitting")).await.unwrap();

        let app = JobApplication {
            id: String::new(),
            job_id: job_id.clone(),
            worker_id: "w1".to_string(),
            status: "pending".to_string(),
            applied_at: Utc::now(),
            accepted_at: None,
            origin: Origin::Live,
        };
        let app_id = store.create_application(app).await.unwrap();

        store.set_application_status(&app_id, "accepted").await.unwrap();
        let apps = store.applications_by_job(&job_id).await.unwrap();
        assert_eq!(apps[0].status, "accepted");
        assert!(apps[0].accepted_at.is_some());
    }

    #[tokio::test]
    async fn test_missing_application_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .set_application_status("nope", "accepted")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_accepting_request_records_vendor() {
        let store = MemoryStore::with_requests(crate::fixtures::demo_job_requests());
        let pending = store.pending_requests().await.unwrap();
        assert!(!pending.is_empty());

        let id = pending[0].id.clone();
        store
            .set_request_status(&id, "accepted", Some("vendor-9"))
            .await
            .unwrap();

        // Accepted requests leave the pending set.
        let pending_after = store.pending_requests().await.unwrap();
        assert!(pending_after.iter().all(|r| r.id != id));
    }
}
