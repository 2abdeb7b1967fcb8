use crate::domain::{JobDescriptor, JobId, JobState};
use async_trait::async_trait;
use std::error::Error;

// Type alias for generic errors to keep signatures clean
pub type DynResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Submission client the translated descriptor is handed to. Serialization
/// to the backend wire format, authentication, retries and pagination all
/// live behind this boundary; the translation engine never sees them.
#[async_trait]
pub trait SchedulerBackend: Send + Sync {
    /// Submits a descriptor and returns the backend-issued job identifier.
    async fn submit_job(&self, descriptor: &JobDescriptor) -> DynResult<JobId>;

    /// Reports the current state of a previously submitted job.
    async fn query_state(&self, job_id: &JobId) -> DynResult<JobState>;

    /// Requests cancellation; true if the backend accepted the request.
    async fn cancel_job(&self, job_id: &JobId) -> DynResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingBackend {
        submitted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SchedulerBackend for RecordingBackend {
        async fn submit_job(&self, descriptor: &JobDescriptor) -> DynResult<JobId> {
            self.submitted.lock().unwrap().push(descriptor.name.clone());
            Ok(format!("job-{}", self.submitted.lock().unwrap().len()))
        }

        async fn query_state(&self, _job_id: &JobId) -> DynResult<JobState> {
            Ok(JobState::Queued)
        }

        async fn cancel_job(&self, _job_id: &JobId) -> DynResult<bool> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn backend_is_usable_as_a_trait_object() {
        let backend: Box<dyn SchedulerBackend> = Box::new(RecordingBackend {
            submitted: Mutex::new(Vec::new()),
        });

        let descriptor = JobDescriptor {
            name: "contract_check".into(),
            command_line: "true".into(),
            queue: "normal".into(),
            thread_count: 1,
            memory_mb: 1024,
            wall_time_secs: 3600,
            ..Default::default()
        };

        let job_id = backend.submit_job(&descriptor).await.unwrap();
        assert_eq!(job_id, "job-1");
        assert_eq!(backend.query_state(&job_id).await.unwrap(), JobState::Queued);
        assert!(backend.cancel_job(&job_id).await.unwrap());
    }
}
