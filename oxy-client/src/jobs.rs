//! Job-related API endpoints

use async_trait::async_trait;
use oxy_core::domain::job::{Job, JobUpdate};
use oxy_core::domain::response::ScrapeResponse;
use oxy_core::request::ScrapeRequest;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::ScrapeClient;
use crate::error::{ClientError, Result};

/// The three calls a job goes through
///
/// `ScrapeClient` talks HTTP; the poller only depends on this trait.
#[async_trait]
pub trait JobBackend: Send + Sync {
    /// Create a job and return its id and initial status
    async fn submit_job(&self, request: &ScrapeRequest) -> Result<Job>;

    /// Fetch the current job status
    ///
    /// Only transport failures are errors; an unusable body yields an empty update.
    async fn poll_job(&self, job_id: &str) -> Result<JobUpdate>;

    /// Fetch and decode the results of a finished job
    async fn fetch_results(&self, job_id: &str) -> Result<ScrapeResponse>;
}

#[async_trait]
impl JobBackend for ScrapeClient {
    async fn submit_job(&self, request: &ScrapeRequest) -> Result<Job> {
        let response = self
            .authorized(self.client.post(&self.config.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(status, &body));
        }

        let update = JobUpdate::decode(&body);
        if update.status.is_none() {
            warn!("Submission response carried no usable status, polling will resolve it");
        }

        Job::from_update(update).ok_or_else(|| {
            ClientError::ParseError("submission response carried no job id".to_string())
        })
    }

    async fn poll_job(&self, job_id: &str) -> Result<JobUpdate> {
        let response = self
            .authorized(self.client.get(self.status_url(job_id)))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!("Status poll for job {} returned {}", job_id, status);
            return Ok(JobUpdate::default());
        }

        let update = JobUpdate::decode(&body);
        if update.is_empty() {
            warn!("Could not decode status poll body for job {}", job_id);
        }
        debug!("Polled job {}: {:?}", job_id, update.status);

        Ok(update)
    }

    async fn fetch_results(&self, job_id: &str) -> Result<ScrapeResponse> {
        let response = self
            .authorized(self.client.get(self.results_url(job_id)))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            return Err(ClientError::api_error(status, &body));
        }

        ScrapeResponse::from_body(&body, status.as_u16(), status.to_string())
            .map_err(|e| ClientError::ParseError(format!("failed to parse JSON object: {}", e)))
    }
}
