//! One-shot delivery of a job's outcome
//!
//! The poller runs on its own task and sends exactly one
//! `Result<ScrapeResponse>` through a oneshot channel. `PendingScrape` is the
//! receiving end; awaiting it yields that single outcome.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use oxy_core::domain::job::Job;
use oxy_core::domain::response::ScrapeResponse;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::error::{ClientError, Result};
use crate::jobs::JobBackend;
use crate::poller::Poller;

/// A submitted job whose outcome is still on its way
///
/// Dropping it does not stop the background poller; the job simply runs to
/// its terminal state and the outcome is discarded.
#[derive(Debug)]
pub struct PendingScrape {
    job: Job,
    receiver: oneshot::Receiver<Result<ScrapeResponse>>,
}

impl PendingScrape {
    /// Start polling `job` on a background task
    pub fn spawn<B>(poller: Poller<B>, job: Job) -> Self
    where
        B: JobBackend + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let polled = job.clone();

        tokio::spawn(async move {
            let job_id = polled.id.clone();
            let outcome = poller.run(polled).await;

            match &outcome {
                Ok(response) => info!(
                    "Job {} finished with {} result page(s)",
                    job_id,
                    response.results.len()
                ),
                Err(e) => warn!("Job {} failed: {}", job_id, e),
            }

            if sender.send(outcome).is_err() {
                debug!("Outcome of job {} dropped, nobody is waiting", job_id);
            }
        });

        Self { job, receiver }
    }

    /// Job as returned by the submission call
    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn job_id(&self) -> &str {
        &self.job.id
    }
}

impl Future for PendingScrape {
    type Output = Result<ScrapeResponse>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                Err(ClientError::InternalError(
                    "poller task ended without an outcome".to_string(),
                ))
            })
        })
    }
}
