//! Job poller
//!
//! Drives one submitted job to its terminal outcome:
//!
//! ```text
//! Submitted -> Polling -> Succeeded | Faulted | TimedOut | TransportError
//! ```
//!
//! Each iteration polls once, then checks `done`, then `faulted`, then the
//! deadline, and finally sleeps for the fixed interval. A `done` status is
//! therefore honoured even when the deadline passed during that same poll.

use oxy_core::domain::job::{Job, JobStatus};
use oxy_core::domain::response::ScrapeResponse;
use tokio::time::{self, Duration, Instant};
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::jobs::JobBackend;

/// Polls a single job until it reaches a terminal state
pub struct Poller<B> {
    backend: B,
    poll_interval: Duration,
    timeout: Duration,
}

impl<B: JobBackend> Poller<B> {
    /// Creates a new poller
    pub fn new(backend: B, poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            backend,
            poll_interval,
            timeout,
        }
    }

    /// Poll `job` until done, faulted or out of time
    ///
    /// HTTP calls are strictly sequential: N status polls, then at most one
    /// results fetch. Any transport error ends the loop immediately.
    pub async fn run(&self, mut job: Job) -> Result<ScrapeResponse> {
        let started = Instant::now();

        info!(
            "Polling job {} (interval: {:?}, timeout: {:?})",
            job.id, self.poll_interval, self.timeout
        );

        loop {
            let update = self.backend.poll_job(&job.id).await?;
            job.apply(update);

            match job.status {
                JobStatus::Done => {
                    debug!("Job {} done, fetching results", job.id);
                    return self.backend.fetch_results(&job.id).await;
                }
                JobStatus::Faulted => {
                    return Err(ClientError::JobFaulted { job_id: job.id });
                }
                JobStatus::Pending | JobStatus::Unknown => {}
            }

            if started.elapsed() > self.timeout {
                return Err(ClientError::Timeout {
                    timeout: self.timeout,
                });
            }

            debug!("Job {} still {}, next poll in {:?}", job.id, job.status, self.poll_interval);
            time::sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use oxy_core::domain::job::JobUpdate;
    use oxy_core::request::ScrapeRequest;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Backend replaying a fixed script of poll outcomes
    ///
    /// Once the script runs out every poll reports `pending`.
    #[derive(Clone, Default)]
    pub(crate) struct ScriptedBackend {
        polls: Arc<Mutex<VecDeque<Result<JobUpdate>>>>,
        poll_delay: Duration,
        fail_fetch: bool,
        pub(crate) poll_calls: Arc<AtomicUsize>,
        pub(crate) fetch_calls: Arc<AtomicUsize>,
    }

    impl ScriptedBackend {
        pub(crate) fn with_statuses(statuses: &[JobStatus]) -> Self {
            let polls = statuses
                .iter()
                .map(|status| {
                    Ok(JobUpdate {
                        id: None,
                        status: Some(*status),
                    })
                })
                .collect();
            Self {
                polls: Arc::new(Mutex::new(polls)),
                ..Default::default()
            }
        }

        fn push(&self, outcome: Result<JobUpdate>) {
            self.polls.lock().unwrap().push_back(outcome);
        }

        pub(crate) fn polls(&self) -> usize {
            self.poll_calls.load(Ordering::SeqCst)
        }

        pub(crate) fn fetches(&self) -> usize {
            self.fetch_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JobBackend for ScriptedBackend {
        async fn submit_job(&self, _request: &ScrapeRequest) -> Result<Job> {
            Ok(Job::new("job-1", JobStatus::Pending))
        }

        async fn poll_job(&self, _job_id: &str) -> Result<JobUpdate> {
            self.poll_calls.fetch_add(1, Ordering::SeqCst);
            if !self.poll_delay.is_zero() {
                time::sleep(self.poll_delay).await;
            }
            let next = self.polls.lock().unwrap().pop_front();
            next.unwrap_or(Ok(JobUpdate {
                id: None,
                status: Some(JobStatus::Pending),
            }))
        }

        async fn fetch_results(&self, job_id: &str) -> Result<ScrapeResponse> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_fetch {
                return Err(ClientError::ParseError("failed to parse JSON object".into()));
            }
            Ok(ScrapeResponse {
                status_code: 200,
                status: "200 OK".to_string(),
                results: Vec::new(),
                job: Some(serde_json::json!({ "id": job_id })),
            })
        }
    }

    fn poller(backend: &ScriptedBackend) -> Poller<ScriptedBackend> {
        Poller::new(
            backend.clone(),
            Duration::from_secs(2),
            Duration::from_secs(50),
        )
    }

    fn pending_job() -> Job {
        Job::new("job-1", JobStatus::Pending)
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_then_done_fetches_once() {
        let backend = ScriptedBackend::with_statuses(&[JobStatus::Pending, JobStatus::Done]);

        let response = poller(&backend).run(pending_job()).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(backend.polls(), 2);
        assert_eq!(backend.fetches(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_faulted_stops_without_fetch() {
        let backend = ScriptedBackend::with_statuses(&[JobStatus::Faulted]);

        let err = poller(&backend).run(pending_job()).await.unwrap_err();

        assert!(matches!(err, ClientError::JobFaulted { ref job_id } if job_id == "job-1"));
        assert_eq!(backend.polls(), 1);
        assert_eq!(backend.fetches(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_terminal_times_out() {
        let backend = ScriptedBackend::default();
        let poller = Poller::new(
            backend.clone(),
            Duration::from_secs(2),
            Duration::from_secs(10),
        );

        let started = Instant::now();
        let err = poller.run(pending_job()).await.unwrap_err();

        assert!(err.is_timeout());
        assert!(started.elapsed() >= Duration::from_secs(10));
        // one poll every 2s until the 10s budget is spent, then nothing more
        let polls = backend.polls();
        assert!((6..=7).contains(&polls), "unexpected poll count {}", polls);
        assert_eq!(backend.fetches(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_done_is_honoured_past_the_deadline() {
        let backend = ScriptedBackend {
            poll_delay: Duration::from_secs(60),
            ..ScriptedBackend::with_statuses(&[JobStatus::Done])
        };

        let response = poller(&backend).run(pending_job()).await;

        assert!(response.is_ok());
        assert_eq!(backend.fetches(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_faulted_past_the_deadline_is_still_faulted() {
        let backend = ScriptedBackend {
            poll_delay: Duration::from_secs(60),
            ..ScriptedBackend::with_statuses(&[JobStatus::Faulted])
        };

        let err = poller(&backend).run(pending_job()).await.unwrap_err();
        assert!(matches!(err, ClientError::JobFaulted { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_error_is_terminal() {
        let backend = ScriptedBackend::with_statuses(&[JobStatus::Pending]);
        backend.push(Err(ClientError::InternalError("connection reset".into())));
        backend.push(Ok(JobUpdate {
            id: None,
            status: Some(JobStatus::Done),
        }));

        let err = poller(&backend).run(pending_job()).await.unwrap_err();

        assert!(matches!(err, ClientError::InternalError(_)));
        assert_eq!(backend.polls(), 2);
        assert_eq!(backend.fetches(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_downgrades_success() {
        let backend = ScriptedBackend {
            fail_fetch: true,
            ..ScriptedBackend::with_statuses(&[JobStatus::Done])
        };

        let err = poller(&backend).run(pending_job()).await.unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
        assert_eq!(backend.fetches(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_updates_keep_polling() {
        let backend = ScriptedBackend::default();
        backend.push(Ok(JobUpdate::default()));
        backend.push(Ok(JobUpdate::default()));
        backend.push(Ok(JobUpdate {
            id: None,
            status: Some(JobStatus::Done),
        }));

        assert!(poller(&backend).run(pending_job()).await.is_ok());
        assert_eq!(backend.polls(), 3);
    }
}
