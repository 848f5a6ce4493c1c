//! A validation service that keeps only the newest run visible.
//!
//! Each [`ValidationService::validate`] call takes a new generation number.
//! Progress and the final report are published under that number, and a
//! publish from a superseded generation is dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::debug;

use crate::pipeline::CatalogValidator;
use crate::progress::{ProgressSink, Status};
use crate::report::Report;

/// Dataset progress of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Finished datasets.
    pub completed: usize,
    /// Datasets to validate.
    pub total: usize,
}

/// Last published state of the newest run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Run generation.
    pub generation: u64,
    /// Catalog URL of the run.
    pub url: String,
    /// Last status notification.
    pub status: Option<Status>,
    /// Dataset progress.
    pub progress: Progress,
    /// The final report, once published.
    pub report: Option<Report>,
}

/// Runs validations and publishes the newest one.
#[derive(Debug)]
pub struct ValidationService {
    validator: CatalogValidator,
    generation: AtomicU64,
    latest: Mutex<Snapshot>,
}

impl ValidationService {
    /// Wraps `validator`.
    #[must_use]
    pub fn new(validator: CatalogValidator) -> Self {
        Self {
            validator,
            generation: AtomicU64::new(0),
            latest: Mutex::new(Snapshot::default()),
        }
    }

    /// Validates `url` as a new run, superseding any run in progress.
    ///
    /// Returns `None` when a newer run started before this one finished.
    pub async fn validate(&self, url: &str) -> Option<Report> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.publish(generation, |snapshot| {
            *snapshot = Snapshot {
                generation,
                url: url.to_string(),
                ..Snapshot::default()
            };
        });

        let sink = GenerationSink {
            service: self,
            generation,
        };
        let report = self.validator.validate_catalog(url, &sink).await;

        let published = self.publish(generation, |snapshot| snapshot.report = Some(report.clone()));
        if !published {
            debug!(url, generation, "dropping report of superseded run");
        }
        published.then_some(report)
    }

    /// Snapshot of the newest run.
    #[must_use]
    pub fn latest(&self) -> Snapshot {
        self.lock().clone()
    }

    /// Current generation number.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Applies `update` if `generation` is still current. Returns whether it did.
    fn publish(&self, generation: u64, update: impl FnOnce(&mut Snapshot)) -> bool {
        let mut latest = self.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        update(&mut latest);
        true
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.latest.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Progress sink bound to one generation.
struct GenerationSink<'a> {
    service: &'a ValidationService,
    generation: u64,
}

impl ProgressSink for GenerationSink<'_> {
    fn status(&self, status: Status) {
        self.service
            .publish(self.generation, |snapshot| snapshot.status = Some(status));
    }

    fn datasets_total(&self, total: usize) {
        self.service
            .publish(self.generation, |snapshot| snapshot.progress.total = total);
    }

    fn dataset_finished(&self, completed: usize, _url: &str) {
        self.service.publish(self.generation, |snapshot| {
            snapshot.progress.completed = snapshot.progress.completed.max(completed);
        });
    }
}
