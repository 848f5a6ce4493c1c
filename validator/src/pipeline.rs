//! Pipeline orchestration: entry point, catalogs, then every dataset.
//!
//! A run moves through `ValidatingEntryPoint → ValidatingCatalog →
//! ValidatingDatasets → Done`, announcing each state to the
//! [`ProgressSink`]. Datasets are validated through an order-preserving
//! buffered stream, so the report lists them in discovery order whatever the
//! concurrency.

use std::collections::{HashMap, HashSet};
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dcat_model::Dataset;
use futures::{stream, FutureExt, StreamExt};
use tracing::{debug, error, info};

use crate::aggregate::aggregate;
use crate::config::ValidatorConfig;
use crate::entry::{catalog_json_checks, dataset_json_checks, EntryFormat, ResourceEntryPoint};
use crate::error::{SchemaError, ValidatorError};
use crate::extract;
use crate::fetch::{FetchService, HttpFetchService};
use crate::loader::jsonld::ContextCache;
use crate::loader::{self, Scope};
use crate::negotiate::{negotiate, Negotiation};
use crate::progress::{ProgressSink, Status};
use crate::report::{ContentType, DatasetReference, LoadingFailure, Report};
use crate::schema::{SchemaRegistry, CATALOG_SHAPES};
use crate::validators::{check_catalog, check_resource};

/// Validates catalogs. Cheap to clone: the fetcher and the schema registry
/// are reference counted.
#[derive(Clone)]
pub struct CatalogValidator {
    fetch: Arc<dyn FetchService>,
    registry: Arc<SchemaRegistry>,
    config: ValidatorConfig,
}

impl std::fmt::Debug for CatalogValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogValidator")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CatalogValidator {
    /// Creates a validator from its collaborators.
    #[must_use]
    pub fn new(fetch: Arc<dyn FetchService>, registry: Arc<SchemaRegistry>, config: ValidatorConfig) -> Self {
        Self {
            fetch,
            registry,
            config,
        }
    }

    /// Creates a validator with the HTTP fetcher and the bundled schemas.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Config`] when the HTTP client cannot be built
    /// and [`ValidatorError::Schema`] when a bundled schema fails to load.
    pub fn from_config(config: ValidatorConfig) -> Result<Self, ValidatorError> {
        let fetch = HttpFetchService::from_config(&config)?;
        let registry = SchemaRegistry::bundled()?;
        Ok(Self::new(Arc::new(fetch), Arc::new(registry), config))
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates the catalog at `url`. Never fails: internal errors and
    /// panics become a single CRITICAL `issues.summary.unexpected-error`.
    pub async fn validate_catalog(&self, url: &str, progress: &dyn ProgressSink) -> Report {
        match AssertUnwindSafe(self.run(url, progress)).catch_unwind().await {
            Ok(Ok(report)) => report,
            Ok(Err(err)) => {
                error!(url, error = %err, "validation failed");
                unexpected_error(url)
            }
            Err(_) => {
                error!(url, "validation panicked");
                unexpected_error(url)
            }
        }
    }

    async fn run(&self, url: &str, progress: &dyn ProgressSink) -> Result<Report, SchemaError> {
        info!(url, "validating catalog");
        progress.status(Status::loading_catalog(url));
        let contexts = ContextCache::new();
        let negotiation = negotiate(self.fetch.as_ref(), url, true).await;
        let loaded = loader::load(self.fetch.as_ref(), &negotiation, Scope::Catalog, &contexts).await;
        let mut entry = ResourceEntryPoint::new(url, negotiation);
        entry.negotiation.response = None;

        let loaded = match loaded {
            Ok(loaded) => loaded,
            Err(failure) => {
                entry.failure = Some(failure);
                progress.status(Status::done());
                return Ok(aggregate(&entry, Vec::new(), Vec::new()));
            }
        };

        progress.status(Status::validating_catalog());
        if let Some(json) = &loaded.json {
            entry.format = EntryFormat::CatalogJson(catalog_json_checks(&self.registry, url, json)?);
        }
        let shacl = self.registry.validate_shapes(CATALOG_SHAPES, &loaded.triples)?;
        entry.valid_by_shacl = Some(shacl.conforms);

        let catalogs = extract::catalogs(&loaded.triples);
        let sections: Vec<_> = catalogs.iter().map(check_catalog).collect();
        let mut iris = discovered_datasets(catalogs.iter().flat_map(|c| c.datasets.iter()));
        drop(loaded);

        let sparql_endpoint = match entry.content_type() {
            Some(ContentType::Sparql) => {
                if let Some(order) = loader::sparql_dataset_order(self.fetch.as_ref(), url).await {
                    sort_by_endpoint_order(&mut iris, &order);
                }
                Some(url)
            }
            _ => None,
        };

        let references = self
            .validate_datasets(&iris, sparql_endpoint, &contexts, progress)
            .await?;
        progress.status(Status::done());
        Ok(aggregate(&entry, sections, references))
    }

    async fn validate_datasets(
        &self,
        iris: &[String],
        sparql_endpoint: Option<&str>,
        contexts: &ContextCache,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<DatasetReference>, SchemaError> {
        progress.datasets_total(iris.len());
        let completed = AtomicUsize::new(0);
        let completed = &completed;
        let results: Vec<_> = stream::iter(iris.iter().enumerate())
            .map(|(index, iri)| async move {
                progress.dataset_started(index, iri);
                progress.status(Status::loading_dataset(iri));
                let reference = self.validate_dataset(iri, sparql_endpoint, contexts).await;
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                progress.dataset_finished(done, iri);
                reference
            })
            .buffered(self.config.dataset_concurrency.max(1))
            .collect()
            .await;
        results.into_iter().collect()
    }

    async fn validate_dataset(
        &self,
        iri: &str,
        sparql_endpoint: Option<&str>,
        contexts: &ContextCache,
    ) -> Result<DatasetReference, SchemaError> {
        let negotiation = match sparql_endpoint {
            Some(endpoint) => Negotiation::sparql(endpoint),
            None => negotiate(self.fetch.as_ref(), iri, false).await,
        };
        let loaded = loader::load(self.fetch.as_ref(), &negotiation, Scope::Dataset(iri), contexts).await;
        let mut entry = ResourceEntryPoint::new(iri, negotiation);
        entry.negotiation.response = None;

        let datasets: Vec<Dataset> = match loaded {
            Ok(loaded) => {
                if let Some(json) = &loaded.json {
                    entry.format = EntryFormat::DatasetJson(dataset_json_checks(&self.registry, json)?);
                }
                extract::datasets(&loaded.triples, iri)
            }
            Err(failure) => {
                entry.failure = Some(failure);
                Vec::new()
            }
        };
        debug!(iri, datasets = datasets.len(), failure = ?entry.failure, "dataset resource loaded");
        Ok(check_resource(&entry, &datasets))
    }
}

/// The report of a run that hit an internal error.
fn unexpected_error(url: &str) -> Report {
    let negotiation = Negotiation {
        url: url.to_string(),
        ..Negotiation::default()
    };
    let mut entry = ResourceEntryPoint::new(url, negotiation);
    entry.failure = Some(LoadingFailure::Unexpected);
    aggregate(&entry, Vec::new(), Vec::new())
}

/// De-duplicates dataset IRIs, keeping the first occurrence.
fn discovered_datasets<'a>(iris: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    iris.filter(|iri| seen.insert(iri.as_str()))
        .cloned()
        .collect()
}

/// Orders `iris` as the endpoint listed them. IRIs the endpoint did not list
/// keep their discovery order at the end.
fn sort_by_endpoint_order(iris: &mut [String], order: &[String]) {
    let position: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, iri)| (iri.as_str(), i))
        .collect();
    iris.sort_by_key(|iri| position.get(iri.as_str()).copied().unwrap_or(usize::MAX));
}
