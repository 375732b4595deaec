//! Shared application state

use docsense_analysis::{FallbackCoordinator, DEFAULT_LANGUAGE};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::document::DocumentRecord;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    /// Backend selection and fallback for every analysis
    pub coordinator: Arc<FallbackCoordinator>,

    /// Analyzed documents
    pub store: Arc<DocumentStore>,

    /// Upper bound on one document analysis
    pub analysis_timeout: Duration,

    /// Renders the Prometheus exposition on `/metrics`
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    pub fn new(
        coordinator: FallbackCoordinator,
        analysis_timeout: Duration,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
            store: Arc::new(DocumentStore::new()),
            analysis_timeout,
            metrics_handle,
        }
    }

    /// Build the coordinator from configuration, probing the remote provider once
    pub async fn from_config(
        config: &ServerConfig,
        metrics_handle: PrometheusHandle,
    ) -> anyhow::Result<Self> {
        let coordinator = FallbackCoordinator::from_config(&config.analysis).await?;
        info!(
            "Analysis backend: {:?}, timeout {:?}",
            coordinator.backend(),
            config.analysis_timeout()
        );
        Ok(Self::new(coordinator, config.analysis_timeout(), metrics_handle))
    }

    /// Analyze `text`, store the record and return it
    ///
    /// When the analysis does not finish within the timeout the local
    /// heuristics answer instead and the language is assumed to be English.
    pub async fn analyze_document(
        &self,
        filename: String,
        file_type: String,
        text: &str,
    ) -> DocumentRecord {
        let start = Instant::now();
        let work = async {
            tokio::join!(
                self.coordinator.analyze_document(text),
                self.coordinator.detect_language(text)
            )
        };

        let (analysis, language) = match tokio::time::timeout(self.analysis_timeout, work).await {
            Ok(done) => done,
            Err(_) => {
                warn!(
                    "Analysis of {} exceeded {:?}, using local heuristics",
                    filename, self.analysis_timeout
                );
                metrics::counter!(
                    "docsense_fallback_total",
                    "kind" => "document",
                    "reason" => "timeout"
                )
                .increment(1);
                (
                    self.coordinator.local_only(text),
                    DEFAULT_LANGUAGE.to_string(),
                )
            }
        };

        let record = DocumentRecord::new(filename, file_type, text, language, analysis);
        metrics::counter!("docsense_documents_total").increment(1);
        metrics::histogram!("docsense_document_latency_us")
            .record(start.elapsed().as_micros() as f64);
        info!(
            "Analyzed document {} ({}, {} words)",
            record.id, record.filename, record.word_count
        );

        self.store.insert(record.clone());
        record
    }
}
