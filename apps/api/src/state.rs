use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::generation::generator::DescriptionGenerator;
use crate::normalize::Normalizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<JobCatalog>,
    pub normalizer: Arc<Normalizer>,
    /// Pluggable generator. Default: LlmDescriptionGenerator.
    pub generator: Arc<dyn DescriptionGenerator>,
    pub config: Config,
}
