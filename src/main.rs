//! sdgx-report - Prints the score report of the last saved session.
//!
//! Reads configuration from `SDGX__*` environment variables (and `.env`),
//! opens the configured store and catalog, and writes the report as JSON on
//! stdout. Logs go to stderr.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use sdgx::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use sdgx::application::Session;
use sdgx::config::{AppConfig, LoggingConfig, StorageBackend, StorageConfig};
use sdgx::domain::catalog::QuestionCatalog;
use sdgx::ports::KeyValueStore;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;
    config.validate()?;

    let store = open_store(&config.storage)?;
    let catalog = QuestionCatalog::load(&config.catalog.path)?;
    tracing::info!(
        path = %config.catalog.path.display(),
        questions = catalog.len(),
        "Catalog loaded"
    );

    let session = Session::open(store, Arc::new(catalog), config.session_options());
    let (filled, total) = session.identity().completion();

    let output = serde_json::json!({
        "profile": session.identity().commune_name(),
        "namespace": session.namespace().as_str(),
        "identity_completion": { "filled": filled, "total": total },
        "answered": session.answers().answered_count(),
        "ideas": session.ideas().len(),
        "report": session.report(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = logging.env_filter()?;
    let json_layer = logging
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!logging.json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;
    Ok(())
}

fn open_store(storage: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, Box<dyn Error>> {
    let store: Arc<dyn KeyValueStore> = match storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::File => Arc::new(FileKeyValueStore::open(&storage.path)?),
    };
    tracing::debug!(backend = ?storage.backend, "Store opened");
    Ok(store)
}
