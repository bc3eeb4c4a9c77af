//! In-process API server for integration tests
//!
//! Serves the real router on an ephemeral port over the in-memory store.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use stovaspot::config::{DatabaseBackend, Settings};
use stovaspot::database::DatabaseService;
use stovaspot::handlers::router;
use stovaspot::services::ServiceFactory;
use stovaspot::ApiClient;

pub struct TestServer {
    pub base_url: String,
    pub services: Arc<ServiceFactory>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with default settings
    pub async fn start() -> Self {
        Self::start_with(test_settings()).await
    }

    pub async fn start_with(settings: Settings) -> Self {
        let services = Arc::new(ServiceFactory::new(DatabaseService::in_memory(), settings));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = listener.local_addr().expect("Failed to read local address");

        let app = router(services.clone());
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", address),
            services,
            handle,
        }
    }

    /// Typed client pointed at this server
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).expect("Failed to create API client")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Default settings on the in-memory backend
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.database.backend = DatabaseBackend::Memory;
    settings
}
