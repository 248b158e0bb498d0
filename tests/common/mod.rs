//! Shared helpers for integration tests.

use std::net::SocketAddr;

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use app_server::config::AppConfig;
use app_server::lifecycle::ShutdownController;
use app_server::{modules, FileSessionStore, HttpServer, ShutdownHandle};

/// A server bound to an ephemeral port with a throwaway session directory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: ShutdownHandle,
    pub secret: String,
    pub task: JoinHandle<Result<(), std::io::Error>>,
    _sessions_dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

pub async fn spawn_server() -> TestServer {
    let sessions_dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.session_path = sessions_dir.path().to_path_buf();
    let secret = config.secret.clone();

    let sessions = FileSessionStore::open(config.session_path.clone())
        .await
        .unwrap();
    let controller = ShutdownController::new();
    let shutdown = controller.handle();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, sessions, controller.handle(), modules::collect());
    let task = tokio::spawn(async move { server.run(listener, controller).await });

    TestServer {
        addr,
        shutdown,
        secret,
        task,
        _sessions_dir: sessions_dir,
    }
}

/// Non-pooled client so each request opens a fresh connection.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
