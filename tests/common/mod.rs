//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use happy_day_server::dispatch::Pipeline;
use happy_day_server::handlers;
use happy_day_server::http::HttpServer;
use happy_day_server::lifecycle::Shutdown;
use happy_day_server::schema::SchemaRegistry;
use tokio::net::TcpListener;

/// A server running on an ephemeral localhost port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, target: &str) -> String {
        format!("http://{}{}", self.addr, target)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the server with the production route table.
pub async fn start_server() -> TestServer {
    let schema =
        SchemaRegistry::load(Path::new(env!("CARGO_MANIFEST_DIR")).join("proto/happyday.proto"))
            .unwrap();
    let routes = handlers::route_table(&schema).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(Pipeline::new(routes));
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
