//! Local deploy API for tests.
//!
//! `DeployServer` accepts `multipart/form-data` POSTs on `/api/1/deploy`,
//! records every field in arrival order and answers with a fixed status and
//! body. It runs on its own thread so blocking CLI tests can use it too.

use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;

/// One request as the server saw it
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub content_type: String,
    pub fields: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct DeployServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl DeployServer {
    /// Start a server that always answers `status` with `body`.
    pub fn start(status: u16, body: &str) -> Self {
        let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind test server");
        listener
            .set_nonblocking(true)
            .expect("set test listener non-blocking");
        let addr = listener.local_addr().expect("test server address");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
            requests: requests.clone(),
        };

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("test server runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                let app = Router::new()
                    .route("/api/1/deploy", post(deploy))
                    .with_state(state);
                let _ = axum::serve(listener, app).await;
            });
        });

        Self { addr, requests }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/api/1/deploy", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn deploy(
    State(state): State<ServerState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        fields.push((name, value));
    }

    state.requests.lock().unwrap().push(CapturedRequest {
        content_type,
        fields,
    });

    (state.status, state.body.clone())
}

/// An endpoint on a port nothing listens on.
pub fn refused_endpoint() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/api/1/deploy", addr)
}
