//! In-process fake backend for driving the harness end to end

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One request as the backend saw it, with the `/api` prefix stripped
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub body: Option<Value>,
}

impl Hit {
    /// `"METHOD /path"`, handy for assertions
    pub fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

type Responder = Arc<dyn Fn(&Hit) -> (u16, String) + Send + Sync>;

#[derive(Clone)]
struct Backend {
    hits: Arc<Mutex<Vec<Hit>>>,
    responder: Responder,
}

pub struct FakeServer {
    pub base_url: String,
    backend: Backend,
    join: JoinHandle<()>,
}

impl FakeServer {
    pub fn hits(&self) -> Vec<Hit> {
        self.backend.hits.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.hits().iter().map(Hit::line).collect()
    }

    pub fn hit(&self, line: &str) -> Option<Hit> {
        self.hits().into_iter().find(|h| h.line() == line)
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.join.abort();
    }
}

pub async fn spawn_server<F>(responder: F) -> FakeServer
where
    F: Fn(&Hit) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("listener should bind");
    let addr = listener
        .local_addr()
        .expect("listener should expose local addr");

    let backend = Backend {
        hits: Arc::new(Mutex::new(Vec::new())),
        responder: Arc::new(responder),
    };
    let app = Router::new().fallback(handle).with_state(backend.clone());
    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    FakeServer {
        base_url: format!("http://{addr}/api"),
        backend,
        join,
    }
}

/// Base URL of a port nothing listens on
pub fn unreachable_base_url() -> String {
    let listener =
        std::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("listener should bind");
    let addr: SocketAddr = listener.local_addr().expect("listener should expose addr");
    drop(listener);
    format!("http://{addr}/api")
}

async fn handle(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let full = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");
    let path = full.strip_prefix("/api").unwrap_or(full).to_string();
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let hit = Hit {
        method: method.to_string(),
        path,
        authorization: header_text(header::AUTHORIZATION),
        accept: header_text(header::ACCEPT),
        body: if body.is_empty() {
            None
        } else {
            Some(serde_json::from_str(&body).unwrap_or(Value::String(body.clone())))
        },
    };

    let (status, text) = (backend.responder)(&hit);
    backend.hits.lock().unwrap().push(hit);

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        text,
    )
        .into_response()
}

/// A cooperative LMS: every call succeeds and creating calls return IDs
pub fn lms_backend(hit: &Hit) -> (u16, String) {
    let body = match (hit.method.as_str(), hit.path.as_str()) {
        ("POST", "/auth/register") => {
            let role = hit
                .body
                .as_ref()
                .and_then(|b| b["role"].as_str())
                .unwrap_or("unknown");
            return (201, json!({ "token": format!("reg-{role}") }).to_string());
        }
        ("POST", "/auth/login") => {
            let email = hit
                .body
                .as_ref()
                .and_then(|b| b["email"].as_str())
                .unwrap_or("unknown@");
            let user = email.split('@').next().unwrap_or("unknown");
            json!({ "token": format!("login-{user}") })
        }
        ("POST", "/instructor/courses") => {
            return (201, json!({ "data": { "id": 11, "title": "Python Fundamentals" } }).to_string());
        }
        ("POST", "/instructor/lessons/1/quizzes") => {
            return (201, json!({ "data": { "id": 21 } }).to_string());
        }
        ("POST", "/student/lessons/1/quizzes/21/attempts") => {
            return (201, json!({ "data": { "id": 31 } }).to_string());
        }
        ("POST", "/student/courses/11/enroll") => {
            return (201, json!({ "id": 41, "status": "active" }).to_string());
        }
        _ => json!({ "ok": true }),
    };
    (200, body.to_string())
}
