// drone-client/tests/common/mod.rs
// In-process mock of the access backend

#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// One request as the backend saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<Recorded>>,
    records: Mutex<HashMap<String, Vec<Value>>>,
    /// "METHOD /path" -> (status, raw body)
    overrides: Mutex<HashMap<String, (StatusCode, String)>>,
    access: Mutex<Option<Value>>,
    next_id: AtomicU64,
}

pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().last().cloned().expect("no request recorded")
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// Answer `method path` with a fixed status and raw body
    pub fn stub(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        self.state
            .overrides
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), (status, body.to_string()));
    }

    /// Seed a stored record (`resource` is "Drone", "Attribute" or "Policy")
    pub fn seed(&self, resource: &str, mut record: Value) -> String {
        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        record["ID"] = json!(id.to_string());
        self.state
            .records
            .lock()
            .unwrap()
            .entry(resource.to_string())
            .or_default()
            .push(record);
        id.to_string()
    }

    pub fn set_access_response(&self, response: Value) {
        *self.state.access.lock().unwrap() = Some(response);
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    body: String,
) -> impl IntoResponse {
    let path = uri.path().to_string();
    let parsed: Option<Value> = serde_json::from_str(&body).ok();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        body: parsed.clone(),
    });

    if let Some((status, raw)) = state
        .overrides
        .lock()
        .unwrap()
        .get(&format!("{method} {path}"))
        .cloned()
    {
        return (status, [(header::CONTENT_TYPE, "application/json")], raw);
    }

    let (status, value) = route(&state, &method, &path, parsed);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        value.to_string(),
    )
}

fn route(
    state: &MockState,
    method: &Method,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let segments: Vec<&str> = path.trim_start_matches('/').splitn(3, '/').collect();
    let (op, arg) = match segments.as_slice() {
        [_, op] => (*op, None),
        [_, op, arg] => (*op, Some(urlencoding::decode(arg).unwrap().into_owned())),
        _ => return (StatusCode::NOT_FOUND, json!({"message": "no route"})),
    };

    if op == "accessRequest" {
        let answer = state.access.lock().unwrap().clone().unwrap_or_else(|| {
            json!({"granted": true, "message": format!("granted via {}", segments[0])})
        });
        return (StatusCode::OK, answer);
    }

    let mut records = state.records.lock().unwrap();

    match (method.as_str(), op, arg) {
        ("GET", "getDronesByZone", Some(zone)) => {
            (StatusCode::OK, by_field("Drone", "zone", &zone, &records))
        }
        ("GET", "getAttributeByName", Some(name)) => {
            (StatusCode::OK, by_field("Attribute", "name", &name, &records))
        }
        ("GET", list, None) if list.starts_with("get") => {
            let resource = match list {
                "getDrones" => "Drone",
                "getAttributes" => "Attribute",
                "getPolicies" => "Policy",
                _ => return (StatusCode::NOT_FOUND, json!({"message": "unknown list"})),
            };
            let all = records.get(resource).cloned().unwrap_or_default();
            (StatusCode::OK, Value::Array(all))
        }
        ("POST", create, None) if create.starts_with("create") => {
            let resource = create.trim_start_matches("create").to_string();
            let mut record = body.unwrap_or(Value::Null);
            let id = state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            record["ID"] = json!(id.to_string());
            records.entry(resource).or_default().push(record.clone());
            (StatusCode::OK, record)
        }
        ("PUT", update, Some(id)) if update.starts_with("update") => {
            let resource = update.trim_start_matches("update");
            let Some(slot) = records
                .get_mut(resource)
                .and_then(|list| list.iter_mut().find(|r| r["ID"] == json!(id)))
            else {
                let message = format!("{resource} {id} not found");
                return (StatusCode::NOT_FOUND, json!({ "message": message }));
            };
            let mut record = body.unwrap_or(Value::Null);
            record["ID"] = json!(id);
            *slot = record.clone();
            (StatusCode::OK, record)
        }
        ("DELETE", remove, Some(id)) if remove.starts_with("remove") => {
            let resource = remove.trim_start_matches("remove");
            if let Some(list) = records.get_mut(resource) {
                list.retain(|r| r["ID"] != json!(id));
            }
            (StatusCode::OK, json!({"message": "removed"}))
        }
        _ => (StatusCode::NOT_FOUND, json!({"message": "no route"})),
    }
}

/// Records of `resource` whose `field` equals `wanted` (numbers compared as text)
fn by_field(
    resource: &str,
    field: &str,
    wanted: &str,
    records: &HashMap<String, Vec<Value>>,
) -> Value {
    let matches: Vec<Value> = records
        .get(resource)
        .into_iter()
        .flatten()
        .filter(|r| match &r[field] {
            Value::String(s) => s == wanted,
            other => other.to_string() == wanted,
        })
        .cloned()
        .collect();
    Value::Array(matches)
}
