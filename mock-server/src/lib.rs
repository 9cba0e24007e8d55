use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

const FIXTURE: &str = include_str!("../fixtures/users.json");

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// How `GET /users` answers.
#[derive(Clone, Debug, Default)]
pub enum Behavior {
    /// 200 with the bundled fixture.
    #[default]
    Serve,
    /// Respond with this status and an empty body.
    Status(u16),
    /// Wait before serving the fixture.
    Delay(Duration),
    /// 200 with a body that is not JSON.
    Malformed,
}

struct AppState {
    behavior: Behavior,
    users: Vec<User>,
}

/// The bundled ten-user fixture.
pub fn fixture_users() -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str(FIXTURE)
}

pub fn app() -> Router {
    app_with(Behavior::Serve)
}

pub fn app_with(behavior: Behavior) -> Router {
    let users = fixture_users().unwrap_or_else(|err| {
        tracing::error!(%err, "bundled fixture did not parse");
        Vec::new()
    });
    let state = Arc::new(AppState { behavior, users });
    Router::new()
        .route("/users", get(list_users))
        .with_state(state)
}

pub async fn run(listener: TcpListener, behavior: Behavior) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(behavior)).await
}

async fn list_users(State(state): State<Arc<AppState>>) -> Response {
    tracing::debug!(behavior = ?state.behavior, "GET /users");
    match &state.behavior {
        Behavior::Serve => Json(state.users.clone()).into_response(),
        Behavior::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Behavior::Delay(delay) => {
            tokio::time::sleep(*delay).await;
            Json(state.users.clone()).into_response()
        }
        Behavior::Malformed => (StatusCode::OK, "<html>not json</html>").into_response(),
    }
}
