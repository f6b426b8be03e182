//! HTTP routes: home page, room entry, room page, id suggestions, health.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::room::id::RoomId;
use crate::util::id::{TokenSource, MAX_ROOM_ID_LEN};

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<dyn TokenSource>,
    /// Length of generated default room ids.
    pub room_id_len: usize,
}

impl AppState {
    pub fn new(tokens: Arc<dyn TokenSource>, room_id_len: usize) -> Self {
        Self { tokens, room_id_len }
    }

    fn fresh_room_id(&self) -> String {
        self.tokens.token(self.room_id_len)
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    room_id: String,
    toast: Option<String>,
}

#[derive(Template)]
#[template(path = "room.html")]
struct RoomTemplate {
    room_id: String,
}

pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate { room_id: state.fresh_room_id(), toast: None }
}

#[derive(Debug, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub room_id: Option<String>,
}

pub async fn enter_room(
    State(state): State<AppState>,
    Form(EntryForm { room_id }): Form<EntryForm>,
) -> Response {
    // Nothing typed: pick a room for the user rather than sending them to `/room/`.
    let raw = room_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| state.fresh_room_id());

    match RoomId::parse(&raw) {
        Ok(id) => {
            tracing::info!(room_id = %id, "entering room");
            Redirect::to(&id.location()).into_response()
        }
        Err(err) => {
            tracing::debug!(%err, room_id = %raw, "rejected room id");
            let page = HomeTemplate { room_id: raw, toast: Some(err.to_string()) };
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
    }
}

pub async fn view_room(Path(raw): Path<String>) -> Response {
    match RoomId::parse(&raw) {
        Ok(id) if id.as_str() != raw => Redirect::to(&id.location()).into_response(),
        Ok(id) => RoomTemplate { room_id: id.to_string() }.into_response(),
        Err(err) => {
            tracing::warn!(%err, room_id = %raw, "bad room path");
            (StatusCode::NOT_FOUND, "room not found").into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct SuggestQuery {
    pub length: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Suggestion {
    pub room_id: String,
}

pub async fn suggest_room_id(
    State(state): State<AppState>,
    Query(SuggestQuery { length }): Query<SuggestQuery>,
) -> Json<Suggestion> {
    let length = length.unwrap_or(state.room_id_len).clamp(1, MAX_ROOM_ID_LEN);
    Json(Suggestion { room_id: state.tokens.token(length) })
}

pub async fn healthz() -> &'static str { "ok" }

pub async fn version() -> &'static str {
    concat!("NoobChat v", env!("CARGO_PKG_VERSION"))
}
