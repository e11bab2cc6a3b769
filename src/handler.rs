use std::fmt::Write;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::Method,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::db::Database;
use crate::error::StoreError;
use crate::snippets::SnippetModel;
use crate::{method_not_allowed, not_found, server_error};

const DEMO_TITLE: &str = "O snail";
const DEMO_CONTENT: &str = "O snail\nClimb Mount Fuji,\nBut slowly, slowly!\n\n- Kobayashi Issa";
const DEMO_EXPIRES_IN_DAYS: u32 = 7;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

#[derive(Debug, Deserialize)]
pub struct ViewParams {
    pub id: Option<String>,
}

impl ViewParams {
    /// Only ids that parse as integers and are at least 1 can name a snippet.
    pub fn snippet_id(&self) -> Option<i64> {
        let id = self.id.as_deref()?.parse::<i64>().ok()?;
        (id >= 1).then_some(id)
    }
}

pub async fn home(State(state): State<AppState>) -> Response {
    let model = SnippetModel::new(state.db.connection());

    let snippets = match model.latest().await {
        Ok(snippets) => snippets,
        Err(e) => {
            tracing::error!(error = %e, "failed to list latest snippets");
            return server_error();
        }
    };

    tracing::info!(count = snippets.len(), "listed latest snippets");
    let mut body = String::new();
    for snippet in &snippets {
        let _ = writeln!(body, "{:?}", snippet);
    }
    body.into_response()
}

pub async fn snippet_view(State(state): State<AppState>, params: Option<Query<ViewParams>>) -> Response {
    let Some(id) = params.and_then(|Query(p)| p.snippet_id()) else {
        return not_found();
    };

    let model = SnippetModel::new(state.db.connection());
    match model.get(id).await {
        Ok(snippet) => format!("{:?}", snippet).into_response(),
        Err(StoreError::NoRecord) => not_found(),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to get snippet");
            server_error()
        }
    }
}

pub async fn snippet_create(method: Method, State(state): State<AppState>) -> Response {
    if method != Method::POST {
        return method_not_allowed(&[Method::POST]);
    }

    let model = SnippetModel::new(state.db.connection());
    match model.insert(DEMO_TITLE, DEMO_CONTENT, DEMO_EXPIRES_IN_DAYS).await {
        Ok(id) => {
            tracing::info!(id, "created snippet");
            Redirect::to(&format!("/snippet/view?id={id}")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to create snippet");
            server_error()
        }
    }
}
