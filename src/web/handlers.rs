//! Request handlers for the web shell
//!
//! The page is rendered with plain string formatting; the history and
//! category list are small enough that a templating engine would be noise.
//! Every handler resolves the session first, minting a fresh signed cookie
//! when the request carried none (or carried one that fails verification),
//! and attaches the `Set-Cookie` header to whatever response it returns.

use crate::api::ANY_CATEGORY;
use crate::web::session::COOKIE_NAME;
use crate::web::AppState;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use uuid::Uuid;

/// Build the web shell router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/get_joke", post(get_joke))
        .route("/clear_jokes", post(clear_jokes))
        .with_state(state)
}

/// Form body for `POST /get_joke`
#[derive(Debug, Deserialize)]
pub struct GetJokeForm {
    /// Requested category; absent or "Any" means unfiltered
    pub joke_type: Option<String>,
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, set_cookie) = resolve_session(&state, &headers);
    let types = state.client.joke_types().await;
    let session = state.sessions.snapshot(session_id).await;
    let page = render_index(&session.jokes, &types, &session.selected);
    with_cookie(set_cookie, Html(page))
}

async fn get_joke(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<GetJokeForm>,
) -> Response {
    let (session_id, set_cookie) = resolve_session(&state, &headers);

    let selected = form
        .joke_type
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| ANY_CATEGORY.to_string());
    tracing::info!("get_joke requested with category '{}'", selected);

    match state.client.random_joke(Some(&selected)).await {
        Some(joke) => state.sessions.append(session_id, joke).await,
        None => tracing::warn!("No joke available for category '{}'", selected),
    }
    state.sessions.set_selected(session_id, selected).await;

    with_cookie(set_cookie, Redirect::to("/"))
}

async fn clear_jokes(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, set_cookie) = resolve_session(&state, &headers);
    state.sessions.clear(session_id).await;
    with_cookie(set_cookie, Redirect::to("/"))
}

/// Session id from the request, or a fresh one plus its `Set-Cookie` value
fn resolve_session(state: &AppState, headers: &HeaderMap) -> (Uuid, Option<String>) {
    if let Some(id) = cookie_value(headers, COOKIE_NAME).and_then(|v| state.cookies.decode(v)) {
        return (id, None);
    }
    let id = Uuid::new_v4();
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        COOKIE_NAME,
        state.cookies.encode(id)
    );
    (id, Some(cookie))
}

/// Value of the named cookie, if the request carried one
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
}

fn with_cookie(set_cookie: Option<String>, inner: impl IntoResponse) -> Response {
    match set_cookie {
        Some(cookie) => {
            (AppendHeaders([(header::SET_COOKIE, cookie)]), inner).into_response()
        }
        None => inner.into_response(),
    }
}

/// Render the index page
fn render_index(jokes: &[crate::api::Joke], types: &[String], selected: &str) -> String {
    let mut options = format!(
        "<option value=\"{any}\"{sel}>{any}</option>",
        any = ANY_CATEGORY,
        sel = if selected.eq_ignore_ascii_case(ANY_CATEGORY) {
            " selected"
        } else {
            ""
        }
    );
    for t in types {
        let escaped = html_escape(t);
        options.push_str(&format!(
            "<option value=\"{v}\"{sel}>{v}</option>",
            v = escaped,
            sel = if t == selected { " selected" } else { "" }
        ));
    }

    let history = if jokes.is_empty() {
        "<p class=\"empty\">No jokes yet. Get one!</p>".to_string()
    } else {
        let items: String = jokes
            .iter()
            .map(|j| {
                format!(
                    "<li><span class=\"category\">[{}]</span> {}<br><em>{}</em></li>",
                    html_escape(&j.joke_type),
                    html_escape(&j.setup),
                    html_escape(&j.punchline)
                )
            })
            .collect();
        format!("<ol class=\"jokes\">{}</ol>", items)
    };

    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Jokebox</title></head>\n\
         <body>\n<h1>Jokebox</h1>\n\
         <form method=\"post\" action=\"/get_joke\">\n\
         <label for=\"joke_type\">Category:</label>\n\
         <select name=\"joke_type\" id=\"joke_type\">{options}</select>\n\
         <button type=\"submit\">Get a joke</button>\n</form>\n\
         <form method=\"post\" action=\"/clear_jokes\">\n\
         <button type=\"submit\">Clear jokes</button>\n</form>\n\
         {history}\n</body>\n</html>\n"
    )
}

/// Minimal HTML escaping for text interpolated into the page
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
