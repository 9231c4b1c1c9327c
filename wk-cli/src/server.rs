//! Read-only week grid served over HTTP (`wk serve`).

use anyhow::{Context, Result};
use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;
use tracing::{debug, error, info};
use wk_core::{
    DayView, EntryStore, Planner, WeekSelector, WeekView, WkError, render::RenderedLine,
};

use crate::render::Renderer;

pub type SharedPlanner<S> = Arc<Mutex<Planner<S>>>;

pub struct DayColumn {
    pub title: String,
    pub date_label: String,
    pub is_today: bool,
    pub lines: Vec<RenderedLine>,
}

impl DayColumn {
    fn new(day: DayView, today: NaiveDate) -> Self {
        Self {
            title: day.day.title(),
            date_label: day.date_label,
            is_today: day.date == today,
            lines: day.lines,
        }
    }
}

#[derive(Template)]
#[template(path = "week.html")]
pub struct WeekPage {
    pub week: String,
    pub caption: String,
    pub prev: String,
    pub next: String,
    pub days: Vec<DayColumn>,
}

impl WeekPage {
    pub fn new(view: WeekView, today: NaiveDate) -> Self {
        Self {
            week: view.week.to_string(),
            caption: view.caption,
            prev: view.prev.to_string(),
            next: view.next.to_string(),
            days: view
                .days
                .into_iter()
                .map(|d| DayColumn::new(d, today))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    week: Option<String>,
}

#[derive(Debug)]
pub enum PageError {
    BadRequest(WkError),
    Internal(String),
}

impl From<WkError> for PageError {
    fn from(e: WkError) -> Self {
        match e {
            WkError::InvalidWeek(_) | WkError::InvalidDay(_) => PageError::BadRequest(e),
            other => PageError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::BadRequest(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            PageError::Internal(message) => {
                error!(%message, "rendering week page failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub fn router<S>(planner: SharedPlanner<S>) -> Router
where
    S: EntryStore + Send + 'static,
{
    Router::new()
        .route("/", get(week_page::<S>))
        .with_state(planner)
}

/// Binds `127.0.0.1:<port>` and serves until the process is stopped.
pub async fn serve<S>(planner: Planner<S>, port: u16, renderer: &Renderer) -> Result<()>
where
    S: EntryStore + Send + 'static,
{
    let app = router(Arc::new(Mutex::new(planner)));
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "week viewer listening");
    renderer.print_info(&format!("🗓️  Week viewer running at http://{addr}"));
    renderer.print_info("Press Ctrl+C to stop");
    axum::serve(listener, app)
        .await
        .context("serving week viewer")?;
    Ok(())
}

async fn week_page<S>(
    State(planner): State<SharedPlanner<S>>,
    Query(query): Query<WeekQuery>,
) -> Result<Html<String>, PageError>
where
    S: EntryStore + Send + 'static,
{
    debug!(week = ?query.week, "GET /");
    render_week(&planner, query.week.as_deref()).map(Html)
}

/// An absent or empty `week` shows the current week.
pub fn render_week<S: EntryStore>(
    planner: &SharedPlanner<S>,
    week: Option<&str>,
) -> Result<String, PageError> {
    let selector = match week.filter(|w| !w.is_empty()) {
        Some(w) => WeekSelector::Explicit(w.parse()?),
        None => WeekSelector::Current,
    };

    let (view, today) = {
        let planner = planner
            .lock()
            .map_err(|_| PageError::Internal("planner lock poisoned".to_string()))?;
        (planner.week_view(selector, None)?, planner.today())
    };

    WeekPage::new(view, today)
        .render()
        .map_err(|e| PageError::Internal(e.to_string()))
}
