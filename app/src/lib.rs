//! Host for the student directory: routing, configuration and page output.
//!
//! # Overview
//! Two routes, home and students. The students page mounts a
//! `StudentsView`, runs its single fetch through whatever `Transport` the
//! caller supplies and renders the settled state as text or JSON.

use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use roster_core::{StudentsClient, StudentsView, Transport, ViewState, DEFAULT_ENDPOINT};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown route {0:?} (expected `/` or `/students`)")]
    UnknownRoute(String),

    #[error("could not encode page: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not write page: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Students,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Students => "/students",
        }
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('/') {
            "" | "home" | "/home" => Ok(Route::Home),
            "students" | "/students" => Ok(Route::Students),
            _ => Err(AppError::UnknownRoute(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Browse the student directory from the terminal.
#[derive(Debug, Parser)]
#[command(name = "roster", version)]
pub struct Cli {
    /// Page to open: `/` (home) or `/students`.
    #[arg(default_value = "/")]
    pub route: String,

    /// Users endpoint queried by the students page.
    #[arg(long, env = "ROSTER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in milliseconds.
    #[arg(long, env = "ROSTER_TIMEOUT_MS", default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl Cli {
    pub fn client(&self) -> StudentsClient {
        StudentsClient::new(&self.endpoint).with_timeout(Duration::from_millis(self.timeout_ms))
    }
}

/// A rendered page and whether it ended in the error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub body: String,
    pub failed: bool,
}

fn nav(active: Route) -> String {
    [Route::Home, Route::Students]
        .iter()
        .map(|route| {
            let label = match route {
                Route::Home => "Home",
                Route::Students => "Students",
            };
            if *route == active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

pub fn render_home() -> Page {
    let body = format!(
        "{}\n\nStudent Directory\n\nBrowse enrolled students, their courses and contact details.\nOpen {} to see the list.\n",
        nav(Route::Home),
        Route::Students.path()
    );
    Page {
        body,
        failed: false,
    }
}

pub async fn render_students<T>(
    client: &StudentsClient,
    transport: &T,
    format: Format,
) -> Result<Page, AppError>
where
    T: Transport + ?Sized,
{
    let mut view = StudentsView::new();
    let failed = matches!(view.load(client, transport).await, ViewState::Error(_));

    let body = match format {
        Format::Text => format!("{}\n\nStudents\n\n{}", nav(Route::Students), view.render()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(view.state())?;
            json.push('\n');
            json
        }
    };
    Ok(Page { body, failed })
}

pub async fn render_route<T>(cli: &Cli, transport: &T) -> Result<Page, AppError>
where
    T: Transport + ?Sized,
{
    let route: Route = cli.route.parse()?;
    tracing::debug!(path = route.path(), "rendering route");
    match route {
        Route::Home => Ok(render_home()),
        Route::Students => render_students(&cli.client(), transport, cli.format).await,
    }
}
