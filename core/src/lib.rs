//! Student directory core: fetch, shape and present the students list.
//!
//! # Overview
//! One GET against the users endpoint produces raw user records, which are
//! mapped into display-ready students and shown through a three-state list
//! view (loading, error, loaded).
//!
//! # Design
//! - `StudentsClient` is stateless: `build_list_users` produces a plain-data
//!   request, `parse_list_users` classifies a plain-data response.
//! - A `Transport` executes the round-trip; `ReqwestTransport` is the real
//!   one, tests script their own.
//! - `fetch_students` is the error boundary: every failure becomes
//!   `FetchOutcome::Failure` with a user-facing message.
//! - `transform` is pure; positional fields are derived, not looked up.
//! - `StudentsView` owns the state and discards results for stale mounts.

pub mod client;
pub mod error;
pub mod fetch;
pub mod http;
pub mod render;
pub mod transform;
pub mod types;
pub mod view;

pub use client::{StudentsClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::FetchError;
pub use fetch::{fetch_students, try_fetch_students};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
pub use render::{render_student, ListRender, StudentCard};
pub use transform::{transform, COURSES};
pub use types::{Company, FetchOutcome, RawUser, Student};
pub use view::{MountToken, StudentsView, ViewState};
