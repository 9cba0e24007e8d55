//! Students list view: a three-state machine driven by one fetch per mount.
//!
//! # Design
//! `Loading` is entered on every mount. The first outcome resolved against
//! that mount moves the view to `Error` or `Loaded`, both terminal until the
//! next mount. Each mount hands out a [`MountToken`]; a result carrying an
//! older token, or arriving after `unmount`, is dropped instead of being
//! applied to a view that no longer asked for it.

use serde::Serialize;
use tracing::debug;

use crate::client::StudentsClient;
use crate::fetch::fetch_students;
use crate::http::Transport;
use crate::render::{render_student, ListRender};
use crate::types::{FetchOutcome, Student};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Vec<Student>),
}

/// Identifies one mount of a [`StudentsView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountToken(u64);

#[derive(Debug)]
pub struct StudentsView {
    state: ViewState,
    mounted: Option<MountToken>,
    mounts: u64,
}

impl Default for StudentsView {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentsView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            mounted: None,
            mounts: 0,
        }
    }

    /// Activate the view, resetting it to `Loading`.
    pub fn mount(&mut self) -> MountToken {
        self.mounts += 1;
        let token = MountToken(self.mounts);
        self.mounted = Some(token);
        self.state = ViewState::Loading;
        token
    }

    /// Tear the view down. Pending results for the old mount are discarded.
    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply a fetch outcome. Returns `false` when the outcome was dropped
    /// because it belongs to a stale mount or the view already settled.
    pub fn resolve(&mut self, token: MountToken, outcome: FetchOutcome) -> bool {
        if self.mounted != Some(token) {
            debug!(?token, "dropping result for stale mount");
            return false;
        }
        if self.state != ViewState::Loading {
            debug!(?token, "view already settled");
            return false;
        }
        self.state = match outcome {
            FetchOutcome::Success(students) => ViewState::Loaded(students),
            FetchOutcome::Failure(message) => ViewState::Error(message),
        };
        true
    }

    /// Mount, fetch once, and resolve.
    pub async fn load<T>(&mut self, client: &StudentsClient, transport: &T) -> &ViewState
    where
        T: Transport + ?Sized,
    {
        let token = self.mount();
        let outcome = fetch_students(client, transport).await;
        self.resolve(token, outcome);
        &self.state
    }

    pub fn render(&self) -> ListRender {
        match &self.state {
            ViewState::Loading => ListRender::Loading,
            ViewState::Error(message) => ListRender::Error(message.clone()),
            ViewState::Loaded(students) => {
                ListRender::List(students.iter().map(render_student).collect())
            }
        }
    }
}
