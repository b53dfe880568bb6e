//! Session state and navigation.
//!
//! The presentation layer owns a [`Session`] and hands it to the
//! renderer read-only. Navigation to other pages goes through the
//! [`Navigator`] collaborator.

use crate::error::StoreError;
use crate::store::{JsonFileStore, KeyValueStore, SnapshotState, USER_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// The dashboard section currently on screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Overview,
    Courses,
    Lectures,
    Students,
}

impl ActiveView {
    /// All views in sidebar order.
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Overview,
        ActiveView::Courses,
        ActiveView::Lectures,
        ActiveView::Students,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Overview => "Overview",
            ActiveView::Courses => "Courses",
            ActiveView::Lectures => "Lectures",
            ActiveView::Students => "Students",
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveView::Overview => write!(f, "overview"),
            ActiveView::Courses => write!(f, "courses"),
            ActiveView::Lectures => write!(f, "lectures"),
            ActiveView::Students => write!(f, "students"),
        }
    }
}

/// Pages outside the dashboard that it can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    CourseManagement,
}

impl Page {
    /// Page identifier understood by the router.
    pub fn id(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::CourseManagement => "courseManagement",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Page router provided by the host application.
pub trait Navigator {
    fn navigate(&mut self, page: Page);
}

/// Navigator that only logs the requested page.
#[derive(Debug, Default)]
pub struct LoggingNavigator {
    pub last: Option<Page>,
}

impl Navigator for LoggingNavigator {
    fn navigate(&mut self, page: Page) {
        info!("Navigating to '{}'", page);
        self.last = Some(page);
    }
}

/// Per-visit UI state of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    active_view: ActiveView,
    profile_menu_open: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn profile_menu_open(&self) -> bool {
        self.profile_menu_open
    }

    /// Switch to another section. Any view can follow any other.
    pub fn select(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }
}

/// Sign the user out and return to the landing page.
///
/// The store change is made before navigating; the caller decides
/// whether and when to persist it.
pub fn logout<S, N>(store: &mut S, session: &mut Session, navigator: &mut N)
where
    S: KeyValueStore + ?Sized,
    N: Navigator + ?Sized,
{
    store.remove(USER_KEY);
    session.profile_menu_open = false;
    navigator.navigate(Page::Landing);
}

/// [`logout`] followed by writing a file-backed store back to disk.
///
/// A snapshot that could not be loaded is left untouched and an error is
/// returned before anything changes. When no snapshot exists there is no
/// user to clear, so no file is created.
pub fn logout_and_persist<N: Navigator + ?Sized>(
    store: &mut JsonFileStore,
    session: &mut Session,
    navigator: &mut N,
) -> Result<(), StoreError> {
    match store.state() {
        SnapshotState::Unusable => Err(StoreError::Unusable {
            path: store.path().to_path_buf(),
        }),
        SnapshotState::Missing => {
            debug!("No snapshot at {}, nothing to persist", store.path().display());
            logout(store, session, navigator);
            Ok(())
        }
        SnapshotState::Loaded => {
            logout(store, session, navigator);
            store.persist()
        }
    }
}
