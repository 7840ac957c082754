use crate::{Session, Video};

/// Where the feed sits on the loading/error axis.
///
/// Exhaustion is tracked separately by `has_more` and combines with any of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    LoadingInitial,
    LoadingMore,
    Error,
}

/// Read-only snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedViewModel {
    pub session: Option<Session>,
    pub videos: Vec<Video>,
    pub loading: bool,
    pub status: FeedStatus,
    pub error: Option<String>,
    pub has_more: bool,
    pub page: u32,
    pub dirty: bool,
}

impl FeedViewModel {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn exhausted(&self) -> bool {
        !self.has_more
    }
}
