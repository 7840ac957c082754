use crate::view_model::{FeedStatus, FeedViewModel};
use crate::{FeedError, Session, Video};

/// Number of videos requested by each load-more.
pub const PAGE_SIZE: usize = 5;

/// Requesting this page (or a later one) ends pagination.
pub const LAST_PAGE: u32 = 5;

const FIRST_PAGE: u32 = 1;

/// Identifies one in-flight list load.
///
/// `epoch` changes on every logout, `id` never repeats within a state, so a
/// response can only be applied to the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTag {
    pub epoch: u64,
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingLoad {
    Initial(RequestTag),
    More(RequestTag),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    videos: Vec<Video>,
    loading: bool,
    error: Option<FeedError>,
    has_more: bool,
    page: u32,
    session: Option<Session>,
    pending: Option<PendingLoad>,
    epoch: u64,
    next_request_id: u64,
    dirty: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            videos: Vec::new(),
            loading: false,
            error: None,
            has_more: true,
            page: FIRST_PAGE,
            session: None,
            pending: None,
            epoch: 0,
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn video(&self, video_id: &str) -> Option<&Video> {
        self.videos.iter().find(|video| video.id == video_id)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<FeedError> {
        self.error
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn pending(&self) -> Option<PendingLoad> {
        self.pending
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn status(&self) -> FeedStatus {
        match (self.pending, self.error) {
            (Some(PendingLoad::Initial(_)), _) => FeedStatus::LoadingInitial,
            (Some(PendingLoad::More(_)), _) => FeedStatus::LoadingMore,
            (None, Some(_)) => FeedStatus::Error,
            (None, None) => FeedStatus::Idle,
        }
    }

    pub fn view(&self) -> FeedViewModel {
        FeedViewModel {
            session: self.session.clone(),
            videos: self.videos.clone(),
            loading: self.loading,
            status: self.status(),
            error: self.error.map(|err| err.to_string()),
            has_more: self.has_more,
            page: self.page,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_session(&mut self, session: Session) {
        self.session = Some(session);
        self.dirty = true;
    }

    /// Back to a fresh state in a new epoch, so nothing in flight can land.
    pub(crate) fn reset_for_logout(&mut self) {
        let epoch = self.epoch + 1;
        let next_request_id = self.next_request_id;
        *self = Self {
            epoch,
            next_request_id,
            dirty: true,
            ..Self::default()
        };
    }

    pub(crate) fn initial_load_pending(&self) -> bool {
        matches!(self.pending, Some(PendingLoad::Initial(_)))
    }

    pub(crate) fn begin_load(&mut self, make: fn(RequestTag) -> PendingLoad) -> RequestTag {
        let tag = RequestTag {
            epoch: self.epoch,
            id: self.next_request_id,
        };
        self.next_request_id += 1;
        self.pending = Some(make(tag));
        self.loading = true;
        self.dirty = true;
        tag
    }

    pub(crate) fn is_current(&self, pending: PendingLoad) -> bool {
        self.pending == Some(pending)
    }

    pub(crate) fn finish_load(&mut self) {
        self.pending = None;
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn set_error(&mut self, error: Option<FeedError>) {
        self.error = error;
        self.dirty = true;
    }

    pub(crate) fn replace_videos(&mut self, videos: Vec<Video>) {
        self.videos = videos;
        self.page = FIRST_PAGE + 1;
        self.dirty = true;
    }

    /// Appends a page and advances the cursor; the cutoff is judged on the
    /// page that was just fetched.
    pub(crate) fn append_page(&mut self, videos: Vec<Video>) {
        let fetched_page = self.page;
        self.videos.extend(videos);
        self.page += 1;
        if fetched_page >= LAST_PAGE {
            self.has_more = false;
        }
        self.dirty = true;
    }

    pub(crate) fn next_start_index(&self) -> usize {
        self.videos.len() + 1
    }

    /// Flips the like on the matching video. Returns the new liked flag.
    pub(crate) fn toggle_like(&mut self, video_id: &str) -> Option<bool> {
        let video = self.videos.iter_mut().find(|video| video.id == video_id)?;
        video.toggle_like();
        self.dirty = true;
        Some(video.is_liked)
    }

    /// Flips the follow flag on every embedded copy of the user.
    ///
    /// Returns the flag of the first copy after the flip, or `None` when no
    /// video carries that user.
    pub(crate) fn toggle_follow(&mut self, user_id: &str) -> Option<bool> {
        let mut first = None;
        for video in self.videos.iter_mut().filter(|video| video.user.id == user_id) {
            video.user.toggle_follow();
            if first.is_none() {
                first = Some(video.user.is_following);
            }
        }
        if first.is_some() {
            self.dirty = true;
        }
        first
    }
}
