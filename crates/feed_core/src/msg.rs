use crate::{RequestTag, Session, Video};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session read from the persisted slot at startup.
    SessionRestored(Option<Session>),
    /// Viewer submitted the login form. `user_id` is minted by the runtime.
    LoginSubmitted { username: String, user_id: String },
    /// Viewer logged out.
    LogoutClicked,
    /// First page requested (initial load or retry).
    LoadVideosRequested,
    /// Viewer scrolled near the end of the list.
    LoadMoreRequested,
    /// Viewer tapped the like button of a video.
    LikeToggled { video_id: String },
    /// Viewer tapped follow on a creator.
    FollowToggled { user_id: String },
    /// Content source answered the initial fetch.
    InitialPageLoaded {
        tag: RequestTag,
        result: Result<Vec<Video>, String>,
    },
    /// Content source answered a page fetch.
    PageLoaded {
        tag: RequestTag,
        result: Result<Vec<Video>, String>,
    },
    /// Backend acknowledged (or rejected) a like toggle.
    LikeConfirmed {
        epoch: u64,
        video_id: String,
        result: Result<(), String>,
    },
    /// Backend acknowledged (or rejected) a follow toggle.
    FollowConfirmed {
        epoch: u64,
        user_id: String,
        result: Result<(), String>,
    },
}
