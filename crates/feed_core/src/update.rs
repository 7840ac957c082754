use feed_logging::{feed_debug, feed_trace, feed_warn};

use crate::{Effect, FeedError, FeedState, Msg, PendingLoad, Session, PAGE_SIZE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionRestored(Some(session)) => {
            feed_debug!("Restored session for {}", session.username);
            state.set_session(session);
            Vec::new()
        }
        Msg::SessionRestored(None) => Vec::new(),
        Msg::LoginSubmitted { username, user_id } => {
            if username.trim().is_empty() {
                return (state, Vec::new());
            }
            let session = Session::new(user_id, username);
            state.set_session(session.clone());
            vec![Effect::PersistSession(session)]
        }
        Msg::LogoutClicked => {
            state.reset_for_logout();
            vec![Effect::ClearSession]
        }
        Msg::LoadVideosRequested => {
            if state.initial_load_pending() {
                feed_trace!("Initial load already in flight; ignoring request");
                return (state, Vec::new());
            }
            if let Some(PendingLoad::More(tag)) = state.pending() {
                feed_debug!("Initial load supersedes page request {}", tag.id);
            }
            state.set_error(None);
            let tag = state.begin_load(PendingLoad::Initial);
            vec![Effect::FetchInitialPage { tag }]
        }
        Msg::LoadMoreRequested => {
            if !state.has_more() || state.loading() {
                return (state, Vec::new());
            }
            state.set_error(None);
            let start_index = state.next_start_index();
            let tag = state.begin_load(PendingLoad::More);
            vec![Effect::FetchPage {
                tag,
                start_index,
                count: PAGE_SIZE,
            }]
        }
        Msg::LikeToggled { video_id } => match state.toggle_like(&video_id) {
            Some(liked) => vec![Effect::ConfirmLike {
                epoch: state.epoch(),
                video_id,
                liked,
            }],
            None => Vec::new(),
        },
        Msg::FollowToggled { user_id } => match state.toggle_follow(&user_id) {
            Some(following) => vec![Effect::ConfirmFollow {
                epoch: state.epoch(),
                user_id,
                following,
            }],
            None => Vec::new(),
        },
        Msg::InitialPageLoaded { tag, result } => {
            if !state.is_current(PendingLoad::Initial(tag)) {
                feed_trace!("Dropping stale initial page for request {}", tag.id);
                return (state, Vec::new());
            }
            match result {
                Ok(videos) => state.replace_videos(videos),
                Err(reason) => {
                    feed_warn!("Initial load failed: {}", reason);
                    state.set_error(Some(FeedError::LoadVideos));
                }
            }
            state.finish_load();
            Vec::new()
        }
        Msg::PageLoaded { tag, result } => {
            if !state.is_current(PendingLoad::More(tag)) {
                feed_trace!("Dropping stale page for request {}", tag.id);
                return (state, Vec::new());
            }
            match result {
                Ok(videos) => state.append_page(videos),
                Err(reason) => {
                    feed_warn!("Load more failed: {}", reason);
                    state.set_error(Some(FeedError::LoadMore));
                }
            }
            state.finish_load();
            Vec::new()
        }
        Msg::LikeConfirmed {
            epoch,
            video_id,
            result,
        } => {
            if epoch != state.epoch() {
                return (state, Vec::new());
            }
            if let Err(reason) = result {
                feed_warn!("Like on video {} rejected: {}; rolling back", video_id, reason);
                state.toggle_like(&video_id);
                state.set_error(Some(FeedError::Like));
            }
            Vec::new()
        }
        Msg::FollowConfirmed {
            epoch,
            user_id,
            result,
        } => {
            if epoch != state.epoch() {
                return (state, Vec::new());
            }
            if let Err(reason) = result {
                feed_warn!("Follow of user {} rejected: {}; rolling back", user_id, reason);
                state.toggle_follow(&user_id);
                state.set_error(Some(FeedError::Follow));
            }
            Vec::new()
        }
    };

    (state, effects)
}
