use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use feed_core::{update, Effect, FeedState, FeedViewModel, Msg};
use feed_engine::EffectExecutor;
use feed_logging::{feed_debug, feed_info};
use tokio::sync::watch;

/// Handle to the one feed state machine of a running app.
///
/// Cheap to clone; every clone drives the same state. Each operation resolves
/// once everything it started has settled, so a caller that wants the
/// fire-and-forget behaviour of a tap handler spawns the returned future.
/// State is only locked between awaits, never across one.
///
/// Only the named operations reach the state machine; page results and
/// confirmations cannot be injected from outside:
///
/// ```compile_fail
/// async fn forge(store: &feed_app::FeedStore) {
///     store.send(feed_core::Msg::LogoutClicked).await;
/// }
/// ```
#[derive(Clone)]
pub struct FeedStore {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<FeedState>,
    executor: EffectExecutor,
    views: watch::Sender<FeedViewModel>,
}

impl FeedStore {
    /// Builds the store and restores whatever session the slot holds.
    pub fn open(executor: EffectExecutor) -> Self {
        let state = FeedState::new();
        let (views, _) = watch::channel(state.view());
        let store = Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                executor,
                views,
            }),
        };
        let restored = store.inner.executor.load_session();
        let effects = store.dispatch(Msg::SessionRestored(restored));
        debug_assert!(effects.is_empty());
        store
    }

    pub fn view(&self) -> FeedViewModel {
        self.lock().view()
    }

    /// Receives a fresh view model after every change.
    pub fn subscribe(&self) -> watch::Receiver<FeedViewModel> {
        self.inner.views.subscribe()
    }

    pub async fn login(&self, username: &str) {
        let user_id = Utc::now().timestamp_millis().to_string();
        self.send(Msg::LoginSubmitted {
            username: username.to_string(),
            user_id,
        })
        .await;
    }

    pub async fn logout(&self) {
        feed_info!("Logging out");
        self.send(Msg::LogoutClicked).await;
    }

    pub async fn load_videos(&self) {
        self.send(Msg::LoadVideosRequested).await;
    }

    pub async fn load_more_videos(&self) {
        self.send(Msg::LoadMoreRequested).await;
    }

    pub async fn toggle_like(&self, video_id: &str) {
        self.send(Msg::LikeToggled {
            video_id: video_id.to_string(),
        })
        .await;
    }

    pub async fn toggle_follow(&self, user_id: &str) {
        self.send(Msg::FollowToggled {
            user_id: user_id.to_string(),
        })
        .await;
    }

    /// Applies `msg`, then runs the resulting effects and feeds their outcomes
    /// back in until nothing is left.
    async fn send(&self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            for effect in self.dispatch(msg) {
                if let Some(next) = self.inner.executor.execute(effect).await {
                    inbox.push_back(next);
                }
            }
        }
    }

    fn dispatch(&self, msg: Msg) -> Vec<Effect> {
        feed_debug!("Dispatch {:?}", MsgLabel(&msg));
        let mut guard = self.lock();
        let state = std::mem::take(&mut *guard);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        if state.consume_dirty() {
            self.inner.views.send_replace(view);
        }
        *guard = state;
        effects
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FeedState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Logs a message without dumping whole pages of videos.
struct MsgLabel<'a>(&'a Msg);

impl std::fmt::Debug for MsgLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Msg::InitialPageLoaded { tag, result } | Msg::PageLoaded { tag, result } => {
                let outcome = match result {
                    Ok(videos) => format!("{} videos", videos.len()),
                    Err(reason) => reason.clone(),
                };
                write!(f, "PageResult(request {}, {})", tag.id, outcome)
            }
            other => write!(f, "{other:?}"),
        }
    }
}
