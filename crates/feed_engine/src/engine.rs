use std::sync::Arc;

use feed_core::{Effect, Msg, Session};
use feed_logging::{feed_error, feed_info};

use crate::{
    ContentSource, MockContentSource, MutationConfirmer, SessionStore, SimulatedConfirmer,
    SimulationSettings,
};

/// Runs effects against the injected ports and reports the outcome as a message.
#[derive(Clone)]
pub struct EffectExecutor {
    source: Arc<dyn ContentSource>,
    confirmer: Arc<dyn MutationConfirmer>,
    sessions: Arc<dyn SessionStore>,
}

impl EffectExecutor {
    pub fn new(
        source: Arc<dyn ContentSource>,
        confirmer: Arc<dyn MutationConfirmer>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            source,
            confirmer,
            sessions,
        }
    }

    /// Mock catalog and simulated backend sharing one set of settings.
    pub fn simulated(settings: &SimulationSettings, sessions: Arc<dyn SessionStore>) -> Self {
        Self::new(
            Arc::new(MockContentSource::new(settings)),
            Arc::new(SimulatedConfirmer::new(settings)),
            sessions,
        )
    }

    pub fn load_session(&self) -> Option<Session> {
        self.sessions.load()
    }

    /// Executes one effect. Session effects settle synchronously and yield no message.
    pub async fn execute(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::PersistSession(session) => {
                match self.sessions.save(&session) {
                    Ok(()) => feed_info!("Persisted session for {}", session.username),
                    Err(err) => feed_error!("Failed to persist session: {}", err),
                }
                None
            }
            Effect::ClearSession => {
                if let Err(err) = self.sessions.clear() {
                    feed_error!("Failed to clear session: {}", err);
                }
                None
            }
            Effect::FetchInitialPage { tag } => {
                let result = self
                    .source
                    .fetch_initial_page()
                    .await
                    .map_err(|err| err.to_string());
                Some(Msg::InitialPageLoaded { tag, result })
            }
            Effect::FetchPage {
                tag,
                start_index,
                count,
            } => {
                let result = self
                    .source
                    .fetch_page(start_index, count)
                    .await
                    .map_err(|err| err.to_string());
                Some(Msg::PageLoaded { tag, result })
            }
            Effect::ConfirmLike {
                epoch,
                video_id,
                liked,
            } => {
                let result = self
                    .confirmer
                    .confirm_like(&video_id, liked)
                    .await
                    .map_err(|err| err.to_string());
                Some(Msg::LikeConfirmed {
                    epoch,
                    video_id,
                    result,
                })
            }
            Effect::ConfirmFollow {
                epoch,
                user_id,
                following,
            } => {
                let result = self
                    .confirmer
                    .confirm_follow(&user_id, following)
                    .await
                    .map_err(|err| err.to_string());
                Some(Msg::FollowConfirmed {
                    epoch,
                    user_id,
                    result,
                })
            }
        }
    }
}
