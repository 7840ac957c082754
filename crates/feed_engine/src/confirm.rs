use feed_logging::feed_debug;

use crate::{EngineError, SimulatedNetwork, SimulationSettings};

/// Server acknowledgment for optimistic toggles. Carries no data back.
#[async_trait::async_trait]
pub trait MutationConfirmer: Send + Sync {
    async fn confirm_like(&self, video_id: &str, liked: bool) -> Result<(), EngineError>;

    async fn confirm_follow(&self, user_id: &str, following: bool) -> Result<(), EngineError>;
}

pub struct SimulatedConfirmer {
    network: SimulatedNetwork,
}

impl SimulatedConfirmer {
    pub fn new(settings: &SimulationSettings) -> Self {
        Self::with_network(SimulatedNetwork::new(settings.confirm_delay, settings.faults))
    }

    pub fn with_network(network: SimulatedNetwork) -> Self {
        Self { network }
    }
}

#[async_trait::async_trait]
impl MutationConfirmer for SimulatedConfirmer {
    async fn confirm_like(&self, video_id: &str, liked: bool) -> Result<(), EngineError> {
        feed_debug!("Confirming like={} on video {}", liked, video_id);
        self.network.call("like").await
    }

    async fn confirm_follow(&self, user_id: &str, following: bool) -> Result<(), EngineError> {
        feed_debug!("Confirming following={} for user {}", following, user_id);
        self.network.call("follow").await
    }
}
