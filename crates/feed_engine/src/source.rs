use std::sync::Mutex;

use feed_core::Video;
use feed_logging::feed_debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{generate_videos, initial_videos, EngineError, SimulatedNetwork, SimulationSettings};

/// Where feed pages come from.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_initial_page(&self) -> Result<Vec<Video>, EngineError>;

    /// `count` videos whose ids start at `start_index` (1-based).
    async fn fetch_page(&self, start_index: usize, count: usize) -> Result<Vec<Video>, EngineError>;
}

/// Serves the built-in catalog over a simulated network.
pub struct MockContentSource {
    initial: SimulatedNetwork,
    pages: SimulatedNetwork,
    rng: Mutex<StdRng>,
}

impl MockContentSource {
    pub fn new(settings: &SimulationSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Same as `new`, but generated pages are reproducible.
    pub fn seeded(settings: &SimulationSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &SimulationSettings, rng: StdRng) -> Self {
        Self {
            initial: SimulatedNetwork::new(settings.initial_delay, settings.faults),
            pages: SimulatedNetwork::new(settings.page_delay, settings.faults),
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for MockContentSource {
    async fn fetch_initial_page(&self) -> Result<Vec<Video>, EngineError> {
        self.initial.call("initial page").await?;
        Ok(initial_videos())
    }

    async fn fetch_page(&self, start_index: usize, count: usize) -> Result<Vec<Video>, EngineError> {
        self.pages.call("page").await?;
        let videos = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            generate_videos(start_index, count, &mut *rng)
        };
        feed_debug!("Generated {} videos from index {}", videos.len(), start_index);
        Ok(videos)
    }
}
