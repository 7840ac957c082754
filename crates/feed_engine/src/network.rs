use std::time::Duration;

use feed_logging::feed_trace;
use rand::Rng;

use crate::EngineError;

/// Whether a simulated call fails after its delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaultPolicy {
    Never,
    Always,
    Random { failure_rate: f64 },
}

impl FaultPolicy {
    pub fn should_fail(&self) -> bool {
        match *self {
            FaultPolicy::Never => false,
            FaultPolicy::Always => true,
            FaultPolicy::Random { failure_rate } => {
                rand::thread_rng().gen_bool(failure_rate.clamp(0.0, 1.0))
            }
        }
    }
}

/// Latency and failure model of the pretend backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    pub initial_delay: Duration,
    pub page_delay: Duration,
    pub confirm_delay: Duration,
    pub faults: FaultPolicy,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(1500),
            page_delay: Duration::from_millis(800),
            confirm_delay: Duration::from_millis(500),
            faults: FaultPolicy::Random { failure_rate: 0.1 },
        }
    }
}

impl SimulationSettings {
    /// No latency, every call succeeds.
    pub fn always_succeed() -> Self {
        Self::instant(FaultPolicy::Never)
    }

    /// No latency, every call fails.
    pub fn always_fail() -> Self {
        Self::instant(FaultPolicy::Always)
    }

    fn instant(faults: FaultPolicy) -> Self {
        Self {
            initial_delay: Duration::ZERO,
            page_delay: Duration::ZERO,
            confirm_delay: Duration::ZERO,
            faults,
        }
    }
}

/// One simulated round trip: wait, then succeed or fail per policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedNetwork {
    delay: Duration,
    faults: FaultPolicy,
}

impl SimulatedNetwork {
    pub fn new(delay: Duration, faults: FaultPolicy) -> Self {
        Self { delay, faults }
    }

    pub fn always_succeed() -> Self {
        Self::new(Duration::ZERO, FaultPolicy::Never)
    }

    pub fn always_fail() -> Self {
        Self::new(Duration::ZERO, FaultPolicy::Always)
    }

    pub async fn call(&self, operation: &'static str) -> Result<(), EngineError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.faults.should_fail() {
            feed_trace!("Simulated failure for {}", operation);
            return Err(EngineError::Simulated { operation });
        }
        Ok(())
    }
}
