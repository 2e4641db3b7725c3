use std::time::Duration;

/// Simulated I/O latency shared by the data services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn simulated() -> Self {
        Latency { enabled: true }
    }

    pub fn disabled() -> Self {
        Latency { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn wait(&self, millis: u64) {
        if self.enabled {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::simulated()
    }
}

/// Per-operation delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delays {
    pub list: u64,
    pub get: u64,
    pub create: u64,
    pub update: u64,
    pub delete: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_advances_the_clock() {
        let start = Instant::now();
        Latency::simulated().wait(300).await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_latency_returns_immediately() {
        let start = Instant::now();
        Latency::disabled().wait(300).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
