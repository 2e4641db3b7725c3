use log::debug;
use tokio::sync::RwLock;

use crate::models::settings::Settings;
use crate::services::delay::Latency;

const SAVE_DELAY: u64 = 1000;

/// Holds the settings panel for the lifetime of the process.
pub struct SettingsService {
    current: RwLock<Settings>,
    latency: Latency,
}

impl SettingsService {
    pub fn new(initial: Settings, latency: Latency) -> Self {
        SettingsService {
            current: RwLock::new(initial),
            latency,
        }
    }

    pub async fn get(&self) -> Settings {
        self.current.read().await.clone()
    }

    pub async fn update(&self, settings: Settings) -> Settings {
        self.latency.wait(SAVE_DELAY).await;
        let mut current = self.current.write().await;
        *current = settings;
        debug!("settings saved for {}", current.company.company_name);
        current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_replaces_settings() {
        let service = SettingsService::new(Settings::default(), Latency::disabled());
        let mut changed = service.get().await;
        changed.company.company_name = "Acme".to_string();
        changed.notifications.attendance_alerts = true;

        // Reads hand out copies.
        assert_eq!(service.get().await, Settings::default());

        let saved = service.update(changed.clone()).await;
        assert_eq!(saved, changed);
        assert_eq!(service.get().await, changed);
    }
}
