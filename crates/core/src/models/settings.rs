use serde::{Deserialize, Serialize};

/// System-wide settings managed by administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub allow_public_events: bool,
    pub max_event_capacity: u32,
    pub default_page_size: usize,
    pub maintenance_mode: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            allow_public_events: true,
            max_event_capacity: 100,
            default_page_size: crate::listing::DEFAULT_PAGE_SIZE,
            maintenance_mode: false,
        }
    }
}

/// Partial settings update. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_public_events: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_event_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
}

impl UpdateSettingsRequest {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply updates to existing settings.
    pub fn apply_to(self, settings: &mut SystemSettings) {
        if let Some(allow) = self.allow_public_events {
            settings.allow_public_events = allow;
        }
        if let Some(capacity) = self.max_event_capacity {
            settings.max_event_capacity = capacity;
        }
        if let Some(size) = self.default_page_size {
            settings.default_page_size = size;
        }
        if let Some(maintenance) = self.maintenance_mode {
            settings.maintenance_mode = maintenance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_update() {
        let mut settings = SystemSettings::default();
        let update = UpdateSettingsRequest {
            maintenance_mode: Some(true),
            ..Default::default()
        };

        assert!(!update.is_empty());
        update.apply_to(&mut settings);

        assert!(settings.maintenance_mode);
        assert!(settings.allow_public_events);
        assert_eq!(settings.max_event_capacity, 100);
    }

    #[test]
    fn test_empty_update_serializes_to_empty_object() {
        let update = UpdateSettingsRequest::default();

        assert!(update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
    }
}
