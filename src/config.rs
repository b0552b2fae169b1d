//! Board configuration.

use crate::error::{BoardError, Result};
use serde::Deserialize;

/// Board configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Minimum description length, in characters.
    /// Default: 5
    pub description_min_length: usize,

    /// Maximum title length (None = unlimited).
    pub title_max_length: Option<usize>,

    /// Smallest accepted capacity (inclusive).
    /// Default: 1
    pub capacity_min: u32,

    /// Largest accepted capacity (inclusive).
    /// Default: 10
    pub capacity_max: u32,

    /// Id of the host container components mount into.
    pub host_id: String,

    /// Id given to the mounted input form.
    pub form_element_id: String,

    /// Buffer size for channel subscriptions.
    /// Default: 1000
    pub channel_buffer_size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            title_max_length: None,
            capacity_min: 1,
            capacity_max: 10,
            host_id: "app".to_string(),
            form_element_id: "user-input".to_string(),
            channel_buffer_size: 1000,
        }
    }
}

impl BoardConfig {
    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no input could ever satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.capacity_min > self.capacity_max {
            return Err(BoardError::Config(format!(
                "capacity_min ({}) exceeds capacity_max ({})",
                self.capacity_min, self.capacity_max
            )));
        }
        if self.channel_buffer_size == 0 {
            return Err(BoardError::Config(
                "channel_buffer_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{"capacity_max": 20}"#).unwrap();
        assert_eq!(config.capacity_max, 20);
        assert_eq!(config.capacity_min, 1);
        assert_eq!(config.description_min_length, 5);
        assert_eq!(config.host_id, "app");
    }

    #[test]
    fn test_inverted_capacity_range_rejected() {
        let result = BoardConfig::from_json(r#"{"capacity_min": 5, "capacity_max": 2}"#);
        assert!(matches!(result, Err(BoardError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = BoardConfig::from_json("{not json");
        assert!(matches!(result, Err(BoardError::Serialization(_))));
    }
}
