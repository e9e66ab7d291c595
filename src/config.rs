//! Configuration for tablewire decode sessions
//!
//! Centralized configuration with sensible defaults.

/// Limits applied while framing messages for one decode session
///
/// Both limits are checked before any body allocation, so a hostile or
/// corrupt length field cannot drive a huge `Vec` reservation.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Max byte length of a single String message payload
    pub max_string_len: usize,

    /// Max number of fields in a single Table definition
    pub max_fields: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_string_len: 16 * 1024 * 1024, // 16 MB
            max_fields: 1024,
        }
    }
}

impl SessionConfig {
    /// Create a new config builder
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

/// Builder for SessionConfig
#[derive(Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Set the maximum String payload length (in bytes)
    pub fn max_string_len(mut self, len: usize) -> Self {
        self.config.max_string_len = len;
        self
    }

    /// Set the maximum number of fields per table definition
    pub fn max_fields(mut self, count: usize) -> Self {
        self.config.max_fields = count;
        self
    }

    pub fn build(self) -> SessionConfig {
        self.config
    }
}
