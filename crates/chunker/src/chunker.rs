use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};

/// Sliding-window splitter over document text
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::invalid_config)?;
        Ok(Self { config })
    }

    /// Split text into overlapping windows of `config.size` characters.
    ///
    /// Windows are indexed by character, not byte, so multi-byte input
    /// never splits a code point. Windows that trim to nothing are
    /// dropped. Deterministic for a given input and configuration.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let size = self.config.size;
        let step = self.config.step();

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            let end = (start + size).min(chars.len());
            let window: String = chars[start..end].iter().collect();
            if !window.trim().is_empty() {
                chunks.push(window);
            }
            start += step;
        }
        chunks
    }

    /// The configuration this chunker was built with
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }
}
