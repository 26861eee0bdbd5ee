use serde::{Deserialize, Serialize};

/// Default window width in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 800;

/// Default overlap between consecutive windows in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 120;

/// Configuration for sliding-window chunking
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Window width in characters
    pub size: usize,

    /// Characters shared between consecutive windows
    pub overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl ChunkerConfig {
    /// Create a config with explicit window parameters
    pub fn new(size: usize, overlap: usize) -> Self {
        Self { size, overlap }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("size must be > 0".to_string());
        }
        Ok(())
    }

    /// Distance the window advances per step.
    ///
    /// Clamped to at least 1 so an overlap equal to or larger than the
    /// window still terminates.
    pub fn step(&self) -> usize {
        self.size.saturating_sub(self.overlap).max(1)
    }
}
