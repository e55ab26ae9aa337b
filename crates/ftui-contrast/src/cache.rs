use ahash::AHashMap;

use crate::color::Color;
use crate::config::ContrastConfig;
use crate::contrast::{DerivedColors, derive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
}

/// Memo of [`derive`] results for one fixed config (bounded; clears on overflow).
///
/// Results are identical to calling [`derive`] directly.
#[derive(Debug)]
pub struct ContrastCache {
    config: ContrastConfig,
    max_entries: usize,
    map: AHashMap<u32, DerivedColors>,
    hits: u64,
    misses: u64,
}

impl ContrastCache {
    #[must_use]
    pub fn new(config: ContrastConfig) -> Self {
        Self::with_capacity(config, 4096)
    }

    #[must_use]
    pub fn with_capacity(config: ContrastConfig, max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            config,
            max_entries,
            map: AHashMap::with_capacity(max_entries.min(2048)),
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ContrastConfig {
        &self.config
    }

    pub fn derive(&mut self, background: Color) -> DerivedColors {
        let key = background.as_key();
        if let Some(cached) = self.map.get(&key) {
            self.hits += 1;
            return *cached;
        }
        self.misses += 1;
        let derived = derive(background, &self.config);
        if self.map.len() >= self.max_entries {
            tracing::debug!(entries = self.map.len(), "contrast cache full; clearing");
            self.map.clear();
        }
        self.map.insert(key, derived);
        derived
    }

    pub fn font_color(&mut self, background: Color) -> Color {
        self.derive(background).font
    }

    pub fn focus_color(&mut self, context: Color) -> Color {
        self.derive(context).focus
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.map.len(),
            capacity: self.max_entries,
        }
    }
}
