use std::time::Duration;

use crate::error::{FinderError, FinderResult};

/// Default search endpoint: Reddit's /r/anime search API.
pub const DEFAULT_ENDPOINT: &str = "https://www.reddit.com/r/anime/search.json";

const DEFAULT_USER_AGENT: &str = concat!("kansou-library/", env!("CARGO_PKG_VERSION"));

/// Per-signal importance multipliers used to compute certainty.
///
/// Each signal that matches a thread title contributes its weight; the sum of
/// earned weights is normalized by the total of all four. The episode signal
/// carries the most weight by default since the episode number is the
/// strongest discriminator between threads of the same show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWeights {
    /// Weight for the episode number/label appearing in the thread title.
    pub episode: u32,
    /// Weight for the word "discussion" appearing in the thread title.
    pub discussion: u32,
    /// Weight for the searched show title appearing in the thread title.
    pub title: u32,
    /// Weight for the word "spoiler" appearing in the thread title.
    pub spoiler: u32,
}

impl SearchWeights {
    /// Sum of all four weights, the normalization denominator.
    ///
    /// Saturates on overflow; `SearchConfig::validate` rejects weight sets
    /// whose exact sum does not fit in a u32, so a validated config always
    /// normalizes with the true total.
    pub fn total(&self) -> u32 {
        self.episode
            .saturating_add(self.discussion)
            .saturating_add(self.title)
            .saturating_add(self.spoiler)
    }

    fn checked_total(&self) -> Option<u32> {
        self.episode
            .checked_add(self.discussion)?
            .checked_add(self.title)?
            .checked_add(self.spoiler)
    }
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            episode: 3,
            discussion: 1,
            title: 1,
            spoiler: 1,
        }
    }
}

/// Configuration for a submission search.
///
/// Externalizes the scoring weights and HTTP settings so they can be
/// overridden per finder instead of living in process-wide statics.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Scoring weights, see [`SearchWeights`].
    pub weights: SearchWeights,

    /// Search API endpoint queried for discussion threads.
    pub endpoint: String,

    /// User-Agent header sent with every search request.
    pub user_agent: String,

    /// Timeout applied to the outbound search request.
    pub timeout: Duration,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            weights: SearchWeights::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Validates the configuration.
    ///
    /// The weight total is the scoring denominator, so an all-zero weight set
    /// would divide by zero and is rejected here rather than at score time.
    pub fn validate(&self) -> FinderResult<()> {
        match self.weights.checked_total() {
            None => {
                return Err(FinderError::InvalidInput(
                    "Search weights sum overflows u32".to_string(),
                ));
            }
            Some(0) => {
                return Err(FinderError::InvalidInput(
                    "Search weights must sum to a positive value".to_string(),
                ));
            }
            Some(_) => {}
        }

        if self.endpoint.trim().is_empty() {
            return Err(FinderError::InvalidInput(
                "Search endpoint cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`SearchConfig`] to make overrides and test setup easier.
#[derive(Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::new(),
        }
    }

    pub fn weights(mut self, weights: SearchWeights) -> Self {
        self.config.weights = weights;
        self
    }

    pub fn episode_weight(mut self, weight: u32) -> Self {
        self.config.weights.episode = weight;
        self
    }

    pub fn discussion_weight(mut self, weight: u32) -> Self {
        self.config.weights.discussion = weight;
        self
    }

    pub fn title_weight(mut self, weight: u32) -> Self {
        self.config.weights.title = weight;
        self
    }

    pub fn spoiler_weight(mut self, weight: u32) -> Self {
        self.config.weights.spoiler = weight;
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> FinderResult<SearchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
