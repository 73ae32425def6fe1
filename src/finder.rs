use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SearchConfig;
use crate::episode::EpisodeRef;
use crate::error::{FinderError, FinderResult};
use crate::parser::{self, Candidate};
use crate::query;
use crate::scoring;

/// A discussion thread with its computed certainty, the final output of a
/// search. Certainty is assigned exactly once during scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Thread title as posted.
    pub title: String,
    /// Absolute URL of the thread.
    pub link: String,
    /// Estimated relevance in [0, 1].
    pub certainty: f32,
}

/// Transport used to issue the search request.
///
/// The default implementation is [`RedditTransport`]; tests substitute a mock
/// to run the pipeline without network access.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Fetch the raw response body for a fully-formed search URL.
    async fn fetch(&self, url: &str) -> FinderResult<String>;
}

/// reqwest-backed transport for the Reddit search API.
pub struct RedditTransport {
    client: Client,
}

impl RedditTransport {
    pub fn new(config: &SearchConfig) -> FinderResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FinderError::FetchError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SearchTransport for RedditTransport {
    async fn fetch(&self, url: &str) -> FinderResult<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::FetchError(format!(
                "Search request failed with status {}",
                status
            )));
        }

        Ok(response.text().await?)
    }
}

/// Searches /r/anime for episode discussion threads and ranks them by
/// certainty.
///
/// A finder is immutable after construction and safe to share across
/// concurrent tasks; every search is an independent single-pass pipeline over
/// request-scoped state.
pub struct SubmissionFinder {
    config: SearchConfig,
    transport: Arc<dyn SearchTransport>,
}

impl SubmissionFinder {
    /// Creates a finder with default configuration and the reqwest transport.
    pub fn new() -> FinderResult<Self> {
        Self::with_config(SearchConfig::default())
    }

    /// Creates a finder with a custom configuration.
    pub fn with_config(config: SearchConfig) -> FinderResult<Self> {
        config.validate()?;
        let transport = Arc::new(RedditTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Creates a finder with a custom transport, used for testing and for
    /// callers that bring their own HTTP stack.
    pub fn with_transport(
        config: SearchConfig,
        transport: Arc<dyn SearchTransport>,
    ) -> FinderResult<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Searches for discussion threads about one episode of a show.
    ///
    /// Accepts either an episode number or a free-text label:
    ///
    /// ```no_run
    /// # use kansou::SubmissionFinder;
    /// # async fn example() -> Result<(), kansou::FinderError> {
    /// let finder = SubmissionFinder::new()?;
    /// let by_number = finder.find_submission("Attack on Titan", 5).await?;
    /// let by_label = finder.find_submission("Hellsing", "OVA").await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// Returns threads sorted descending by certainty; equal-certainty
    /// threads keep the order the API returned them in. Fails with
    /// [`FinderError::InvalidInput`] before any network call if the title is
    /// empty, with [`FinderError::FetchError`] on transport or HTTP failure,
    /// and with [`FinderError::ParseError`] on an unexpected response shape.
    pub async fn find_submission(
        &self,
        anime_title: &str,
        episode: impl Into<EpisodeRef>,
    ) -> FinderResult<Vec<ScoredCandidate>> {
        if anime_title.trim().is_empty() {
            return Err(FinderError::InvalidInput(
                "Anime title cannot be empty".to_string(),
            ));
        }

        let episode = episode.into();
        let query_string = query::build_query(anime_title, &episode);
        let url = format!(
            "{}{}",
            self.config.endpoint,
            query::build_url_params(&query_string)
        );
        debug!(%url, "Searching for discussion threads");

        let body = self.transport.fetch(&url).await?;
        let candidates = parser::parse(&body)?;
        debug!(count = candidates.len(), "Parsed search results");

        Ok(self.score_and_sort(candidates, anime_title, &episode))
    }

    fn score_and_sort(
        &self,
        candidates: Vec<Candidate>,
        anime_title: &str,
        episode: &EpisodeRef,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let certainty = scoring::score(
                    &candidate.title,
                    anime_title,
                    episode,
                    &self.config.weights,
                );
                ScoredCandidate {
                    title: candidate.title,
                    link: candidate.link,
                    certainty,
                }
            })
            .collect();

        // sort_by is stable, so equal certainties keep parse order
        scored.sort_by(|a, b| b.certainty.total_cmp(&a.certainty));
        scored
    }
}
