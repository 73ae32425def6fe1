//! kansou: find and rank /r/anime episode discussion threads.
//!
//! Given a show title and an episode (number or free-text label), the crate
//! queries Reddit's subreddit search API and ranks the returned threads by a
//! weighted certainty score in [0, 1].
//!
//! ```no_run
//! use kansou::SubmissionFinder;
//!
//! # async fn example() -> Result<(), kansou::FinderError> {
//! let finder = SubmissionFinder::new()?;
//! let threads = finder.find_submission("Attack on Titan", 5).await?;
//! if let Some(best) = threads.first() {
//!     println!("{} ({:.0}%) -> {}", best.title, best.certainty * 100.0, best.link);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod episode;
pub mod error;
pub mod finder;
pub mod parser;
pub mod query;
pub mod scoring;

pub use config::{SearchConfig, SearchConfigBuilder, SearchWeights, DEFAULT_ENDPOINT};
pub use episode::EpisodeRef;
pub use error::{FinderError, FinderResult};
pub use finder::{RedditTransport, ScoredCandidate, SearchTransport, SubmissionFinder};
pub use parser::Candidate;
