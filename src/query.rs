use crate::episode::EpisodeRef;

/// Builds the free-text search query for a show and episode.
///
/// The trailing "Discussion" keyword matches the naming convention of
/// /r/anime episode threads ("<Show> Episode <N> Discussion").
pub fn build_query(anime_title: &str, episode: &EpisodeRef) -> String {
    format!("{} {} Discussion", anime_title, episode)
}

/// Builds the URL query fragment for a search query.
///
/// The query is wrapped in double quotes so the API treats it as a phrase,
/// then percent-escaped. `restrict_sr=true` limits results to the subreddit
/// of the endpoint.
pub fn build_url_params(query: &str) -> String {
    format!("?q={}&restrict_sr=true", urlencoding::encode(&format!("\"{}\"", query)))
}
