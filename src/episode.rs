use std::fmt;

/// Reference to an episode within a show's run.
///
/// Discussion threads identify episodes either by number ("Episode 5") or by a
/// free-text label like "OVA" or "Finale". The two variants feed different
/// matching rules in the scorer, so the distinction is kept all the way
/// through the pipeline instead of flattening to a string up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeRef {
    /// Free-text episode label, e.g. "OVA" or "Special".
    Text(String),
    /// Positive episode number.
    Number(u32),
}

impl fmt::Display for EpisodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // u32 formatting gives plain decimal, no leading zeros
            EpisodeRef::Text(label) => write!(f, "{}", label),
            EpisodeRef::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<u32> for EpisodeRef {
    fn from(n: u32) -> Self {
        EpisodeRef::Number(n)
    }
}

impl From<&str> for EpisodeRef {
    fn from(label: &str) -> Self {
        EpisodeRef::Text(label.to_string())
    }
}

impl From<String> for EpisodeRef {
    fn from(label: String) -> Self {
        EpisodeRef::Text(label)
    }
}
