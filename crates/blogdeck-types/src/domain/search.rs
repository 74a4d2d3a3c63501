use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Post field a backend search matches against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Content,
    Tags,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Content, SearchField::Tags];

    /// Path segment under `/posts/search/`
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Content => "content",
            SearchField::Tags => "tags",
        }
    }

    /// Cycle order used by the interactive list view
    pub fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Content,
            SearchField::Content => SearchField::Tags,
            SearchField::Tags => SearchField::Title,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "content" => Ok(SearchField::Content),
            "tags" | "tag" => Ok(SearchField::Tags),
            _ => Err(Error::UnknownSearchField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for field in SearchField::ALL {
            assert_eq!(field.as_str().parse::<SearchField>().unwrap(), field);
        }
        assert_eq!("TAG".parse::<SearchField>().unwrap(), SearchField::Tags);
        assert!("author".parse::<SearchField>().is_err());
    }

    #[test]
    fn test_cycle_visits_every_field() {
        let mut field = SearchField::default();
        let mut seen = vec![field];
        for _ in 0..2 {
            field = field.next();
            seen.push(field);
        }
        assert_eq!(seen, SearchField::ALL.to_vec());
        assert_eq!(field.next(), SearchField::Title);
    }
}
