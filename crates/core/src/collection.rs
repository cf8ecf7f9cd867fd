//! The three append-only collections held by the document.

use std::fmt;

use crate::UnknownCollectionError;

/// Named collection of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// User activity events
    Activities,
    /// Search queries and how many results they produced
    Searches,
    /// Learning notes
    Learnings,
}

impl Collection {
    pub const ALL: [Self; 3] = [Self::Activities, Self::Searches, Self::Learnings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activities => "activities",
            Self::Searches => "searches",
            Self::Learnings => "learnings",
        }
    }

    /// Body fields copied into a new record; anything else in a request is ignored.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Activities => &["type", "detail", "metadata"],
            Self::Searches => &["query", "resultsCount", "source"],
            Self::Learnings => &["title", "content", "tags"],
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Collection {
    type Err = UnknownCollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activities" => Ok(Self::Activities),
            "searches" => Ok(Self::Searches),
            "learnings" => Ok(Self::Learnings),
            other => Err(UnknownCollectionError { name: other.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_collection() {
        for collection in Collection::ALL {
            assert_eq!(collection.as_str().parse::<Collection>(), Ok(collection));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Activities".parse::<Collection>().unwrap_err();
        assert_eq!(err.name, "Activities");
        assert_eq!(err.to_string(), "unknown collection: Activities");
    }

    #[test]
    fn test_route_names_are_not_collection_names() {
        assert!("activity".parse::<Collection>().is_err());
    }

    #[test]
    fn test_search_fields_keep_camel_case() {
        assert_eq!(Collection::Searches.field_names(), &["query", "resultsCount", "source"]);
    }
}
