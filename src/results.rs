use std::path::PathBuf;

/// Placeholder for a field that could not be extracted
pub const SENTINEL: &str = "N/A";

/// Raw output of the detail extractor for one product page
///
/// Either field may still hold [`SENTINEL`] when the page could not be
/// fetched or the element was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub title: String,
    pub description: String,
}

impl ProductDetails {
    /// Both fields set to the sentinel
    pub fn unavailable() -> Self {
        Self {
            title: SENTINEL.to_string(),
            description: SENTINEL.to_string(),
        }
    }

    /// Whether both fields carry extracted text
    pub fn is_complete(&self) -> bool {
        self.title != SENTINEL && self.description != SENTINEL
    }

    /// Convert into a record, or `None` if either field is the sentinel
    pub fn into_record(self) -> Option<ProductRecord> {
        if self.is_complete() {
            Some(ProductRecord {
                title: self.title,
                description: self.description,
            })
        } else {
            None
        }
    }
}

impl Default for ProductDetails {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// A product that was scraped successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    title: String,
    description: String,
}

impl ProductRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Product links returned by the collector
    pub links_found: usize,
    /// Records kept for the report
    pub records_kept: usize,
    /// Links whose details were incomplete
    pub skipped: usize,
    /// Absolute path of the written report, if one was written
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_details_become_record() {
        let details = ProductDetails {
            title: "Waikiki Sunset".to_string(),
            description: "A beautiful print.".to_string(),
        };
        let record = details.into_record().unwrap();
        assert_eq!(record.title(), "Waikiki Sunset");
        assert_eq!(record.description(), "A beautiful print.");
    }

    #[test]
    fn test_sentinel_in_either_field_is_dropped() {
        let missing_description = ProductDetails {
            title: "Waikiki Sunset".to_string(),
            description: SENTINEL.to_string(),
        };
        assert!(missing_description.into_record().is_none());

        let missing_title = ProductDetails {
            title: SENTINEL.to_string(),
            description: "A beautiful print.".to_string(),
        };
        assert!(missing_title.into_record().is_none());

        assert!(ProductDetails::unavailable().into_record().is_none());
    }

    #[test]
    fn test_empty_text_is_not_the_sentinel() {
        // An element that exists but has no text still counts as extracted
        let details = ProductDetails {
            title: String::new(),
            description: "Text".to_string(),
        };
        assert!(details.is_complete());
    }
}
