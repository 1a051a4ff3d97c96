//! Subject requests

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Priority;
use crate::error::ValidationError;

/// One subject to be scheduled
///
/// Subject names are display labels only. Duplicates are allowed and each one
/// gets its own allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequest {
    pub subject: String,
    pub priority: Priority,
}

impl SubjectRequest {
    pub fn new(subject: impl Into<String>, priority: Priority) -> Self {
        Self {
            subject: subject.into(),
            priority,
        }
    }

    /// Build a request from raw text fields
    pub fn parse(subject: &str, priority: &str) -> Result<Self, ValidationError> {
        if subject.is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        Ok(Self::new(subject, priority.parse()?))
    }
}

/// Parses `Subject:Priority`, splitting on the last colon so subject names may
/// contain colons themselves. A bare `Subject` gets the default priority.
impl std::str::FromStr for SubjectRequest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "SubjectRequest::from_str: called");
        match s.rsplit_once(':') {
            Some((subject, priority)) => Self::parse(subject, priority),
            None => {
                debug!("SubjectRequest::from_str: no priority given, using default");
                if s.is_empty() {
                    return Err(ValidationError::MissingSubject);
                }
                Ok(Self::new(s, Priority::default()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields() {
        let req = SubjectRequest::parse("Math", "High").unwrap();
        assert_eq!(req, SubjectRequest::new("Math", Priority::High));

        assert_eq!(SubjectRequest::parse("", "High"), Err(ValidationError::MissingSubject));
        assert_eq!(
            SubjectRequest::parse("Math", "Top"),
            Err(ValidationError::UnrecognizedPriority("Top".to_string()))
        );
    }

    #[test]
    fn test_from_str_with_priority() {
        let req: SubjectRequest = "Art:low".parse().unwrap();
        assert_eq!(req.subject, "Art");
        assert_eq!(req.priority, Priority::Low);
    }

    #[test]
    fn test_from_str_splits_on_last_colon() {
        let req: SubjectRequest = "History: Rome:Medium".parse().unwrap();
        assert_eq!(req.subject, "History: Rome");
        assert_eq!(req.priority, Priority::Medium);
    }

    #[test]
    fn test_from_str_default_priority() {
        let req: SubjectRequest = "Biology".parse().unwrap();
        assert_eq!(req.priority, Priority::High);
    }

    #[test]
    fn test_from_str_missing_subject() {
        assert_eq!("".parse::<SubjectRequest>(), Err(ValidationError::MissingSubject));
        assert_eq!(":Low".parse::<SubjectRequest>(), Err(ValidationError::MissingSubject));
    }
}
