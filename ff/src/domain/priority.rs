//! Priority tiers and their allocation weights

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;

/// Fixed weight per priority tier: High=3, Medium=2, Low=1
pub const PRIORITY_WEIGHTS: [(Priority, u32); 3] = [(Priority::High, 3), (Priority::Medium, 2), (Priority::Low, 1)];

/// Priority tier of a subject
///
/// Ordered by importance, so `Low < Medium < High`. The default is `High`,
/// the first choice offered when a subject is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    Medium,
    #[default]
    High,
}

impl Priority {
    /// Weight used by the allocator
    pub fn weight(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "Priority::from_str: called");
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => {
                debug!(%s, "Priority::from_str: unrecognized");
                Err(ValidationError::UnrecognizedPriority(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn test_priority_weights() {
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::Medium.weight(), 2);
        assert_eq!(Priority::Low.weight(), 1);

        for (priority, weight) in PRIORITY_WEIGHTS {
            assert_eq!(priority.weight(), weight);
        }
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::High.to_string(), "High");
        assert_eq!(Priority::Medium.to_string(), "Medium");
        assert_eq!(Priority::Low.to_string(), "Low");
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(" LOW ".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(ValidationError::UnrecognizedPriority("urgent".to_string()))
        );
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_default() {
        assert_eq!(Priority::default(), Priority::High);
    }

    #[test]
    fn test_priority_serde() {
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");

        let priority: Priority = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(priority, Priority::Low);
    }
}
