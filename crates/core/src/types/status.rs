//! Status enums for orders.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// Orders are created `pending` by the public order flow and marked
/// `fulfilled` by the seller from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Fulfilled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Fulfilled => write!(f, "fulfilled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "fulfilled" => Ok(Self::Fulfilled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Fulfilled).unwrap(),
            "\"fulfilled\""
        );
        let status: OrderStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("fulfilled".parse::<OrderStatus>().unwrap(), OrderStatus::Fulfilled);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
