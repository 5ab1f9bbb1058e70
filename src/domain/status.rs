use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of an order.
///
/// The flow is strictly linear: RECEIVED → PREPARING → READY → DELIVERED.
/// Legality of a move is decided by [`can_transition`] and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Received,
    Preparing,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// The single allowed successor, or `None` once the order is delivered.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Received => "RECEIVED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
        }
    }

    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECEIVED" => Ok(OrderStatus::Received),
            "PREPARING" => Ok(OrderStatus::Preparing),
            "READY" => Ok(OrderStatus::Ready),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown order status '{0}'")]
pub struct UnknownStatus(pub String);

/// True iff `target` is exactly the successor of `current`.
///
/// Staying in place, skipping ahead, and moving backward are all refused,
/// as is any move out of the terminal DELIVERED state.
pub fn can_transition(current: OrderStatus, target: OrderStatus) -> bool {
    current.next() == Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_the_linear_flow() {
        assert_eq!(OrderStatus::Received.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
    }

    #[test]
    fn only_the_immediate_successor_is_legal() {
        for current in OrderStatus::ALL {
            for target in OrderStatus::ALL {
                let expected = current.next() == Some(target);
                assert_eq!(
                    can_transition(current, target),
                    expected,
                    "{current} -> {target}"
                );
            }
        }
    }

    #[test]
    fn self_transitions_are_refused() {
        for status in OrderStatus::ALL {
            assert!(!can_transition(status, status), "{status} -> {status}");
        }
    }

    #[test]
    fn delivered_is_terminal() {
        for target in OrderStatus::ALL {
            assert!(!can_transition(OrderStatus::Delivered, target));
        }
    }

    #[test]
    fn status_strings_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("COOKING".parse::<OrderStatus>().is_err());
    }
}
