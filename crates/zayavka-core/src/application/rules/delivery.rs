//! Delivery type detection.

use std::fmt;

/// How the goods leave the loading point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryType {
    /// Customer collects the goods (самовывоз).
    Pickup,
    /// Delivery by an autonomous carrier (автономка).
    Autonomous,
    /// Regular delivery (доставка).
    Delivery,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pickup => "самовывоз",
            Self::Autonomous => "автономка доставка",
            Self::Delivery => "доставка",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine the delivery type; pickup wins over autonomous, which wins over
/// the default.
pub fn delivery_type(text: &str) -> DeliveryType {
    let lower = text.to_lowercase();
    if lower.contains("самовывоз") {
        DeliveryType::Pickup
    } else if lower.contains("автономка") {
        DeliveryType::Autonomous
    } else {
        DeliveryType::Delivery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_has_priority() {
        assert_eq!(delivery_type("Автономка, САМОВЫВОЗ"), DeliveryType::Pickup);
        assert_eq!(delivery_type(r"1. Самовывоз\n2. Доставка"), DeliveryType::Pickup);
    }

    #[test]
    fn test_autonomous() {
        assert_eq!(delivery_type("через автономка"), DeliveryType::Autonomous);
        assert_eq!(DeliveryType::Autonomous.as_str(), "автономка доставка");
    }

    #[test]
    fn test_default_delivery() {
        assert_eq!(delivery_type("Марка М500"), DeliveryType::Delivery);
        assert_eq!(delivery_type("").to_string(), "доставка");
    }
}
