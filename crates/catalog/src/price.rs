//! Optional decimal prices
//!
//! Prices arrive as decimal strings, JSON numbers, or nothing at all. They
//! render as fixed two-decimal text with no thousands separator, and an
//! absent price renders as the empty string.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::error::CatalogError;

/// Decimal places used when rendering a price
const PRICE_SCALE: u32 = 2;

/// A price that may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Price(Option<Decimal>);

impl Price {
    /// No price set
    pub const NONE: Price = Price(None);

    /// Create a price from a decimal amount
    pub fn new(amount: Decimal) -> Self {
        Self(Some(amount))
    }

    /// The amount, if set
    pub fn amount(&self) -> Option<Decimal> {
        self.0
    }

    /// Whether a price is set
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl FromStr for Price {
    type Err = CatalogError;

    /// Empty or whitespace-only input is an absent price
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::NONE);
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self::new)
            .map_err(|_| CatalogError::InvalidPrice(s.to_string()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(amount) => write!(f, "{:.2}", amount.round_dp(PRICE_SCALE)),
            None => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string, a number, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price::new(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Ok(Price::new(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        // Shortest round-trip text keeps 9.99 as 9.99 rather than its binary expansion
        v.to_string().parse().map_err(E::custom)
    }

    fn visit_none<E: de::Error>(self) -> Result<Price, E> {
        Ok(Price::NONE)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Price, E> {
        Ok(Price::NONE)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Price, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn test_fixed_two_decimals() {
        assert_eq!(price("9.99").to_string(), "9.99");
        assert_eq!(price("19.5").to_string(), "19.50");
        assert_eq!(price("1200").to_string(), "1200.00");
        assert_eq!(price("0").to_string(), "0.00");
    }

    #[test]
    fn test_rounds_half_even() {
        assert_eq!(price("2.345").to_string(), "2.34");
        assert_eq!(price("2.355").to_string(), "2.36");
        assert_eq!(price("2.3451").to_string(), "2.35");
    }

    #[test]
    fn test_absent_renders_empty() {
        assert_eq!(Price::NONE.to_string(), "");
        assert_eq!(price("").to_string(), "");
        assert_eq!(price("   ").to_string(), "");
        assert!(!price("").is_set());
    }

    #[test]
    fn test_invalid_price() {
        let err = "twelve".parse::<Price>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice(_)));
    }

    #[test]
    fn test_deserialize_variants() {
        let prices: Vec<Price> =
            serde_json::from_str(r#"["14.99", 19.99, 5, "", null]"#).unwrap();
        let rendered: Vec<String> = prices.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["14.99", "19.99", "5.00", "", ""]);
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: Result<Price, _> = serde_json::from_str(r#""N/A""#);
        assert!(result.is_err());
    }
}
