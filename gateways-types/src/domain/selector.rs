//! Gateway family selector.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GatewayError;

/// Identifies a gateway family at dispatch time.
///
/// A closed enumeration of the known families. An unknown name is a hard
/// error (`GatewayError::UnsupportedGateway`), never a silent default;
/// whether a *registered* factory exists for a selector is decided by the
/// registry at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GatewaySelector {
    PagSeguro,
    MercadoPago,
    Stripe,
}

impl GatewaySelector {
    /// Returns the canonical wire name of this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewaySelector::PagSeguro => "pagseguro",
            GatewaySelector::MercadoPago => "mercadopago",
            GatewaySelector::Stripe => "stripe",
        }
    }
}

impl std::fmt::Display for GatewaySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GatewaySelector {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pagseguro" => Ok(GatewaySelector::PagSeguro),
            "mercadopago" => Ok(GatewaySelector::MercadoPago),
            "stripe" => Ok(GatewaySelector::Stripe),
            other => Err(GatewayError::UnsupportedGateway(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_parse() {
        assert_eq!(
            "pagseguro".parse::<GatewaySelector>().unwrap(),
            GatewaySelector::PagSeguro
        );
        assert_eq!(
            "mercadopago".parse::<GatewaySelector>().unwrap(),
            GatewaySelector::MercadoPago
        );
        assert_eq!(
            "stripe".parse::<GatewaySelector>().unwrap(),
            GatewaySelector::Stripe
        );
    }

    #[test]
    fn test_unknown_name_is_a_hard_error() {
        let result = "acquirer-x".parse::<GatewaySelector>();
        assert!(matches!(
            result,
            Err(GatewayError::UnsupportedGateway(name)) if name == "acquirer-x"
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for selector in [
            GatewaySelector::PagSeguro,
            GatewaySelector::MercadoPago,
            GatewaySelector::Stripe,
        ] {
            let parsed: GatewaySelector = selector.to_string().parse().unwrap();
            assert_eq!(parsed, selector);
        }
    }
}
