use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Services offered on the contact form. The wire value is what the form
/// submits, the label is what ends up in the outgoing chat message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    #[serde(rename = "web2-dev")]
    Web2Development,

    #[serde(rename = "web3-dev")]
    Web3Development,

    #[serde(rename = "security-audit")]
    SecurityAudit,

    #[serde(rename = "pentest")]
    PenetrationTesting,

    #[serde(rename = "seo")]
    SeoOptimization,

    #[serde(rename = "marketing-ads")]
    MarketingAds,

    #[serde(rename = "game-dev")]
    GameDevelopment,

    #[serde(rename = "other")]
    Other,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl Service {
    /// Form order.
    pub const ALL: [Service; 8] = [
        Service::Web2Development,
        Service::Web3Development,
        Service::SecurityAudit,
        Service::PenetrationTesting,
        Service::SeoOptimization,
        Service::MarketingAds,
        Service::GameDevelopment,
        Service::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Service::Web2Development => "web2-dev",
            Service::Web3Development => "web3-dev",
            Service::SecurityAudit => "security-audit",
            Service::PenetrationTesting => "pentest",
            Service::SeoOptimization => "seo",
            Service::MarketingAds => "marketing-ads",
            Service::GameDevelopment => "game-dev",
            Service::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Service::Web2Development => "Web2 Development",
            Service::Web3Development => "Web3 & dApps",
            Service::SecurityAudit => "Security Audits",
            Service::PenetrationTesting => "Penetration Testing",
            Service::SeoOptimization => "SEO Optimization",
            Service::MarketingAds => "Marketing & Ads",
            Service::GameDevelopment => "Game Development",
            Service::Other => "Other / General Inquiry",
        }
    }

    pub fn option(&self) -> ServiceOption {
        ServiceOption {
            value: self.value(),
            label: self.label(),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BY_VALUE
            .get(value)
            .copied()
            .ok_or_else(|| format!("Unknown service `{}`", value))
    }
}

lazy_static! {
    static ref BY_VALUE: HashMap<&'static str, Service> = Service::ALL
        .iter()
        .map(|service| (service.value(), *service))
        .collect();
    static ref BY_LABEL: HashMap<&'static str, &'static str> = Service::ALL
        .iter()
        .map(|service| (service.label(), service.value()))
        .collect();
}

pub fn options() -> Vec<ServiceOption> {
    Service::ALL.iter().map(Service::option).collect()
}

pub fn is_known(value: &str) -> bool {
    BY_VALUE.contains_key(value)
}

/// Human-readable label of a service value, or the value itself when it is
/// not one of ours.
pub fn label_for(value: &str) -> &str {
    match BY_VALUE.get(value) {
        Some(service) => service.label(),
        None => value,
    }
}

/// Reverse of `label_for`. Unknown labels pass through unchanged.
pub fn value_for(label: &str) -> &str {
    BY_LABEL.get(label).copied().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("web2-dev", "Web2 Development")]
    #[case("web3-dev", "Web3 & dApps")]
    #[case("security-audit", "Security Audits")]
    #[case("pentest", "Penetration Testing")]
    #[case("seo", "SEO Optimization")]
    #[case("marketing-ads", "Marketing & Ads")]
    #[case("game-dev", "Game Development")]
    #[case("other", "Other / General Inquiry")]
    fn test_label_lookup(#[case] value: &str, #[case] label: &str) {
        assert_eq!(label_for(value), label);
        assert_eq!(value_for(label_for(value)), value);
        assert!(is_known(value));
    }

    #[test]
    fn test_unknown_service_passes_through() {
        assert_eq!(label_for("blockchain-consulting"), "blockchain-consulting");
        assert_eq!(value_for(label_for("blockchain-consulting")), "blockchain-consulting");
        assert!(!is_known("blockchain-consulting"));
        assert!(!is_known(""));
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let encoded = serde_json::to_string(&Service::SeoOptimization).unwrap();
        assert_eq!(encoded, "\"seo\"");

        let decoded: Service = serde_json::from_str("\"game-dev\"").unwrap();
        assert_eq!(decoded, Service::GameDevelopment);
        assert_eq!("pentest".parse::<Service>(), Ok(Service::PenetrationTesting));
        assert!("Pentest".parse::<Service>().is_err());
    }

    #[test]
    fn test_options_keep_form_order() {
        let options = options();

        assert_eq!(options.len(), 8);
        assert_eq!(options[0].value, "web2-dev");
        assert_eq!(options[7].label, "Other / General Inquiry");
    }
}
