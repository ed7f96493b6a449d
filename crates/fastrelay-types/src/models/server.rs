//! Relay directory record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One relay endpoint as published by the relay directory.
///
/// The engine only looks at `hostname`, `country_code`, `active`, `diskless`
/// and `ipv4_addr_in`. Everything else is carried through untouched so JSON
/// output reproduces the directory record, including keys this struct does
/// not know about (collected in `extra`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateServer {
    /// Unique within one catalog snapshot
    pub hostname: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub city_code: String,
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub owned: bool,
    #[serde(default)]
    pub provider: String,
    /// IPv4 address used as the latency probe target
    #[serde(default)]
    pub ipv4_addr_in: String,
    #[serde(default)]
    pub ipv6_addr_in: Option<String>,
    #[serde(default)]
    pub network_port_speed: Option<u64>,
    #[serde(default)]
    pub pubkey: Option<String>,
    #[serde(default)]
    pub multihop_port: Option<u16>,
    #[serde(default)]
    pub socks_name: Option<String>,
    /// Server boots from volatile storage only
    #[serde(rename = "stboot", default)]
    pub diskless: bool,
    /// Directory fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateServer {
    /// Minimal record for a relay; passthrough metadata left empty.
    pub fn new(hostname: impl Into<String>, country_code: impl Into<String>, ipv4: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            country_code: country_code.into(),
            country_name: String::new(),
            city_code: String::new(),
            city_name: String::new(),
            active: true,
            owned: false,
            provider: String::new(),
            ipv4_addr_in: ipv4.into(),
            ipv6_addr_in: None,
            network_port_speed: None,
            pubkey: None,
            multihop_port: None,
            socks_name: None,
            diskless: false,
            extra: Map::new(),
        }
    }

    /// Address the latency probe targets.
    pub fn probe_address(&self) -> &str {
        self.ipv4_addr_in.trim()
    }

    pub fn has_probe_address(&self) -> bool {
        !self.probe_address().is_empty()
    }

    /// Country codes in the directory are lowercase, user input may not be.
    pub fn is_in_country(&self, country_code: &str) -> bool {
        self.country_code.eq_ignore_ascii_case(country_code.trim())
    }

    /// `city, country` for human-readable output, falling back to codes.
    pub fn location(&self) -> String {
        let city = if self.city_name.is_empty() { &self.city_code } else { &self.city_name };
        let country =
            if self.country_name.is_empty() { &self.country_code } else { &self.country_name };
        match (city.is_empty(), country.is_empty()) {
            (false, false) => format!("{}, {}", city, country),
            (false, true) => city.clone(),
            (true, _) => country.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn directory_record() -> Value {
        serde_json::json!({
            "hostname": "ch-zrh-wg-001",
            "country_code": "ch",
            "country_name": "Switzerland",
            "city_code": "zrh",
            "city_name": "Zurich",
            "active": true,
            "owned": false,
            "provider": "M247",
            "ipv4_addr_in": "193.32.127.66",
            "ipv6_addr_in": "2a03:1b20:5:f011::a01f",
            "network_port_speed": 10,
            "pubkey": "7xVJLzW0nfmACr1VMc+/SiSMFh0j0EI3DrU/8Fnj1zM=",
            "multihop_port": 3099,
            "socks_name": "ch-zrh-wg-socks5-001.relays.mullvad.net",
            "stboot": true,
            "daita": false
        })
    }

    #[test]
    fn test_decodes_directory_record() {
        let server: CandidateServer = serde_json::from_value(directory_record()).unwrap();

        assert_eq!(server.hostname, "ch-zrh-wg-001");
        assert_eq!(server.probe_address(), "193.32.127.66");
        assert!(server.active);
        assert!(server.diskless);
        assert_eq!(server.multihop_port, Some(3099));
        assert_eq!(server.extra.get("daita"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_unknown_fields_survive_reserialization() {
        let server: CandidateServer = serde_json::from_value(directory_record()).unwrap();

        let out = serde_json::to_value(&server).unwrap();
        assert_eq!(out["stboot"], Value::Bool(true));
        assert_eq!(out["daita"], Value::Bool(false));
        assert!(out.get("diskless").is_none());
        assert!(out.get("extra").is_none());
    }

    #[test]
    fn test_sparse_record_uses_defaults() {
        let server: CandidateServer =
            serde_json::from_value(serde_json::json!({"hostname": "se-got-001", "pubkey": null}))
                .unwrap();

        assert!(!server.active);
        assert!(!server.diskless);
        assert!(!server.has_probe_address());
        assert_eq!(server.pubkey, None);
    }

    #[test]
    fn test_missing_hostname_is_rejected() {
        let result: Result<CandidateServer, _> =
            serde_json::from_value(serde_json::json!({"country_code": "se"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_country_match_ignores_case() {
        let server = CandidateServer::new("de-fra-wg-002", "de", "10.0.0.2");
        assert!(server.is_in_country("DE"));
        assert!(server.is_in_country(" de "));
        assert!(!server.is_in_country("at"));
    }

    #[test]
    fn test_location() {
        let mut server = CandidateServer::new("de-fra-wg-002", "de", "10.0.0.2");
        assert_eq!(server.location(), "de");

        server.city_name = "Frankfurt".to_string();
        server.country_name = "Germany".to_string();
        assert_eq!(server.location(), "Frankfurt, Germany");
    }
}
