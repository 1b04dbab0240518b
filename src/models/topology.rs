//! Topology documents as stored by the network designer backend.
//!
//! Only the connection fields used for link addressing are typed; every
//! other field is carried through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A key that may be absent (`None`), explicitly `null` (`Some(None)`) or
/// set (`Some(Some(_))`). Absent keys stay absent on write.
pub type OptionalField = Option<Option<String>>;

fn present<'de, D>(deserializer: D) -> Result<OptionalField, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// A saved topology: devices plus the connections between them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Topology {
    #[serde(default)]
    pub devices: Vec<Value>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A cable between two device ports.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Connection {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_from")]
    pub from_device: String,
    #[serde(rename = "_to")]
    pub to_device: String,
    #[serde(default)]
    pub src_port: String,
    #[serde(default)]
    pub dst_port: String,
    /// Link subnet in CIDR notation.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub subnet: OptionalField,
    /// Address of the `_from` end.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub src_ip: OptionalField,
    /// Address of the `_to` end.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub dst_ip: OptionalField,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Connection {
    /// The subnet, if set to something other than blanks.
    pub fn link_subnet(&self) -> Option<&str> {
        self.subnet
            .as_ref()
            .and_then(|s| s.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn src_ip(&self) -> Option<&str> {
        self.src_ip.as_ref().and_then(|s| s.as_deref())
    }

    pub fn dst_ip(&self) -> Option<&str> {
        self.dst_ip.as_ref().and_then(|s| s.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_keeps_unknown_fields() {
        let json = r#"{
            "_key": "c1", "_from": "devices/r1", "_to": "devices/r2",
            "src_port": "eth0", "dst_port": "eth0",
            "cable_type": "Cat6", "speed": "1G",
            "subnet": "10.0.0.0/30"
        }"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.key, "c1");
        assert_eq!(conn.link_subnet(), Some("10.0.0.0/30"));
        assert_eq!(conn.src_ip(), None);
        assert_eq!(conn.extra["cable_type"], "Cat6");

        let back = serde_json::to_value(&conn).unwrap();
        assert_eq!(back["speed"], "1G");
        assert_eq!(back["_from"], "devices/r1");
        assert!(back.get("src_ip").is_none());
    }

    #[test]
    fn test_connection_keeps_explicit_null() {
        let json = r#"{
            "_key": "c1", "_from": "devices/r1", "_to": "devices/r2",
            "subnet": null, "src_ip": null
        }"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.subnet, Some(None));
        assert_eq!(conn.src_ip, Some(None));
        assert_eq!(conn.dst_ip, None);
        assert_eq!(conn.link_subnet(), None);

        let back = serde_json::to_value(&conn).unwrap();
        assert_eq!(back.get("src_ip"), Some(&Value::Null));
        assert_eq!(back.get("subnet"), Some(&Value::Null));
        assert!(back.get("dst_ip").is_none());
    }

    #[test]
    fn test_topology_keeps_top_level_fields() {
        let json = r#"{"name": "lab", "version": 3, "devices": [], "connections": []}"#;
        let topology: Topology = serde_json::from_str(json).unwrap();
        assert_eq!(topology.extra["name"], "lab");

        let back = serde_json::to_value(&topology).unwrap();
        assert_eq!(back["name"], "lab");
        assert_eq!(back["version"], 3);
        assert_eq!(back["devices"], serde_json::json!([]));
    }

    #[test]
    fn test_blank_subnet_is_none() {
        let conn = Connection {
            subnet: Some(Some("  ".to_string())),
            ..Default::default()
        };
        assert_eq!(conn.link_subnet(), None);
    }
}
