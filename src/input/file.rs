//! File input and output.

use crate::models::Topology;
use std::error::Error;
use std::io::Read;
use std::path::Path;

/// Non-empty lines that are not `#` comments, trimmed.
pub fn parse_cidr_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a CIDR list, one per line. `-` reads stdin.
pub fn read_cidr_list(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let text = if path == "-" {
        log::info!("Reading CIDR list from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Error reading stdin: {e}"))?;
        buf
    } else {
        if !Path::new(path).exists() {
            return Err(format!("Input file does not exist: {path}").into());
        }
        log::info!("Reading CIDR list from file: {path}");
        std::fs::read_to_string(path).map_err(|e| format!("Error reading {path}: {e}"))?
    };
    let list = parse_cidr_list(&text);
    log::debug!("Read {} CIDR(s) from {path}", list.len());
    Ok(list)
}

/// Read a topology JSON document. Parse errors name the failing JSON path.
pub fn read_topology(path: &str) -> Result<Topology, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Topology file does not exist: {path}").into());
    }
    log::info!("Reading topology from file: {path}");
    let json = std::fs::read_to_string(path).map_err(|e| format!("Error reading {path}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let topology: Topology = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing topology JSON at '{}': {}", e.path(), e.inner()))?;
    log::info!(
        "# Got {} device(s) and {} connection(s)",
        topology.devices.len(),
        topology.connections.len()
    );
    Ok(topology)
}

/// Write a topology as pretty JSON to `path`, or stdout when `None`.
pub fn write_topology(topology: &Topology, path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(topology)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    match path {
        Some(path) => {
            log::warn!("Writing topology to file: {path}");
            std::fs::write(path, json).map_err(|e| format!("Error writing file {path}: {e}"))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr_list() {
        let text = "# links\n10.0.0.0/30\n\n   192.168.1.10/24  \n#10.9.9.9/8\nbad\n";
        assert_eq!(
            parse_cidr_list(text),
            vec!["10.0.0.0/30", "192.168.1.10/24", "bad"]
        );
    }

    #[test]
    fn test_read_cidr_list() {
        let list = read_cidr_list("src/tests/test_data/cidr_list_01.txt")
            .expect("Error reading CIDR list");
        assert_eq!(list.len(), 6);
        assert_eq!(list[0], "192.168.1.10/24");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_cidr_list("src/tests/test_data/missing.txt").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(read_topology("src/tests/test_data/missing.json").is_err());
    }

    #[test]
    fn test_read_topology() {
        let topology = read_topology("src/tests/test_data/topology_01.json")
            .expect("Error reading topology");
        assert_eq!(topology.devices.len(), 3);
        assert_eq!(topology.connections.len(), 4);
        assert_eq!(topology.connections[0].key, "r1-r2");
        assert_eq!(topology.connections[0].link_subnet(), Some("10.0.12.0/30"));
    }

    #[test]
    fn test_read_topology_bad_json_names_path() {
        let err = read_topology("src/tests/test_data/topology_bad.json").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("connections[0]"), "{msg}");
    }

    #[test]
    fn test_write_topology_roundtrip() {
        let topology = read_topology("src/tests/test_data/topology_01.json")
            .expect("Error reading topology");
        let out = std::env::temp_dir().join(format!(
            "cidr_resolver_topology_{}.json",
            std::process::id()
        ));
        let out = out.to_string_lossy().to_string();
        write_topology(&topology, Some(&out)).expect("Error writing topology");
        let back = read_topology(&out).expect("Error reading written topology");
        std::fs::remove_file(&out).ok();
        assert_eq!(back.connections, topology.connections);
        assert_eq!(back.devices, topology.devices);
        assert_eq!(back.extra["name"], "lab");
        assert_eq!(back.extra["version"], 3);
        assert_eq!(back.connections[3].src_ip, Some(None));
        assert_eq!(back.connections[3].dst_ip, None);
    }
}
