//! Instance-type naming for result files.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `<family>.<size>` at the start of a file stem, e.g. `c5n.xlarge`.
static INSTANCE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+\.[a-z0-9]+").expect("invalid instance regex"));

/// Baseline network bandwidth of EC2 instance types commonly used for runs.
const BANDWIDTH: &[(&str, &str)] = &[
    ("t3.micro", "32 Mbps"),
    ("t3.small", "128 Mbps"),
    ("t3.medium", "256 Mbps"),
    ("t3.large", "512 Mbps"),
    ("t3.xlarge", "1 Gbps"),
    ("m5.large", "750 Mbps"),
    ("m5.xlarge", "1.25 Gbps"),
    ("c5n.xlarge", "5 Gbps"),
    ("c5n.2xlarge", "10 Gbps"),
    ("c5n.4xlarge", "15 Gbps"),
    ("c5n.9xlarge", "50 Gbps"),
    ("c5n.18xlarge", "100 Gbps"),
];

pub fn bandwidth(instance_type: &str) -> Option<&'static str> {
    BANDWIDTH
        .iter()
        .find(|(name, _)| *name == instance_type)
        .map(|(_, bw)| *bw)
}

/// Instance type from a file name like `c5n.xlarge_20240105_123456.json`.
/// Falls back to the stem up to the first `_`.
pub fn instance_type_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Some(m) = INSTANCE_PREFIX.find(&stem) {
        return m.as_str().to_string();
    }
    stem.split('_').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_from_timestamped_name() {
        let p = Path::new("/results/c5n.xlarge_20240105_123456.json");
        assert_eq!(instance_type_from_path(p), "c5n.xlarge");
        assert_eq!(instance_type_from_path(Path::new("t3.micro.json")), "t3.micro");
        assert_eq!(instance_type_from_path(Path::new("m5.large-run2.json")), "m5.large");
    }

    #[test]
    fn instance_prefix_stops_after_size() {
        let p = Path::new("m6i.4xlarge.run1.json");
        assert_eq!(instance_type_from_path(p), "m6i.4xlarge");
        assert_eq!(instance_type_from_path(Path::new("c5n.9xlarge-Old_1.json")), "c5n.9xlarge");
    }

    #[test]
    fn instance_fallback_to_underscore_prefix() {
        assert_eq!(instance_type_from_path(Path::new("laptop_2024.json")), "laptop");
        assert_eq!(instance_type_from_path(Path::new("Big.Box_1.json")), "Big.Box");
        assert_eq!(instance_type_from_path(Path::new("c5n._x.json")), "c5n.");
    }

    #[test]
    fn bandwidth_lookup() {
        assert_eq!(bandwidth("c5n.18xlarge"), Some("100 Gbps"));
        assert_eq!(bandwidth("t3.micro"), Some("32 Mbps"));
        assert_eq!(bandwidth("x9.huge"), None);
    }
}
