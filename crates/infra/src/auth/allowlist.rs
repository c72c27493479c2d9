//! IP allowlist

use std::net::IpAddr;

use tracing::warn;

/// Parsed allowlist of client IPs that bypass the cookie check.
#[derive(Debug, Clone, Default)]
pub struct IpAllowlist {
    ips: Vec<IpAddr>,
}

impl IpAllowlist {
    /// Parse a list of textual addresses, skipping unparseable entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ips = entries
            .into_iter()
            .filter_map(|raw| {
                let raw = raw.as_ref().trim();
                match raw.parse::<IpAddr>() {
                    Ok(ip) => Some(ip),
                    Err(_) => {
                        warn!(entry = raw, "skipping unparseable allowlist entry");
                        None
                    }
                }
            })
            .collect();
        Self { ips }
    }

    pub fn contains(&self, ip: IpAddr) -> bool {
        self.ips.contains(&ip)
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_parsed_entries_only() {
        let list = IpAllowlist::new(["10.0.0.1", "not-an-ip", " ::1 "]);
        assert!(list.contains("10.0.0.1".parse().unwrap()));
        assert!(list.contains("::1".parse().unwrap()));
        assert!(!list.contains("10.0.0.2".parse().unwrap()));
    }

    #[test]
    fn empty_list_matches_nothing() {
        let list = IpAllowlist::new(Vec::<String>::new());
        assert!(list.is_empty());
        assert!(!list.contains("127.0.0.1".parse().unwrap()));
    }
}
