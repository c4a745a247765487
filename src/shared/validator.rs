//! Input classification for domain names and IPv4 addresses.
//!
//! Both checks are pure string inspections; nothing here touches the network.

/// Maximum length of a full hostname (RFC 1035).
const MAX_FQDN_LEN: usize = 253;

/// Maximum length of a single DNS label.
const MAX_LABEL_LEN: usize = 63;

/// Returns `true` if `input` is a fully-qualified hostname.
///
/// Requirements:
/// - at most 253 characters, at least two labels, no trailing dot
/// - every label is 1-63 characters of `[A-Za-z0-9-]` and neither starts
///   nor ends with `-`
/// - the top-level label is two or more letters, or a punycode label
///   (`xn--...`)
pub fn is_fqdn(input: &str) -> bool {
    if input.is_empty() || input.len() > MAX_FQDN_LEN || input.ends_with('.') {
        return false;
    }

    let labels: Vec<&str> = input.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let Some(tld) = labels.last() else {
        return false;
    };
    if !is_valid_tld(tld) {
        return false;
    }

    labels.iter().all(|label| is_valid_label(label))
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_valid_tld(tld: &str) -> bool {
    let lower = tld.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("xn") {
        if rest.len() >= 2 && rest.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return true;
        }
    }
    lower.len() >= 2 && lower.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns `true` if `input` is a dotted-quad IPv4 address.
///
/// Each octet is decimal in `0..=255` with no leading zeros other than a
/// lone `0`. IPv6 literals, including IPv4-mapped ones, are rejected.
pub fn is_ipv4(input: &str) -> bool {
    let octets: Vec<&str> = input.split('.').collect();
    octets.len() == 4 && octets.iter().all(|octet| is_valid_octet(octet))
}

fn is_valid_octet(octet: &str) -> bool {
    if octet.is_empty() || octet.len() > 3 {
        return false;
    }
    if !octet.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if octet.len() > 1 && octet.starts_with('0') {
        return false;
    }
    octet.parse::<u8>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fqdns() {
        assert!(is_fqdn("github.com"));
        assert!(is_fqdn("sub.example.co.uk"));
        assert!(is_fqdn("123.example.com"));
        assert!(is_fqdn("my-host.Example.ORG"));
        assert!(is_fqdn("example.xn--p1ai"));
    }

    #[test]
    fn test_invalid_fqdns() {
        assert!(!is_fqdn(""));
        assert!(!is_fqdn("invalid-domain"));
        assert!(!is_fqdn("example.com."));
        assert!(!is_fqdn(".example.com"));
        assert!(!is_fqdn("sub..example.com"));
        assert!(!is_fqdn("-example.com"));
        assert!(!is_fqdn("example-.com"));
        assert!(!is_fqdn("exam!ple.com"));
        assert!(!is_fqdn("under_score.com"));
        assert!(!is_fqdn("with space.com"));
        assert!(!is_fqdn("example.c"));
        assert!(!is_fqdn("example.c0m"));
        assert!(!is_fqdn("1.2.3.4"));
        assert!(!is_fqdn(&("x".repeat(64) + ".com")));
    }

    #[test]
    fn test_fqdn_length_limit() {
        let label = "a".repeat(63);
        let at_limit = format!("{label}.{label}.{label}.{}.com", "b".repeat(57));
        assert_eq!(at_limit.len(), 253);
        assert!(is_fqdn(&at_limit));

        let over_limit = format!("c{at_limit}");
        assert!(!is_fqdn(&over_limit));
    }

    #[test]
    fn test_valid_ipv4() {
        for ip in ["192.168.1.1", "127.0.0.1", "10.0.0.1", "0.0.0.0", "255.255.255.255"] {
            assert!(is_ipv4(ip), "{ip} should be IPv4");
        }
    }

    #[test]
    fn test_invalid_ipv4() {
        for ip in [
            "",
            "abcd",
            "256.1.1.1",
            "1.2.3",
            "1.2.3.4.5",
            "01.2.3.4",
            "1.2.3.04",
            " 1.2.3.4",
            "1.2.3.4 ",
            "1..3.4",
            "+1.2.3.4",
            "fe80::1ff:fe23:4567:890a",
            "::ffff:1.2.3.4",
            "::1",
        ] {
            assert!(!is_ipv4(ip), "{ip:?} should not be IPv4");
        }
    }
}
