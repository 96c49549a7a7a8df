use std::net::Ipv4Addr;

pub const MAX_DOMAIN_LEN: usize = 253;
pub const MAX_LABEL_LEN: usize = 63;

/// Lower-cases a domain and strips surrounding whitespace and the root dot.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}

pub fn validate_domain(domain: &str) -> Result<(), String> {
    if domain.is_empty() {
        return Err("Domain name cannot be empty".to_string());
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(format!(
            "Domain name cannot exceed {MAX_DOMAIN_LEN} characters"
        ));
    }
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(format!("Domain name '{domain}' contains an empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!(
                "Label '{label}' exceeds {MAX_LABEL_LEN} characters"
            ));
        }
    }
    Ok(())
}

pub fn validate_ipv4(ip: &str) -> Result<Ipv4Addr, String> {
    ip.trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| format!("'{ip}' is not a valid IPv4 address"))
}
