//! Roles from the serialized `{prefix}capabilities` attribute.
//!
//! WordPress stores a user's roles as a PHP-serialized map of role name to
//! boolean, e.g. `a:1:{s:10:"subscriber";b:1;}`.

use once_cell::sync::Lazy;
use regex::Regex;

use ghop_core::domain::entities::user::Role;

// One granted entry of the serialized map
static GRANTED_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r#"s:\d+:"([^"]+)";b:1;"#).unwrap());

/// Extract the granted roles, skipping names this service does not know
/// (plugin roles such as `customer`)
pub fn parse_roles(serialized: &str) -> Vec<Role> {
    let mut roles = Vec::new();
    for captures in GRANTED_ENTRY.captures_iter(serialized) {
        if let Ok(role) = captures[1].parse::<Role>() {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
    }
    roles
}
