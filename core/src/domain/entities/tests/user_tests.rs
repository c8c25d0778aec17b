//! Unit tests for the user entity and attribute keys

use crate::domain::entities::user::{Role, User, UserId};
use crate::domain::entities::user_meta::{is_truthy, MetaKey};

#[test]
fn test_new_user_creation() {
    let user = User::new(5, "maria");

    assert_eq!(user.id, UserId(5));
    assert_eq!(user.login, "maria");
    assert_eq!(user.nickname, "maria");
    assert!(user.roles.is_empty());
}

#[test]
fn test_with_role_does_not_duplicate() {
    let user = User::new(5, "maria")
        .with_role(Role::Subscriber)
        .with_role(Role::Subscriber);

    assert_eq!(user.roles, vec![Role::Subscriber]);
    assert!(user.has_role(Role::Subscriber));
    assert!(!user.has_role(Role::Contributor));
}

#[test]
fn test_role_round_trip_through_str() {
    for role in [
        Role::Administrator,
        Role::Editor,
        Role::Author,
        Role::Contributor,
        Role::Subscriber,
    ] {
        assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
    }
    assert_eq!(" Subscriber ".parse::<Role>().unwrap(), Role::Subscriber);
    assert!("shop_manager".parse::<Role>().is_err());
}

#[test]
fn test_user_deserializes_with_missing_optional_fields() {
    let user: User = serde_json::from_str(r#"{"id": 7, "login": "pere", "roles": ["contributor"]}"#).unwrap();

    assert_eq!(user.id, UserId(7));
    assert_eq!(user.first_name, "");
    assert!(user.has_role(Role::Contributor));
}

#[test]
fn test_meta_key_names_are_stable() {
    assert_eq!(MetaKey::Mobile.as_str(), "mobile");
    assert_eq!(MetaKey::MobileVerified.as_str(), "mobile_verified");
    assert_eq!(MetaKey::MobileVerifyCode.as_str(), "mobile_verify_code");

    for key in MetaKey::ALL {
        assert_eq!(key.as_str().parse::<MetaKey>().unwrap(), key);
    }
    assert!("billing_phone".parse::<MetaKey>().is_err());
}

#[test]
fn test_is_truthy() {
    assert!(is_truthy("1"));
    assert!(is_truthy("yes"));
    assert!(!is_truthy(""));
    assert!(!is_truthy("0"));
    assert!(!is_truthy("false"));
}
