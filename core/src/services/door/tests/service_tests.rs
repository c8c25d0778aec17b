//! Unit tests for the door access service

use async_trait::async_trait;
use chrono::FixedOffset;
use std::sync::{Arc, Mutex};

use crate::domain::entities::user::{Role, User, UserId};
use crate::domain::value_objects::AccessRequest;
use crate::errors::{AccessError, DomainError};
use crate::services::door::{DoorAccessConfig, DoorAccessService, DoorOpenerTrait};
use crate::services::verification::tests::mocks::MockUserRepository;

// Door controller stub answering with a fixed outcome
struct MockDoorOpener {
    requests: Mutex<Vec<AccessRequest>>,
    outcome: Result<u16, String>,
}

impl MockDoorOpener {
    fn answering(outcome: Result<u16, String>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            outcome,
        }
    }

    fn requests(&self) -> Vec<AccessRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DoorOpenerTrait for MockDoorOpener {
    async fn send_access_request(&self, request: &AccessRequest) -> Result<u16, String> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

fn repository() -> MockUserRepository {
    MockUserRepository::new(false)
        .with_user(User::new(5, "maria").with_role(Role::Subscriber))
        .with_user(User::new(9, "colab").with_role(Role::Contributor))
}

fn service(
    outcome: Result<u16, String>,
) -> (DoorAccessService<MockUserRepository, MockDoorOpener>, Arc<MockDoorOpener>) {
    let opener = Arc::new(MockDoorOpener::answering(outcome));
    let service = DoorAccessService::new(
        Arc::new(repository()),
        opener.clone(),
        DoorAccessConfig::default(),
    );
    (service, opener)
}

#[tokio::test]
async fn test_open_door_success() {
    let (service, opener) = service(Ok(200));

    let before = chrono::Utc::now().timestamp();
    let receipt = service.open_door(UserId(5)).await.unwrap();
    let after = chrono::Utc::now().timestamp();

    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.request.username, "maria");
    assert!(receipt.request.datetime >= before && receipt.request.datetime <= after);
    assert_eq!(receipt.request.hora.len(), "2024-03-09 22:15:00".len());
    assert_eq!(opener.requests(), vec![receipt.request]);
}

#[tokio::test]
async fn test_open_door_any_2xx_is_success() {
    let (service, _) = service(Ok(204));
    assert_eq!(service.open_door(UserId(5)).await.unwrap().status, 204);
}

#[tokio::test]
async fn test_open_door_unknown_user() {
    let (service, opener) = service(Ok(200));

    let result = service.open_door(UserId(404)).await;

    assert!(matches!(
        result,
        Err(DomainError::Access(AccessError::NotLoggedIn))
    ));
    assert!(opener.requests().is_empty());
}

#[tokio::test]
async fn test_open_door_blocked_role_sends_nothing() {
    let (service, opener) = service(Ok(200));

    match service.open_door(UserId(9)).await {
        Err(DomainError::Access(AccessError::RoleNotAllowed { role })) => {
            assert_eq!(role, "contributor");
        }
        other => panic!("Expected role refusal, got {other:?}"),
    }
    assert!(opener.requests().is_empty());
}

#[tokio::test]
async fn test_open_door_upstream_error_status() {
    let (service, opener) = service(Ok(500));

    let result = service.open_door(UserId(5)).await;

    assert!(matches!(
        result,
        Err(DomainError::Access(AccessError::UpstreamHttpError { status: 500 }))
    ));
    assert_eq!(opener.requests().len(), 1);
}

#[tokio::test]
async fn test_open_door_upstream_unreachable() {
    let (service, _) = service(Err("connection refused".to_string()));

    match service.open_door(UserId(5)).await {
        Err(DomainError::Access(AccessError::UpstreamUnreachable { message })) => {
            assert_eq!(message, "connection refused");
        }
        other => panic!("Expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_open_door_store_failure() {
    let opener = Arc::new(MockDoorOpener::answering(Ok(200)));
    let service = DoorAccessService::new(
        Arc::new(MockUserRepository::new(true)),
        opener.clone(),
        DoorAccessConfig::default(),
    );

    assert!(matches!(
        service.open_door(UserId(5)).await,
        Err(DomainError::Internal { .. })
    ));
    assert!(opener.requests().is_empty());
}

#[tokio::test]
async fn test_open_door_uses_site_offset() {
    let opener = Arc::new(MockDoorOpener::answering(Ok(200)));
    let config = DoorAccessConfig {
        site_offset: FixedOffset::east_opt(3600).unwrap(),
        ..DoorAccessConfig::default()
    };
    let service = DoorAccessService::new(Arc::new(repository()), opener, config);

    let receipt = service.open_door(UserId(5)).await.unwrap();
    let expected = chrono::DateTime::from_timestamp(receipt.request.datetime, 0)
        .unwrap()
        .with_timezone(&FixedOffset::east_opt(3600).unwrap())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    assert_eq!(receipt.request.hora, expected);
}
