//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use actix_web::http::header;
use actix_web::test::TestRequest;
use actix_web::web;
use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::{Arc, Mutex};

use ghop_api::middleware::auth::SessionClaims;
use ghop_api::routes::AppState;
use ghop_core::domain::entities::user::{Role, User};
use ghop_core::domain::value_objects::AccessRequest;
use ghop_core::services::{
    DoorAccessConfig, DoorAccessService, DoorOpenerTrait, PhoneVerificationConfig,
    PhoneVerificationService,
};
use ghop_infra::sms::MockSmsService;
use ghop_infra::{InMemoryUserStore, SmsGatewayAdapter};
use ghop_shared::config::{AppConfig, SessionConfig};

pub const SECRET: &str = "test-session-secret";

pub type TestState = AppState<InMemoryUserStore, SmsGatewayAdapter, RecordingDoor>;

/// Door controller double answering with a fixed status
pub struct RecordingDoor {
    pub requests: Mutex<Vec<AccessRequest>>,
    status: u16,
}

impl RecordingDoor {
    pub fn answering(status: u16) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            status,
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl DoorOpenerTrait for RecordingDoor {
    async fn send_access_request(&self, request: &AccessRequest) -> Result<u16, String> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.status)
    }
}

/// Everything a test needs to drive the app and inspect its collaborators
pub struct Fixture {
    pub store: Arc<InMemoryUserStore>,
    pub sms: MockSmsService,
    pub door: Arc<RecordingDoor>,
    pub state: web::Data<TestState>,
    pub config: AppConfig,
}

pub struct FixtureBuilder {
    verification_enabled: bool,
    sms_available: bool,
    door_status: u16,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self {
            verification_enabled: true,
            sms_available: true,
            door_status: 200,
        }
    }

    pub fn verification_disabled(mut self) -> Self {
        self.verification_enabled = false;
        self
    }

    pub fn without_sms(mut self) -> Self {
        self.sms_available = false;
        self
    }

    pub fn door_status(mut self, status: u16) -> Self {
        self.door_status = status;
        self
    }

    pub fn build(self) -> Fixture {
        let store = Arc::new(InMemoryUserStore::with_users([
            User::new(5, "maria")
                .with_names("María", "Puig")
                .with_role(Role::Subscriber),
            User::new(7, "joan").with_role(Role::Subscriber),
            User::new(9, "colab").with_role(Role::Contributor),
            User::new(11, "admin").with_role(Role::Administrator),
        ]));

        let sms = MockSmsService::new();
        let gateway = if self.sms_available {
            SmsGatewayAdapter::new(Box::new(sms.clone()))
        } else {
            SmsGatewayAdapter::unavailable()
        };
        let door = Arc::new(RecordingDoor::answering(self.door_status));

        let verification_config = PhoneVerificationConfig {
            enabled: self.verification_enabled,
            ..PhoneVerificationConfig::default()
        };

        let verification_service = Arc::new(PhoneVerificationService::new(
            store.clone(),
            Arc::new(gateway),
            verification_config,
        ));
        let door_service = Arc::new(DoorAccessService::new(
            store.clone(),
            door.clone(),
            DoorAccessConfig::default(),
        ));

        let config = AppConfig {
            session: SessionConfig::new(SECRET),
            ..AppConfig::default()
        };

        Fixture {
            store,
            sms,
            door,
            state: web::Data::new(AppState::new(verification_service, door_service)),
            config,
        }
    }
}

/// Session token for `user_id` signed with the test secret
pub fn session_token(user_id: u64) -> String {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

/// Request builder carrying a session for `user_id`
pub fn authed(request: TestRequest, user_id: u64) -> TestRequest {
    request.insert_header((header::AUTHORIZATION, format!("Bearer {}", session_token(user_id))))
}
