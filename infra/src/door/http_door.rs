//! HTTP client for the shop's door controller
//!
//! Posts the access request as JSON. The controller sits behind a dynamic
//! DNS name with a self-signed certificate, so certificate checks can be
//! turned off from configuration.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use ghop_core::domain::value_objects::AccessRequest;
use ghop_core::services::door::DoorOpenerTrait;
use ghop_shared::config::DoorConfig;

use crate::InfrastructureError;

/// Door controller client over HTTP
pub struct HttpDoorOpener {
    client: Client,
    url: String,
}

impl HttpDoorOpener {
    /// Build the client from door settings
    pub fn new(config: &DoorConfig) -> Result<Self, InfrastructureError> {
        if config.url.is_empty() {
            return Err(InfrastructureError::Config("Door URL is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        if config.accept_invalid_certs {
            tracing::warn!(url = %config.url, "TLS certificate verification disabled for door controller");
        }

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Endpoint the requests go to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DoorOpenerTrait for HttpDoorOpener {
    async fn send_access_request(&self, request: &AccessRequest) -> Result<u16, String> {
        tracing::debug!(url = %self.url, username = %request.username, "Sending door access request");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(response.status().as_u16())
    }
}
