//! Session authentication middleware.
//!
//! The site issues an HS256 token whose `sub` claim is the user id. This
//! middleware checks the bearer token on every request of the scope it wraps
//! and injects an [`AuthContext`] into the request extensions. Requests
//! without a valid session are answered directly with the "Log in first."
//! envelope.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use ghop_core::domain::entities::user::UserId;
use ghop_shared::config::SessionConfig;
use ghop_shared::ActionResponse;

/// Message shown when the caller has no valid session
pub const LOGIN_REQUIRED_MESSAGE: &str = "Log in first.";

/// Claims carried by a site session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id as a decimal string
    pub sub: String,
    /// Expiry as a Unix timestamp
    pub exp: i64,
}

/// Authenticated user injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: UserId,
}

impl AuthContext {
    fn from_claims(claims: &SessionClaims) -> Result<Self, String> {
        let id: u64 = claims
            .sub
            .parse()
            .map_err(|_| format!("Invalid subject: {}", claims.sub))?;

        if id == UserId::NONE.value() {
            return Err("Anonymous subject".to_string());
        }

        Ok(Self { user_id: UserId(id) })
    }
}

/// Session authentication middleware factory
pub struct SessionAuth {
    secret: Rc<String>,
    leeway: u64,
}

impl SessionAuth {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            secret: Rc::new(config.secret.clone()),
            leeway: config.leeway_seconds,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            secret: Rc::clone(&self.secret),
            leeway: self.leeway,
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    secret: Rc<String>,
    leeway: u64,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let secret = Rc::clone(&self.secret);
        let leeway = self.leeway;

        Box::pin(async move {
            let verified = match extract_bearer_token(&req) {
                Some(token) => verify_session_token(&token, &secret, leeway),
                None => Err("Missing or invalid Authorization header".to_string()),
            };

            match verified {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(reason) => {
                    log::info!("Rejected session for {} {}: {}", req.method(), req.path(), reason);
                    let response = HttpResponse::Unauthorized()
                        .json(ActionResponse::error("NOT_LOGGED_IN", LOGIN_REQUIRED_MESSAGE));
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Check signature and expiry, then read the user id from `sub`
pub fn verify_session_token(token: &str, secret: &str, leeway: u64) -> Result<AuthContext, String> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = leeway;

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Token decode error: {}", e))?;

    AuthContext::from_claims(&token_data.claims)
}

/// Extractor for handlers behind [`SessionAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ErrorUnauthorized(LOGIN_REQUIRED_MESSAGE));

        ready(result)
    }
}
