//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware reads the `Authorization` header, runs it through the
//! auth gate and injects the resolved [`Identity`] into the request. The gate
//! itself lives in the core crate; this type only adapts it to actix.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use bt_core::domain::value_objects::Identity;
use bt_core::errors::{AuthError, DomainError};
use bt_core::services::auth::authenticate;
use bt_core::services::TokenService;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::ApiError;

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    tokens: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
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
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match authenticate(header, &self.tokens) {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                let service = Rc::clone(&self.service);
                Box::pin(async move {
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                })
            }
            Err(err) => {
                tracing::debug!(path = %req.path(), reason = %err, "Unauthenticated request");
                let response = req
                    .error_response(ApiError::from(DomainError::from(err)))
                    .map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

/// Identity of the caller, available to handlers behind [`JwtAuth`]
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl AuthenticatedUser {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Identity>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| ApiError::from(DomainError::from(AuthError::MissingToken)));

        ready(result)
    }
}
