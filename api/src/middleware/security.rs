//! Security response headers.
//!
//! Development sends a relaxed Content-Security-Policy that lets the local
//! client dev server and its websocket talk to the API. Production sends the
//! strict header set.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use bt_shared::Environment;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

const DEVELOPMENT_CSP: &str = "default-src 'self' 'unsafe-inline' data:; \
    connect-src 'self' http://localhost:5000 http://localhost:5173 ws://localhost:5173; \
    img-src 'self' data:; \
    script-src 'self' 'unsafe-inline'; \
    style-src 'self' 'unsafe-inline';";

const PRODUCTION_HEADERS: [(&str, &str); 6] = [
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("content-security-policy", "default-src 'none'; frame-ancestors 'none';"),
    (
        "permissions-policy",
        "accelerometer=(), camera=(), geolocation=(), gyroscope=(), magnetometer=(), microphone=(), payment=(), usb=()",
    ),
];

/// Security headers middleware factory
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    headers: Rc<Vec<(HeaderName, HeaderValue)>>,
}

impl SecurityHeaders {
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }

    /// Relaxed CSP only
    pub fn development() -> Self {
        Self::from_static(&[("content-security-policy", DEVELOPMENT_CSP)])
    }

    /// HSTS, nosniff, frame denial, referrer policy, strict CSP, permissions policy
    pub fn production() -> Self {
        Self::from_static(&PRODUCTION_HEADERS)
    }

    fn from_static(pairs: &[(&'static str, &'static str)]) -> Self {
        let headers = pairs
            .iter()
            .map(|&(name, value)| {
                (
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                )
            })
            .collect();
        Self {
            headers: Rc::new(headers),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersService {
            service: Rc::new(service),
            headers: Rc::clone(&self.headers),
        }))
    }
}

/// Security headers middleware service
pub struct SecurityHeadersService<S> {
    service: Rc<S>,
    headers: Rc<Vec<(HeaderName, HeaderValue)>>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let headers = Rc::clone(&self.headers);

        Box::pin(async move {
            let mut response = service.call(req).await?;

            let response_headers = response.headers_mut();
            for (name, value) in headers.iter() {
                response_headers.insert(name.clone(), value.clone());
            }

            Ok(response)
        })
    }
}
