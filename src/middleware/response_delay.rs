//! Fixed artificial latency for every request.
//!
//! The dashboard runs against a mock store that answers instantly; delaying
//! each response lets the front end exercise its loading and refetching
//! states the way it would against a real backend.

use std::rc::Rc;
use std::time::Duration;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::debug;

#[derive(Debug, Clone, Copy)]
pub struct ResponseDelay {
    delay: Duration,
}

impl ResponseDelay {
    /// A zero delay turns the middleware into a pass-through.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ResponseDelay
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ResponseDelayService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ResponseDelayService {
            service: Rc::new(service),
            delay: self.delay,
        })
    }
}

pub struct ResponseDelayService<S> {
    service: Rc<S>,
    delay: Duration,
}

impl<S, B> Service<ServiceRequest> for ResponseDelayService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let delay = self.delay;

        Box::pin(async move {
            if !delay.is_zero() {
                debug!("Delaying {} by {:?}", req.path(), delay);
                actix_web::rt::time::sleep(delay).await;
            }
            service.call(req).await
        })
    }
}
