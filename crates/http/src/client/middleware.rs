//! Request/response interceptor chain
//!
//! Interceptors are composed once, when the client is built, and run in
//! registration order around every authenticated call.

use reqwest::{RequestBuilder, StatusCode};
use std::rc::Rc;

/// Outbound transform applied to a request before it is sent
pub trait RequestInterceptor {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Inbound hook observing the status of every response.
///
/// Hooks cannot swallow a failure; the client still maps the status to a
/// [`ClientError`](super::error::ClientError) after the chain has run.
pub trait ResponseInterceptor {
    fn on_response(&self, status: StatusCode);
}

/// Ordered list of outbound and inbound interceptors
#[derive(Clone, Default)]
pub struct InterceptorChain {
    outbound: Vec<Rc<dyn RequestInterceptor>>,
    inbound: Vec<Rc<dyn ResponseInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outbound interceptor
    pub fn push_request(&mut self, interceptor: Rc<dyn RequestInterceptor>) {
        self.outbound.push(interceptor);
    }

    /// Append an inbound interceptor
    pub fn push_response(&mut self, interceptor: Rc<dyn ResponseInterceptor>) {
        self.inbound.push(interceptor);
    }

    pub fn apply_request(&self, request: RequestBuilder) -> RequestBuilder {
        self.outbound
            .iter()
            .fold(request, |request, interceptor| interceptor.intercept(request))
    }

    pub fn apply_response(&self, status: StatusCode) {
        for interceptor in &self.inbound {
            interceptor.on_response(status);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outbound.is_empty() && self.inbound.is_empty()
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("outbound", &self.outbound.len())
            .field("inbound", &self.inbound.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Tag(&'static str);

    impl RequestInterceptor for Tag {
        fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
            request.header("x-order", self.0)
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<u16>>);

    impl ResponseInterceptor for Recorder {
        fn on_response(&self, status: StatusCode) {
            self.0.borrow_mut().push(status.as_u16());
        }
    }

    #[test]
    fn test_request_interceptors_run_in_order() {
        let mut chain = InterceptorChain::new();
        chain.push_request(Rc::new(Tag("first")));
        chain.push_request(Rc::new(Tag("second")));

        let request = chain
            .apply_request(reqwest::Client::new().get("http://localhost/"))
            .build()
            .unwrap();
        let values: Vec<_> = request
            .headers()
            .get_all("x-order")
            .iter()
            .map(|v| v.to_str().unwrap().to_owned())
            .collect();
        assert_eq!(values, ["first", "second"]);
    }

    #[test]
    fn test_response_interceptors_see_every_status() {
        let recorder = Rc::new(Recorder::default());
        let mut chain = InterceptorChain::new();
        chain.push_response(recorder.clone());

        chain.apply_response(StatusCode::OK);
        chain.apply_response(StatusCode::UNAUTHORIZED);
        assert_eq!(*recorder.0.borrow(), [200, 401]);
    }

    #[test]
    fn test_empty_chain() {
        assert!(InterceptorChain::new().is_empty());
    }
}
