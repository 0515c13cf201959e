//! Framework-neutral request handling.
//!
//! Hosts that are not axum plug in through `ResponseWriter`: the interceptor
//! either writes a complete response or calls `next`, never both.

use bytes::Bytes;

use super::engine::{Decision, SecurityTxt, CONTENT_TYPE};

/// Incoming request as seen by the interceptor.
#[derive(Debug, Clone, Copy)]
pub struct RequestLine<'a> {
    pub method: &'a str,
    pub path: &'a str,
}

/// Response capability supplied by the host.
pub trait ResponseWriter {
    fn status(&mut self, code: u16) -> &mut Self;
    fn header(&mut self, name: &str, value: &str) -> &mut Self;
    fn send(&mut self, body: Bytes);
    fn redirect(&mut self, code: u16, location: &str);
}

impl SecurityTxt {
    pub fn handle<W, N>(&self, req: RequestLine<'_>, res: &mut W, next: N)
    where
        W: ResponseWriter,
        N: FnOnce(),
    {
        match self.decide(req.method, req.path) {
            Decision::Serve(body) => res
                .status(200)
                .header("Content-Type", CONTENT_TYPE)
                .send(body),
            Decision::Redirect { status, location } => res.redirect(status, location),
            Decision::Pass => next(),
        }
    }
}
