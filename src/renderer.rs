//! The endpoint wrapper which replaces mustache markers with rendered
//! HTTP responses.

use finchers::endpoint::wrapper::Wrapper;
use finchers::endpoint::{ApplyContext, ApplyResult, Endpoint};
use finchers::error;

use std::fmt;
use std::marker::PhantomData;

use futures::{Async, Future, Poll};
use http::header;
use http::header::HeaderValue;
use http::Response;
use serde::Serialize;

use crate::body::RenderedBody;
use crate::content::MustacheContent;
use crate::engine::AsMustache;

lazy_static! {
    static ref DEFAULT_CONTENT_TYPE: HeaderValue =
        HeaderValue::from_static("text/html; charset=utf-8");
}

/// A wrapper which converts the `MustacheContent` markers produced by an
/// endpoint into HTTP responses holding the rendered template output.
#[derive(Debug)]
pub struct Renderer<M> {
    engine: M,
}

impl<M> Renderer<M>
where
    M: AsMustache,
{
    /// Creates a `Renderer` which renders markers with the specified engine.
    pub fn new(engine: M) -> Renderer<M> {
        Renderer { engine }
    }

    /// Returns a reference to the inner engine.
    pub fn engine(&self) -> &M {
        &self.engine
    }

    fn get_content_type<T>(&self, content: &MustacheContent<T>) -> HeaderValue {
        content
            .content_type
            .clone()
            .or_else(|| self.engine.as_mustache().default_content_type().cloned())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.clone())
    }

    /// Renders the specified content into a complete HTTP response.
    ///
    /// This is the same conversion performed for markers flowing out of a
    /// wrapped endpoint, usable from handlers which want to respond with a
    /// rendered template directly.
    pub fn render_response<T>(
        &self,
        content: MustacheContent<T>,
    ) -> error::Result<Response<RenderedBody>>
    where
        T: Serialize,
    {
        let content_type = self.get_content_type(&content);
        let body = self
            .engine
            .as_mustache()
            .render(&content)
            .map_err(|err| error::Error::from(failure::Error::from(err)))?;
        let mut response = Response::new(body);
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
        Ok(response)
    }
}

impl<'a, E, M, T> Wrapper<'a, E> for Renderer<M>
where
    E: Endpoint<'a, Output = (MustacheContent<T>,)>,
    M: AsMustache + 'a,
    T: Serialize + 'a,
{
    type Output = (Response<RenderedBody>,);
    type Endpoint = RenderEndpoint<E, M, T>;

    fn wrap(self, endpoint: E) -> Self::Endpoint {
        RenderEndpoint {
            endpoint,
            renderer: self,
            _marker: PhantomData,
        }
    }
}

/// The endpoint produced by wrapping an endpoint with a `Renderer`.
pub struct RenderEndpoint<E, M, T> {
    endpoint: E,
    renderer: Renderer<M>,
    _marker: PhantomData<fn() -> T>,
}

impl<E, M, T> fmt::Debug for RenderEndpoint<E, M, T>
where
    E: fmt::Debug,
    M: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderEndpoint")
            .field("endpoint", &self.endpoint)
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl<'a, E, M, T> Endpoint<'a> for RenderEndpoint<E, M, T>
where
    E: Endpoint<'a, Output = (MustacheContent<T>,)>,
    M: AsMustache + 'a,
    T: Serialize + 'a,
{
    type Output = (Response<RenderedBody>,);
    type Future = RenderFuture<'a, E, M, T>;

    fn apply(&'a self, cx: &mut ApplyContext<'_>) -> ApplyResult<Self::Future> {
        Ok(RenderFuture {
            future: self.endpoint.apply(cx)?,
            renderer: &self.renderer,
            _marker: PhantomData,
        })
    }
}

/// The future which polls the inner endpoint and renders its marker output.
pub struct RenderFuture<'a, E: Endpoint<'a>, M: 'a, T: 'a> {
    future: E::Future,
    renderer: &'a Renderer<M>,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, E, M, T> fmt::Debug for RenderFuture<'a, E, M, T>
where
    E: Endpoint<'a> + fmt::Debug,
    E::Future: fmt::Debug,
    M: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderFuture")
            .field("future", &self.future)
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl<'a, E, M, T> Future for RenderFuture<'a, E, M, T>
where
    E: Endpoint<'a, Output = (MustacheContent<T>,)>,
    M: AsMustache + 'a,
    T: Serialize + 'a,
{
    type Item = (Response<RenderedBody>,);
    type Error = error::Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        let (content,) = try_ready!(self.future.poll());
        self.renderer
            .render_response(content)
            .map(|response| Async::Ready((response,)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::mustache;
    use crate::engine::MustacheEngine;

    use std::path::Path;

    fn engine() -> MustacheEngine {
        MustacheEngine::builder(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/templates"))
            .finish()
            .unwrap()
    }

    #[test]
    fn test_content_type_fallback() {
        let renderer = Renderer::new(engine());
        let value = renderer.get_content_type(&mustache("greeting", ()));
        assert_eq!(value, "text/html; charset=utf-8");
    }

    #[test]
    fn test_content_type_from_engine() {
        let engine = MustacheEngine::builder(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/templates"),
        ).default_content_type(&mime::TEXT_PLAIN_UTF_8)
        .finish()
        .unwrap();
        let renderer = Renderer::new(engine);
        let value = renderer.get_content_type(&mustache("greeting", ()));
        assert_eq!(value, "text/plain; charset=utf-8");
    }

    #[test]
    fn test_content_type_from_marker() {
        let engine = MustacheEngine::builder(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/templates"),
        ).default_content_type(&mime::TEXT_PLAIN_UTF_8)
        .finish()
        .unwrap();
        let renderer = Renderer::new(engine);
        let content = mustache("greeting", ()).content_type(&mime::TEXT_XML);
        assert_eq!(renderer.get_content_type(&content), "text/xml");
    }
}
