//! Mustache template support for Finchers, based on rust-mustache.
//!
//! This crate lets route handlers respond with HTML rendered from Mustache
//! template files instead of building response bodies manually. A handler
//! returns a [`MustacheContent`] marker naming the template file and carrying
//! the substitution data; wrapping the endpoint in a [`Renderer`] replaces
//! such markers with HTTP responses holding the rendered bytes.
//!
//! [`MustacheContent`]: ./struct.MustacheContent.html
//! [`Renderer`]: ./struct.Renderer.html
//!
//! # Example
//!
//! ```rust,no_run
//! #[macro_use]
//! extern crate finchers;
//! extern crate finchers_mustache;
//! #[macro_use]
//! extern crate serde;
//!
//! use finchers::prelude::*;
//! use finchers_mustache::{mustache, MustacheEngine, Renderer};
//!
//! #[derive(Serialize)]
//! struct Greeting {
//!     name: String,
//! }
//!
//! fn main() {
//!     let engine = MustacheEngine::builder("templates")
//!         .buffer_size(512)
//!         .finish()
//!         .expect("invalid template configuration");
//!
//!     let endpoint = path!(@get / String /)
//!         .map(|name: String| mustache("greeting", Greeting { name }))
//!         .wrap(Renderer::new(engine));
//!
//!     finchers::server::start(endpoint)
//!         .serve("127.0.0.1:4000")
//!         .expect("failed to start the server");
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/finchers-mustache/0.1.0")]
#![warn(
    missing_docs,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    unused,
)]
#![cfg_attr(finchers_deny_warnings, deny(warnings))]
#![cfg_attr(finchers_deny_warnings, doc(test(attr(deny(warnings)))))]

extern crate bytes;
#[macro_use]
extern crate failure;
extern crate finchers;
#[macro_use]
extern crate futures;
extern crate http;
extern crate hyper;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate mime;
extern crate serde;

#[cfg(test)]
#[macro_use]
extern crate matches;

pub extern crate mustache;

mod body;
mod content;
mod engine;
mod renderer;

pub use crate::body::RenderedBody;
pub use crate::content::{mustache, MustacheContent};
pub use crate::engine::{AsMustache, Builder, ConfigError, MustacheEngine};
pub use crate::renderer::Renderer;

#[doc(no_inline)]
pub use mustache::Error as MustacheError;
