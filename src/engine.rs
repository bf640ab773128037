//! The engine which locates and renders Mustache template files.

use failure::SyncFailure;
use http::header::HeaderValue;
use mime::Mime;
use serde::Serialize;

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use crate::body::RenderedBody;
use crate::content::MustacheContent;

/// The default size of the output buffer, in bytes.
const DEFAULT_BUFFER_SIZE: usize = 64;

/// An engine which renders Mustache templates from a directory on disk.
///
/// Templates are looked up relative to the configured root directory and
/// compiled per request by the `mustache` crate; partials referenced from a
/// template are resolved against the same directory.
#[derive(Debug, Clone)]
pub struct MustacheEngine {
    root: PathBuf,
    buffer_size: usize,
    default_content_type: Option<HeaderValue>,
}

impl MustacheEngine {
    /// Creates an engine with default settings, rooted at the specified
    /// template directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<MustacheEngine, ConfigError> {
        MustacheEngine::builder(root).finish()
    }

    /// Starts building an engine rooted at the specified template directory.
    pub fn builder(root: impl Into<PathBuf>) -> Builder {
        Builder {
            root: root.into(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            default_content_type: None,
        }
    }

    /// Returns the path of the template directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configured buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub(crate) fn default_content_type(&self) -> Option<&HeaderValue> {
        self.default_content_type.as_ref()
    }

    /// Renders the specified content into a response body.
    ///
    /// The rendered output is accumulated into an in-memory buffer whose
    /// initial capacity is the configured buffer size.
    pub fn render<T>(
        &self,
        content: &MustacheContent<T>,
    ) -> Result<RenderedBody, SyncFailure<mustache::Error>>
    where
        T: Serialize,
    {
        let context = mustache::Context::new(self.root.clone());
        let template = context
            .compile_path(content.file())
            .map_err(SyncFailure::new)?;
        let mut buf = Vec::with_capacity(self.buffer_size);
        template
            .render(&mut buf, content.data())
            .map_err(SyncFailure::new)?;
        Ok(RenderedBody::new(buf, self.buffer_size))
    }
}

/// A builder of `MustacheEngine`, validating the configuration values.
#[derive(Debug)]
pub struct Builder {
    root: PathBuf,
    buffer_size: usize,
    default_content_type: Option<HeaderValue>,
}

impl Builder {
    /// Sets the size of the output buffer, which is also the chunk size
    /// used when the rendered output is written to the connection.
    pub fn buffer_size(self, size: usize) -> Builder {
        Builder {
            buffer_size: size,
            ..self
        }
    }

    /// Sets the content type used for responses whose marker does not
    /// carry one.
    pub fn default_content_type(self, value: &Mime) -> Builder {
        Builder {
            default_content_type: Some(
                value
                    .as_ref()
                    .parse()
                    .expect("should be a valid header value"),
            ),
            ..self
        }
    }

    /// Validates the configuration and builds a `MustacheEngine`.
    ///
    /// The template directory must exist and the buffer size must be
    /// greater than zero.
    pub fn finish(self) -> Result<MustacheEngine, ConfigError> {
        if !self.root.is_dir() {
            return Err(ConfigError::TemplateDirNotFound { path: self.root });
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::InvalidBufferSize {
                size: self.buffer_size,
            });
        }
        log_found_templates(&self.root);
        Ok(MustacheEngine {
            root: self.root,
            buffer_size: self.buffer_size,
            default_content_type: self.default_content_type,
        })
    }
}

fn log_found_templates(root: &Path) {
    let found: Vec<PathBuf> = fs::read_dir(root)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.extension().map_or(false, |ext| ext == "mustache"))
                .collect()
        })
        .unwrap_or_else(|_| vec![]);

    if found.is_empty() {
        warn!("found no mustache templates in {}", root.display());
    } else {
        for path in &found {
            info!("found template: {}", path.display());
        }
    }
}

/// The error type during validation of the engine configuration.
#[derive(Debug, Fail)]
pub enum ConfigError {
    /// The configured template directory does not exist.
    #[fail(display = "template directory does not exist: {:?}", path)]
    TemplateDirNotFound {
        /// The configured directory.
        path: PathBuf,
    },

    /// The configured buffer size is not greater than zero.
    #[fail(display = "buffer size must be greater than zero, was {}", size)]
    InvalidBufferSize {
        /// The configured size.
        size: usize,
    },
}

/// A trait representing types from which a reference to a `MustacheEngine`
/// can be borrowed.
pub trait AsMustache {
    /// Returns a reference to the inner engine.
    fn as_mustache(&self) -> &MustacheEngine;
}

impl AsMustache for MustacheEngine {
    fn as_mustache(&self) -> &MustacheEngine {
        self
    }
}

impl<T: AsMustache> AsMustache for Box<T> {
    fn as_mustache(&self) -> &MustacheEngine {
        (**self).as_mustache()
    }
}

impl<T: AsMustache> AsMustache for Rc<T> {
    fn as_mustache(&self) -> &MustacheEngine {
        (**self).as_mustache()
    }
}

impl<T: AsMustache> AsMustache for Arc<T> {
    fn as_mustache(&self) -> &MustacheEngine {
        (**self).as_mustache()
    }
}
