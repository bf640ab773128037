//! The marker value which handlers return to request template rendering.

use http::header::HeaderValue;
use mime::Mime;
use std::borrow::Cow;

/// The file extension which `mustache()` appends to template names.
const TEMPLATE_EXTENSION: &str = ".mustache";

/// Creates a `MustacheContent` from the specified template name and data.
///
/// The name is suffixed with `.mustache` unless it already carries the
/// suffix, so `mustache("index", ..)` and `mustache("index.mustache", ..)`
/// refer to the same file.
pub fn mustache<T>(file: impl Into<Cow<'static, str>>, data: T) -> MustacheContent<T> {
    let file = file.into();
    let file = if file.ends_with(TEMPLATE_EXTENSION) {
        file
    } else {
        Cow::Owned(format!("{}{}", file, TEMPLATE_EXTENSION))
    };
    MustacheContent {
        file,
        data,
        content_type: None,
    }
}

/// A marker naming a Mustache template file and carrying the data
/// which the template is rendered against.
///
/// Values of this type are produced by handlers and consumed by a
/// [`Renderer`](./struct.Renderer.html) wrapping the endpoint.
#[derive(Debug)]
pub struct MustacheContent<T> {
    pub(crate) file: Cow<'static, str>,
    pub(crate) data: T,
    pub(crate) content_type: Option<HeaderValue>,
}

impl<T> MustacheContent<T> {
    /// Creates a marker with the specified file name, used as is.
    pub fn new(file: impl Into<Cow<'static, str>>, data: T) -> MustacheContent<T> {
        MustacheContent {
            file: file.into(),
            data,
            content_type: None,
        }
    }

    /// Sets the content type used for this response instead of the
    /// renderer's default.
    pub fn content_type(self, value: &Mime) -> MustacheContent<T> {
        MustacheContent {
            content_type: Some(
                value
                    .as_ref()
                    .parse()
                    .expect("should be a valid header value"),
            ),
            ..self
        }
    }

    /// Returns the name of the template file.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns a reference to the data the template is rendered against.
    pub fn data(&self) -> &T {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_appended() {
        let content = mustache("index", ());
        assert_eq!(content.file(), "index.mustache");
    }

    #[test]
    fn test_suffix_preserved() {
        let content = mustache("index.mustache", ());
        assert_eq!(content.file(), "index.mustache");
    }

    #[test]
    fn test_new_keeps_name() {
        let content = MustacheContent::new("index.html", ());
        assert_eq!(content.file(), "index.html");
    }

    #[test]
    fn test_content_type_override() {
        let content = mustache("index", ()).content_type(&mime::TEXT_PLAIN_UTF_8);
        assert_matches!(
            content.content_type,
            Some(ref h) if h == "text/plain; charset=utf-8"
        );
    }
}
