//! The response body type holding the rendered output.

use bytes::Bytes;
use finchers::error::Never;
use finchers::output::body::ResBody;
use futures::{Async, Poll};
use hyper::body::Payload;
use std::cmp;
use std::io;

/// A response body holding the rendered template output.
///
/// The output is copied to the connection in chunks of at most the
/// engine's configured buffer size.
#[derive(Debug)]
pub struct RenderedBody {
    content: Bytes,
    chunk_size: usize,
}

impl RenderedBody {
    pub(crate) fn new(content: Vec<u8>, chunk_size: usize) -> RenderedBody {
        RenderedBody {
            content: content.into(),
            chunk_size,
        }
    }

    /// Returns the rendered bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl ResBody for RenderedBody {
    type Data = io::Cursor<Bytes>;
    type Error = Never;
    type Payload = ChunkedPayload;

    fn into_payload(self) -> Self::Payload {
        ChunkedPayload {
            content: self.content,
            chunk_size: self.chunk_size,
            pos: 0,
        }
    }
}

/// A `Payload` which writes an in-memory buffer to the connection,
/// one chunk at a time.
#[derive(Debug)]
pub struct ChunkedPayload {
    content: Bytes,
    chunk_size: usize,
    pos: usize,
}

impl Payload for ChunkedPayload {
    type Data = io::Cursor<Bytes>;
    type Error = Never;

    fn poll_data(&mut self) -> Poll<Option<Self::Data>, Self::Error> {
        if self.pos >= self.content.len() {
            return Ok(Async::Ready(None));
        }
        let end = cmp::min(self.pos + self.chunk_size, self.content.len());
        let chunk = self.content.slice(self.pos, end);
        self.pos = end;
        Ok(Async::Ready(Some(io::Cursor::new(chunk))))
    }

    fn is_end_stream(&self) -> bool {
        self.pos >= self.content.len()
    }

    fn content_length(&self) -> Option<u64> {
        Some(self.content.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(body: RenderedBody) -> (Vec<Bytes>, Option<u64>) {
        let mut payload = body.into_payload();
        let content_length = payload.content_length();
        let mut chunks = vec![];
        loop {
            match payload.poll_data() {
                Ok(Async::Ready(Some(chunk))) => chunks.push(chunk.into_inner()),
                Ok(Async::Ready(None)) => break,
                Ok(Async::NotReady) => unreachable!(),
                Err(never) => match never {},
            }
        }
        assert!(payload.is_end_stream());
        (chunks, content_length)
    }

    #[test]
    fn test_exact_chunks() {
        let (chunks, content_length) = collect(RenderedBody::new(b"abcdefgh".to_vec(), 4));
        assert_eq!(chunks, vec![Bytes::from("abcd"), Bytes::from("efgh")]);
        assert_eq!(content_length, Some(8));
    }

    #[test]
    fn test_short_last_chunk() {
        let (chunks, content_length) = collect(RenderedBody::new(b"abcdefghij".to_vec(), 4));
        assert_eq!(
            chunks,
            vec![Bytes::from("abcd"), Bytes::from("efgh"), Bytes::from("ij")]
        );
        assert_eq!(content_length, Some(10));
    }

    #[test]
    fn test_single_chunk() {
        let (chunks, content_length) = collect(RenderedBody::new(b"abc".to_vec(), 64));
        assert_eq!(chunks, vec![Bytes::from("abc")]);
        assert_eq!(content_length, Some(3));
    }

    #[test]
    fn test_empty() {
        let (chunks, content_length) = collect(RenderedBody::new(vec![], 64));
        assert!(chunks.is_empty());
        assert_eq!(content_length, Some(0));
    }
}
