//! Lazy triple streams
//!
//! Contexts hand out pull-based iterators of `ProjectionResult<Triple>`.
//! Nothing is computed until the consumer asks for the next triple, and a
//! stream ends right after yielding its first error.

use crate::error::ProjectionResult;
use crate::rdf::Triple;
use std::iter::{self, FusedIterator};

/// Boxed, single-pass stream of triples
pub type TripleStream<'a> = Box<dyn Iterator<Item = ProjectionResult<Triple>> + 'a>;

/// Stream with nothing in it
pub fn empty<'a>() -> TripleStream<'a> {
    Box::new(iter::empty())
}

/// Stream computing at most one triple, on first pull
pub fn deferred<'a, F>(compute: F) -> TripleStream<'a>
where
    F: FnOnce() -> ProjectionResult<Option<Triple>> + 'a,
{
    Box::new(iter::once_with(compute).filter_map(Result::transpose))
}

/// Stream of the triples computed from a fallible, finite batch
///
/// The batch is built on first pull; used where a context's output is
/// bounded by one resource's fan-out.
pub fn batch<'a, F>(compute: F) -> TripleStream<'a>
where
    F: FnOnce() -> ProjectionResult<Vec<Triple>> + 'a,
{
    let mut compute = Some(compute);
    let mut pending: Option<std::vec::IntoIter<Triple>> = None;
    let stream = iter::from_fn(move || {
        if let Some(compute) = compute.take() {
            match compute() {
                Ok(triples) => pending = Some(triples.into_iter()),
                Err(e) => return Some(Err(e)),
            }
        }
        pending.as_mut()?.next().map(Ok)
    });
    Box::new(FailFast::new(stream))
}

/// Ends the wrapped stream after its first error
pub struct FailFast<I> {
    inner: I,
    failed: bool,
}

impl<I> FailFast<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            failed: false,
        }
    }
}

impl<I> Iterator for FailFast<I>
where
    I: Iterator<Item = ProjectionResult<Triple>>,
{
    type Item = ProjectionResult<Triple>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.inner.next()?;
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }
}

impl<I> FusedIterator for FailFast<I> where I: FusedIterator<Item = ProjectionResult<Triple>> {}
