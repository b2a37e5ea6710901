//! Lazily started sources of feedback inputs.

use futures::future;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Deferred, possibly infinite, cancellable sequence of inputs.
///
/// Nothing runs until the feedback controller polls the producer. Dropping
/// a producer (which is what cancellation does) releases whatever the
/// underlying stream holds.
pub struct Producer<I> {
    stream: BoxStream<'static, I>,
}

impl<I: Send + 'static> Producer<I> {
    /// Wrap an arbitrary stream.
    pub fn new<St>(stream: St) -> Self
    where
        St: Stream<Item = I> + Send + 'static,
    {
        Self {
            stream: stream.boxed(),
        }
    }

    /// Completes immediately without emitting.
    pub fn empty() -> Self {
        Self::new(stream::empty())
    }

    /// Never emits and never completes. Ends only through cancellation.
    pub fn never() -> Self {
        Self::new(stream::pending())
    }

    /// Emits `value` once, then completes.
    pub fn value(value: I) -> Self {
        Self::new(stream::once(future::ready(value)))
    }

    pub fn values<It>(values: It) -> Self
    where
        It: IntoIterator<Item = I>,
        It::IntoIter: Send + 'static,
    {
        Self::new(stream::iter(values))
    }

    /// Emits the future's output once it resolves.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = I> + Send + 'static,
    {
        Self::new(stream::once(future))
    }

    /// Runs a fallible future, translating its error into an input or into
    /// silent completion with `recover`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reactive_automaton::effects::Producer;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Msg { Loaded(u32), LoadFailed }
    ///
    /// let producer = Producer::try_from_future(
    ///     async { Err::<Msg, &str>("connection refused") },
    ///     |_err| Some(Msg::LoadFailed),
    /// );
    /// # let _ = producer;
    /// ```
    pub fn try_from_future<F, E, R>(future: F, recover: R) -> Self
    where
        F: Future<Output = Result<I, E>> + Send + 'static,
        R: FnOnce(E) -> Option<I> + Send + 'static,
    {
        let attempt = async move {
            match future.await {
                Ok(value) => Some(value),
                Err(err) => recover(err),
            }
        };
        Self::new(stream::once(attempt).filter_map(future::ready))
    }

    /// Emits `value` after `delay` (measured on the tokio clock).
    pub fn delayed(value: I, delay: Duration) -> Self {
        Self::from_future(async move {
            tokio::time::sleep(delay).await;
            value
        })
    }

    /// Runs `self` to completion, then `next`.
    pub fn then(self, next: Producer<I>) -> Self {
        Self::new(self.stream.chain(next.stream))
    }

    pub fn into_stream(self) -> BoxStream<'static, I> {
        self.stream
    }
}

impl<I> fmt::Debug for Producer<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn producer_is_lazy() {
        let started = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&started);

        let producer = Producer::from_future(async move {
            flag.store(true, Ordering::SeqCst);
            7u32
        });
        assert!(!started.load(Ordering::SeqCst));

        let values: Vec<u32> = producer.into_stream().collect().await;
        assert!(started.load(Ordering::SeqCst));
        assert_eq!(values, vec![7]);
    }

    #[tokio::test]
    async fn empty_completes_without_values() {
        let values: Vec<u32> = Producer::<u32>::empty().into_stream().collect().await;
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn values_then_value_preserves_order() {
        let producer = Producer::values(vec![1u32, 2]).then(Producer::value(3));
        let values: Vec<u32> = producer.into_stream().collect().await;

        assert_eq!(values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn try_from_future_recovers_error_as_input() {
        let producer = Producer::try_from_future(async { Err::<u32, &str>("boom") }, |_| Some(0));
        let values: Vec<u32> = producer.into_stream().collect().await;

        assert_eq!(values, vec![0]);
    }

    #[tokio::test]
    async fn try_from_future_can_complete_silently() {
        let producer = Producer::try_from_future(async { Err::<u32, &str>("boom") }, |_| None);
        let values: Vec<u32> = producer.into_stream().collect().await;

        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn try_from_future_passes_success_through() {
        let producer = Producer::try_from_future(async { Ok::<u32, &str>(5) }, |_| None);
        let values: Vec<u32> = producer.into_stream().collect().await;

        assert_eq!(values, vec![5]);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_waits_on_tokio_clock() {
        let begin = tokio::time::Instant::now();
        let values: Vec<u32> = Producer::delayed(9, Duration::from_secs(2))
            .into_stream()
            .collect()
            .await;

        assert_eq!(values, vec![9]);
        assert!(begin.elapsed() >= Duration::from_secs(2));
    }
}
