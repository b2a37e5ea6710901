//! Feedback controller: schedules producers under the configured strategy.
//!
//! Producers run as spawned tasks. Every value they emit, and their
//! completion, is sent back to the automaton as a [`Feedback`] message over
//! a single channel; the automaton consults the controller again when the
//! message reaches its serialization point.
//!
//! ```text
//!   accepted effectful transition
//!              │ handle(producer)
//!              ▼
//!   ┌──────────────────────┐  start / queue / cancel   ┌───────────┐
//!   │  FeedbackController  │ ────────────────────────► │ producer  │
//!   │  in_flight: id→token │                           │  task #id │
//!   │  queue (Concat)      │                           └─────┬─────┘
//!   └──────────▲───────────┘                                 │
//!              │ admit(id) / complete(id)                    │ Value{id, input}
//!              │                                             │ Done{id}
//!   ┌──────────┴───────────┐        feedback channel         │
//!   │   automaton actor    │ ◄───────────────────────────────┘
//!   └──────────────────────┘
//! ```

use super::producer::Producer;
use super::strategy::Strategy;
use futures::StreamExt;
use std::collections::{BTreeMap, VecDeque};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Identifier of a producer within one automaton.
pub type ProducerId = u64;

/// Message from a producer task back to the automaton.
#[derive(Debug)]
pub enum Feedback<I> {
    /// The producer emitted a value.
    Value { id: ProducerId, input: I },

    /// The producer ran to completion.
    Done { id: ProducerId },
}

impl<I> Feedback<I> {
    pub fn id(&self) -> ProducerId {
        match self {
            Self::Value { id, .. } | Self::Done { id } => *id,
        }
    }
}

/// Owns in-flight producers and applies the strategy.
///
/// Not thread-safe by itself: it is owned by the automaton's processing
/// loop and only touched from there.
pub struct FeedbackController<I> {
    strategy: Strategy,
    in_flight: BTreeMap<ProducerId, CancellationToken>,
    queue: VecDeque<(ProducerId, Producer<I>)>,
    next_id: ProducerId,
    reinject: mpsc::UnboundedSender<Feedback<I>>,
    root: CancellationToken,
}

impl<I: Send + 'static> FeedbackController<I> {
    /// Create a controller whose producers report to `reinject`.
    ///
    /// Every producer token is a child of `root`, so cancelling `root`
    /// stops all producers.
    pub fn new(
        strategy: Strategy,
        reinject: mpsc::UnboundedSender<Feedback<I>>,
        root: CancellationToken,
    ) -> Self {
        Self {
            strategy,
            in_flight: BTreeMap::new(),
            queue: VecDeque::new(),
            next_id: 0,
            reinject,
            root,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Accept the producer of a successful effectful transition.
    pub fn handle(&mut self, producer: Producer<I>) -> ProducerId {
        let id = self.next_id;
        self.next_id += 1;

        match self.strategy {
            Strategy::Merge | Strategy::Race => self.start(id, producer),
            Strategy::Concat => {
                if self.in_flight.is_empty() {
                    self.start(id, producer);
                } else {
                    trace!(producer = id, queued = self.queue.len() + 1, "producer queued");
                    self.queue.push_back((id, producer));
                }
            }
            Strategy::Latest => {
                self.cancel_where(|_| true);
                self.start(id, producer);
            }
        }

        id
    }

    /// Order a batch of feedback drained from the channel in one go.
    ///
    /// Under `Race` the batch is stably sorted by producer id, so when
    /// several producers have values waiting at once the oldest one is
    /// admitted first and wins. Each producer's own messages keep their
    /// order. Other strategies keep arrival order.
    pub fn arbitrate(&self, batch: &mut [Feedback<I>]) {
        if self.strategy == Strategy::Race {
            batch.sort_by_key(Feedback::id);
        }
    }

    /// Decide whether a value emitted by producer `id` is resolved.
    ///
    /// Under `Race` the first admitted value wins and every other producer
    /// is cancelled; values still queued from losers are refused. Every other strategy resolves any value that was
    /// already handed over, even if its producer was cancelled since.
    pub fn admit(&mut self, id: ProducerId) -> bool {
        match self.strategy {
            Strategy::Race => {
                if !self.in_flight.contains_key(&id) {
                    trace!(producer = id, "race loser value dropped");
                    return false;
                }
                self.cancel_where(|other| other != id);
                true
            }
            Strategy::Merge | Strategy::Concat | Strategy::Latest => true,
        }
    }

    /// Record completion of producer `id`.
    pub fn complete(&mut self, id: ProducerId) {
        if self.in_flight.remove(&id).is_none() {
            return;
        }
        trace!(producer = id, "producer completed");

        if self.strategy == Strategy::Concat && self.in_flight.is_empty() {
            if let Some((next, producer)) = self.queue.pop_front() {
                self.start(next, producer);
            }
        }
    }

    /// Nothing running and nothing queued.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty() && self.queue.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Cancel every producer and drop the queue.
    pub fn shutdown(&mut self) {
        self.queue.clear();
        self.cancel_where(|_| true);
    }

    fn start(&mut self, id: ProducerId, producer: Producer<I>) {
        let token = self.root.child_token();
        self.in_flight.insert(id, token.clone());
        trace!(producer = id, strategy = %self.strategy, "producer started");

        tokio::spawn(run_producer(id, producer, self.reinject.clone(), token));
    }

    fn cancel_where(&mut self, pred: impl Fn(ProducerId) -> bool) {
        let doomed: Vec<ProducerId> = self
            .in_flight
            .keys()
            .copied()
            .filter(|id| pred(*id))
            .collect();

        for id in doomed {
            if let Some(token) = self.in_flight.remove(&id) {
                trace!(producer = id, "producer cancelled");
                token.cancel();
            }
        }
    }
}

/// Drive one producer until it completes or is cancelled.
///
/// Cancellation is checked before every poll; a value already pulled from
/// the stream is always sent.
async fn run_producer<I: Send + 'static>(
    id: ProducerId,
    producer: Producer<I>,
    reinject: mpsc::UnboundedSender<Feedback<I>>,
    token: CancellationToken,
) {
    let mut stream = producer.into_stream();

    loop {
        tokio::select! {
            biased;

            _ = token.cancelled() => return,

            next = stream.next() => match next {
                Some(input) => {
                    if reinject.send(Feedback::Value { id, input }).is_err() {
                        return;
                    }
                }
                None => break,
            },
        }
    }

    let _ = reinject.send(Feedback::Done { id });
}
