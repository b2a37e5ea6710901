//! Automaton: single-writer processing loop around the resolver.

use super::feedback::{Feedback, FeedbackController};
use super::strategy::Strategy;
use crate::builder::AutomatonBuilder;
use crate::config::AutomatonConfig;
use crate::core::{Input, Resolution, Resolver, State, TransitionRecord};
use crate::error::AutomatonError;
use futures::future;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Reactive state machine.
///
/// A spawned task owns the current state. It takes one message at a time,
/// either an external input or a feedback message from a producer, and
/// finishes handling it before taking the next. State changes and transition
/// records are therefore totally ordered.
///
/// Observers read through two streams:
/// - [`state_stream`](Self::state_stream): current value on subscribe, then every change
/// - [`replies`](Self::replies): one [`TransitionRecord`] per consumed input
///
/// Both streams are bounded by `AutomatonConfig::reply_capacity`. A subscriber
/// that falls more than that many items behind loses the oldest ones:
/// `replies()` then yields `RecvError::Lagged(n)` and the state stream skips
/// ahead. Size the capacity for the slowest subscriber if every record must
/// be observed.
///
/// The task finishes when the input stream has ended and no feedback work
/// remains, on [`shutdown`](Self::shutdown), or when this handle is dropped.
/// In-flight producers are cancelled when it finishes.
///
/// Must be created inside a tokio runtime.
///
/// # Example
///
/// ```rust
/// use reactive_automaton::core::{exact, Resolver, Rule};
/// use reactive_automaton::effects::{Automaton, Strategy};
/// use reactive_automaton::input::pipe;
/// use reactive_automaton::{input_enum, state_enum};
///
/// state_enum! {
///     enum Switch { Off, On }
/// }
///
/// input_enum! {
///     enum Toggle { Flip }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let resolver = Resolver::build(vec![
///     Rule::to(exact(Switch::Off), exact(Toggle::Flip), Switch::On),
///     Rule::to(exact(Switch::On), exact(Toggle::Flip), Switch::Off),
/// ]);
///
/// let (tx, rx) = pipe();
/// let automaton = Automaton::new(Switch::Off, rx, resolver, Strategy::Merge);
/// let mut replies = automaton.replies();
///
/// tx.send(Toggle::Flip).unwrap();
/// let reply = replies.recv().await.unwrap();
/// assert_eq!(reply.to, Some(Switch::On));
/// assert_eq!(automaton.state(), Switch::On);
/// # }
/// ```
pub struct Automaton<S: State, I: Input> {
    state: watch::Receiver<Snapshot<S>>,
    changes: broadcast::Receiver<Snapshot<S>>,
    replies: broadcast::Receiver<TransitionRecord<S, I>>,
    strategy: Strategy,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<S: State, I: Input> Automaton<S, I> {
    /// Start an automaton consuming `inputs`.
    pub fn new<St>(initial: S, inputs: St, resolver: Resolver<S, I>, strategy: Strategy) -> Self
    where
        St: Stream<Item = I> + Send + 'static,
    {
        Self::with_config(initial, inputs, resolver, AutomatonConfig::from(strategy))
    }

    /// Start an automaton with a full configuration.
    pub fn with_config<St>(
        initial: S,
        inputs: St,
        resolver: Resolver<S, I>,
        config: AutomatonConfig,
    ) -> Self
    where
        St: Stream<Item = I> + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(Snapshot {
            seq: 0,
            state: initial.clone(),
        });
        let (changes_tx, changes_rx) = broadcast::channel(config.reply_capacity());
        let (replies_tx, replies_rx) = broadcast::channel(config.reply_capacity());
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        let actor = Actor {
            state: initial,
            seq: 0,
            resolver,
            feedback: FeedbackController::new(
                config.strategy,
                feedback_tx,
                shutdown.child_token(),
            ),
            state_tx,
            changes_tx,
            replies_tx,
        };
        let task = tokio::spawn(actor.run(inputs.boxed(), feedback_rx, shutdown.clone()));

        Self {
            state: state_rx,
            changes: changes_rx,
            replies: replies_rx,
            strategy: config.strategy,
            shutdown,
            task: Some(task),
        }
    }

    /// Fluent construction.
    pub fn builder() -> AutomatonBuilder<S, I> {
        AutomatonBuilder::new()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.state.borrow().state.clone()
    }

    /// State stream: the current value, then every state that becomes
    /// current afterwards, including transitions back to the same state.
    ///
    /// Ends when the automaton finishes.
    pub fn state_stream(&self) -> BoxStream<'static, S> {
        // subscribe before reading the snapshot so no change falls in between
        let changes = self.changes.resubscribe();
        let current = self.state.borrow().clone();
        let seen = current.seq;

        let rest = stream::unfold(changes, move |mut changes| async move {
            loop {
                match changes.recv().await {
                    Ok(snapshot) if snapshot.seq <= seen => continue,
                    Ok(snapshot) => return Some((snapshot.state, changes)),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "state stream lagged");
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        });

        stream::once(future::ready(current.state)).chain(rest).boxed()
    }

    /// Outcome stream, starting with the next record published.
    ///
    /// Subscribe before feeding inputs to observe every record.
    pub fn replies(&self) -> broadcast::Receiver<TransitionRecord<S, I>> {
        self.replies.resubscribe()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }

    /// Stop processing and cancel every in-flight producer.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Wait for the processing task to finish.
    pub async fn join(mut self) -> Result<(), AutomatonError> {
        match self.task.take() {
            Some(task) => task.await.map_err(AutomatonError::from),
            None => Ok(()),
        }
    }
}

impl<S: State, I: Input> Drop for Automaton<S, I> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// A state tagged with the number of transitions that produced it.
#[derive(Clone, Debug)]
struct Snapshot<S> {
    seq: u64,
    state: S,
}

/// The single writer of the state cell.
struct Actor<S: State, I: Input> {
    state: S,
    seq: u64,
    resolver: Resolver<S, I>,
    feedback: FeedbackController<I>,
    state_tx: watch::Sender<Snapshot<S>>,
    changes_tx: broadcast::Sender<Snapshot<S>>,
    replies_tx: broadcast::Sender<TransitionRecord<S, I>>,
}

impl<S: State, I: Input> Actor<S, I> {
    async fn run(
        mut self,
        mut inputs: BoxStream<'static, I>,
        mut feedback_rx: mpsc::UnboundedReceiver<Feedback<I>>,
        shutdown: CancellationToken,
    ) {
        info!(
            state = self.state.name(),
            strategy = %self.feedback.strategy(),
            rules = self.resolver.len(),
            "automaton started"
        );

        let mut inputs_open = true;
        loop {
            if !inputs_open && self.feedback.is_idle() {
                break;
            }

            tokio::select! {
                biased;

                _ = shutdown.cancelled() => break,

                Some(feedback) = feedback_rx.recv() => {
                    let mut batch = vec![feedback];
                    while let Ok(more) = feedback_rx.try_recv() {
                        batch.push(more);
                    }
                    self.feedback.arbitrate(&mut batch);
                    for feedback in batch {
                        self.on_feedback(feedback);
                    }
                }

                next = inputs.next(), if inputs_open => match next {
                    Some(input) => self.consume(input),
                    None => {
                        debug!("input stream ended");
                        inputs_open = false;
                    }
                },
            }
        }

        self.feedback.shutdown();
        info!(state = self.state.name(), "automaton stopped");
    }

    fn on_feedback(&mut self, feedback: Feedback<I>) {
        match feedback {
            Feedback::Value { id, input } => {
                if self.feedback.admit(id) {
                    self.consume(input);
                }
            }
            Feedback::Done { id } => self.feedback.complete(id),
        }
    }

    /// Resolve one input against the current state.
    fn consume(&mut self, input: I) {
        let from = self.state.clone();

        match self.resolver.resolve(&from, &input) {
            None => {
                debug!(
                    input = input.name(),
                    state = from.name(),
                    "input rejected"
                );
                self.publish(TransitionRecord::rejected(input, from));
            }
            Some(Resolution { next, producer }) => {
                debug!(
                    input = input.name(),
                    from = from.name(),
                    to = next.name(),
                    effectful = producer.is_some(),
                    "transition accepted"
                );
                self.state = next.clone();
                self.seq += 1;
                let snapshot = Snapshot {
                    seq: self.seq,
                    state: next.clone(),
                };
                self.state_tx.send_replace(snapshot.clone());
                let _ = self.changes_tx.send(snapshot);
                self.publish(TransitionRecord::accepted(input, from, next));

                if let Some(producer) = producer {
                    self.feedback.handle(producer);
                }
            }
        }
    }

    fn publish(&self, record: TransitionRecord<S, I>) {
        // No receivers only once every handle is gone.
        let _ = self.replies_tx.send(record);
    }
}
