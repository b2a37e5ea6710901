//! Input channel helper.
//!
//! An automaton consumes any `Stream` of inputs. [`pipe`] builds the common
//! case: a cloneable sender handed to whoever originates inputs, and a
//! receiver stream handed to the automaton.

use crate::error::AutomatonError;
use futures::channel::mpsc;

/// Receiving half of [`pipe`]; a `Stream` of inputs.
pub type InputReceiver<I> = mpsc::UnboundedReceiver<I>;

/// Sending half of [`pipe`].
#[derive(Debug)]
pub struct InputSender<I> {
    tx: mpsc::UnboundedSender<I>,
}

impl<I> Clone for InputSender<I> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<I> InputSender<I> {
    /// Queue an input for the automaton.
    ///
    /// Fails once the receiving side is gone or the channel was closed.
    pub fn send(&self, input: I) -> Result<(), AutomatonError> {
        self.tx
            .unbounded_send(input)
            .map_err(|_| AutomatonError::InputClosed)
    }

    /// End the input stream for every sender.
    ///
    /// Inputs queued before closing are still delivered.
    pub fn close(&self) {
        self.tx.close_channel();
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Create an unbounded input channel.
pub fn pipe<I>() -> (InputSender<I>, InputReceiver<I>) {
    let (tx, rx) = mpsc::unbounded();
    (InputSender { tx }, rx)
}
