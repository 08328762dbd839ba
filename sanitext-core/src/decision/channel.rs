// sanitext-core/src/decision/channel.rs
//! A request/response channel between the decision engine and whatever drives
//! the user interaction.
//!
//! The engine side holds a [`ChannelDecider`]; the interaction side holds
//! [`DecisionRequests`] and answers each [`DecisionRequest`] through its reply
//! handle. The channel has room for exactly one request, and the engine waits
//! for each reply before sending the next, so at most one decision is ever
//! outstanding. If the interaction side goes away, the engine sees `Cancel`.

use async_trait::async_trait;
use log::warn;
use tokio::sync::{mpsc, oneshot};

use super::{Decision, DecisionProvider};
use crate::character_info::CharacterInfo;

/// A pending question about one character.
#[derive(Debug)]
pub struct DecisionRequest {
    pub info: CharacterInfo,
    respond_to: oneshot::Sender<Decision>,
}

impl DecisionRequest {
    /// Sends `decision` back to the engine. Dropping a request unanswered is
    /// the same as answering `Cancel`.
    pub fn respond(self, decision: Decision) {
        if self.respond_to.send(decision).is_err() {
            warn!("Decision for {} arrived after the run ended.", self.info.hex_code);
        }
    }
}

/// The engine-facing half: a `DecisionProvider` that forwards to the channel.
#[derive(Debug, Clone)]
pub struct ChannelDecider {
    tx: mpsc::Sender<DecisionRequest>,
}

/// The interaction-facing half: a stream of pending requests.
#[derive(Debug)]
pub struct DecisionRequests {
    rx: mpsc::Receiver<DecisionRequest>,
}

impl DecisionRequests {
    /// Waits for the next request. Returns `None` once every decider is gone.
    pub async fn next(&mut self) -> Option<DecisionRequest> {
        self.rx.recv().await
    }

    /// Blocking variant of [`next`](Self::next) for threads outside the async runtime.
    ///
    /// # Panics
    /// Panics if called from within an asynchronous execution context.
    pub fn blocking_next(&mut self) -> Option<DecisionRequest> {
        self.rx.blocking_recv()
    }
}

/// Creates a connected decider/requests pair.
pub fn decision_channel() -> (ChannelDecider, DecisionRequests) {
    let (tx, rx) = mpsc::channel(1);
    (ChannelDecider { tx }, DecisionRequests { rx })
}

#[async_trait]
impl DecisionProvider for ChannelDecider {
    async fn decide(&mut self, info: &CharacterInfo) -> Decision {
        let (respond_to, reply) = oneshot::channel();
        let request = DecisionRequest { info: info.clone(), respond_to };

        if self.tx.send(request).await.is_err() {
            warn!("Decision channel closed before {} was decided; cancelling.", info.hex_code);
            return Decision::Cancel;
        }
        match reply.await {
            Ok(decision) => decision,
            Err(_) => {
                warn!("Decision request for {} was dropped unanswered; cancelling.", info.hex_code);
                Decision::Cancel
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_through_channel() {
        let (mut decider, mut requests) = decision_channel();
        let responder = tokio::spawn(async move {
            let request = requests.next().await.expect("request");
            assert_eq!(request.info.hex_code, "U+2014");
            request.respond(Decision::Replace("-".into()));
        });

        let decision = decider.decide(&CharacterInfo::new('\u{2014}')).await;
        assert_eq!(decision, Decision::Replace("-".into()));
        responder.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_receiver_cancels() {
        let (mut decider, requests) = decision_channel();
        drop(requests);
        assert_eq!(decider.decide(&CharacterInfo::new('x')).await, Decision::Cancel);
    }

    #[tokio::test]
    async fn test_dropped_request_cancels() {
        let (mut decider, mut requests) = decision_channel();
        tokio::spawn(async move {
            let request = requests.next().await;
            drop(request);
        });
        assert_eq!(decider.decide(&CharacterInfo::new('x')).await, Decision::Cancel);
    }

    #[test]
    fn test_blocking_responder_thread() {
        let (mut decider, mut requests) = decision_channel();
        let worker = std::thread::spawn(move || {
            let mut seen = Vec::new();
            while let Some(request) = requests.blocking_next() {
                seen.push(request.info.char);
                request.respond(Decision::Keep);
            }
            seen
        });

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            assert_eq!(decider.decide(&CharacterInfo::new('\u{00E9}')).await, Decision::Keep);
            assert_eq!(decider.decide(&CharacterInfo::new('\u{00FC}')).await, Decision::Keep);
        });
        drop(decider);
        assert_eq!(worker.join().unwrap(), vec!['\u{00E9}', '\u{00FC}']);
    }
}
