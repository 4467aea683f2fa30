use crate::{ClientId, ClientSubscriptions};

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use ogf_core::MessageType;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};
use tokio::sync::{mpsc, watch};

/// Result of a non-blocking push onto a client's outbound queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Sent,
    /// Queue at capacity; the frame was not enqueued
    Full,
    /// Queue closed by the hub or the receiver is gone
    Closed,
}

/// One logical subscriber.
///
/// Cheap to clone; all clones share the same state. The transport adapter
/// creates it and keeps the matching [`ClientReceiver`]; the hub holds a
/// clone while the client is registered and is the only writer of the
/// outbound queue.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    id: ClientId,
    tenant_id: String,
    user_id: String,
    connected_at: DateTime<Utc>,
    subscriptions: RwLock<ClientSubscriptions>,
    /// `None` once the hub closed the queue
    outbound: Mutex<Option<mpsc::Sender<Bytes>>>,
    done: watch::Sender<bool>,
}

/// Read side of a client's outbound queue, owned by the transport adapter.
#[derive(Debug)]
pub struct ClientReceiver {
    frames: mpsc::Receiver<Bytes>,
    done: watch::Receiver<bool>,
}

impl Client {
    /// Create a client with default subscriptions and an outbound queue of
    /// `buffer_size` frames.
    pub fn new(
        tenant_id: impl Into<String>,
        user_id: impl Into<String>,
        buffer_size: usize,
    ) -> (Self, ClientReceiver) {
        let (sender, frames) = mpsc::channel(buffer_size.max(1));
        let (done_tx, done) = watch::channel(false);

        let client = Self {
            inner: Arc::new(ClientInner {
                id: ClientId::new(),
                tenant_id: tenant_id.into(),
                user_id: user_id.into(),
                connected_at: Utc::now(),
                subscriptions: RwLock::new(ClientSubscriptions::new()),
                outbound: Mutex::new(Some(sender)),
                done: done_tx,
            }),
        };

        (client, ClientReceiver { frames, done })
    }

    pub fn id(&self) -> ClientId {
        self.inner.id
    }

    pub fn tenant_id(&self) -> &str {
        &self.inner.tenant_id
    }

    pub fn user_id(&self) -> &str {
        &self.inner.user_id
    }

    pub fn connected_at(&self) -> DateTime<Utc> {
        self.inner.connected_at
    }

    pub fn subscribe(&self, types: &[MessageType]) -> usize {
        self.write_subscriptions(|subs| subs.subscribe(types))
    }

    pub fn unsubscribe(&self, types: &[MessageType]) -> usize {
        self.write_subscriptions(|subs| subs.unsubscribe(types))
    }

    /// Replace the subscription set with exactly `types`
    pub fn set_subscriptions(&self, types: &[MessageType]) {
        self.write_subscriptions(|subs| subs.replace(types));
    }

    pub fn is_subscribed(&self, message_type: MessageType) -> bool {
        self.inner
            .subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_subscribed(message_type)
    }

    pub fn subscriptions(&self) -> ClientSubscriptions {
        self.inner
            .subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Ask the owning transport loop to stop. Idempotent.
    pub fn close(&self) {
        self.inner.done.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.inner.done.borrow()
    }

    /// Whether the hub has closed the outbound queue
    pub fn is_outbound_closed(&self) -> bool {
        self.inner
            .outbound
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Non-blocking push. A full queue keeps what it has and rejects `frame`.
    pub(crate) fn try_push(&self, frame: Bytes) -> PushOutcome {
        let outbound = self
            .inner
            .outbound
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match outbound.as_ref() {
            None => PushOutcome::Closed,
            Some(sender) => match sender.try_send(frame) {
                Ok(()) => PushOutcome::Sent,
                Err(TrySendError::Full(_)) => PushOutcome::Full,
                Err(TrySendError::Closed(_)) => PushOutcome::Closed,
            },
        }
    }

    /// Drop the sender so the receiver drains and then ends. Returns true
    /// only for the call that actually closed it.
    pub(crate) fn close_outbound(&self) -> bool {
        self.inner
            .outbound
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    fn write_subscriptions<R>(&self, f: impl FnOnce(&mut ClientSubscriptions) -> R) -> R {
        let mut subscriptions = self
            .inner
            .subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut subscriptions)
    }
}

impl ClientReceiver {
    /// Next frame, or `None` once the queue is closed and drained or the
    /// client was closed.
    pub async fn recv(&mut self) -> Option<Bytes> {
        let Self { frames, done } = self;

        if *done.borrow() {
            return None;
        }

        tokio::select! {
            biased;
            signalled = async { done.wait_for(|closed| *closed).await.is_ok() } => {
                if signalled {
                    None
                } else {
                    // Every Client handle is gone; drain what is left.
                    frames.recv().await
                }
            }
            frame = frames.recv() => frame,
        }
    }

    pub fn try_recv(&mut self) -> Result<Bytes, TryRecvError> {
        self.frames.try_recv()
    }

    /// Frames currently buffered
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
