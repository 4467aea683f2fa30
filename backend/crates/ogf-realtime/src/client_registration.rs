use crate::{Client, ClientReceiver, Hub, Result as RealtimeResult};

use ogf_core::MessageType;

/// A client registered with the hub for the lifetime of one connection.
///
/// Transport adapters hold this while they stream. [`release`] unregisters
/// and waits for the hub to confirm; dropping without releasing (handler
/// cancelled, task panicked) still detaches the client, just without waiting.
///
/// [`release`]: ClientRegistration::release
pub struct ClientRegistration {
    hub: Hub,
    client: Client,
    released: bool,
}

impl ClientRegistration {
    /// Create a client for `tenant_id` and register it.
    ///
    /// `subscriptions` replaces the default set before the hub can see the
    /// client, so nothing outside it is ever dispatched to the connection.
    pub async fn open(
        hub: &Hub,
        tenant_id: impl Into<String>,
        user_id: impl Into<String>,
        subscriptions: Option<&[MessageType]>,
    ) -> RealtimeResult<(Self, ClientReceiver)> {
        let (client, receiver) = hub.new_client(tenant_id, user_id);
        if let Some(types) = subscriptions {
            client.set_subscriptions(types);
        }
        hub.register(&client).await?;

        let registration = Self {
            hub: hub.clone(),
            client,
            released: false,
        };

        Ok((registration, receiver))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn release(mut self) {
        self.released = true;
        self.client.close();
        self.hub.unregister(&self.client).await;
    }
}

impl Drop for ClientRegistration {
    fn drop(&mut self) {
        if !self.released {
            self.client.close();
            self.hub.detach(&self.client);
        }
    }
}
