use crate::{Client, PushOutcome};

use std::time::Duration;

use bytes::Bytes;
use googletest::prelude::*;
use ogf_core::MessageType;
use tokio::time::timeout;

#[test]
fn given_new_client_when_created_then_identity_and_defaults_set() {
    let (client, receiver) = Client::new("acme", "user-1", 8);

    assert_that!(client.tenant_id(), eq("acme"));
    assert_that!(client.user_id(), eq("user-1"));
    assert!(client.is_subscribed(MessageType::Alert));
    assert!(!client.is_closed());
    assert!(!client.is_outbound_closed());
    assert!(receiver.is_empty());
}

#[test]
fn given_two_clients_when_created_then_ids_differ() {
    let (a, _ra) = Client::new("acme", "user-1", 8);
    let (b, _rb) = Client::new("acme", "user-1", 8);

    assert_ne!(a.id(), b.id());
}

#[test]
fn given_clone_when_subscriptions_changed_then_shared() {
    let (client, _receiver) = Client::new("acme", "user-1", 8);
    let handle = client.clone();

    handle.unsubscribe(&[MessageType::Alert]);

    assert!(!client.is_subscribed(MessageType::Alert));
    assert_that!(client.subscribe(&[MessageType::Alert]), eq(1));
    assert!(handle.is_subscribed(MessageType::Alert));
}

#[test]
fn given_set_subscriptions_when_applied_then_exact_set() {
    let (client, _receiver) = Client::new("acme", "user-1", 8);

    client.set_subscriptions(&[MessageType::Emission]);

    assert_eq!(client.subscriptions().types(), vec![MessageType::Emission]);
    assert!(client.is_subscribed(MessageType::Heartbeat));
}

#[test]
fn given_full_queue_when_pushed_then_newest_rejected() {
    let (client, mut receiver) = Client::new("acme", "user-1", 2);

    assert_eq!(client.try_push(Bytes::from_static(b"1")), PushOutcome::Sent);
    assert_eq!(client.try_push(Bytes::from_static(b"2")), PushOutcome::Sent);
    assert_eq!(client.try_push(Bytes::from_static(b"3")), PushOutcome::Full);

    assert_eq!(receiver.try_recv().unwrap(), Bytes::from_static(b"1"));
    assert_eq!(receiver.try_recv().unwrap(), Bytes::from_static(b"2"));
    assert!(receiver.try_recv().is_err());
}

#[test]
fn given_outbound_closed_when_closed_again_then_only_first_reports() {
    let (client, _receiver) = Client::new("acme", "user-1", 2);

    assert!(client.close_outbound());
    assert!(!client.close_outbound());
    assert!(client.is_outbound_closed());
    assert_eq!(client.try_push(Bytes::from_static(b"x")), PushOutcome::Closed);
}

#[test]
fn given_receiver_dropped_when_pushed_then_closed() {
    let (client, receiver) = Client::new("acme", "user-1", 2);
    drop(receiver);

    assert_eq!(client.try_push(Bytes::from_static(b"x")), PushOutcome::Closed);
}

#[tokio::test]
async fn given_outbound_closed_when_received_then_drains_then_ends() {
    let (client, mut receiver) = Client::new("acme", "user-1", 4);
    client.try_push(Bytes::from_static(b"last"));
    client.close_outbound();

    let first = timeout(Duration::from_millis(100), receiver.recv()).await.unwrap();
    let second = timeout(Duration::from_millis(100), receiver.recv()).await.unwrap();

    assert_eq!(first, Some(Bytes::from_static(b"last")));
    assert_eq!(second, None);
}

#[tokio::test]
async fn given_client_closed_when_received_then_ends() {
    let (client, mut receiver) = Client::new("acme", "user-1", 4);

    let waiter = tokio::spawn(async move { receiver.recv().await });
    tokio::time::sleep(Duration::from_millis(10)).await;
    client.close();
    client.close();

    let frame = timeout(Duration::from_millis(100), waiter).await.unwrap().unwrap();
    assert_eq!(frame, None);
    assert!(client.is_closed());
}

#[tokio::test]
async fn given_all_handles_dropped_when_received_then_buffered_frames_drain() {
    let (client, mut receiver) = Client::new("acme", "user-1", 4);
    client.try_push(Bytes::from_static(b"pending"));
    drop(client);

    let first = timeout(Duration::from_millis(100), receiver.recv()).await.unwrap();
    let second = timeout(Duration::from_millis(100), receiver.recv()).await.unwrap();

    assert_eq!(first, Some(Bytes::from_static(b"pending")));
    assert_eq!(second, None);
}
