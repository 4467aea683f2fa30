use crate::ClientSubscriptions;

use ogf_core::MessageType;
use proptest::prelude::*;

fn any_message_type() -> impl Strategy<Value = MessageType> {
    prop_oneof![
        Just(MessageType::Emission),
        Just(MessageType::Activity),
        Just(MessageType::Alert),
        Just(MessageType::Compliance),
        Just(MessageType::Heartbeat),
    ]
}

proptest! {
    #[test]
    fn given_any_subscription_changes_when_checked_then_heartbeat_always_delivered(
        subscribe in prop::collection::vec(any_message_type(), 0..8),
        unsubscribe in prop::collection::vec(any_message_type(), 0..8),
    ) {
        let mut subs = ClientSubscriptions::none();
        subs.subscribe(&subscribe);
        subs.unsubscribe(&unsubscribe);

        prop_assert!(subs.is_subscribed(MessageType::Heartbeat));
        prop_assert!(!subs.types().contains(&MessageType::Heartbeat));
    }

    #[test]
    fn given_any_subscribe_when_checked_then_membership_matches(
        subscribe in prop::collection::vec(any_message_type(), 0..8),
    ) {
        let mut subs = ClientSubscriptions::none();
        subs.subscribe(&subscribe);

        for message_type in MessageType::SUBSCRIBABLE {
            prop_assert_eq!(subs.is_subscribed(message_type), subscribe.contains(&message_type));
        }
        prop_assert!(subs.len() <= MessageType::SUBSCRIBABLE.len());
    }

    #[test]
    fn given_subscribed_type_when_unsubscribed_then_never_matches(
        message_type in any_message_type().prop_filter("data types only", |t| !t.is_heartbeat()),
    ) {
        let mut subs = ClientSubscriptions::new();
        subs.unsubscribe(&[message_type]);

        prop_assert!(!subs.is_subscribed(message_type));
        prop_assert_eq!(subs.len(), MessageType::SUBSCRIBABLE.len() - 1);
    }
}
