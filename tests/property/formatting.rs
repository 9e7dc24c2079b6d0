// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Notification Formatting

use std::sync::Arc;

use proptest::prelude::*;

use cim_notification::domain::ResourceState;
use cim_notification::payload::{AUTOSCALING_FIELDS, BASE_FIELDS};
use cim_notification::{
    build_base, AutoscalingEventFormatter, ScalingAdjustment, Severity, StackEventFormatter,
};

use crate::fixtures::{stack_in_state, RecordingNotifier, TestStack};

// ============================================================================
// Strategies
// ============================================================================

/// State components: no dots, no whitespace
fn component() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}"
}

/// Autoscaling suffixes, biased towards the one that matters
fn suffix() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just("error".to_string()),
        3 => "[a-z][a-z0-9-]{0,12}",
    ]
}

fn handle() -> impl Strategy<Value = TestStack> {
    (component(), component(), ".{0,40}").prop_map(|(status, action, reason)| {
        let mut stack = stack_in_state(&status, &action);
        stack.status_reason = reason;
        stack
    })
}

fn adjustment() -> ScalingAdjustment {
    ScalingAdjustment::new("1", "change_in_capacity", "4", "group")
}

proptest! {
    /// Property: `state` is `{status}_{action}` with order preserved
    #[test]
    fn prop_state_is_underscore_join(status in component(), action in component()) {
        let payload = build_base(&stack_in_state(&status, &action));
        let expected = format!("{}_{}", status, action);

        prop_assert_eq!(payload.get_str("state"), Some(expected.as_str()));
        prop_assert_eq!(
            ResourceState::parse(&status, &action).unwrap().to_string(),
            expected
        );
    }

    /// Property: base payload key set never depends on values
    #[test]
    fn prop_base_keys_fixed(stack in handle()) {
        let payload = build_base(&stack);
        prop_assert_eq!(payload.len(), BASE_FIELDS.len());
        for key in BASE_FIELDS {
            prop_assert!(payload.contains_key(key));
        }
        prop_assert_eq!(payload.get_str("state_reason"), Some(stack.status_reason.as_str()));
    }

    /// Property: stack events are always `stack.{action}.error` at ERROR
    #[test]
    fn prop_stack_always_error(stack in handle()) {
        let notifier = Arc::new(RecordingNotifier::default());
        let formatter = StackEventFormatter::new(notifier.clone());

        tokio_test::block_on(formatter.send(&stack)).unwrap();

        let call = notifier.only_call();
        prop_assert_eq!(call.event_type, format!("stack.{}.error", stack.state.action));
        prop_assert_eq!(call.severity, Severity::Error);
    }

    /// Property: only the literal suffix `error` is ERROR; message defaults to the suffix
    #[test]
    fn prop_autoscaling_classification(
        stack in handle(),
        suffix in suffix(),
        message in proptest::option::of("[ -~]{0,20}"),
    ) {
        let notifier = Arc::new(RecordingNotifier::default());
        let formatter = AutoscalingEventFormatter::new(notifier.clone());

        tokio_test::block_on(formatter.send(&stack, &adjustment(), &suffix, message.as_deref()))
            .unwrap();

        let call = notifier.only_call();
        let expected_severity = if suffix == "error" { Severity::Error } else { Severity::Info };
        let expected_message = message.clone().unwrap_or_else(|| suffix.clone());

        prop_assert_eq!(call.event_type, format!("autoscaling.{}", suffix));
        prop_assert_eq!(call.severity, expected_severity);
        prop_assert_eq!(call.payload.get_str("message"), Some(expected_message.as_str()));
        prop_assert_eq!(call.payload.len(), BASE_FIELDS.len() + AUTOSCALING_FIELDS.len());
    }

    /// Property: identical inputs produce byte-identical payloads
    #[test]
    fn prop_formatting_is_deterministic(stack in handle(), suffix in suffix()) {
        let notifier = Arc::new(RecordingNotifier::default());
        let formatter = AutoscalingEventFormatter::new(notifier.clone());

        tokio_test::block_on(formatter.send(&stack, &adjustment(), &suffix, None)).unwrap();
        tokio_test::block_on(formatter.send(&stack, &adjustment(), &suffix, None)).unwrap();

        let calls = notifier.calls();
        prop_assert_eq!(calls.len(), 2);
        prop_assert_eq!(
            calls[0].payload.to_json().unwrap(),
            calls[1].payload.to_json().unwrap()
        );
    }
}
