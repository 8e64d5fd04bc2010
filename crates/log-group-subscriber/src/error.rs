// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::logs_backend::BackendError;

/// Errors surfaced while classifying events and wiring subscriptions.
///
/// Classification mismatch is never an error - the classifier returns a
/// boolean. These variants cover configuration, payload, and backend
/// failures only; none of them is recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum SubscriberError {
    /// Invalid or missing required configuration, detected at startup.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Reactive-mode payload missing required fields.
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// The forwarding-subscription call failed for one log group.
    #[error("Failed to subscribe log group '{log_group}': {source}")]
    Subscription {
        log_group: String,
        #[source]
        source: BackendError,
    },

    /// The inventory listing call failed mid-pagination.
    #[error("Failed to list log groups: {0}")]
    Reconciliation(#[source] BackendError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SubscriberError::Configuration("LAMBDA_ARN is not set".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: LAMBDA_ARN is not set"
        );
    }

    #[test]
    fn test_subscription_error_carries_log_group() {
        let error = SubscriberError::Subscription {
            log_group: "app-prod-1".to_string(),
            source: "backend unavailable".into(),
        };
        let message = error.to_string();
        assert!(message.contains("app-prod-1"));
        assert!(message.contains("backend unavailable"));
    }

    #[test]
    fn test_reconciliation_error_has_source() {
        use std::error::Error;

        let error = SubscriberError::Reconciliation("listing failed".into());
        assert!(error.source().is_some());
    }
}
