// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::SubscriberError;
use crate::logs_backend::LogsBackend;

/// Fixed name of the subscription filter managed by this service.
///
/// Repeated subscribe calls reuse this name so they always target the same
/// logical filter on a log group.
pub const SUBSCRIPTION_FILTER_NAME: &str = "log-forwarder";

/// Issues forwarding-subscription calls against the logging backend.
pub struct SubscriptionManager {
    backend: Arc<dyn LogsBackend + Send + Sync>,
    destination_arn: String,
}

impl SubscriptionManager {
    pub fn new(backend: Arc<dyn LogsBackend + Send + Sync>, destination_arn: String) -> Self {
        Self {
            backend,
            destination_arn,
        }
    }

    /// Subscribes one log group to the forwarding destination.
    ///
    /// The filter expression is empty: every record written to the group is
    /// forwarded, with no server-side content filtering.
    ///
    /// Idempotency: the backend treats a put with an existing filter name as
    /// an upsert, so calling this twice for the same log group replaces the
    /// filter with identical settings and succeeds. Backend rejections
    /// (filter limits, permissions) are not special-cased and surface as
    /// [`SubscriberError::Subscription`] carrying the log group name.
    pub async fn subscribe(&self, log_group_name: &str) -> Result<(), SubscriberError> {
        debug!(
            "Subscribing log group {log_group_name} to {}",
            self.destination_arn
        );
        self.backend
            .put_subscription_filter(
                log_group_name,
                SUBSCRIPTION_FILTER_NAME,
                &self.destination_arn,
                "",
            )
            .await
            .map_err(|source| SubscriberError::Subscription {
                log_group: log_group_name.to_string(),
                source,
            })?;
        info!(
            "Log group {log_group_name} subscribed to {}",
            self.destination_arn
        );
        Ok(())
    }
}
