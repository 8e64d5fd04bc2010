// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::classifier;
use crate::config::Config;
use crate::error::SubscriberError;
use crate::event::LogGroupEvent;
use crate::logs_backend::LogsBackend;
use crate::reconciler;
use crate::subscriber::SubscriptionManager;

/// Top-level dispatcher invoked once per activation.
///
/// Configuration selects one of two modes for the whole invocation: bulk
/// reconciliation of every pre-existing log group, or reactive processing of
/// the single creation event in the payload.
pub struct LogGroupSubscriber {
    config: Arc<Config>,
    backend: Arc<dyn LogsBackend + Send + Sync>,
    manager: SubscriptionManager,
}

impl LogGroupSubscriber {
    pub fn new(config: Arc<Config>, backend: Arc<dyn LogsBackend + Send + Sync>) -> Self {
        let manager =
            SubscriptionManager::new(Arc::clone(&backend), config.destination_arn.clone());
        Self {
            config,
            backend,
            manager,
        }
    }

    /// Handles one invocation payload.
    ///
    /// Errors from either mode are logged with their context and propagated
    /// unmodified, so the invoking platform applies its own retry and
    /// failure semantics. A reactive-mode non-match is a success, not an
    /// error.
    pub async fn handle(&self, payload: Value) -> Result<(), SubscriberError> {
        info!(payload = %payload, "Received invocation");

        let result = if self.config.use_existing_log_groups {
            self.reconcile().await
        } else {
            self.process_event(payload).await
        };

        if let Err(ref err) = result {
            error!("Invocation failed: {err}");
        }
        result
    }

    async fn reconcile(&self) -> Result<(), SubscriberError> {
        info!("Subscribing existing log groups");
        let summary =
            reconciler::reconcile_all(self.backend.as_ref(), &self.manager, &self.config.filter)
                .await?;
        info!(
            "Reconciled {} log groups across {} pages, {} subscribed",
            summary.groups_seen, summary.pages, summary.groups_subscribed
        );
        Ok(())
    }

    async fn process_event(&self, payload: Value) -> Result<(), SubscriberError> {
        let event: LogGroupEvent = serde_json::from_value(payload).map_err(|e| {
            SubscriberError::MalformedEvent(format!("failed to decode event payload: {e}"))
        })?;

        let log_group_name = event.log_group_name().map(str::to_string).ok_or_else(|| {
            SubscriberError::MalformedEvent(
                "event is missing detail.requestParameters.logGroupName".to_string(),
            )
        })?;
        info!("Processing event for {log_group_name}");

        if classifier::matches(&event, &self.config.filter)? {
            self.manager.subscribe(&log_group_name).await?;
        } else {
            warn!("Log group {log_group_name} did not match pattern or tags");
        }
        Ok(())
    }
}
