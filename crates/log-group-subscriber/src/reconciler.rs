// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use tracing::{debug, info};

use crate::config::FilterCriteria;
use crate::error::SubscriberError;
use crate::logs_backend::LogsBackend;
use crate::subscriber::SubscriptionManager;

/// Totals reported by a completed bulk reconciliation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub pages: usize,
    pub groups_seen: usize,
    pub groups_subscribed: usize,
}

/// Walks the full log group inventory and subscribes every group whose name
/// matches the configured pattern.
///
/// Bulk descriptors carry no tags, so matching is pattern-only. Pages and
/// the groups within them are processed in listing order. The run is
/// fail-fast: the first listing or subscription failure aborts it, and
/// groups already subscribed are not rolled back.
pub async fn reconcile_all(
    backend: &(dyn LogsBackend + Send + Sync),
    manager: &SubscriptionManager,
    criteria: &FilterCriteria,
) -> Result<ReconcileSummary, SubscriberError> {
    let mut summary = ReconcileSummary::default();
    let mut next_token = None;

    loop {
        let page = backend
            .list_log_groups(next_token)
            .await
            .map_err(SubscriberError::Reconciliation)?;

        summary.pages += 1;
        info!(
            "Processing batch of {} existing log groups",
            page.log_groups.len()
        );

        for group in &page.log_groups {
            summary.groups_seen += 1;
            if criteria.name_pattern.is_match(&group.log_group_name) {
                debug!(
                    "Pattern match for existing log group {}",
                    group.log_group_name
                );
                manager.subscribe(&group.log_group_name).await?;
                summary.groups_subscribed += 1;
            }
        }

        next_token = page.next_token;
        if next_token.is_none() {
            break;
        }
    }

    Ok(summary)
}
