// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Logging backend collaborator.
//!
//! The service issues exactly two kinds of calls against the backend: the
//! paginated log group listing and the create-or-replace subscription call.
//! Both sit behind [`LogsBackend`] so the orchestration layers can be tested
//! against mocks; [`CloudWatchLogsBackend`] is the production implementation.

use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::Client;
use tracing::warn;

/// Error type surfaced by backend calls.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// One entry from the bulk log group inventory.
///
/// The listing carries no tag information, so bulk matching is pattern-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogGroupDescriptor {
    pub log_group_name: String,
}

/// One page of the paginated log group listing.
#[derive(Debug, Clone, Default)]
pub struct LogGroupPage {
    pub log_groups: Vec<LogGroupDescriptor>,
    pub next_token: Option<String>,
}

#[async_trait]
pub trait LogsBackend {
    /// Fetches one page of the log group inventory. Page size is the
    /// backend's concern.
    async fn list_log_groups(
        &self,
        next_token: Option<String>,
    ) -> Result<LogGroupPage, BackendError>;

    /// Creates or replaces the subscription filter named `filter_name` on
    /// `log_group_name`, forwarding matching records to `destination_arn`.
    async fn put_subscription_filter(
        &self,
        log_group_name: &str,
        filter_name: &str,
        destination_arn: &str,
        filter_pattern: &str,
    ) -> Result<(), BackendError>;
}

/// Production backend backed by the CloudWatch Logs API.
#[derive(Debug, Clone)]
pub struct CloudWatchLogsBackend {
    client: Client,
}

impl CloudWatchLogsBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogsBackend for CloudWatchLogsBackend {
    async fn list_log_groups(
        &self,
        next_token: Option<String>,
    ) -> Result<LogGroupPage, BackendError> {
        let output = self
            .client
            .describe_log_groups()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| Box::new(e) as BackendError)?;

        let log_groups = output
            .log_groups()
            .iter()
            .filter_map(|group| match group.log_group_name() {
                Some(name) => Some(LogGroupDescriptor {
                    log_group_name: name.to_string(),
                }),
                None => {
                    warn!("Skipping log group listing entry with no name");
                    None
                }
            })
            .collect();

        Ok(LogGroupPage {
            log_groups,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn put_subscription_filter(
        &self,
        log_group_name: &str,
        filter_name: &str,
        destination_arn: &str,
        filter_pattern: &str,
    ) -> Result<(), BackendError> {
        self.client
            .put_subscription_filter()
            .log_group_name(log_group_name)
            .filter_name(filter_name)
            .destination_arn(destination_arn)
            .filter_pattern(filter_pattern)
            .send()
            .await
            .map_err(|e| Box::new(e) as BackendError)?;
        Ok(())
    }
}
