// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Mock logging backend for testing the reconciliation and subscription paths

use async_trait::async_trait;
use log_group_subscriber::logs_backend::{
    BackendError, LogGroupDescriptor, LogGroupPage, LogsBackend,
};
use std::sync::{Arc, Mutex};

/// Arguments captured from one subscription call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeCall {
    pub log_group_name: String,
    pub filter_name: String,
    pub destination_arn: String,
    pub filter_pattern: String,
}

/// Mock backend serving canned listing pages and recording subscription
/// calls. Failures can be injected for either call.
pub struct MockLogsBackend {
    pages: Vec<Vec<&'static str>>,
    fail_listing_page: Option<usize>,
    fail_on_group: Option<&'static str>,
    pub subscribe_calls: Arc<Mutex<Vec<SubscribeCall>>>,
}

impl MockLogsBackend {
    pub fn new(pages: Vec<Vec<&'static str>>) -> Self {
        Self {
            pages,
            fail_listing_page: None,
            fail_on_group: None,
            subscribe_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Fail the listing call that fetches the page at `index`.
    pub fn fail_listing_page(mut self, index: usize) -> Self {
        self.fail_listing_page = Some(index);
        self
    }

    /// Fail the subscription call for the named log group.
    pub fn fail_on_group(mut self, log_group_name: &'static str) -> Self {
        self.fail_on_group = Some(log_group_name);
        self
    }

    pub fn subscribed_groups(&self) -> Vec<String> {
        self.subscribe_calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| call.log_group_name.clone())
            .collect()
    }
}

#[async_trait]
impl LogsBackend for MockLogsBackend {
    async fn list_log_groups(
        &self,
        next_token: Option<String>,
    ) -> Result<LogGroupPage, BackendError> {
        let index = match next_token {
            Some(token) => token.parse::<usize>().expect("mock page token"),
            None => 0,
        };

        if self.fail_listing_page == Some(index) {
            return Err(format!("listing failed on page {index}").into());
        }

        let log_groups = self
            .pages
            .get(index)
            .map(|page| {
                page.iter()
                    .map(|name| LogGroupDescriptor {
                        log_group_name: (*name).to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let next_token = if index + 1 < self.pages.len() {
            Some((index + 1).to_string())
        } else {
            None
        };

        Ok(LogGroupPage {
            log_groups,
            next_token,
        })
    }

    async fn put_subscription_filter(
        &self,
        log_group_name: &str,
        filter_name: &str,
        destination_arn: &str,
        filter_pattern: &str,
    ) -> Result<(), BackendError> {
        if self.fail_on_group == Some(log_group_name) {
            return Err(format!("subscription rejected for {log_group_name}").into());
        }

        self.subscribe_calls.lock().unwrap().push(SubscribeCall {
            log_group_name: log_group_name.to_string(),
            filter_name: filter_name.to_string(),
            destination_arn: destination_arn.to_string(),
            filter_pattern: filter_pattern.to_string(),
        });
        Ok(())
    }
}
