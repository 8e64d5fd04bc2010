// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use std::collections::HashMap;

/// Event name emitted by the logging backend when a log group is created.
pub const CREATE_LOG_GROUP_EVENT: &str = "CreateLogGroup";

/// A single log-group-creation notification delivered in reactive mode.
///
/// Only the fields this service inspects are modeled; anything else in the
/// payload is ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct LogGroupEvent {
    pub detail: EventDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub request_parameters: Option<RequestParameters>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    #[serde(default)]
    pub log_group_name: Option<String>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

impl LogGroupEvent {
    /// Log group name carried by the event, if present.
    pub fn log_group_name(&self) -> Option<&str> {
        self.detail
            .request_parameters
            .as_ref()?
            .log_group_name
            .as_deref()
    }

    /// Tags carried by the event, if present.
    pub fn tags(&self) -> Option<&HashMap<String, String>> {
        self.detail.request_parameters.as_ref()?.tags.as_ref()
    }
}
