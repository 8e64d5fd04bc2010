// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use tracing::debug;

use crate::config::FilterCriteria;
use crate::error::SubscriberError;
use crate::event::{LogGroupEvent, CREATE_LOG_GROUP_EVENT};

/// Decides whether a log-group-creation event is in scope for forwarding.
///
/// A creation event whose log group name matches the configured pattern
/// matches immediately, without consulting tags. Otherwise, if tag rules are
/// configured and the event carries tags, any single rule whose key is
/// present with an equal value is sufficient. Everything else is a
/// non-match, which is a boolean result, not an error.
///
/// An event with no log group name is malformed and the error is propagated.
pub fn matches(
    event: &LogGroupEvent,
    criteria: &FilterCriteria,
) -> Result<bool, SubscriberError> {
    let Some(log_group_name) = event.log_group_name() else {
        return Err(SubscriberError::MalformedEvent(
            "event is missing detail.requestParameters.logGroupName".to_string(),
        ));
    };

    let is_creation = event.detail.event_name.as_deref() == Some(CREATE_LOG_GROUP_EVENT);
    if is_creation && criteria.name_pattern.is_match(log_group_name) {
        debug!("Pattern match for log group {log_group_name}");
        return Ok(true);
    }

    if !criteria.tag_rules.is_empty() {
        if let Some(tags) = event.tags().filter(|tags| !tags.is_empty()) {
            for rule in &criteria.tag_rules {
                if tags.get(&rule.key) == Some(&rule.expected_value) {
                    debug!(
                        "Tag match for log group {log_group_name} on '{}={}'",
                        rule.key, rule.expected_value
                    );
                    return Ok(true);
                }
            }
        }
    }

    debug!("No pattern or tag match for log group {log_group_name}");
    Ok(false)
}
