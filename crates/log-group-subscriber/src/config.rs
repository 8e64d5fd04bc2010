// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::error::SubscriberError;
use regex::Regex;
use std::env;
use tracing::debug;

/// A single `key=value` tag rule parsed from configuration.
///
/// An event matches a rule when its tags contain `key` with exactly
/// `expected_value`. Rules are an OR: any single matching rule is sufficient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRule {
    pub key: String,
    pub expected_value: String,
}

/// Compiled filter criteria, built once per invocation and immutable after.
#[derive(Debug)]
pub struct FilterCriteria {
    /// Pattern matched against log group names (regex search, unanchored).
    pub name_pattern: Regex,
    /// Ordered tag rules; empty disables tag-based matching entirely.
    pub tag_rules: Vec<TagRule>,
}

impl FilterCriteria {
    /// Compiles the name pattern and parses the tag rule specification.
    ///
    /// An empty or invalid pattern is a fatal configuration error. Tag rule
    /// entries that do not split into a non-empty key and a value are
    /// skipped, not fatal.
    pub fn new(pattern: &str, tag_spec: &str) -> Result<Self, SubscriberError> {
        if pattern.trim().is_empty() {
            return Err(SubscriberError::Configuration(
                "LOG_GROUP_PATTERN cannot be empty".to_string(),
            ));
        }
        let name_pattern = Regex::new(pattern).map_err(|e| {
            SubscriberError::Configuration(format!("invalid LOG_GROUP_PATTERN '{pattern}': {e}"))
        })?;

        Ok(Self {
            name_pattern,
            tag_rules: parse_tag_rules(tag_spec),
        })
    }
}

fn parse_tag_rules(spec: &str) -> Vec<TagRule> {
    let mut rules = Vec::new();
    for entry in spec.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => rules.push(TagRule {
                key: key.trim().to_string(),
                expected_value: value.trim().to_string(),
            }),
            _ => debug!("Skipping malformed tag rule entry '{entry}'"),
        }
    }
    rules
}

/// Process configuration, read once at startup and passed by reference.
#[derive(Debug)]
pub struct Config {
    /// When true, reconcile all pre-existing log groups instead of
    /// processing the invocation's event payload.
    pub use_existing_log_groups: bool,
    /// Forwarding target for subscription filters.
    pub destination_arn: String,
    pub filter: FilterCriteria,
}

impl Config {
    /// Creates configuration from environment variables.
    ///
    /// `LOG_GROUP_PATTERN` and `LAMBDA_ARN` are required; `LOG_GROUP_TAGS`
    /// and `USE_EXISTING_LOG_GROUPS` are optional. Only the literal string
    /// `"true"` (case-insensitive) selects bulk reconciliation mode.
    pub fn from_env() -> Result<Config, SubscriberError> {
        let use_existing_log_groups = env::var("USE_EXISTING_LOG_GROUPS")
            .map(|val| val.to_lowercase() == "true")
            .unwrap_or(false);

        let destination_arn = env::var("LAMBDA_ARN").map_err(|_| {
            SubscriberError::Configuration("LAMBDA_ARN environment variable is not set".to_string())
        })?;
        if destination_arn.trim().is_empty() {
            return Err(SubscriberError::Configuration(
                "LAMBDA_ARN cannot be empty".to_string(),
            ));
        }

        let pattern = env::var("LOG_GROUP_PATTERN").map_err(|_| {
            SubscriberError::Configuration(
                "LOG_GROUP_PATTERN environment variable is not set".to_string(),
            )
        })?;
        let tag_spec = env::var("LOG_GROUP_TAGS").unwrap_or_default();

        let filter = FilterCriteria::new(&pattern, &tag_spec)?;

        Ok(Config {
            use_existing_log_groups,
            destination_arn,
            filter,
        })
    }
}
