// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! # Log Group Subscriber
//!
//! Decides which log groups in the logging backend should be forwarded to a
//! downstream processing function, and wires the forwarding subscription
//! either reactively (one creation event at a time) or in bulk (reconciling
//! every pre-existing log group).
//!
//! The library is organized into a few small modules:
//! - [`config`]: environment configuration and the compiled filter criteria
//! - [`event`]: the log-group-creation event payload model
//! - [`classifier`]: pattern/tag matching for a single event
//! - [`logs_backend`]: the logging backend collaborator (listing + subscribe)
//! - [`subscriber`]: issues the forwarding-subscription call
//! - [`reconciler`]: bulk reconciliation over the paginated inventory
//! - [`handler`]: top-level dispatcher between the two modes

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

/// Pattern/tag matching for a single log-group-creation event
pub mod classifier;

/// Environment configuration and compiled filter criteria
pub mod config;

/// Error taxonomy for configuration, event, and backend failures
pub mod error;

/// Log-group-creation event payload model
pub mod event;

/// Top-level dispatcher between bulk and reactive modes
pub mod handler;

/// Logging backend collaborator - paginated listing and subscription calls
pub mod logs_backend;

/// Bulk reconciliation over the paginated log group inventory
pub mod reconciler;

/// Forwarding-subscription calls for individual log groups
pub mod subscriber;
