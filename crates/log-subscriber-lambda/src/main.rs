// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::sync::Arc;

use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use log_group_subscriber::config::Config;
use log_group_subscriber::handler::LogGroupSubscriber;
use log_group_subscriber::logs_backend::CloudWatchLogsBackend;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Structured JSON logging, flattened for CloudWatch Logs.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
        .init();

    debug!("Logging subsystem enabled");

    // Configuration and client construction happen once per process; an
    // invalid pattern or missing destination aborts startup.
    let config = Arc::new(Config::from_env()?);

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let backend = Arc::new(CloudWatchLogsBackend::new(aws_sdk_cloudwatchlogs::Client::new(
        &aws_config,
    )));

    let subscriber = Arc::new(LogGroupSubscriber::new(config, backend));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let subscriber = Arc::clone(&subscriber);
        async move {
            subscriber.handle(event.payload).await?;
            Ok::<(), Error>(())
        }
    }))
    .await
}
