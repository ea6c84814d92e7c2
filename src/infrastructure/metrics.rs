// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const ANALYZE_REQUESTS_TOTAL: &str = "analyze_requests_total";
pub const ANALYZE_FAILURES_TOTAL: &str = "analyze_failures_total";
pub const ANALYZE_DURATION_SECONDS: &str = "analyze_duration_seconds";
pub const FETCH_DURATION_SECONDS: &str = "fetch_duration_seconds";
pub const KEYWORDS_RETURNED: &str = "keywords_returned";

/// 初始化指标系统
///
/// 在给定地址启动 Prometheus 导出器并注册指标说明
pub fn init_metrics(addr: SocketAddr) {
    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(ANALYZE_REQUESTS_TOTAL, "Total number of analyze requests");
    describe_counter!(
        ANALYZE_FAILURES_TOTAL,
        "Total number of failed analyze requests, labelled by kind"
    );
    describe_histogram!(
        ANALYZE_DURATION_SECONDS,
        "End-to-end duration of analyze requests in seconds"
    );
    describe_histogram!(FETCH_DURATION_SECONDS, "Duration of page fetches in seconds");
    describe_histogram!(KEYWORDS_RETURNED, "Number of keywords returned per analysis");

    info!("Metrics exporter listening on {}", addr);
}
