use super::GatewayError;
use metrics::{counter, histogram};
use std::time::Duration;

/// Record one upstream call: outcome counter plus latency histogram.
pub fn record_gateway_call(
    gateway: &'static str,
    result: Result<(), &GatewayError>,
    elapsed: Duration,
) {
    let outcome = match result {
        Ok(()) => "ok",
        Err(e) => e.kind(),
    };

    counter!("gateway_requests_total", "gateway" => gateway, "outcome" => outcome).increment(1);
    histogram!("gateway_request_duration_seconds", "gateway" => gateway)
        .record(elapsed.as_secs_f64());
}
