//! Prometheus-compatible request metrics.

use std::collections::BTreeMap;
use std::fmt::Write;

use tokio::sync::RwLock;

use crate::infra::system::process_stats;

/// Upper bounds (ms) of the request duration histogram buckets.
pub const DURATION_BUCKETS_MS: [f64; 6] = [1.0, 5.0, 15.0, 50.0, 100.0, 500.0];

/// Route label for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SeriesKey {
    method: String,
    route: String,
    code: u16,
}

/// One labelled histogram series. Bucket counts are cumulative.
#[derive(Debug, Default, Clone)]
struct HistogramSeries {
    buckets: [u64; DURATION_BUCKETS_MS.len()],
    count: u64,
    sum: f64,
}

impl HistogramSeries {
    fn observe(&mut self, value: f64) {
        for (bound, bucket) in DURATION_BUCKETS_MS.iter().zip(self.buckets.iter_mut()) {
            if value <= *bound {
                *bucket += 1;
            }
        }
        self.count += 1;
        self.sum += value;
    }
}

/// Metrics collector shared by all request handlers.
#[derive(Debug, Default)]
pub struct Metrics {
    request_durations: RwLock<BTreeMap<SeriesKey, HistogramSeries>>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished request.
    pub async fn observe_request(&self, method: &str, route: &str, code: u16, duration_ms: f64) {
        let key = SeriesKey {
            method: method.to_string(),
            route: route.to_string(),
            code,
        };
        self.request_durations
            .write()
            .await
            .entry(key)
            .or_default()
            .observe(duration_ms);
    }

    /// Export metrics in Prometheus format.
    pub async fn export_prometheus(&self) -> String {
        let mut output = String::new();

        if let Ok(stats) = process_stats() {
            output.push_str("# HELP process_resident_memory_bytes Resident memory size in bytes.\n");
            output.push_str("# TYPE process_resident_memory_bytes gauge\n");
            let _ = writeln!(output, "process_resident_memory_bytes {}", stats.rss);

            output.push_str("# HELP process_virtual_memory_bytes Virtual memory size in bytes.\n");
            output.push_str("# TYPE process_virtual_memory_bytes gauge\n");
            let _ = writeln!(output, "process_virtual_memory_bytes {}", stats.virtual_memory);

            output.push_str("# HELP process_start_time_seconds Start time of the process since unix epoch in seconds.\n");
            output.push_str("# TYPE process_start_time_seconds gauge\n");
            let _ = writeln!(output, "process_start_time_seconds {}", stats.start_time);
        }

        output.push_str("# HELP http_request_duration_ms Duration of HTTP requests in ms\n");
        output.push_str("# TYPE http_request_duration_ms histogram\n");

        let series = self.request_durations.read().await;
        for (key, hist) in series.iter() {
            let labels = format!(
                "method=\"{}\",route=\"{}\",code=\"{}\"",
                escape_label(&key.method),
                escape_label(&key.route),
                key.code
            );
            for (bound, count) in DURATION_BUCKETS_MS.iter().zip(hist.buckets.iter()) {
                let _ = writeln!(
                    output,
                    "http_request_duration_ms_bucket{{le=\"{}\",{}}} {}",
                    bound, labels, count
                );
            }
            let _ = writeln!(
                output,
                "http_request_duration_ms_bucket{{le=\"+Inf\",{}}} {}",
                labels, hist.count
            );
            let _ = writeln!(output, "http_request_duration_ms_sum{{{}}} {}", labels, hist.sum);
            let _ = writeln!(output, "http_request_duration_ms_count{{{}}} {}", labels, hist.count);
        }

        output
    }
}

fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
