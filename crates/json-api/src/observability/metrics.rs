//! Prometheus metrics for HTTP traffic and job operations.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const DURATION_BUCKETS: [f64; 11] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
];

/// Outcome of a job operation as seen by the HTTP layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum JobOutcome {
    Ok,
    NoValidFields,
    NotFound,
    StoreError,
}

impl JobOutcome {
    const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NoValidFields => "no_valid_fields",
            Self::NotFound => "not_found",
            Self::StoreError => "store_error",
        }
    }
}

#[derive(Debug)]
struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    job_operations_total: IntCounterVec,
}

impl Metrics {
    fn register() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "jobtrack_json_http_requests_total",
                "HTTP requests by method, route and status class.",
            ),
            &["method", "route", "status_class"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "jobtrack_json_http_request_duration_seconds",
                "HTTP request duration in seconds by method and route.",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let requests_in_flight = IntGauge::with_opts(Opts::new(
            "jobtrack_json_http_requests_in_flight",
            "HTTP requests currently being served.",
        ))?;

        let job_operations_total = IntCounterVec::new(
            Opts::new(
                "jobtrack_json_job_operations_total",
                "Job operations by operation and outcome.",
            ),
            &["operation", "outcome"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;
        registry.register(Box::new(job_operations_total.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
            job_operations_total,
        })
    }

    fn encode(&self) -> Result<(String, HeaderValue), String> {
        let encoder = TextEncoder::new();
        let mut encoded = Vec::new();

        encoder
            .encode(&self.registry.gather(), &mut encoded)
            .map_err(|source| format!("failed to encode metrics: {source}"))?;

        let content_type = HeaderValue::from_str(encoder.format_type())
            .map_err(|source| format!("failed to encode metrics content type: {source}"))?;

        let body =
            String::from_utf8(encoded).map_err(|source| format!("metrics are not utf-8: {source}"))?;

        Ok((body, content_type))
    }
}

static METRICS: OnceLock<Option<Metrics>> = OnceLock::new();

fn metrics() -> Option<&'static Metrics> {
    METRICS
        .get_or_init(|| {
            Metrics::register()
                .inspect_err(|source| error!("failed to register metrics: {source}"))
                .ok()
        })
        .as_ref()
}

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    gauge: Option<&'static IntGauge>,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let gauge = metrics().map(|metrics| &metrics.requests_in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self { gauge }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if let Some(gauge) = self.gauge {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics
        .requests_total
        .with_label_values(&[method, route, status_class(status_code)])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Records one job operation under its outcome.
pub(crate) fn observe_job_operation(operation: &str, outcome: JobOutcome) {
    if let Some(metrics) = metrics() {
        metrics
            .job_operations_total
            .with_label_values(&[operation, outcome.label()])
            .inc();
    }
}

/// Prometheus text exposition of every registered metric.
#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let encoded = metrics()
        .ok_or_else(|| "metrics registry unavailable".to_string())
        .and_then(Metrics::encode);

    match encoded {
        Ok((body, content_type)) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
            res.render(body);
        }
        Err(message) => {
            error!("{message}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    async fn scrape() -> TestResult<String> {
        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let body = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        Ok(body)
    }

    #[tokio::test]
    async fn metrics_endpoint_exposes_http_metrics() -> TestResult {
        observe_request("GET", "/jobs", 200, 0.042);
        observe_request("PATCH", "/jobs/{job}", 500, 0.123);

        let body = scrape().await?;

        assert!(
            body.contains("jobtrack_json_http_requests_total"),
            "expected requests_total metric in response"
        );
        assert!(
            body.contains("jobtrack_json_http_request_duration_seconds"),
            "expected request_duration metric in response"
        );
        assert!(
            body.contains("jobtrack_json_http_requests_in_flight"),
            "expected in-flight metric in response"
        );
        assert!(
            body.contains(r#"route="/jobs/{job}""#),
            "expected normalised job route label"
        );

        Ok(())
    }

    #[tokio::test]
    async fn job_outcomes_are_labelled() -> TestResult {
        observe_job_operation("update", JobOutcome::NoValidFields);
        observe_job_operation("get", JobOutcome::NotFound);

        let body = scrape().await?;

        assert!(
            body.contains(r#"operation="update",outcome="no_valid_fields""#),
            "expected no_valid_fields outcome for update"
        );
        assert!(
            body.contains(r#"operation="get",outcome="not_found""#),
            "expected not_found outcome for get"
        );

        Ok(())
    }

    #[test]
    fn in_flight_guard_restores_gauge() {
        let before = metrics().map(|metrics| metrics.requests_in_flight.get());

        {
            let _guard = InFlightRequestGuard::track();
        }

        assert_eq!(
            metrics().map(|metrics| metrics.requests_in_flight.get()),
            before,
            "in-flight gauge should return to its previous value"
        );
    }

    #[test]
    fn status_classes_cover_error_ranges() {
        assert_eq!(status_class(204), "2xx");
        assert_eq!(status_class(404), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(42), "other");
    }
}
