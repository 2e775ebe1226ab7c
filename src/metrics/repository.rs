use crate::metrics::phase_metric;

/// Metrics for choose requests against a widget repository
pub struct RepositoryMetrics;

impl RepositoryMetrics {
    /// Record a successful choose request
    pub fn record_choose_success(duration_secs: f64, choices: usize) {
        ::metrics::counter!(phase_metric!(counter, "repository", "choose_success")).increment(1);
        ::metrics::histogram!(phase_metric!(histogram, "repository", "choose_duration_seconds"))
            .record(duration_secs);
        ::metrics::histogram!(phase_metric!(histogram, "repository", "choices_returned"))
            .record(choices as f64);
    }

    /// Record a failed choose request
    pub fn record_choose_error(kind: &'static str) {
        ::metrics::counter!(phase_metric!(counter, "repository", "choose_error"), "kind" => kind)
            .increment(1);
    }

    pub(crate) fn describe() {
        ::metrics::describe_counter!(
            phase_metric!(counter, "repository", "choose_success"),
            "Choose requests that returned choices"
        );
        ::metrics::describe_counter!(
            phase_metric!(counter, "repository", "choose_error"),
            "Choose requests that failed, by error kind"
        );
        ::metrics::describe_histogram!(
            phase_metric!(histogram, "repository", "choose_duration_seconds"),
            ::metrics::Unit::Seconds,
            "Latency of choose requests"
        );
        ::metrics::describe_histogram!(
            phase_metric!(histogram, "repository", "choices_returned"),
            "Number of choices returned per request"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_recorded_metrics_reach_the_prometheus_recorder() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            RepositoryMetrics::describe();
            RepositoryMetrics::record_choose_error("network");
            RepositoryMetrics::record_choose_success(0.25, 2);
        });

        let rendered = handle.render();
        assert!(rendered.contains("dy_widgets_repository_choose_error_total{kind=\"network\"} 1"));
        assert!(rendered.contains("dy_widgets_repository_choose_success_total 1"));
        assert!(rendered.contains("dy_widgets_repository_choose_duration_seconds"));
    }
}
