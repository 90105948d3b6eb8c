use metrics_exporter_prometheus::PrometheusHandle;
use name_match::config::InputLimits;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Option<Arc<PrometheusHandle>>,
    pub(crate) limits: InputLimits,
}

impl AppState {
    pub(crate) fn new(limits: InputLimits) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: None,
            limits,
        }
    }

    pub(crate) fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(Arc::new(handle));
        self
    }
}
