use std::{env, sync::OnceLock};

use opentelemetry::{global, trace::TracerProvider as _};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace::TracerProvider};
use tracing::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const OTLP_URL_ENVVAR: &str = "OPSTACK_OTLP_URL";
pub const SVC_LABEL_ENVVAR: &str = "OPSTACK_SVC_LABEL";

#[derive(Clone, Debug)]
pub struct LoggerConfig {
    whoami: String,
    otel_url: Option<String>,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set and no exporter.
    pub fn new(whoami: String) -> Self {
        Self {
            whoami,
            otel_url: None,
        }
    }

    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Like [`Self::with_base_name`], also picking up the OTLP endpoint from
    /// the environment.
    pub fn from_env(base: &str) -> Self {
        let mut config = Self::with_base_name(base);
        if let Some(url) = get_otlp_url_from_env() {
            config.set_otlp_url(url);
        }
        config
    }

    pub fn set_otlp_url(&mut self, url: String) {
        self.otel_url = Some(url);
    }

    pub fn whoami(&self) -> &str {
        &self.whoami
    }

    pub fn otlp_url(&self) -> Option<&str> {
        self.otel_url.as_deref()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("opstack")
    }
}

/// Provider behind the OTLP layer, kept so [`finalize`] can flush it.
static OTLP_PROVIDER: OnceLock<TracerProvider> = OnceLock::new();

/// Initializes the logging subsystem with the provided config.
///
/// Terminal output goes to stderr, leaving stdout to command results.
/// Filtering comes from `RUST_LOG`. When an OTLP endpoint is set, spans are
/// also batched out to it and the provider is registered globally. Panics if a
/// global subscriber is already installed or the exporter can't be built.
pub fn init(config: LoggerConfig) {
    let term_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_default_env());

    let otel_layer = config.otlp_url().map(|url| {
        let provider = build_otlp_provider(url).expect("init: opentelemetry");
        let tracer = provider.tracer(config.whoami.clone());

        global::set_tracer_provider(provider.clone());
        let _ = OTLP_PROVIDER.set(provider);

        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(term_layer)
        .with(otel_layer)
        .init();

    debug!(whoami = %config.whoami, otlp = config.otlp_url().is_some(), "logging started");
}

fn build_otlp_provider(url: &str) -> Result<TracerProvider, opentelemetry::trace::TraceError> {
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(url);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .install_batch(runtime::Tokio)
}

/// Flushes and shuts down the OTLP exporter, if there is one. Spans recorded
/// afterwards go nowhere.
pub fn finalize() {
    debug!("shutting down logging");
    if let Some(provider) = OTLP_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            warn!(%e, "failed to flush spans");
        }
    }
    global::shutdown_tracer_provider();
}

/// Gets the OTLP URL from the standard envvar.
pub fn get_otlp_url_from_env() -> Option<String> {
    env::var(OTLP_URL_ENVVAR).ok()
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    whoami_with_label(base, get_service_label_from_env().as_deref())
}

fn whoami_with_label(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
