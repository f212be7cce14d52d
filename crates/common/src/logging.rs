use std::env;

use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::WithExportConfig;
use tracing::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub const OTLP_URL_ENVVAR: &str = "VAULT_OTLP_URL";
pub const SVC_LABEL_ENVVAR: &str = "VAULT_SVC_LABEL";

pub struct LoggerConfig {
    whoami: String,
    otel_url: Option<String>,
}

impl LoggerConfig {
    /// Creates a new empty instance with whoami set.
    pub fn new(whoami: String) -> Self {
        Self {
            whoami,
            otel_url: None,
        }
    }

    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    pub fn set_otlp_url(&mut self, url: String) {
        self.otel_url = Some(url);
    }

    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(vault)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// Filtering follows `RUST_LOG`. If an OTLP url was set the spans are also
/// exported through OpenTelemetry, which needs a running tokio runtime.
pub fn init(config: LoggerConfig) {
    let filt = tracing_subscriber::EnvFilter::from_default_env();

    // Stdout logging.
    let stdout_sub = tracing_subscriber::fmt::layer().compact().with_filter(filt);

    // OpenTelemetry output.
    if let Some(otel_url) = &config.otel_url {
        let exporter = otlp_exporter(otel_url);

        let tp = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(exporter)
            .install_batch(opentelemetry_sdk::runtime::TokioCurrentThread)
            .expect("init: opentelemetry");

        let tt = tp.tracer("vault-log");

        let otel_sub = tracing_opentelemetry::layer().with_tracer(tt);

        tracing_subscriber::registry()
            .with(stdout_sub)
            .with(otel_sub)
            .init();
    } else {
        tracing_subscriber::registry().with(stdout_sub).init();
    }

    info!(whoami = %config.whoami, "logging started");
}

fn otlp_exporter(otel_url: &str) -> opentelemetry_otlp::TonicExporterBuilder {
    opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otel_url)
}

/// Shuts down the logging subsystem, flushing pending spans.
pub fn finalize() {
    info!("shutting down logging");
    opentelemetry::global::shutdown_tracer_provider();
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
    match get_service_label_from_env() {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
