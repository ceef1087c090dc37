use anyhow::Result;
use opentelemetry::{trace::TracerProvider as _, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    runtime,
    trace::{Tracer, TracerProvider},
    Resource,
};
use std::{env::var, path::PathBuf, sync::OnceLock, time::Duration};
use tracing::{debug, warn, Level};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};
use ulid::Ulid;

static TRACER_PROVIDER: OnceLock<TracerProvider> = OnceLock::new();

/// Rotated log files kept next to the current one.
const MAX_LOG_FILES: usize = 5;

/// Where to write the log file: `<dir>/<service>.<date>.log`.
#[derive(Clone, Debug)]
pub struct LogFile {
    pub dir: PathBuf,
    pub service: String,
}

fn rolling_appender(log_file: &LogFile) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&log_file.service)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&log_file.dir)
}

fn normalize_endpoint(ep: String) -> String {
    if ep.starts_with("http://") || ep.starts_with("https://") {
        ep
    } else {
        // Default to https for gRPC if no scheme supplied
        format!("https://{}", ep.trim_end_matches('/'))
    }
}

fn init_tracer(endpoint: String) -> Result<Tracer> {
    let endpoint = normalize_endpoint(endpoint);

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(3))
        .build()?;

    // Generate or take service.instance.id
    let instance_id = var("OTEL_SERVICE_INSTANCE_ID").unwrap_or_else(|_| Ulid::new().to_string());

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_resource(Resource::new(vec![
            KeyValue::new("service.name", env!("CARGO_PKG_NAME")),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new("service.instance.id", instance_id),
        ]))
        .build();

    let tracer = provider.tracer(env!("CARGO_PKG_NAME"));
    let _ = TRACER_PROVIDER.set(provider);

    Ok(tracer)
}

/// Initialize logging + (optional) log file + (optional) tracing exporter
/// Tracing is enabled if `OTEL_EXPORTER_OTLP_ENDPOINT` is set (gRPC only).
/// A log file that cannot be opened is reported and skipped; stdout logging continues.
///
/// # Errors
///
/// Returns an error if tracer or subscriber initialization fails
pub fn init(verbosity_level: Level, log_file: Option<LogFile>) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);

    // RUST_LOG=
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("opentelemetry_sdk=warn".parse()?);

    let mut file_error = None;
    let file_layer = match log_file.as_ref().map(|file| (file, rolling_appender(file))) {
        Some((_, Ok(appender))) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(appender),
        ),
        Some((file, Err(err))) => {
            file_error = Some(format!("{}: {err}", file.dir.display()));
            None
        }
        None => None,
    };

    let otel_layer = match var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(endpoint) => Some(tracing_opentelemetry::layer().with_tracer(init_tracer(endpoint)?)),
        Err(_) => None,
    };

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(file_layer)
        .with(otel_layer)
        .with(filter);
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(err) = file_error {
        warn!("Could not open log file in {err}; logging to stdout only");
    }

    Ok(())
}

/// Gracefully shut down tracer provider (noop if not initialized)
pub fn shutdown_tracer() {
    if let Some(tp) = TRACER_PROVIDER.get() {
        debug!("shutting down tracer provider");
        let _ = tp.shutdown();
    }
}
