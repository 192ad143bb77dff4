use std::sync::Once;

/// Modules held at `warn` under the default filter; the GPU stack logs every
/// pipeline and buffer at `info`.
const QUIET_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax, e.g.
/// `"fractal_clock_core=trace,wgpu=warn"` to see every frame's stroke count.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Filter {
    Spec(String),
    Default,
}

/// An explicit filter wins over `RUST_LOG`.
fn pick_filter(configured: Option<String>, env: Option<String>) -> Filter {
    configured.or(env).map_or(Filter::Default, Filter::Spec)
}

fn builder_for(filter: Filter, write_style: env_logger::WriteStyle) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    match filter {
        Filter::Spec(spec) => {
            builder.parse_filters(&spec);
        }
        Filter::Default => {
            builder.filter_level(log::LevelFilter::Info);
            for module in QUIET_MODULES {
                builder.filter_module(module, log::LevelFilter::Warn);
            }
        }
    }
    builder.write_style(write_style).format_timestamp_millis();
    builder
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = pick_filter(config.env_filter, std::env::var("RUST_LOG").ok());
        if let Err(e) = builder_for(filter, config.write_style).try_init() {
            eprintln!("logger already installed: {e}");
            return;
        }
        log::debug!("logging initialized");
    });
}
