use anyhow::{bail, Result};

use fractal_clock_engine::logging::{init_logging, LoggingConfig};

use fractal_clock_saver::Saver;

/// Command line options. `--preview` is the only flag.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Options {
    preview: bool,
}

fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--preview" => options.preview = true,
            other => bail!("unrecognised argument `{other}` (usage: fractal-clock-saver [--preview])"),
        }
    }
    Ok(options)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let options = parse_args(std::env::args().skip(1))?;
    log::info!("starting fractal clock (preview: {})", options.preview);

    Saver::new()
        .title("Fractal Clock")
        .size(1024.0, 768.0)
        .preview(options.preview)
        .run()
}
