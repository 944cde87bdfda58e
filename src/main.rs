use bandlimit::common::{self, AnyResult};
use bandlimit::configs::Config;
use tracing::{error, info};

fn main() -> AnyResult<()> {
    let (config, source) = Config::load()?;

    common::init(&config);
    common::banner::log_build_info(&common::banner::BuildInfo::default());

    match source {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using reference parameters"),
    }

    let stdout = std::io::stdout();
    if let Err(e) = bandlimit::run(&config, &mut stdout.lock()) {
        // already reported here; returning it would print it again
        error!("Table generation failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
