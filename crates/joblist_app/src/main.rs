mod platform;

use platform::config::config_from_args;

/// Usage: `joblist_app [running|completed] [config.ron]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (route, config) = config_from_args(std::env::args().skip(1))?;

    platform::logging::initialize(config.log_destination);
    platform::run_app(config, route).await
}
