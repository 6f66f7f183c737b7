use env_logger::{Builder, Target};
use log::LevelFilter;
use streamy_config::StreamyConfig;
use streamy_player::app;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("streamy_player", LevelFilter::Debug)
        .filter_module("streamy_core", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let load = StreamyConfig::load_from_env()?;
    log::info!("Configuration loaded from {:?}", load.source);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(app::launch(load.config, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    }))
}
