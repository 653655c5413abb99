use std::sync::Arc;

use carshop_desktop::{
    client::{CarApi, RestClient},
    config::{Args, Config},
    gui::CarShop,
};
use clap::Parser;
use color_eyre::Result;
use iced::{Application, Settings};
use log::info;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    TermLogger::init(
        args.log_level(),
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = Config::try_from(args)?;
    info!("Using car service at {}", config.base_url);

    let api: Arc<dyn CarApi> = Arc::new(RestClient::new(config.base_url)?);
    CarShop::run(Settings::with_flags(api))?;

    Ok(())
}
