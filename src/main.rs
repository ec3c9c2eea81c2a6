use std::sync::Arc;

use tracing::info;

use datashare::bot::{self, BotApi, BotState};
use datashare::transport::BotSender;
use datashare::{Config, RelayCoordinator, RoomRegistry, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = datashare::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!("DataShare - cross-transport room relay");

    let registry = Arc::new(RoomRegistry::new());
    let api = Arc::new(BotApi::new(&config.bot.api_base, &config.bot.token));
    let coordinator = Arc::new(RelayCoordinator::new(
        Arc::clone(&registry),
        Arc::clone(&api) as Arc<dyn BotSender>,
        config.relay.chunk_size,
    ));

    let bot_state = BotState::new();
    if config.bot_ready() {
        bot::init_bot(
            &bot_state,
            Arc::clone(&api),
            Arc::clone(&coordinator),
            &config.bot.webhook_url,
        )
        .await;
    } else if config.bot.enabled {
        tracing::error!("bot token not set, webhook will answer service-unavailable");
    } else {
        info!("Bot transport disabled");
    }

    let server = WebServer::new(&config.server, coordinator, bot_state.clone());
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = server.run().await {
        eprintln!("Server error: {e}");
        bot::shutdown_bot(&bot_state).await;
        std::process::exit(1);
    }
}
