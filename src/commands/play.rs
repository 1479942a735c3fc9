//! `lmpmap play` handler

use std::time::Duration;

use anyhow::{Context, Result};

use lmpmap::cli::PlayArgs;
use lmpmap::player::render::Viewport;
use lmpmap::player::{run_player, MarkerLayer, PlaybackController, PlayerOptions};
use lmpmap::Config;

/// Config values with command line overrides applied.
#[derive(Debug, Clone, PartialEq)]
struct PlaySettings {
    interval: Duration,
    viewport: Viewport,
    autoplay: bool,
}

impl PlaySettings {
    fn resolve(config: &Config, args: &PlayArgs) -> Self {
        let interval = args
            .interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.playback.interval());

        let mut viewport = config.map.viewport();
        if let Some((lat, lon)) = args.center {
            viewport = Viewport::new(lat, lon, viewport.zoom);
        }
        if let Some(zoom) = args.zoom {
            viewport = Viewport::new(viewport.center_lat, viewport.center_lon, zoom);
        }

        Self {
            interval,
            viewport,
            autoplay: args.autoplay || config.playback.autoplay,
        }
    }
}

/// Load the dataset and open the player.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let source = super::resolve_source(args.source.as_deref(), &config);
    let dataset = super::load(&source)?;

    let settings = PlaySettings::resolve(&config, &args);
    let controller =
        PlaybackController::with_period(dataset, MarkerLayer::new(), settings.interval);

    run_player(
        controller,
        PlayerOptions {
            viewport: settings.viewport,
            autoplay: settings.autoplay,
            theme: config.ui.theme(),
        },
    )
}
