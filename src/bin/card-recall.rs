//! Native desktop launcher for CardRecall.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result};
    use card_recall::game::deck::DeckSize;
    use card_recall::{App, Config};
    use clap::Parser;
    use egui_extras::install_image_loaders;
    use std::path::PathBuf;
    use tracing_subscriber::EnvFilter;

    #[derive(Parser, Debug, Clone)]
    #[command(name = "card-recall", version, about = "Card memory game", long_about = None)]
    pub struct Cli {
        /// TOML config file, created with defaults when missing
        #[arg(long, default_value = "card_recall.toml")]
        pub config: PathBuf,

        /// Deck to play with (36 or 52)
        #[arg(long, value_parser = parse_deck)]
        pub deck: Option<DeckSize>,

        /// Number of cards shown per round
        #[arg(long)]
        pub card_count: Option<usize>,

        /// Seconds the hand stays visible
        #[arg(long)]
        pub timer: Option<u32>,

        /// Directory holding the card images
        #[arg(long)]
        pub media_root: Option<PathBuf>,
    }

    fn parse_deck(s: &str) -> std::result::Result<DeckSize, String> {
        let count: usize = s.parse().map_err(|e| format!("{e}"))?;
        DeckSize::try_from(count).map_err(|e| e.to_string())
    }

    impl Cli {
        /// Fold the command line overrides into the loaded config.
        pub fn apply(&self, config: &mut Config) -> Result<()> {
            if let Some(deck) = self.deck {
                config.round.deck_size = deck;
                config.round.card_count = config.round.card_count.min(deck.count());
            }
            if let Some(count) = self.card_count {
                config.round.card_count = count;
            }
            if let Some(timer) = self.timer {
                config.round.timer_secs = timer;
            }
            if let Some(root) = &self.media_root {
                config.media_root = root.display().to_string();
            }
            // egui's native image loader only reads file:// URIs
            if !config.media_root.contains("://") {
                let root = std::env::current_dir()
                    .context("resolving the working directory")?
                    .join(&config.media_root);
                config.media_root = format!("file://{}", root.display());
            }
            config.round.validate().context("invalid command line settings")?;
            Ok(())
        }
    }

    pub fn run() -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();

        let cli = Cli::parse();
        let mut config = Config::load_or_create(&cli.config)?;
        cli.apply(&mut config)?;
        tracing::info!(
            deck = config.round.deck_size.count(),
            cards = config.round.card_count,
            secs = config.round.timer_secs,
            media = %config.media_root,
            "starting CardRecall"
        );

        let app = App::with_config(&config)?;
        let options = eframe::NativeOptions::default();
        eframe::run_native(
            "CardRecall",
            options,
            Box::new(move |cc: &eframe::CreationContext| {
                install_image_loaders(&cc.egui_ctx);
                let app: Box<dyn eframe::App> = Box::new(app);
                Ok(app)
            }),
        )
        .map_err(|e| anyhow::anyhow!("eframe exited with an error: {e}"))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_cli_overrides_config() -> Result<()> {
            let cli = Cli::try_parse_from(["card-recall", "--deck", "36", "--timer", "15"])?;
            let mut config = Config::default();
            cli.apply(&mut config)?;
            assert_eq!(config.round.deck_size, DeckSize::Short36);
            assert_eq!(config.round.card_count, 36);
            assert_eq!(config.round.timer_secs, 15);
            assert!(config.media_root.starts_with("file://"));
            assert!(config.media_root.ends_with("media"));
            Ok(())
        }

        #[test]
        fn test_cli_rejects_bad_values() {
            assert!(Cli::try_parse_from(["card-recall", "--deck", "40"]).is_err());

            let cli = Cli::try_parse_from(["card-recall", "--deck", "36", "--card-count", "40"])
                .expect("arguments parse");
            assert!(cli.apply(&mut Config::default()).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
