mod analytics;
mod cli_messages;
mod config;
mod consent;
mod consts;
mod dataset;
mod error;
mod events;
mod i18n;
mod logging;
mod query;
mod session;
mod stats;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consent::{ConsentStatus, RiskLevel};
use crate::i18n::Language;
use crate::query::{ConsentQuery, SortKey, SortOrder};
use crate::session::{ListFormat, run_list, run_stats, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use crate::ui::dashboard::ViewMode;
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive consent dashboard
    Start {
        /// Language to open in; overrides the saved setting
        #[arg(long, value_enum)]
        lang: Option<Language>,

        /// View to open in; overrides the saved setting
        #[arg(long, value_enum)]
        view: Option<ViewMode>,

        /// Paint a dark background behind the dashboard
        #[arg(long = "with-background-color", action = ArgAction::SetTrue)]
        with_background_color: bool,

        /// JSON file with consent records to show instead of the sample data
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Print the consents matching the given filters
    List {
        /// Case-insensitive match on the host user
        #[arg(long)]
        name: Option<String>,

        /// Case-insensitive match on organization, connection type or data types
        #[arg(long)]
        search: Option<String>,

        /// Only consents with this status (active, expired, pending, revoked)
        #[arg(long)]
        status: Option<ConsentStatus>,

        /// Only consents with this risk level (low, medium, high)
        #[arg(long)]
        risk: Option<RiskLevel>,

        /// Sort key
        #[arg(long, value_enum, default_value_t = SortKey::CreatedOn)]
        sort: SortKey,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
        order: SortOrder,

        /// Print the matching records as a JSON array
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,

        /// Language for labels; overrides the saved setting
        #[arg(long, value_enum)]
        lang: Option<Language>,

        /// JSON file with consent records to use instead of the sample data
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Print the dashboard counters
    Stats {
        /// Language for labels; overrides the saved setting
        #[arg(long, value_enum)]
        lang: Option<Language>,

        /// JSON file with consent records to use instead of the sample data
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Save the language the dashboard opens in
    SetLanguage {
        #[arg(value_enum)]
        language: Language,
    },
    /// Delete the saved configuration
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            lang,
            view,
            with_background_color,
            data,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let ui_config = UIConfig::new(
                with_background_color || config.with_background_color,
                lang.unwrap_or(config.language),
                view.unwrap_or(config.view_mode),
            );
            let session = setup_session(data.or(config.data_file), ui_config)?;
            run_tui_mode(session).await
        }
        Command::List {
            name,
            search,
            status,
            risk,
            sort,
            order,
            json,
            lang,
            data,
        } => {
            logging::init_headless()?;
            let config = Config::load_or_default(&config_path)?;
            let ui_config = UIConfig {
                language: lang.unwrap_or(config.language),
                ..UIConfig::default()
            };
            let session = setup_session(data.or(config.data_file), ui_config)?;
            let query = ConsentQuery {
                name_search: name.unwrap_or_default(),
                search_term: search.unwrap_or_default(),
                status,
                risk,
                sort_by: sort,
                sort_order: order,
            };
            let format = if json { ListFormat::Json } else { ListFormat::Text };
            run_list(&session, &query, format, &mut std::io::stdout().lock())
        }
        Command::Stats { lang, data } => {
            logging::init_headless()?;
            let config = Config::load_or_default(&config_path)?;
            let ui_config = UIConfig {
                language: lang.unwrap_or(config.language),
                ..UIConfig::default()
            };
            let session = setup_session(data.or(config.data_file), ui_config)?;
            run_stats(&session, &mut std::io::stdout().lock())
        }
        Command::SetLanguage { language } => {
            let mut config = Config::load_or_default(&config_path)?;
            config.language = language;
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Language saved",
                "The dashboard will open in {}",
                language.name()
            );
            Ok(())
        }
        Command::ResetConfig => {
            if !config_path.exists() {
                print_cmd_warn!("Nothing to reset", "{} does not exist", config_path.display());
                return Ok(());
            }
            Config::clear(&config_path)?;
            print_cmd_info!("Configuration cleared", "{}", config_path.display());
            Ok(())
        }
    }
}
