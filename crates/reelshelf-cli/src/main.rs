use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::watch::PlayOptions;
use commands::{browse, category, clear, config, detail, list, settings, watch, App};
use reelshelf_config::PathManager;
use reelshelf_models::MediaKind;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelshelf")]
#[command(about = "ReelShelf - Browse trending movies and shows, keep your watchlist, find something to watch")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trending movies (or TV shows with --tv)
    Trending {
        /// List trending TV shows instead of movies
        #[arg(long, action = ArgAction::SetTrue)]
        tv: bool,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Top rated movies
    TopRated {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search movies and TV shows
    Search {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Movie details, trailer and suggestions (adds it to recently viewed)
    Movie { id: u64 },
    /// TV show details, seasons and suggestions (adds it to recently viewed)
    Tv { id: u64 },
    /// Movies of one category, e.g. `action` or `science-fiction`
    #[command(long_about = "List trending movies of one category. Without a category, lists the known categories.")]
    Category {
        genre: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Fetch stream sources and pick one to play
    Watch {
        #[command(subcommand)]
        target: WatchTarget,
    },
    /// Show or edit the watchlist, my list and the recently viewed history
    List {
        #[arg(value_enum)]
        name: ListName,

        #[command(subcommand)]
        action: Option<ListAction>,
    },
    /// A random pick from what's trending
    Featured {
        #[arg(long, action = ArgAction::SetTrue)]
        tv: bool,
    },
    /// Playback and display preferences
    Settings {
        #[command(subcommand)]
        cmd: Option<SettingsCommands>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
    /// Clear stored lists and settings
    #[command(long_about = "Clear local data. Use --store to clear the watchlist, my list and recently viewed history, --settings to reset preferences, or --all to clear everything.")]
    Clear {
        /// Clear lists and settings
        #[arg(long, action = ArgAction::SetTrue)]
        all: bool,

        /// Clear the watchlist, my list and recently viewed history
        #[arg(long, action = ArgAction::SetTrue)]
        store: bool,

        /// Reset settings to defaults
        #[arg(long, action = ArgAction::SetTrue)]
        settings: bool,
    },
}

#[derive(Subcommand)]
enum WatchTarget {
    Movie {
        id: u64,

        #[command(flatten)]
        play: PlayArgs,
    },
    Tv {
        id: u64,

        #[arg(long, default_value_t = 1)]
        season: u32,

        #[arg(long, default_value_t = 1)]
        episode: u32,

        #[command(flatten)]
        play: PlayArgs,
    },
}

#[derive(clap::Args)]
struct PlayArgs {
    /// Preferred quality (auto, 480p, 720p, 1080p or a source label); defaults to the video_quality setting
    #[arg(long)]
    quality: Option<String>,

    /// Command to open the stream with, e.g. "mpv --fs"
    #[arg(long)]
    player: Option<String>,
}

impl From<PlayArgs> for PlayOptions {
    fn from(args: PlayArgs) -> Self {
        PlayOptions {
            quality: args.quality,
            player: args.player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListName {
    Watchlist,
    #[value(name = "my-list")]
    MyList,
    Recent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Movie,
    Tv,
}

impl From<KindArg> for MediaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => MediaKind::Movie,
            KindArg::Tv => MediaKind::Tv,
        }
    }
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Print the list (default)
    Show,
    Add {
        #[arg(value_enum)]
        kind: KindArg,
        id: u64,
    },
    Remove {
        #[arg(value_enum)]
        kind: KindArg,
        id: u64,
    },
    /// Add when absent, remove when present
    Toggle {
        #[arg(value_enum)]
        kind: KindArg,
        id: u64,
    },
    Clear,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    Show,
    /// Set one of dark_mode, subtitles, autoplay, video_quality
    Set { key: String, value: String },
    Reset,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    Show {
        /// Include image and logging sections
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::default();
    let config = config::load_config(&paths)?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging.level, config.logging.file.as_deref())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let app = App::new(paths, config, output);

    let result = match cli.command {
        Commands::Trending { tv, page } => browse::run_trending(&app, tv, page).await,
        Commands::TopRated { page } => browse::run_top_rated(&app, page).await,
        Commands::Search { query, page } => browse::run_search(&app, &query.join(" "), page).await,
        Commands::Movie { id } => detail::run_movie(&app, id).await,
        Commands::Tv { id } => detail::run_tv(&app, id).await,
        Commands::Category { genre, page } => category::run_category(&app, genre, page).await,
        Commands::Watch { target } => match target {
            WatchTarget::Movie { id, play } => watch::run_watch_movie(&app, id, play.into()).await,
            WatchTarget::Tv {
                id,
                season,
                episode,
                play,
            } => watch::run_watch_tv(&app, id, season, episode, play.into()).await,
        },
        Commands::List { name, action } => list::run_list(&app, name, action).await,
        Commands::Featured { tv } => browse::run_featured(&app, tv).await,
        Commands::Settings { cmd } => settings::run_settings(&app, cmd).await,
        Commands::Config { cmd } => config::run_config(&app, cmd).await,
        Commands::Clear { all, store, settings } => clear::run_clear(&app, all, store, settings).await,
    };

    // JSON modes report failures as an error line
    if let Err(report) = &result {
        if app.output.format() != output::OutputFormat::Human {
            app.output.error(error_message(report));
            std::process::exit(1);
        }
    }
    result
}

/// The report and its causes on one line.
fn error_message(report: &color_eyre::Report) -> String {
    report.chain().map(|cause| cause.to_string()).collect::<Vec<_>>().join(": ")
}
