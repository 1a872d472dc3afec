use super::{render, App};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use comfy_table::{Cell, Color};
use reelshelf_core::{load_movie_playback, load_tv_playback, SourceSelector, VideoQuality};
use reelshelf_models::StreamSource;
use serde_json::json;
use tracing::info;

/// Options shared by `watch movie` and `watch tv`.
pub struct PlayOptions {
    pub quality: Option<String>,
    pub player: Option<String>,
}

fn sources_table(selector: &SourceSelector) -> comfy_table::Table {
    let current = selector.current_url();
    let mut table = render::new_table(vec!["", "Quality", "Format", "Provider"]);
    for source in selector.sources() {
        let selected = current == Some(source.url.as_str());
        let quality = Cell::new(&source.quality);
        table.add_row(vec![
            Cell::new(if selected { "▶" } else { "" }),
            if selected { quality.fg(Color::Green) } else { quality },
            Cell::new(if source.is_hls() { "hls" } else { source.format.as_str() }),
            Cell::new(&source.source),
        ]);
    }
    table
}

async fn launch_player(command: &str, source: &StreamSource) -> Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| eyre!("--player needs a command"))?;

    info!("Launching {} for {} stream", program, source.quality);
    let status = tokio::process::Command::new(program)
        .args(parts)
        .arg(&source.url)
        .status()
        .await
        .wrap_err_with(|| format!("Failed to start player `{}`", program))?;

    if !status.success() {
        return Err(eyre!("Player `{}` exited with {}", program, status));
    }
    Ok(())
}

async fn play(app: &App, title: &str, sources: Vec<StreamSource>, options: &PlayOptions) -> Result<()> {
    let requested = options.quality.as_deref();
    let parsed = requested.and_then(|q| q.parse::<VideoQuality>().ok());
    let preference = parsed.unwrap_or_else(|| app.settings_store().load().video_quality);
    let mut selector = SourceSelector::new(sources, preference);

    // Labels outside the quality presets ("Source 2") are matched directly
    if let (Some(label), None) = (requested, parsed) {
        if selector.select_quality(label).is_none() {
            app.output.warn(format!("No \"{}\" source for {}", label, title));
        }
    }

    let Some(current) = selector.current().cloned() else {
        app.output.warn(format!("No sources available for {}", title));
        return Ok(());
    };

    if app.output.emit(&json!({
        "title": title,
        "selected": current,
        "sources": selector.sources(),
    }))? {
        return Ok(());
    }

    app.output.println(render::heading(&format!("Now playing: {}", title)));
    app.output.println(sources_table(&selector).to_string());
    app.output.println(format!("Stream: {}", current.url));

    match options.player.as_deref() {
        Some(player) => launch_player(player, &current).await,
        None => {
            if current.is_hls() {
                app.output.info("HLS stream; open it with a player such as `--player mpv`");
            }
            Ok(())
        }
    }
}

pub async fn run_watch_movie(app: &App, id: u64, options: PlayOptions) -> Result<()> {
    let catalog = app.catalog()?;
    let playback = app.fetch("Fetching sources...", load_movie_playback(&catalog, id)).await?;
    let title = match playback.movie.release_date {
        Some(date) => format!("{} ({})", playback.movie.title, date.format("%Y")),
        None => playback.movie.title.clone(),
    };
    play(app, &title, playback.sources, &options).await
}

pub async fn run_watch_tv(app: &App, id: u64, season: u32, episode: u32, options: PlayOptions) -> Result<()> {
    let catalog = app.catalog()?;
    let playback = app
        .fetch("Fetching sources...", load_tv_playback(&catalog, id, season, episode))
        .await?;

    match playback.season_info() {
        Some(info) if info.episode_count > 0 && episode > info.episode_count => {
            app.output.warn(format!(
                "{} only lists {} episodes",
                info.name, info.episode_count
            ));
        }
        None if !playback.show.seasons.is_empty() => {
            app.output.warn(format!("{} has no season {}", playback.show.name, season));
        }
        _ => {}
    }

    let title = format!("{} S{:02}E{:02}", playback.show.name, season, episode);
    play(app, &title, playback.sources, &options).await
}
