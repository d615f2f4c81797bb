use anyhow::{Context, Result};
use clap::ArgMatches;
use console::style;
use podstream_config::{Config, ConfigPersistence};
use podstream_core::{AppError, Episode, EpisodeId};
use podstream_episodes::{EpisodeSource, ListQuery, RestEpisodeSource, SortOrder, SourceError};
use podstream_tui::{App, AppOptions, ThemeType, TuiApp};

/// Loads configuration, applying the `--server` override if given
pub fn load_config(server_override: Option<&String>) -> Result<Config> {
    let mut config = match ConfigPersistence::at_default_path() {
        Ok(persistence) => persistence.load().context("Failed to load configuration")?,
        Err(e) => {
            log::warn!("Config path unavailable ({}), using defaults", e);
            Config::default()
        }
    };

    if let Some(url) = server_override {
        config.server.base_url = url.clone();
    }

    Ok(config)
}

fn source_for(config: &Config) -> RestEpisodeSource {
    RestEpisodeSource::new(config.server.base_url.clone())
}

/// Turns a source failure into a printed, user-readable error
fn report(err: SourceError) -> anyhow::Error {
    let app: AppError = err.into();
    eprintln!("{}", style(app.user_message()).red());
    anyhow::Error::new(app)
}

/// List episodes from the feed server
pub fn list_episodes(config: &Config, matches: &ArgMatches) -> Result<()> {
    let source = source_for(config);
    let query = listing_query(config, matches);

    let episodes = source.list_episodes(&query).map_err(report)?;

    if episodes.is_empty() {
        println!("No episodes on the server yet.");
        return Ok(());
    }

    println!("\n{} Episodes", style(episodes.len()).bold().cyan());
    println!("{}", "=".repeat(80));

    for episode in &episodes {
        print_episode_summary(episode);
    }

    Ok(())
}

/// Show detailed information about one episode
pub fn episode_info(config: &Config, matches: &ArgMatches) -> Result<()> {
    let id = episode_id_arg(matches)?;
    let source = source_for(config);

    let episode = source.get_episode(&id).map_err(report)?;

    println!("\n  {}", style(&episode.title).bold().cyan());
    println!("  {}", style(&episode.members).dim());
    println!();
    println!("  Id:        {}", episode.id);
    println!("  Published: {}", episode.published_at);
    println!("  Duration:  {}", episode.duration_hms());
    println!("  Media:     {}", episode.url);
    if !episode.description.is_empty() {
        println!();
        println!("  {}", episode.description);
    }

    Ok(())
}

/// Open the TUI with one episode queued immediately
pub fn play_episode(config: &Config, matches: &ArgMatches) -> Result<()> {
    let id = episode_id_arg(matches)?;
    let source = source_for(config);

    let episode = source.get_episode(&id).map_err(report)?;
    run_tui(config, Some(episode))
}

/// Launch the interactive terminal UI
pub fn run_tui(config: &Config, initial: Option<Episode>) -> Result<()> {
    let source = source_for(config);
    let query = ListQuery::latest(config.server.page_limit);

    let episodes = match source.list_episodes(&query) {
        Ok(episodes) => episodes,
        Err(e) if initial.is_some() => {
            // A queued episode is still playable without the listing
            log::warn!("Listing fetch failed, starting with empty listing: {}", e);
            Vec::new()
        }
        Err(e) => return Err(report(e)),
    };

    let mut app = App::new(episodes, options_for(config));
    if let Some(episode) = initial {
        app.play_now(episode);
    }

    TuiApp::new(app)
        .context("Failed to initialize terminal")?
        .run()
        .context("Terminal UI failed")
}

fn options_for(config: &Config) -> AppOptions {
    AppOptions {
        latest_count: config.server.latest_count,
        tick_rate_ms: config.ui.tick_rate_ms,
        seek_step_secs: config.player.seek_step_secs,
        autoplay: config.player.autoplay,
        theme: ThemeType::from_name(&config.ui.theme),
    }
}

fn listing_query(config: &Config, matches: &ArgMatches) -> ListQuery {
    let limit = matches
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(config.server.page_limit);

    let mut query = ListQuery::new().with_limit(limit);
    if let Some(sort) = matches.get_one::<String>("sort") {
        query = query.with_sort(sort.clone());
    }
    if let Some(order) = matches.get_one::<String>("order") {
        query = query.with_order(parse_order(order));
    }
    query
}

fn parse_order(order: &str) -> SortOrder {
    match order {
        "asc" => SortOrder::Ascending,
        _ => SortOrder::Descending,
    }
}

fn episode_id_arg(matches: &ArgMatches) -> Result<EpisodeId> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| anyhow::anyhow!("Episode id is required"))?;
    Ok(EpisodeId::new(id.clone()))
}

fn print_episode_summary(episode: &Episode) {
    println!(
        "  {}  {}",
        style(&episode.title).bold(),
        style(format!("({})", episode.id)).dim()
    );
    println!(
        "      {}  |  {}  |  {}",
        episode.members,
        episode.published_at,
        episode.duration_hms()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order("asc"), SortOrder::Ascending);
        assert_eq!(parse_order("desc"), SortOrder::Descending);
        assert_eq!(parse_order("anything"), SortOrder::Descending);
    }

    #[test]
    fn test_options_mirror_config() {
        let mut config = Config::default();
        config.server.latest_count = 3;
        config.ui.tick_rate_ms = 100;
        config.ui.theme = "light".to_string();
        config.player.autoplay = false;
        config.player.seek_step_secs = 30;

        let options = options_for(&config);
        assert_eq!(options.latest_count, 3);
        assert_eq!(options.tick_rate_ms, 100);
        assert_eq!(options.seek_step_secs, 30);
        assert!(!options.autoplay);
        assert_eq!(options.theme, ThemeType::Light);
    }

    #[test]
    fn test_server_override_applies() {
        let override_url = "https://feed.example.com".to_string();
        let config = load_config(Some(&override_url)).unwrap();
        assert_eq!(config.server.base_url, "https://feed.example.com");
    }
}
