use anyhow::{Context, Result};
use clap::{Arg, Command};

mod commands;

fn build_cli() -> Command {
    Command::new("podstream")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Podcast listening app: episode browser and persistent player")
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .value_name("URL")
                .help("Feed server base URL (overrides configuration)")
                .global(true),
        )
        .subcommand(
            Command::new("episodes")
                .about("List episodes from the feed server")
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("N")
                        .help("Maximum number of episodes")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_name("FIELD")
                        .help("Server-side sort field")
                        .default_value("published_at"),
                )
                .arg(
                    Arg::new("order")
                        .long("order")
                        .value_name("ORDER")
                        .help("Sort direction")
                        .value_parser(["asc", "desc"])
                        .default_value("desc"),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Show detailed information about an episode")
                .arg(Arg::new("id").required(true).value_name("EPISODE_ID").help("Episode id")),
        )
        .subcommand(
            Command::new("play")
                .about("Open the player with an episode queued")
                .arg(Arg::new("id").required(true).value_name("EPISODE_ID").help("Episode id to play")),
        )
        .subcommand(Command::new("tui").about("Launch the interactive terminal UI"))
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = build_cli().get_matches();
    let config = commands::load_config(matches.get_one::<String>("server"))?;

    match matches.subcommand() {
        Some(("episodes", sub)) => commands::list_episodes(&config, sub),
        Some(("info", sub)) => commands::episode_info(&config, sub),
        Some(("play", sub)) => commands::play_episode(&config, sub),
        Some(("tui", _)) => commands::run_tui(&config, None),
        _ => {
            build_cli().print_help().context("Failed to print help")?;
            println!();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_episodes_flags() {
        let matches = build_cli()
            .try_get_matches_from(["podstream", "episodes", "-n", "5", "--order", "asc"])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "episodes");
        assert_eq!(sub.get_one::<usize>("limit"), Some(&5));
        assert_eq!(sub.get_one::<String>("order").unwrap(), "asc");
    }

    #[test]
    fn test_cli_rejects_bad_order() {
        let result =
            build_cli().try_get_matches_from(["podstream", "episodes", "--order", "sideways"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_episode_id_for_play() {
        let result = build_cli().try_get_matches_from(["podstream", "play"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_server_flag() {
        let matches = build_cli()
            .try_get_matches_from(["podstream", "tui", "--server", "https://feed.example.com"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("server").unwrap(),
            "https://feed.example.com"
        );
    }
}
