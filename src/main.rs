//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ffl_bets::{
    cli::{BetCmd, Commands, FflBets},
    commands::{
        bets::{handle_add_bet, handle_edit_bet, handle_list_bets, AddBetParams, EditBetParams},
        ppg::{handle_ppg, PpgParams},
        standings::{handle_standings, StandingsParams},
    },
    Result,
};

/// Log to stderr so stdout stays clean for `--json` output.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "ffl_bets=debug,warn" } else { "warn" };
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FflBets::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Ppg {
            player,
            data,
            start_week,
            end_week,
            min_snap,
            scoring,
            json,
            games,
        } => {
            handle_ppg(PpgParams {
                player,
                season: data.season,
                start_week,
                end_week,
                min_snap,
                scoring,
                json,
                verbose: games,
                refresh: data.refresh,
                data_dir: data.data_dir,
            })
            .await?
        }

        Commands::Bet { cmd } => match cmd {
            BetCmd::Add {
                creator,
                player_a,
                player_b,
                scoring,
                min_snap,
                start_week,
                end_week,
                participants,
                description,
                season,
            } => handle_add_bet(AddBetParams {
                creator,
                player_a,
                player_b,
                participants,
                scoring,
                min_snap,
                start_week,
                end_week,
                description,
                season,
            })?,

            BetCmd::Edit {
                bet_id,
                user,
                admin,
                player_a,
                player_b,
                scoring,
                min_snap,
                start_week,
                end_week,
                description,
                participants,
                clear_participants,
            } => handle_edit_bet(EditBetParams {
                bet_id,
                user,
                is_admin: admin,
                player_a,
                player_b,
                scoring,
                min_snap,
                start_week,
                end_week,
                description,
                participants,
                clear_participants,
            })?,

            BetCmd::List { creator, season } => handle_list_bets(creator, season)?,
        },

        Commands::Standings { data, all, json } => {
            handle_standings(StandingsParams {
                season: data.season,
                data_dir: data.data_dir,
                refresh: data.refresh,
                all,
                json,
            })
            .await?
        }
    }

    Ok(())
}
