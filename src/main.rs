use anyhow::Context;
use clap::Parser;
use lol_match_stats::analysis::analyze;
use lol_match_stats::api::client::RiotApiClient;
use lol_match_stats::config::Config;
use lol_match_stats::display::output::{
    display_analysis, display_error, display_info, display_match_preview, display_success,
};
use lol_match_stats::display::progress::BarProgress;
use lol_match_stats::error::AppError;
use lol_match_stats::logging;
use lol_match_stats::pipeline::{collect_matches, resolve_account, MatchIdSource};

#[derive(Parser, Debug)]
#[command(name = "LoL Match Stats")]
#[command(about = "Collect a player's match history and summarize their performance", long_about = None)]
struct Args {
    /// Riot Game Name
    game_name: String,

    /// Riot Tag (tag line)
    tag_line: String,

    /// Region or routing cluster (default: RIOT_REGION or americas)
    #[arg(short, long)]
    region: Option<String>,

    /// Analyze only the N most recent matches (max: 100). Without it the full history is fetched.
    #[arg(short, long)]
    matches: Option<usize>,

    /// Skip the first N matches when --matches is set
    #[arg(long, default_value = "0")]
    start: usize,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let player_key = format!("{}#{}", args.game_name, args.tag_line);
    display_info(&format!(
        "Collecting match data for {} in region {}",
        player_key, config.region
    ));

    let client = RiotApiClient::new(config);

    // Step 1: Get account info (PUUID)
    display_info("Step 1: Getting account info...");
    let account = resolve_account(&client, &args.game_name, &args.tag_line)
        .context("Could not get account information. Check the name, tag and region")?;
    display_success(&format!("Found PUUID: {}", account.puuid));

    // Step 2: Match ids and details
    let source = match args.matches {
        Some(count) => MatchIdSource::Page {
            count,
            start: args.start,
        },
        None => MatchIdSource::FullHistory,
    };
    display_info("Step 2: Collecting matches...");
    let mut progress = BarProgress::new();
    let records = match collect_matches(&client, &account.puuid, source, &mut progress) {
        Ok(records) => records,
        Err(AppError::NoMatchesFound) => {
            progress.finish("no matches");
            display_info("No match data was collected.");
            return Ok(());
        }
        Err(e) => {
            progress.abandon("✗ Match collection failed");
            return Err(e.into());
        }
    };
    progress.finish("✓ Match data fetched");

    // Step 3: Analysis
    let Some(result) = analyze(&records) else {
        display_info("No match data was collected.");
        return Ok(());
    };
    display_success(&format!("Collected {} matches", records.len()));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_match_preview(&records);
        display_analysis(&result, &player_key);
    }

    Ok(())
}
