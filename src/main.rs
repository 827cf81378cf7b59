use std::env;
use std::process::ExitCode;

use rankfetch::{Config, RankLookup, Region, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [game_name, tag_line, region] = args.as_slice() else {
        eprintln!("usage: rankfetch <game name> <tag line> <region>");
        return ExitCode::FAILURE;
    };

    let region: Region = match region.parse() {
        Ok(region) => region,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let lookup = match Config::from_env() {
        Ok(config) => RankLookup::from_config(&config).await,
        Err(e) => Err(e),
    };
    let lookup = match lookup {
        Ok(lookup) => lookup,
        Err(e) => {
            error!("failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("🐙 Looking up {}#{} on {}", game_name, tag_line, region.display_name());

    let (name, tag) = (game_name.as_str(), tag_line.as_str());
    println!("Profile Icon ID: {:?}", lookup.profile_icon_id(name, tag, region).await);
    println!("Summoner Level: {:?}", lookup.summoner_level(name, tag, region).await);
    println!("Rank: {:?}", lookup.rank(name, tag, region).await);
    println!("League Points: {}", lookup.league_points(name, tag, region).await);
    println!("Wins: {}", lookup.wins(name, tag, region).await);
    println!("Losses: {}", lookup.losses(name, tag, region).await);
    println!("Veteran: {}", lookup.is_veteran(name, tag, region).await);
    println!("Inactive: {}", lookup.is_inactive(name, tag, region).await);
    println!("Fresh Blood: {}", lookup.is_fresh_blood(name, tag, region).await);
    println!("Hot Streak: {}", lookup.is_hot_streak(name, tag, region).await);

    ExitCode::SUCCESS
}
