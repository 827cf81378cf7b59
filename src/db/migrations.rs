use sqlx::AnyPool;
use tracing::debug;

use crate::error::Error;

/// Statements are kept to the subset understood by both SQLite and MySQL.
const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        puuid VARCHAR(78) PRIMARY KEY,
        game_name VARCHAR(16) NOT NULL,
        tag_line VARCHAR(5) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS summoners (
        summoner_id VARCHAR(63) PRIMARY KEY,
        account_id VARCHAR(56) NOT NULL,
        puuid VARCHAR(78) NOT NULL,
        profile_icon_id INT NOT NULL,
        summoner_level INT NOT NULL,
        FOREIGN KEY (puuid) REFERENCES accounts(puuid)
    )
    "#,
];

pub async fn run_migrations(pool: &AnyPool) -> Result<(), Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    debug!("🗄️ Cache schema ready");
    Ok(())
}
