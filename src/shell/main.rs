use job_board::shell::config::Config;
use job_board::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let state = AppState::build(&config).await?;
    let snapshot = state.snapshot().await;

    tracing::info!(
        cities = snapshot.cities.len(),
        candidates = snapshot.candidates.len(),
        vacancies = snapshot.vacancies.len(),
        "job board loaded"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
