mod app;
mod overlay;
mod pages;
mod secrets;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let page = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "stroop".to_string());
    match page.as_str() {
        "overview" => {
            pages::print_overview();
            Ok(())
        }
        "chat" => app::App::from_environment()?.run_plain_chat().await,
        "stroop" => app::App::from_environment()?.run_stroop_chat().await,
        other => anyhow::bail!("unknown page '{other}' (expected overview, chat, or stroop)"),
    }
}
