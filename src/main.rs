use dotenv::dotenv;
use taskmaster::commands::{Cli, Reported};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false).init();

    if let Err(err) = Cli::menu().await {
        if err.downcast_ref::<Reported>().is_none() {
            eprintln!("{:#}", err);
        }
        std::process::exit(1);
    }
    Ok(())
}
