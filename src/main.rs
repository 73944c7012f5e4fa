use nippo::{commands::Cli, libs::logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu().await
}
