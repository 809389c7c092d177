use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    parley_cli::main_entry().await
}
