use anyhow::Result;
use letterpress::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::from_args().await?;
    let args = letterpress::cli::Args::parse_args();

    app.run(args).await?;

    Ok(())
}
