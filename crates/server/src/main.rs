#[tokio::main]
async fn main() -> anyhow::Result<()> {
    metalens_server::start().await
}
