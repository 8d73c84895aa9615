use clap::Parser;
use divinethumb::config::setup_logging;
use divinethumb::gemini::GeminiClient;
use tracing::error;

#[tokio::main(flavor = "multi_thread", worker_threads = 32)]
async fn main() {
    let cli = divinethumb::cli::CliOptions::parse();

    if let Err(err) = setup_logging(cli.debug) {
        eprintln!("Failed to set up logging: {}", err);
        return;
    }

    let generator = GeminiClient::new(cli.gemini_api_key, cli.image_model);

    if let Err(err) = divinethumb::web::setup_server(&cli.listen_address, cli.port, generator).await
    {
        error!("Application error: {}", err);
    }
}
