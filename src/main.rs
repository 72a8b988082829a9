use dioxus_logger::tracing;
use panorama::server::startup;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_logger();

    tracing::info!("Starting server");

    if let Err(e) = startup::run().await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
