use bare_http_server::{Args, Server, ServerConfig};
use clap::Parser;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder().with_max_level(args.log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = ServerConfig::from(args);
    let result = match Server::bind(config).await {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!(cause = %e, "server stopped");
        std::process::exit(1);
    }
}
