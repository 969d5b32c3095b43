use std::{env, io};

use log::info;
use tokio::{net::TcpListener, signal};

use maret_scraper::{cli, server, HttpFetcher, Pipeline, Sources};

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "maret_scraper=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let pipeline = Pipeline::new(HttpFetcher::default(), Sources::new(&args.site));
    info!("Reading pages from {}", args.site);

    let router = server::router(pipeline, args.months);

    let listener = TcpListener::bind(args.address).await?;
    info!("Listening at http://{}", args.address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
