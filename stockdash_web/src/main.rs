mod charts;
mod page;
mod view;

use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use stockdash_lib::{HistoryCache, HistoryService};

#[derive(Parser)]
#[command(name = "stockdash-web")]
#[command(about = "Browser dashboard for historical stock prices")]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Seconds a fetched result stays cached
    #[arg(long, default_value_t = 600)]
    cache_ttl_secs: u64,

    /// Maximum number of cached queries
    #[arg(long, default_value_t = 64)]
    cache_capacity: usize,
}

#[derive(Deserialize)]
struct DashboardParams {
    ticker: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

/// The whole pipeline, once per request: collect inputs, fetch, present.
async fn dashboard(
    service: web::Data<HistoryService>,
    params: web::Query<DashboardParams>,
) -> impl Responder {
    let inputs = view::DashboardInputs::from_params(
        params.ticker.as_deref(),
        params.start.as_deref(),
        params.end.as_deref(),
    );
    let outcome = service.fetch(&inputs.request()).await;
    let dashboard = view::build_view(&inputs, &outcome);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::render(&dashboard))
}

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockdash_lib=info".parse().unwrap())
                .add_directive("stockdash_api=info".parse().unwrap())
                .add_directive("actix_web=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let cache = HistoryCache::new(Duration::from_secs(cli.cache_ttl_secs), cli.cache_capacity);
    let service = web::Data::new(HistoryService::new(cache));

    tracing::info!("listening on http://{}:{}", cli.host, cli.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .route("/", web::get().to(dashboard))
    })
    .bind((cli.host.as_str(), cli.port))?
    .run()
    .await?;

    Ok(())
}
