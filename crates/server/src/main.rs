use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
    time::Duration,
};

use clap::Parser;
use deadpool_sqlite::{Config, Hook, Runtime};
use server::{db, routes, warmups::WarmUpClient, AppState, Cli};
use shared::{api::error::{Nothing, ServerError}, configure_tracing, load_dotenv};
use tokio::net::TcpListener;
use tracing::{debug, info, Level};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing();

    let args = Cli::parse();
    debug!(?args);

    if args.debug_delete_database {
        match std::fs::remove_file(&args.sqlite_connection_string) {
            Ok(()) => info!("Deleted database {}", args.sqlite_connection_string),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => Err(e)?,
        }
    }

    // Run the migrations synchronously before creating the pool or launching the server
    let ran = db::run_migrations(&args.sqlite_connection_string)?;
    info!("Ran {ran} db migrations");

    // Create a database pool to add into the app state
    let pool = Config::new(args.sqlite_connection_string.clone())
        .builder(Runtime::Tokio1)?
        .post_create(Hook::async_fn(|object, _| {
            Box::pin(async move {
                object
                    .interact(|conn| db::configure_new_connection(conn))
                    .await
                    .map_err(ServerError::<Nothing>::from)??;
                Ok(())
            })
        }))
        .build()?;

    let warm_ups = WarmUpClient::new(
        args.warmup_api_url.clone(),
        args.warmup_api_key.clone(),
        Duration::from_secs(args.warmup_timeout_seconds),
    )?;

    let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);

    let listener = TcpListener::bind(socket).await?;
    debug!("listening on {}", listener.local_addr()?);

    let state = AppState { pool, warm_ups };

    axum::serve(
        listener,
        routes::router(state).layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        ),
    )
    .await?;

    Ok(())
}
