use article_api::application::{
    ports::{cache::Cache, time::Clock, util::ArticleIdGenerator},
    services::ApplicationServices,
};
use article_api::config::AppConfig;
use article_api::domain::article::{ArticleReadRepository, ArticleWriteRepository, AuthorRepository};
use article_api::infrastructure::{
    cache::{InMemoryCache, RedisCache},
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresAuthorRepository,
    },
    time::SystemClock,
    util::UuidArticleIdGenerator,
};
use article_api::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::{signal, sync::Notify};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(PostgresAuthorRepository::new(pool.clone()));

    let cache = select_cache(&config).await;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let id_generator: Arc<dyn ArticleIdGenerator> = Arc::new(UuidArticleIdGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        author_repo,
        cache,
        clock,
        id_generator,
        config.article_cache_ttl(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    let stop = Arc::new(Notify::new());
    let mut server = tokio::spawn({
        let stop = Arc::clone(&stop);
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop.notified().await })
                .await
        }
    });

    tokio::select! {
        joined = &mut server => joined??,
        () = shutdown_signal() => {
            // notify_one keeps a permit if the server has not started waiting yet.
            stop.notify_one();
            match tokio::time::timeout(config.shutdown_grace(), &mut server).await {
                Ok(joined) => joined??,
                Err(_) => {
                    tracing::warn!(
                        grace_secs = config.shutdown_grace().as_secs(),
                        "shutdown grace period elapsed; dropping open connections"
                    );
                    server.abort();
                }
            }
        }
    }

    if let Err(err) = services.cache().close().await {
        tracing::warn!(error = %err, "failed to close cache");
    }
    pool.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

/// Redis when configured and reachable, the in-process map otherwise.
async fn select_cache(config: &AppConfig) -> Arc<dyn Cache> {
    let Some(url) = config.redis_url() else {
        tracing::info!("REDIS_URL not set; using in-memory cache");
        return Arc::new(InMemoryCache::new());
    };

    match RedisCache::connect(url, config.redis_init_timeout()).await {
        Ok(cache) => {
            tracing::info!("connected to redis cache");
            Arc::new(cache)
        }
        Err(err) => {
            tracing::warn!(error = %err, "redis unavailable; falling back to in-memory cache");
            Arc::new(InMemoryCache::new())
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
