use actix_web::{middleware::Logger, web, App, HttpServer};
use chat_service::middleware::{build_cors, RequestIdMiddleware};
use chat_service::{config::Config, db, handlers, logging, services::storage};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    logging::init_tracing();

    let config = Config::from_env().expect("Failed to load configuration");

    let pool = db::init_pool(&config.database)
        .await
        .expect("Failed to connect to database");

    // Embedded migrations are idempotent; a schema mismatch is fatal.
    db::MIGRATOR
        .run(&pool)
        .await
        .expect("database migrations failed");

    let s3_client = storage::get_s3_client(&config.s3).await;

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!(%bind_addr, "starting chat-service");

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_config.clone()))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(s3_client.clone()))
            .configure(handlers::configure_routes)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(build_cors())
    })
    .bind(&bind_addr)?
    .run()
    .await
}
