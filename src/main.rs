use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use env_logger::Env;

use bore_catalog::models::config::ServerConfig;
use bore_catalog::repository::DieselRepository;
use bore_catalog::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let repo = match DieselRepository::connect(&server_config.database_url) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Failed to connect to {}: {e}", server_config.database_url);
            std::process::exit(1);
        }
    };

    let bind_address = server_config.bind_address();
    log::info!("Starting server on {}:{}", bind_address.0, bind_address.1);

    let repo_data = web::Data::new(repo.clone());
    let app_config = server_config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors(&app_config))
            .app_data(repo_data.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await?;

    repo.disconnect();
    log::info!("Server stopped");
    Ok(())
}
