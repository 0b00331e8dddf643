use std::sync::Arc;
use std::time::Duration;

use course_generator::app::create_app;
use course_generator::config;
use course_generator::consts::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use course_generator::service::CourseService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing course generator service...");

    let config = config::load_config().map_err(std::io::Error::other)?;

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .read_timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .build()
        .map_err(std::io::Error::other)?;

    let course_service = Arc::new(CourseService::from_config(http_client, &config));

    let server = actix_web::HttpServer::new(move || create_app(course_service.clone()));

    log::info!("Server is running on port {}", config.port);
    server.bind(("0.0.0.0", config.port))?.run().await
}
