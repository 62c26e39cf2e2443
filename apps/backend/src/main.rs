use weather_api::server;
use weather_api::{AppState, Config};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: docker-compose env_file or docker run --env-file
    // - Local dev: export them or source an env file (set -a; . ./.env; set +a)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::default();
    println!(
        "🚀 Starting {} v{} on http://{}:{}",
        state.service.title, state.service.version, config.host, config.port
    );

    let bound = server::bind(&config, state)?;
    server::serve(bound).await
}
