use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    Router,
};
use hearth_dns_api::{create_api_routes, AppState};
use hearth_dns_domain::config::ServerConfig;
use std::net::SocketAddr;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    config: &ServerConfig,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        dashboard_url = format!("http://{}", bind_addr),
        api_url = format!("http://{}/api", bind_addr),
        "Starting web server"
    );

    let app = create_app(state, config);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("Web server stopped");
    Ok(())
}

fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let static_dir = Path::new(&config.static_dir);
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", create_api_routes(state))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
        ]);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
