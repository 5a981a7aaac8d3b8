use axum::{
    extract::{DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::AnalysisCatalog;
use crate::cli::ServeArgs;
use crate::core::types::CatalogField;
use crate::matching::engine::{MatchOptions, Matcher, Selection};
use crate::matching::view::build_views;

/// Request body limit; selections are a handful of short labels
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub catalog: AnalysisCatalog,
}

/// A search request from the page
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub data: Vec<String>,

    #[serde(default)]
    pub use_cases: Vec<String>,

    #[serde(default)]
    pub combine_search: bool,

    #[serde(default = "default_show_incomplete")]
    pub show_incomplete: bool,
}

fn default_show_incomplete() -> bool {
    true
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router() -> anyhow::Result<Router> {
    // Load catalog
    let catalog = AnalysisCatalog::load_embedded()?;
    let state = Arc::new(AppState { catalog });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .unwrap();

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/search", post(search_handler))
        .route("/api/options", get(options_handler))
        .route("/api/catalog", get(catalog_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // IP-based rate limiting to prevent abuse
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(100))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router()?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting data-fridge web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// API endpoint for resolving a selection to matching analyses
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> impl IntoResponse {
    let start_time = std::time::Instant::now();

    let response = search_response(&state.catalog, &request);

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;
    tracing::debug!(
        data = request.data.len(),
        use_cases = request.use_cases.len(),
        elapsed_ms = processing_time,
        "resolved search"
    );

    Json(response)
}

/// Resolve a search request against the catalog. Pure; each request is a
/// fresh, stateless recomputation.
pub fn search_response(catalog: &AnalysisCatalog, request: &SearchRequest) -> serde_json::Value {
    let selection = Selection::new()
        .with_data(request.data.iter().cloned())
        .with_use_cases(request.use_cases.iter().cloned());

    let options = MatchOptions {
        combine_search: request.combine_search,
        show_incomplete: request.show_incomplete,
    };

    let matcher = Matcher::with_options(catalog, options);
    let matches = matcher.resolve(&selection);
    let views = build_views(catalog, &matches, &selection);

    serde_json::json!({
        "count": views.len(),
        "matches": views,
        "options": {
            "combine_search": options.combine_search,
            "show_incomplete": options.show_incomplete,
        },
    })
}

/// Return the selectable data fields and use cases
async fn options_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": state.catalog.options(CatalogField::RequiredData),
        "use_cases": state.catalog.options(CatalogField::UseCases),
    }))
}

/// Return list of analyses in catalog
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let analyses: Vec<serde_json::Value> = state
        .catalog
        .analyses
        .iter()
        .map(|record| {
            serde_json::json!({
                "name": record.name.as_str(),
                "description": record.description,
                "required_data": record.required_data,
                "use_cases": record.use_cases,
                "more_info": record.more_info,
                "examples": record.examples,
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": analyses.len(),
        "analyses": analyses,
    }))
}
