use crate::catalog::{AspectRatio, Catalog, VideoEntry};
use crate::config::{
    parse_log_level, parse_non_empty_string, parse_u64_with_bounds, DEFAULT_LOG_LEVEL,
};
use crate::logging::{log_event, LogLevel};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_CATALOG_CACHE_MAX_AGE_SECONDS: u64 = 300;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const CATALOG_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 86_400);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    catalog_path: Option<PathBuf>,
    catalog_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_u64_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let catalog_path = parse_non_empty_string(lookup("CATALOG_PATH")).map(PathBuf::from);
        let catalog_cache_max_age_seconds = parse_u64_with_bounds(
            lookup("CATALOG_CACHE_MAX_AGE_SECONDS"),
            DEFAULT_CATALOG_CACHE_MAX_AGE_SECONDS,
            CATALOG_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(8080),
            dist_dir,
            catalog_path,
            catalog_cache_max_age_seconds,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    config: Arc<ServerConfig>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { catalog: Catalog },
    Bare(Catalog),
}

impl CatalogFile {
    fn into_catalog(self) -> Catalog {
        match self {
            Self::Wrapped { catalog } => catalog,
            Self::Bare(catalog) => catalog,
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let catalog = load_catalog(&config);
    let bind_address = format!("0.0.0.0:{}", config.port);

    log_event(
        config.log_level,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "port": config.port,
            "dist_dir": config.dist_dir.display().to_string(),
            "catalog_entries": catalog.entries().count(),
        }),
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        config: Arc::new(config),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    let index = state.config.dist_dir.join("index.html");
    let static_service =
        ServeDir::new(&state.config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/api/catalog", get(get_catalog))
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), track_request))
        .with_state(state)
}

async fn get_catalog(State(state): State<AppState>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CACHE_CONTROL,
        cache_control(state.config.catalog_cache_max_age_seconds),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Accept-Encoding"));

    (StatusCode::OK, headers, Json(state.catalog.as_ref().clone())).into_response()
}

async fn healthz() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (StatusCode::OK, headers, Json(serde_json::json!({ "ok": true }))).into_response()
}

async fn track_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    log_event(
        state.config.log_level,
        if status.is_server_error() {
            LogLevel::Warn
        } else {
            LogLevel::Info
        },
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn cache_control(max_age_seconds: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={max_age_seconds}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn load_catalog(config: &ServerConfig) -> Catalog {
    let Some(path) = config.catalog_path.as_deref() else {
        return Catalog::builtin();
    };

    match read_catalog_file(path) {
        Ok(catalog) => {
            log_event(
                config.log_level,
                LogLevel::Info,
                "catalog_loaded",
                serde_json::json!({
                    "path": path.display().to_string(),
                    "entries": catalog.entries().count(),
                }),
            );
            catalog
        }
        Err(reason) => {
            log_event(
                config.log_level,
                LogLevel::Warn,
                "catalog_fallback",
                serde_json::json!({
                    "path": path.display().to_string(),
                    "reason": reason,
                }),
            );
            Catalog::builtin()
        }
    }
}

fn read_catalog_file(path: &Path) -> Result<Catalog, &'static str> {
    let raw = fs::read_to_string(path).map_err(|_| "catalog file is unreadable")?;
    let parsed: CatalogFile =
        serde_json::from_str(&raw).map_err(|_| "catalog file is not a valid catalog")?;
    let catalog = parsed.into_catalog();

    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), &'static str> {
    if catalog.duplicate_id().is_some() {
        return Err("catalog contains duplicate ids");
    }

    if catalog
        .entries()
        .any(|entry| entry.id.trim().is_empty() || entry.title.trim().is_empty())
    {
        return Err("catalog entry is missing an id or title");
    }

    if !catalog.entries().all(entry_urls_are_http) {
        return Err("catalog entry has a non-http(s) url");
    }

    let landscape_ok = catalog
        .landscape
        .iter()
        .all(|entry| entry.aspect_ratio == AspectRatio::Landscape);
    let portrait_ok = catalog
        .portrait
        .iter()
        .all(|entry| entry.aspect_ratio == AspectRatio::Portrait);
    if !landscape_ok || !portrait_ok {
        return Err("catalog entry is filed under the wrong aspect ratio");
    }

    Ok(())
}

fn entry_urls_are_http(entry: &VideoEntry) -> bool {
    [entry.src.as_str(), entry.poster.as_str()]
        .into_iter()
        .all(|value| {
            Url::parse(value)
                .map(|parsed| parsed.scheme() == "http" || parsed.scheme() == "https")
                .unwrap_or(false)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            catalog: Arc::new(Catalog::builtin()),
            config: Arc::new(ServerConfig::from_lookup(|_| None)),
        }
    }

    fn temp_catalog_path(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "editor-portfolio-{name}-{}.json",
            std::process::id()
        ));
        fs::write(&path, contents).expect("temp file is writable");
        path
    }

    #[test]
    fn config_defaults_apply_without_environment() {
        let config = ServerConfig::from_lookup(|_| None);

        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.catalog_cache_max_age_seconds, 300);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_rejects_out_of_range_values() {
        let values: HashMap<&str, &str> = [
            ("PORT", "70000"),
            ("CATALOG_CACHE_MAX_AGE_SECONDS", "999999"),
            ("DIST_DIR", "  "),
            ("LOG_LEVEL", "warn"),
        ]
        .into_iter()
        .collect();
        let config = ServerConfig::from_lookup(|name| values.get(name).map(|value| value.to_string()));

        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_cache_max_age_seconds, 300);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn request_id_is_propagated_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
        assert_ne!(generated, resolve_request_id(&HeaderMap::new()));
    }

    #[test]
    fn cache_control_is_public_across_the_whole_range() {
        assert_eq!(cache_control(0), HeaderValue::from_static("public, max-age=0"));
        assert_eq!(cache_control(60), HeaderValue::from_static("public, max-age=60"));
        assert_eq!(
            cache_control(86_400),
            HeaderValue::from_static("public, max-age=86400")
        );
    }

    #[test]
    fn bare_and_wrapped_catalog_files_are_accepted() {
        let bare = serde_json::to_string(&Catalog::builtin()).expect("serializable");
        let wrapped = serde_json::json!({ "catalog": Catalog::builtin() }).to_string();

        for (name, contents) in [("bare", bare), ("wrapped", wrapped)] {
            let path = temp_catalog_path(name, &contents);
            let loaded = read_catalog_file(&path);
            let _ = fs::remove_file(&path);

            assert_eq!(loaded, Ok(Catalog::builtin()), "{name}");
        }
    }

    #[test]
    fn invalid_catalog_files_are_rejected() {
        let mut insecure = Catalog::builtin();
        insecure.landscape[0].src = "ftp://example.com/cut.mp4".to_string();
        let path = temp_catalog_path(
            "insecure",
            &serde_json::to_string(&insecure).expect("serializable"),
        );
        let loaded = read_catalog_file(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, Err("catalog entry has a non-http(s) url"));

        let path = temp_catalog_path("garbage", "{ not json");
        let loaded = read_catalog_file(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, Err("catalog file is not a valid catalog"));

        assert_eq!(
            read_catalog_file(Path::new("/nonexistent/catalog.json")),
            Err("catalog file is unreadable")
        );
    }

    #[test]
    fn misfiled_aspect_ratio_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.portrait[2].aspect_ratio = AspectRatio::Landscape;

        assert_eq!(
            validate_catalog(&catalog),
            Err("catalog entry is filed under the wrong aspect ratio")
        );
    }

    #[test]
    fn missing_catalog_file_falls_back_to_builtin() {
        let config = ServerConfig::from_lookup(|name| {
            (name == "CATALOG_PATH").then(|| "/nonexistent/catalog.json".to_string())
        });

        assert_eq!(load_catalog(&config), Catalog::builtin());
    }

    #[tokio::test]
    async fn catalog_endpoint_serves_json_with_cache_headers() {
        let response = get_catalog(State(test_state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("public, max-age=300"))
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let catalog: Catalog = serde_json::from_slice(&body).expect("catalog JSON");
        assert_eq!(catalog, Catalog::builtin());
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let response = healthz().await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        assert_eq!(&body[..], br#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn responses_echo_the_incoming_request_id() {
        let request = axum::http::Request::builder()
            .uri("/healthz")
            .header(REQUEST_ID_HEADER, "abc")
            .body(Body::empty())
            .expect("request builds");

        let response = router(test_state())
            .oneshot(request)
            .await
            .expect("router is infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER),
            Some(&HeaderValue::from_static("abc"))
        );
    }

    #[tokio::test]
    async fn responses_without_a_request_id_get_a_generated_one() {
        for uri in ["/api/catalog", "/no-such-asset.js"] {
            let request = axum::http::Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds");

            let response = router(test_state())
                .oneshot(request)
                .await
                .expect("router is infallible");

            let request_id = response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            assert!(request_id.starts_with("req-"), "{uri} got {request_id:?}");
        }
    }
}
