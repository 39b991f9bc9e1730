use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use crate::config::constants::MAX_REQUEST_BODY_BYTES;
use crate::errors::{CodelyzerError, CodelyzerResult};
use crate::services::code_analyzer::CodeAnalyzer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analyze_request_body::AnalyzeRequestBody;
use crate::structs::config::server_config::ServerConfig;

pub struct AnalysisServer {
    analyzer: Arc<CodeAnalyzer>,
    config: ServerConfig,
}

impl AnalysisServer {
    pub fn new(analyzer: Arc<CodeAnalyzer>, config: ServerConfig) -> Self {
        Self { analyzer, config }
    }

    /// Serves until `shutdown` resolves; in-flight requests are allowed to finish.
    pub async fn run_until<F>(self, shutdown: F) -> CodelyzerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.resolve_address().await?;
        let routes = routes(Arc::clone(&self.analyzer), &self.config.cors_origins);

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, shutdown)
            .map_err(|e| CodelyzerError::NetworkError {
                operation: format!("binding {}", addr),
                reason: e.to_string(),
            })?;

        log::info!("🌐 Analysis server listening on http://{}", bound);
        log::info!(
            "🧰 Configured languages: {}",
            self.analyzer.registry().languages().join(", ")
        );

        server.await;

        log::info!("✅ Analysis server shutdown complete");
        Ok(())
    }

    async fn resolve_address(&self) -> CodelyzerResult<SocketAddr> {
        let target = format!("{}:{}", self.config.host, self.config.port);
        let mut addrs = tokio::net::lookup_host(target.clone())
            .await
            .map_err(|e| CodelyzerError::config_error(&format!("Cannot resolve '{}': {}", target, e), Some("server.host"), None))?;

        addrs
            .next()
            .ok_or_else(|| CodelyzerError::config_error(&format!("No address found for '{}'", target), Some("server.host"), None))
    }
}

/// `POST /analyze` with CORS and JSON error replies.
pub fn routes(
    analyzer: Arc<CodeAnalyzer>,
    cors_origins: &[String],
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

    let analyze = warp::path!("analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
        .and(warp::body::json())
        .and(analyzer_filter)
        .and_then(analyze_handler);

    let cors = if cors_origins.is_empty() {
        warp::cors().allow_any_origin()
    } else {
        warp::cors().allow_origins(cors_origins.iter().map(|origin| origin.as_str()))
    };

    analyze
        .with(cors.allow_headers(vec!["content-type"]).allow_methods(vec!["POST"]))
        .recover(handle_rejection)
}

#[derive(Debug)]
struct AnalysisFailed(CodelyzerError);

impl warp::reject::Reject for AnalysisFailed {}

async fn analyze_handler(body: AnalyzeRequestBody, analyzer: Arc<CodeAnalyzer>) -> Result<impl Reply, Rejection> {
    let request_id = Uuid::new_v4();
    let request = AnalysisRequest::from(body);

    log::info!(
        "📨 [{}] POST /analyze language={} question={}",
        request_id,
        request.language,
        request.question.is_some()
    );

    match analyzer.analyze(&request).await {
        Ok(report) => {
            log::info!("✅ [{}] Report ready", request_id);
            Ok(warp::reply::json(&report))
        }
        Err(e) => {
            log::error!("❌ [{}] Analysis failed: {}", request_id, e);
            Err(warp::reject::custom(AnalysisFailed(e)))
        }
    }
}

async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(AnalysisFailed(error)) = rejection.find::<AnalysisFailed>() {
        (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
    } else if let Some(error) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", error))
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, format!("Request body exceeds {} bytes", MAX_REQUEST_BODY_BYTES))
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "A content-length header is required".to_string())
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected a JSON body".to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else if let Some(error) = rejection.find::<warp::filters::cors::CorsForbidden>() {
        (StatusCode::FORBIDDEN, error.to_string())
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&json!({ "error": message })),
        status,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(host: &str, port: u16) -> AnalysisServer {
        let analyzer = CodeAnalyzer::new(
            crate::services::language_registry::LanguageRegistry::new(),
            crate::services::suggestion_client::SuggestionClient::new(Arc::new(
                crate::traits::ai_provider::MockAiProvider::new(),
            )),
        );
        let config = ServerConfig {
            host: host.to_string(),
            port,
            ..ServerConfig::default()
        };
        AnalysisServer::new(Arc::new(analyzer), config)
    }

    #[tokio::test]
    async fn loopback_address_resolves() {
        let addr = server("127.0.0.1", 5000).resolve_address().await.unwrap();

        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 5000)));
    }

    #[tokio::test]
    async fn unresolvable_host_is_a_configuration_error() {
        let error = server("not a host name", 5000).resolve_address().await.unwrap_err();

        assert!(error.is_configuration());
    }
}
