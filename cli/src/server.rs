#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use serde::{Deserialize, Serialize};
    use shunt::{Calculation, Engine, EngineConfig, ShuntError};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{error, info};

    type SharedConfig = Arc<EngineConfig>;
    type ApiError = (StatusCode, Json<ErrorResponse>);

    #[derive(Debug, Deserialize)]
    struct CalculateRequest {
        expression: String,
        #[serde(default)]
        precision: Option<u32>,
        #[serde(default)]
        strict: Option<bool>,
    }

    #[derive(Debug, Deserialize)]
    struct ConvertParams {
        expression: String,
    }

    #[derive(Debug, Serialize)]
    struct ConvertResponse {
        postfix: String,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    /// Routes served by `shunt server`, with `config` as the per-request default
    pub fn router(config: EngineConfig) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/calculate", post(calculate))
            .route("/convert", get(convert))
            .layer(CorsLayer::permissive())
            .with_state(Arc::new(config))
    }

    pub async fn start_server(config: EngineConfig, host: &str, port: u16) -> anyhow::Result<()> {
        let app = router(config);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("shunt server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "shunt",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn calculate(
        State(config): State<SharedConfig>,
        Json(payload): Json<CalculateRequest>,
    ) -> Result<Json<Calculation>, ApiError> {
        let mut config = EngineConfig::clone(&config);
        if let Some(places) = payload.precision {
            config = config.with_precision(places);
        }
        if let Some(strict) = payload.strict {
            config = config.strict(strict);
        }

        let calculation = Engine::with_config(config)
            .calculate(&payload.expression)
            .map_err(|e| reject("Calculation failed", e))?;

        info!(
            "Calculated '{}' = {} in {} steps",
            calculation.expression,
            calculation.result,
            calculation.steps.len()
        );

        Ok(Json(calculation))
    }

    async fn convert(
        State(config): State<SharedConfig>,
        Query(params): Query<ConvertParams>,
    ) -> Result<Json<ConvertResponse>, ApiError> {
        let postfix = Engine::with_config(EngineConfig::clone(&config))
            .convert(&params.expression)
            .map_err(|e| reject("Conversion failed", e))?;

        info!("Converted '{}' to {}", params.expression, postfix);

        Ok(Json(ConvertResponse {
            postfix: postfix.to_string(),
        }))
    }

    fn reject(context: &str, err: ShuntError) -> ApiError {
        error!("{}: {}", context, err);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _config: shunt::EngineConfig,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
