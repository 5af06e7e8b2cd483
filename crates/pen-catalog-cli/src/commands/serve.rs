use pen_catalog_api::{catalog_router, CatalogSettings};

use crate::cli::{GlobalOpts, ServeArgs};
use crate::commands::connect_store;
use crate::config::{load_config, resolve_db_params, CliConfig};
use crate::error::CliError;
use crate::output::OutputContext;
use crate::telemetry;

/// Listener and routing parameters after merging config + CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeParams {
    pub addr: String,
    pub catalog: CatalogSettings,
}

/// CLI flags take precedence over config file values.
pub fn resolve_serve_params(config: &CliConfig, args: &ServeArgs) -> ServeParams {
    let host = args.host.as_deref().unwrap_or(&config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let route_prefix = args
        .route_prefix
        .clone()
        .unwrap_or_else(|| config.api.catalog.route_prefix.clone());
    ServeParams {
        addr: format!("{host}:{port}"),
        catalog: CatalogSettings { route_prefix },
    }
}

/// Run the `serve` command: connect the store and serve the catalog API
/// until Ctrl-C.
pub async fn run(
    args: ServeArgs,
    global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    telemetry::init(global.verbose, global.quiet, args.log_level.as_deref())?;

    let config = load_config(global.config.as_deref())?;
    let params = resolve_serve_params(&config, &args);
    let db_params = resolve_db_params(&config, global);

    let state = connect_store(&db_params, output).await?;
    if db_params.target.is_ephemeral() {
        output.warn("records are kept in memory and lost on shutdown");
    }

    let app = catalog_router(state, &params.catalog);

    let listener = tokio::net::TcpListener::bind(&params.addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: params.addr.clone(),
            source,
        })?;
    let local_addr = listener
        .local_addr()
        .map_or_else(|_| params.addr.clone(), |a| a.to_string());

    tracing::info!(
        addr = %local_addr,
        prefix = %params.catalog.normalized_prefix(),
        store = %db_params.describe(),
        "pen catalog listening"
    );
    output.success(&format!(
        "Serving on http://{local_addr}{}",
        params.catalog.normalized_prefix()
    ));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(CliError::Server)?;

    tracing::info!("pen catalog stopped");
    output.status("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(host: Option<&str>, port: Option<u16>, prefix: Option<&str>) -> ServeArgs {
        ServeArgs {
            host: host.map(str::to_string),
            port,
            route_prefix: prefix.map(str::to_string),
            log_level: None,
        }
    }

    #[test]
    fn serve_params_default_from_config() {
        let params = resolve_serve_params(&CliConfig::default(), &args(None, None, None));
        assert_eq!(params.addr, "127.0.0.1:8080");
        assert_eq!(params.catalog.route_prefix, "/api");
    }

    #[test]
    fn serve_params_flags_override_config() {
        let params = resolve_serve_params(
            &CliConfig::default(),
            &args(Some("0.0.0.0"), Some(9000), Some("/v1")),
        );
        assert_eq!(params.addr, "0.0.0.0:9000");
        assert_eq!(params.catalog.route_prefix, "/v1");
    }
}
