use pen_catalog_api::route_table;

use crate::cli::{GlobalOpts, RoutesArgs};
use crate::config::load_config;
use crate::error::CliError;
use crate::output::OutputContext;

/// Run the `routes` command: print every route the server would mount.
pub fn run(args: RoutesArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let prefix = args
        .route_prefix
        .unwrap_or_else(|| config.api.catalog.route_prefix.clone());
    output.print_routes(&route_table(&prefix))
}
