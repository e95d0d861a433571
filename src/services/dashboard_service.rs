use crate::error::{DashboardError, ProviderError};
use crate::models::{AppState, DashboardViewModel, ImageView, LoadBalancerView};

/// Hard cap on the images table, applied in provider order.
pub const MAX_IMAGE_ROWS: usize = 10;

/// Assemble the dashboard view model in four sequential stages.
///
/// Stage order is fixed: instances, networks, load balancers, images. The
/// first two stages are load-bearing and propagate every failure, which
/// short-circuits the stages behind them — the response is either a fully
/// assembled view model or an error, never a partially filled page. The
/// last two stages recover locally from the access-denied class only,
/// substituting a single sentinel record.
pub async fn build_dashboard(state: &AppState) -> Result<DashboardViewModel, DashboardError> {
    let instances = state.compute.describe_instances().await?;
    tracing::info!(count = instances.len(), "fetched instances");

    let networks = state.compute.describe_networks().await?;
    tracing::info!(count = networks.len(), "fetched networks");

    let load_balancers = match state.load_balancer.describe_load_balancers().await {
        Ok(lbs) => lbs,
        Err(ProviderError::AccessDenied { message }) => {
            tracing::warn!(%message, "load balancer listing denied, showing sentinel");
            vec![LoadBalancerView::access_denied()]
        }
        Err(e) => return Err(e.into()),
    };

    let images = match state.compute.describe_images().await {
        Ok(mut images) => {
            images.truncate(MAX_IMAGE_ROWS);
            if images.is_empty() {
                images.push(ImageView::none_owned());
            }
            images
        }
        Err(ProviderError::AccessDenied { message }) => {
            tracing::warn!(%message, "image listing denied, showing sentinel");
            vec![ImageView::access_denied()]
        }
        Err(e) => return Err(e.into()),
    };

    Ok(DashboardViewModel {
        region: state.region().to_string(),
        instances,
        networks,
        load_balancers,
        images,
    })
}
