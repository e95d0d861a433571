pub mod app_state;
pub mod dashboard;
pub mod image_view;
pub mod instance_view;
pub mod load_balancer_view;
pub mod network_view;

pub use app_state::AppState;
pub use dashboard::DashboardViewModel;
pub use image_view::ImageView;
pub use instance_view::{InstanceState, InstanceView};
pub use load_balancer_view::LoadBalancerView;
pub use network_view::NetworkView;
