//! Renderer behavior: pure view-model to markup, no network.

use askama::Template;

use skyview::models::{ImageView, InstanceState, InstanceView, LoadBalancerView, NetworkView};
use skyview::templates::{
    ApiErrorTemplate, CredentialsErrorTemplate, DashboardTemplate, UnexpectedErrorTemplate,
};

#[test]
fn empty_lists_render_empty_state_placeholders() {
    let html = DashboardTemplate {
        region: "us-east-1",
        instances: &[],
        networks: &[],
        load_balancers: &[],
        images: &[],
    }
    .render()
    .unwrap();

    // one placeholder per section
    assert_eq!(html.matches("empty-state").count(), 4);
    assert_eq!(html.matches("<table>").count(), 0);
}

#[test]
fn populated_lists_render_tables_instead_of_placeholders() {
    let instances = vec![InstanceView {
        id: "i-1".to_string(),
        state: InstanceState::Running,
        instance_type: "t3.micro".to_string(),
        public_ip: None,
    }];
    let networks = vec![NetworkView {
        id: "vpc-1".to_string(),
        cidr_block: "10.0.0.0/16".to_string(),
    }];
    let load_balancers = vec![LoadBalancerView::access_denied()];
    let images = vec![ImageView::none_owned()];

    let html = DashboardTemplate {
        region: "eu-west-2",
        instances: &instances,
        networks: &networks,
        load_balancers: &load_balancers,
        images: &images,
    }
    .render()
    .unwrap();

    assert_eq!(html.matches("empty-state").count(), 0);
    assert_eq!(html.matches("<table>").count(), 4);
    assert!(html.contains("eu-west-2"));
    // sentinel rows render as ordinary data
    assert!(html.contains("Check IAM permissions"));
    assert!(html.contains("No images owned by this account"));
    // a missing public address renders as a dash, not an empty cell
    assert!(html.contains("<td>-</td>"));
}

#[test]
fn remote_strings_are_escaped() {
    let instances = vec![InstanceView {
        id: "<script>alert(1)</script>".to_string(),
        state: InstanceState::Other("<b>odd</b>".to_string()),
        instance_type: "t3.micro".to_string(),
        public_ip: Some("198.51.100.7".to_string()),
    }];

    let html = DashboardTemplate {
        region: "us-east-1",
        instances: &instances,
        networks: &[],
        load_balancers: &[],
        images: &[],
    }
    .render()
    .unwrap();

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<b>odd</b>"));
}

#[test]
fn error_pages_are_visually_distinct_and_escaped() {
    let credentials = CredentialsErrorTemplate.render().unwrap();
    assert!(credentials.contains("error-credentials"));
    assert!(credentials.contains("CLOUD_ACCESS_KEY_ID"));
    assert!(credentials.contains("CLOUD_SECRET_ACCESS_KEY"));

    let api = ApiErrorTemplate {
        code: "Throttling",
        message: "rate <exceeded>",
    }
    .render()
    .unwrap();
    assert!(api.contains("error-api"));
    assert!(api.contains("Throttling"));
    assert!(api.contains("rate &lt;exceeded&gt;"));

    let unexpected = UnexpectedErrorTemplate {
        detail: "connection reset",
    }
    .render()
    .unwrap();
    assert!(unexpected.contains("error-unexpected"));
    assert!(unexpected.contains("connection reset"));
}
