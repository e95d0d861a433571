/// One machine image row.
#[derive(Clone, Debug)]
pub struct ImageView {
    pub id: String,
    pub name: String,
}

impl ImageView {
    /// Sentinel shown when the account owns no images at all.
    pub fn none_owned() -> ImageView {
        ImageView {
            id: "None".to_string(),
            name: "No images owned by this account".to_string(),
        }
    }

    /// Sentinel shown when the account may not list images.
    pub fn access_denied() -> ImageView {
        ImageView {
            id: "Access Denied".to_string(),
            name: "Check IAM permissions".to_string(),
        }
    }
}
