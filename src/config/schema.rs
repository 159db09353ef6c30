use serde::{Deserialize, Serialize};

use crate::listing::BuyerProfile;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub profile: BuyerProfile,

    /// tracing filter used when RUST_LOG is unset, e.g. "info"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}
