use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Address used when navigation cannot resolve a body.
pub struct NavigationOptions {
    /// `/`-joined body path selected on start-up and on failed lookups.
    #[schemars(title = "Default Body")]
    pub default_address: String,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            default_address: "Sun/Earth".into(),
        }
    }
}
