use serde::{Deserialize, Serialize};

/// One allowed value from a remote catalog endpoint.
///
/// Catalogs back the pick-lists for rule and mapping builders (condition
/// sources, operators, action values); the server is the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalValue {
    pub name: String,
    pub value: String,
}
