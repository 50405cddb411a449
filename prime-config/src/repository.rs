use serde::{Deserialize, Serialize};

/// Metadata about the source repository of the generated SDKs
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Repository {
    pub name: String,
    pub description: String,
    pub url: String,
    pub inception_year: Option<u16>,
    pub license_name: String,
    #[serde(rename = "licenseURL")]
    pub license_url: String,
}

/// A person responsible for the generated SDKs
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Maintainer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub url: String,
}
