//! Bluemix / IAM settings.
//!
//! Endpoint URLs and credentials for the IAM token service and the
//! containers API route. Credentials are referenced by downstream token
//! exchange code only; nothing in this crate uses them.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// IAM endpoints and credentials for the Bluemix control plane.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BluemixConfig {
    pub iam_url: String,
    pub iam_client_id: String,
    #[serde(deserialize_with = "super::secret_string::deserialize", skip_serializing)]
    pub iam_client_secret: Option<SecretString>,
    #[serde(deserialize_with = "super::secret_string::deserialize", skip_serializing)]
    pub iam_api_key: Option<SecretString>,
    #[serde(deserialize_with = "super::secret_string::deserialize", skip_serializing)]
    pub refresh_token: Option<SecretString>,
    #[serde(rename = "containers_api_route")]
    pub api_endpoint_url: String,
    #[serde(rename = "containers_api_route_private")]
    pub private_api_route: String,
    pub encryption: bool,
    #[serde(
        rename = "containers_api_csrf_token",
        deserialize_with = "super::secret_string::deserialize",
        skip_serializing
    )]
    pub csrf_token: Option<SecretString>,
}
