use std::net::SocketAddr;

use serde::Deserialize;
use sectxt_core::error::{Result, SecTxtError};
use sectxt_core::{validate_with, PolicyConfig, Profile};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    /// Mandatory-field set for the policy.
    #[serde(default)]
    pub profile: Profile,

    /// Policy document source; checked by the core validator, not by serde.
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SecTxtError::invalid(
                "version",
                format!("unsupported config version {}", self.version),
            ));
        }

        self.gateway.validate()?;
        validate_with(&self.policy, self.profile)?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SecTxtError::invalid(
                "gateway.listen",
                format!("`{}` is not a socket address: {e}", self.listen),
            )
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
