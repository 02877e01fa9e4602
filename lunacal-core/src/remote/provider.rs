//! Provider subprocess protocol.
//!
//! Providers are external binaries (e.g., `lunacal-provider-google`)
//! spoken to with JSON over stdin/stdout: one request line in, one
//! response object out. Any executable that speaks the protocol can be
//! a provider, whatever language it is written in.
//!
//! Providers manage their own credentials and tokens; the CLI only
//! passes provider-specific parameters through from the `[remote]`
//! config table.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::error::{LunacalError, LunacalResult};
use crate::remote::protocol::{Command, ProviderCommand, Request, Response};

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Provider(String);

impl Provider {
    pub fn from_name(name: &str) -> Self {
        Provider(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> LunacalResult<std::path::PathBuf> {
        let binary_name = format!("lunacal-provider-{}", self.0);

        which::which(&binary_name).map_err(|_| {
            LunacalError::ProviderNotInstalled(format!(
                "Provider '{}' not found. Install it with:\n  cargo install {}",
                self.0, binary_name
            ))
        })
    }

    /// Call a typed provider command and return its response.
    ///
    /// The response type comes from the command's associated type, so a
    /// provider answering with the wrong shape is a deserialization
    /// error here rather than corrupt data later.
    pub async fn call<C: ProviderCommand>(&self, cmd: C) -> LunacalResult<C::Response> {
        timeout(PROVIDER_TIMEOUT, self.call_raw(C::command(), cmd))
            .await
            .map_err(|_| LunacalError::ProviderTimeout(PROVIDER_TIMEOUT.as_secs()))?
    }

    async fn call_raw<P, R>(&self, command: Command, params: P) -> LunacalResult<R>
    where
        P: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let params =
            serde_json::to_value(params).map_err(|e| LunacalError::Serialization(e.to_string()))?;
        let request = serde_json::to_string(&Request { command, params })
            .map_err(|e| LunacalError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = TokioCommand::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                LunacalError::Provider(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // Stdin was piped above, so take() always yields a handle.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(format!("{request}\n").as_bytes()).await?;
        }

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(LunacalError::Provider(format!(
                "Provider exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.trim().is_empty() {
            return Err(LunacalError::Provider(
                "Provider returned no response".into(),
            ));
        }

        let response: Response<R> = serde_json::from_str(&response_str)
            .map_err(|e| LunacalError::Provider(format!("Failed to parse response: {e}")))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(LunacalError::Provider(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_keeps_its_name() {
        let provider = Provider::from_name("google");
        assert_eq!(provider.name(), "google");
    }

    #[test]
    fn provider_deserializes_from_a_bare_string() {
        let provider: Provider = serde_json::from_str(r#""google""#).unwrap();
        assert_eq!(provider.name(), "google");
    }
}
