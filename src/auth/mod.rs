use async_trait::async_trait;
use std::collections::HashSet;

use crate::config::AuthConfig;

/// Membership check for bearer credentials.
///
/// The gateway only asks "is this key allowed"; a secret manager or database
/// can implement this without touching the request handlers.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn contains(&self, api_key: &str) -> bool;
}

/// Fixed in-memory allow-list, loaded once from `[auth]`.
#[derive(Debug, Clone, Default)]
pub struct StaticKeyList {
    keys: HashSet<String>,
}

impl StaticKeyList {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.trim().is_empty())
                .collect(),
        }
    }

    pub fn from_config(cfg: &AuthConfig) -> Self {
        Self::new(cfg.api_keys.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[async_trait]
impl CredentialStore for StaticKeyList {
    async fn contains(&self, api_key: &str) -> bool {
        self.keys.contains(api_key)
    }
}
