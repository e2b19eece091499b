// src/infrastructure/connection.rs
use crate::constants::{DEV_STORAGE_ACCOUNT, DEV_STORAGE_ENDPOINT, DEV_STORAGE_KEY};
use crate::domain::DomainError;
use opendal::services::{Azblob, Fs};
use opendal::Operator;
use std::collections::HashMap;
use std::path::PathBuf;

/// Parsed form of a storage connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    /// Azure Blob account; the container comes from the settings
    Azure {
        endpoint: String,
        account_name: Option<String>,
        account_key: Option<String>,
        sas_token: Option<String>,
    },
    /// Directory on the local filesystem; each container is a subdirectory
    Filesystem { root: PathBuf },
}

impl ConnectionTarget {
    /// Accepted forms:
    /// - `file:///abs/dir` or `fs:/abs/dir`
    /// - `UseDevelopmentStorage=true`
    /// - `DefaultEndpointsProtocol=https;AccountName=..;AccountKey=..;EndpointSuffix=..`
    ///   or any connection string carrying a `BlobEndpoint`
    pub fn parse(connection: &str) -> Result<Self, DomainError> {
        let connection = connection.trim();
        if connection.is_empty() {
            return Err(DomainError::Unconfigured(
                "connection string is empty".to_string(),
            ));
        }

        if let Some(path) = connection
            .strip_prefix("file://")
            .or_else(|| connection.strip_prefix("fs:"))
        {
            if path.is_empty() {
                return Err(DomainError::Unconfigured(
                    "filesystem connection has no path".to_string(),
                ));
            }
            return Ok(Self::Filesystem {
                root: PathBuf::from(path),
            });
        }

        Self::parse_azure(connection)
    }

    fn parse_azure(connection: &str) -> Result<Self, DomainError> {
        let fields: HashMap<String, String> = connection
            .split(';')
            .filter(|part| !part.trim().is_empty())
            .filter_map(|part| {
                // values (account keys, SAS tokens) may contain '='
                part.split_once('=')
                    .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
            })
            .collect();

        if fields
            .get("usedevelopmentstorage")
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
        {
            return Ok(Self::Azure {
                endpoint: DEV_STORAGE_ENDPOINT.to_string(),
                account_name: Some(DEV_STORAGE_ACCOUNT.to_string()),
                account_key: Some(DEV_STORAGE_KEY.to_string()),
                sas_token: None,
            });
        }

        let account_name = fields.get("accountname").cloned();
        let endpoint = match (fields.get("blobendpoint"), &account_name) {
            (Some(endpoint), _) => endpoint.trim_end_matches('/').to_string(),
            (None, Some(account)) => {
                let protocol = fields
                    .get("defaultendpointsprotocol")
                    .map(String::as_str)
                    .unwrap_or("https");
                let suffix = fields
                    .get("endpointsuffix")
                    .map(String::as_str)
                    .unwrap_or("core.windows.net");
                format!("{protocol}://{account}.blob.{suffix}")
            }
            (None, None) => {
                return Err(DomainError::Unconfigured(
                    "connection string names neither AccountName nor BlobEndpoint".to_string(),
                ))
            }
        };

        Ok(Self::Azure {
            endpoint,
            account_name,
            account_key: fields.get("accountkey").cloned(),
            sas_token: fields.get("sharedaccesssignature").cloned(),
        })
    }

    /// Build a fresh operator scoped to `container`.
    pub fn operator(&self, container: &str) -> Result<Operator, DomainError> {
        let operator = match self {
            Self::Azure {
                endpoint,
                account_name,
                account_key,
                sas_token,
            } => {
                let mut builder = Azblob::default();
                builder.endpoint(endpoint).container(container);
                if let Some(name) = account_name {
                    builder.account_name(name);
                }
                if let Some(key) = account_key {
                    builder.account_key(key);
                }
                if let Some(token) = sas_token {
                    builder.sas_token(token);
                }
                Operator::new(builder).map(|b| b.finish())
            }
            Self::Filesystem { root } => {
                let root = root.join(container);
                let mut builder = Fs::default();
                builder.root(&root.to_string_lossy());
                Operator::new(builder).map(|b| b.finish())
            }
        };

        operator.map_err(|e| DomainError::StorageUnavailable(format!("Failed to open store: {e}")))
    }
}
