// ABOUTME: Typed firebase-tools deploy results and channel result interpretation.
// ABOUTME: Parses the --json payload and extracts preview URLs and expiration.

use chrono::{DateTime, Utc};
use nonempty::NonEmpty;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Outcome reported by firebase-tools, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeployResult<T> {
    Success { result: T },
    Error { error: String },
}

impl<T> DeployResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, DeployResult::Success { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DeployResult::Error { error } => Some(error),
            DeployResult::Success { .. } => None,
        }
    }
}

/// Parse a deploy result from firebase-tools stdout.
///
/// Empty output is a parse error like any other malformed payload.
pub fn parse_deploy_result<T: DeserializeOwned>(
    text: &str,
) -> Result<DeployResult<T>, serde_json::Error> {
    serde_json::from_str(text)
}

/// One site deployed to a preview channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDeploy {
    pub site: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub url: String,
    pub expire_time: String,
}

/// Channel deploy result: site name to deploy, in the order firebase-tools reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteDeploys(Vec<(String, SiteDeploy)>);

impl SiteDeploys {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteDeploy)> {
        self.0.iter().map(|(name, site)| (name.as_str(), site))
    }

    pub fn sites(&self) -> impl Iterator<Item = &SiteDeploy> {
        self.0.iter().map(|(_, site)| site)
    }

    pub fn get(&self, name: &str) -> Option<&SiteDeploy> {
        self.iter().find(|(n, _)| *n == name).map(|(_, site)| site)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, SiteDeploy)> for SiteDeploys {
    fn from_iter<I: IntoIterator<Item = (String, SiteDeploy)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for SiteDeploys {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, site)| (name, site)))
    }
}

impl<'de> Deserialize<'de> for SiteDeploys {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SiteDeploysVisitor;

        impl<'de> Visitor<'de> for SiteDeploysVisitor {
            type Value = SiteDeploys;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of site name to site deploy")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, site)) = map.next_entry::<String, SiteDeploy>()? {
                    entries.push((name, site));
                }
                Ok(SiteDeploys(entries))
            }
        }

        deserializer.deserialize_map(SiteDeploysVisitor)
    }
}

/// Production deploy result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionResult {
    pub hosting: HostingVersions,
}

/// Released hosting version(s): one string for a single site, a list otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostingVersions {
    Single(String),
    Multiple(Vec<String>),
}

impl HostingVersions {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            HostingVersions::Single(version) => vec![version.clone()],
            HostingVersions::Multiple(versions) => versions.clone(),
        }
    }
}

/// User-facing summary of a successful channel deploy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSummary {
    pub expire_time: String,
    pub urls: NonEmpty<String>,
}

impl ChannelSummary {
    /// Expiration as a timestamp, if firebase-tools reported RFC 3339.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expire_time)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("channel deploy did not succeed: {0}")]
    NotSuccess(String),

    #[error("channel deploy succeeded but reported no sites")]
    NoSites,
}

/// Extract the expiration and every site URL from a successful channel deploy.
///
/// All sites of one deploy share an expiration, so the first site's is used.
pub fn interpret_channel_deploy_result(
    result: &DeployResult<SiteDeploys>,
) -> Result<ChannelSummary, InterpretError> {
    let sites = match result {
        DeployResult::Success { result } => result,
        DeployResult::Error { error } => return Err(InterpretError::NotSuccess(error.clone())),
    };

    let urls = NonEmpty::from_vec(sites.sites().map(|s| s.url.clone()).collect())
        .ok_or(InterpretError::NoSites)?;
    let expire_time = sites
        .sites()
        .next()
        .map(|s| s.expire_time.clone())
        .ok_or(InterpretError::NoSites)?;

    Ok(ChannelSummary { expire_time, urls })
}
