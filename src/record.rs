use log::warn;
use serde_derive::Deserialize;
use url::Url;

use crate::errors::{Error, Result};

const PLACEHOLDER_MARKER: &str = "REPLACE_";
const IDENTITY_SCOPE: &str = "openid";

////////////////////////////////////////////////////////////////////////////////

/// Execution mode of the consumer requesting the record.
///
/// Placeholder sentinels and plain-HTTP redirect URLs are tolerated in
/// `Development` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

////////////////////////////////////////////////////////////////////////////////

/// The unvalidated wire shape of the dashboard configuration object.
///
/// Every field is optional so that presence checking belongs to
/// [`RawConfig::validate`] rather than to serde, and a missing field can be
/// reported under its camelCase wire name. Unrecognized extra fields are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub region: Option<String>,
    pub user_pool_id: Option<String>,
    pub user_pool_web_client_id: Option<String>,
    pub domain: Option<String>,
    pub redirect_sign_in: Option<String>,
    pub redirect_sign_out: Option<String>,
    pub api_base_url: Option<String>,
    pub scopes: Option<Vec<String>>,
}

impl RawConfig {
    /// Validates the raw input into a [`ConfigRecord`].
    ///
    /// Pure and synchronous; succeeds or fails atomically, so a partially
    /// validated record is never observable. Values are carried into the
    /// record verbatim: no normalization, no scope dedup, no reordering.
    pub fn validate(self, mode: Mode) -> Result<ConfigRecord> {
        let region = required("region", self.region)?;
        let user_pool_id = required("userPoolId", self.user_pool_id)?;
        let user_pool_web_client_id =
            required("userPoolWebClientId", self.user_pool_web_client_id)?;
        let domain = required("domain", self.domain)?;
        let redirect_sign_in = required("redirectSignIn", self.redirect_sign_in)?;
        let redirect_sign_out = required("redirectSignOut", self.redirect_sign_out)?;
        let api_base_url = required("apiBaseUrl", self.api_base_url)?;
        let scopes = self.scopes.ok_or(Error::MissingField("scopes"))?;

        if mode == Mode::Production {
            let opaque = [
                ("userPoolId", &user_pool_id),
                ("userPoolWebClientId", &user_pool_web_client_id),
                ("domain", &domain),
                ("redirectSignIn", &redirect_sign_in),
                ("redirectSignOut", &redirect_sign_out),
                ("apiBaseUrl", &api_base_url),
            ];

            for &(field, value) in &opaque {
                if value.contains(PLACEHOLDER_MARKER) {
                    return Err(Error::PlaceholderValue(field));
                }
            }
        }

        let redirects_may_use_http = mode == Mode::Development;
        check_url("domain", &domain, false)?;
        check_url("redirectSignIn", &redirect_sign_in, redirects_may_use_http)?;
        check_url("redirectSignOut", &redirect_sign_out, redirects_may_use_http)?;
        check_url("apiBaseUrl", &api_base_url, false)?;

        let scopes_usable = !scopes.is_empty()
            && scopes.iter().all(|scope| !scope.is_empty())
            && scopes.iter().any(|scope| scope == IDENTITY_SCOPE);

        if !scopes_usable {
            return Err(Error::EmptyScopes);
        }

        // Region mismatches in the endpoints are suspicious but legal:
        // custom auth and API domains carry no region at all.
        for (field, value) in &[("domain", &domain), ("apiBaseUrl", &api_base_url)] {
            if !value.contains(&region) {
                warn!(
                    "region = '{}' does not appear in {} = '{}'",
                    region, field, value
                );
            }
        }

        Ok(ConfigRecord {
            region,
            user_pool_id,
            user_pool_web_client_id,
            domain,
            redirect_sign_in,
            redirect_sign_out,
            api_base_url,
            scopes,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////

/// The validated, immutable environment bindings of the dashboard:
/// identity-provider endpoints and identifiers plus API connectivity.
///
/// Constructed once per process through [`RawConfig::validate`] and read
/// thereafter; no API of this crate mutates it. URL-typed fields are kept
/// as the original strings so they reach the identity provider exactly as
/// configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    pub region: String,
    pub user_pool_id: String,
    pub user_pool_web_client_id: String,
    pub domain: String,
    pub redirect_sign_in: String,
    pub redirect_sign_out: String,
    pub api_base_url: String,
    pub scopes: Vec<String>,
}

////////////////////////////////////////////////////////////////////////////////

fn required(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) => {
            if value.is_empty() {
                Err(Error::MissingField(field))
            } else {
                Ok(value)
            }
        }
        None => Err(Error::MissingField(field)),
    }
}

fn check_url(field: &'static str, value: &str, allow_http: bool) -> Result<()> {
    let url = Url::parse(value).map_err(|err| Error::InvalidUrl {
        field,
        detail: err.to_string(),
    })?;

    match url.scheme() {
        "https" => Ok(()),
        "http" if allow_http => Ok(()),
        scheme => Err(Error::InvalidUrl {
            field,
            detail: format!("scheme '{}' is not acceptable for this field", scheme),
        }),
    }
}

////////////////////////////////////////////////////////////////////////////////
