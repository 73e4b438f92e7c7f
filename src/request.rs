use log::trace;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::EncodingError;

/// Signing algorithm identifier for the generated SAML request. ADFS only
/// accepts RSA-SHA256 here, so the record pins it.
pub const SIG_ALG_RSA_SHA256: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha256";

/// Contains the data to do a second factor authentication request.
///
/// The plugin host builds the record when it intercepts a primary
/// authentication, the signing step fills in the SAML request and the two
/// signatures, and the result crosses the redirect as one query-string
/// parameter. The original request is stored verbatim because the plugin
/// replays it byte-for-byte to finish the flow.
///
/// Field order in the struct is the wire order; the existing consumers
/// depend on it, so keep new fields at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecondFactorAuthRequest {
    original_request: String,
    #[serde(default)]
    adfs_context: Option<String>,
    #[serde(default)]
    auth_method: Option<String>,
    #[serde(default)]
    saml_request: Option<String>,
    #[serde(default = "default_sig_alg")]
    sig_alg: String,
    #[serde(default)]
    saml_signature: Option<String>,
    #[serde(default)]
    auth_request_signature: Option<String>,
}

fn default_sig_alg() -> String {
    SIG_ALG_RSA_SHA256.to_string()
}

impl SecondFactorAuthRequest {
    /// Creates a record from an intercepted authentication: the original
    /// signed SAML query string created by ADFS, the authentication method
    /// it selected, and its encrypted context. All three are stored
    /// verbatim, without validation.
    pub fn new(
        original_query_string: impl Into<String>,
        auth_method: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            original_request: original_query_string.into(),
            adfs_context: Some(context.into()),
            auth_method: Some(auth_method.into()),
            saml_request: None,
            sig_alg: default_sig_alg(),
            saml_signature: None,
            auth_request_signature: None,
        }
    }

    /// Creates a record from the full ADFS request URL alone. The
    /// authentication method and context are not known on this path and
    /// stay absent; consumers must tolerate that.
    pub fn from_url(url: &Url) -> Self {
        Self {
            original_request: url.as_str().to_owned(),
            adfs_context: None,
            auth_method: None,
            saml_request: None,
            sig_alg: default_sig_alg(),
            saml_signature: None,
            auth_request_signature: None,
        }
    }

    /// The original ADFS request URL or query string, including the SAML
    /// request and its signature.
    pub fn original_request(&self) -> &str {
        &self.original_request
    }

    /// The encrypted context generated by ADFS.
    pub fn adfs_context(&self) -> Option<&str> {
        self.adfs_context.as_deref()
    }

    /// The authentication method used by ADFS.
    pub fn auth_method(&self) -> Option<&str> {
        self.auth_method.as_deref()
    }

    /// The SAML request generated for the second factor step.
    pub fn saml_request(&self) -> Option<&str> {
        self.saml_request.as_deref()
    }

    /// The signing algorithm for the SAML request.
    pub fn sig_alg(&self) -> &str {
        &self.sig_alg
    }

    /// The signature over the generated SAML request.
    pub fn saml_signature(&self) -> Option<&str> {
        self.saml_signature.as_deref()
    }

    /// The signature over the authentication request as a whole.
    pub fn auth_request_signature(&self) -> Option<&str> {
        self.auth_request_signature.as_deref()
    }

    /// Sets the SAML request generated for the second factor step.
    pub fn set_saml_request(&mut self, saml_request: impl Into<String>) {
        self.saml_request = Some(saml_request.into());
    }

    /// Sets the signature computed over the SAML request.
    pub fn set_saml_signature(&mut self, signature: impl Into<String>) {
        self.saml_signature = Some(signature.into());
    }

    /// Sets the signature computed over the authentication request.
    pub fn set_auth_request_signature(&mut self, signature: impl Into<String>) {
        self.auth_request_signature = Some(signature.into());
    }

    /// Renders the record as percent-encoded JSON, safe to embed as a
    /// single query-string parameter value. Field names and order on the
    /// wire follow the struct declaration; absent fields serialize as
    /// `null`, which is the convention the consuming host expects.
    pub fn serialize(&self) -> Result<String, EncodingError> {
        let json = serde_json::to_string(self)?;
        let encoded = urlencoding::encode(&json).into_owned();
        trace!(
            "serialized second factor auth request ({} bytes)",
            encoded.len()
        );
        Ok(encoded)
    }

    /// Inverse of [`serialize`](Self::serialize): percent-decodes a record
    /// received as a query parameter and parses it. Producers that omit
    /// absent fields are accepted as well as ones that emit `null`.
    pub fn deserialize(encoded: &str) -> Result<Self, EncodingError> {
        let json = urlencoding::decode(encoded)?;
        let request = serde_json::from_str(&json)?;
        trace!("deserialized second factor auth request");
        Ok(request)
    }
}
