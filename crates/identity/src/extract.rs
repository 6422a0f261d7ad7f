use thiserror::Error;
use x509_parser::pem::parse_x509_pem;
use x509_parser::x509::X509Name;

use prodchain_core::ChaincodeError;

/// Delimiter that opens and closes every PEM armor line.
const PEM_MARKER: &[u8] = b"-----";

/// Caller identity as seen by the chaincode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerIdentity {
    /// Subject common name of the creator certificate.
    pub common_name: String,
    /// Issuer organization, truncated at the first `.`.
    pub organization: String,
}

impl core::fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{}", self.common_name, self.organization)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityParseError {
    #[error("creator credential contains no PEM block")]
    MissingPemBlock,

    #[error("failed to decode creator PEM block: {0}")]
    Pem(String),

    #[error("failed to parse creator certificate: {0}")]
    Certificate(String),

    #[error("creator certificate issuer has no organization")]
    MissingIssuerOrganization,

    #[error("creator certificate attribute is not a string: {0}")]
    Attribute(String),
}

impl From<IdentityParseError> for ChaincodeError {
    fn from(value: IdentityParseError) -> Self {
        ChaincodeError::internal(value.to_string())
    }
}

/// Extract `(common name, short organization)` from a creator credential.
///
/// The credential may be a bare PEM certificate or any envelope embedding
/// one (e.g. a serialized identity prefixed with the MSP id). The PEM block
/// is taken to span from the first `-----` to the end of the last one.
pub fn extract_identity(credential: &[u8]) -> Result<CallerIdentity, IdentityParseError> {
    let block = pem_block(credential)?;

    let (_, pem) = parse_x509_pem(block).map_err(|e| IdentityParseError::Pem(e.to_string()))?;
    let cert = pem
        .parse_x509()
        .map_err(|e| IdentityParseError::Certificate(e.to_string()))?;

    let organization = first_organization(cert.issuer())?;
    let common_name = subject_common_name(cert.subject())?;

    tracing::debug!(%common_name, %organization, "parsed creator certificate");

    Ok(CallerIdentity {
        common_name,
        organization: short_organization(&organization).to_string(),
    })
}

fn pem_block(credential: &[u8]) -> Result<&[u8], IdentityParseError> {
    let start = find(credential, PEM_MARKER).ok_or(IdentityParseError::MissingPemBlock)?;
    let last = rfind(credential, PEM_MARKER).ok_or(IdentityParseError::MissingPemBlock)?;
    Ok(&credential[start..last + PEM_MARKER.len()])
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

fn first_organization(name: &X509Name<'_>) -> Result<String, IdentityParseError> {
    let attr = name
        .iter_organization()
        .next()
        .ok_or(IdentityParseError::MissingIssuerOrganization)?;
    attr.as_str()
        .map(str::to_string)
        .map_err(|e| IdentityParseError::Attribute(e.to_string()))
}

// The last CN attribute wins. A subject without one yields an empty name.
fn subject_common_name(name: &X509Name<'_>) -> Result<String, IdentityParseError> {
    match name.iter_common_name().last() {
        Some(attr) => attr
            .as_str()
            .map(str::to_string)
            .map_err(|e| IdentityParseError::Attribute(e.to_string())),
        None => Ok(String::new()),
    }
}

fn short_organization(organization: &str) -> &str {
    organization.split('.').next().unwrap_or(organization)
}
