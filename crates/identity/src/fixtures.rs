//! Creator credentials for tests.
//!
//! Builds CA-signed certificates with rcgen so that issuer and subject carry
//! different distinguished names, the way MSP-issued certificates do.

use rcgen::{BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, KeyPair};

/// Distinguished-name fields of a generated certificate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateSpec<'a> {
    pub subject_common_name: Option<&'a str>,
    pub subject_organization: Option<&'a str>,
    pub issuer_organization: Option<&'a str>,
}

/// PEM certificate for `common_name`, issued by a CA of `issuer_organization`.
pub fn creator_pem(common_name: &str, issuer_organization: &str) -> String {
    certificate_pem(&CertificateSpec {
        subject_common_name: Some(common_name),
        subject_organization: None,
        issuer_organization: Some(issuer_organization),
    })
}

/// PEM certificate with exactly the distinguished-name fields of `spec`.
///
/// Panics if rcgen fails, which only happens on a broken crypto backend.
pub fn certificate_pem(spec: &CertificateSpec<'_>) -> String {
    let ca_key = KeyPair::generate().expect("generate CA key");
    let mut ca_params = CertificateParams::new(Vec::<String>::new()).expect("CA params");
    ca_params.distinguished_name = DistinguishedName::new();
    ca_params
        .distinguished_name
        .push(DnType::CommonName, "ca.fixture.local");
    if let Some(org) = spec.issuer_organization {
        ca_params.distinguished_name.push(DnType::OrganizationName, org);
    }
    ca_params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    let ca_cert = ca_params.self_signed(&ca_key).expect("self-sign CA");

    let leaf_key = KeyPair::generate().expect("generate leaf key");
    let mut leaf_params = CertificateParams::new(Vec::<String>::new()).expect("leaf params");
    leaf_params.distinguished_name = DistinguishedName::new();
    if let Some(cn) = spec.subject_common_name {
        leaf_params.distinguished_name.push(DnType::CommonName, cn);
    }
    if let Some(org) = spec.subject_organization {
        leaf_params.distinguished_name.push(DnType::OrganizationName, org);
    }
    let leaf = leaf_params
        .signed_by(&leaf_key, &ca_cert, &ca_key)
        .expect("sign leaf certificate");

    leaf.pem()
}

/// Serialized identity envelope: protobuf message with the MSP id as field 1
/// and the PEM certificate as field 2.
pub fn serialized_identity(msp_id: &str, pem: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(msp_id.len() + pem.len() + 8);
    push_field(&mut out, 1, msp_id.as_bytes());
    push_field(&mut out, 2, pem.as_bytes());
    out
}

fn push_field(out: &mut Vec<u8>, field: u8, bytes: &[u8]) {
    // Wire type 2 (length-delimited).
    out.push((field << 3) | 2);
    let mut len = bytes.len();
    while len >= 0x80 {
        out.push((len as u8 & 0x7f) | 0x80);
        len >>= 7;
    }
    out.push(len as u8);
    out.extend_from_slice(bytes);
}
