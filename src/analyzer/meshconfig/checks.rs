//! The built-in security check catalogue for MeshConfig resources.
//!
//! Each check is a pure function over the decoded configuration value that
//! returns zero or more findings. Checks are independent of each other and
//! must tolerate absent or malformed sub-fields (treated as missing) -
//! no check may panic for any decoded document.
//!
//! The catalogue is fixed by the domain (Istio mesh security best
//! practices), so checks are registered in a static slice rather than a
//! dynamic registry. The slice order is the canonical execution order and
//! determines the order findings appear in the output.

use crate::analyzer::meshconfig::types::{Category, Finding, Severity};
use serde_yaml::Value;

/// A named check in the catalogue.
pub struct CheckSpec {
    /// Stable check identifier (e.g. "mesh-mtls").
    pub name: &'static str,
    /// One-line description of what the check looks for.
    pub description: &'static str,
    /// The check function itself.
    pub func: fn(&Value) -> Vec<Finding>,
}

/// The built-in checks, in canonical execution order.
pub fn builtin_checks() -> &'static [CheckSpec] {
    const CHECKS: &[CheckSpec] = &[
        CheckSpec {
            name: "mesh-mtls",
            description: "Verifies that mesh-wide mTLS is enabled and set to STRICT mode.",
            func: check_mesh_mtls,
        },
        CheckSpec {
            name: "certificate-authority",
            description: "Flags the default istiod CA and missing or overly long certificate validity periods.",
            func: check_certificate_authority,
        },
        CheckSpec {
            name: "peer-authentication",
            description: "Verifies that a default peer authentication policy exists and uses STRICT mode.",
            func: check_peer_authentication,
        },
        CheckSpec {
            name: "proxy-config",
            description: "Flags privileged proxies, unpinned proxy images, and missing holdApplicationUntilProxyStarts.",
            func: check_proxy_config,
        },
        CheckSpec {
            name: "secret-discovery",
            description: "Verifies that SDS is enabled for certificate distribution.",
            func: check_secret_discovery,
        },
        CheckSpec {
            name: "trust-domain",
            description: "Flags an unset or default (cluster.local) trust domain.",
            func: check_trust_domain,
        },
        CheckSpec {
            name: "authorization-policy",
            description: "Verifies that a default DENY authorization policy is configured.",
            func: check_authorization_policy,
        },
        CheckSpec {
            name: "telemetry",
            description: "Verifies that telemetry collection and access logging are enabled.",
            func: check_telemetry,
        },
        CheckSpec {
            name: "rbac",
            description: "Verifies that RBAC enforcement is turned on.",
            func: check_rbac,
        },
        CheckSpec {
            name: "outbound-traffic-policy",
            description: "Verifies that outbound traffic is restricted to the service registry.",
            func: check_outbound_traffic_policy,
        },
    ];
    CHECKS
}

// ============================================================================
// Field access helpers
// ============================================================================

/// Get a sub-field, treating explicit nulls the same as absent fields.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value.get(key) {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}

fn get_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    field(value, key)?.as_str()
}

fn get_bool(value: &Value, key: &str) -> Option<bool> {
    field(value, key)?.as_bool()
}

/// parseInt-style leading-integer parse of a number or string field.
fn leading_int(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let s = value.as_str()?.trim();
    let digits: &str = match s.strip_prefix('-') {
        Some(rest) => {
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            return format!("-{}", &rest[..end]).parse().ok();
        }
        None => {
            let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
            &s[..end]
        }
    };
    digits.parse().ok()
}

// ============================================================================
// Check functions
// ============================================================================

/// Mesh-wide mTLS enablement and mode.
pub fn check_mesh_mtls(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mtls = field(config, "meshMTLS");

    if mtls.map(|m| get_bool(m, "enabled")) != Some(Some(true)) {
        findings.push(
            Finding::new(
                Severity::High,
                Category::Mtls,
                "Mesh-wide mTLS is not enabled",
                "Enable mesh-wide mTLS for service-to-service communication security",
            )
            .with_location("meshMTLS.enabled"),
        );
    }

    if let Some(mtls) = mtls {
        let mode = get_str(mtls, "mode");
        if mode != Some("STRICT") {
            // "PERMISSIVE" here is a display default for the message only;
            // an unset mode is not assumed to be an enforced PERMISSIVE.
            findings.push(
                Finding::new(
                    Severity::Medium,
                    Category::Mtls,
                    format!(
                        "mTLS mode is set to {} instead of STRICT",
                        mode.unwrap_or("PERMISSIVE")
                    ),
                    "Use STRICT mode for mTLS to ensure all traffic is encrypted",
                )
                .with_location("meshMTLS.mode"),
            );
        }
    }

    findings
}

/// Certificate authority provider and certificate validity duration.
pub fn check_certificate_authority(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();
    let ca = field(config, "ca");

    let provider = ca.and_then(|c| get_str(c, "provider"));
    if provider.is_none() || provider == Some("istiod") {
        findings.push(
            Finding::new(
                Severity::Medium,
                Category::CertificateAuthority,
                "Using default istiod CA instead of a custom CA",
                "Consider using a production-grade external CA for production environments",
            )
            .with_location("ca.provider"),
        );
    }

    // The unset and too-long findings are mutually exclusive by construction.
    match ca.and_then(|c| field(c, "certValidityDuration")) {
        None => {
            findings.push(
                Finding::new(
                    Severity::Low,
                    Category::CertificateValidity,
                    "Certificate validity duration not specified",
                    "Set appropriate cert validity periods based on your security policies",
                )
                .with_location("ca.certValidityDuration"),
            );
        }
        Some(duration) => {
            // A value with no leading integer fails the comparison and is
            // not reported, matching the original parseInt/NaN behavior.
            if leading_int(duration).is_some_and(|hours| hours > 8760) {
                findings.push(
                    Finding::new(
                        Severity::Medium,
                        Category::CertificateValidity,
                        "Long certificate validity period detected",
                        "Consider shorter certificate validity periods (e.g., 90 days) for better security",
                    )
                    .with_location("ca.certValidityDuration"),
                );
            }
        }
    }

    findings
}

/// Default peer authentication policy presence and mode.
pub fn check_peer_authentication(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mode = field(config, "peerAuthentication").and_then(|pa| get_str(pa, "mode"));
    match mode {
        None => {
            findings.push(
                Finding::new(
                    Severity::High,
                    Category::Authentication,
                    "No default peer authentication policy defined",
                    "Define a default peer authentication policy with strict mTLS",
                )
                .with_location("peerAuthentication"),
            );
        }
        Some(mode) if mode != "STRICT" => {
            findings.push(
                Finding::new(
                    Severity::Medium,
                    Category::Authentication,
                    format!("Peer authentication mode is set to {} instead of STRICT", mode),
                    "Use STRICT mode for peer authentication to ensure all traffic is authenticated",
                )
                .with_location("peerAuthentication.mode"),
            );
        }
        Some(_) => {}
    }

    findings
}

/// Default proxy configuration: privileged mode, image pinning, startup ordering.
pub fn check_proxy_config(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();
    let proxy = field(config, "defaultConfig");

    if proxy.and_then(|p| get_bool(p, "privileged")) == Some(true) {
        findings.push(
            Finding::new(
                Severity::High,
                Category::ProxyConfiguration,
                "Proxies are running in privileged mode",
                "Avoid running proxies in privileged mode unless absolutely necessary",
            )
            .with_location("defaultConfig.privileged"),
        );
    }

    if let Some(image) = proxy.and_then(|p| get_str(p, "image")) {
        if image.contains(':') {
            // The tag is whatever follows the last colon, so images pulled
            // from a registry with a port are handled correctly.
            let tag = image.rsplit(':').next().unwrap_or_default();
            if tag == "latest" || tag == "master" {
                findings.push(
                    Finding::new(
                        Severity::Medium,
                        Category::ProxyConfiguration,
                        format!("Using non-specific proxy image version: {}", tag),
                        "Use specific, pinned versions of proxy images",
                    )
                    .with_location("defaultConfig.image"),
                );
            }
        }
    }

    if proxy.and_then(|p| get_bool(p, "holdApplicationUntilProxyStarts")) != Some(true) {
        findings.push(
            Finding::new(
                Severity::Medium,
                Category::ProxyConfiguration,
                "Applications may start before proxy initialization is complete",
                "Set holdApplicationUntilProxyStarts to true to prevent traffic leaks",
            )
            .with_location("defaultConfig.holdApplicationUntilProxyStarts"),
        );
    }

    findings
}

/// Secret Discovery Service enablement.
pub fn check_secret_discovery(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    let sds_enabled = field(config, "defaultConfig")
        .and_then(|p| field(p, "sds"))
        .and_then(|sds| get_bool(sds, "enabled"));
    if sds_enabled != Some(true) {
        findings.push(
            Finding::new(
                Severity::Medium,
                Category::SecretDiscovery,
                "SDS is not enabled for certificate management",
                "Enable SDS for secure certificate distribution and rotation",
            )
            .with_location("defaultConfig.sds.enabled"),
        );
    }

    findings
}

/// Trust domain configuration.
pub fn check_trust_domain(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    // Unset and default-value findings are mutually exclusive.
    match field(config, "trustDomain").and_then(|v| v.as_str()) {
        None | Some("") => {
            findings.push(
                Finding::new(
                    Severity::Medium,
                    Category::TrustDomain,
                    "Trust domain not explicitly configured",
                    "Set a specific trust domain for your mesh to isolate identities",
                )
                .with_location("trustDomain"),
            );
        }
        Some("cluster.local") => {
            findings.push(
                Finding::new(
                    Severity::Low,
                    Category::TrustDomain,
                    "Using default trust domain (cluster.local)",
                    "Consider setting a custom trust domain specific to your organization",
                )
                .with_location("trustDomain"),
            );
        }
        Some(_) => {}
    }

    findings
}

/// Default mesh-level authorization policy.
pub fn check_authorization_policy(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    let action = field(config, "defaultAuthorizationPolicy").and_then(|ap| get_str(ap, "action"));
    if action != Some("DENY") {
        findings.push(
            Finding::new(
                Severity::High,
                Category::Authorization,
                "No default deny policy is configured at mesh level",
                "Configure a default DENY policy and explicitly allow required traffic",
            )
            .with_location("defaultAuthorizationPolicy"),
        );
    }

    findings
}

/// Telemetry collection and access logging.
pub fn check_telemetry(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();
    let telemetry = field(config, "telemetry");

    if telemetry.and_then(|t| get_bool(t, "enabled")) != Some(true) {
        findings.push(
            Finding::new(
                Severity::Medium,
                Category::Telemetry,
                "Telemetry collection is disabled",
                "Enable telemetry for security monitoring and incident detection",
            )
            .with_location("telemetry.enabled"),
        );
    }

    let access_logging = telemetry
        .and_then(|t| field(t, "accessLogging"))
        .and_then(|al| get_bool(al, "enabled"));
    if access_logging != Some(true) {
        findings.push(
            Finding::new(
                Severity::Medium,
                Category::AccessLogging,
                "Access logging is not enabled",
                "Enable access logging for security auditing and forensics",
            )
            .with_location("telemetry.accessLogging.enabled"),
        );
    }

    findings
}

/// RBAC enforcement mode.
pub fn check_rbac(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mode = field(config, "rbac").and_then(|r| get_str(r, "mode"));
    if mode != Some("ON") {
        findings.push(
            Finding::new(
                Severity::Critical,
                Category::Rbac,
                "RBAC enforcement is not enabled",
                "Enable RBAC to control service-to-service authorization",
            )
            .with_location("rbac.mode"),
        );
    }

    findings
}

/// Outbound traffic policy mode.
pub fn check_outbound_traffic_policy(config: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mode = field(config, "outboundTrafficPolicy").and_then(|otp| get_str(otp, "mode"));
    if mode != Some("REGISTRY_ONLY") {
        findings.push(
            Finding::new(
                Severity::High,
                Category::TrafficPolicy,
                "Outbound traffic to external services is allowed by default",
                "Set outboundTrafficPolicy.mode to REGISTRY_ONLY to restrict external access",
            )
            .with_location("outboundTrafficPolicy.mode"),
        );
    }

    findings
}
