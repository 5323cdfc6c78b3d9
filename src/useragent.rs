//! User-agent assembly from app, device, and client metadata.

use std::sync::OnceLock;

/// Builds the user-agent string from its parts.
///
/// Pure and deterministic: the same inputs always produce the same string.
///
/// # Examples
///
/// ```
/// use wicket::useragent::build_agent;
///
/// let agent = build_agent("GOV.UK Wallet", "1.0.0", "samsung", "SM-G975F", 31, "Ktor", "2.3.7");
/// assert_eq!(agent, "GOV.UK Wallet/1.0.0 samsung/SM-G975F Android/31 Ktor/2.3.7");
/// ```
pub fn build_agent(
    app_name: &str,
    version_name: &str,
    manufacturer: &str,
    model: &str,
    sdk_version: i32,
    client_name: &str,
    client_version: &str,
) -> String {
    format!(
        "{app_name}/{version_name} {manufacturer}/{model} Android/{sdk_version} \
         {client_name}/{client_version}"
    )
}

/// Identifying metadata rendered into the `User-Agent` header.
///
/// Constructed once at startup from host-supplied metadata. The rendered
/// string is cached; repeated [`agent_string`](UserAgent::agent_string)
/// calls return the identical value.
#[derive(Debug, Clone)]
pub struct UserAgent {
    /// Name of the app as displayed in the store.
    pub app_name: String,
    /// Version of the app.
    pub version_name: String,
    /// Manufacturer of the device running the app.
    pub manufacturer: String,
    /// Model number of the device running the app.
    pub model: String,
    /// The current version of the OS.
    pub sdk_version: i32,
    /// The name of the underlying HTTP client.
    pub client_name: String,
    /// Version number of the HTTP client.
    pub client_version: String,
    rendered: OnceLock<String>,
}

impl UserAgent {
    /// Creates a new `UserAgent` record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        app_name: impl Into<String>,
        version_name: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        sdk_version: i32,
        client_name: impl Into<String>,
        client_version: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            version_name: version_name.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            sdk_version,
            client_name: client_name.into(),
            client_version: client_version.into(),
            rendered: OnceLock::new(),
        }
    }

    /// Returns the rendered user-agent string, computing it on first use.
    pub fn agent_string(&self) -> &str {
        self.rendered.get_or_init(|| {
            build_agent(
                &self.app_name,
                &self.version_name,
                &self.manufacturer,
                &self.model,
                self.sdk_version,
                &self.client_name,
                &self.client_version,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_AGENT: &str = "GOV.UK Wallet/1.0.0 samsung/SM-G975F Android/31 Ktor/2.3.7";

    fn wallet_agent() -> UserAgent {
        UserAgent::new(
            "GOV.UK Wallet",
            "1.0.0",
            "samsung",
            "SM-G975F",
            31,
            "Ktor",
            "2.3.7",
        )
    }

    #[test]
    fn builds_expected_agent_string() {
        let actual = build_agent(
            "GOV.UK Wallet",
            "1.0.0",
            "samsung",
            "SM-G975F",
            31,
            "Ktor",
            "2.3.7",
        );
        assert_eq!(actual, USER_AGENT);
    }

    #[test]
    fn rendered_string_is_cached_and_identical() {
        let agent = wallet_agent();
        let first = agent.agent_string();
        let second = agent.agent_string();

        assert_eq!(first, USER_AGENT);
        // Same allocation, not merely equal content.
        assert!(std::ptr::eq(first, second));
    }
}
