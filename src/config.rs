use serde::{Deserialize, Serialize};

/// Contact relay settings for the form on the contact section.
///
/// The destination endpoint is deployment configuration, not page content:
/// override at build time with `CONTACT_RELAY_URL` (and optionally
/// `CONTACT_RELAY_SUBJECT`) rather than editing the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRelay {
    /// Form POST target. Any 2xx response counts as delivered.
    pub endpoint: String,
    /// Subject line the relay stamps on forwarded mail.
    pub subject: String,
    /// Autoresponse text the relay sends back to the submitter.
    pub autoresponse: String,
}

const DEFAULT_ENDPOINT: &str = "https://formsubmit.co/nishalamv@gmail.com";
const DEFAULT_SUBJECT: &str = "New Portfolio Contact Message";
const DEFAULT_AUTORESPONSE: &str =
    "Thank you for your message! I'll get back to you within 24 hours. Best regards, Nishal K";

impl Default for ContactRelay {
    fn default() -> Self {
        Self {
            endpoint: option_env!("CONTACT_RELAY_URL")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            subject: option_env!("CONTACT_RELAY_SUBJECT")
                .unwrap_or(DEFAULT_SUBJECT)
                .to_string(),
            autoresponse: DEFAULT_AUTORESPONSE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_relay_is_usable() {
        let relay = ContactRelay::default();
        assert!(relay.endpoint.starts_with("https://"));
        assert!(!relay.subject.is_empty());
        assert!(!relay.autoresponse.is_empty());
    }
}
