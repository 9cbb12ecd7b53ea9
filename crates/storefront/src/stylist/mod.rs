//! The AI stylist: generated product copy and styling advice.
//!
//! [`Stylist`] is the never-throws collaborator the rest of the application
//! talks to. Both operations take plain strings and resolve to a displayable
//! string in every case: missing credentials and request failures map to
//! fixed fallback text, never to an error the caller must handle.

pub mod client;
pub mod error;
pub mod types;

use tracing::warn;

use crate::config::StylistConfig;

pub use client::StylistClient;
pub use error::StylistError;

/// Shown when no API key is configured and a description is requested.
pub const DESCRIPTION_NOT_CONFIGURED: &str =
    "AI copywriter not configured. Set CLAUDE_API_KEY to enable generated descriptions.";

/// Shown when the description request fails.
pub const DESCRIPTION_UNAVAILABLE: &str = "Could not generate a description at this time.";

/// Shown when the API reply for a description is empty.
pub const DESCRIPTION_EMPTY: &str = "Description unavailable.";

/// Shown when no API key is configured and advice is requested.
pub const ADVICE_NOT_CONFIGURED: &str = "Stylist currently unavailable.";

/// Shown when the advice request fails.
pub const ADVICE_UNAVAILABLE: &str = "The stylist is busy.";

/// Shown when the API reply for advice is empty.
pub const ADVICE_EMPTY: &str = "No advice available.";

/// The generative-text collaborator.
///
/// Holds a client only when a credential is configured; without one, every
/// call resolves immediately to the "not configured" text.
#[derive(Clone)]
pub struct Stylist {
    client: Option<StylistClient>,
}

impl Stylist {
    /// Build the stylist from optional configuration.
    #[must_use]
    pub fn new(config: Option<&StylistConfig>) -> Self {
        Self {
            client: config.map(StylistClient::new),
        }
    }

    /// A stylist with no credential; every call returns fallback text.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { client: None }
    }

    /// Whether a credential is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Generate boutique copy for a product by name and category.
    pub async fn generate_description(&self, name: &str, category: &str) -> String {
        let Some(client) = &self.client else {
            return DESCRIPTION_NOT_CONFIGURED.to_owned();
        };

        let prompt = format!(
            "Write a luxurious, elegant, and sophisticated product description for a high-end \
             fashion item named \"{name}\" in the category \"{category}\". The brand \
             \"Lara n Shen\" is a Nigerian luxury brand. The tone should be exclusive, alluring, \
             and celebrate African heritage, Lagos sophistication, and modern elegance. Keep it \
             under 60 words."
        );

        match client.complete(&prompt).await {
            Ok(text) if text.is_empty() => DESCRIPTION_EMPTY.to_owned(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "description generation failed");
                DESCRIPTION_UNAVAILABLE.to_owned()
            }
        }
    }

    /// A short styling tip for wearing the named product.
    pub async fn styling_advice(&self, product_name: &str) -> String {
        let Some(client) = &self.client else {
            return ADVICE_NOT_CONFIGURED.to_owned();
        };

        let prompt = format!(
            "Act as a world-class fashion stylist for the Nigerian luxury brand \"Lara n Shen\". \
             Give a short, 2-sentence styling tip on how to wear the \"{product_name}\" for a \
             high-profile event in Lagos (like an Owambe or Gala). Suggest culturally relevant \
             accessories (like beads, headgear) or pairings."
        );

        match client.complete(&prompt).await {
            Ok(text) if text.is_empty() => ADVICE_EMPTY.to_owned(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "styling advice failed");
                ADVICE_UNAVAILABLE.to_owned()
            }
        }
    }
}
