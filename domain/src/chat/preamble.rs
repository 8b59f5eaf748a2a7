//! The fixed system preamble.

/// Persona message inserted once, at the start of a conversation's first
/// turn. Deployments can override it through the `[chat]` configuration
/// section; this is the built-in default.
pub const SHOPPING_ASSISTANT_PREAMBLE: &str = "You are a helpful shopping assistant for the storefront. \
Help customers with product questions, recommendations, and general inquiries. \
Be friendly and concise.";
