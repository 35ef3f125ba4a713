//! # AI Response Recovery & Reconciliation
//!
//! Two defensive steps between the model and the caller:
//!
//! - [`recover_json`] salvages a JSON object from raw model output that may
//!   be wrapped in code fences or surrounded by prose.
//! - [`reconcile`] pins every verifiable technical field of the generated
//!   metadata back to the extracted ground truth, so the model can never
//!   fabricate image URLs, icons, canonical links, or sitemap state.

use crate::errors::MetadataError;
use crate::types::{AiAnalysis, AiPayload, GeneratedMetadata, Importance, MetadataResult, MissingField};
use regex::Regex;
use serde_json::Value;

const OG_IMAGE_REASON: &str = "Social media platforms require images for rich previews. Without an OG image, your links will appear as plain text, significantly reducing click-through rates.";
const OG_IMAGE_RECOMMENDATION: &str = "Create a 1200x630px image (aspect ratio 1.91:1) featuring your logo, primary message, and brand colors. Optimal file size: under 8MB. Formats: JPG or PNG. Tools: Canva, Figma, or Adobe Express. Ensure text is readable when scaled down to thumbnail size.";

const TWITTER_IMAGE_REASON: &str = "Twitter uses its own image tag for card previews. Falls back to OG image, but dedicated Twitter images can be optimized for the platform.";
const TWITTER_IMAGE_RECOMMENDATION: &str = "Use the same 1200x630px image as OG image, or create a Twitter-specific version optimized for the platform's audience. Consider adding Twitter handle or hashtag to the image.";

const FAVICON_REASON: &str = "Favicon appears in browser tabs, bookmarks, and mobile home screens. Missing favicon makes your site look unprofessional.";
const FAVICON_RECOMMENDATION: &str = "Create a 32x32px (minimum) or 512x512px (recommended) square icon in ICO, PNG, or SVG format. Use your logo or brand mark. Ensure it's recognizable at small sizes. Generate multiple sizes (16x16, 32x32, 192x192, 512x512) for best cross-platform support.";

/// Recovers a well-formed JSON object from raw model output.
///
/// Best-effort single pass: strip code-fence markers, trim, then take the
/// outermost `{...}` span if one exists (models like to add prose around the
/// object). Fails with [`MetadataError::InvalidAiJson`] when nothing
/// parseable remains.
pub fn recover_json(raw: &str) -> Result<Value, MetadataError> {
    let fence = Regex::new(r"```(?:json)?")?;
    let stripped = fence.replace_all(raw, "");
    let trimmed = stripped.trim();

    let candidate = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    };

    serde_json::from_str(candidate).map_err(MetadataError::InvalidAiJson)
}

/// Recovers and deserializes the model's output into an [`AiPayload`].
pub fn parse_ai_payload(raw: &str) -> Result<AiPayload, MetadataError> {
    let value = recover_json(raw)?;
    serde_json::from_value(value).map_err(MetadataError::InvalidAiJson)
}

/// Merges generated metadata against the extracted ground truth, in place.
///
/// Three field-level policies, applied only when `existing` is present:
///
/// - **always take extracted** — assets, icons, canonical/sitemap state,
///   pagination and alternates come from the live page, whatever the model
///   said;
/// - **extracted ogUrl, else extracted canonical** — for `ogUrl`;
/// - **rederive from generated OG** — Discord/Slack title, description and
///   type follow the model's improved copy, while their image stays pinned
///   to the page's real `ogImage`.
///
/// Afterwards the three asset advisories (ogImage, twitterImage, favicon)
/// are appended to `missingFields` when the page lacks the asset, deduped by
/// field name so reconciliation is idempotent. The sitemap/robots booleans
/// are plain `bool`s, so they are always defined regardless of `existing`.
pub fn reconcile(generated: &mut GeneratedMetadata, existing: Option<&MetadataResult>) {
    let Some(existing) = existing else {
        return;
    };
    let meta = &mut generated.metadata;

    // Always take extracted.
    meta.og_image = existing.og_image.clone();
    meta.og_image_width = existing.og_image_width.clone();
    meta.og_image_height = existing.og_image_height.clone();
    meta.twitter_image = existing.twitter_image.clone();
    meta.favicon = existing.favicon.clone();
    meta.apple_touch_icon = existing.apple_touch_icon.clone();
    meta.manifest = existing.manifest.clone();
    meta.canonical_url = existing.canonical_url.clone();
    meta.sitemap_url = existing.sitemap_url.clone();
    meta.sitemap_exists = existing.sitemap_exists;
    meta.robots_txt_exists = existing.robots_txt_exists;
    meta.robots_txt_content = existing.robots_txt_content.clone();
    meta.alternate_urls = existing.alternate_urls.clone();
    meta.prev_page = existing.prev_page.clone();
    meta.next_page = existing.next_page.clone();

    // Extracted ogUrl, falling back to the extracted canonical.
    meta.og_url = existing
        .og_url
        .clone()
        .or_else(|| existing.canonical_url.clone());

    // Rederive the Discord/Slack previews from the generated OG copy; the
    // image is pinned to the page's real ogImage.
    meta.discord_title = meta.og_title.clone();
    meta.discord_description = meta.og_description.clone();
    meta.discord_image = existing.og_image.clone();
    meta.discord_type = meta.og_type.clone();
    meta.slack_title = meta.og_title.clone();
    meta.slack_description = meta.og_description.clone();
    meta.slack_image = existing.og_image.clone();
    meta.slack_type = meta.og_type.clone();

    if let Some(analysis) = generated.ai_analysis.as_mut() {
        if existing.og_image.is_none() {
            push_advisory(
                analysis,
                "ogImage",
                Importance::Critical,
                OG_IMAGE_REASON,
                OG_IMAGE_RECOMMENDATION,
            );
        }
        if existing.twitter_image.is_none() {
            push_advisory(
                analysis,
                "twitterImage",
                Importance::High,
                TWITTER_IMAGE_REASON,
                TWITTER_IMAGE_RECOMMENDATION,
            );
        }
        if existing.favicon.is_none() {
            push_advisory(
                analysis,
                "favicon",
                Importance::Medium,
                FAVICON_REASON,
                FAVICON_RECOMMENDATION,
            );
        }
    }
}

/// Appends a canned missing-field advisory unless one for that field is
/// already present.
fn push_advisory(
    analysis: &mut AiAnalysis,
    field: &str,
    importance: Importance,
    reason: &str,
    recommendation: &str,
) {
    if analysis.missing_fields.iter().any(|f| f.field == field) {
        return;
    }
    analysis.missing_fields.push(MissingField {
        field: field.to_string(),
        importance,
        reason: reason.to_string(),
        recommendation: recommendation.to_string(),
    });
}
