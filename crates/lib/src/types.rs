//! # Data Model
//!
//! The shared shapes for both pipelines. Every string field is optional and
//! omitted from JSON when absent; the two sitemap/robots booleans are plain
//! `bool` with serde defaults, so they are always defined on the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The canonical extracted-metadata record for one webpage.
///
/// Constructed once per extraction, immutable afterwards. Field groups follow
/// the tag vocabularies they come from: basic SEO, Open Graph, Facebook,
/// Twitter Cards, technical tags, article tags, pagination/alternates, the
/// sitemap/robots probe results, and the Discord/Slack preview fields derived
/// from Open Graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataResult {
    // Basic SEO
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,

    // Open Graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_audio: Option<String>,

    // Facebook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_domain_verification: Option<String>,

    // Twitter Cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_domain_verification: Option<String>,

    // Technical
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    // Article specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_tags: Option<String>,

    // Additional SEO
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_urls: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,

    // Sitemap & robots.txt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap_url: Option<String>,
    pub sitemap_exists: bool,
    pub robots_txt_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots_txt_content: Option<String>,

    // Discord previews (mirror Open Graph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_type: Option<String>,

    // Slack previews (mirror Open Graph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_type: Option<String>,
}

/// How much a missing field hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
}

/// One advisory about a field the page should have but does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingField {
    pub field: String,
    pub importance: Importance,
    pub reason: String,
    pub recommendation: String,
}

/// The model's structured critique of the page's metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiAnalysis {
    pub missing_fields: Vec<MissingField>,
    pub improvements: Vec<String>,
    pub seo_score: u8,
    pub summary: String,
}

/// Improved metadata produced by the generator.
///
/// The only value in the system that is mutated after construction: the
/// reconciliation step overwrites its technical fields with extracted ground
/// truth before it is returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMetadata {
    #[serde(flatten)]
    pub metadata: MetadataResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
}

/// The wire shape the model is instructed to return.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiPayload {
    pub metadata: MetadataResult,
    pub ai_analysis: Option<AiAnalysis>,
}

impl From<AiPayload> for GeneratedMetadata {
    fn from(payload: AiPayload) -> Self {
        GeneratedMetadata {
            metadata: payload.metadata,
            ai_analysis: payload.ai_analysis,
        }
    }
}
