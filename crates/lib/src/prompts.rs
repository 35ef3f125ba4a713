//! # Prompt Templates
//!
//! The instructional prompt sent to the AI provider, plus the builder that
//! frames it with either the page's extracted metadata or a free-text
//! request. The template itself carries the policy that matters most
//! downstream: the model must never invent asset URLs and must answer with a
//! single bare JSON object.

use crate::types::MetadataResult;

/// The base instruction set for metadata generation.
///
/// Documents the exact JSON shape the model has to return, which is what
/// [`crate::parse_ai_payload`] deserializes.
pub const BASE_PROMPT: &str = r##"You are an expert SEO consultant and metadata specialist. Analyze the webpage content and existing metadata, then provide:

1. **Complete optimized metadata** following best practices
2. **Detailed analysis** of what's missing or needs improvement
3. **Actionable recommendations** with clear reasoning

CRITICAL RULES:
- For images (ogImage, twitterImage, favicon, etc): NEVER generate fake URLs or placeholder values
- Instead, provide recommendations like: "Should be a 1200x630px image showcasing [description]"
- Only include actual image URLs if they exist in the current metadata
- Be specific and actionable in all recommendations
- Consider the actual page content and context

Return ONLY valid JSON (no markdown, no code blocks) with this exact structure:
{
  "metadata": {
    "title": "Compelling, keyword-rich title (50-60 chars)",
    "description": "Persuasive meta description with clear value prop (150-160 chars)",
    "keywords": "primary keyword, secondary keyword, long-tail keyword",
    "author": "Author name if applicable",
    "generator": "Generator if applicable",
    "themeColor": "#hex-color for brand",

    "ogTitle": "Engaging OG title (may differ from SEO title)",
    "ogDescription": "Compelling OG description (may differ from meta)",
    "ogImage": null,
    "ogImageWidth": null,
    "ogImageHeight": null,
    "ogImageAlt": "Descriptive alt text for OG image",
    "ogUrl": "canonical URL",
    "ogType": "website or article",
    "ogSiteName": "Brand/site name",
    "ogLocale": "en_US or appropriate locale",
    "ogVideo": null,
    "ogAudio": null,

    "fbAppId": null,
    "fbPages": null,
    "fbDomainVerification": null,

    "twitterCard": "summary_large_image",
    "twitterTitle": "Twitter-optimized title",
    "twitterDescription": "Twitter-optimized description",
    "twitterImage": null,
    "twitterImageAlt": "Descriptive alt text for Twitter image",
    "twitterSite": "@username if applicable",
    "twitterCreator": "@username if applicable",
    "twitterDomainVerification": null,

    "canonicalUrl": "canonical URL",
    "robots": "index, follow",
    "viewport": "width=device-width, initial-scale=1",
    "charset": "UTF-8",
    "language": "en or appropriate lang code",
    "favicon": null,
    "appleTouchIcon": null,
    "manifest": null,

    "articlePublishedTime": null,
    "articleModifiedTime": null,
    "articleAuthor": null,
    "articleSection": null,
    "articleTags": null,

    "alternateUrls": null,
    "prevPage": null,
    "nextPage": null,
    "rating": null,
    "referrer": "origin-when-cross-origin",

    "discordTitle": "same as ogTitle",
    "discordDescription": "same as ogDescription",
    "discordImage": null,
    "discordType": "same as ogType",
    "slackTitle": "same as ogTitle",
    "slackDescription": "same as ogDescription",
    "slackImage": null,
    "slackType": "same as ogType"
  },

  "aiAnalysis": {
    "missingFields": [
      {
        "field": "ogImage",
        "importance": "critical",
        "reason": "Social media platforms will not display rich previews without an image",
        "recommendation": "Create a 1200x630px image with your logo, key message, and brand colors. Use tools like Canva or Figma. Image should be under 8MB and in JPG/PNG format."
      }
    ],
    "improvements": [
      "Current title is too generic - make it more specific and include primary keyword",
      "Description lacks a clear call-to-action",
      "Missing structured data (JSON-LD) for better search appearance"
    ],
    "seoScore": 75,
    "summary": "Overall assessment and priority actions"
  }
}"##;

/// Builds the full prompt for one generation request.
///
/// Pure. Produces one of three deterministic templates: base + existing
/// metadata framing when extraction succeeded, base + user request framing
/// when only a free-text prompt was given, or the bare base as a defensive
/// default.
pub fn build_prompt(existing: Option<&MetadataResult>, user_prompt: Option<&str>) -> String {
    if let Some(existing) = existing {
        let serialized = serde_json::to_string_pretty(existing).unwrap_or_default();
        return format!(
            r#"{BASE_PROMPT}

**CURRENT PAGE METADATA:**
{serialized}

**YOUR TASK:**
1. Analyze what's missing, weak, or incorrect
2. Generate IMPROVED versions of all fields
3. Provide specific, actionable recommendations
4. For images: describe what SHOULD be there, don't generate fake URLs
5. Explain WHY each change improves SEO/social sharing
6. Give a realistic SEO score and improvement roadmap

Focus on:
- Making titles more compelling and click-worthy
- Writing descriptions that drive action
- Ensuring all critical fields for social sharing are optimized
- Identifying technical SEO issues
- Providing clear next steps for the user"#
        );
    }

    if let Some(prompt) = user_prompt {
        return format!(
            r#"{BASE_PROMPT}

**USER REQUEST:**
{prompt}

**YOUR TASK:**
Generate complete, professional metadata for a webpage about: "{prompt}"

Consider:
- Target audience and search intent
- Competitive keywords
- Social media best practices
- Technical SEO requirements
- Brand voice and tone

Provide actionable recommendations for each field, especially for images and technical setup."#
        );
    }

    BASE_PROMPT.to_string()
}
