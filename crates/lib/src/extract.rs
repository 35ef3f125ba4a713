//! # Metadata Extraction
//!
//! Fetches a live page and derives a complete [`MetadataResult`] from it.
//! The page fetch itself is fatal on failure, but every follow-up probe
//! (robots.txt, sitemap paths) degrades field-by-field instead of aborting
//! the request.

use crate::{errors::MetadataError, probes, types::MetadataResult};
use metalens_html::{self as html, Html, MetaAttr};
use reqwest::Client;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Identifying user agent sent with the page fetch and every probe.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; MetaLens/1.0; +https://metalens.dev)";

/// Upper bound on any single page or probe request.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

fn http_client() -> Result<Client, MetadataError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(MetadataError::ReqwestClientBuild)
}

/// Fetches `url` and extracts its SEO/social metadata.
///
/// Fails with [`MetadataError::FetchStatus`] when the target responds with a
/// non-success status and [`MetadataError::Fetch`] when the request cannot be
/// completed at all. Probe failures never fail the call; they only leave the
/// corresponding fields absent.
pub async fn fetch_metadata(url: &str) -> Result<MetadataResult, MetadataError> {
    let base_url = origin_of(url)?;
    let client = http_client()?;

    info!("Fetching metadata for: {url}");
    let response = client.get(url).send().await.map_err(MetadataError::Fetch)?;
    if !response.status().is_success() {
        return Err(MetadataError::FetchStatus {
            status: response.status(),
        });
    }
    let body = response.text().await.map_err(MetadataError::Fetch)?;

    // One synchronous parsing pass; the document tree is dropped before the
    // probes run so nothing non-Send lives across an await point.
    let mut metadata = parse_page(&body);

    let report = probes::probe_site(&client, &base_url).await;
    metadata.sitemap_url = report.sitemap_url;
    metadata.sitemap_exists = report.sitemap_exists;
    metadata.robots_txt_exists = report.robots_txt_exists;
    metadata.robots_txt_content = report.robots_txt_content;

    Ok(metadata)
}

/// The origin (scheme + authority) of the input URL, used as the base for
/// robots.txt and sitemap probes.
fn origin_of(url: &str) -> Result<String, MetadataError> {
    Ok(Url::parse(url)?.origin().ascii_serialization())
}

/// Extracts every page-derived field from the HTML body. The sitemap/robots
/// group is left at its defaults and filled in by the probes.
fn parse_page(body: &str) -> MetadataResult {
    let doc = Html::parse_document(body);
    let meta = |key: &str| html::meta_content(&doc, key, MetaAttr::Name);
    let og = |key: &str| html::meta_content(&doc, key, MetaAttr::Property);
    let link = |rel: &str| html::link_href(&doc, rel);

    let alternates = html::alternate_links(&doc);

    MetadataResult {
        // Basic SEO
        title: html::page_title(&doc),
        description: meta("description"),
        keywords: meta("keywords"),
        author: meta("author"),
        generator: meta("generator"),
        theme_color: meta("theme-color"),

        // Open Graph
        og_title: og("og:title"),
        og_description: og("og:description"),
        og_image: og("og:image"),
        og_image_width: og("og:image:width"),
        og_image_height: og("og:image:height"),
        og_image_alt: og("og:image:alt"),
        og_url: og("og:url"),
        og_type: og("og:type"),
        og_site_name: og("og:site_name"),
        og_locale: og("og:locale"),
        og_video: og("og:video"),
        og_audio: og("og:audio"),

        // Facebook
        fb_app_id: og("fb:app_id"),
        fb_pages: og("fb:pages"),
        fb_domain_verification: meta("facebook-domain-verification"),

        // Twitter Cards
        twitter_card: meta("twitter:card"),
        twitter_title: meta("twitter:title"),
        twitter_description: meta("twitter:description"),
        twitter_image: meta("twitter:image"),
        twitter_image_alt: meta("twitter:image:alt"),
        twitter_site: meta("twitter:site"),
        twitter_creator: meta("twitter:creator"),
        twitter_domain_verification: meta("twitter:domain-verification"),

        // Technical
        canonical_url: link("canonical"),
        robots: meta("robots"),
        viewport: meta("viewport"),
        charset: html::charset(&doc),
        language: html::html_lang(&doc),
        favicon: link("icon").or_else(|| link("shortcut icon")),
        apple_touch_icon: link("apple-touch-icon"),
        manifest: link("manifest"),

        // Article specific
        article_published_time: og("article:published_time"),
        article_modified_time: og("article:modified_time"),
        article_author: og("article:author"),
        article_section: og("article:section"),
        article_tags: og("article:tag"),

        // Additional SEO
        alternate_urls: (!alternates.is_empty()).then_some(alternates),
        prev_page: link("prev"),
        next_page: link("next"),
        rating: meta("rating"),
        referrer: meta("referrer"),

        // Discord previews mirror Open Graph, falling back to the generic
        // meta tags for title/description only.
        discord_title: og("og:title").or_else(|| meta("title")),
        discord_description: og("og:description").or_else(|| meta("description")),
        discord_image: og("og:image"),
        discord_type: og("og:type"),

        // Slack previews, same derivation.
        slack_title: og("og:title").or_else(|| meta("title")),
        slack_description: og("og:description").or_else(|| meta("description")),
        slack_image: og("og:image"),
        slack_type: og("og:type"),

        ..Default::default()
    }
}
