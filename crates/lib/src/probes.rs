//! # Sitemap & robots.txt Probing
//!
//! Sequential, fault-tolerant probes against a site's origin. A robots.txt
//! `Sitemap:` directive wins over the conventional paths, and within those
//! paths list order is the tie-break, so the sequence short-circuits at the
//! first success. Every probe failure is an explicit not-found outcome; none
//! of them can abort the extraction.

use regex::Regex;
use reqwest::Client;
use tracing::debug;

/// Conventional sitemap locations, probed in priority order when robots.txt
/// does not name one.
const SITEMAP_PATHS: [&str; 4] = [
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemap/",
    "/sitemap/sitemap.xml",
];

/// Outcome of one probe. Failures are data here, not control flow.
enum ProbeOutcome {
    Found(String),
    NotFound,
}

/// What the probes learned about the site.
#[derive(Debug, Default)]
pub(crate) struct SiteProbeReport {
    pub sitemap_url: Option<String>,
    pub sitemap_exists: bool,
    pub robots_txt_exists: bool,
    pub robots_txt_content: Option<String>,
}

pub(crate) async fn probe_site(client: &Client, base_url: &str) -> SiteProbeReport {
    let mut report = SiteProbeReport::default();

    if let Some(body) = fetch_robots_txt(client, base_url).await {
        report.robots_txt_exists = true;
        if let Some(sitemap_url) = sitemap_from_robots(&body) {
            report.sitemap_url = Some(sitemap_url);
            report.sitemap_exists = true;
        }
        report.robots_txt_content = Some(body);
    }

    if !report.sitemap_exists {
        for path in SITEMAP_PATHS {
            match probe_sitemap_path(client, base_url, path).await {
                ProbeOutcome::Found(url) => {
                    report.sitemap_url = Some(url);
                    report.sitemap_exists = true;
                    break;
                }
                ProbeOutcome::NotFound => continue,
            }
        }
    }

    report
}

async fn fetch_robots_txt(client: &Client, base_url: &str) -> Option<String> {
    let url = format!("{base_url}/robots.txt");
    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => response.text().await.ok(),
        Ok(response) => {
            debug!("robots.txt probe returned status {}", response.status());
            None
        }
        Err(e) => {
            debug!("robots.txt probe failed: {e}");
            None
        }
    }
}

async fn probe_sitemap_path(client: &Client, base_url: &str, path: &str) -> ProbeOutcome {
    let url = format!("{base_url}{path}");
    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => ProbeOutcome::Found(url),
        Ok(response) => {
            debug!("sitemap probe {url} returned status {}", response.status());
            ProbeOutcome::NotFound
        }
        Err(e) => {
            debug!("sitemap probe {url} failed: {e}");
            ProbeOutcome::NotFound
        }
    }
}

/// Scans robots.txt for a `Sitemap:` directive, any letter case. The first
/// match wins and the captured URL is trimmed.
fn sitemap_from_robots(robots_txt: &str) -> Option<String> {
    let directive = Regex::new(r"(?i)sitemap:\s*(.+)").ok()?;
    directive
        .captures(robots_txt)
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_directive_is_case_insensitive() {
        let robots = "User-agent: *\nDisallow:\nSITEMAP: https://x/sitemap.xml";
        assert_eq!(
            sitemap_from_robots(robots).as_deref(),
            Some("https://x/sitemap.xml")
        );
    }

    #[test]
    fn test_sitemap_directive_trims_and_stops_at_line_end() {
        let robots = "Sitemap:   https://x/sitemap.xml   \nUser-agent: *";
        assert_eq!(
            sitemap_from_robots(robots).as_deref(),
            Some("https://x/sitemap.xml")
        );
    }

    #[test]
    fn test_first_sitemap_directive_wins() {
        let robots = "Sitemap: https://x/first.xml\nSitemap: https://x/second.xml";
        assert_eq!(
            sitemap_from_robots(robots).as_deref(),
            Some("https://x/first.xml")
        );
    }

    #[test]
    fn test_no_sitemap_directive() {
        assert_eq!(sitemap_from_robots("User-agent: *\nDisallow: /"), None);
    }
}
