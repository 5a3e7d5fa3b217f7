//! Deterministic demo link-profile metrics.
//!
//! Everything is derived from a 32-bit rolling hash of the domain string, so
//! the same domain always yields the same numbers. None of this is real
//! backlink data.

use crate::domain::model::{AnchorEntry, BacklinkData, ReferrerEntry};

pub const REFERRER_POOL: [&str; 10] = [
    "wikipedia.org",
    "nytimes.com",
    "medium.com",
    "reddit.com",
    "github.com",
    "stackoverflow.com",
    "forbes.com",
    "techcrunch.com",
    "hubspot.com",
    "moz.com",
];

const TOP_REFERRERS: u64 = 5;

/// `hash = unit + (hash << 5) - hash` over UTF-16 code units, wrapping at 32 bits.
pub fn domain_hash(domain: &str) -> i32 {
    domain.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

pub fn generate_mock_backlink_data(domain: &str) -> BacklinkData {
    let seed = u64::from(domain_hash(domain).unsigned_abs());

    let domain_authority = seed % 90 + 5;
    let page_authority = (domain_authority + seed % 10).min(99);
    let total_backlinks = seed % 50_000 + 100;
    let referring_domains = total_backlinks / (seed % 20 + 5);

    let top_referrers = (0..TOP_REFERRERS)
        .map(|i| referrer_entry(seed + i))
        .collect();

    let brand = domain.split('.').next().unwrap_or(domain);
    let top_anchors = vec![
        anchor(domain, 35),
        anchor("click here", 15),
        anchor("website", 10),
        anchor("read more", 5),
        anchor(brand, 35),
    ];

    tracing::debug!(domain, seed, domain_authority, "generated mock backlink profile");

    // every value below is bounded by the moduli above, so the narrowing is lossless
    BacklinkData {
        domain_authority: domain_authority as u32,
        page_authority: page_authority as u32,
        total_backlinks: total_backlinks as u32,
        referring_domains: referring_domains as u32,
        dofollow_ratio: (seed % 40 + 40) as u32,
        spam_score: (seed % 15) as u32,
        top_anchors,
        top_referrers,
    }
}

fn referrer_entry(ref_seed: u64) -> ReferrerEntry {
    let total_links = ref_seed % 200 + 10;
    let dofollow_share = (ref_seed % 100) as f64 / 100.0;
    let dofollow_count = (total_links as f64 * dofollow_share).floor() as u64;

    ReferrerEntry {
        domain: REFERRER_POOL[(ref_seed % REFERRER_POOL.len() as u64) as usize].to_string(),
        authority: (90 - ref_seed % 40) as u32,
        dofollow_count: dofollow_count as u32,
        nofollow_count: (total_links - dofollow_count) as u32,
    }
}

fn anchor(text: &str, percent: u8) -> AnchorEntry {
    AnchorEntry {
        text: text.to_string(),
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_matches_string_hash_code() {
        assert_eq!(domain_hash(""), 0);
        assert_eq!(domain_hash("a"), 97);
        assert_eq!(domain_hash("ab"), 3105);
        // long enough to overflow 32 bits
        assert_eq!(domain_hash("hello world"), 1794106052);
        assert_eq!(domain_hash("polygenelubricants"), i32::MIN);
    }

    #[test]
    fn test_seed_from_min_hash_does_not_overflow() {
        let data = generate_mock_backlink_data("polygenelubricants");
        let seed = 2_147_483_648u64;
        assert_eq!(data.domain_authority as u64, seed % 90 + 5);
        assert_eq!(data.spam_score as u64, seed % 15);
    }

    #[test]
    fn test_same_domain_same_output() {
        let first = generate_mock_backlink_data("example.com");
        let second = generate_mock_backlink_data("example.com");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_different_domains_differ() {
        let a = generate_mock_backlink_data("example.com");
        let b = generate_mock_backlink_data("rust-lang.org");
        assert_ne!(a, b);
    }

    #[test]
    fn test_ranges() {
        for domain in ["", "a", "example.com", "rust-lang.org", "über.de", "x.y.z"] {
            let data = generate_mock_backlink_data(domain);
            assert!((5..=94).contains(&data.domain_authority));
            assert!(data.page_authority >= data.domain_authority);
            assert!(data.page_authority <= 99);
            assert!((100..50_100).contains(&data.total_backlinks));
            assert!((40..=79).contains(&data.dofollow_ratio));
            assert!(data.spam_score <= 14);
            assert_eq!(data.top_anchors.len(), 5);
            assert_eq!(data.top_referrers.len(), 5);
            for referrer in &data.top_referrers {
                assert!(REFERRER_POOL.contains(&referrer.domain.as_str()));
                assert!((51..=90).contains(&referrer.authority));
                let total = referrer.dofollow_count + referrer.nofollow_count;
                assert!((10..210).contains(&total));
            }
        }
    }

    #[test]
    fn test_anchors_use_domain_and_brand() {
        let data = generate_mock_backlink_data("example.com");
        let texts: Vec<&str> = data.top_anchors.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["example.com", "click here", "website", "read more", "example"]
        );
        let percents: Vec<u8> = data.top_anchors.iter().map(|a| a.percent).collect();
        assert_eq!(percents, vec![35, 15, 10, 5, 35]);
    }

    #[test]
    fn test_referrers_cycle_through_pool() {
        let data = generate_mock_backlink_data("a");
        // seed 97: pool indexes 7, 8, 9, 0, 1
        let domains: Vec<&str> = data.top_referrers.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(
            domains,
            vec!["techcrunch.com", "hubspot.com", "moz.com", "wikipedia.org", "nytimes.com"]
        );
        assert_eq!(data.domain_authority, 97 % 90 + 5);
        assert_eq!(data.page_authority, 12 + 7);
        assert_eq!(data.total_backlinks, 197);
        assert_eq!(data.referring_domains, 197 / 22);
        // refSeed 97: 107 links, floor(107 * 0.97) dofollow
        assert_eq!(data.top_referrers[0].authority, 90 - 17);
        assert_eq!(data.top_referrers[0].dofollow_count, 103);
        assert_eq!(data.top_referrers[0].nofollow_count, 4);
    }
}
