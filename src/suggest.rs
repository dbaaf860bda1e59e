//! Suggestion matching over the fixed catalogs.
//!
//! Matching is deliberately plain: case-insensitive substring filters plus a
//! fixed relevance boost for skills. No fuzzy matching, no learned ranking.
//! Every lookup simulates a bounded network delay so callers see the same
//! async behavior as a hosted suggestion API; tests construct the matcher
//! with the delay disabled.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rand::Rng;

use crate::catalog::{self, CATEGORY_BOOST, JOB_TITLES, PLACES, SKILLS, TITLE_KEYWORD_BOOSTS};
use crate::models::{JobTitleSuggestion, LatLng, LocationSuggestion, SkillSuggestion};

const TITLE_BROWSE_LIMIT: usize = 20;
const TITLE_MATCH_LIMIT: usize = 15;
const SKILL_MATCH_LIMIT: usize = 12;
const PLACE_BROWSE_LIMIT: usize = 10;
const PLACE_MATCH_LIMIT: usize = 8;
const POPULAR_PER_CATEGORY: usize = 3;
const POPULAR_CATEGORY_LIMIT: usize = 10;
const POPULAR_LIMIT: usize = 15;

const TITLE_DELAY_MS: u64 = 300;
const SKILL_DELAY_MS: u64 = 200;
const PLACE_DELAY_MS: u64 = 300;

impl From<&catalog::JobTitle> for JobTitleSuggestion {
    fn from(entry: &catalog::JobTitle) -> Self {
        JobTitleSuggestion {
            title: entry.title.to_string(),
            category: entry.category.to_string(),
            description: entry.description.to_string(),
        }
    }
}

impl From<&catalog::Place> for LocationSuggestion {
    fn from(entry: &catalog::Place) -> Self {
        LocationSuggestion {
            place_id: entry.place_id.to_string(),
            description: entry.description.to_string(),
            formatted_address: entry.formatted_address.to_string(),
            types: entry.types.iter().map(|t| t.to_string()).collect(),
            geometry: Some(LatLng {
                lat: entry.lat,
                lng: entry.lng,
            }),
        }
    }
}

pub struct Suggester {
    simulate_latency: bool,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new()
    }
}

impl Suggester {
    pub fn new() -> Self {
        Self {
            simulate_latency: true,
        }
    }

    /// Matcher with the simulated delay disabled. Results are identical;
    /// only the suspension before returning is skipped.
    pub fn instant() -> Self {
        Self {
            simulate_latency: false,
        }
    }

    async fn delay(&self, base_ms: u64) {
        if !self.simulate_latency {
            return;
        }
        let jitter = rand::thread_rng().gen_range(0..=100);
        tokio::time::sleep(Duration::from_millis(base_ms + jitter)).await;
    }

    /// Job-title completions. Empty query returns the browse default (first
    /// 20 catalog entries); otherwise substring match on title, category, or
    /// description, in catalog order, truncated to 15.
    pub async fn job_titles(&self, query: &str) -> Vec<JobTitleSuggestion> {
        self.delay(TITLE_DELAY_MS).await;

        if query.trim().is_empty() {
            return JOB_TITLES
                .iter()
                .take(TITLE_BROWSE_LIMIT)
                .map(Into::into)
                .collect();
        }

        let needle = query.to_lowercase();
        JOB_TITLES
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.category.to_lowercase().contains(&needle)
                    || entry.description.to_lowercase().contains(&needle)
            })
            .take(TITLE_MATCH_LIMIT)
            .map(Into::into)
            .collect()
    }

    /// Skill completions, biased by the chosen job title. Derived relevance
    /// is base relevance plus a fixed boost when the title contains a keyword
    /// mapped to the skill's category, clamped to 1.0. Entries are sorted by
    /// derived relevance before the query filter runs, so the boost affects
    /// the ranking of the filtered subset too.
    pub async fn skills(&self, query: &str, job_title: &str) -> Vec<SkillSuggestion> {
        self.delay(SKILL_DELAY_MS).await;

        let title_lower = job_title.to_lowercase();
        let mut ranked: Vec<SkillSuggestion> = SKILLS
            .iter()
            .map(|entry| {
                let mut relevance = entry.relevance;
                for (keyword, category) in TITLE_KEYWORD_BOOSTS {
                    if title_lower.contains(keyword) && entry.category == *category {
                        relevance += CATEGORY_BOOST;
                    }
                }
                SkillSuggestion {
                    skill: entry.skill.to_string(),
                    category: entry.category.to_string(),
                    relevance: relevance.min(1.0),
                }
            })
            .collect();

        // Stable sort: ties keep catalog order.
        ranked.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let needle = query.to_lowercase();
        if !query.trim().is_empty() {
            ranked.retain(|entry| {
                entry.skill.to_lowercase().contains(&needle)
                    || entry.category.to_lowercase().contains(&needle)
            });
        }

        ranked.truncate(SKILL_MATCH_LIMIT);
        ranked
    }

    /// Location completions from the static catalog. Empty query returns the
    /// first 10 entries; otherwise substring match on description or
    /// formatted address, truncated to 8.
    pub async fn locations(&self, query: &str) -> Vec<LocationSuggestion> {
        self.delay(PLACE_DELAY_MS).await;

        if query.trim().is_empty() {
            return PLACES
                .iter()
                .take(PLACE_BROWSE_LIMIT)
                .map(Into::into)
                .collect();
        }

        let needle = query.to_lowercase();
        PLACES
            .iter()
            .filter(|entry| {
                entry.description.to_lowercase().contains(&needle)
                    || entry.formatted_address.to_lowercase().contains(&needle)
            })
            .take(PLACE_MATCH_LIMIT)
            .map(Into::into)
            .collect()
    }

    /// Popular titles for browse surfaces: all of one category, or a spread
    /// of the first few titles from every category.
    pub async fn popular_job_titles(&self, category: Option<&str>) -> Vec<JobTitleSuggestion> {
        self.delay(SKILL_DELAY_MS).await;

        if let Some(category) = category {
            return JOB_TITLES
                .iter()
                .filter(|entry| entry.category == category)
                .take(POPULAR_CATEGORY_LIMIT)
                .map(Into::into)
                .collect();
        }

        let mut categories: Vec<&str> = Vec::new();
        for entry in JOB_TITLES {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }

        let mut popular: Vec<JobTitleSuggestion> = Vec::new();
        for category in categories {
            popular.extend(
                JOB_TITLES
                    .iter()
                    .filter(|entry| entry.category == category)
                    .take(POPULAR_PER_CATEGORY)
                    .map(Into::<JobTitleSuggestion>::into),
            );
        }

        popular.truncate(POPULAR_LIMIT);
        popular
    }
}

// --- Last-query-wins guard ---

/// Tracks the newest suggestion query issued for one input field. Overlapping
/// lookups may resolve out of order; a result is only rendered if its ticket
/// is still the latest one issued. Catalogs are read-only, so no further
/// coordination is needed.
#[derive(Debug, Default)]
pub struct QuerySequence {
    latest: AtomicU64,
}

impl QuerySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new query, superseding all earlier tickets.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Run a lookup under a fresh ticket. Returns `None` when a newer query
    /// was issued while this one was in flight; the stale result must not be
    /// rendered.
    pub async fn run_latest<T, F>(&self, lookup: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let ticket = self.issue();
        let result = lookup.await;
        self.is_current(ticket).then_some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_query_browse_defaults() {
        let suggester = Suggester::instant();
        assert_eq!(suggester.job_titles("").await.len(), 20);
        assert_eq!(suggester.job_titles("   ").await.len(), 20);
        assert_eq!(suggester.locations("").await.len(), 10);
    }

    #[tokio::test]
    async fn test_substring_match_includes_entry() {
        let suggester = Suggester::instant();
        let results = suggester.job_titles("plumb").await;
        assert!(results
            .iter()
            .any(|s| s.title == "Plumber" && s.category == "Trades"));
    }

    #[tokio::test]
    async fn test_match_is_case_insensitive() {
        let suggester = Suggester::instant();
        let lower = suggester.job_titles("plumber").await;
        let upper = suggester.job_titles("PLUMBER").await;
        assert_eq!(lower, upper);
        assert!(!lower.is_empty());
    }

    #[tokio::test]
    async fn test_no_match_returns_empty() {
        let suggester = Suggester::instant();
        assert!(suggester.job_titles("xyz123notfound").await.is_empty());
        assert!(suggester.locations("xyz123notfound").await.is_empty());
        assert!(suggester.skills("xyz123notfound", "").await.is_empty());
    }

    #[tokio::test]
    async fn test_truncation_bounds() {
        let suggester = Suggester::instant();
        // "e" matches most of the catalog; the limits must still hold.
        assert!(suggester.job_titles("e").await.len() <= 15);
        assert!(suggester.skills("a", "").await.len() <= 12);
        assert!(suggester.locations("a").await.len() <= 8);
    }

    #[tokio::test]
    async fn test_titles_keep_catalog_order() {
        let suggester = Suggester::instant();
        let results = suggester.job_titles("developer").await;
        let positions: Vec<usize> = results
            .iter()
            .map(|s| {
                JOB_TITLES
                    .iter()
                    .position(|e| e.title == s.title)
                    .expect("result not in catalog")
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[tokio::test]
    async fn test_skill_boost_is_monotonic() {
        let suggester = Suggester::instant();
        let plain = suggester.skills("", "").await;
        let hinted = suggester.skills("", "Software Developer").await;

        let base = plain
            .iter()
            .find(|s| s.skill == "JavaScript")
            .expect("JavaScript in unfiltered results")
            .relevance;
        let boosted = hinted
            .iter()
            .find(|s| s.skill == "JavaScript")
            .expect("JavaScript in hinted results")
            .relevance;
        assert!(boosted >= base);
        assert!(boosted <= 1.0);
    }

    #[tokio::test]
    async fn test_developer_hint_ranks_programming_first() {
        let suggester = Suggester::instant();
        let results = suggester.skills("", "Software Developer").await;
        // All Programming skills clamp to 1.0 and outrank everything else;
        // ties keep catalog order.
        assert_eq!(results[0].skill, "JavaScript");
        assert_eq!(results[1].skill, "Python");
        assert_eq!(results[2].skill, "TypeScript");
    }

    #[tokio::test]
    async fn test_boost_applies_before_query_filter() {
        let suggester = Suggester::instant();
        let results = suggester.skills("script", "Software Developer").await;
        // Both match "script" and both are boosted to 1.0, so the tie keeps
        // catalog order: JavaScript before TypeScript.
        let js = results
            .iter()
            .position(|s| s.skill == "JavaScript")
            .expect("JavaScript matches 'script'");
        let ts = results
            .iter()
            .position(|s| s.skill == "TypeScript")
            .expect("TypeScript matches 'script'");
        assert!(js < ts);
        assert!((results[js].relevance - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_manager_hint_boosts_business() {
        let suggester = Suggester::instant();
        let results = suggester.skills("", "Project Manager").await;
        let pm = results
            .iter()
            .find(|s| s.skill == "Project Management")
            .expect("Project Management present");
        assert!((pm.relevance - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_location_matches_address_or_description() {
        let suggester = Suggester::instant();
        let results = suggester.locations("remote").await;
        assert!(results.iter().any(|l| l.description == "Remote"));
        let results = suggester.locations("tx").await;
        assert!(results.iter().all(|l| l.formatted_address.contains("TX")));
        assert!(!results.is_empty());
    }

    #[tokio::test]
    async fn test_popular_titles_by_category() {
        let suggester = Suggester::instant();
        let trades = suggester.popular_job_titles(Some("Trades")).await;
        assert!(!trades.is_empty());
        assert!(trades.len() <= 10);
        assert!(trades.iter().all(|t| t.category == "Trades"));

        let spread = suggester.popular_job_titles(None).await;
        assert!(spread.len() <= 15);
        // No category dominates the spread.
        let tech = spread.iter().filter(|t| t.category == "Technology").count();
        assert!(tech <= 3);
    }

    #[tokio::test]
    async fn test_stale_ticket_is_discarded() {
        let seq = QuerySequence::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[tokio::test]
    async fn test_run_latest_drops_superseded_result() {
        let seq = QuerySequence::new();
        let suggester = Suggester::instant();

        // A newer query arrives while the first lookup is suspended.
        let result = seq
            .run_latest(async {
                seq.issue();
                suggester.job_titles("plumb").await
            })
            .await;
        assert!(result.is_none());

        // With no interleaving query the result is delivered.
        let result = seq.run_latest(suggester.job_titles("plumb")).await;
        assert!(result.is_some());
    }
}
