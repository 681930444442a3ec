//! Fetch plans for curated collections.
//!
//! A plan is a list of primary song searches, an optional fallback search and
//! an optional cap. Results are merged in query order and de-duplicated by
//! track id (first occurrence wins).

use cadence_core::{CuratedCollection, TrackRef};
use std::collections::HashSet;

/// One `/search/songs` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongQuery {
    /// Free-text query
    pub query: &'static str,
    /// Requested page size
    pub limit: usize,
}

impl SongQuery {
    const fn new(query: &'static str, limit: usize) -> Self {
        Self { query, limit }
    }
}

/// When a plan's fallback query is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackRule {
    /// Only when the primaries produced nothing
    WhenEmpty,
    /// When the primaries produced fewer than `n` tracks
    WhenFewerThan(usize),
}

impl FallbackRule {
    /// Whether the fallback should fire for `found` merged tracks.
    pub fn applies(self, found: usize) -> bool {
        match self {
            FallbackRule::WhenEmpty => found == 0,
            FallbackRule::WhenFewerThan(n) => found < n,
        }
    }
}

/// How a curated collection is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    /// Queries merged in order
    pub primaries: Vec<SongQuery>,
    /// Fallback query and the rule that triggers it
    pub fallback: Option<(SongQuery, FallbackRule)>,
    /// Maximum number of tracks kept
    pub cap: Option<usize>,
}

impl FetchPlan {
    fn single(primary: SongQuery, fallback: SongQuery) -> Self {
        Self {
            primaries: vec![primary],
            fallback: Some((fallback, FallbackRule::WhenEmpty)),
            cap: None,
        }
    }

    /// Truncate to the plan's cap, if any.
    pub fn apply_cap(&self, tracks: &mut Vec<TrackRef>) {
        if let Some(cap) = self.cap {
            tracks.truncate(cap);
        }
    }
}

/// Plan for a curated collection.
pub fn plan_for(collection: CuratedCollection) -> FetchPlan {
    match collection {
        CuratedCollection::Trending => FetchPlan::single(
            SongQuery::new("latest hits", 100),
            SongQuery::new("popular english", 100),
        ),
        CuratedCollection::ModernHits => FetchPlan::single(
            SongQuery::new("trending indian songs 2023", 20),
            SongQuery::new("viral indian hits 2023", 20),
        ),
        CuratedCollection::Haryanvi => FetchPlan::single(
            SongQuery::new("haryanvi popular", 20),
            SongQuery::new("haryanvi songs", 20),
        ),
        CuratedCollection::PunjabiHits => FetchPlan::single(
            SongQuery::new("punjabi hits popular", 25),
            SongQuery::new("punjabi songs", 25),
        ),
        CuratedCollection::Romantic => FetchPlan {
            primaries: vec![
                SongQuery::new("romantic bollywood songs", 20),
                SongQuery::new("hindi love songs", 15),
            ],
            fallback: Some((
                SongQuery::new("best romantic songs indian", 20),
                FallbackRule::WhenFewerThan(15),
            )),
            cap: None,
        },
        CuratedCollection::NewReleases => FetchPlan {
            primaries: vec![
                SongQuery::new("new hindi releases 2023", 15),
                SongQuery::new("new punjabi releases 2023", 10),
                SongQuery::new("new haryanvi releases 2023", 10),
            ],
            fallback: Some((
                SongQuery::new("latest indian hits", 30),
                FallbackRule::WhenEmpty,
            )),
            cap: None,
        },
        CuratedCollection::Top100 => FetchPlan {
            primaries: vec![
                SongQuery::new("top hindi romantic songs", 25),
                SongQuery::new("top 50 hindi songs 2023", 25),
            ],
            fallback: Some((
                SongQuery::new("best hindi songs all time", 50),
                FallbackRule::WhenFewerThan(10),
            )),
            cap: Some(50),
        },
    }
}

/// Append `incoming` to `merged`, skipping ids already present.
pub fn merge_unique(merged: &mut Vec<TrackRef>, incoming: Vec<TrackRef>) {
    let mut seen: HashSet<String> = merged.iter().map(|track| track.id.clone()).collect();
    for track in incoming {
        if seen.insert(track.id.clone()) {
            merged.push(track);
        }
    }
}
