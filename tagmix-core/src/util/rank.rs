use std::cmp::Ordering;

use tagmix_entities::playlist::*;

pub trait Popular {
    fn cmp_popularity(&self, other: &Self) -> Ordering;
}

impl Popular for Counters {
    // Plays first, likes break the tie.
    fn cmp_popularity(&self, other: &Self) -> Ordering {
        self.plays
            .cmp(&other.plays)
            .then_with(|| self.likes.cmp(&other.likes))
    }
}

impl Popular for Playlist {
    fn cmp_popularity(&self, other: &Self) -> Ordering {
        self.counters.cmp_popularity(&other.counters)
    }
}

/// Sorts the most popular items first.
///
/// The sort is stable, i.e. items that are equally popular
/// keep their relative order.
pub fn sort_by_popularity_desc<T: Popular>(items: &mut [T]) {
    items.sort_by(|a, b| b.cmp_popularity(a));
}
