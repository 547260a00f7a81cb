/**
 * NeighborReco
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::cmp::Ordering;

use fnv::FnvHashMap;
use serde_derive::Serialize;

/// Sparse ratings of a single user, an absent item means "not rated"
pub type RatingVector = FnvHashMap<String, f64>;

pub type UserDatabase = FnvHashMap<String, RatingVector>;

pub type NeighborList = Vec<Neighbor>;

pub type RecommendationList = Vec<ScoredItem>;

pub fn new_rating_vector(capacity: usize) -> RatingVector {
    FnvHashMap::with_capacity_and_hasher(capacity, Default::default())
}

pub fn new_user_database(capacity: usize) -> UserDatabase {
    FnvHashMap::with_capacity_and_hasher(capacity, Default::default())
}

/// Another user together with its distance to the user we compute neighbors for.
#[derive(PartialEq,Debug,Clone)]
pub struct Neighbor {
    pub distance: f64,
    pub user: String,
}

/// Ascending by distance. There is no total order on floating point numbers, so we rely on
/// `total_cmp` and fall back to the user identifier for exactly equal distances.
fn cmp_by_distance(neighbor_a: &Neighbor, neighbor_b: &Neighbor) -> Ordering {
    neighbor_a.distance.total_cmp(&neighbor_b.distance)
        .then_with(|| neighbor_a.user.cmp(&neighbor_b.user))
}

impl Eq for Neighbor {}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_by_distance(self, other)
    }
}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_by_distance(self, other))
    }
}

/// A candidate item with its predicted rating. Field names will be used in JSON.
#[derive(PartialEq,Debug,Clone,Serialize)]
pub struct ScoredItem {
    pub item: String,
    pub score: f64,
}

/// Descending by score, so that sorting puts the best candidates first. Equal scores are
/// ordered by item identifier.
fn cmp_reverse(scored_item_a: &ScoredItem, scored_item_b: &ScoredItem) -> Ordering {
    scored_item_b.score.total_cmp(&scored_item_a.score)
        .then_with(|| scored_item_a.item.cmp(&scored_item_b.item))
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_reverse(self, other)
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_reverse(self, other))
    }
}


#[cfg(test)]
mod tests {

    use crate::types::{Neighbor, ScoredItem};

    fn neighbor(distance: f64, user: &str) -> Neighbor {
        Neighbor { distance, user: user.to_string() }
    }

    fn scored(item: &str, score: f64) -> ScoredItem {
        ScoredItem { item: item.to_string(), score }
    }

    #[test]
    fn neighbors_sort_ascending_by_distance() {
        let mut neighbors = vec![
            neighbor(4.5, "Dan"),
            neighbor(2.0, "Veronica"),
            neighbor(5.5, "Bill"),
        ];

        neighbors.sort();

        let users: Vec<&str> = neighbors.iter().map(|n| n.user.as_str()).collect();
        assert_eq!(users, vec!["Veronica", "Dan", "Bill"]);
    }

    #[test]
    fn neighbors_with_equal_distance_ordered_by_user() {
        assert!(neighbor(4.0, "Chan") < neighbor(4.0, "Sam"));
        assert!(neighbor(3.9, "Sam") < neighbor(4.0, "Chan"));
    }

    #[test]
    fn scored_item_ordering_reversed() {
        let item_a = scored("a", 0.5);
        let item_b = scored("b", 1.5);
        let item_c = scored("c", 0.3);

        assert!(item_a > item_b);
        assert!(item_a < item_c);
        assert!(item_b < item_c);
    }

    #[test]
    fn scored_items_with_equal_score_ordered_by_item() {
        let mut items = vec![scored("Phoenix", 3.0), scored("Deadmau5", 3.0), scored("Abba", 1.0)];
        items.sort();

        assert_eq!(items[0].item, "Deadmau5");
        assert_eq!(items[1].item, "Phoenix");
        assert_eq!(items[2].item, "Abba");
    }
}
