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

use tracing::debug;

use crate::error::{RecommenderError, Result};
use crate::metrics::Metric;
use crate::types::{Neighbor, NeighborList, UserDatabase};

/// Ranks all other users of the database by their distance to `user`, closest first. Users with
/// exactly the same distance are ordered by their identifier.
///
/// Fails with `UnknownUser` if `user` is not in the database, with `InvalidArgument` for an
/// invalid metric and with `NoNeighbors` if the database contains no other user.
pub fn nearest_neighbors(user: &str, users: &UserDatabase, metric: Metric) -> Result<NeighborList> {

    let ratings = users.get(user)
        .ok_or_else(|| RecommenderError::UnknownUser(user.to_string()))?;

    metric.validate()?;

    let mut neighbors: NeighborList = Vec::with_capacity(users.len().saturating_sub(1));

    for (other_user, other_ratings) in users.iter() {
        if other_user != user {
            let distance = metric.distance(other_ratings, ratings)?;
            neighbors.push(Neighbor { distance, user: other_user.clone() });
        }
    }

    if neighbors.is_empty() {
        return Err(RecommenderError::NoNeighbors(user.to_string()));
    }

    neighbors.sort();

    debug!("{} neighbors ranked for {} under {:?}", neighbors.len(), user, metric);

    Ok(neighbors)
}


#[cfg(test)]
mod tests {

    use approx::assert_abs_diff_eq;

    use crate::dataset::reference_ratings;
    use crate::error::RecommenderError;
    use crate::metrics::Metric;
    use crate::neighbors::nearest_neighbors;
    use crate::types::{self, RatingVector};

    #[test]
    fn ranked_by_manhattan_distance() {
        let users = reference_ratings();

        let neighbors = nearest_neighbors("Hailey", &users, Metric::Manhattan).unwrap();

        let ranking: Vec<(&str, f64)> = neighbors.iter()
            .map(|neighbor| (neighbor.user.as_str(), neighbor.distance))
            .collect();

        assert_eq!(ranking, vec![
            ("Veronica", 2.0),
            ("Chan", 4.0),
            ("Sam", 4.0),
            ("Dan", 4.5),
            ("Angelica", 5.0),
            ("Bill", 5.5),
            ("Jordyn", 7.5),
        ]);
    }

    #[test]
    fn sorted_and_excluding_the_user() {
        let users = reference_ratings();

        for user in users.keys() {
            let neighbors = nearest_neighbors(user, &users, Metric::euclidean()).unwrap();

            assert_eq!(neighbors.len(), users.len() - 1);
            assert!(neighbors.iter().all(|neighbor| &neighbor.user != user));
            assert!(neighbors.windows(2).all(|pair| pair[0].distance <= pair[1].distance));
        }
    }

    #[test]
    fn euclidean_nearest_neighbor() {
        let users = reference_ratings();

        let neighbors = nearest_neighbors("Hailey", &users, Metric::euclidean()).unwrap();

        assert_eq!(neighbors[0].user, "Veronica");
        assert_abs_diff_eq!(neighbors[0].distance, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn unknown_user() {
        let users = reference_ratings();

        match nearest_neighbors("Zoe", &users, Metric::Manhattan) {
            Err(RecommenderError::UnknownUser(user)) => assert_eq!(user, "Zoe"),
            other => panic!("expected UnknownUser, got {:?}", other),
        }
    }

    #[test]
    fn zero_exponent_rejected() {
        let users = reference_ratings();

        match nearest_neighbors("Hailey", &users, Metric::Minkowski(0.0)) {
            Err(RecommenderError::InvalidArgument(_)) => {},
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn single_user_database_has_no_neighbors() {
        let mut users = types::new_user_database(1);
        let mut ratings: RatingVector = types::new_rating_vector(1);
        ratings.insert(String::from("Phoenix"), 5.0);
        users.insert(String::from("Hailey"), ratings);

        match nearest_neighbors("Hailey", &users, Metric::Manhattan) {
            Err(RecommenderError::NoNeighbors(user)) => assert_eq!(user, "Hailey"),
            other => panic!("expected NoNeighbors, got {:?}", other),
        }
    }
}
