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
use crate::neighbors;
use crate::types::{RecommendationList, ScoredItem, UserDatabase};

/// Recommends the items rated by the single nearest neighbor of `user` which `user` has not
/// rated yet, scored with the neighbor's rating and sorted by descending score (equal scores
/// by item identifier).
///
/// Only the closest neighbor contributes. We neither aggregate over several neighbors nor
/// weight by distance, and the list is not truncated.
pub fn recommend(user: &str, users: &UserDatabase, metric: Metric) -> Result<RecommendationList> {

    let neighbors = neighbors::nearest_neighbors(user, users, metric)?;

    let nearest = neighbors.first()
        .ok_or_else(|| RecommenderError::NoNeighbors(user.to_string()))?;

    let neighbor_ratings = users.get(&nearest.user)
        .ok_or_else(|| RecommenderError::UnknownUser(nearest.user.clone()))?;
    let user_ratings = users.get(user)
        .ok_or_else(|| RecommenderError::UnknownUser(user.to_string()))?;

    let mut recommendations: RecommendationList = neighbor_ratings.iter()
        .filter(|(item, _)| !user_ratings.contains_key(*item))
        .map(|(item, rating)| ScoredItem { item: item.clone(), score: *rating })
        .collect();

    recommendations.sort();

    debug!("{} items recommended for {} from nearest neighbor {} at distance {}",
        recommendations.len(), user, nearest.user, nearest.distance);

    Ok(recommendations)
}
