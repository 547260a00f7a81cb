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

use crate::error::{RecommenderError, Result};
use crate::types::RatingVector;

/// Selects the distance used to rank neighbors. Lower values mean more similar users.
#[derive(PartialEq,Debug,Clone,Copy)]
pub enum Metric {
    Manhattan,
    Minkowski(f64),
}

impl Metric {

    pub fn euclidean() -> Self {
        Metric::Minkowski(2.0)
    }

    /// Maps a user supplied exponent to a metric, an exponent of one is plain Manhattan distance.
    pub fn from_exponent(exponent: f64) -> Result<Self> {
        let metric = if exponent == 1.0 {
            Metric::Manhattan
        } else {
            Metric::Minkowski(exponent)
        };

        metric.validate()?;
        Ok(metric)
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Metric::Manhattan => Ok(()),
            Metric::Minkowski(exponent) => check_exponent(exponent),
        }
    }

    pub fn distance(&self, ratings_a: &RatingVector, ratings_b: &RatingVector) -> Result<f64> {
        match *self {
            Metric::Manhattan => Ok(manhattan(ratings_a, ratings_b)),
            Metric::Minkowski(exponent) => minkowski(ratings_a, ratings_b, exponent),
        }
    }
}

fn check_exponent(exponent: f64) -> Result<()> {
    if exponent == 0.0 || exponent.is_nan() {
        return Err(RecommenderError::InvalidArgument(
            format!("the Minkowski exponent must be a non-zero number, got {}", exponent)));
    }
    Ok(())
}

/// Pairs of ratings for the items rated by both users, ordered by item identifier. The order
/// does not depend on which of the two users comes first, so sums over these pairs are exactly
/// symmetric.
fn common_ratings(ratings_a: &RatingVector, ratings_b: &RatingVector) -> Vec<(f64, f64)> {

    let mut common: Vec<(&str, f64, f64)> = ratings_a.iter()
        .filter_map(|(item, rating_a)| {
            ratings_b.get(item).map(|rating_b| (item.as_str(), *rating_a, *rating_b))
        })
        .collect();

    common.sort_by(|(item_a, _, _), (item_b, _, _)| item_a.cmp(item_b));

    common.into_iter()
        .map(|(_, rating_a, rating_b)| (rating_a, rating_b))
        .collect()
}

/// Sum of absolute rating differences over the common items, zero if there are none.
pub fn manhattan(ratings_a: &RatingVector, ratings_b: &RatingVector) -> f64 {
    common_ratings(ratings_a, ratings_b).into_iter()
        .map(|(x, y)| (x - y).abs())
        .sum()
}

/// Minkowski distance with exponent `r` over the common items (`r = 1` is Manhattan, `r = 2`
/// Euclidean distance).
///
/// Returns exactly `0.0` if the users have no items in common. Note that this is
/// indistinguishable from identical ratings, callers have to check the overlap themselves if
/// they care. Fails with `InvalidArgument` for `r = 0`, for which the distance is undefined.
pub fn minkowski(ratings_a: &RatingVector, ratings_b: &RatingVector, r: f64) -> Result<f64> {

    check_exponent(r)?;

    let mut sum = 0.0;
    let mut has_common_ratings = false;

    for (x, y) in common_ratings(ratings_a, ratings_b).into_iter() {
        sum += (x - y).abs().powf(r);
        has_common_ratings = true;
    }

    if has_common_ratings {
        Ok(sum.powf(1.0 / r))
    } else {
        Ok(0.0)
    }
}

/// Pearson correlation coefficient over the common items, computed from running sums in a
/// single pass. Accounts for users rating on different scales.
///
/// Returns `0.0` if there are no common items or if one of the users has zero variance on
/// them (which is always the case for a single common item). The result is not clamped to
/// `[-1, 1]`.
pub fn pearson(ratings_a: &RatingVector, ratings_b: &RatingVector) -> f64 {

    let mut n = 0_usize;
    let mut sum_xy = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;

    for (x, y) in common_ratings(ratings_a, ratings_b).into_iter() {
        n += 1;
        sum_xy += x * y;
        sum_x += x;
        sum_y += y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }

    if n == 0 {
        return 0.0;
    }

    let n = n as f64;
    let variance_x = centered_sum_of_squares(sum_x2, sum_x, n);
    let variance_y = centered_sum_of_squares(sum_y2, sum_y, n);

    if variance_x == 0.0 || variance_y == 0.0 {
        return 0.0;
    }

    let denominator = variance_x.sqrt() * variance_y.sqrt();

    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        (sum_xy - (sum_x * sum_y) / n) / denominator
    }
}

/// Residues below this fraction of the sum of squares are cancellation error, not variance.
const RELATIVE_VARIANCE_EPSILON: f64 = 1e-10;

/// `sum(x^2) - sum(x)^2 / n`, snapped to zero for constant ratings. The subtraction cancels
/// catastrophically for constant ratings which are not exactly representable, leaving a tiny
/// residue of either sign.
fn centered_sum_of_squares(sum_of_squares: f64, sum: f64, n: f64) -> f64 {
    let centered = sum_of_squares - (sum * sum) / n;
    if centered <= RELATIVE_VARIANCE_EPSILON * sum_of_squares {
        0.0
    } else {
        centered
    }
}
