use std::sync::Mutex;
use std::time::Instant;

use scoped_pool::Pool;
use tracing::info;

pub mod types;
pub mod error;
pub mod metrics;
pub mod neighbors;
pub mod recommend;
pub mod stats;
pub mod dataset;
pub mod io;
pub mod utils;


pub use crate::error::{RecommenderError, Result};
pub use crate::metrics::{manhattan, minkowski, pearson, Metric};
pub use crate::neighbors::nearest_neighbors;
pub use crate::recommend::recommend;
pub use crate::types::{Neighbor, NeighborList, RatingVector, RecommendationList, ScoredItem,
    UserDatabase};


/// Computes the recommendations for every user of the database, spreading the users over a pool
/// of `pool_size` threads. The database is only read. The result is ordered by user identifier.
///
/// Fails with the first error encountered, e.g. `NoNeighbors` for a database with a single user.
pub fn recommend_for_all_users(
    users: &UserDatabase,
    metric: Metric,
    pool_size: usize,
) -> Result<Vec<(String, RecommendationList)>> {

    metric.validate()?;

    let pool = Pool::new(pool_size.max(1));

    let results: Mutex<Vec<(String, Result<RecommendationList>)>> =
        Mutex::new(Vec::with_capacity(users.len()));

    let batch_start = Instant::now();

    pool.scoped(|scope| {
        for user in users.keys() {

            let reference_to_users = users;
            let reference_to_results = &results;

            scope.execute(move || {
                let recommendations = recommend::recommend(user, reference_to_users, metric);
                reference_to_results.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .push((user.clone(), recommendations));
            });
        }
    });

    pool.shutdown();

    let mut results = results.into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    results.sort_by(|(user_a, _), (user_b, _)| user_a.cmp(user_b));

    let duration_for_batch = utils::to_millis(batch_start.elapsed());
    info!("recommendations computed for {} users in {}ms", results.len(), duration_for_batch);

    results.into_iter()
        .map(|(user, recommendations)| recommendations.map(|items| (user, items)))
        .collect()
}


#[cfg(test)]
mod tests {

    use crate::dataset::reference_ratings;
    use crate::error::RecommenderError;
    use crate::metrics::Metric;
    use crate::recommend::recommend;
    use crate::recommend_for_all_users;
    use crate::types;

    #[test]
    fn batch_matches_single_queries() {
        let users = reference_ratings();

        let all_recommendations = recommend_for_all_users(&users, Metric::Manhattan, 4).unwrap();

        assert_eq!(all_recommendations.len(), users.len());
        assert_eq!(all_recommendations[0].0, "Angelica");
        assert_eq!(all_recommendations[7].0, "Veronica");

        for (user, recommendations) in all_recommendations.iter() {
            assert_eq!(recommendations, &recommend(user, &users, Metric::Manhattan).unwrap());
        }
    }

    #[test]
    fn batch_covers_every_user_on_a_single_thread() {
        let users = reference_ratings();

        let all_recommendations = recommend_for_all_users(&users, Metric::euclidean(), 1).unwrap();

        let mut expected_users: Vec<&String> = users.keys().collect();
        expected_users.sort();

        let computed_users: Vec<&String> = all_recommendations.iter().map(|(user, _)| user).collect();
        assert_eq!(computed_users, expected_users);
    }

    #[test]
    fn batch_rejects_invalid_metric() {
        let users = reference_ratings();

        match recommend_for_all_users(&users, Metric::Minkowski(0.0), 2) {
            Err(RecommenderError::InvalidArgument(_)) => {},
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn batch_on_single_user_database() {
        let mut users = types::new_user_database(1);
        users.insert(String::from("Hailey"), types::new_rating_vector(0));

        match recommend_for_all_users(&users, Metric::Manhattan, 1) {
            Err(RecommenderError::NoNeighbors(_)) => {},
            other => panic!("expected NoNeighbors, got {:?}", other),
        }
    }
}
