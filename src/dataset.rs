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

use crate::types::{self, RatingVector, UserDatabase};

const REFERENCE_RATINGS: &[(&str, &[(&str, f64)])] = &[
    ("Angelica", &[("Blues Traveler", 3.5), ("Broken Bells", 2.0), ("Norah Jones", 4.5),
        ("Phoenix", 5.0), ("Slightly Stoopid", 1.5), ("The Strokes", 2.5),
        ("Vampire Weekend", 2.0)]),
    ("Bill", &[("Blues Traveler", 2.0), ("Broken Bells", 3.5), ("Deadmau5", 4.0),
        ("Phoenix", 2.0), ("Slightly Stoopid", 3.5), ("Vampire Weekend", 3.0)]),
    ("Chan", &[("Blues Traveler", 5.0), ("Broken Bells", 1.0), ("Deadmau5", 1.0),
        ("Norah Jones", 3.0), ("Phoenix", 5.0), ("Slightly Stoopid", 1.0)]),
    ("Dan", &[("Blues Traveler", 3.0), ("Broken Bells", 4.0), ("Deadmau5", 4.5),
        ("Phoenix", 3.0), ("Slightly Stoopid", 4.5), ("The Strokes", 4.0),
        ("Vampire Weekend", 2.0)]),
    ("Hailey", &[("Broken Bells", 4.0), ("Deadmau5", 1.0), ("Norah Jones", 4.0),
        ("The Strokes", 4.0), ("Vampire Weekend", 1.0)]),
    ("Jordyn", &[("Broken Bells", 4.5), ("Deadmau5", 4.0), ("Norah Jones", 5.0),
        ("Phoenix", 5.0), ("Slightly Stoopid", 4.5), ("The Strokes", 4.0),
        ("Vampire Weekend", 4.0)]),
    ("Sam", &[("Blues Traveler", 5.0), ("Broken Bells", 2.0), ("Norah Jones", 3.0),
        ("Phoenix", 5.0), ("Slightly Stoopid", 4.0), ("The Strokes", 5.0)]),
    ("Veronica", &[("Blues Traveler", 3.0), ("Norah Jones", 5.0), ("Phoenix", 4.0),
        ("Slightly Stoopid", 2.5), ("The Strokes", 3.0)]),
];

/// Ratings of eight users for eight bands, used when no input file is given. A fresh database
/// is built on every call.
pub fn reference_ratings() -> UserDatabase {

    let mut users = types::new_user_database(REFERENCE_RATINGS.len());

    for &(user, ratings) in REFERENCE_RATINGS {
        let mut rating_vector: RatingVector = types::new_rating_vector(ratings.len());
        for &(item, rating) in ratings {
            rating_vector.insert(item.to_string(), rating);
        }
        users.insert(user.to_string(), rating_vector);
    }

    users
}
