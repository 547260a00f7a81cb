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

use fnv::FnvHashSet;

use crate::types::UserDatabase;

/// The users and items present in a database together with some basic statistics. Users and
/// items are kept in lexicographic order, which gives us a stable layout for printing.
pub struct DataDictionary {
    users: Vec<String>,
    items: Vec<String>,
    num_ratings: u64,
}

impl DataDictionary {

    pub fn num_users(&self) -> usize {
        self.users.len()
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn num_ratings(&self) -> u64 {
        self.num_ratings
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Fraction of the user-item matrix which holds a rating.
    pub fn density(&self) -> f64 {
        let num_cells = self.num_users() * self.num_items();
        if num_cells == 0 {
            0.0
        } else {
            self.num_ratings as f64 / num_cells as f64
        }
    }
}

impl<'a> From<&'a UserDatabase> for DataDictionary {

    fn from(users: &'a UserDatabase) -> Self {

        let mut user_names: Vec<String> = Vec::with_capacity(users.len());
        let mut item_names: FnvHashSet<&str> =
            FnvHashSet::with_capacity_and_hasher(100, Default::default());

        let mut num_ratings: u64 = 0;

        for (user, ratings) in users.iter() {
            user_names.push(user.clone());

            for item in ratings.keys() {
                item_names.insert(item.as_str());
                num_ratings += 1;
            }
        }

        user_names.sort();

        let mut items: Vec<String> = item_names.into_iter().map(String::from).collect();
        items.sort();

        DataDictionary { users: user_names, items, num_ratings }
    }
}
