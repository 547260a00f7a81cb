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

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommenderError>;

#[derive(Error, Debug)]
pub enum RecommenderError {
    /// A parameter outside of the domain of a metric, e.g. a Minkowski exponent of zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown user '{0}'")]
    UnknownUser(String),

    /// The database holds no user other than the one we compute neighbors for.
    #[error("no neighbors available for user '{0}', the database contains no other users")]
    NoNeighbors(String),

    #[error("failed to read or write data: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse ratings: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
