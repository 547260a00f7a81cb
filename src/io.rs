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

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::prelude::*;
use std::io::stdout;
use std::path::Path;

use serde_derive::Serialize;

use crate::error::{RecommenderError, Result};
use crate::stats::DataDictionary;
use crate::types::{self, RecommendationList, ScoredItem, UserDatabase};

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .delimiter(b'\t')
        .trim(csv::Trim::All);
    builder
}

/// Reads a CSV input file. We expect NO headers, and a user-item-rating triple per line
/// with tab separation.
pub fn csv_reader(file: &str) -> Result<csv::Reader<File>> {
    let reader = reader_builder().from_path(file)?;
    Ok(reader)
}

/// Collects all ratings from the reader into a database. If a user rated the same item more
/// than once, the last rating wins.
pub fn ratings_from_csv<R>(reader: &mut csv::Reader<R>) -> Result<UserDatabase>
    where R: std::io::Read {

    let mut users = types::new_user_database(100);

    for record in reader.deserialize() {
        let (user, item, rating): (String, String, f64) = record?;

        if !rating.is_finite() {
            return Err(RecommenderError::InvalidArgument(
                format!("rating of user '{}' for item '{}' is not a finite number: {}",
                    user, item, rating)));
        }

        users.entry(user)
            .or_insert_with(|| types::new_rating_vector(10))
            .insert(item, rating);
    }

    Ok(users)
}

pub fn read_ratings(file: &str) -> Result<UserDatabase> {
    let mut reader = csv_reader(file)?;
    ratings_from_csv(&mut reader)
}

/// Struct used for JSON serialization of computed recommendations. Field names will be used in
/// JSON.
#[derive(Serialize)]
struct Recommendations<'a> {
    for_user: &'a str,
    recommended_items: &'a [ScoredItem],
}

/// Output the computed recommendations in JSON format, one line per user. If a
/// `recommendations_path` is supplied, we write to a file at the specified path, otherwise, we
/// output to stdout.
pub fn write_recommendations(
    recommendations: &[(String, RecommendationList)],
    recommendations_path: Option<String>,
) -> Result<()> {

    let mut out: Box<dyn Write> = match recommendations_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout())
    };

    write_recommendations_to(&mut out, recommendations)
}

fn write_recommendations_to<W: Write>(
    out: &mut W,
    recommendations: &[(String, RecommendationList)],
) -> Result<()> {

    for (user, recommended_items) in recommendations.iter() {

        let line = serde_json::to_string(&Recommendations {
            for_user: user,
            recommended_items,
        })?;

        writeln!(out, "{}", line)?;
    }

    out.flush()?;

    Ok(())
}

/// Renders the database as a table with a row per user and a column per item. Missing ratings
/// are left blank.
pub fn render_table(users: &UserDatabase, data_dict: &DataDictionary) -> String {

    let user_column_width = data_dict.users().iter()
        .map(|user| user.len())
        .chain(Some("Users".len()))
        .max()
        .unwrap_or(0);

    let mut table = String::new();

    // Writing into a String cannot fail
    let _ = write!(table, "{:<width$}", "Users", width = user_column_width);
    for item in data_dict.items() {
        let _ = write!(table, "  {}", item);
    }
    table.push('\n');

    let _ = write!(table, "{}", "-".repeat(user_column_width));
    for item in data_dict.items() {
        let _ = write!(table, "  {}", "-".repeat(item.len()));
    }
    table.push('\n');

    for user in data_dict.users() {
        let _ = write!(table, "{:<width$}", user, width = user_column_width);

        let ratings = users.get(user);

        for item in data_dict.items() {
            match ratings.and_then(|ratings| ratings.get(item)) {
                Some(rating) => { let _ = write!(table, "  {:>width$.1}", rating, width = item.len()); },
                None => { let _ = write!(table, "  {:>width$}", "", width = item.len()); },
            }
        }
        table.push('\n');
    }

    table
}


#[cfg(test)]
mod tests {

    use crate::dataset::reference_ratings;
    use crate::error::RecommenderError;
    use crate::io::{self, reader_builder};
    use crate::stats::DataDictionary;
    use crate::types::ScoredItem;

    #[test]
    fn ratings_from_tab_separated_lines() {
        let data = "alice\tapple\t4.0\nalice\tpony\t2.5\nbob\tapple\t3\nalice\tapple\t5\n";
        let mut reader = reader_builder().from_reader(data.as_bytes());

        let users = io::ratings_from_csv(&mut reader).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users["alice"].len(), 2);
        assert_eq!(users["alice"]["apple"], 5.0);
        assert_eq!(users["alice"]["pony"], 2.5);
        assert_eq!(users["bob"]["apple"], 3.0);
    }

    #[test]
    fn invalid_rating_is_an_error() {
        let data = "alice\tapple\tgreat\n";
        let mut reader = reader_builder().from_reader(data.as_bytes());

        match io::ratings_from_csv(&mut reader) {
            Err(RecommenderError::Csv(_)) => {},
            other => panic!("expected a csv error, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_ratings_are_rejected() {
        for rating in &["NaN", "inf", "-inf"] {
            let data = format!("alice\tapple\t4.0\nbob\tapple\t{}\n", rating);
            let mut reader = reader_builder().from_reader(data.as_bytes());

            match io::ratings_from_csv(&mut reader) {
                Err(RecommenderError::InvalidArgument(message)) => assert!(message.contains("'bob'")),
                other => panic!("expected InvalidArgument for {}, got {:?}", rating, other),
            }
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(io::read_ratings("/nonexistent/ratings.tsv").is_err());
    }

    #[test]
    fn recommendations_as_json_lines() {
        let recommendations = vec![
            (String::from("Hailey"), vec![
                ScoredItem { item: String::from("Phoenix"), score: 4.0 },
                ScoredItem { item: String::from("Blues Traveler"), score: 3.0 },
            ]),
            (String::from("Jordyn"), vec![]),
        ];

        let mut out: Vec<u8> = Vec::new();
        io::write_recommendations_to(&mut out, &recommendations).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["for_user"], "Hailey");
        assert_eq!(first["recommended_items"][0]["item"], "Phoenix");
        assert_eq!(first["recommended_items"][0]["score"], 4.0);
        assert_eq!(first["recommended_items"][1]["item"], "Blues Traveler");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["recommended_items"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn table_has_a_row_per_user() {
        let users = reference_ratings();
        let data_dict = DataDictionary::from(&users);

        let table = io::render_table(&users, &data_dict);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2 + 8);
        assert!(lines[0].starts_with("Users"));
        assert!(lines[0].contains("Vampire Weekend"));
        assert!(lines[2].starts_with("Angelica"));
        assert!(lines[9].starts_with("Veronica"));
    }
}
