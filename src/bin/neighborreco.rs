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

use std::env;
use std::error::Error;
use std::process;

use getopts::Options;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use neighborreco::{dataset, io, metrics};
use neighborreco::{Metric, RecommenderError, UserDatabase};
use neighborreco::stats::DataDictionary;

fn main() {

    init_logging();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("e", "exponent", "Exponent of the Minkowski distance used to find the nearest \
        neighbor (optional, defaults to 1). Use 1 for Manhattan and 2 for Euclidean distance.",
        "NUMBER");
    opts.optflag("p", "pearson", "Only compute the Pearson correlation coefficient of the users \
        given via --rating1 and --rating2.");
    opts.optopt("", "rating1", "First user for --pearson.", "USER");
    opts.optopt("", "rating2", "Second user for --pearson.", "USER");
    opts.optopt("i", "inputfile", "Input file name (optional, uses a built-in dataset of eight \
        users by default). The input file must contain a user, an item and a rating per line, \
        separated by tabs.", "PATH");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    let exponent: f64 = match matches.opt_get_default("e", 1.0) {
        Ok(exponent) => exponent,
        Err(failure) => {
            let hint = format!("Problem with option 'e': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let users = match matches.opt_str("i") {
        Some(ratings_path) => match io::read_ratings(&ratings_path) {
            Ok(users) => users,
            Err(failure) => return exit_with_error(&failure),
        },
        None => dataset::reference_ratings(),
    };

    let data_dict = DataDictionary::from(&users);
    debug!("{} ratings from {} users for {} items", data_dict.num_ratings(),
        data_dict.num_users(), data_dict.num_items());

    print!("{}", io::render_table(&users, &data_dict));
    println!();

    let outcome = if matches.opt_present("p") {
        match (matches.opt_str("rating1"), matches.opt_str("rating2")) {
            (Some(user_a), Some(user_b)) => print_pearson(&users, &user_a, &user_b),
            _ => {
                let hint = "Please specify both users via --rating1 and --rating2.";
                return print_usage_and_exit(&program, opts, Some(hint));
            },
        }
    } else {
        match matches.free.first() {
            Some(user) => print_recommendations(&users, user, exponent),
            None => {
                let hint = format!("Please specify a user, one of: {}",
                    data_dict.users().join(", "));
                return print_usage_and_exit(&program, opts, Some(&hint));
            },
        }
    };

    if let Err(failure) = outcome {
        exit_with_error(&failure);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options] USER", program);
    eprint!("{}", opts.usage(&brief));

    process::exit(if hint.is_some() { 1 } else { 0 });
}

fn exit_with_error(failure: &dyn Error) {
    eprintln!("Error: {}", failure);
    process::exit(1);
}

fn lookup<'a>(users: &'a UserDatabase, user: &str) -> Result<&'a neighborreco::RatingVector,
    RecommenderError> {

    users.get(user)
        .ok_or_else(|| RecommenderError::UnknownUser(user.to_string()))
}

fn print_pearson(users: &UserDatabase, user_a: &str, user_b: &str) -> Result<(), RecommenderError> {

    let ratings_a = lookup(users, user_a)?;
    let ratings_b = lookup(users, user_b)?;

    println!("{}", metrics::pearson(ratings_a, ratings_b));

    Ok(())
}

fn print_recommendations(
    users: &UserDatabase,
    user: &str,
    exponent: f64,
) -> Result<(), RecommenderError> {

    lookup(users, user)?;
    let metric = Metric::from_exponent(exponent)?;

    let recommendations = neighborreco::recommend(user, users, metric)?;

    println!("{}'s recommendations:", user);
    for scored_item in recommendations.iter() {
        println!("\t{}\t{}", scored_item.item, scored_item.score);
    }

    Ok(())
}
