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
use tracing::info;
use tracing_subscriber::EnvFilter;

use neighborreco::{dataset, io, Metric};
use neighborreco::stats::DataDictionary;

fn main() {

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Input file name (optional, uses a built-in dataset of eight \
        users by default). The input file must contain a user, an item and a rating per line, \
        separated by tabs.", "PATH");
    opts.optopt("o", "outputfile", "Output file name (optional, output will be written to stdout \
        by default).", "PATH");
    opts.optopt("e", "exponent", "Exponent of the Minkowski distance (optional, defaults to 1).",
        "NUMBER");
    opts.optopt("t", "threads", "Number of threads to use (optional, defaults to the number of \
        CPUs).", "NUMBER");
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

    let pool_size: usize = match matches.opt_get_default("t", num_cpus::get()) {
        Ok(pool_size) => pool_size,
        Err(failure) => {
            let hint = format!("Problem with option 't': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let ratings_path = matches.opt_str("i");
    let recommendations_path = matches.opt_str("o");

    if let Err(failure) = batch_recommend(ratings_path, recommendations_path, exponent, pool_size) {
        eprintln!("Error: {}", failure);
        process::exit(1);
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));

    process::exit(if hint.is_some() { 1 } else { 0 });
}

fn batch_recommend(
    ratings_path: Option<String>,
    recommendations_path: Option<String>,
    exponent: f64,
    pool_size: usize,
) -> Result<(), Box<dyn Error>> {

    let metric = Metric::from_exponent(exponent)?;

    let users = match ratings_path {
        Some(path) => {
            info!("Reading ratings from {}", path);
            io::read_ratings(&path)?
        },
        None => dataset::reference_ratings(),
    };

    let data_dict = DataDictionary::from(&users);

    info!(
        "Found {} ratings from {} users for {} items.",
        data_dict.num_ratings(),
        data_dict.num_users(),
        data_dict.num_items(),
    );

    info!("Computing recommendations with {:?} on {} threads", metric, pool_size);
    let recommendations = neighborreco::recommend_for_all_users(&users, metric, pool_size)?;

    info!("Writing recommendations...");
    io::write_recommendations(&recommendations, recommendations_path)?;

    Ok(())
}
