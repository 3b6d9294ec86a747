#[macro_use]
extern crate clap;
extern crate dpll_rust;
extern crate env_logger;
extern crate log;

use std::io::Write;
use std::{path, process};
use dpll_rust::sat::dpll;


fn main() {
    let ls012 = ["0", "1", "2"];
    let bools = ["true", "false"];
    let matches =
        clap::App::new("dpll-rust")
        .version(&crate_version!()[..])
        .about("DPLL satisfiability solver for DIMACS CNF formulas")

        .arg(clap::Arg::with_name("verb").long("verb").takes_value(true).possible_values(&ls012).help("Verbosity level (0=silent, 1=some, 2=more)"))
        .arg(clap::Arg::with_name("strict").long("strict").help("Validate DIMACS header during parsing"))
        .arg(clap::Arg::with_name("no-pure").long("no-pure").help("Turn off pure literal elimination"))
        .arg(clap::Arg::with_name("no-unit").long("no-unit").help("Turn off unit propagation"))
        .arg(clap::Arg::with_name("phase").long("phase").takes_value(true).possible_values(&bools).help("Polarity tried first when branching"))
        .arg(clap::Arg::with_name("product-weight").long("product-weight").takes_value(true).validator(is_count).help("Weight of pos*neg occurrences in the branching score"))
        .arg(clap::Arg::with_name("decision-limit").long("decision-limit").takes_value(true).validator(is_count).help("Give up after this many branching decisions"))
        .arg(clap::Arg::with_name("propagation-limit").long("propagation-limit").takes_value(true).validator(is_count).help("Stop branching after this many unit propagations"))
        .arg(clap::Arg::with_name("time-limit").long("time-limit").takes_value(true).validator(is_seconds).help("Give up after this many seconds of search"))
        .arg(clap::Arg::with_name("no-verify").long("no-verify").help("Do not check the model against the input file"))
        .arg(clap::Arg::with_name("input").required(true))
        .arg(clap::Arg::with_name("output").required(false))

        .get_matches();

    {
        let mut builder = env_logger::Builder::new();
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
        builder.filter(
            None,
            matches
                .value_of("verb")
                .map(|v| match v {
                    "1" => log::LevelFilter::Info,
                    "2" => log::LevelFilter::Trace,
                    _ => log::LevelFilter::Off,
                })
                .unwrap_or(log::LevelFilter::Info),
        );
        builder.init();
    }

    let main = dpll_rust::MainOptions {
        strict: matches.is_present("strict"),
        verify: !matches.is_present("no-verify"),
        in_path: path::PathBuf::from(matches.value_of("input").unwrap_or_default()),
        out_path: matches.value_of("output").map(path::PathBuf::from),
    };

    let settings = {
        let mut s = dpll::Settings::default();

        if matches.is_present("no-pure") {
            s.prop.pure_literals = false;
        }
        if matches.is_present("no-unit") {
            s.prop.unit_propagation = false;
        }

        for &x in matches.value_of("phase").iter() {
            match x {
                "true" => {
                    s.heur.first_phase = true;
                }
                "false" => {
                    s.heur.first_phase = false;
                }
                _ => {}
            }
        }

        for &x in matches
            .value_of("product-weight")
            .and_then(|s| s.parse().ok())
            .iter()
        {
            s.heur.product_weight = x;
        }

        s
    };

    let limits = {
        let mut l = dpll_rust::Limits::default();

        for &x in matches
            .value_of("decision-limit")
            .and_then(|s| s.parse().ok())
            .iter()
        {
            l.decisions = Some(x);
        }

        for &x in matches
            .value_of("propagation-limit")
            .and_then(|s| s.parse().ok())
            .iter()
        {
            l.propagations = Some(x);
        }

        for &x in matches
            .value_of("time-limit")
            .and_then(|s| s.parse().ok())
            .iter()
        {
            if 0.0 < x {
                l.seconds = Some(x);
            }
        }

        l
    };

    match dpll_rust::solve(main, settings, limits) {
        Ok(answer) => process::exit(answer.exit_code()),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}


fn is_count(value: String) -> Result<(), String> {
    value
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a non-negative integer below 2^64", value))
}

fn is_seconds(value: String) -> Result<(), String> {
    match value.parse::<f64>() {
        Ok(x) if x.is_finite() && x >= 0.0 => Ok(()),
        _ => Err(format!("'{}' is not a non-negative number of seconds", value)),
    }
}
