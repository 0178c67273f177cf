use std::env;

use editpath::{CostTable, DistanceEngineBuilder};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("editpath: {err}");
            eprintln!("Usage: editpath [options] <source> <target> (see --help)");
            std::process::exit(2);
        }
    };

    let engine = DistanceEngineBuilder::new(&options.source, &options.target)
        .costs(options.costs)
        .build();

    println!("{}", engine.minimal_distance());
    for word in engine.transformation() {
        println!("{word}");
    }
}

struct Options {
    source: String,
    target: String,
    costs: CostTable,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut costs = CostTable::default();
        let mut words: Vec<String> = Vec::new();
        let mut options_done = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if options_done || !arg.starts_with('-') || arg == "-" {
                words.push(arg);
            } else if arg == "--" {
                options_done = true;
            } else if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--insert-cost=") {
                costs.insert = parse_cost("insert", value)?;
            } else if arg == "--insert-cost" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --insert-cost".to_string())?
                    .into();
                costs.insert = parse_cost("insert", &value)?;
            } else if let Some(value) = arg.strip_prefix("--delete-cost=") {
                costs.delete = parse_cost("delete", value)?;
            } else if arg == "--delete-cost" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --delete-cost".to_string())?
                    .into();
                costs.delete = parse_cost("delete", &value)?;
            } else if let Some(value) = arg.strip_prefix("--replace-cost=") {
                costs.replace = parse_cost("replace", value)?;
            } else if arg == "--replace-cost" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --replace-cost".to_string())?
                    .into();
                costs.replace = parse_cost("replace", &value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        let mut words = words.into_iter();
        match (words.next(), words.next(), words.next()) {
            (Some(source), Some(target), None) => Ok(Self {
                source,
                target,
                costs,
            }),
            (Some(_), Some(_), Some(extra)) => Err(format!("unexpected extra word '{extra}'")),
            _ => Err("expected exactly two words".to_string()),
        }
    }

    fn print_help() {
        println!(
            "\
Usage: editpath [options] <source> <target>

Prints the minimum edit cost of turning <source> into <target>, followed
by every intermediate word of one cheapest transformation, one per line.

Options:
  --insert-cost <N>     Cost of inserting one character (default: 1)
  --delete-cost <N>     Cost of deleting one character (default: 1)
  --replace-cost <N>    Cost of substituting one character (default: 1)
  -h, --help            Print this help message

Examples:
  editpath qwerty etz
  editpath --replace-cost=100 A B
"
        );
    }
}

fn parse_cost(name: &str, value: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| format!("{name} cost must be a non-negative integer"))
}
