use clap::{error::ErrorKind, CommandFactory, Parser};
use nw_histogram::cli::Cli;

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let experiment = args
        .experiment()
        .unwrap_or_else(|e| Cli::command().error(ErrorKind::ValueValidation, e).exit());
    let mut source = args.source();

    let (histogram, stats) = experiment.run(&mut source);
    stats.log();

    println!("\nStrings Lengths: {}\n", experiment.size);
    println!("Histogram:");
    print!("{histogram}");
    println!();

    if !args.no_demo {
        print!("{}", experiment.random_alignment(&mut source));
    }
}
