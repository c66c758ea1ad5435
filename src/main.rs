use std::path::PathBuf;

use clap::Parser;
use quizdeck::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding subjects.json and the subject question files
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Fix the option-shuffling RNG for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let quiz = match Quiz::from_dir(&args.data, args.seed) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
