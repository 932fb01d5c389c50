use clap::Parser;
use github_activity::github::GithubClient;
use github_activity::{Error, report_activity};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Logger, Root};
use std::io;

#[derive(Parser, Debug, PartialEq)]
#[command(
    name = "github-activity",
    about = "Show a GitHub user's recent public activity"
)]
struct Cli {
    /// GitHub username to look up
    username: String,
}

#[tokio::main]
async fn main() {
    init_logging();

    let args = Cli::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            let _ = err.print();
            std::process::exit(1);
        }
        // --help and friends keep clap's zero exit code.
        err.exit();
    });

    let fetcher = GithubClient::new().unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });

    println!(
        "Fetching recent GitHub activity for user: {}",
        args.username
    );
    println!("{}", "-".repeat(60));

    let outcome = report_activity(&fetcher, &args.username, &mut io::stdout()).await;
    match &outcome {
        // Fetch problems appear in the report body, between the two rules.
        Err(Error::Fetch(err)) => println!("Error: {err}"),
        Err(Error::Io(err)) => eprintln!("Error writing report: {err}"),
        Ok(()) => {}
    }

    println!("{}", "-".repeat(60));
    println!("Done.");

    if outcome.is_err() {
        std::process::exit(1);
    }
}

fn init_logging() {
    // Log to stderr; stdout is reserved for the report itself.
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(Logger::builder().build("github_activity", LevelFilter::Info))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .unwrap();
    let _log4rs_handle = log4rs::init_config(config).unwrap();
}
