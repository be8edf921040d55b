use clap::{Arg, Command};
use log::LevelFilter;

use lispy::repl::{self, ReplConfig};


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("lispy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prompt for evaluating parenthesized integer arithmetic")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Evaluate each line of FILE instead of prompting")
                .conflicts_with("eval"),
        )
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .value_name("EXPR")
                .takes_value(true)
                .help("Evaluate EXPR and exit"),
        )
        .arg(
            Arg::new("ast")
                .long("ast")
                .help("Print the parse tree of each input before evaluating it"),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .value_name("PATH")
                .takes_value(true)
                .help("Load and save prompt history at PATH"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output"),
        )
        .get_matches();

    if matches.is_present("no-color") {
        colored::control::set_override(false);
    }

    let mut config = ReplConfig::default().with_ast(matches.is_present("ast"));
    if let Some(path) = matches.value_of("history") {
        config = config.with_history(path);
    }

    let result = if let Some(expr) = matches.value_of("eval") {
        repl::print_evaluation("<eval>", expr, &config).map(|_| ())
    } else if let Some(file) = matches.value_of("file") {
        repl::run_file(file, &config)
    } else {
        repl::run(&config)
    };
    result.map_err(|err| err.to_string())
}
