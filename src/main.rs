use std::io;

use clap::Parser;
use grocer::cli::{Cli, Command};
use grocer::config::Config;
use grocer::engine::Engine;
use grocer::menu::Menu;
use grocer::report;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Report on stderr regardless of the log filter, then exit 1.
fn fail(e: impl std::fmt::Display) -> ! {
    log::error!("{e}");
    eprintln!("error: {e}");
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let mut config = Config::load(&cli.global).unwrap_or_else(|e| fail(e));
    log::debug!("config: {config:?}");

    match cli.command {
        Some(Command::List(args)) => {
            config.json_output = args.json;
            let engine = Engine::from_config(&config);
            match engine.list_all() {
                Ok(items) => report::print_listing(&items, &config),
                Err(e) => fail(e),
            }
        }
        Some(Command::Lookup(args)) => {
            let engine = Engine::from_config(&config);
            match engine.lookup(&args.item) {
                Ok(found) => println!("{}", report::lookup_message(&args.item, found.count())),
                Err(e) => fail(e),
            }
        }
        Some(Command::Histogram) => {
            let engine = Engine::from_config(&config);
            match engine.render_histogram() {
                Ok(lines) => report::print_histogram(&lines),
                Err(e) => fail(e),
            }
        }
        Some(Command::Menu) | None => {
            let engine = Engine::from_config(&config);
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut menu = Menu::new(engine, stdin.lock(), stdout.lock(), config.color);
            if let Err(e) = menu.run() {
                fail(e);
            }
        }
    }
}
