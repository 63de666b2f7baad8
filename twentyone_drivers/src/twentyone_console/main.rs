mod console;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use console::ConsoleHandler;
use twentyone::{Rule, Session};
use twentyone_drivers::parse_config_from_file;

const DEFAULT_CONFIG_PATH: &str = "~/.twentyone.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CommandLineArgs::parse();
    let rule = resolve_rule(&args.config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut handler = ConsoleHandler::new(stdin.lock(), stdout.lock());

    let mut session = Session::new(&rule);

    println!("#########################################");
    println!("Welcome to the Blackjack game.");
    println!();
    println!("Press C-c at any time to exit the game.");
    println!("#########################################");

    if let Err(error) = session.run(&mut handler) {
        tracing::error!(%error, "session aborted");
        std::process::exit(1);
    }

    println!();
    println!("********* GAME OVER *********");
    println!();
}

/// Uses `~/.twentyone.yml` when present, the default rules otherwise. An
/// explicitly passed config file must exist and be valid.
fn resolve_rule(config_path: &str) -> Rule {
    let path = if config_path == DEFAULT_CONFIG_PATH {
        let home_dir = home::home_dir().expect("Cannot find home directory");
        let config_file_path = home_dir.join(".twentyone.yml");
        if !config_file_path.exists() {
            return Rule::default();
        }
        String::from(config_file_path.to_str().expect("non-UTF-8 config path"))
    } else {
        String::from(config_path)
    };

    let config = parse_config_from_file(&path);
    config
        .rule
        .try_into()
        .expect("invalid rule in the config file")
}
