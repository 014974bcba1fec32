use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::path::PathBuf;
use vitae::{EngineConfig, EngineError, RegistryBuilder, Theme, load_resume, load_theme};

/// Renders a résumé through one of the registered templates and prints the
/// resulting document tree as JSON.
#[derive(Parser, Debug)]
#[command(name = "vitae", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a résumé and print the tree to stdout
    Render {
        /// Template key, e.g. `onyx`
        #[arg(short, long)]
        template: String,
        /// Résumé data file (JSON)
        #[arg(short, long)]
        resume: PathBuf,
        /// Theme file (JSON); the default theme when omitted
        #[arg(long)]
        theme: Option<PathBuf>,
        /// Engine configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Indent the output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// List the registered template keys
    List,
}

fn main() -> Result<(), EngineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("vitae=warn")).init();

    match Cli::parse().command {
        Command::Render { template, resume, theme, config, pretty } => {
            let config = match config {
                Some(path) => EngineConfig::from_file(path)?,
                None => EngineConfig::default(),
            };
            let registry = RegistryBuilder::new().with_config(config).build();

            let resume = load_resume(&resume)?;
            let theme = match theme {
                Some(path) => load_theme(path)?,
                None => Theme::default(),
            };

            let tree = registry.render(&template, &resume, &theme)?;
            let out = if pretty {
                serde_json::to_string_pretty(&tree)?
            } else {
                serde_json::to_string(&tree)?
            };
            println!("{}", out);
        }
        Command::List => {
            let registry = RegistryBuilder::new().build();
            println!("{}", registry.keys().iter().join("\n"));
        }
    }
    Ok(())
}
