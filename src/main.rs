use std::path::PathBuf;

use clap::{Parser, Subcommand};
use instgen::{AppError, GenOptions};

#[derive(Parser)]
#[command(name = "instgen")]
#[command(version)]
#[command(
    about = "Generate self-contained infrastructure install scripts from definition files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an install script from a definition file
    #[clap(visible_alias = "g")]
    Gen {
        /// Path to the .definition file
        definition: PathBuf,
        /// Directory for the generated script (defaults to the definition's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Repository root containing kustomize config directories
        #[arg(long)]
        repo_root: Option<PathBuf>,
        /// Directory searched for component templates (defaults to the definition's directory)
        #[arg(long)]
        infra_dir: Option<PathBuf>,
    },
    /// Print the resolved configuration as YAML
    #[clap(visible_alias = "r")]
    Resolve {
        /// Path to the .definition file
        definition: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Gen { definition, output_dir, repo_root, infra_dir } => {
            instgen::generate(GenOptions { definition, output_dir, repo_root, infra_dir }).map(
                |outcome| {
                    println!(
                        "✅ Generated {} with {} component(s)",
                        outcome.script_path.display(),
                        outcome.resolved.components.len()
                    );
                    for (i, component) in outcome.resolved.components.iter().enumerate() {
                        println!("  {}. {}", i + 1, component.name);
                    }
                },
            )
        }
        Commands::Resolve { definition } => instgen::resolve_to_yaml(&definition).map(|yaml| {
            print!("{yaml}");
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
