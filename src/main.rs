//! `tokensheet` command-line interface.
//!
//! Usage:
//!   tokensheet generate profile.json --out design-system.css
//!   tokensheet generate profile.yaml --component .card
//!   tokensheet new --name Studio --author Ada --slug studio button card

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use tokensheet::templates::{self, SkeletonRequest};
use tokensheet::{generate_component_css, generate_design_system, PreviewRenderer, Profile};

#[derive(Parser, Debug)]
#[command(name = "tokensheet", version)]
#[command(about = "Generate CSS from design-token profiles")]
struct Cli {
    /// Log filter directive (e.g. `debug`, `tokensheet=trace`)
    #[arg(long, global = true, env = "TOKENSHEET_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the stylesheet for a profile or one of its components
    Generate {
        /// Profile file (.json, .yaml or .yml)
        profile: PathBuf,

        /// Component selector, e.g. `.card` or `#card`
        #[arg(short, long)]
        component: Option<String>,

        /// Write the stylesheet to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print a component preview (markup and CSS) as JSON
    Preview {
        profile: PathBuf,
        component: String,
    },

    /// List the starter components
    Templates,

    /// Create a profile from starter components
    New {
        #[arg(long)]
        name: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        slug: String,

        #[arg(long)]
        description: Option<String>,

        /// Write the profile to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Starter components to include
        #[arg(required = true)]
        components: Vec<String>,
    },

    /// Print a profile summary as JSON
    Context { profile: PathBuf },

    /// Check a profile for missing metadata and token categories
    Validate { profile: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Command::Generate {
            profile,
            component,
            out,
        } => {
            let profile = load(&profile)?;
            let css = match component {
                Some(selector) => generate_component_css(&profile, &selector),
                None => generate_design_system(&profile),
            };
            emit(&css, out.as_deref())
        }
        Command::Preview { profile, component } => {
            let profile = load(&profile)?;
            let renderer = PreviewRenderer::new()?;
            let preview = renderer.render(&profile, &component)?;
            println!("{}", serde_json::to_string_pretty(&preview)?);
            Ok(())
        }
        Command::Templates => {
            for info in templates::available() {
                println!("{:<8} {}", style(&info.name).cyan().bold(), info.description);
            }
            Ok(())
        }
        Command::New {
            name,
            author,
            slug,
            description,
            out,
            components,
        } => {
            let request = SkeletonRequest {
                name,
                author,
                slug,
                description,
                components,
            };
            let profile = templates::skeleton_profile(&request)?;
            let json = profile.to_json_pretty()?;
            emit(&format!("{json}\n"), out.as_deref())
        }
        Command::Context { profile } => {
            let profile = load(&profile)?;
            println!("{}", serde_json::to_string_pretty(&profile.summary())?);
            Ok(())
        }
        Command::Validate { profile: path } => {
            let profile = load(&path)?;
            let issues = profile.validation_issues();
            if issues.is_empty() {
                eprintln!("{} {}", style("valid").green().bold(), path.display());
                return Ok(());
            }
            for issue in &issues {
                eprintln!("{} {issue}", style("error").red().bold());
            }
            bail!("{} has {} validation issue(s)", path.display(), issues.len())
        }
    }
}

fn load(path: &Path) -> Result<Profile> {
    Profile::load(path).with_context(|| format!("could not load profile {}", path.display()))
}

fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("could not write {}", path.display()))?;
            eprintln!("{} {}", style("wrote").green().bold(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
