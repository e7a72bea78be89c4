use clap::{Parser, Subcommand};
use simple_pub::{config, output, publish, scan};
use std::path::{Path, PathBuf};

/// Shared flags for commands that report results.
#[derive(clap::Args, Clone)]
struct FormatArgs {
    /// Emit machine-readable JSON instead of the human listing
    #[arg(long)]
    json: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-pub")]
#[command(about = "Publish the latest versioned landing page export")]
#[command(long_about = "\
Publish the latest versioned landing page export

Your filesystem is the release pipeline. Page exports are versioned by
filename; publishing installs the most recently modified one as the entry
document of the directory your static site host serves.

Project layout:

  my-site/
  ├── config.toml                  # Optional (run 'simple-pub gen-config')
  ├── website_output/              # Source directory (--source)
  │   ├── landing-v1.html          # Candidates: <prefix>v<token>.<ext>
  │   ├── landing-v2.html          # ← newest mtime wins, not highest token
  │   └── assets/                  # Mirrored wholesale — replace, not merge
  └── docs/                        # Publish directory (--output)
      ├── index.html               # Selected candidate, renamed
      └── assets/

Selection is by filesystem modification time only. Run 'simple-pub scan'
to see every candidate's mtime and which one would be published before
writing anything.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory (default: source_dir from config.toml)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Publish directory (default: publish_dir from config.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the source directory and show the candidate inventory
    Scan(FormatArgs),
    /// Run the full pipeline: scan → publish
    Publish(FormatArgs),
    /// Validate the source directory without writing
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = config::load_config(Path::new("."))?;
    let source = cli
        .source
        .unwrap_or_else(|| PathBuf::from(&config.source_dir));
    let publish_dir = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.publish_dir));

    match cli.command {
        Command::Scan(fmt) => {
            let manifest = scan::scan(&source, &config)?;
            if fmt.json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                output::print_scan_output(&manifest);
            }
        }
        Command::Publish(fmt) => {
            let manifest = scan::scan(&source, &config)?;
            if !fmt.json {
                println!("==> Stage 1: Scanning {}", source.display());
                output::print_scan_output(&manifest);
                println!();
                println!("==> Stage 2: Publishing \u{2192} {}", publish_dir.display());
            }
            let summary = publish::materialize(&manifest, &source, &publish_dir)?;
            if fmt.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::print_publish_output(&summary);
            }
        }
        Command::Check => {
            println!("==> Checking {}", source.display());
            let manifest = scan::scan(&source, &config)?;
            output::print_scan_output(&manifest);
            println!("==> Source is valid");
        }
        Command::GenConfig => unreachable!("handled above"),
    }

    Ok(())
}
