use clap::{Parser, Subcommand};
use simple_folio::effects::typing::{TypingAnimator, TypingDriver};
use simple_folio::{config, content, generate, output};
use std::path::PathBuf;
use std::time::Duration;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for a personal portfolio")]
#[command(long_about = "\
Static site generator for a personal portfolio

One TOML file describes you; the generator renders it into an animated,
single- or multi-page portfolio site.

Content structure:

  content/
  ├── content.toml        # Profile, education, career, skills, projects, contact
  ├── config.toml         # Site config: navigation mode, colors, effects (optional)
  └── assets/             # Photo, project images, resume → copied to output

Without content.toml the stock sample portfolio is built.

Run 'simple-folio gen-content' for a sample content.toml and
'simple-folio gen-config' for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build,
    /// Validate content and config without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the sample content.toml
    GenContent,
    /// Preview the hero typing animation as a timeline
    Typing {
        /// Virtual seconds to simulate
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=3600))]
        seconds: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::build(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let content = content::load_content(&cli.source)?;
            output::print_check_output(&content, &site_config, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
        Command::Typing { seconds } => {
            let site_config = config::load_config(&cli.source)?;
            let content = content::load_content(&cli.source)?;
            match TypingAnimator::new(content.profile.roles.clone(), site_config.typing) {
                Some(animator) => {
                    let mut driver = TypingDriver::new(animator);
                    let frames = driver.advance(Duration::from_secs(seconds));
                    output::print_typing_timeline(&frames);
                }
                None => println!("No roles to type"),
            }
        }
    }

    Ok(())
}
