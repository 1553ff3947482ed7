use clap::{Parser, Subcommand};
use mdpage::{config, generate, report};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdpage")]
#[command(about = "Static page generator: Markdown in, templated HTML out")]
#[command(long_about = "\
Static page generator: Markdown in, templated HTML out

Every Markdown file directly inside the source folder becomes one HTML page,
built by substituting its metadata and converted body into a shared template.

Site layout:

  config.json                  # optional keys: src-folder, static-folder, emoji
  src/
  ├── template.html            # site template (optional; bundled fallback otherwise)
  ├── index.md                 # title/author metadata block, then Markdown
  └── about.md
  dest/                        # output: index.html, about.html, ...

Templates carry literal <!--TITLE--> and <!--CONTENT--> markers. A marker
the document can't fill warns and stays visible; a metadata value no marker
uses warns too. Neither stops the build.

Run 'mdpage gen-config' for a stock config.json.")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dest", global = true)]
    output: PathBuf,

    /// Directory holding the bundled fallback template
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert all Markdown sources into HTML pages (the default)
    Build,
    /// Validate config, template, and static folder without writing
    Check,
    /// Print a stock config.json with all recognized keys
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        report::error(&err.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let opts = generate::BuildOptions {
        config_path: cwd.join(&cli.config),
        output_dir: cwd.join(&cli.output),
        assets_dir: cli.assets.unwrap_or_else(default_assets_dir),
        cwd,
    };

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let summary = generate::generate(&opts)?;
            report::info(&format!(
                "Generated {} pages in {}",
                summary.pages.len(),
                opts.output_dir.display()
            ));
        }
        Command::Check => {
            let files = generate::check(&opts)?;
            for file in &files {
                report::info(file);
            }
            report::info(&format!("OK: {} source files", files.len()));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_json());
        }
    }

    Ok(())
}

/// Installed builds ship `assets/` next to the binary; running from a
/// checkout falls back to `./assets`.
fn default_assets_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("assets"))
}
