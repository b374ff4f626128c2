use clap::Parser;
use nullius::content::ContentStore;
use nullius::{config, generate, output};
use std::path::Path;

#[derive(Parser)]
#[command(name = "nullius")]
#[command(version)]
#[command(about = "Build the Nullius in Verba static site")]
#[command(long_about = "\
Build the Nullius in Verba static site

Renders every page in every enabled language and framing from the content
compiled into this binary, then writes a fresh output directory.

Settings are read from an optional site.toml in the current directory:

  output_dir = \"dist\"                 # wiped and recreated on every build
  stylesheet = \"static/style.css\"     # copied to <output_dir>/style.css if present

  [axes]
  languages = [\"en\", \"es\"]
  framings = []                       # e.g. [\"balanced\", \"conservative\", \"progressive\"]
  default_language = \"en\"

Output files are named {page}-{framing}-{language}.html ({page}-{language}.html
without framings), plus an index.html that redirects to the default home page.")]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();

    let site_config = config::load_config(Path::new("."))?;
    let content = ContentStore::embedded()?;
    let report = generate::generate(&site_config, &content)?;
    output::print_build_summary(&report);

    Ok(())
}
