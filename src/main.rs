use clap::Parser;
use dialoguer::Input;
use std::path::{Path, PathBuf};

use tygen::common::{ensure_dir, spinner};
use tygen::config::Config;
use tygen::content::PageSource;
use tygen::extract::Extractor;
use tygen::ir::emit::emit_module;

#[derive(Parser, Debug)]
#[command(
    name = "tygen",
    version,
    about = "Generate TypeScript interface definitions from Confluence API documentation pages"
)]
struct Cli {
    #[arg(long = "page-id", help = "Confluence page id. Will prompt if not provided")]
    page_id: Option<String>,
    #[arg(
        long = "out-name",
        help = "Base name of the generated .types.ts file. Will prompt if not provided"
    )]
    out_name: Option<String>,
    #[arg(
        long,
        default_value = "contents",
        help = "Directory for cached page content"
    )]
    contents_dir: PathBuf,
    #[arg(
        long,
        default_value = "types",
        help = "Directory for generated type files"
    )]
    types_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    tygen::init_tracing();
    let cli = Cli::parse();
    let code = tygen::run_cli_async(|| run(cli)).await;
    std::process::exit(code);
}

async fn run(mut args: Cli) -> Result<(), String> {
    let page_id = match args.page_id.take() {
        Some(id) => id,
        None => Input::<String>::new()
            .with_prompt("Confluence page id")
            .interact_text()
            .map_err(|err| format!("Failed to read page id: {err}"))?,
    };
    let out_name = match args.out_name.take() {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("Output file name")
            .interact_text()
            .map_err(|err| format!("Failed to read file name: {err}"))?,
    };

    let config = Config::load(Path::new("."))?;
    let source = PageSource::new(config, args.contents_dir.clone());

    let progress = spinner("Fetching page content...");
    let fetched = source.get(&page_id).await;
    progress.finish_and_clear();
    let content = fetched?;

    let interfaces = Extractor::new()?.generate_interfaces(&content);
    let code = emit_module(&interfaces);
    println!("{code}");

    ensure_dir(&args.types_dir)?;
    let out_path = args.types_dir.join(format!("{out_name}.types.ts"));
    match std::fs::write(&out_path, &code) {
        Ok(()) => println!("Interface code written to {}", out_path.display()),
        Err(err) => tracing::error!("Failed to write {}: {err}", out_path.display()),
    }

    Ok(())
}
