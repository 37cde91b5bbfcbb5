use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use folio::state::{PageEvent, PageState};
use folio::view::Node;
use folio::{ContentSource, ScrollController};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render a personal portfolio page from static JSON data")]
struct Cli {
    /// Directory containing the data/ resources
    #[arg(long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Fetch the resources from this base URL instead of the local directory
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Print the rendered sections to stdout instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "folio=debug" } else { "folio=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let source = match args.base_url {
        Some(url) => ContentSource::remote(url),
        None => ContentSource::local(args.data_dir),
    };

    if args.headless {
        return run_headless(source);
    }

    #[cfg(feature = "gui")]
    {
        folio::gui::run(source).map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
    }

    #[cfg(not(feature = "gui"))]
    run_headless(source)
}

/// Load both resources and print the rendered sections. Exercises the
/// same loader and render paths as the window does.
fn run_headless(source: ContentSource) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    // Desktop-sized viewport; only the scroll axis depends on it.
    let mut state = PageState::new(ScrollController::from_viewport_width(1280.0));

    runtime.block_on(async {
        let (about_me, projects) = tokio::join!(source.fetch_about_me(), source.fetch_projects());

        match about_me {
            Ok(about_me) => {
                state.apply(PageEvent::AboutMeLoaded(about_me));
            }
            Err(e) => tracing::error!("Error fetching About Me data: {:#}", e),
        }
        match projects {
            Ok(projects) => {
                state.apply(PageEvent::ProjectsLoaded(projects));
            }
            Err(e) => tracing::error!("Error fetching Projects data: {:#}", e),
        }
    });

    if let Some(about) = state.about_view() {
        println!("=== About Me ===");
        print_nodes(&about.nodes);
    }

    let cards = state.card_views();
    if !cards.is_empty() {
        println!("\n=== Projects ({}) ===", cards.len());
        for card in &cards {
            println!("  [{}] {} - {}", card.element_id, card.title, card.short_description);
        }
    }

    if let Some(spotlight) = state.spotlight_view() {
        println!("\n=== Spotlight ===");
        println!("  background: {}", spotlight.background);
        print_nodes(&spotlight.nodes);
    }

    Ok(())
}

fn print_nodes(nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Heading { text } => println!("  # {}", text),
            Node::Paragraph { text } => println!("  {}", text),
            Node::Image { src, alt } => println!("  [image: {} ({})]", src, alt),
            Node::Link { href, text, .. } => println!("  {} -> {}", text, href),
        }
    }
}
