//! CLI entry point for makesite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use makesite_rs::commands::generate::GenerateOptions;

#[derive(Parser)]
#[command(name = "makesite")]
#[command(version)]
#[command(about = "A small static site and blog generator", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new blog post
    New {
        /// Title of the new post
        title: String,

        /// Tag used to group the post
        #[arg(short, long)]
        tag: Option<String>,

        /// Write a Markdown file instead of HTML
        #[arg(short, long)]
        markdown: bool,
    },

    /// Generate the site
    #[command(alias = "g")]
    Generate {
        /// Seed for the random post suggestion
        #[arg(long)]
        seed: Option<u64>,

        /// Keep Markdown bodies as plain text
        #[arg(long)]
        no_markdown: bool,
    },

    /// Generate the site and serve it locally
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Delete the output directory
    Clean,

    /// List the blog posts
    List {
        /// Print the posts as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "makesite_rs=debug,info"
    } else {
        "makesite_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            makesite_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            title,
            tag,
            markdown,
        } => {
            let site = makesite_rs::Site::new(&base_dir)?;
            let path =
                makesite_rs::commands::new::create_post(&site, &title, tag.as_deref(), markdown)?;
            println!("Created: {:?}", path);
        }

        Commands::Generate { seed, no_markdown } => {
            let site = makesite_rs::Site::new(&base_dir)?;
            tracing::info!("Generating site...");
            let options = GenerateOptions { seed, no_markdown };
            makesite_rs::commands::generate::run(&site, &options)?;
            println!("Generated successfully!");
        }

        Commands::Serve { port, ip } => {
            let site = makesite_rs::Site::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating site...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            makesite_rs::server::start(&site, &ip, port).await?;
        }

        Commands::Clean => {
            let site = makesite_rs::Site::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { json } => {
            let site = makesite_rs::Site::new(&base_dir)?;
            makesite_rs::commands::list::run(&site, json)?;
        }
    }

    Ok(())
}
