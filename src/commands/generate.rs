//! Generate the static site

use anyhow::Result;
use std::time::Instant;

use crate::content::{CommonMark, Disabled};
use crate::generator::Generator;
use crate::Site;

/// Options for one build
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Seed for the random post suggestion, for reproducible output
    pub seed: Option<u64>,
    /// Keep Markdown bodies as plain text
    pub no_markdown: bool,
}

/// Build the site from scratch into the output directory
pub fn run(site: &Site, options: &GenerateOptions) -> Result<()> {
    let start = Instant::now();

    let mut generator = match options.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };

    if options.no_markdown {
        let converter = Disabled::new("Markdown rendering disabled by --no-markdown");
        generator.generate(site, &converter)?;
    } else {
        generator.generate(site, &CommonMark)?;
    }

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
