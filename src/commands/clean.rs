//! Clean the output directory

use anyhow::Result;

use crate::helpers::remove_dir;
use crate::Site;

/// Delete the generated site
pub fn run(site: &Site) -> Result<()> {
    if site.output_dir.exists() {
        remove_dir(&site.output_dir)?;
        tracing::info!("Deleted: {:?}", site.output_dir);
    }

    Ok(())
}
