use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tokio::io;

use lanscout_common::config::ShareConfig;
use lanscout_common::envelope::FileList;
use lanscout_core::discovery::DiscoveryService;

use crate::terminal;

pub async fn list(service: &DiscoveryService, share: &str, path: &str) -> anyhow::Result<()> {
    match service.list_files(share, path).await {
        Ok(files) => terminal::render(&FileList::new(files)),
        Err(err) => terminal::render_failure(err),
    }
}

pub async fn fetch(
    service: &DiscoveryService,
    share: &str,
    path: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut file = match service.fetch_file(share, path).await {
        Ok(file) => file,
        Err(err) => return terminal::render_failure(err),
    };

    match output {
        Some(dest) => {
            let mut out = tokio::fs::File::create(dest)
                .await
                .with_context(|| format!("creating {}", dest.display()))?;
            io::copy(&mut file, &mut out).await?;
        }
        None => {
            io::copy(&mut file, &mut io::stdout()).await?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct Uploaded {
    success: bool,
    message: &'static str,
}

pub async fn upload(
    service: &DiscoveryService,
    share: &str,
    file: &Path,
    path: &str,
) -> anyhow::Result<()> {
    let name = file
        .file_name()
        .with_context(|| format!("{} has no file name", file.display()))?
        .to_string_lossy()
        .into_owned();
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;

    match service.upload(share, path, &name, &bytes).await {
        Ok(()) => terminal::render(&Uploaded {
            success: true,
            message: "File uploaded successfully",
        }),
        Err(err) => terminal::render_failure(err),
    }
}

/// The local-share variant of `files`: same listing, rooted at this
/// machine's own share directory, created on first use.
pub async fn local(service: &DiscoveryService, root: &Path, path: &str) -> anyhow::Result<()> {
    let share = ShareConfig::new(root);
    share.prepare()?;
    list(service, &share.root.to_string_lossy(), path).await
}
