//! Download of the remote CSV listing.

use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};
use tokio::io::AsyncWriteExt;

use crate::error_handling::AcquireError;

/// Downloads `url` to `path` unless `path` already exists.
///
/// The local file is created with create-new semantics before the request is
/// sent, so an existing copy is never touched. Any non-2xx status is an
/// error; there are no retries. On failure the placeholder is removed so the
/// next run downloads again.
///
/// # Returns
///
/// `true` if the file was downloaded, `false` if it already existed.
pub async fn download_if_missing(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
) -> Result<bool, AcquireError> {
    let io_err = |source| AcquireError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let file = match tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            info!(
                "Dataset already downloaded (delete {} if you want to redownload source data)",
                path.display()
            );
            return Ok(false);
        }
        Err(e) => return Err(io_err(e)),
    };

    info!("Downloading dataset from {url}");
    match fetch_into(client, url, file, path).await {
        Ok(bytes) => {
            info!("Saved {} bytes to {}", bytes, path.display());
            Ok(true)
        }
        Err(e) => {
            if let Err(remove_err) = tokio::fs::remove_file(path).await {
                warn!(
                    "Failed to remove incomplete download {}: {remove_err}",
                    path.display()
                );
            }
            Err(e)
        }
    }
}

async fn fetch_into(
    client: &reqwest::Client,
    url: &str,
    mut file: tokio::fs::File,
    path: &Path,
) -> Result<u64, AcquireError> {
    let request_err = |source| AcquireError::Request {
        url: url.to_string(),
        source,
    };
    let io_err = |source| AcquireError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut response = client.get(url).send().await.map_err(request_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(AcquireError::Status {
            url: url.to_string(),
            status,
        });
    }

    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await.map_err(request_err)? {
        file.write_all(&chunk).await.map_err(io_err)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(io_err)?;
    Ok(written)
}
