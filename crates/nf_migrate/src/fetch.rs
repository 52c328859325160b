use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{MigrateError, Result};
use crate::util::CliOutput;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("nf_migrate/", env!("CARGO_PKG_VERSION"));

#[must_use]
pub fn cache_path(cache_dir: &Path, label: &str) -> PathBuf {
    cache_dir.join(format!(".nf_cache_{label}.css"))
}

/// Fetch a reference stylesheet, caching the body on disk keyed by the
/// generation label. A present cache file short-circuits the network
/// entirely, regardless of age, unless `force_refresh` is set.
pub fn fetch_stylesheet(
    url: &str,
    label: &str,
    cache_dir: &Path,
    force_refresh: bool,
    ui: &CliOutput,
) -> Result<String> {
    let cache = cache_path(cache_dir, label);
    if !force_refresh && cache.exists() {
        ui.info(&format!("using cached {}", cache.display()));
        return Ok(fs::read_to_string(&cache)?);
    }

    ui.info(&format!("downloading {url}"));
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| MigrateError::Http {
            url: url.to_string(),
            source,
        })?;
    let body = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(|source| MigrateError::Http {
            url: url.to_string(),
            source,
        })?;

    fs::create_dir_all(cache_dir)?;
    fs::write(&cache, &body)?;
    ui.info(&format!("saved {} ({} bytes)", cache.display(), body.len()));
    Ok(body)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::util::CliOutput;

    use super::{cache_path, fetch_stylesheet};

    #[test]
    fn cache_path_is_keyed_by_label() {
        let dir = std::path::Path::new("/tmp/cache");
        assert_eq!(
            cache_path(dir, "v2"),
            std::path::Path::new("/tmp/cache/.nf_cache_v2.css")
        );
    }

    #[test]
    fn present_cache_file_short_circuits_the_network() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join(".nf_cache_v2.css"), ".nf-mdi-a:before {}")
            .expect("seed cache");

        // The URL is unreachable on purpose; the cache must win.
        let body = fetch_stylesheet(
            "http://127.0.0.1:1/unreachable.css",
            "v2",
            temp.path(),
            false,
            &CliOutput::new(false),
        )
        .expect("cached fetch");
        assert_eq!(body, ".nf-mdi-a:before {}");
    }

    #[test]
    fn force_refresh_bypasses_cache_and_surfaces_fetch_failure() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join(".nf_cache_v2.css"), "stale").expect("seed cache");

        let error = fetch_stylesheet(
            "http://127.0.0.1:1/unreachable.css",
            "v2",
            temp.path(),
            true,
            &CliOutput::new(false),
        )
        .expect_err("refresh against unreachable host should fail");
        assert!(matches!(error, crate::error::MigrateError::Http { .. }));
    }
}
