use std::path::Path;

use anyhow::{bail, Result};

const HOSTNAME_FILES: [&str; 2] = ["/proc/sys/kernel/hostname", "/etc/hostname"];

/// Look up this machine's hostname.
///
/// Asks the OS first; the Linux hostname files and `$HOSTNAME` are only
/// consulted when that yields nothing usable.
pub fn hostname() -> Result<String> {
    let files: Vec<&Path> = HOSTNAME_FILES.iter().map(|f| Path::new(*f)).collect();
    resolve_hostname(system_hostname(), &files, std::env::var("HOSTNAME").ok())
}

/// Hostname reported by the OS, if it is valid UTF-8 and non-empty.
pub fn system_hostname() -> Option<String> {
    match gethostname::gethostname().into_string() {
        Ok(name) => non_empty(&name),
        Err(raw) => {
            tracing::debug!(hostname = ?raw, "system hostname is not valid UTF-8");
            None
        }
    }
}

/// First non-empty name from `system`, then `files` in order, then `env_value`.
pub fn resolve_hostname(
    system: Option<String>,
    files: &[&Path],
    env_value: Option<String>,
) -> Result<String> {
    if let Some(name) = system.as_deref().and_then(non_empty) {
        return Ok(name);
    }

    for path in files {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                if let Some(name) = non_empty(&content) {
                    return Ok(name);
                }
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "hostname file unreadable");
            }
        }
    }

    match env_value.as_deref().and_then(non_empty) {
        Some(name) => Ok(name),
        None => bail!(
            "could not determine hostname: the OS reported none and {} and $HOSTNAME were empty; pass a seed explicitly",
            HOSTNAME_FILES.join(", ")
        ),
    }
}

fn non_empty(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}
