use crate::domain::ports::Storage;
use crate::utils::error::{RegistryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Missing,
    /// The file existed but could not be read or parsed; the reason is kept for reporting.
    Recovered(String),
}

/// Result of [`load`]. Never an error: failures fall back to `T::default()`.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub status: LoadStatus,
}

impl<T> Loaded<T> {
    pub fn was_defaulted(&self) -> bool {
        !matches!(self.status, LoadStatus::Loaded)
    }
}

/// Writes `value` as indented JSON, replacing whatever was at `path`.
pub fn save<T, S>(storage: &S, value: &T, path: &str) -> Result<()>
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    let json = serde_json::to_vec_pretty(value)?;
    storage.write_file(path, &json)?;
    tracing::debug!("Wrote {} bytes to {}", json.len(), path);
    Ok(())
}

pub fn load<T, S>(storage: &S, path: &str) -> Loaded<T>
where
    T: DeserializeOwned + Default,
    S: Storage + ?Sized,
{
    let bytes = match storage.read_file(path) {
        Ok(bytes) => bytes,
        Err(RegistryError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No data file at {}, starting empty", path);
            return Loaded {
                value: T::default(),
                status: LoadStatus::Missing,
            };
        }
        Err(e) => return recovered(path, e),
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Loaded {
            value,
            status: LoadStatus::Loaded,
        },
        Err(e) => recovered(path, RegistryError::SerializationError(e)),
    }
}

fn recovered<T: Default>(path: &str, error: RegistryError) -> Loaded<T> {
    tracing::warn!("Failed to load {}: {}", path, error);
    Loaded {
        value: T::default(),
        status: LoadStatus::Recovered(error.to_string()),
    }
}
