use crate::errors::AppError;
use crate::models::SmileLog;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    match env::var("SMILEBACK_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/smiles.json"),
    }
}

/// A missing file is a first run; anything else unreadable degrades to an
/// empty log rather than refusing to start.
pub async fn load_log(path: &Path) -> SmileLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(log) => log,
            Err(err) => {
                error!("failed to parse smile log: {err}");
                SmileLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => SmileLog::default(),
        Err(err) => {
            error!("failed to read smile log: {err}");
            SmileLog::default()
        }
    }
}

pub async fn persist_log(path: &Path, log: &SmileLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(log).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
