//! kustomize CLI adapter.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ManifestBuilder;

/// Shells out to `kustomize build`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KustomizeCli;

impl ManifestBuilder for KustomizeCli {
    fn build(&self, dir: &Path) -> Result<String, AppError> {
        let output = Command::new("kustomize")
            .arg("build")
            .arg(dir)
            .current_dir(dir.parent().unwrap_or(dir))
            .output();

        let output = match output {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::KustomizeNotFound);
            }
            other => other?,
        };

        if !output.status.success() {
            return Err(AppError::KustomizeFailed {
                dir: dir.to_path_buf(),
                details: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
