use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct OutpostDirectory(PathBuf);

impl OutpostDirectory {
    pub fn new(p: PathBuf) -> Self {
        OutpostDirectory(p)
    }

    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(OutpostDirectory::new)
    }

    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }

    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::create_dir_all(self.0.as_path())?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }

    pub fn config_file(&self) -> PathBuf {
        self.0.join(crate::config::DEFAULT_FILE_NAME)
    }
}

/// Get the absolute path to the Outpost configuration folder.
///
/// This is a "Outpost" directory in the XDG standard configuration directory
/// for all OSes but Linux-based ones, for which it's `~/.outpost`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".outpost");

        #[cfg(not(target_os = "linux"))]
        path.push("Outpost");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_is_under_datadir() {
        let dir = OutpostDirectory::new(PathBuf::from("/tmp/outpost-test"));
        assert_eq!(
            dir.config_file(),
            PathBuf::from("/tmp/outpost-test").join(crate::config::DEFAULT_FILE_NAME)
        );
    }
}
