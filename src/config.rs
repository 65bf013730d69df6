use crate::model::{GEOCACHE_ICONS, IconDescriptor};
use std::path::{Path, PathBuf};

pub const SPRITE_RELATIVE_PATH: &str = "src/browser/assets/geocaching-sprite.png";
pub const OUTPUT_RELATIVE_DIR: &str = "src/browser/assets/geocache-icons";

#[derive(Clone, Debug)]
pub struct Config {
    pub sprite_path: PathBuf,
    pub output_dir: PathBuf,
    pub icons: Vec<IconDescriptor>,
    /// 1 cuts icons one after another; anything else uses a rayon pool (0 = rayon's default).
    pub thread_count: usize,
}

impl Config {
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            sprite_path: root.join(SPRITE_RELATIVE_PATH),
            output_dir: root.join(OUTPUT_RELATIVE_DIR),
            icons: GEOCACHE_ICONS.to_vec(),
            thread_count: 1,
        }
    }

    pub fn with_icons(mut self, icons: Vec<IconDescriptor>) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_thread_count(mut self, count: usize) -> Self {
        self.thread_count = count;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_root(install_root())
    }
}

/// Parent of the directory holding the running executable, so the tool
/// finds its assets no matter where it is launched from.
pub fn install_root() -> PathBuf {
    match std::env::current_exe().and_then(|exe| exe.canonicalize()) {
        Ok(exe) => root_of_executable(&exe).unwrap_or_else(|| {
            log::warn!("{} has no install root, using current directory", exe.display());
            PathBuf::from(".")
        }),
        Err(e) => {
            log::warn!("Cannot locate executable ({}), using current directory", e);
            PathBuf::from(".")
        }
    }
}

fn root_of_executable(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}
