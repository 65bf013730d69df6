use std::fs;
use std::path::Path;

pub fn ensure_dir<P: AsRef<Path>>(p: P) -> std::io::Result<()> {
    if !p.as_ref().is_dir() {
        fs::create_dir_all(&p)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // second call is a no-op
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, b"x").unwrap();

        assert!(ensure_dir(file.join("sub")).is_err());
    }
}
