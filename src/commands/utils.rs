use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory, leaving other paths untouched.
pub fn expand_tilde(path: &Path) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir())
}

fn expand_tilde_with(path: &Path, home: Option<PathBuf>) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Read the named file, or all of standard input when no path is given.
pub fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(expand_tilde(path)),
        None => {
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

/// Write the SVG to the named file, or to standard output when no path is given.
pub fn write_output(path: Option<&Path>, svg: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(expand_tilde(path), svg),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()
        }
    }
}
