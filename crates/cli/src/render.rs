use anyhow::{Context, Result};
use rectangle::{Dimension, Rectangle};
use std::fs;
use std::io::Write;
use std::path::Path;

/// One display line per dimension mapping, in walk order.
pub fn lines(rect: &Rectangle) -> Vec<String> {
    rect.dimensions().map(|d| d.to_string()).collect()
}

/// Write each mapping followed by a newline.
pub fn write_lines<W: Write>(rect: &Rectangle, out: &mut W) -> Result<()> {
    for line in lines(rect) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Write `[{"length": ..}, {"width": ..}]` to `path`, creating parent dirs.
pub fn write_json<P: AsRef<Path>>(rect: &Rectangle, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let dims: Vec<Dimension> = rect.dimensions().collect();
    fs::write(path, serde_json::to_vec_pretty(&dims)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
