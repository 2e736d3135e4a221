//! Fonts command implementation

use anyhow::Result;
use easycap::{FontResolver, SINA_FONT};

use crate::cli::FontsArgs;

pub fn run(args: &FontsArgs) -> Result<()> {
    let resolver = args
        .font_dir
        .as_ref()
        .map(|dir| FontResolver::new(dir))
        .unwrap_or_else(FontResolver::bundled);

    println!("Font directory: {}", resolver.font_dir().display());
    for (name, found) in resolver.available() {
        let marker = if name == SINA_FONT { " (sina)" } else { "" };
        let status = if found { "ok" } else { "missing" };
        println!("  {:<28} {}{}", name, status, marker);
    }
    Ok(())
}
