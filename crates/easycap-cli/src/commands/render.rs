//! Render command implementation

use anyhow::{Context, Result};
use easycap::{CaptchaOptions, Exporter, FontResolver, ImageSize};
use easycap_export::{write_to_file, ExportFormat, JpegExporter};

use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs) -> Result<()> {
    let options = build_options(args);
    let resolver = args
        .font_dir
        .as_ref()
        .map(|dir| FontResolver::new(dir))
        .unwrap_or_else(FontResolver::bundled);

    if !args.quiet {
        eprintln!("easycap v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Rendering {} captcha at {}...", args.variant, options.image_size);
    }

    let renderer = args.variant.renderer(resolver);
    let image = renderer
        .render(&args.text, &options)
        .with_context(|| format!("rendering {} captcha", args.variant))?;

    let format = args
        .format
        .or_else(|| ExportFormat::from_path(&args.output))
        .unwrap_or_default();
    let exporter: Box<dyn Exporter> = match (format, args.quality) {
        (ExportFormat::Jpeg, Some(quality)) => Box::new(JpegExporter::with_quality(quality)),
        _ => format.exporter(),
    };
    log::info!("Encoding as {}", exporter.mime_type());

    write_to_file(&image, exporter.as_ref(), &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if !args.quiet {
        eprintln!("Saved {}", args.output.display());
    }
    Ok(())
}

fn build_options(args: &RenderArgs) -> CaptchaOptions {
    CaptchaOptions {
        font_size: args.font_size,
        image_size: ImageSize::new(args.width, args.height),
        background: args.background,
        foreground: args.foreground,
        rotation: args.rotate,
        seed: args.seed,
    }
}
