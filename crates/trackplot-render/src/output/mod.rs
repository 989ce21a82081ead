//! Canvas export: PDF + PNG per saved plot, optional native SVG.

#[cfg(feature = "pdf")]
pub mod pdf;
#[cfg(feature = "png")]
pub mod png;

use std::path::Path;

use crate::Result;
use crate::pad::Pad;

/// Save the pad under `dir/name`: re-strokes the axes (bars painted over
/// the frame otherwise leave a ragged border), then writes `<name>.pdf`
/// and `<name>.png`. With `native` set, the canvas's own serialization is
/// written as `<name>.svg` too. The directory is created if missing.
pub fn save(pad: &mut Pad, dir: impl AsRef<Path>, name: &str, native: bool) -> Result<()> {
    pad.redraw_axis();
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let svg = pad.to_svg();

    #[cfg(feature = "pdf")]
    {
        let path = dir.join(format!("{name}.pdf"));
        std::fs::write(&path, pdf::svg_to_pdf(&svg)?)?;
        log::info!("wrote {}", path.display());
    }
    #[cfg(feature = "png")]
    {
        let path = dir.join(format!("{name}.png"));
        std::fs::write(&path, png::svg_to_png(&svg, pad.config().output.dpi)?)?;
        log::info!("wrote {}", path.display());
    }
    if native {
        let path = dir.join(format!("{name}.svg"));
        std::fs::write(&path, &svg)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
