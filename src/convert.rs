use std::path::Path;

use anyhow::{Context, Result, anyhow};

/// Decode the image at `from` and re-encode it at `to`.
///
/// The output format is picked by the `image` crate from the extension of
/// `to`. Errors carry the offending path and are propagated to the caller,
/// there is no recovery at this level.
pub(crate) fn convert(from: &Path, to: &Path) -> Result<()> {
    let image =
        image::open(from).with_context(|| anyhow!("Failed to decode {}", from.display()))?;

    image
        .save(to)
        .with_context(|| anyhow!("Failed to save {}", to.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn converts_between_formats() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("a.png");
        let to = temp.path().join("a.jpg");

        RgbImage::from_pixel(4, 4, Rgb([0, 128, 255]))
            .save(&from)
            .unwrap();

        convert(&from, &to).unwrap();

        let out = image::open(&to).unwrap();
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 4);
    }

    #[test]
    fn corrupt_input_is_an_error() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("a.png");
        let to = temp.path().join("a.jpg");

        std::fs::write(&from, b"not an image").unwrap();

        let e = convert(&from, &to).unwrap_err();
        assert!(e.to_string().contains("Failed to decode"));
        assert!(!to.exists());
    }
}
