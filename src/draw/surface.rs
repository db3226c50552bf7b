//! Raster surfaces and the committed/preview layer pair.

use crate::error::SketchError;

/// A fixed-size ARGB32 raster surface.
///
/// Wraps a [`cairo::ImageSurface`]; drawing goes through short-lived
/// [`cairo::Context`]s created per operation so the surface stays exclusively
/// owned and its pixels remain readable.
pub struct Surface {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Surface {
    /// Allocates a fully transparent surface at the given pixel dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, SketchError> {
        if width <= 0 || height <= 0 {
            return Err(SketchError::InvalidDimensions { width, height });
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Creates a drawing context for this surface.
    pub(crate) fn context(&self) -> Result<cairo::Context, SketchError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Erases the whole surface to fully transparent.
    pub fn clear(&self) -> Result<(), SketchError> {
        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    /// Erases an axis-aligned rectangle to fully transparent.
    ///
    /// Regions extending past the surface bounds are clipped by cairo.
    pub fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) -> Result<(), SketchError> {
        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.rectangle(x, y, width, height);
        ctx.fill()?;
        Ok(())
    }

    /// Paints another surface's pixel content over this one at the origin.
    pub fn composite_from(&self, other: &Surface) -> Result<(), SketchError> {
        let ctx = self.context()?;
        ctx.set_source_surface(&other.surface, 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// Encodes the current pixel content as PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>, SketchError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    /// Reads back a single pixel as `(r, g, b, a)` bytes.
    ///
    /// Returns `None` for coordinates outside the surface. Components are
    /// premultiplied by alpha, as stored by the ARGB32 format.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<(u8, u8, u8, u8)>, SketchError> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Ok(None);
        }

        self.surface.flush();
        let stride = self.surface.stride();
        let data = self.surface.data()?;
        let offset = (y * stride + x * 4) as usize;

        // ARgb32 packs each pixel as a native-endian 0xAARRGGBB word; on
        // little-endian machines the byte order is B, G, R, A.
        let b = data[offset];
        let g = data[offset + 1];
        let r = data[offset + 2];
        let a = data[offset + 3];
        Ok(Some((r, g, b, a)))
    }
}

/// The two stacked layers of the sketch: durable output plus live preview.
///
/// Both layers always share the same pixel dimensions. The preview layer is
/// empty except while a drag gesture is in progress; on release its content
/// is composited onto the committed layer and it is cleared again.
pub struct SurfaceSet {
    committed: Surface,
    preview: Surface,
}

impl SurfaceSet {
    /// Allocates both layers, fully transparent, at the given dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, SketchError> {
        Ok(Self {
            committed: Surface::new(width, height)?,
            preview: Surface::new(width, height)?,
        })
    }

    /// Recreates both layers blank at the new dimensions.
    ///
    /// Committed pixel content is discarded, not rescaled; resize is a
    /// capacity change, not a transform.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SketchError> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Layer width in pixels.
    pub fn width(&self) -> i32 {
        self.committed.width()
    }

    /// Layer height in pixels.
    pub fn height(&self) -> i32 {
        self.committed.height()
    }

    /// The durable output layer.
    pub fn committed(&self) -> &Surface {
        &self.committed
    }

    /// Mutable access to the durable output layer (pixel readback).
    pub fn committed_mut(&mut self) -> &mut Surface {
        &mut self.committed
    }

    /// The ephemeral preview layer.
    pub fn preview(&self) -> &Surface {
        &self.preview
    }

    /// Mutable access to the preview layer (pixel readback).
    pub fn preview_mut(&mut self) -> &mut Surface {
        &mut self.preview
    }

    /// Composites the preview layer onto the committed layer, then clears
    /// the preview.
    pub fn commit_preview(&self) -> Result<(), SketchError> {
        self.committed.composite_from(&self.preview)?;
        self.preview.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(SketchError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Surface::new(10, -1),
            Err(SketchError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn new_surface_is_fully_transparent() {
        let mut surface = Surface::new(8, 8).unwrap();
        assert_eq!(surface.pixel(0, 0).unwrap(), Some((0, 0, 0, 0)));
        assert_eq!(surface.pixel(7, 7).unwrap(), Some((0, 0, 0, 0)));
        assert_eq!(surface.pixel(8, 8).unwrap(), None);
    }

    #[test]
    fn clear_rect_punches_a_transparent_hole() {
        let mut surface = Surface::new(16, 16).unwrap();
        {
            let ctx = surface.context().unwrap();
            ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
            ctx.paint().unwrap();
        }
        surface.clear_rect(4.0, 4.0, 4.0, 4.0).unwrap();

        assert_eq!(surface.pixel(5, 5).unwrap(), Some((0, 0, 0, 0)));
        assert_eq!(surface.pixel(0, 0).unwrap(), Some((255, 0, 0, 255)));
    }

    #[test]
    fn clear_rect_past_bounds_is_clipped_not_an_error() {
        let surface = Surface::new(8, 8).unwrap();
        surface.clear_rect(6.0, 6.0, 100.0, 100.0).unwrap();
        surface.clear_rect(-50.0, -50.0, 10.0, 10.0).unwrap();
    }

    #[test]
    fn commit_preview_moves_content_and_empties_preview() {
        let mut set = SurfaceSet::new(16, 16).unwrap();
        {
            let ctx = set.preview().context().unwrap();
            ctx.set_source_rgba(0.0, 0.0, 1.0, 1.0);
            ctx.rectangle(2.0, 2.0, 4.0, 4.0);
            ctx.fill().unwrap();
        }

        set.commit_preview().unwrap();

        assert_eq!(set.committed_mut().pixel(3, 3).unwrap(), Some((0, 0, 255, 255)));
        assert_eq!(set.preview_mut().pixel(3, 3).unwrap(), Some((0, 0, 0, 0)));
    }

    #[test]
    fn resize_discards_committed_content() {
        let mut set = SurfaceSet::new(16, 16).unwrap();
        {
            let ctx = set.committed().context().unwrap();
            ctx.set_source_rgba(0.0, 1.0, 0.0, 1.0);
            ctx.paint().unwrap();
        }

        set.resize(32, 24).unwrap();

        assert_eq!(set.width(), 32);
        assert_eq!(set.height(), 24);
        assert_eq!(set.committed_mut().pixel(1, 1).unwrap(), Some((0, 0, 0, 0)));
    }

    #[test]
    fn png_bytes_have_png_signature() {
        let surface = Surface::new(4, 4).unwrap();
        let bytes = surface.png_bytes().unwrap();
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
