//! Owned single-channel f32 field in row-major layout (stride == width).
//!
//! This is the scalar field the engine evolves. Between steps its values stay
//! in `[0, 1]` (the normalizer enforces it); the buffer is mutated in place
//! and reused for the lifetime of the controller.
use crate::error::FieldError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageF32 {
    /// Field width in pixels
    pub w: usize,
    /// Field height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0.0)
    }

    /// Construct a `w × h` buffer with every pixel set to `value`.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Like [`ImageF32::new`] but rejects empty dimensions.
    pub fn try_new(w: usize, h: usize) -> Result<Self, FieldError> {
        check_dimensions(w, h)?;
        Ok(Self::new(w, h))
    }

    /// Wrap an existing row-major buffer. `data.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Result<Self, FieldError> {
        check_dimensions(w, h)?;
        if data.len() != w * h {
            return Err(FieldError::InvalidDimension {
                width: w,
                height: h,
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.w * self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn same_shape(&self, other: &ImageF32) -> bool {
        self.w == other.w && self.h == other.h
    }

    /// Reallocate to `w × h` if the current shape differs. Contents are
    /// unspecified afterwards.
    pub fn ensure_shape(&mut self, w: usize, h: usize) {
        if self.w != w || self.h != h {
            *self = ImageF32::new(w, h);
        }
    }

    /// Pixels of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    /// Contiguous pixel slice (always available since `stride == w`).
    #[inline]
    pub fn pixels(&self) -> &[f32] {
        &self.data[..self.w * self.h]
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [f32] {
        let len = self.w * self.h;
        &mut self.data[..len]
    }
}

pub(crate) fn check_dimensions(w: usize, h: usize) -> Result<(), FieldError> {
    if w == 0 || h == 0 {
        Err(FieldError::InvalidDimension {
            width: w,
            height: h,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_field_is_rejected() {
        assert!(matches!(
            ImageF32::try_new(0, 4),
            Err(FieldError::InvalidDimension { width: 0, height: 4 })
        ));
        assert!(ImageF32::try_new(4, 0).is_err());
        assert!(ImageF32::try_new(3, 2).is_ok());
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(ImageF32::from_vec(2, 2, vec![0.0; 3]).is_err());
        let img = ImageF32::from_vec(2, 2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(img.get(1, 1), 3.0);
        assert_eq!(img.row(1), &[2.0, 3.0]);
    }

    #[test]
    fn ensure_shape_only_reallocates_on_change() {
        let mut img = ImageF32::filled(3, 3, 0.5);
        img.ensure_shape(3, 3);
        assert_eq!(img.get(2, 2), 0.5);
        img.ensure_shape(4, 2);
        assert_eq!((img.w, img.h, img.stride, img.data.len()), (4, 2, 4, 8));
    }
}
