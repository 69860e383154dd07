use super::Blur;
use crate::image::ImageF32;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Separable box blur with replicate-border clamping.
///
/// Owns the intermediate horizontal-pass buffer and the column accumulators
/// so repeated calls on a fixed-size field do not allocate.
#[derive(Clone, Debug, Default)]
pub struct BoxBlur {
    horiz: ImageF32,
    col_acc: Vec<f64>,
}

impl BoxBlur {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Blur for BoxBlur {
    fn blur(&mut self, src: &ImageF32, radius: u32, weight: u32, out: &mut ImageF32) {
        out.ensure_shape(src.w, src.h);
        if src.is_empty() {
            return;
        }
        let radius = radius as usize;
        let window = (2 * radius + 1) as f64;
        let scale = weight as f64 / (window * window);

        self.horiz.ensure_shape(src.w, src.h);
        horizontal_sums(src, &mut self.horiz, radius);
        vertical_sums(&self.horiz, out, radius, scale, &mut self.col_acc);
    }
}

fn horizontal_sums(src: &ImageF32, dst: &mut ImageF32, radius: usize) {
    let w = src.w;
    #[cfg(feature = "parallel")]
    {
        dst.pixels_mut()
            .par_chunks_mut(w)
            .zip(src.pixels().par_chunks(w))
            .for_each(|(d, s)| row_window_sums(s, d, radius));
    }
    #[cfg(not(feature = "parallel"))]
    {
        dst.pixels_mut()
            .chunks_mut(w)
            .zip(src.pixels().chunks(w))
            .for_each(|(d, s)| row_window_sums(s, d, radius));
    }
}

/// Sliding `2r+1` window sum along one row, clamping indices at both ends.
fn row_window_sums(src: &[f32], dst: &mut [f32], radius: usize) {
    let last = src.len() as isize - 1;
    let r = radius as isize;
    let at = |i: isize| src[i.clamp(0, last) as usize] as f64;

    let mut acc: f64 = (-r..=r).map(at).sum();
    for (x, out) in dst.iter_mut().enumerate() {
        *out = acc as f32;
        let x = x as isize;
        acc += at(x + r + 1) - at(x - r);
    }
}

/// Sliding window sum down the columns, sweeping rows so that memory access
/// stays sequential. Writes `sum * scale` into `out`.
fn vertical_sums(
    src: &ImageF32,
    out: &mut ImageF32,
    radius: usize,
    scale: f64,
    acc: &mut Vec<f64>,
) {
    let last = src.h as isize - 1;
    let r = radius as isize;
    let clamp_row = |y: isize| y.clamp(0, last) as usize;

    acc.clear();
    acc.resize(src.w, 0.0);
    for dy in -r..=r {
        for (a, &v) in acc.iter_mut().zip(src.row(clamp_row(dy))) {
            *a += v as f64;
        }
    }

    for y in 0..src.h {
        for (d, &a) in out.row_mut(y).iter_mut().zip(acc.iter()) {
            *d = (a * scale) as f32;
        }
        let yi = y as isize;
        let add = src.row(clamp_row(yi + r + 1));
        let sub = src.row(clamp_row(yi - r));
        for ((a, &p), &m) in acc.iter_mut().zip(add).zip(sub) {
            *a += p as f64 - m as f64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_box(src: &ImageF32, radius: usize, weight: u32) -> ImageF32 {
        let mut out = ImageF32::new(src.w, src.h);
        let r = radius as isize;
        let n = ((2 * radius + 1) * (2 * radius + 1)) as f64;
        for y in 0..src.h {
            for x in 0..src.w {
                let mut sum = 0.0f64;
                for dy in -r..=r {
                    for dx in -r..=r {
                        let sx = (x as isize + dx).clamp(0, src.w as isize - 1) as usize;
                        let sy = (y as isize + dy).clamp(0, src.h as isize - 1) as usize;
                        sum += src.get(sx, sy) as f64;
                    }
                }
                out.set(x, y, (sum / n * weight as f64) as f32);
            }
        }
        out
    }

    fn ramp(w: usize, h: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, ((x * 7 + y * 13) % 17) as f32 / 16.0);
            }
        }
        img
    }

    #[test]
    fn matches_naive_clamped_box() {
        let src = ramp(13, 9);
        let mut blur = BoxBlur::new();
        for (radius, weight) in [(1u32, 1u32), (3, 2), (20, 1)] {
            let mut out = ImageF32::new(src.w, src.h);
            blur.blur(&src, radius, weight, &mut out);
            let expected = naive_box(&src, radius as usize, weight);
            for (a, b) in out.pixels().iter().zip(expected.pixels()) {
                assert!((a - b).abs() < 1e-5, "radius={radius}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn uniform_field_stays_uniform() {
        let src = ImageF32::filled(8, 5, 0.5);
        let mut out = ImageF32::new(8, 5);
        BoxBlur::new().blur(&src, 4, 1, &mut out);
        assert!(out.pixels().iter().all(|&v| (v - 0.5).abs() < 1e-6));
    }

    #[test]
    fn mismatched_output_is_reshaped() {
        let src = ImageF32::filled(7, 4, 0.25);
        let mut out = ImageF32::new(2, 3);
        BoxBlur::new().blur(&src, 1, 2, &mut out);
        assert!(out.same_shape(&src));
        assert!(out.pixels().iter().all(|&v| (v - 0.5).abs() < 1e-6));
    }

    #[test]
    fn zero_weight_yields_zero_field() {
        let src = ramp(6, 6);
        let mut out = ImageF32::filled(6, 6, 1.0);
        BoxBlur::new().blur(&src, 2, 0, &mut out);
        assert!(out.pixels().iter().all(|&v| v == 0.0));
    }
}
