use turing_field::ImageF32;

/// Smooth, non-uniform field with distinct values along both axes.
pub fn gradient_field(width: usize, height: usize) -> ImageF32 {
    assert!(width > 0 && height > 0, "field dimensions must be positive");

    let mut img = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = x as f32 / width as f32 + 0.5 * y as f32 / height as f32;
            img.set(x, y, v);
        }
    }
    img
}

/// Dark field with a square bright block centred at (`cx`, `cy`).
pub fn spot_field(width: usize, height: usize, cx: usize, cy: usize, half: usize) -> ImageF32 {
    assert!(cx < width && cy < height, "spot centre must lie inside the field");

    let mut img = ImageF32::new(width, height);
    for y in cy.saturating_sub(half)..(cy + half + 1).min(height) {
        for x in cx.saturating_sub(half)..(cx + half + 1).min(width) {
            img.set(x, y, 1.0);
        }
    }
    img
}

pub fn min_max(img: &ImageF32) -> (f32, f32) {
    img.pixels()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
