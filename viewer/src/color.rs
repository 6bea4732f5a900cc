/// BT.601-style conversion of one normalized YUV sample to RGB.
///
/// Mirrors the formula in `gl_shaders/yuv_to_rgb.glsl`, constant for
/// constant. Used for the CPU dump path and for testing the formula
/// without a GL context.
pub fn yuv_to_rgb(y: f32, u: f32, v: f32) -> [f32; 3] {
    let y = 1.16438355 * (y - 0.0625);
    let u = u - 0.5;
    let v = v - 0.5;

    let r = (y + 1.596 * v).clamp(0.0, 1.0);
    let g = (y - 0.391 * u - 0.813 * v).clamp(0.0, 1.0);
    let b = (y + 2.018 * u).clamp(0.0, 1.0);

    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_chroma_is_achromatic() {
        let [r, g, b] = yuv_to_rgb(0.5, 0.5, 0.5);

        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn black_level_clamps_to_zero() {
        // 0.0625 is the luma black level, 16/256
        assert_eq!(yuv_to_rgb(0.0625, 0.5, 0.5), [0.0, 0.0, 0.0]);

        // anything below black level clamps the same way
        assert_eq!(yuv_to_rgb(0.0, 0.5, 0.5), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn full_luma_saturates() {
        let [r, g, b] = yuv_to_rgb(1.0, 0.5, 0.5);

        assert_eq!(r, 1.0);
        assert_eq!(g, 1.0);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn extreme_chroma_stays_in_range() {
        for (u, v) in [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)] {
            let rgb = yuv_to_rgb(0.5, u, v);

            for channel in rgb {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
