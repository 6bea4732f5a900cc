#[rustfmt::skip]
pub const QUAD: [f32; 30] = [
    -1.0, -1.0, 0.0,    0.0, 1.0,
    1.0, -1.0, 0.0,     1.0, 1.0,
    1.0, 1.0, 0.0,      1.0, 0.0,
    1.0, 1.0, 0.0,      1.0, 0.0,
    -1.0, 1.0, 0.0,     0.0, 0.0,
    -1.0, -1.0, 0.0,    0.0, 1.0,
];

pub mod geometry;
pub mod program;
pub mod renderer;
pub mod texture;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_layout() {
        // 6 vertices, vec3 position + vec2 texcoord each
        assert_eq!(QUAD.len(), 6 * 5);

        for vertex in QUAD.chunks(5) {
            assert_eq!(vertex[0].abs(), 1.0);
            assert_eq!(vertex[1].abs(), 1.0);
            assert_eq!(vertex[2], 0.0);
            assert!(vertex[3] == 0.0 || vertex[3] == 1.0);
            assert!(vertex[4] == 0.0 || vertex[4] == 1.0);
        }
    }
}
