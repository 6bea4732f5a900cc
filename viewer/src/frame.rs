use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::color::yuv_to_rgb;

/// A single planar YUV 4:2:0 frame, one contiguous buffer holding the
/// full-resolution luma plane followed by the two quarter-resolution
/// chroma planes.
pub struct YuvFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl YuvFrame {
    pub fn from_bytes(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FrameError> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }

        let expected = frame_len(width, height);
        if data.len() != expected {
            return Err(FrameError::UnexpectedLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_file(path: &Path, width: usize, height: usize) -> Result<Self, FrameError> {
        let data = fs::read(path)?;

        Self::from_bytes(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn y_plane(&self) -> &[u8] {
        &self.data[..self.width * self.height]
    }

    pub fn u_plane(&self) -> &[u8] {
        let luma = self.width * self.height;

        &self.data[luma..luma + luma / 4]
    }

    pub fn v_plane(&self) -> &[u8] {
        let luma = self.width * self.height;

        &self.data[luma + luma / 4..]
    }

    /// CPU conversion to RGBA8, sampling the nearest chroma texel per pixel.
    pub fn to_rgba(&self) -> Vec<u8> {
        let (w, h) = (self.width, self.height);
        let chroma_w = w / 2;

        let y_plane = self.y_plane();
        let u_plane = self.u_plane();
        let v_plane = self.v_plane();

        let mut out = Vec::with_capacity(w * h * 4);

        for row in 0..h {
            for col in 0..w {
                let chroma = (row / 2) * chroma_w + col / 2;

                let y = y_plane[row * w + col] as f32 / 255.0;
                let u = u_plane[chroma] as f32 / 255.0;
                let v = v_plane[chroma] as f32 / 255.0;

                let [r, g, b] = yuv_to_rgb(y, u, v);

                out.push((r * 255.0) as u8);
                out.push((g * 255.0) as u8);
                out.push((b * 255.0) as u8);
                out.push(255);
            }
        }

        out
    }
}

pub fn frame_len(width: usize, height: usize) -> usize {
    width * height + 2 * ((width / 2) * (height / 2))
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame dimensions must be even and nonzero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("expected {expected} bytes of 4:2:0 frame data, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },
    #[error("could not read frame data: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_len_cif() {
        // the reference sample's frame size
        assert_eq!(frame_len(352, 288), 152_064);
    }

    #[test]
    fn plane_slicing() {
        let mut data = vec![0_u8; frame_len(4, 2)];

        data[..8].fill(1);
        data[8..10].fill(2);
        data[10..].fill(3);

        let frame = YuvFrame::from_bytes(4, 2, data).unwrap();

        assert_eq!(frame.y_plane(), &[1; 8]);
        assert_eq!(frame.u_plane(), &[2; 2]);
        assert_eq!(frame.v_plane(), &[3; 2]);
    }

    #[test]
    fn rejects_wrong_length() {
        let res = YuvFrame::from_bytes(4, 2, vec![0; 13]);

        assert!(matches!(
            res,
            Err(FrameError::UnexpectedLength {
                expected: 12,
                actual: 13
            })
        ));
    }

    #[test]
    fn rejects_odd_dimensions() {
        let res = YuvFrame::from_bytes(3, 2, vec![0; frame_len(3, 2)]);

        assert!(matches!(res, Err(FrameError::InvalidDimensions { .. })));

        let res = YuvFrame::from_bytes(0, 0, Vec::new());

        assert!(matches!(res, Err(FrameError::InvalidDimensions { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let res = YuvFrame::from_file(Path::new("/nonexistent/frame.yuv"), 4, 2);

        assert!(matches!(res, Err(FrameError::Io(_))));
    }

    #[test]
    fn mid_gray_converts_achromatic() {
        let data = vec![128_u8; frame_len(4, 2)];
        let frame = YuvFrame::from_bytes(4, 2, data).unwrap();

        let rgba = frame.to_rgba();

        assert_eq!(rgba.len(), 4 * 2 * 4);

        // 128/255 is not exactly 0.5, so allow one quantization step per term
        for pixel in rgba.chunks(4) {
            assert!(pixel[0].abs_diff(pixel[1]) <= 2);
            assert!(pixel[1].abs_diff(pixel[2]) <= 2);
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn black_level_converts_to_black() {
        let mut data = vec![16_u8; 4 * 2];
        data.extend_from_slice(&[128; 4]);

        let frame = YuvFrame::from_bytes(4, 2, data).unwrap();

        for pixel in frame.to_rgba().chunks(4) {
            assert!(pixel[..3].iter().all(|c| *c <= 1));
        }
    }
}
