use thiserror::Error;

use gl_wrapper::geometry::{Geometry, GeometryBuilder, GeometryError, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder, ProgramError};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::texture::{Texture2D, TextureError, TextureFilter, TextureFormat};
use gl_wrapper::QUAD;

use crate::frame::YuvFrame;

/// Owns the GL-side state for displaying one YUV frame: the conversion
/// program, the full-screen quad and the three plane textures.
///
/// Requires a current GL context. The planes are uploaded once at
/// construction and never reloaded.
pub struct FrameRenderer {
    program: Program,
    quad: Geometry,
    y_texture: Texture2D,
    u_texture: Texture2D,
    v_texture: Texture2D,
    samplers: [i32; 3],
}

impl FrameRenderer {
    pub fn new(frame: &YuvFrame) -> Result<Self, RendererError> {
        let program = ProgramBuilder::new(
            include_str!("gl_shaders/quad.glsl"),
            include_str!("gl_shaders/yuv_to_rgb.glsl"),
        )
        .build()?;

        let position = program
            .attrib_location("position")
            .ok_or(RendererError::MissingAttribute("position"))?;
        let texcoord = program
            .attrib_location("texcoord")
            .ok_or(RendererError::MissingAttribute("texcoord"))?;

        let quad = GeometryBuilder::new(&QUAD)
            .with_attribute(VertexAttribute::Vec3, position)
            .with_attribute(VertexAttribute::Vec2, texcoord)
            .build()?;

        let y_sampler = program
            .uniform_location("y_sampler")
            .ok_or(RendererError::MissingUniform("y_sampler"))?;
        let u_sampler = program
            .uniform_location("u_sampler")
            .ok_or(RendererError::MissingUniform("u_sampler"))?;
        let v_sampler = program
            .uniform_location("v_sampler")
            .ok_or(RendererError::MissingUniform("v_sampler"))?;

        let samplers = [y_sampler, u_sampler, v_sampler];

        let (w, h) = (frame.width() as u32, frame.height() as u32);

        let y_texture = Texture2D::new(
            w,
            h,
            frame.y_plane(),
            TextureFormat::R8,
            TextureFilter::Linear,
        )?;
        let u_texture = Texture2D::new(
            w / 2,
            h / 2,
            frame.u_plane(),
            TextureFormat::R8,
            TextureFilter::Linear,
        )?;
        let v_texture = Texture2D::new(
            w / 2,
            h / 2,
            frame.v_plane(),
            TextureFormat::R8,
            TextureFilter::Linear,
        )?;

        Ok(Self {
            program,
            quad,
            y_texture,
            u_texture,
            v_texture,
            samplers,
        })
    }

    pub fn draw(&self, gl_renderer: &mut GlRenderer) {
        gl_renderer.clear_color(0.0, 0.0, 0.0);
        gl_renderer.bind_program(&self.program);

        self.y_texture.bind(0);
        self.u_texture.bind(1);
        self.v_texture.bind(2);

        for (unit, location) in self.samplers.into_iter().enumerate() {
            self.program.set_uniform_i32(location, unit as i32);
        }

        gl_renderer.draw(&self.quad, &self.program);
    }
}

#[derive(Debug, Error)]
pub enum RendererError {
    #[error(transparent)]
    Shader(#[from] ProgramError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Texture(#[from] TextureError),
    #[error("shader has no active attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("shader has no active uniform `{0}`")]
    MissingUniform(&'static str),
}
