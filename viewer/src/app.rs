use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use log::error;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use gl_wrapper::renderer::GlRenderer;

use crate::frame::YuvFrame;
use crate::renderer::{FrameRenderer, RendererError};

/// Redraw period of the cooperative timer, ~60 Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    renderer: FrameRenderer,
}

impl App {
    pub fn new(frame: &YuvFrame) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(
                frame.width() as u32,
                frame.height() as u32,
            )))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title("YUV viewer");
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| configs.next().unwrap())
            .map_err(|e| AppError::GraphicsContext(e.to_string()))?;

        let window = window.ok_or(AppError::GraphicsContext(String::from(
            "display builder returned no window",
        )))?;

        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr) }
            .map_err(|e| AppError::GraphicsContext(e.to_string()))?
            .make_current(&gl_window.surface)
            .map_err(|e| AppError::GraphicsContext(e.to_string()))?;

        gl::load_with(|s| {
            gl_display
                .get_proc_address(CString::new(s).unwrap().as_c_str())
                .cast()
        });

        let renderer = FrameRenderer::new(frame)?;

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            renderer,
        })
    }

    pub fn run(self) -> ! {
        let mut gl_renderer = GlRenderer::new();

        self.event_loop
            .run(move |event, _window_target, control_flow| match event {
                Event::NewEvents(StartCause::Init) => {
                    *control_flow = ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL);
                }
                Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                    *control_flow = ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL);
                    self.gl_window.window.request_redraw();
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        // minimized windows report a zero-sized surface
                        if size.width != 0 && size.height != 0 {
                            self.gl_window.surface.resize(
                                &self.gl_context,
                                NonZeroU32::new(size.width).unwrap(),
                                NonZeroU32::new(size.height).unwrap(),
                            );
                            gl_renderer.resize(size.width, size.height);
                        }
                    }
                    WindowEvent::CloseRequested => {
                        control_flow.set_exit();
                    }
                    _ => (),
                },
                Event::RedrawRequested(_) => {
                    self.renderer.draw(&mut gl_renderer);

                    if let Err(e) = self.gl_window.surface.swap_buffers(&self.gl_context) {
                        error!("could not present frame: {e}");
                    }
                }
                _ => (),
            })
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width.max(1)).unwrap(),
            NonZeroU32::new(height.max(1)).unwrap(),
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs) }
            .map_err(|e| AppError::GraphicsContext(e.to_string()))?;

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create OpenGL context: {0}")]
    GraphicsContext(String),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}
