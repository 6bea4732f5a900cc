use gl::types::GLuint;
use std::ffi::{c_char, CString};
use std::fmt;
use thiserror::Error;

pub struct ProgramBuilder {
    vert: CString,
    frag: CString,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: CString::new(vert_src).unwrap(),
            frag: CString::new(frag_src).unwrap(),
        }
    }

    pub fn build(self) -> Result<Program, ProgramError> {
        unsafe {
            let vert = compile_shader(gl::VERTEX_SHADER, &self.vert).map_err(|log| {
                ProgramError::Compile {
                    stage: Stage::Vertex,
                    log,
                }
            })?;

            let frag = match compile_shader(gl::FRAGMENT_SHADER, &self.frag) {
                Ok(id) => id,
                Err(log) => {
                    gl::DeleteShader(vert);
                    return Err(ProgramError::Compile {
                        stage: Stage::Fragment,
                        log,
                    });
                }
            };

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let log = program_info_log(program);

                gl::DeleteProgram(program);
                gl::DeleteShader(vert);
                gl::DeleteShader(frag);

                return Err(ProgramError::Link(log));
            }

            // only the linked program is kept around
            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Program { id: program })
        }
    }
}

unsafe fn compile_shader(kind: u32, src: &CString) -> Result<GLuint, String> {
    let shader = gl::CreateShader(kind);

    gl::ShaderSource(
        shader,
        1,
        (&src.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );

    gl::CompileShader(shader);

    let mut success = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
    if success != 1 {
        let log = shader_info_log(shader);

        gl::DeleteShader(shader);
        return Err(log);
    }

    Ok(shader)
}

unsafe fn shader_info_log(shader: GLuint) -> String {
    let mut buf = [0_u8; 1024];

    gl::GetShaderInfoLog(
        shader,
        buf.len() as i32,
        std::ptr::null_mut(),
        buf.as_mut_ptr() as *mut c_char,
    );

    trim_log(&buf)
}

unsafe fn program_info_log(program: GLuint) -> String {
    let mut buf = [0_u8; 1024];

    gl::GetProgramInfoLog(
        program,
        buf.len() as i32,
        std::ptr::null_mut(),
        buf.as_mut_ptr() as *mut c_char,
    );

    trim_log(&buf)
}

fn trim_log(buf: &[u8]) -> String {
    let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());

    String::from_utf8_lossy(&buf[..end]).to_string()
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("{stage} shader compilation failed: {log}")]
    Compile { stage: Stage, log: String },
    #[error("program linking failed: {0}")]
    Link(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => write!(f, "vertex"),
            Stage::Fragment => write!(f, "fragment"),
        }
    }
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// Returns `None` when the linker did not keep an attribute of this name.
    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        let name = CString::new(name).unwrap();
        let loc = unsafe { gl::GetAttribLocation(self.id, name.as_ptr()) };

        (loc >= 0).then_some(loc as u32)
    }

    /// Returns `None` when the linker did not keep a uniform of this name.
    pub fn uniform_location(&self, name: &str) -> Option<i32> {
        let name = CString::new(name).unwrap();
        let loc = unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) };

        (loc >= 0).then_some(loc)
    }

    /// The program must be in use when this is called.
    pub fn set_uniform_i32(&self, location: i32, value: i32) {
        unsafe { gl::Uniform1i(location, value) }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
