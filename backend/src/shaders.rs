use gl::types::*;
use gl::*;
use log::{debug, error};

/// A linked vertex + fragment program.
///
/// Compile and link failures are logged together with the driver's info log
/// but do not abort construction: the returned program may be unusable and
/// draws issued with it render nothing. A failing `glCreateShader` is logged
/// the same way and the stage is left as object 0, so linking fails too.
#[derive(Default, Clone, Copy)]
pub struct Shaders {
    program_id: u32,
    linked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(&self) -> GLenum {
        match self {
            ShaderStage::Vertex => VERTEX_SHADER,
            ShaderStage::Fragment => FRAGMENT_SHADER,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
        }
    }
}

const INFO_LOG_CAPACITY: usize = 512;

impl Shaders {
    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Shaders {
        let vertex_shader = Self::create(ShaderStage::Vertex);
        let vertex_ok = Self::compile_logged(vertex_shader, vertex_code, &ShaderStage::Vertex);

        let fragment_shader = Self::create(ShaderStage::Fragment);
        let fragment_ok =
            Self::compile_logged(fragment_shader, fragment_code, &ShaderStage::Fragment);

        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        let linked = success != 0;
        if !linked {
            let log = read_info_log(|cap, len, buf| unsafe {
                gl::GetProgramInfoLog(shader_program, cap, len, buf)
            });
            error!("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{log}");
            println!("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{log}");
        }

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        debug!(
            "program({shader_program}): vertex ok={vertex_ok}, fragment ok={fragment_ok}, linked={linked}"
        );

        Shaders {
            program_id: shader_program,
            linked,
        }
    }

    fn create(stage: ShaderStage) -> u32 {
        let id = unsafe { gl::CreateShader(stage.gl_kind()) };
        if let Some(msg) = creation_failure(id, &stage) {
            error!("{msg}");
            println!("{msg}");
        }
        id
    }

    fn compile_logged(shader_id: u32, shader_code: &str, stage: &ShaderStage) -> bool {
        // creation already reported
        if shader_id == 0 {
            return false;
        }
        match Self::compile(shader_id, shader_code) {
            Ok(()) => true,
            Err(log) => {
                error!("ERROR::SHADER::{}::COMPILATION_FAILED\n{log}", stage.label());
                println!("ERROR::SHADER::{}::COMPILATION_FAILED\n{log}", stage.label());
                false
            }
        }
    }

    fn compile(shader_id: u32, shader_code: &str) -> Result<(), String> {
        let len = shader_code.len() as GLint;
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &len,
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            return Err(read_info_log(|cap, len, buf| unsafe {
                gl::GetShaderInfoLog(shader_id, cap, len, buf)
            }));
        }
        Ok(())
    }

    pub fn program_id(&self) -> u32 {
        self.program_id
    }

    /// False when linking failed; the program still exists and can be bound.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
    }
}

fn creation_failure(id: u32, stage: &ShaderStage) -> Option<String> {
    if id != 0 {
        return None;
    }
    Some(format!(
        "ERROR::SHADER::{}::CREATION_FAILED gl::CreateShader returned 0",
        stage.label()
    ))
}

fn read_info_log(fetch: impl FnOnce(GLsizei, &mut GLsizei, *mut GLchar)) -> String {
    let mut v: Vec<u8> = vec![0; INFO_LOG_CAPACITY];
    let mut log_len: GLsizei = 0;
    fetch(INFO_LOG_CAPACITY as GLsizei, &mut log_len, v.as_mut_ptr().cast());
    info_log_to_string(&v, log_len)
}

fn info_log_to_string(buf: &[u8], log_len: GLsizei) -> String {
    let len = usize::try_from(log_len).unwrap_or(0).min(buf.len());
    String::from_utf8_lossy(&buf[..len])
        .trim_end_matches('\0')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{creation_failure, info_log_to_string, ShaderStage};

    #[test]
    fn zero_shader_id_is_reported_not_fatal() {
        let msg = creation_failure(0, &ShaderStage::Vertex).unwrap();
        assert!(msg.contains("VERTEX"));
        let msg = creation_failure(0, &ShaderStage::Fragment).unwrap();
        assert!(msg.contains("FRAGMENT"));
    }

    #[test]
    fn valid_shader_id_is_silent() {
        assert!(creation_failure(7, &ShaderStage::Vertex).is_none());
    }

    #[test]
    fn info_log_is_cut_at_reported_length() {
        let mut buf = b"0:1(1): error: syntax error".to_vec();
        buf.extend_from_slice(&[0; 8]);
        assert_eq!(info_log_to_string(&buf, 14), "0:1(1): error:");
    }

    #[test]
    fn info_log_ignores_bogus_lengths() {
        let buf = b"abc\0".to_vec();
        assert_eq!(info_log_to_string(&buf, -1), "");
        assert_eq!(info_log_to_string(&buf, 100), "abc");
    }
}
