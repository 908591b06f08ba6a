use backend::config::WindowConfig;
use backend::glutils::*;
use backend::logging::init_logging;
use backend::math::Vec3;
use backend::shaders::Shaders;
use backend::system::System;
use log::{error, info, warn};
use tutorial::cli::CLIOptions;
use tutorial::quad::{CLEAR_COLOR, FRAGMENT_SHADER, QUAD_INDICES, QUAD_VERTICES, VERTEX_SHADER};

fn main() {
    let options: CLIOptions = argh::from_env();
    init_logging(options.log_level());

    let [r, g, b] = CLEAR_COLOR;
    let config = options.apply_to(
        WindowConfig::default()
            .with_title("Quad")
            .with_clear_color(r, g, b),
    );
    let mut system = match System::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!("{e:?}");
            println!("{e}");
            std::process::exit(-1);
        }
    };

    // a failed create, compile or link is logged inside and the loop still runs
    let shaders = Shaders::from_str(VERTEX_SHADER, FRAGMENT_SHADER);
    if !shaders.is_linked() {
        warn!("continuing with unlinked program {}", shaders.program_id());
    }

    let vao = gl_gen_vertex_array();
    let vbo = gl_gen_buffer();
    let ebo = gl_gen_buffer();

    gl_bind_vertex_array(vao);

    gl_bind_buffer(gl::ARRAY_BUFFER, vbo);
    gl_buffer_data_arr_stat(&QUAD_VERTICES);

    gl_bind_buffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
    gl_buffer_data_element_stat(&QUAD_INDICES);

    gl_vertex_attrib_ptr_enab(0, Vec3::COMPONENTS, Vec3::COMPONENTS, 0);

    // the VAO keeps the element buffer binding, only the array buffer may be released
    gl_bind_buffer(gl::ARRAY_BUFFER, 0);
    gl_bind_vertex_array(0);
    log_gl_errors("quad setup");

    info!("Entering frame loop");
    while !system.should_close() {
        system.process_io_events();
        system.clear_screen();

        shaders.use_program();
        gl_bind_vertex_array(vao);
        gl_draw_triangles_u32(QUAD_INDICES.len());

        system.draw_to_screen();
    }
    info!("Window closed");
}
