/// Window and context settings shared by the tutorial programs.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Requested OpenGL core profile version (major, minor).
    pub gl_version: (u8, u8),
    pub clear_color: [f32; 3],
    /// Swap buffers in step with the display refresh.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800,
            height: 600,
            title: "Window".to_string(),
            gl_version: (3, 3),
            clear_color: [0.0, 0.0, 0.0],
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        title.clone_into(&mut self.title);
        self
    }

    pub fn with_clear_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.clear_color = [r, g, b];
        self
    }
}

#[cfg(test)]
mod tests {
    use super::WindowConfig;

    #[test]
    fn default_matches_tutorial_window() {
        let cfg = WindowConfig::default();
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(cfg.gl_version, (3, 3));
    }

    #[test]
    fn frame_pacing_defaults_to_vsync() {
        assert!(WindowConfig::default().vsync);
        let cfg = WindowConfig::default().with_title("Quad");
        assert!(cfg.vsync);
    }

    #[test]
    fn builders_override_fields() {
        let cfg = WindowConfig::default()
            .with_title("Quad")
            .with_clear_color(0.2, 0.3, 0.3);
        assert_eq!(cfg.title, "Quad");
        assert_eq!(cfg.clear_color, [0.2, 0.3, 0.3]);
        assert_eq!(cfg.width, 800);
    }
}
