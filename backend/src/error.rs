use std::fmt;

/// Failures while bringing up the window and its OpenGL context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    /// SDL, its video subsystem, the window or its GL context could not be
    /// brought up. The cause is only logged, never printed.
    WindowCreation(String),
    /// GL entry points were not resolved after `gl::load_with`.
    LoadGl,
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::WindowCreation(_) => write!(f, "Error creating window"),
            SystemError::LoadGl => write!(f, "Failed to load GLAD"),
        }
    }
}

impl std::error::Error for SystemError {}

#[cfg(test)]
mod tests {
    use super::SystemError;

    #[test]
    fn fatal_messages_are_the_literal_diagnostics() {
        let e = SystemError::WindowCreation("no display".to_string());
        assert_eq!(e.to_string(), "Error creating window");
        assert_eq!(SystemError::LoadGl.to_string(), "Failed to load GLAD");
    }

    #[test]
    fn missing_video_device_reads_as_window_failure() {
        let e = SystemError::WindowCreation("No available video device".to_string());
        assert_eq!(e.to_string(), "Error creating window");
        assert!(format!("{e:?}").contains("No available video device"));
    }
}
