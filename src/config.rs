//! View options of the interactive front end, optionally loaded from a TOML file.
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::scene::SceneStyle;

/// Window and drawing settings. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub width: u32,
    pub height: u32,
    /// Frame rate of the interaction loop, 0 disables pacing
    pub fps: u32,
    /// Radius of the control point circles, also their grab radius
    pub point_radius: f64,
    /// Extra grab radius when tangents are shown
    pub grab_padding: f64,
    /// Length of the normal indicators
    pub normal_length: f64,
    /// Where the bitmap surface writes its frames
    pub output: PathBuf,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            width: 800,
            height: 600,
            fps: 60,
            point_radius: 5.0,
            grab_padding: 5.0,
            normal_length: 30.0,
            output: PathBuf::from("bezier.png"),
        }
    }
}

impl ViewOptions {
    /// Load options from a TOML file, falling back to the defaults if it is missing or malformed.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("options loaded from {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("malformed options file, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("cannot read {}, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Pick radius around control points; tangent mode grabs a little more generously.
    pub fn grab_radius(&self, tangents: bool) -> f64 {
        if tangents {
            self.point_radius + self.grab_padding
        } else {
            self.point_radius
        }
    }

    pub fn frame_interval(&self) -> Option<Duration> {
        match self.fps {
            0 => None,
            fps => Some(Duration::from_secs(1) / fps),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn scene_style(&self) -> SceneStyle {
        SceneStyle {
            point_radius: self.point_radius,
            normal_length: self.normal_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = ViewOptions::default();
        assert_eq!(opts.size(), (800, 600));
        assert_eq!(opts.grab_radius(false), 5.0);
        assert_eq!(opts.grab_radius(true), 10.0);
        assert_eq!(opts.frame_interval(), Some(Duration::from_secs(1) / 60));
        assert_eq!(opts.scene_style(), SceneStyle::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts: ViewOptions = toml::from_str("fps = 0\nnormal_length = 12.5\n").unwrap();
        assert_eq!(opts.frame_interval(), None);
        assert_eq!(opts.normal_length, 12.5);
        assert_eq!(opts.width, 800);
        assert_eq!(opts.output, PathBuf::from("bezier.png"));
    }

    #[test]
    fn missing_or_malformed_file_falls_back() {
        let missing = std::env::temp_dir().join("bezier_lab_does_not_exist.toml");
        assert_eq!(ViewOptions::load_from_file(&missing), ViewOptions::default());

        let malformed =
            std::env::temp_dir().join(format!("bezier_lab_bad_{}.toml", std::process::id()));
        std::fs::write(&malformed, "width = \"wide\"").unwrap();
        assert_eq!(ViewOptions::load_from_file(&malformed), ViewOptions::default());
        std::fs::remove_file(&malformed).unwrap();
    }
}
