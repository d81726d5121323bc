//! Surfaces that present scenes.
use std::path::{Path, PathBuf};

use log::debug;
use plotters::prelude::*;

use crate::error::RenderError;
use crate::scene::Scene;

/// Something a frame can be drawn onto
pub trait Surface {
    fn present(&mut self, scene: &Scene) -> Result<(), RenderError>;
}

/// Draws each frame into a PNG file with plotters' bitmap backend.
/// Every frame overwrites the file, so it always holds the last presented scene.
#[derive(Debug, Clone)]
pub struct BitmapSurface {
    path: PathBuf,
    size: (u32, u32),
}

fn pixel((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn backend_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

impl BitmapSurface {
    pub fn new<P: AsRef<Path>>(path: P, size: (u32, u32)) -> Self {
        BitmapSurface {
            path: path.as_ref().to_path_buf(),
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for BitmapSurface {
    fn present(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&BLACK).map_err(backend_error)?;

        // control points
        for circle in &scene.circles {
            root.draw(&Circle::new(
                pixel(circle.center),
                circle.radius.round() as i32,
                GREEN.filled(),
            ))
            .map_err(backend_error)?;
        }

        // the curve itself
        if scene.polyline.len() > 1 {
            let path: Vec<(i32, i32)> = scene.polyline.iter().copied().map(pixel).collect();
            root.draw(&PathElement::new(path, &YELLOW))
                .map_err(backend_error)?;
        }

        for segment in &scene.normal_segments {
            root.draw(&PathElement::new(
                vec![pixel(segment.start), pixel(segment.end)],
                &CYAN,
            ))
            .map_err(backend_error)?;
        }

        root.present().map_err(backend_error)?;
        debug!("frame written to {}", self.path.display());
        Ok(())
    }
}

/// Keeps every presented scene in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frames: Vec<Scene>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Scene] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Scene> {
        self.frames.last()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, scene: &Scene) -> Result<(), RenderError> {
        self.frames.push(scene.clone());
        Ok(())
    }
}
