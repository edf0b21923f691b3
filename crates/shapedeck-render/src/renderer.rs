//! Renderer trait abstraction.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use shapedeck_core::ShapeController;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Shapes and selection to draw.
    pub controller: &'a ShapeController,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Area between the side panels, in physical pixels.
    pub preview_rect: Rect,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Outline color of the previewed shape.
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context covering the whole viewport.
    pub fn new(controller: &'a ShapeController, viewport_size: Size) -> Self {
        Self {
            controller,
            viewport_size,
            preview_rect: viewport_size.to_rect(),
            scale_factor: 1.0,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the outline color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Restrict the preview to part of the viewport.
    pub fn with_preview_rect(mut self, rect: Rect) -> Self {
        self.preview_rect = rect;
        self
    }

    /// Where the previewed shape is centred, in physical pixels.
    pub fn preview_center(&self) -> Point {
        self.preview_rect.center()
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
