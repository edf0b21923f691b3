//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, BezPath, Point, Rect, Stroke};
use peniko::{Color, Fill};
use shapedeck_core::Shape;
use vello::Scene;

/// Spacing of the backdrop grid, in logical pixels.
const GRID_SIZE: f64 = 20.0;

/// Vello-based renderer for the shape preview.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn render_grid_lines(&mut self, viewport: Rect, grid_size: f64) {
        let grid_color = Color::from_rgba8(200, 200, 200, 100);
        let stroke = Stroke::new(0.5);

        let mut x = (viewport.x0 / grid_size).floor() * grid_size;
        while x <= viewport.x1 {
            let mut path = BezPath::new();
            path.move_to(Point::new(x, viewport.y0));
            path.line_to(Point::new(x, viewport.y1));
            self.scene
                .stroke(&stroke, Affine::IDENTITY, grid_color, None, &path);
            x += grid_size;
        }

        let mut y = (viewport.y0 / grid_size).floor() * grid_size;
        while y <= viewport.y1 {
            let mut path = BezPath::new();
            path.move_to(Point::new(viewport.x0, y));
            path.line_to(Point::new(viewport.x1, y));
            self.scene
                .stroke(&stroke, Affine::IDENTITY, grid_color, None, &path);
            y += grid_size;
        }
    }

    /// Fill the shape outline and stroke it with the outline color.
    fn render_shape(&mut self, shape: &Shape, transform: Affine, outline_color: Color, stroke_width: f64) {
        let path = shape.outline(Point::ZERO);
        let fill: Color = shape.base().fill_color().into();
        self.scene
            .fill(Fill::NonZero, transform, fill, None, &path);
        self.scene.stroke(
            &Stroke::new(stroke_width),
            transform,
            outline_color,
            None,
            &path,
        );
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();

        self.render_grid_lines(
            ctx.preview_rect,
            GRID_SIZE * ctx.scale_factor,
        );

        let Some(shape) = ctx.controller.selected_shape() else {
            return;
        };

        // Shape dimensions are logical pixels; scale them around the preview centre.
        let center = ctx.preview_center();
        let transform = Affine::translate(center.to_vec2()) * Affine::scale(ctx.scale_factor);
        self.render_shape(shape, transform, ctx.selection_color, 2.0 / ctx.scale_factor.max(f64::EPSILON));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapedeck_core::ShapeController;

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_without_selection() {
        let mut renderer = VelloRenderer::new();
        let mut controller = ShapeController::new();
        controller.create_rectangle();

        let ctx = RenderContext::new(&controller, kurbo::Size::new(800.0, 600.0));
        renderer.build_scene(&ctx);
        // Grid only
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_selected_shape() {
        let mut renderer = VelloRenderer::new();
        let mut controller = ShapeController::new();
        let id = controller.create_circle();

        let size = kurbo::Size::new(800.0, 600.0);
        renderer.build_scene(&RenderContext::new(&controller, size));
        let grid_only = renderer.take_scene();

        controller.select(Some(id));
        renderer.build_scene(&RenderContext::new(&controller, size));
        let scene = renderer.take_scene();

        // One fill and one stroke on top of the grid.
        assert_eq!(
            scene.encoding().draw_tags.len(),
            grid_only.encoding().draw_tags.len() + 2
        );
        assert!(scene.encoding().path_data.len() > grid_only.encoding().path_data.len());
        assert!(renderer.scene().encoding().is_empty());
    }
}
