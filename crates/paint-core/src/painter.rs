use crate::display_list::{Command, DisplayList, Viewport};
use crate::scene::*;

pub struct Painter {
    list: DisplayList,
    transform_stack: Vec<Transform2D>,
    opacity_stack: Vec<f32>,
}

impl Painter {
    pub fn begin_frame(viewport: Viewport) -> Self {
        Self {
            list: DisplayList {
                viewport,
                commands: Vec::new(),
            },
            transform_stack: vec![Transform2D::identity()],
            opacity_stack: vec![1.0],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.list.viewport
    }

    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    pub fn push_transform(&mut self, t: Transform2D) {
        // Compose with current transform so nested pushes multiply.
        let composed = self.current_transform().concat(t);
        self.list.commands.push(Command::PushTransform(composed));
        self.transform_stack.push(composed);
    }

    pub fn pop_transform(&mut self) {
        // The root identity is never popped.
        if self.transform_stack.len() > 1 {
            self.list.commands.push(Command::PopTransform);
            self.transform_stack.pop();
        }
    }

    /// Open an opacity group. Nested groups multiply.
    pub fn push_opacity(&mut self, opacity: f32) {
        let composed = self.current_opacity() * opacity.clamp(0.0, 1.0);
        self.list.commands.push(Command::PushOpacity(composed));
        self.opacity_stack.push(composed);
    }

    pub fn pop_opacity(&mut self) {
        if self.opacity_stack.len() > 1 {
            self.list.commands.push(Command::PopOpacity);
            self.opacity_stack.pop();
        }
    }

    pub fn text(&mut self, run: TextRun, z: i32) {
        let (transform, opacity) = (self.current_transform(), self.current_opacity());
        self.list.commands.push(Command::DrawText {
            run,
            z,
            opacity,
            transform,
        });
    }

    pub fn ellipse(&mut self, center: [f32; 2], radii: [f32; 2], brush: Brush, z: i32) {
        let (transform, opacity) = (self.current_transform(), self.current_opacity());
        self.list.commands.push(Command::DrawEllipse {
            center,
            radii,
            brush,
            z,
            opacity,
            transform,
        });
    }

    pub fn circle(&mut self, center: [f32; 2], radius: f32, brush: Brush, z: i32) {
        self.ellipse(center, [radius, radius], brush, z);
    }

    /// Stroke a path with uniform width and a solid color.
    pub fn stroke_path(&mut self, path: Path, stroke: Stroke, color: ColorLinPremul, z: i32) {
        let (transform, opacity) = (self.current_transform(), self.current_opacity());
        self.list.commands.push(Command::StrokePath {
            path,
            stroke,
            color,
            z,
            opacity,
            transform,
        });
    }

    // --- Hit-only regions (do not render) ---

    pub fn hit_region_circle(&mut self, id: u32, center: [f32; 2], radius: f32, z: i32) {
        let transform = self.current_transform();
        self.list.commands.push(Command::HitRegionEllipse {
            id,
            center,
            radii: [radius, radius],
            z,
            transform,
        });
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_opacity_multiplies() {
        let mut p = Painter::begin_frame(Viewport { width: 10, height: 10 });
        p.push_opacity(0.5);
        p.push_opacity(0.5);
        p.circle([0.0, 0.0], 1.0, Brush::Solid(Color::rgba(0, 0, 0, 255)), 0);
        p.pop_opacity();
        p.pop_opacity();
        let list = p.finish();
        let opacity = list
            .commands
            .iter()
            .find_map(|c| match c {
                Command::DrawEllipse { opacity, .. } => Some(*opacity),
                _ => None,
            })
            .unwrap();
        assert!((opacity - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_transform_recorded_per_command() {
        let mut p = Painter::begin_frame(Viewport::default());
        p.push_transform(Transform2D::translate(10.0, 20.0));
        p.push_transform(Transform2D::translate(1.0, 2.0));
        p.circle([0.0, 0.0], 1.0, Brush::Solid(Color::rgba(0, 0, 0, 255)), 0);
        let list = p.finish();
        let t = list
            .commands
            .iter()
            .find_map(|c| match c {
                Command::DrawEllipse { transform, .. } => Some(*transform),
                _ => None,
            })
            .unwrap();
        assert_eq!(t.apply([0.0, 0.0]), [11.0, 22.0]);
    }

    #[test]
    fn test_unbalanced_pops_are_ignored() {
        let mut p = Painter::begin_frame(Viewport::default());
        p.pop_transform();
        p.pop_opacity();
        assert_eq!(p.current_opacity(), 1.0);
        assert!(p.finish().is_empty());
    }
}
