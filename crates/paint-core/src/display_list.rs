use crate::scene::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Drawable commands carry the transform and group opacity that were current
/// when they were recorded, so a consumer never has to replay the stacks.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    DrawText { run: TextRun, z: i32, opacity: f32, transform: Transform2D },
    DrawEllipse { center: [f32; 2], radii: [f32; 2], brush: Brush, z: i32, opacity: f32, transform: Transform2D },
    StrokePath { path: Path, stroke: Stroke, color: ColorLinPremul, z: i32, opacity: f32, transform: Transform2D },
    /// Hit-only region that does not render.
    HitRegionEllipse { id: u32, center: [f32; 2], radii: [f32; 2], z: i32, transform: Transform2D },
    PushTransform(Transform2D),
    PopTransform,
    PushOpacity(f32),
    PopOpacity,
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub viewport: Viewport,
    pub commands: Vec<Command>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text runs in draw order, with their effective opacity.
    pub fn text_runs(&self) -> impl Iterator<Item = (&TextRun, f32)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            Command::DrawText { run, opacity, .. } => Some((run, *opacity)),
            _ => None,
        })
    }

    /// Number of commands that produce pixels.
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| {
                matches!(
                    cmd,
                    Command::DrawText { .. } | Command::DrawEllipse { .. } | Command::StrokePath { .. }
                )
            })
            .count()
    }
}
