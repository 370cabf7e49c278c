use crate::config::ViewConfig;
use crate::ticks::visible_ticks;
use crate::view::ViewState;
use eframe::egui::{self, Color32, Pos2};

/// Half-pixel bias so 1px strokes land on pixel centers.
const PIXEL_BIAS: egui::Vec2 = egui::vec2(0.5, 0.5);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Color32),
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    /// Text centered horizontally on `anchor`, hanging below it.
    Label {
        anchor: Pos2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// Builds the draw list for one frame in surface pixel coordinates.
pub fn render(state: &ViewState, config: &ViewConfig) -> Vec<DrawCommand> {
    let origin = Pos2::ZERO + state.offset + PIXEL_BIAS;
    let at = |x: f32, y: f32| origin + egui::vec2(x, y);
    let bounds = state.visible_bounds();

    let mut commands = vec![DrawCommand::Fill(Color32::WHITE)];

    commands.push(DrawCommand::Line {
        from: at(bounds.left, 0.0),
        to: at(bounds.right, 0.0),
        width: 1.0,
        color: config.axis_color,
    });
    commands.push(DrawCommand::Line {
        from: at(0.0, bounds.top),
        to: at(0.0, bounds.bottom),
        width: 1.0,
        color: config.axis_color,
    });

    for tick in visible_ticks(bounds.left, bounds.right, state.zoom.x, config) {
        commands.push(DrawCommand::Line {
            from: at(tick.position, -config.tick_half_length),
            to: at(tick.position, config.tick_half_length),
            width: 1.0,
            color: config.axis_color,
        });
        commands.push(DrawCommand::Label {
            anchor: at(tick.position, config.label_top),
            text: tick.label,
            size: config.label_font_size,
            color: config.axis_color,
        });
    }

    commands.push(DrawCommand::Line {
        from: origin,
        to: at(
            config.plot_end.x * state.zoom.x,
            config.plot_end.y * state.zoom.y,
        ),
        width: 1.0,
        color: config.plot_color,
    });

    commands
}
