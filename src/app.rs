use crate::config::ViewConfig;
use crate::format::format_zoom;
use crate::render::{render, DrawCommand};
use crate::view::{InputEvent, PlotView, ScrollDirection};
use eframe::egui::{self, Color32};
use std::fs;
use std::time::Instant;

const LABEL_FONT_FAMILY: &str = "tick-label";

pub struct PlotApp {
    view: PlotView,
    hovered_axis: Option<egui::Vec2>,
}

impl PlotApp {
    pub fn new(creation_context: &eframe::CreationContext<'_>, config: ViewConfig) -> Self {
        configure_label_font(&creation_context.egui_ctx);

        Self {
            view: PlotView::new(config),
            hovered_axis: None,
        }
    }

    fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: egui::Rect,
        canvas_response: &egui::Response,
    ) {
        let now = Instant::now();
        let mut redraw = false;

        redraw |= self.view.handle(InputEvent::Resize(canvas_rect.size()), now);

        let (scroll, pressed, released, pointer) = ctx.input(|input| {
            (
                input.raw_scroll_delta.y,
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.latest_pos(),
            )
        });
        let local_pointer = pointer.map(|pos| (pos - canvas_rect.min).to_pos2());

        if canvas_response.hovered() && scroll != 0.0 {
            let direction = if scroll > 0.0 {
                ScrollDirection::Up
            } else {
                ScrollDirection::Down
            };
            redraw |= self.view.handle(InputEvent::Scroll(direction), now);
        }

        if pressed && canvas_response.hovered() {
            if let Some(pos) = local_pointer {
                redraw |= self.view.handle(InputEvent::ButtonPress(pos), now);
            }
        }

        if released && self.view.state().is_dragging() {
            redraw |= self.view.handle(InputEvent::ButtonRelease, now);
        }

        redraw |= self.view.poll_drag(now, local_pointer);

        if let Some(wait) = self.view.next_tick_in(now) {
            ctx.request_repaint_after(wait);
        }

        // The status bar was laid out before the canvas, so it lags one frame.
        if redraw {
            ctx.request_repaint();
        }

        self.hovered_axis = if canvas_response.hovered() {
            local_pointer.map(|pos| self.view.state().axis_coordinate(pos, self.view.config()))
        } else {
            None
        };
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (canvas_rect, canvas_response) =
            ui.allocate_exact_size(available, egui::Sense::click_and_drag());

        self.handle_canvas_input(ui.ctx(), canvas_rect, &canvas_response);

        let painter = ui.painter_at(canvas_rect);
        let to_screen = |pos: egui::Pos2| canvas_rect.min + pos.to_vec2();
        let label_family = egui::FontFamily::Name(LABEL_FONT_FAMILY.into());

        for command in render(self.view.state(), self.view.config()) {
            match command {
                DrawCommand::Fill(color) => {
                    painter.rect_filled(canvas_rect, 0.0, color);
                }
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    painter.line_segment(
                        [to_screen(from), to_screen(to)],
                        egui::Stroke::new(width, color),
                    );
                }
                DrawCommand::Label {
                    anchor,
                    text,
                    size,
                    color,
                } => {
                    painter.text(
                        to_screen(anchor),
                        egui::Align2::CENTER_TOP,
                        text,
                        egui::FontId::new(size, label_family.clone()),
                        color,
                    );
                }
            }
        }
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        let state = self.view.state();

        ui.horizontal_wrapped(|ui| {
            ui.small(format!(
                "Zoom: {} x {}",
                format_zoom(state.zoom.x),
                format_zoom(state.zoom.y)
            ));
            ui.separator();
            ui.small(format!(
                "Origin: ({:.0}, {:.0})",
                state.offset.x, state.offset.y
            ));
            ui.separator();
            ui.small(if state.is_dragging() {
                "Dragging"
            } else {
                "Scroll to zoom, drag to pan"
            });

            if let Some(axis) = self.hovered_axis {
                ui.separator();
                ui.small(format!("x: {:.3}  y: {:.3}", axis.x, axis.y));
            }
        });
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                self.render_canvas(ui);
            });
    }
}

fn configure_label_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    let mut label_fonts = fonts
        .families
        .get(&egui::FontFamily::Monospace)
        .cloned()
        .unwrap_or_default();

    if let Some((font_name, font_data)) = load_system_bold_monospace() {
        fonts.font_data.insert(
            font_name.clone(),
            egui::FontData::from_owned(font_data).into(),
        );
        label_fonts.insert(0, font_name);
    } else {
        tracing::debug!("no bold monospace font found, tick labels use the built-in monospace");
    }

    fonts
        .families
        .insert(egui::FontFamily::Name(LABEL_FONT_FAMILY.into()), label_fonts);

    ctx.set_fonts(fonts);
}

fn load_system_bold_monospace() -> Option<(String, Vec<u8>)> {
    let candidates = [
        (
            "DejaVuSansMonoBold",
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
        ),
        (
            "DejaVuSansMonoBold",
            "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono-Bold.ttf",
        ),
        (
            "LiberationMonoBold",
            "/usr/share/fonts/truetype/liberation/LiberationMono-Bold.ttf",
        ),
        ("ConsolasBold", "C:\\Windows\\Fonts\\consolab.ttf"),
        ("CourierNewBold", "C:\\Windows\\Fonts\\courbd.ttf"),
        ("Menlo", "/System/Library/Fonts/Menlo.ttc"),
    ];

    candidates.into_iter().find_map(|(name, path)| {
        let bytes = fs::read(path).ok()?;
        tracing::debug!(path, "loaded tick label font");
        Some((name.to_string(), bytes))
    })
}
