//! Desktop shell: window, menu bar, and canvas wiring.
//!
//! The shell owns the widgets and the event loop. It forwards pointer events
//! and menu commands to the [`CanvasController`] and paints whatever the
//! retained [`Scene`] holds; all drawing decisions live in the canvas core.

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, StrokeKind};

use sketchpad::canvas::{CanvasController, PointerEvent, Tool};
use sketchpad::config::Config;
use sketchpad::draw::{Color, Primitive, PrimitiveKind, Scene};
use sketchpad::geometry::Point;

/// Opens the application window and runs the event loop until exit.
pub fn run(config: Config) -> eframe::Result {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_resizable(config.window.resizable);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "sketchpad",
        options,
        Box::new(|cc| Ok(Box::new(SketchpadApp::new(cc, config)))),
    )
}

struct SketchpadApp {
    controller: CanvasController,
    scene: Scene,
    show_status_bar: bool,
    /// Last pointer position seen on the canvas, used when a release event
    /// arrives without a position of its own.
    last_pointer: Point,
}

impl SketchpadApp {
    fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mut controller = CanvasController::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.default_thickness,
            config.drawing.ellipse_fill.to_color(),
        );
        if let Some(tool) = config.drawing.initial_tool() {
            controller.select_tool(tool);
        }

        Self {
            controller,
            scene: Scene::new(),
            show_status_bar: config.ui.show_status_bar,
            last_pointer: Point::new(0, 0),
        }
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Objects", |ui| {
                for tool in Tool::ALL {
                    let checked = self.controller.selected_tool() == Some(tool);
                    if ui.radio(checked, tool.label()).clicked() {
                        self.controller.select_tool(tool);
                        ui.close_menu();
                    }
                }
            });
            ui.menu_button("Canvas", |ui| {
                if ui.button("Clear").clicked() {
                    self.controller.clear(&mut self.scene);
                    ui.close_menu();
                }
            });
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let origin = response.rect.min;

        if let Some(pos) = response.interact_pointer_pos() {
            self.last_pointer = to_canvas(pos, origin);
        }
        if response.drag_started() {
            self.controller
                .handle_pointer_event(&mut self.scene, PointerEvent::Down(self.last_pointer));
        } else if response.dragged() {
            self.controller
                .handle_pointer_event(&mut self.scene, PointerEvent::Drag(self.last_pointer));
        } else if response.drag_stopped() {
            self.controller
                .handle_pointer_event(&mut self.scene, PointerEvent::Up(self.last_pointer));
        }

        painter.rect_filled(response.rect, 0.0, Color32::WHITE);
        for primitive in self.scene.primitives() {
            paint_primitive(&painter, origin, primitive);
        }
    }
}

impl eframe::App for SketchpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| self.menu_bar(ui));

        if self.show_status_bar {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                let label = match self.controller.selected_tool() {
                    Some(tool) => format!("Tool: {}", tool.label()),
                    None => "No tool selected".to_string(),
                };
                ui.label(label);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));

        if self.controller.take_needs_redraw() {
            ctx.request_repaint();
        }
    }
}

fn to_canvas(pos: Pos2, origin: Pos2) -> Point {
    Point::new(
        (pos.x - origin.x).round() as i32,
        (pos.y - origin.y).round() as i32,
    )
}

fn to_screen(point: Point, origin: Pos2) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8,
        (color.a * 255.0).round() as u8,
    )
}

fn paint_primitive(painter: &egui::Painter, origin: Pos2, primitive: &Primitive) {
    let start = to_screen(primitive.bounds.start, origin);
    let end = to_screen(primitive.bounds.end, origin);
    let stroke = Stroke::new(
        primitive.style.thickness as f32,
        color32(primitive.style.stroke),
    );

    match primitive.kind {
        PrimitiveKind::Line => {
            painter.line_segment([start, end], stroke);
        }
        PrimitiveKind::Rect => {
            let rect = Rect::from_two_pos(start, end);
            if let Some(fill) = primitive.style.fill {
                painter.rect_filled(rect, 0.0, color32(fill));
            }
            painter.rect_stroke(rect, 0.0, stroke, StrokeKind::Middle);
        }
        PrimitiveKind::Oval => {
            let rect = Rect::from_two_pos(start, end);
            let fill = primitive
                .style
                .fill
                .map(color32)
                .unwrap_or(Color32::TRANSPARENT);
            painter.add(egui::Shape::Ellipse(egui::epaint::EllipseShape {
                center: rect.center(),
                radius: rect.size() / 2.0,
                fill,
                stroke,
            }));
        }
    }
}
