use crate::app::App;
use crate::ui::widgets::palette::Palette;
use metafinder_core::messages;
use metafinder_core::{Region, Treatment};
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

fn draw_outline(ctx: &mut Context<'_>, region: &Region, color: Color) {
    for ring in &region.rings {
        for pair in ring.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
        }
        if let (Some(&(x1, y1)), Some(&(x2, y2))) = (ring.last(), ring.first()) {
            ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
        }
    }
}

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let layer = app.explorer.layer();
    let painted = &app.snapshot.spatial.regions;
    let focused = app.explorer.focused().map(|record| record.code.as_str());

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" {} ", app.text(messages::MAP)))
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        )
        .background_color(palette.background)
        .marker(Marker::Braille)
        .x_bounds(layer.x_bounds())
        .y_bounds(layer.y_bounds())
        .paint(|ctx| {
            let mut on_matched_layer = false;
            for region in painted {
                let Some(shape) = layer.regions().get(region.region) else {
                    continue;
                };
                let color = match region.treatment {
                    Treatment::Baseline => palette.baseline,
                    Treatment::Matched => {
                        if !on_matched_layer {
                            ctx.layer();
                            on_matched_layer = true;
                        }
                        palette.matched
                    }
                };
                draw_outline(ctx, shape, color);
            }

            if let Some(code) = focused {
                ctx.layer();
                for shape in layer
                    .regions()
                    .iter()
                    .filter(|shape| shape.code.as_deref() == Some(code))
                {
                    draw_outline(ctx, shape, palette.focus);
                }
            }
        });
    f.render_widget(canvas, area);
}
