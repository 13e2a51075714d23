//! Stateless UI rendering.
//!
//! The board is painted on a braille [`Canvas`] spanning the whole frame.
//! Board coordinates grow downward like terminal rows while the canvas grows
//! upward, so every y value is flipped against the frame height.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{self, Canvas, Context},
    },
};
use tictactoe_grid::{Outline, Shape, ShapeKind, Vec2};

use crate::app::App;

const GRID_COLOR: Color = Color::DarkGray;
const WIN_COLOR: Color = Color::Yellow;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    draw_board(frame, area, app);
    draw_scores(frame, area, app);
    draw_status(frame, area, app.status_message());

    let outcome = app.game().outcome();
    if outcome.is_resolved() {
        draw_banner(frame, area, &outcome.to_string());
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let grid = app.game().grid();
    let winning = grid.outcome().winning_line();
    let height = f64::from(area.height);

    let board = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, f64::from(area.width)])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for cell in grid.cells() {
                let bounds = cell.bounds();
                let won = winning.is_some_and(|line| line.contains(*cell.row(), *cell.column()));
                ctx.draw(&canvas::Rectangle {
                    x: bounds.min.x,
                    y: height - bounds.max.y,
                    width: bounds.width(),
                    height: bounds.height(),
                    color: if won { WIN_COLOR } else { GRID_COLOR },
                });

                if let Some(shape) = cell.shape() {
                    let color = if won { WIN_COLOR } else { shape_color(*shape.kind()) };
                    draw_shape(ctx, shape, height, color);
                }
            }
        });

    frame.render_widget(board, area);
}

fn draw_shape(ctx: &mut Context, shape: &Shape, height: f64, color: Color) {
    let flip = |p: Vec2| (p.x, height - p.y);

    match shape.outline() {
        Outline::Cross(strokes) => {
            for stroke in strokes {
                let (x1, y1) = flip(stroke.start);
                let (x2, y2) = flip(stroke.end);
                ctx.draw(&canvas::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                });
            }
        }
        Outline::Circle { center, radius } => {
            let (x, y) = flip(center);
            ctx.draw(&canvas::Circle {
                x,
                y,
                radius,
                color,
            });
        }
    }
}

fn shape_color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::Cross => Color::Blue,
        ShapeKind::Circle => Color::Red,
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let half = area.width / 2;
    let left = Rect::new(area.x, area.y, half, area.height.min(1));
    let right = Rect::new(area.x + half, area.y, area.width - half, area.height.min(1));
    let scores = app.game().scores();
    let style = Style::default().add_modifier(Modifier::BOLD);

    let cross = format!(" {}: {}", ShapeKind::Cross, scores.get_kind(ShapeKind::Cross));
    let circle = format!("{}: {} ", ShapeKind::Circle, scores.get_kind(ShapeKind::Circle));

    frame.render_widget(
        Paragraph::new(cross)
            .style(style.fg(shape_color(ShapeKind::Cross)))
            .alignment(Alignment::Left),
        left,
    );
    frame.render_widget(
        Paragraph::new(circle)
            .style(style.fg(shape_color(ShapeKind::Circle)))
            .alignment(Alignment::Right),
        right,
    );
}

fn draw_status(frame: &mut Frame, area: Rect, status: &str) {
    if area.height < 2 {
        return;
    }
    let line = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let paragraph = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, line);
}

fn draw_banner(frame: &mut Frame, area: Rect, message: &str) {
    let width = u16::try_from(message.len() + 4).unwrap_or(u16::MAX);
    let banner = center_rect(area, width, 3);

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(WIN_COLOR).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, banner);
    frame.render_widget(paragraph, banner);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
