use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::radar::{axis_angle, axis_labels, PolarVertex};
use crate::scoring::engine::letter_for;
use crate::scoring::{AXIS_COUNT, MAX_SCORE};
use crate::tui::app::{App, FlashKind, InputMode};

const SLIDER_PANEL_WIDTH: u16 = 40;
const SLIDER_BAR_WIDTH: usize = 12;
const NAME_WIDTH: usize = 16;
const GRID_RINGS: [f64; 4] = [25.0, 50.0, 75.0, 100.0];
const LABEL_RADIUS: f64 = 112.0;
const CHART_EXTENT: f64 = 125.0;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 60 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Summary(3) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),  // Title bar
        Constraint::Fill(1),    // Sliders | Radar
        Constraint::Length(3),  // Type code summary
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    let body = Layout::horizontal([
        Constraint::Length(SLIDER_PANEL_WIDTH),
        Constraint::Fill(1),
    ])
    .split(chunks[1]);

    render_title(frame, chunks[0], app);
    render_sliders(frame, body[0], app);
    render_radar(frame, body[1], app);
    render_summary(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled("JVDT Explorer", Style::default().fg(app.theme.title_color).bold()),
        Span::styled("  seven axes, 0-100", Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_sliders(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::bordered().title(" Scores ");

    let lines: Vec<Line> = app
        .scores
        .iter()
        .map(|(axis, score)| {
            let selected = axis.index() == app.selected;
            let marker = if selected { "▸ " } else { "  " };
            let color = theme.pole_color(score);
            let letter = letter_for(axis, score);

            let mut spans = vec![
                Span::raw(marker),
                Span::raw(format!("{:<width$}", axis.name(), width = NAME_WIDTH)),
            ];
            spans.extend(slider_bar(score, SLIDER_BAR_WIDTH, color, theme.bar_empty).spans);
            spans.push(Span::raw(format!(" {:>3} ", score)));
            spans.push(Span::styled(letter.to_string(), Style::default().fg(color).bold()));

            let line = Line::from(spans);
            if selected {
                line.style(theme.row_selected)
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn slider_bar(score: u8, width: usize, filled_color: Color, empty_color: Color) -> Line<'static> {
    let ratio = f64::from(score) / f64::from(MAX_SCORE);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(filled_color)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(empty_color)));
    }

    Line::from(spans)
}

fn render_radar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let polygon = app.polygon();
    let labels = axis_labels();
    let (grid, outline, label_color) = (theme.grid, theme.polygon, theme.label);

    let block = Block::bordered().title(" Radar ");
    let inner = block.inner(area);

    // Cells are about twice as tall as wide: widen the x range to keep rings round
    let x_extent = if inner.height > 0 {
        (CHART_EXTENT * f64::from(inner.width) / (2.0 * f64::from(inner.height))).max(CHART_EXTENT)
    } else {
        CHART_EXTENT
    };
    let units_per_column = if inner.width > 0 {
        2.0 * x_extent / f64::from(inner.width)
    } else {
        1.0
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-CHART_EXTENT, CHART_EXTENT])
        .paint(move |ctx| {
            for radius in GRID_RINGS {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius,
                    color: grid,
                });
            }
            for i in 0..AXIS_COUNT {
                let (x, y) = spoke_end(i, f64::from(MAX_SCORE));
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: grid,
                });
            }

            ctx.layer();
            for edge in polygon.windows(2) {
                let (x1, y1) = edge[0].to_cartesian();
                let (x2, y2) = edge[1].to_cartesian();
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: outline,
                });
            }

            for (i, label) in labels.iter().enumerate() {
                let (x, y) = spoke_end(i, LABEL_RADIUS);
                let width = label.chars().count() as f64 * units_per_column;
                // Left-side labels end at the spoke, top/bottom ones center on it
                let x = if x < -1.0 {
                    x - width
                } else if x.abs() <= 1.0 {
                    x - width / 2.0
                } else {
                    x
                };
                ctx.print(x, y, Span::styled(*label, Style::default().fg(label_color)));
            }
        });

    frame.render_widget(canvas, area);
}

fn spoke_end(index: usize, radius: f64) -> (f64, f64) {
    PolarVertex {
        angle: axis_angle(index),
        radius,
    }
    .to_cartesian()
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let code = app.code();
    let profile = app.profile();

    let mut code_spans = vec![Span::styled("Type code ", Style::default().fg(theme.muted))];
    for (axis, score) in app.scores.iter() {
        code_spans.push(Span::styled(
            code.letter(axis).to_string(),
            Style::default().fg(theme.pole_color(score)).bold(),
        ));
    }
    code_spans.push(Span::styled(
        format!(
            "   Integration {:.2}   Stage {}",
            profile.integration_index, profile.overall_stage
        ),
        Style::default().fg(theme.muted),
    ));

    let axis = app.selected_axis();
    let reading = &profile.readings[axis.index()];
    let (first, second) = axis.poles();
    let (high, low) = axis.letters();
    let leaning = reading.leaning_pole().unwrap_or("balanced");
    let detail = format!(
        "{}: {} ({}) / {} ({})  leaning {}  margin {:.2}  {}",
        axis.name(),
        first,
        high,
        second,
        low,
        leaning,
        reading.margin,
        reading.stage
    );

    let lines = vec![
        Line::from(""),
        Line::from(code_spans),
        Line::from(Span::styled(detail, Style::default().fg(theme.muted))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => theme.flash_success,
            FlashKind::Error => theme.flash_error,
            FlashKind::Info => theme.flash_info,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints = [
            ("j/k", ":axis "),
            ("h/l", ":adjust "),
            ("e", ":export "),
            ("r", ":reset "),
            ("z", ":undo "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = vec![
            Span::styled(
                format!("step {}", app.step),
                Style::default().fg(theme.muted),
            ),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let popup_area = centered_rect_fixed(50, 16, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(theme.status_key_color).bold();
    let entries = [
        ("j / Down      ", "Next axis"),
        ("k / Up        ", "Previous axis"),
        ("l / Right / + ", "Increase by step"),
        ("h / Left / -  ", "Decrease by step"),
        ("L / H         ", "Increase / decrease by 10"),
        ("Home / End    ", "Set to 0 / 100"),
        ("e             ", "Export CSV"),
        ("r             ", "Reset to initial scores"),
        ("z             ", "Undo last change"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, action)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*action)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::scoring::{Axis, AxisScores};
    use crate::tui::theme::ThemeColors;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(AxisScores::uniform(70).unwrap(), &Config::default(), ThemeColors::dark())
    }

    #[test]
    fn test_draw_shows_axes_and_code() {
        let screen = render(&app(), 120, 30);
        assert!(screen.contains("JVDT Explorer"));
        for axis in Axis::ALL {
            assert!(screen.contains(axis.name()), "missing {}", axis.name());
        }
        assert!(screen.contains("ARIDSTL"));
    }

    #[test]
    fn test_draw_small_terminal() {
        let screen = render(&app(), 40, 8);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_help_popup() {
        let mut app = app();
        app.show_help();
        let screen = render(&app, 120, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_info_flash_uses_theme_color() {
        let mut app = App::new(AxisScores::uniform(70).unwrap(), &Config::default(), ThemeColors::light());
        app.show_flash("Undone".to_string(), FlashKind::Info);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let first = &buffer[(0, 29)];
        assert_eq!(first.symbol(), "U");
        assert_eq!(first.fg, app.theme.flash_info);
    }
}
