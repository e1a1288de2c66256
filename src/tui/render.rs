//! UI rendering functions for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::binge::format_finish_date;
use crate::highlights::{season_highlights, SeasonHighlights};
use crate::matrix::{build_episode_matrix, EpisodeMatrix};
use crate::rating::{classify_rating, RatingBucket, Swatch};

use super::state::App;
use super::types::{CalculatorField, Focus};

/// Width of one heatmap cell in columns.
const CELL_WIDTH: u16 = 5;
/// Width of the season label column.
const LABEL_WIDTH: u16 = 5;

/// Draw the UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(3),  // Legend
            Constraint::Min(6),     // Heatmap
            Constraint::Length(10), // Details + calculator
            Constraint::Length(3),  // Footer
        ])
        .split(size);

    draw_header(frame, app, chunks[0]);
    draw_legend(frame, chunks[1]);
    draw_heatmap(frame, app, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(chunks[3]);

    draw_stats(frame, app, bottom[0]);
    draw_episode_detail(frame, app, bottom[1]);
    draw_calculator(frame, app, bottom[2]);

    draw_footer(frame, app, chunks[4]);

    if app.show_help {
        draw_help_modal(frame);
    }
}

fn swatch_color(swatch: Swatch) -> Color {
    Color::Rgb(swatch.r, swatch.g, swatch.b)
}

fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "series-heatmap",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, series) in app.series.iter().enumerate() {
        spans.push(Span::raw("  "));
        let style = if i == app.active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(series.to_display(), style));
    }

    if app.show_highlights {
        spans.push(Span::styled("  [best/worst]", Style::default().fg(Color::Yellow)));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_legend(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw("Rating Buckets: ")];
    for bucket in RatingBucket::ALL {
        spans.push(Span::styled("   ", Style::default().bg(swatch_color(bucket.fill()))));
        spans.push(Span::raw(format!(" {}   ", bucket.legend_label())));
    }

    let legend = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(legend, area);
}

/// First index to show so that `selected` stays inside a window of `visible`.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

fn cell_span(
    matrix: &EpisodeMatrix<'_>,
    row: usize,
    col: usize,
    selected: bool,
    highlight: Option<SeasonHighlights>,
) -> Span<'static> {
    let Some(episode) = matrix.cell(row, col) else {
        let style = if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        return Span::styled("  ·  ", style);
    };

    let marker = match highlight {
        Some(h) if h.best == Some(col) => '▲',
        Some(h) if h.worst == Some(col) => '▼',
        _ => ' ',
    };

    let mut style = Style::default()
        .fg(Color::Black)
        .bg(swatch_color(classify_rating(episode.rating).fill_color));
    if selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }

    Span::styled(format!("{:>4.1}{}", episode.rating, marker), style)
}

fn draw_heatmap(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Heatmap;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Episodes")
        .border_style(panel_border(focused));

    let Some(series) = app.current() else {
        frame.render_widget(Paragraph::new("No data.").block(block), area);
        return;
    };

    let matrix = build_episode_matrix(series);
    if matrix.is_empty() || matrix.width() == 0 {
        frame.render_widget(Paragraph::new("No episodes.").block(block), area);
        return;
    }

    let highlights = if app.show_highlights {
        season_highlights(&matrix)
    } else {
        Vec::new()
    };

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let visible_cols = (inner_width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH).max(1) as usize;
    let visible_rows = inner_height.saturating_sub(1).max(1) as usize;

    let col_start = scroll_offset(app.selected_col, visible_cols);
    let col_end = (col_start + visible_cols).min(matrix.width());
    let row_start = scroll_offset(app.selected_row, visible_rows);
    let row_end = (row_start + visible_rows).min(matrix.rows.len());

    let mut lines = Vec::with_capacity(row_end - row_start + 1);

    let mut header = vec![Span::raw(" ".repeat(LABEL_WIDTH as usize))];
    header.extend((col_start..col_end).map(|col| {
        Span::styled(
            format!("{:^5}", col + 1),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    }));
    lines.push(Line::from(header));

    for row in row_start..row_end {
        let season_number = matrix.rows[row].season_number;
        let mut spans = vec![Span::styled(
            format!("{:<5}", format!("S{}", season_number)),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        let highlight = highlights.get(row).copied();
        spans.extend((col_start..col_end).map(|col| {
            let selected = focused && row == app.selected_row && col == app.selected_col;
            cell_span(&matrix, row, col, selected, highlight)
        }));
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_stats(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Rating        ", label),
            Span::styled(
                stats.rating_display(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / 10", label),
        ]),
        Line::from(vec![
            Span::styled("Total Time    ", label),
            Span::raw(stats.runtime_display()),
        ]),
        Line::from(vec![
            Span::styled("Avg Ep Length ", label),
            Span::raw(format!("{} min", stats.average_runtime_minutes)),
        ]),
        Line::from(vec![
            Span::styled("Episodes      ", label),
            Span::raw(stats.episode_count.to_string()),
        ]),
    ];

    let mut text = lines;
    let highlights = app.series_highlights();
    if let Some(best) = highlights.best {
        text.push(Line::from(vec![
            Span::styled("Best          ", label),
            Span::styled(best.to_display(), Style::default().fg(Color::Green)),
        ]));
    }
    if let Some(worst) = highlights.worst {
        text.push(Line::from(vec![
            Span::styled("Worst         ", label),
            Span::styled(worst.to_display(), Style::default().fg(Color::Red)),
        ]));
    }

    if let Some(description) = app.current().and_then(|s| s.description.as_deref()) {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }

    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Series"))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn draw_episode_detail(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Episode");

    let Some((season, episode)) = app.selected_episode() else {
        let empty = Paragraph::new("No episode selected")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let style = classify_rating(episode.rating);
    let lines = vec![
        Line::from(Span::styled(
            format!("S{} E{}", season, episode.episode_number),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            episode.title.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("Rating: {:.1}", episode.rating),
            Style::default()
                .fg(swatch_color(style.text_color))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            episode.runtime_display(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn draw_calculator(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Calculator;

    let mut lines: Vec<Line> = CalculatorField::ALL
        .iter()
        .map(|&field| {
            let value = match field {
                CalculatorField::Season => app.season_filter.to_string(),
                CalculatorField::HoursPerDay => format!("{}", app.hours_per_day),
                CalculatorField::DaysPerWeek => format!("{}", app.days_per_week),
                CalculatorField::StartDate => app.start_date.format("%Y-%m-%d").to_string(),
            };
            let selected = focused && field == app.field;
            let marker = if selected { "> " } else { "  " };
            let value_style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<12}", field.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("◀ {} ▶", value), value_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(match app.binge_result() {
        Err(err) => Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Ok(Some(plan)) => Line::from(vec![
            Span::raw("You will finish on: "),
            Span::styled(
                format_finish_date(plan.finish_date),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Ok(None) => Line::from(Span::styled(
            "No runtime data for this selection",
            Style::default().fg(Color::DarkGray),
        )),
    });

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Time to watch")
            .border_style(panel_border(focused)),
    );
    frame.render_widget(panel, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.status_message {
        Some(message) => (message.as_str(), Style::default().fg(Color::Yellow)),
        None => {
            let keys = match app.focus {
                Focus::Heatmap => "[←↑↓→] move  [Enter] discussion  [i] IMDb  [Tab] calculator  [b] best/worst  [c] compare  [?] help  [q] quit",
                Focus::Calculator => "[↑↓] field  [←→] adjust  [Tab] heatmap  [c] compare  [?] help  [q] quit",
            };
            (keys, Style::default().fg(Color::DarkGray))
        }
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_help_modal(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let content = "\
Global Commands
───────────────
  ?           Show/hide this help
  Ctrl+C      Force quit
  Tab         Switch between heatmap and calculator
  c           Switch to the comparison series
  b           Toggle best/worst episode markers
  q           Quit

Heatmap
───────
  ←↑↓→ / hjkl Move selection
  Home        Jump to first episode
  Enter       Reddit discussion link for episode
  i           IMDb link for episode

Time to watch
─────────────
  ↑↓ / jk     Select field
  ←→ / -+     Adjust value
";

    let help_text = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help_text, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::parse_series;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app() -> App {
        let series = parse_series(
            r#"{"title": "Sample", "year": "2020", "seasons": [
                {"seasonNumber": 1, "episodes": [
                    {"episodeNumber": 1, "title": "Pilot", "rating": 9.0, "runtime": 600}
                ]}
            ]}"#,
        )
        .unwrap();
        App::new(vec![series], &Config::new(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(12, 10), 3);
        assert_eq!(scroll_offset(5, 0), 0);
    }

    #[test]
    fn test_draw_renders_heatmap_and_finish_date() {
        let backend = TestBackend::new(140, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = app();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Sample (2020)"));
        assert!(text.contains("S1"));
        assert!(text.contains("9.0"));
        assert!(text.contains("Saturday, January 6, 2024"));
        assert!(text.contains("S1E1 (9.0)"));
    }

    #[test]
    fn test_draw_shows_validation_error() {
        let backend = TestBackend::new(140, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app();
        app.hours_per_day = 25.0;
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("hours per day cannot exceed 24"));
    }
}
