use crate::application::{App, AppMode, Field};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_text_field(f, app, Field::Bill, "Bill", &app.bill_input, chunks[1]);
    render_text_field(f, app, Field::Party, "Number of people", &app.party_input, chunks[2]);
    render_presets(f, app, chunks[3]);
    render_text_field(f, app, Field::CustomTip, "Custom tip %", &app.custom_tip_input, chunks[4]);
    render_results(f, app, chunks[5]);
    render_status_bar(f, app, chunks[7]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("tipsplit - Tip Calculator").style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn field_block(app: &App, field: Field, title: &str) -> Block<'static> {
    let border_style = if app.focus == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(border_style)
}

fn render_text_field(f: &mut Frame, app: &App, field: Field, title: &str, text: &str, area: Rect) {
    let paragraph = Paragraph::new(text.to_string()).block(field_block(app, field, title));
    f.render_widget(paragraph, area);

    if app.focus == field && matches!(app.mode, AppMode::Normal) {
        let max_offset = area.width.saturating_sub(3);
        let offset = (app.cursor_position as u16).min(max_offset);
        f.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

/// Label for a preset button, without trailing zeros for whole numbers.
pub fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{:.0}%", percent)
    } else {
        format!("{}%", percent)
    }
}

fn render_presets(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Field::Presets;
    let active = app.rendered().active_preset;

    let mut spans = Vec::with_capacity(app.presets.len() * 2);
    for (index, &percent) in app.presets.iter().enumerate() {
        let mut style = if active == Some(percent) {
            Style::default().bg(Color::Green).fg(Color::Black)
        } else {
            Style::default().fg(Color::White)
        };
        if focused && index == app.preset_cursor {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", format_percent(percent)), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(field_block(app, Field::Presets, "Select tip %"));
    f.render_widget(paragraph, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let rendered = app.rendered();
    let amount_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::raw("Tip per person:   "),
            Span::styled(rendered.tip_per_person.clone(), amount_style),
        ]),
        Line::from(vec![
            Span::raw("Total per person: "),
            Span::styled(rendered.total_per_person.clone(), amount_style),
        ]),
        Line::from(Span::styled(rendered.error_message(), Style::default().fg(Color::Red))),
    ];

    let results = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(results, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => app.status_message.clone().unwrap_or_else(|| {
            "Tab/↑↓: move | Space/1-9: pick preset | Ctrl+R: reset | F1: help | Esc: quit".to_string()
        }),
        AppMode::Help => "Esc/F1/?/q: close help".to_string(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_widget = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("tipsplit Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TIPSPLIT

Splits a bill and its tip evenly between everyone at the table.
The result updates as you type.

=== FIELDS ===
Bill              Amount before tip (must be 0 or more)
Number of people  Whole number, at least 1
Select tip %      Quick-select percentages
Custom tip %      Any percentage; overrides the quick-select

=== KEYS ===
Tab / ↓           Next field
Shift+Tab / ↑     Previous field
←/→               Move the cursor, or the preset highlight
Space / Enter     Toggle the highlighted preset
1-9               Toggle the n-th preset (on the preset row)
Ctrl+R            Clear the form
F1                Toggle this help
Esc / Ctrl+C      Quit

Pressing a selected preset again removes the tip.
Typing a custom tip deselects any preset."#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::InputEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(15.0), "15%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_renders_initial_zero_result() {
        let screen = draw(&App::default());
        assert!(screen.contains("Tip per person:   ₹0.00"));
        assert!(screen.contains("Total per person: ₹0.00"));
        assert!(screen.contains(" 15% "));
        assert!(!screen.contains("Enter a valid bill amount."));
    }

    #[test]
    fn test_renders_split_and_error() {
        let mut app = App::default();
        app.notify(InputEvent::BillChanged("100".to_string()));
        app.notify(InputEvent::PartyChanged("4".to_string()));
        app.notify(InputEvent::PresetToggled(15.0));
        let screen = draw(&app);
        assert!(screen.contains("₹3.75"));
        assert!(screen.contains("₹28.75"));

        app.notify(InputEvent::PartyChanged("0".to_string()));
        let screen = draw(&app);
        assert!(screen.contains("Number of people must be at least 1."));
    }

    #[test]
    fn test_renders_help_popup() {
        let mut app = App::default();
        app.toggle_help();
        let screen = draw(&app);
        assert!(screen.contains("tipsplit Help"));
    }
}
