//! Tip form rendering.

use crate::app::App;
use crate::colors;
use quicktip_core::{Field, TipView, segment_choices};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const FORM_WIDTH: u16 = 48;
// price + segments + tip + total + status + borders
const FORM_HEIGHT: u16 = 3 + 3 + 3 + 2 + 1 + 2;

/// Render the tip calculator as a centered dialog.
pub fn render_tip_form(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(colors::BG));
    f.render_widget(bg_block, f.area());

    let accent = colors::accent(app.theme);
    let view = app.form.view();

    let area = f.area();
    let form_width = FORM_WIDTH.min(area.width.saturating_sub(4));
    let form_height = FORM_HEIGHT.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;
    let form_area = Rect::new(x, y, form_width, form_height);

    let form_block = Block::default()
        .borders(Borders::ALL)
        .title(" Quick Tip ")
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(accent));

    f.render_widget(Clear, form_area);
    f.render_widget(form_block, form_area);

    let inner = Rect::new(
        form_area.x + 2,
        form_area.y + 1,
        form_area.width.saturating_sub(4),
        form_area.height.saturating_sub(2),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let price_focused = app.form.focused() == Field::Price;
    render_amount_field(
        f,
        "Price",
        app.form.price_text(),
        "$",
        price_focused,
        accent,
        chunks[0],
    );
    if price_focused {
        set_field_cursor(f, chunks[0], app.cursor_position());
    }

    // Options stay hidden until there is a price to tip on
    if view.show_options {
        render_segments(f, &view, accent, chunks[1]);
        render_tip_field(f, app, &view, accent, chunks[2]);
        render_total(f, &view, accent, chunks[3]);
    }

    render_status(f, app, chunks[4]);
    render_help(f, form_area);

    if app.show_reset_confirm {
        render_reset_confirm_dialog(f, accent);
    }
}

fn render_amount_field(
    f: &mut Frame,
    label: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    accent: Color,
    area: Rect,
) {
    let (display, text_style) = if value.is_empty() {
        (placeholder, Style::default().fg(colors::OUTLINE))
    } else if is_focused {
        (
            value,
            Style::default()
                .fg(colors::ON_SURFACE)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (value, Style::default().fg(colors::SUBTEXT))
    };

    let border_color = if is_focused { accent } else { colors::OUTLINE };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(label.to_string())
        .border_style(Style::default().fg(border_color));

    f.render_widget(Paragraph::new(display).style(text_style).block(block), area);
}

fn render_segments(f: &mut Frame, view: &TipView, accent: Color, area: Rect) {
    let mut spans = Vec::new();
    for (i, choice) in segment_choices().iter().enumerate() {
        let label = format!(" {} ", choice.label());
        let style = if i == view.segment {
            Style::default()
                .fg(colors::BG)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::SUBTEXT)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Tip [<-/->]")
        .border_style(Style::default().fg(colors::OUTLINE));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_tip_field(f: &mut Frame, app: &App, view: &TipView, accent: Color, area: Rect) {
    if view.custom_enabled {
        let focused = app.form.focused() == Field::CustomTip;
        render_amount_field(
            f,
            "Custom tip",
            app.form.custom_tip_text(),
            "0.00",
            focused,
            accent,
            area,
        );
        if focused {
            set_field_cursor(f, area, app.cursor_position());
        }
        return;
    }

    let title = match app.form.mode().ok().and_then(|mode| mode.percent()) {
        Some(percent) => format!("Tip at {}%", percent.normalize()),
        None => "Tip".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(colors::OUTLINE));
    let text = Paragraph::new(view.tip.clone())
        .style(Style::default().fg(colors::SUBTEXT))
        .block(block);
    f.render_widget(text, area);
}

fn render_total(f: &mut Frame, view: &TipView, accent: Color, area: Rect) {
    let line = Line::from(vec![
        Span::styled("  = ", Style::default().fg(colors::SUBTEXT)),
        Span::styled(
            view.total.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.status_message {
        let text = Paragraph::new(message.as_str()).style(Style::default().fg(colors::ERROR));
        f.render_widget(text, area);
    }
}

fn render_help(f: &mut Frame, form_area: Rect) {
    let help_area = Rect::new(
        form_area.x,
        form_area.y + form_area.height,
        form_area.width,
        1,
    );

    let help_text = Line::from(vec![
        Span::styled("<-/->", Style::default().fg(colors::ON_SURFACE)),
        Span::styled(": tip  ", Style::default().fg(colors::SUBTEXT)),
        Span::styled("Tab", Style::default().fg(colors::ON_SURFACE)),
        Span::styled(": field  ", Style::default().fg(colors::SUBTEXT)),
        Span::styled("Del", Style::default().fg(colors::ON_SURFACE)),
        Span::styled(": clear  ", Style::default().fg(colors::SUBTEXT)),
        Span::styled("Esc", Style::default().fg(colors::ON_SURFACE)),
        Span::styled(": reset/quit", Style::default().fg(colors::SUBTEXT)),
    ]);

    if help_area.y < f.area().height {
        f.render_widget(Paragraph::new(help_text), help_area);
    }
}

fn set_field_cursor(f: &mut Frame, area: Rect, cursor_position: usize) {
    // Terminal cursor positions are bounded by terminal dimensions (u16)
    #[allow(clippy::cast_possible_truncation)]
    let cursor_x = area.x + 1 + cursor_position as u16;
    let cursor_y = area.y + 1;
    if cursor_x < area.x + area.width.saturating_sub(1) {
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

fn render_reset_confirm_dialog(f: &mut Frame, accent: Color) {
    let area = f.area();
    let dialog_width = 40.min(area.width.saturating_sub(4));
    let dialog_height = 5;
    let dialog_x = (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect::new(dialog_x, dialog_y, dialog_width, dialog_height);

    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Start Over? ")
        .style(Style::default().bg(colors::SURFACE_HIGH))
        .border_style(Style::default().fg(colors::WARNING));

    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let text = vec![
        Line::from(Span::styled(
            "Clear the price and tip?",
            Style::default().fg(colors::ON_SURFACE),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(colors::ERROR)),
            Span::styled(": reset  ", Style::default().fg(colors::SUBTEXT)),
            Span::styled("Esc", Style::default().fg(accent)),
            Span::styled(": keep editing", Style::default().fg(colors::SUBTEXT)),
        ]),
    ];

    f.render_widget(Paragraph::new(text), inner);
}
