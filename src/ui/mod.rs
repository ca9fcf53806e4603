use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::definitions::{ControlKind, FocusArea};
use crate::expression::{Operator, SLOT_COUNT};

mod theme;
use theme::*;

/// Size of one expression region, borders included.
const REGION_WIDTH: u16 = 5;
const REGION_HEIGHT: u16 = 3;
const REGION_GAP: u16 = 1;

const MIN_WIDTH: u16 = 72;
const MIN_HEIGHT: u16 = 14;

fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();

    // Every frame starts from empty registries; the panels re-register the
    // rectangles they actually drew.
    app.regions.clear();
    app.controls.clear();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let hint = Paragraph::new(format!(
            "Terminal too small, resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("clicalc")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_IDLE)),
        )
        .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
        f.render_widget(hint, size);
        return;
    }

    let base = Block::default().style(Style::default().bg(BG_PRIMARY));
    f.render_widget(base, size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(REGION_HEIGHT + 4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    render_expression(f, app, vertical[0]);
    render_controls(f, app, vertical[1]);
    render_message(f, app, vertical[2]);
    render_status_bar(f, app, vertical[4]);
}

/// Draws the five editable regions left to right, the selected one
/// highlighted, followed by `=` and the evaluated result.
fn render_expression(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_IDLE))
        .title(Span::styled("Expression", Style::default().fg(FG_PRIMARY)))
        .style(Style::default().bg(BG_PANEL));
    if app.focus == FocusArea::Expression {
        block = block.border_style(
            Style::default()
                .fg(BORDER_FOCUS)
                .add_modifier(Modifier::BOLD),
        );
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    let inner_end = inner.x.saturating_add(inner.width);
    let top = inner.y.saturating_add(1);
    let mut cursor = inner.x.saturating_add(1);

    for slot in 0..SLOT_COUNT {
        if cursor.saturating_add(REGION_WIDTH) > inner_end {
            break;
        }
        let rect = Rect {
            x: cursor,
            y: top,
            width: REGION_WIDTH,
            height: REGION_HEIGHT,
        };
        app.regions.register(slot, rect);

        let selected = app.expression.selected() == slot;
        let region_style = if selected {
            Style::default().fg(SELECTED_FG).bg(SELECTED_BG)
        } else {
            Style::default().fg(FG_PRIMARY).bg(BG_PANEL)
        };
        let border_style = if selected {
            Style::default()
                .fg(SELECTED_BORDER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(REGION_BORDER)
        };
        let region = Paragraph::new(app.expression.slot_text(slot))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .style(region_style);
        f.render_widget(region, rect);

        cursor = cursor.saturating_add(REGION_WIDTH + REGION_GAP);
    }

    // Result tail, repainted from evaluate() on every frame.
    let tail = format!("= {}", app.expression.evaluate());
    let tail_x = cursor.saturating_add(1);
    let available = inner_end.saturating_sub(tail_x);
    if available > 0 {
        let tail_rect = Rect {
            x: tail_x,
            y: top.saturating_add(1),
            width: cell_width(&tail).min(available),
            height: 1,
        };
        let result = Paragraph::new(tail)
            .style(
                Style::default()
                    .fg(RESULT_FG)
                    .bg(BG_PANEL)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Left);
        f.render_widget(result, tail_rect);
    }
}

fn render_controls(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(20),
            Constraint::Length(17),
            Constraint::Length(18),
            Constraint::Min(0),
        ])
        .split(area);

    render_operand_entry(f, app, columns[0]);
    render_operator_choices(f, app, columns[1]);
    render_button(f, app, columns[2], ControlKind::SetOperand, "[ Set Operand ]");
    render_button(f, app, columns[3], ControlKind::SetOperator, "[ Set Operator ]");
}

fn render_operand_entry(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_IDLE))
        .title(Span::styled("Operand", Style::default().fg(FG_PRIMARY)))
        .style(Style::default().bg(BG_PANEL));
    if app.focus == FocusArea::OperandEntry {
        block = block.border_style(
            Style::default()
                .fg(BORDER_FOCUS)
                .add_modifier(Modifier::BOLD),
        );
    }
    let inner = block.inner(area);
    app.controls.register(ControlKind::OperandEntry, area);

    let content = if app.operand_entry.is_empty() && app.focus != FocusArea::OperandEntry {
        Span::styled("0-9", Style::default().fg(FG_DIM))
    } else {
        Span::styled(
            app.operand_entry.buffer().to_string(),
            Style::default().fg(Color::White),
        )
    };
    let field = Paragraph::new(Line::from(content))
        .block(block)
        .style(Style::default().bg(BG_PANEL));
    f.render_widget(field, area);

    if app.focus == FocusArea::OperandEntry && inner.width > 0 {
        let column = app
            .operand_entry
            .cursor_display_column()
            .min(inner.width.saturating_sub(1));
        f.set_cursor(inner.x.saturating_add(column), inner.y);
    }
}

/// Draws the three-way operator radio row, registering one rectangle per
/// choice.
fn render_operator_choices(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let row = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: 1,
    };
    let row_end = row.x.saturating_add(row.width);
    let mut spans: Vec<Span> = Vec::new();
    let mut cursor = row.x;

    for operator in Operator::ALL {
        let chosen = app.operator_choice == operator;
        let label = format!("({}) {}", if chosen { "x" } else { " " }, operator.symbol());
        let width = cell_width(&label);
        if cursor.saturating_add(width) > row_end {
            break;
        }
        let mut style = Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY);
        if chosen {
            style = style.fg(BORDER_FOCUS).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(label, style));
        app.controls.register(
            ControlKind::OperatorChoice(operator),
            Rect {
                x: cursor,
                y: row.y,
                width,
                height: 1,
            },
        );
        cursor = cursor.saturating_add(width);
        if cursor < row_end {
            spans.push(Span::styled("  ", Style::default().bg(BG_PRIMARY)));
            cursor = cursor.saturating_add(2);
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(BG_PRIMARY));
    f.render_widget(paragraph, row);
}

fn render_button(f: &mut Frame<'_>, app: &mut App, area: Rect, kind: ControlKind, label: &str) {
    let row = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: cell_width(label).min(area.width),
        height: 1,
    };
    if row.width == 0 {
        return;
    }
    app.controls.register(kind, row);
    let button = Paragraph::new(label)
        .style(Style::default().fg(BUTTON_TEXT).bg(BUTTON_BG))
        .alignment(Alignment::Left);
    f.render_widget(button, row);
}

fn render_message(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(message) = app.error_message.as_ref() else {
        return;
    };
    let line = Paragraph::new(Span::styled(
        message.as_str(),
        Style::default().fg(ERROR_FG).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Left)
    .style(Style::default().bg(BG_PRIMARY));
    f.render_widget(line, area);
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let segments = [
        format!("[EXPR:{}]", app.expression),
        format!("[SEL:{}]", app.expression.selected()),
        format!("[KIND:{}]", app.expression.selected_kind().label()),
        format!("[RES:{}]", app.expression.evaluate()),
        format!("[OP:{}]", app.operator_choice.symbol()),
    ];

    f.render_widget(Clear, area);
    let base = Block::default().style(Style::default().bg(BAR_BG));
    f.render_widget(base, area);

    let mut spans: Vec<Span> = Vec::new();
    for text in segments {
        spans.push(Span::styled(text, Style::default().fg(BAR_TEXT).bg(BAR_BG)));
        spans.push(Span::styled(" ", Style::default().bg(BAR_BG)));
    }
    spans.push(Span::styled(
        app.status_message.clone(),
        Style::default().fg(BAR_TEXT).bg(BAR_BG),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().fg(BAR_TEXT).bg(BAR_BG));
    f.render_widget(bar, area);
}
