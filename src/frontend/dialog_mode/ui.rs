use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap};
use throbber_widgets_tui::Throbber;

use crate::frontend::App;
use crate::updater::StatusMessage;

const HEADER: &str = include_str!("../ascii_logo");
const TITLE: &str = " VNote Update ";
const LOGO_WIDTH: u16 = 12;
const LOGO_SPACING: u16 = 2;
/// Borders and horizontal padding around the dialog content
const CHROME_WIDTH: u16 = 4;
const VERSION_HEIGHT: u16 = 2;
const GAUGE_HEIGHT: u16 = 1;

pub fn ui(f: &mut ratatui::Frame, area: Rect, app: &mut App) {
    let has_notes = app.dialog.notes().is_some();

    let [dialog_column] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let content_width = dialog_column.width.saturating_sub(CHROME_WIDTH);
    let labels_width = content_width.saturating_sub(LOGO_WIDTH + LOGO_SPACING);

    // Both heights follow the wrapped text so nothing is clipped on narrow terminals
    let status = format_status(app.dialog.status());
    let status_height = rendered_height(&status, labels_width).max(1);
    let link = release_link(app.dialog.status());
    let link_height = link
        .as_ref()
        .map_or(0, |link| rendered_height(link, content_width));

    let top_height = status_height
        .saturating_add(VERSION_HEIGHT + 1 + GAUGE_HEIGHT)
        .max(logo_height());

    // Without notes the dialog shrinks around its labels, like a fixed size dialog would
    let height = if has_notes {
        Constraint::Percentage(80)
    } else {
        Constraint::Length(top_height.saturating_add(link_height).saturating_add(4))
    };
    let dialog_area = center(area, Constraint::Percentage(80), height);

    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(TITLE)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [top_area, link_area, notes_area, buttons_area] = Layout::vertical([
        Constraint::Length(top_height),
        Constraint::Length(link_height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let [logo_area, labels_area] =
        Layout::horizontal([Constraint::Length(LOGO_WIDTH), Constraint::Fill(1)])
            .spacing(LOGO_SPACING)
            .areas(top_area);

    render_logo(f, logo_area);
    render_labels(f, app, labels_area, status, status_height);

    if let Some(link) = link {
        f.render_widget(link, link_area);
    }

    if has_notes {
        render_notes(f, app, notes_area);
    }

    render_buttons(f, app, buttons_area);
}

fn render_logo(f: &mut ratatui::Frame, area: Rect) {
    let logo = Paragraph::new(HEADER).style(Style::default().fg(Color::Cyan));
    f.render_widget(logo, area);
}

fn render_labels(
    f: &mut ratatui::Frame,
    app: &mut App,
    area: Rect,
    status: Paragraph<'static>,
    status_height: u16,
) {
    let [version_area, _, status_area, gauge_area] = Layout::vertical([
        Constraint::Length(VERSION_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(status_height),
        Constraint::Length(GAUGE_HEIGHT),
    ])
    .areas(area);

    f.render_widget(Paragraph::new(app.dialog.version_label()), version_area);

    if app.dialog.status().is_checking() {
        let throbber = Throbber::default().label(StatusMessage::CHECKING);
        f.render_stateful_widget(throbber, status_area, &mut app.throbber_state);
    } else {
        f.render_widget(status, status_area);
    }

    let progress = app.dialog.progress();
    if progress.visible {
        let color = if progress.enabled {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(progress.ratio())
            .label("");
        f.render_widget(gauge, gauge_area);
    }
}

fn render_notes(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let notes = app.dialog.notes().unwrap_or_default();

    let notes = Paragraph::new(notes)
        .block(
            Block::default()
                .title("Release Notes")
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.notes_scroll, 0));

    f.render_widget(notes, area);
}

fn render_buttons(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut hints = vec![];
    if let Some(notice) = &app.notice {
        hints.push(Span::styled(notice.as_str(), Style::default().fg(Color::Green)));
        hints.push(Span::raw("  "));
    }
    if app.dialog.release_url().is_some() {
        hints.push(Span::styled("c: copy link  ", Style::default().fg(Color::Gray)));
    }
    hints.push(Span::styled(
        "[ OK ]",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));

    f.render_widget(Paragraph::new(Line::from(hints)).right_aligned(), area);
}

/// Status text without the release url, which gets a row of its own
fn format_status(status: &StatusMessage) -> Paragraph<'static> {
    let text: Text<'static> = match status {
        StatusMessage::UpdateAvailable { .. } => Text::from(vec![
            Line::styled(
                StatusMessage::UPDATE_AVAILABLE,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(StatusMessage::VISIT_RELEASES),
        ]),
        StatusMessage::Failed => status
            .lines()
            .into_iter()
            .map(|line| Line::styled(line, Style::default().fg(Color::Red)))
            .collect(),
        _ => status.lines().into_iter().map(Line::raw).collect(),
    };

    Paragraph::new(text).wrap(Wrap { trim: false })
}

fn release_link(status: &StatusMessage) -> Option<Paragraph<'static>> {
    let StatusMessage::UpdateAvailable { release_url } = status else {
        return None;
    };

    let link = Line::styled(
        release_url.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    );

    Some(Paragraph::new(link).wrap(Wrap { trim: false }))
}

fn rendered_height(paragraph: &Paragraph, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX)
}

fn logo_height() -> u16 {
    u16::try_from(HEADER.lines().count()).unwrap_or(u16::MAX)
}

fn center(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}
