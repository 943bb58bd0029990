use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget};

use crate::frontend::App;

const HELP: [&str; 3] = [
    "q: Quit | Backspace: Back to update | ↑/↓: Select target | f: Focus target",
    "←/→: Display level | +/-: Filter level | Space: Toggle hidden targets",
    "h: Hide target selector | PageUp/Down: Scroll | Esc: Cancel scroll",
];

pub fn ui(f: &mut ratatui::Frame, area: Rect, app: &mut App) {
    let [logs_area, help_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let logs = TuiLoggerSmartWidget::default()
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Green))
        .output_separator(':')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(true)
        .output_file(false)
        .output_line(false)
        .title_log("Update check logs")
        .title_target("Targets")
        .state(&app.log_state);
    f.render_widget(logs, logs_area);

    if area.width > 40 {
        let help = Paragraph::new(Text::from_iter(HELP))
            .style(Style::default().fg(Color::Gray))
            .centered()
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(help, help_area);
    }
}
