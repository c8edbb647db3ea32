use crate::ui::app::App;
use crate::ui::layout::{layout_regions, stage_regions};
use crate::ui::paint::paint_tree;
use crate::ui::theme::{ACCENT, HEADER_TEXT, STATUS_ERROR, TIP_BORDER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const KEY_HINTS: &str =
    "d dialog  n supersede  s stage dialog  m missing  t tip  click tip dismiss  x clear  q quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body) = layout_regions(area);
    let (stage, sidebar) = stage_regions(body);

    let status = app.status();
    let status_style = if status.error {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let header_lines = vec![
        Line::from(vec![
            Span::styled(
                " tui-overlays ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(status.text, status_style),
        ]),
        Line::styled(format!(" {}", KEY_HINTS), Style::default().fg(TIP_BORDER)),
    ];
    frame.render_widget(
        Paragraph::new(header_lines).block(Block::default().borders(Borders::BOTTOM)),
        header,
    );

    frame.render_widget(
        Block::default().title(" Stage ").borders(Borders::ALL),
        stage,
    );
    let tips_line = format!(" {} live tip(s)", app.tips().len());
    frame.render_widget(
        Paragraph::new(tips_line).block(Block::default().title(" Sidebar ").borders(Borders::ALL)),
        sidebar,
    );

    paint_tree(frame, &app.tree().lock());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    #[test]
    fn draws_header_and_regions() {
        let app = App::new(Rect::new(0, 0, 100, 30), &Config::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("tui-overlays"));
        assert!(text.contains("Ready"));
        assert!(text.contains("Stage"));
        assert!(text.contains("Sidebar"));
    }
}
