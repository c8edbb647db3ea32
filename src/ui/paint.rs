//! Paint mounted overlay fragments.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::host::{DialogButton, DialogElement, Fragment, NodeId, TipListElement, UiTree};
use crate::ui::layout::{centered_rect, tip_stack};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, DIALOG_BORDER, DIALOG_TEXT, TIP_BORDER, TIP_TEXT};

const DIALOG_MIN_WIDTH: u16 = 24;
const TIP_WIDTH: u16 = 36;
const TIP_HEIGHT: u16 = 3;

/// Paint every mounted fragment at its host's area, in mount order.
pub fn paint_tree(frame: &mut Frame, tree: &UiTree) {
    for (node, fragment) in tree.mounted() {
        let host = fragment.relocation().unwrap_or(node);
        let Some(area) = tree.paint_area(host) else {
            continue;
        };
        match fragment.content() {
            Fragment::Dialog(dialog) => render_dialog(frame, area, dialog),
            Fragment::TipList(list) => render_tips(frame, area, list),
            Fragment::Teleport { .. } => {}
        }
    }
}

/// Screen rect of the dialog mounted at `node`, if one is mounted there.
pub fn dialog_bounds(tree: &UiTree, node: NodeId) -> Option<Rect> {
    let fragment = tree.fragment(node)?;
    let dialog = fragment.as_dialog()?;
    let area = tree.paint_area(fragment.relocation().unwrap_or(node))?;
    Some(dialog_rect(area, dialog))
}

/// Id of the painted tip under (`column`, `row`), if any.
pub fn tip_at(tree: &UiTree, column: u16, row: u16) -> Option<u64> {
    let position = Position::new(column, row);
    tree.mounted().find_map(|(node, fragment)| {
        let list = fragment.as_tip_list()?;
        let area = tree.paint_area(fragment.relocation().unwrap_or(node))?;
        tip_stack(area, list.tips.len(), TIP_WIDTH, TIP_HEIGHT)
            .into_iter()
            .zip(&list.tips)
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, tip)| tip.id)
    })
}

/// Where a dialog lands inside `area`.
pub fn dialog_rect(area: Rect, dialog: &DialogElement) -> Rect {
    let buttons = button_labels(dialog)
        .iter()
        .map(|label| label.chars().count() + 4)
        .sum::<usize>();
    let widest = dialog
        .content
        .iter()
        .map(|line| line.chars().count())
        .chain(dialog.title.iter().map(|t| t.chars().count() + 2))
        .chain(std::iter::once(buttons))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest + 4)
        .unwrap_or(u16::MAX)
        .max(DIALOG_MIN_WIDTH)
        .min(area.width);
    let height = u16::try_from(dialog.content.len() + 4)
        .unwrap_or(u16::MAX)
        .min(area.height);
    centered_rect(width, height, area)
}

fn render_dialog(frame: &mut Frame, area: Rect, dialog: &DialogElement) {
    if !dialog.revealed {
        return;
    }

    if let Some(backdrop) = dialog.backdrop {
        let mut style = Style::default().bg(backdrop.color);
        if backdrop.blur > 0 {
            style = style.add_modifier(Modifier::DIM);
        }
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(style), area);
    }

    let rect = dialog_rect(area, dialog);
    frame.render_widget(Clear, rect);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));
    if let Some(title) = &dialog.title {
        block = block
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center);
    }
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines: Vec<Line> = dialog
        .content
        .iter()
        .map(|line| Line::styled(format!(" {}", line), Style::default().fg(DIALOG_TEXT)))
        .collect();
    lines.push(Line::from(""));
    lines.push(render_buttons(dialog));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn button_labels(dialog: &DialogElement) -> Vec<&str> {
    let mut labels = vec![dialog.confirm_label.as_str()];
    if let Some(cancel) = &dialog.cancel_label {
        labels.push(cancel.as_str());
    }
    labels
}

fn render_buttons(dialog: &DialogElement) -> Line<'static> {
    let style_for = |button: DialogButton| {
        if dialog.focused == button {
            Style::default()
                .fg(DIALOG_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIALOG_TEXT)
        }
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", dialog.confirm_label),
            style_for(DialogButton::Confirm),
        ),
    ];
    if let Some(cancel) = &dialog.cancel_label {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", cancel),
            style_for(DialogButton::Cancel),
        ));
    }
    Line::from(spans).alignment(Alignment::Right)
}

fn render_tips(frame: &mut Frame, area: Rect, list: &TipListElement) {
    let rects = tip_stack(area, list.tips.len(), TIP_WIDTH, TIP_HEIGHT);
    for (tip, rect) in list.tips.iter().zip(rects) {
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TIP_BORDER));
        let text = Span::styled(
            tip.content.clone(),
            Style::default().fg(tip.text_color.unwrap_or(TIP_TEXT)),
        );
        frame.render_widget(Paragraph::new(Line::from(text)).block(block), rect);
    }
}
