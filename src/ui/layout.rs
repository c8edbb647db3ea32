use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into a three-row header and the stage below it.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let header_height = area.height.min(3);
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height),
    };
    (header, body)
}

/// Split the stage into a main panel and a right-hand sidebar.
pub fn stage_regions(stage: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(stage);
    (columns[0], columns[1])
}

/// Create a centered rect of given size, clamped to `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Rects for a top-right stack of `count` boxes, oldest on top.
///
/// Boxes that would fall below `area` are dropped.
pub fn tip_stack(area: Rect, count: usize, width: u16, height: u16) -> Vec<Rect> {
    let width = width.min(area.width);
    let x = area.x + area.width.saturating_sub(width);
    (0..count)
        .map_while(|index| {
            let offset = u16::try_from(index).ok()?.checked_mul(height)?;
            if offset.saturating_add(height) > area.height {
                return None;
            }
            Some(Rect {
                x,
                y: area.y + offset,
                width,
                height,
            })
        })
        .collect()
}
