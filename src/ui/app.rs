//! Showcase application driving both overlay controllers.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use parking_lot::Mutex;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

use crate::config::Config;
use crate::dialog::{Backdrop, BackdropOptions, DialogAction, DialogController, DialogOptions};
use crate::host::{NodeId, SharedTree, UiTree};
use crate::tips::{TipOptions, TipsController};
use crate::ui::layout::{layout_regions, stage_regions};
use crate::ui::paint::{dialog_bounds, tip_at};

pub const STAGE_SELECTOR: &str = "#stage";
pub const SIDEBAR_SELECTOR: &str = "#sidebar";

const TIP_COLORS: [Color; 4] = [Color::Green, Color::Yellow, Color::Cyan, Color::Magenta];

/// Line shown in the header after each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub error: bool,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }
}

pub struct App {
    tree: SharedTree,
    stage: NodeId,
    sidebar: NodeId,
    dialog: DialogController,
    tips: TipsController,
    status: Arc<Mutex<Status>>,
    pushed: usize,
    should_quit: bool,
}

impl App {
    pub fn new(area: Rect, config: &Config) -> anyhow::Result<Self> {
        let tree = UiTree::shared(area);
        let (stage, sidebar) = {
            let mut guard = tree.lock();
            let root = guard.root();
            let (_, body) = layout_regions(area);
            let (main, side) = stage_regions(body);
            (
                guard.add_region(root, STAGE_SELECTOR, main)?,
                guard.add_region(root, SIDEBAR_SELECTOR, side)?,
            )
        };
        let dialog = DialogController::new(Arc::clone(&tree), config.dialog.defaults()?);
        let tips = TipsController::new(Arc::clone(&tree), config.tips.defaults());
        Ok(Self {
            tree,
            stage,
            sidebar,
            dialog,
            tips,
            status: Arc::new(Mutex::new(Status::info("Ready"))),
            pushed: 0,
            should_quit: false,
        })
    }

    pub fn tree(&self) -> &SharedTree {
        &self.tree
    }

    pub fn dialog(&self) -> &DialogController {
        &self.dialog
    }

    pub fn tips(&self) -> &TipsController {
        &self.tips
    }

    pub fn status(&self) -> Status {
        self.status.lock().clone()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Commit pending tree updates; deferred reveals run here.
    pub fn on_tick(&mut self) {
        self.tree.lock().commit();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let area = Rect::new(0, 0, cols, rows);
        let (_, body) = layout_regions(area);
        let (main, side) = stage_regions(body);
        let mut tree = self.tree.lock();
        tree.resize(area);
        tree.set_area(self.stage, main);
        tree.set_area(self.sidebar, side);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // Supersede works even while a dialog holds the keyboard.
        if key.code == KeyCode::Char('n') {
            self.open_dialog(None);
            return;
        }
        if self.dialog.handle_key(key) {
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.request_quit(),
            KeyCode::Char('d') => self.open_dialog(None),
            KeyCode::Char('s') => self.open_dialog(Some(STAGE_SELECTOR)),
            KeyCode::Char('m') => self.open_dialog(Some("#missing")),
            KeyCode::Char('t') => self.push_tip(),
            KeyCode::Char('x') => {
                self.tips.remove_all_tips();
                self.set_status(Status::info("Cleared all tips"));
            }
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(node) = self.dialog.state().container() {
            let bounds = dialog_bounds(&self.tree.lock(), node);
            let inside = bounds
                .map(|rect| rect.contains(Position::new(mouse.column, mouse.row)))
                .unwrap_or(false);
            if !inside {
                self.dialog.backdrop_click();
            }
            return;
        }
        self.dismiss_tip_at(mouse.column, mouse.row);
    }

    fn dismiss_tip_at(&mut self, column: u16, row: u16) {
        let Some(raw) = tip_at(&self.tree.lock(), column, row) else {
            return;
        };
        let Some(tip) = self.tips.tips().into_iter().find(|tip| tip.id.get() == raw) else {
            return;
        };
        if self.tips.remove_tip(tip.id) {
            self.set_status(Status::info(format!("Dismissed {}", tip.content)));
        }
    }

    fn open_dialog(&mut self, target: Option<&str>) {
        let confirmed = Arc::clone(&self.status);
        let cancelled = Arc::clone(&self.status);
        let dismissed = Arc::clone(&self.status);
        let mut options = DialogOptions::new(
            [
                "Overlays mount outside the normal render flow.",
                "Opening another dialog replaces this one.",
            ],
            DialogAction::new("Confirm")
                .on_complete(move || *confirmed.lock() = Status::info("Dialog confirmed")),
        )
        .title("Render dialog")
        .cancel(
            DialogAction::new("Cancel")
                .on_complete(move || *cancelled.lock() = Status::info("Dialog cancelled")),
        )
        .backdrop(Backdrop::On(
            BackdropOptions::default()
                .blur(1)
                .close_on_click(true)
                .on_backdrop_click(move || *dismissed.lock() = Status::info("Backdrop clicked")),
        ));
        if let Some(target) = target {
            options = options.attach(target);
        }

        match self.dialog.open(options) {
            Ok(session) => self.set_status(Status::info(format!("Dialog {} opened", session))),
            Err(err) => self.set_status(Status::error(err.to_string())),
        }
    }

    fn push_tip(&mut self) {
        let color = TIP_COLORS[self.pushed % TIP_COLORS.len()];
        self.pushed += 1;
        let tip = TipOptions::new(format!("Tip #{}", self.pushed)).text_color(color);
        match self.tips.push_tip(tip) {
            Ok(id) => self.set_status(Status::info(format!("Pushed tip {}", id))),
            Err(err) => self.set_status(Status::error(err.to_string())),
        }
    }

    fn set_status(&self, status: Status) {
        if status.error {
            tracing::warn!("{}", status.text);
        }
        *self.status.lock() = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use tokio::task::LocalSet;

    fn make_app() -> App {
        App::new(Rect::new(0, 0, 80, 24), &Config::default()).unwrap()
    }

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn d_opens_and_enter_confirms() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('d')));
        assert!(app.dialog().is_open());
        app.on_key(press_key(KeyCode::Enter));
        assert!(!app.dialog().is_open());
        assert_eq!(app.status(), Status::info("Dialog confirmed"));
    }

    #[test]
    fn missing_target_reports_error_without_mounting() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('m')));
        assert!(!app.dialog().is_open());
        let status = app.status();
        assert!(status.error);
        assert!(status.text.contains("#missing"));
        let tree = app.tree().lock();
        assert_eq!(tree.children(tree.root()).len(), 2);
    }

    #[test]
    fn click_outside_dialog_hits_backdrop() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('d')));
        app.on_tick();
        app.on_mouse(click(0, 0));
        assert!(!app.dialog().is_open());
        assert_eq!(app.status(), Status::info("Backdrop clicked"));
    }

    #[test]
    fn click_inside_dialog_keeps_it_open() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('d')));
        app.on_tick();
        app.on_mouse(click(40, 12));
        assert!(app.dialog().is_open());
    }

    #[test]
    fn keys_go_to_dialog_first() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('d')));
        app.on_key(press_key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        app.on_key(press_key(KeyCode::Esc));
        app.on_key(press_key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn n_supersedes_open_dialog() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('d')));
        let first = app.dialog().state().session();
        app.on_key(press_key(KeyCode::Char('n')));
        let second = app.dialog().state().session();
        assert!(second.is_some());
        assert_ne!(first, second);
        let tree = app.tree().lock();
        assert_eq!(tree.mounted().count(), 1);
    }

    #[test]
    fn tip_without_runtime_shows_error() {
        let mut app = make_app();
        app.on_key(press_key(KeyCode::Char('t')));
        assert!(app.tips().is_empty());
        assert!(app.status().text.contains("runtime"));
    }

    #[tokio::test(start_paused = true)]
    async fn t_pushes_tip_and_x_clears() {
        LocalSet::new()
            .run_until(async {
                let mut app = make_app();
                app.on_key(press_key(KeyCode::Char('t')));
                app.on_key(press_key(KeyCode::Char('t')));
                assert_eq!(app.tips().len(), 2);
                app.on_key(press_key(KeyCode::Char('x')));
                assert!(app.tips().is_empty());
                assert!(!app.tips().is_mounted());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn click_on_tip_dismisses_only_that_tip() {
        LocalSet::new()
            .run_until(async {
                let mut app = make_app();
                for _ in 0..3 {
                    app.on_key(press_key(KeyCode::Char('t')));
                }
                // Boxes stack top-right: rows 0-2, 3-5, 6-8 from column 44.
                app.on_mouse(click(50, 4));
                let contents: Vec<String> =
                    app.tips().tips().into_iter().map(|tip| tip.content).collect();
                assert_eq!(contents, vec!["Tip #1", "Tip #3"]);
                assert_eq!(app.status(), Status::info("Dismissed Tip #2"));
                assert_eq!(app.tips().pending_timers(), 2);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn click_beside_tips_keeps_them() {
        LocalSet::new()
            .run_until(async {
                let mut app = make_app();
                app.on_key(press_key(KeyCode::Char('t')));
                app.on_mouse(click(10, 1));
                assert_eq!(app.tips().len(), 1);
            })
            .await;
    }
}
