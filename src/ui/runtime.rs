use crate::config::Config;
use crate::ui::app::App;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{self, Event};
use ratatui::layout::Rect;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(50);

/// Run the showcase until the user quits.
///
/// Input is drained on every tick so tip timers keep firing on the same
/// runtime between key presses.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(Rect::new(0, 0, cols, rows), &config)?;
    let mut ticker = tokio::time::interval(TICK_RATE);
    tracing::info!(cols, rows, "showcase started");

    loop {
        app.on_tick();
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        ticker.tick().await;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => app.on_key(key),
                Event::Mouse(mouse) => app.on_mouse(mouse),
                Event::Resize(cols, rows) => app.on_resize(cols, rows),
                _ => {}
            }
        }
    }

    app.dialog().close();
    app.tips().remove_all_tips();
    drop(guard);
    tracing::info!("showcase stopped");
    Ok(())
}
