use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Once;
use std::time::Duration;

use crate::app::{App, AppMode, Focus, RenderState};
use crate::ui::keys::key_to_event;
use crate::ui::view::{
    render_hints, render_name_field, render_placeholder, render_result_card, render_status,
    render_title,
};

static PANIC_HOOK_SET: Once = Once::new();

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        set_panic_hook();

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let poll_timeout = Duration::from_millis(250);

        loop {
            if app.mode == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    let app_event = key_to_event(app.mode, key.code);
                    app.handle_event(app_event);
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = RenderState::from_app(app);

        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // title
                    Constraint::Length(3), // first name
                    Constraint::Length(3), // second name
                    Constraint::Min(5),    // result / placeholder
                    Constraint::Length(1), // status line
                    Constraint::Length(1), // key hints
                ])
                .split(area);

            frame.render_widget(render_title(), rows[0]);

            let editing = state.mode == AppMode::Input;
            frame.render_widget(
                render_name_field(
                    "Name 1",
                    &state.first_name,
                    editing && state.focus == Focus::First,
                ),
                rows[1],
            );
            frame.render_widget(
                render_name_field(
                    "Name 2",
                    &state.second_name,
                    editing && state.focus == Focus::Second,
                ),
                rows[2],
            );

            match &state.result {
                Some(result) => {
                    frame.render_widget(render_result_card(result, state.show_steps), rows[3]);
                }
                None => frame.render_widget(render_placeholder(), rows[3]),
            }

            frame.render_widget(render_status(state.status.as_deref()), rows[4]);
            frame.render_widget(render_hints(state.mode), rows[5]);
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            eprintln!("Panic: {}", panic_info);
            std::process::exit(1);
        }));
    });
}
