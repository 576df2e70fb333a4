use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{config::Config, tui},
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the runtime from terminal events and draws when asked to
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    renderer: Renderer,
    // Set by Cmd::RequestRender, consumed by the next Render event
    render_requested: bool,
}

impl AppRunner {
    pub fn new(config: Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        Self::new_with_state(AppState::new_with_config(config), tui)
    }

    pub fn new_with_state(state: AppState, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        Self {
            runtime: Runtime::new(state),
            tui,
            renderer: Renderer::new(),
            render_requested: false,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Run until quit is requested or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        let result = self.event_loop().await;
        self.tui.lock().await.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        // Seed the viewport so mouse hit-testing works before the first resize
        let size = self.tui.lock().await.size()?;
        self.runtime.send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.process().await?;

        while !self.runtime.state().system.should_quit {
            let event = {
                let mut guard = self.tui.lock().await;
                guard.next().await
            };
            let Some(event) = event else {
                log::info!("Event source closed");
                break;
            };
            self.handle_event(event).await?;
        }
        Ok(())
    }

    async fn handle_event(&mut self, event: tui::Event) -> Result<()> {
        match event {
            tui::Event::Init => self.render_requested = true,
            tui::Event::Render => {
                if self.render_requested {
                    self.render().await?;
                }
            }
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("Failed to read terminal event".to_string())),
        }
        self.process().await
    }

    /// Drain the runtime, executing commands until no new messages appear
    async fn process(&mut self) -> Result<()> {
        loop {
            let commands = self.runtime.process_all_messages();
            for cmd in commands {
                self.execute(cmd).await?;
            }
            if !self.runtime.has_pending() {
                return Ok(());
            }
        }
    }

    async fn execute(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::RequestRender => self.render_requested = true,
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                self.render().await?;
            }
            Cmd::Tui(TuiCommand::Suspend) => {
                {
                    let mut guard = self.tui.lock().await;
                    guard.suspend()?;
                    // Execution continues here once the shell resumes the process
                    guard.resume()?;
                }
                self.runtime.send_raw_msg(RawMsg::Resume);
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await?;
        self.render_requested = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::TestTui;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn runner_with(events: Vec<tui::Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::with_events(80, 24, events)?));
        let tui = Arc::clone(&test_tui) as Arc<Mutex<dyn tui::TuiLike + Send>>;
        Ok((AppRunner::new(Config::defaults()?, tui), test_tui))
    }

    #[tokio::test]
    async fn test_initial_resize_draws_once() -> Result<()> {
        let (mut runner, test_tui) = runner_with(vec![])?;
        runner.run().await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(!guard.is_entered());
        assert_eq!(runner.state().system.viewport, Rect::new(0, 0, 80, 24));
        Ok(())
    }

    #[tokio::test]
    async fn test_render_only_when_requested() -> Result<()> {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::empty());
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::empty());
        let (mut runner, test_tui) = runner_with(vec![
            tui::Event::Render,
            tui::Event::Key(up),
            tui::Event::Render,
            tui::Event::Render,
            tui::Event::Key(down),
            tui::Event::Key(down),
            tui::Event::Render,
        ])?;
        runner.run().await?;

        // Initial draw, then one draw after the change. The second down is
        // saturated, but the first one already requested a render.
        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 3);
        assert_eq!(runner.state().televisions[0].channel(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_quit_stops_loop_before_remaining_events() -> Result<()> {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::empty());
        let (mut runner, _) = runner_with(vec![
            tui::Event::Key(up),
            tui::Event::Quit,
            tui::Event::Key(up),
        ])?;
        runner.run().await?;

        assert!(runner.state().system.should_quit);
        assert_eq!(runner.state().televisions[0].channel(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_round_trip() -> Result<()> {
        let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        let (mut runner, test_tui) =
            runner_with(vec![tui::Event::Key(ctrl_z), tui::Event::Render])?;
        runner.run().await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.suspend_count(), 1);
        assert_eq!(guard.draw_count(), 2);
        assert!(guard.rows()[23].contains("[Info] Resumed"));
        assert!(!runner.state().system.should_suspend);
        assert!(!runner.state().system.status_bar.is_error());
        Ok(())
    }

    #[tokio::test]
    async fn test_terminal_error_shows_in_status_bar() -> Result<()> {
        let (mut runner, test_tui) = runner_with(vec![tui::Event::Error, tui::Event::Render])?;
        runner.run().await?;

        assert!(test_tui.lock().await.rows()[23].contains("Failed to read terminal event"));
        Ok(())
    }
}
