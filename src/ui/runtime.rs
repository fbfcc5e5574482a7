use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use super::App;
use super::outcome::BrowseOutcome;
use crate::store::RecordSource;

/// Construct an [`App`] for `source` and run it to completion.
pub fn run(source: Arc<dyn RecordSource>) -> Result<BrowseOutcome> {
    let mut app = App::with_source(source);
    app.run()
}

impl App {
    /// Start the initial fetch and pump the terminal event loop until the
    /// user exits with a result.
    ///
    /// Any fetch still in flight when the loop exits is abandoned and its
    /// result dropped.
    pub fn run(&mut self) -> Result<BrowseOutcome> {
        let mut terminal = ratatui::init();

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(Duration::from_millis(50))? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let result = terminal
            .clear()
            .map_err(anyhow::Error::from)
            .and_then(|()| {
                self.start_fetch();
                self.event_loop(&mut terminal, &event_rx)
            });

        // Every exit path restores the terminal.
        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        if let Ok(outcome) = &result {
            info!(accepted = outcome.accepted, query = %outcome.query, "session finished");
        }
        result
    }

    /// Draw and dispatch queued input until a key produces an outcome.
    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mpsc::Receiver<Event>,
    ) -> Result<BrowseOutcome> {
        let mut pending_events = VecDeque::new();

        loop {
            self.pump_fetch();
            if self.is_loading() {
                self.throbber_state.calc_next();
            }

            loop {
                match events.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        return Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            terminal.draw(|frame| self.draw(frame))?;

            while let Some(event) = pending_events.pop_front() {
                if let Event::Key(key) = event
                    && key.kind == KeyEventKind::Press
                    && let Some(outcome) = self.handle_key(key)?
                {
                    return Ok(outcome);
                }
            }

            thread::sleep(Duration::from_millis(16));
        }
    }
}
