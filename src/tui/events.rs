//! Event sources: dedicated threads for input polling and frame pacing.
//!
//! Both actors follow the same shape: a named thread, a bounded
//! crossbeam channel toward the main loop, and an atomic shutdown flag
//! checked every iteration. The main loop multiplexes the two
//! receivers with `select!`.

use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A frame pulse sent at the configured interval.
#[derive(Debug, Clone, Copy)]
pub struct FramePulse {
    /// Frame number (monotonically increasing).
    pub frame: u64,
}

/// Events forwarded from the input thread to the main loop.
///
/// This is the small subset of terminal input the app reacts to;
/// everything else is filtered out at the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key(KeyCode),
    /// Left mouse button pressed at (column, row), 0-indexed screen
    /// coordinates.
    Click {
        /// Screen column.
        column: u16,
        /// Screen row.
        row: u16,
    },
    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// The input thread failed to read from the terminal.
    Error(String),
}

/// Ticker actor that sends a [`FramePulse`] at a fixed interval.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for frame pulses.
    pulse_rx: Receiver<FramePulse>,
}

impl TickerActor {
    /// Spawn the ticker thread with the given pulse interval.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the ticker thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Small buffer: a slow receiver drops pulses instead of queuing lag
        let (pulse_tx, pulse_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("lifewheel-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&pulse_tx, &shutdown_clone, interval);
            })
            .expect("Failed to spawn ticker thread");

        Self {
            handle: Some(handle),
            shutdown,
            pulse_rx,
        }
    }

    /// Get a reference to the pulse receiver, for use with `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<FramePulse> {
        &self.pulse_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    fn run_loop(pulse_tx: &Sender<FramePulse>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let mut frame = 0u64;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            thread::sleep(interval);

            // Non-blocking send; if the buffer is full the receiver is
            // behind and this pulse is dropped rather than queued
            let _ = pulse_tx.try_send(FramePulse { frame });
            frame += 1;
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Input actor that polls terminal events and forwards the relevant
/// ones as [`InputEvent`]s.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event
    /// before re-checking the shutdown flag.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the input thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("lifewheel-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(raw) => {
                        if let Some(input_event) = Self::convert_event(raw) {
                            if sender.send(input_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event within the timeout; loop re-checks shutdown
                }
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }

    /// Convert a crossterm event to an [`InputEvent`], dropping
    /// everything the app does not react to.
    fn convert_event(raw: Event) -> Option<InputEvent> {
        match raw {
            // Press only; release and repeat events are noise here
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Key(key.code)),

            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },

            Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),

            _ => None,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
