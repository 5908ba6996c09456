//! The application loop: [`Model`], [`Driver`], [`Effect`], [`App`].
//!
//! The loop is single-threaded. Besides input it delivers [`Msg::Tick`]
//! whenever the interval the model asks for has elapsed; a model that
//! returns `None` from [`Model::tick_interval`] has no tick pending, which is
//! how restarting or clearing a run cancels the next step.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::canvas::{compute_frame, Canvas, Frame};
use crate::messages::Msg;

/// Longest time the loop blocks in [`Driver::poll_msgs`] when no tick is due.
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Context (stop flag)
// ---------------------------------------------------------------------------

/// Stop flag shared between the loop and the driver.
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the loop has been asked to stop.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Ask the loop to stop.
    #[inline]
    pub fn cancel(&mut self) {
        self.done = true;
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Debug)]
pub enum Effect {
    /// Feed another message back into the model before drawing.
    Msg(Msg),
    /// Stop the application loop.
    End,
}

// ---------------------------------------------------------------------------
// Model / Driver
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `canvas`.
    fn draw(&self, canvas: &mut Canvas);

    /// Delay until the next [`Msg::Tick`], or `None` when nothing is
    /// scheduled.
    fn tick_interval(&self) -> Option<Duration> {
        None
    }
}

/// Back-end driver (terminal, test harness, ...).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Wait at most `timeout` for input and send the resulting messages
    /// through `tx`. Should return early once `ctx.is_done()`.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        timeout: Duration,
        tx: &Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Restore the back-end.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub rows: i32,
    pub cols: i32,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    prev: Canvas,
    curr: Canvas,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            prev: Canvas::new(0, 0),
            curr: Canvas::new(config.rows, config.cols),
        }
    }

    /// The model, e.g. to inspect it after [`run`](Self::run) returns.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the update loop until the model returns [`Effect::End`] or a
    /// [`Msg::Quit`] is received.
    ///
    /// 1. Initialises the driver and sends `Msg::Init`.
    /// 2. Delivers `Msg::Tick` whenever the model's interval elapsed.
    /// 3. Polls input for the remaining time, then update → draw → diff →
    ///    flush. Input is polled on every pass, without blocking right after
    ///    a tick.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;

        let mut ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let res = self.event_loop(&mut ctx, &tx, &rx);
        self.driver.close();
        res
    }

    fn event_loop(
        &mut self,
        ctx: &mut Context,
        tx: &Sender<Msg>,
        rx: &Receiver<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut last_tick = Instant::now();
        self.process_pending(rx, ctx)?;

        while !ctx.is_done() {
            let timeout = match self.model.tick_interval() {
                Some(interval) => {
                    let elapsed = last_tick.elapsed();
                    if elapsed >= interval {
                        last_tick = Instant::now();
                        tx.send(Msg::Tick).ok();
                        self.process_pending(rx, ctx)?;
                        if ctx.is_done() {
                            break;
                        }
                        Duration::ZERO
                    } else {
                        (interval - elapsed).min(POLL_INTERVAL)
                    }
                }
                None => {
                    // Nothing pending: the next interval counts from now.
                    last_tick = Instant::now();
                    POLL_INTERVAL
                }
            };

            if let Err(e) = self.driver.poll_msgs(ctx, timeout, tx) {
                ctx.cancel();
                return Err(e);
            }
            self.process_pending(rx, ctx)?;
        }
        Ok(())
    }

    /// Drain queued messages, update the model, draw, diff, and flush.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &mut Context,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut needs_draw = false;
        let mut queue: Vec<Msg> = rx.try_iter().collect();

        while !queue.is_empty() {
            let msg = queue.remove(0);
            if let Msg::Screen { rows, cols } = msg {
                self.curr = Canvas::new(rows, cols);
            }
            if msg == Msg::Quit {
                ctx.cancel();
                return Ok(());
            }
            match self.model.update(msg) {
                Some(Effect::End) => {
                    ctx.cancel();
                    return Ok(());
                }
                Some(Effect::Msg(follow)) => queue.insert(0, follow),
                None => {}
            }
            needs_draw = true;
        }

        if needs_draw {
            self.model.draw(&mut self.curr);
            let frame = compute_frame(&self.prev, &self.curr);
            if !frame.glyphs.is_empty() {
                self.driver.flush(frame)?;
            }
            if self.prev.bounds() == self.curr.bounds() {
                self.prev.copy_from(&self.curr);
            } else {
                self.prev = self.curr.clone();
            }
        }
        Ok(())
    }
}
