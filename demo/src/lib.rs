//! Interactive grid editor that animates an A* search.
//!
//! Place a start, a goal and walls, press Enter, and watch the search
//! reveal cells one tick at a time before the shortest route is traced.
//! Equal-length alternates can then be cycled with Tab.

use std::time::Duration;

use pathstep_core::{
    Canvas, Color, Glyph, GridError, Key, MouseAction, Msg, PATH_TICK, Pos, TickSchedule,
    app::{Effect, Model},
};
use pathstep_search::{Session, Step};
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

/// Screen columns per grid cell.
pub const CELL_WIDTH: i32 = 2;

/// Screen rows used below the grid for status text.
pub const STATUS_ROWS: i32 = 4;

/// Wall density used by `r` when none was given on the command line.
pub const DEFAULT_WALL_PERCENT: u32 = 25;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Start-up settings for a [`Visualizer`].
#[derive(Clone, Debug)]
pub struct Config {
    pub rows: i32,
    pub cols: i32,
    /// Speed multiplier applied to both tick delays.
    pub speed: u32,
    /// Delay between search expansions at speed 1.
    pub delay: Duration,
    /// Percentage of cells walled at start-up, if any.
    pub walls: Option<u32>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            speed: 1,
            delay: pathstep_core::SEARCH_TICK,
            walls: None,
            seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

struct Palette {
    bg: Color,
    open: Color,
    wall: Color,
    visited: Color,
    frontier: Color,
    route: Color,
    start: Color,
    goal: Color,
    text: Color,
    alert: Color,
}

const LIGHT: Palette = Palette {
    bg: Color::from_rgb(235, 235, 228),
    open: Color::from_rgb(250, 250, 245),
    wall: Color::from_rgb(60, 60, 70),
    visited: Color::from_rgb(170, 200, 235),
    frontier: Color::from_rgb(140, 220, 160),
    route: Color::from_rgb(245, 200, 60),
    start: Color::from_rgb(40, 160, 70),
    goal: Color::from_rgb(200, 50, 50),
    text: Color::from_rgb(30, 30, 40),
    alert: Color::from_rgb(180, 40, 40),
};

const DARK: Palette = Palette {
    bg: Color::from_rgb(20, 20, 30),
    open: Color::from_rgb(40, 40, 52),
    wall: Color::from_rgb(120, 120, 140),
    visited: Color::from_rgb(40, 70, 120),
    frontier: Color::from_rgb(40, 120, 60),
    route: Color::from_rgb(230, 180, 40),
    start: Color::from_rgb(80, 200, 80),
    goal: Color::from_rgb(220, 60, 60),
    text: Color::from_rgb(200, 200, 200),
    alert: Color::from_rgb(255, 110, 110),
};

impl Theme {
    fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// ---------------------------------------------------------------------------
// Editing mode / animation phase
// ---------------------------------------------------------------------------

/// What a click or Space does to the cell under it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Start,
    Goal,
    Wall,
}

impl Mode {
    fn label(self) -> &'static str {
        match self {
            Mode::Start => "start",
            Mode::Goal => "goal",
            Mode::Wall => "wall",
        }
    }
}

/// Where the animation is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Editing; nothing scheduled.
    Idle,
    /// One expansion per search tick.
    Searching,
    /// The route is being traced; `shown` cells are visible.
    Drawing { shown: usize },
    /// The run ended, with or without a route.
    Done,
}

const HELP: &str = "s/g/w mode  space/click apply  enter solve  tab route  c/x clear";
const HELP_MORE: &str = "t theme  +/- speed  [/] size  r walls  q quit";

// ---------------------------------------------------------------------------
// Visualizer
// ---------------------------------------------------------------------------

/// The demo's [`Model`].
pub struct Visualizer {
    session: Session,
    mode: Mode,
    cursor: Pos,
    phase: Phase,
    schedule: TickSchedule,
    theme: Theme,
    message: String,
    wall_percent: u32,
    rng: StdRng,
    /// Wall state being painted by a mouse drag.
    painting: Option<bool>,
}

impl Visualizer {
    pub fn new(config: Config) -> Result<Self, GridError> {
        let session = Session::new(config.rows, config.cols)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut vis = Self {
            session,
            mode: Mode::Wall,
            cursor: Pos::ZERO,
            phase: Phase::Idle,
            schedule: TickSchedule::new(config.delay, config.speed),
            theme: Theme::Dark,
            message: String::from("place a start (s) and a goal (g), then press enter"),
            wall_percent: config.walls.unwrap_or(DEFAULT_WALL_PERCENT).min(100),
            rng,
            painting: None,
        };
        if config.walls.is_some() {
            vis.scatter_walls();
        }
        Ok(vis)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn schedule(&self) -> TickSchedule {
        self.schedule
    }

    /// The last status or error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Screen size needed to show the whole grid and the status lines.
    pub fn screen_size(&self) -> (i32, i32) {
        let grid = self.session.grid();
        let width = (grid.cols() * CELL_WIDTH).max(HELP.len() as i32);
        (grid.rows() + STATUS_ROWS, width)
    }

    /// Progress summary: cells visited so far, then, once a route is
    /// found, the closed count (start and goal included) with route details.
    pub fn info_line(&self) -> String {
        match self.session.solution() {
            Some(sol) => {
                let routes = sol.paths();
                format!(
                    "visited: {}, path length: {}, route {}/{}",
                    sol.closed(),
                    sol.path().len(),
                    routes.current_index() + 1,
                    routes.len()
                )
            }
            None => format!("visited: {}", self.session.visited().len()),
        }
    }

    // -- input ------------------------------------------------------------

    fn on_key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Escape | Key::Char('q') => return Some(Effect::End),
            Key::Char('s') => self.set_mode(Mode::Start),
            Key::Char('g') => self.set_mode(Mode::Goal),
            Key::Char('w') => self.set_mode(Mode::Wall),
            Key::ArrowUp => self.move_cursor(-1, 0),
            Key::ArrowDown => self.move_cursor(1, 0),
            Key::ArrowLeft => self.move_cursor(0, -1),
            Key::ArrowRight => self.move_cursor(0, 1),
            Key::Space => self.apply_mode(self.cursor),
            Key::Enter => self.solve(),
            Key::Tab => self.cycle_route(true),
            Key::BackTab => self.cycle_route(false),
            Key::Char('c') => {
                self.session.clear_solution();
                self.phase = Phase::Idle;
                self.message = String::from("solution cleared");
            }
            Key::Char('x') => {
                self.session.clear_all();
                self.phase = Phase::Idle;
                self.message = String::from("grid cleared");
            }
            Key::Char('t') => self.theme = self.theme.toggled(),
            Key::Char('+') | Key::Char('=') => self.set_schedule(self.schedule.faster()),
            Key::Char('-') => self.set_schedule(self.schedule.slower()),
            Key::Char(']') => self.resize(1),
            Key::Char('[') => self.resize(-1),
            Key::Char('r') => self.scatter_walls(),
            _ => {}
        }
        None
    }

    fn on_mouse(&mut self, action: MouseAction, pos: Pos) {
        let cell = self.cell_at(pos);
        match action {
            MouseAction::Main => {
                let Some(cell) = cell else {
                    return;
                };
                self.cursor = cell;
                if self.mode == Mode::Wall {
                    match self.session.toggle_blocked(cell) {
                        Some(blocked) => {
                            self.painting = Some(blocked);
                            self.edited();
                        }
                        None => self.reject(format!("cannot wall endpoint {cell}")),
                    }
                } else {
                    self.apply_mode(cell);
                }
            }
            MouseAction::Secondary => {
                if let Some(cell) = cell {
                    if self.session.paint_blocked(cell, false) {
                        self.edited();
                    }
                }
            }
            MouseAction::Move => {
                if let (Some(blocked), Some(cell)) = (self.painting, cell) {
                    if self.session.paint_blocked(cell, blocked) {
                        self.edited();
                    }
                }
            }
            MouseAction::Release => self.painting = None,
        }
    }

    fn on_tick(&mut self) {
        match self.phase {
            Phase::Searching => match self.session.step() {
                Ok(Step::Seeded | Step::Visited(_)) => {}
                Ok(Step::Found { path, closed }) => {
                    log::debug!("route of {} cells after closing {closed}", path.len());
                    self.phase = Phase::Drawing { shown: 0 };
                    self.message = String::from("path found");
                }
                Ok(Step::Exhausted) => {
                    self.phase = Phase::Done;
                    self.message = String::from("no path between start and goal");
                }
                Err(e) => {
                    self.phase = Phase::Idle;
                    self.reject(e.to_string());
                }
            },
            Phase::Drawing { shown } => {
                let len = self.session.solution().map_or(0, |s| s.path().len());
                let shown = shown + 1;
                self.phase = if shown >= len {
                    Phase::Done
                } else {
                    Phase::Drawing { shown }
                };
            }
            Phase::Idle | Phase::Done => {}
        }
    }

    // -- actions ----------------------------------------------------------

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.message = format!("mode: {}", mode.label());
    }

    fn move_cursor(&mut self, drow: i32, dcol: i32) {
        let next = self.cursor.shift(drow, dcol);
        if self.session.grid().contains(next) {
            self.cursor = next;
        }
    }

    fn apply_mode(&mut self, cell: Pos) {
        let res = match self.mode {
            Mode::Start => self.session.set_start(cell),
            Mode::Goal => self.session.set_goal(cell),
            Mode::Wall => {
                if self.session.toggle_blocked(cell).is_none() {
                    self.reject(format!("cannot wall endpoint {cell}"));
                    return;
                }
                Ok(())
            }
        };
        match res {
            Ok(()) => self.edited(),
            Err(e) => self.reject(e.to_string()),
        }
    }

    fn solve(&mut self) {
        match self.session.begin_search() {
            Ok(()) => {
                self.phase = Phase::Searching;
                self.message = String::from("searching...");
            }
            Err(e) => {
                self.phase = Phase::Idle;
                self.reject(e.to_string());
            }
        }
    }

    fn cycle_route(&mut self, forward: bool) {
        let Some(sol) = self.session.solution_mut() else {
            self.message = String::from("no routes to cycle");
            return;
        };
        let routes = sol.paths_mut();
        if forward {
            routes.next();
        } else {
            routes.prev();
        }
        self.phase = Phase::Done;
    }

    fn set_schedule(&mut self, schedule: TickSchedule) {
        self.schedule = schedule;
        self.message = format!("speed x{}", schedule.speed());
    }

    fn resize(&mut self, delta: i32) {
        let grid = self.session.grid();
        let (rows, cols) = (grid.rows() + delta, grid.cols() + delta);
        match self.session.configure(rows, cols) {
            Ok(_) => {
                self.cursor = Pos::ZERO;
                self.phase = Phase::Idle;
                self.message = format!("grid is {rows}x{cols}");
            }
            Err(e) => self.reject(e.to_string()),
        }
    }

    /// Re-roll every non-endpoint cell as a wall with the configured odds.
    fn scatter_walls(&mut self) {
        let odds = f64::from(self.wall_percent) / 100.0;
        let cells: Vec<Pos> = self.session.grid().bounds().iter().collect();
        let mut changed = false;
        for p in cells {
            let roll: f64 = StandardUniform.sample(&mut self.rng);
            changed |= self.session.paint_blocked(p, roll < odds);
        }
        if changed {
            self.edited();
        }
        self.message = format!("walls scattered ({}%)", self.wall_percent);
    }

    /// An accepted edit dropped any run and solution.
    fn edited(&mut self) {
        self.phase = Phase::Idle;
        self.message.clear();
    }

    fn reject(&mut self, msg: String) {
        log::warn!("{msg}");
        self.message = msg;
    }

    fn cell_at(&self, screen: Pos) -> Option<Pos> {
        if screen.col < 0 {
            return None;
        }
        let cell = Pos::new(screen.row, screen.col / CELL_WIDTH);
        self.session.grid().contains(cell).then_some(cell)
    }

    // -- drawing ----------------------------------------------------------

    /// Background colour of every grid cell, row-major.
    fn cell_colors(&self) -> Vec<Color> {
        let pal = self.theme.palette();
        let grid = self.session.grid();
        let bounds = grid.bounds();
        let mut colors: Vec<Color> = grid
            .iter()
            .map(|(_, blocked)| if blocked { pal.wall } else { pal.open })
            .collect();

        let mut paint = |p: Pos, c: Color| {
            if let Some(i) = bounds.index(p) {
                colors[i] = c;
            }
        };
        for &p in self.session.visited() {
            paint(p, pal.visited);
        }
        if let Some(search) = self.session.search() {
            for p in search.frontier() {
                paint(p, pal.frontier);
            }
        }
        if let Some(sol) = self.session.solution() {
            let shown = match self.phase {
                Phase::Drawing { shown } => shown,
                _ => sol.path().len(),
            };
            for &p in sol.path().cells().iter().take(shown) {
                paint(p, pal.route);
            }
        }
        colors
    }

    fn draw_cell(&self, canvas: &mut Canvas, p: Pos, bg: Color) {
        let pal = self.theme.palette();
        let (text, glyph) = if self.session.start() == Some(p) {
            ("S ", Glyph::blank(pal.start).with_fg(pal.text).with_bold(true))
        } else if self.session.goal() == Some(p) {
            ("G ", Glyph::blank(pal.goal).with_fg(pal.text).with_bold(true))
        } else {
            ("  ", Glyph::blank(bg).with_fg(pal.text))
        };
        let text = if p == self.cursor { "[]" } else { text };
        canvas.print(Pos::new(p.row, p.col * CELL_WIDTH), text, glyph);
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::KeyDown(key) => return self.on_key(key),
            Msg::Mouse { action, pos } => self.on_mouse(action, pos),
            Msg::Tick => self.on_tick(),
            Msg::Init | Msg::Screen { .. } | Msg::Quit => {}
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        let pal = self.theme.palette();
        canvas.fill(Glyph::blank(pal.bg));

        let grid = self.session.grid();
        for (p, bg) in grid.bounds().iter().zip(self.cell_colors()) {
            self.draw_cell(canvas, p, bg);
        }

        let text = Glyph::blank(pal.bg).with_fg(pal.text);
        let row = grid.rows();
        canvas.print(Pos::new(row, 0), &self.info_line(), text.with_bold(true));
        let status = format!(
            "mode: {}  speed: x{}  grid: {}x{}",
            self.mode.label(),
            self.schedule.speed(),
            grid.rows(),
            grid.cols()
        );
        let n = canvas.print(Pos::new(row + 1, 0), &status, text);
        if !self.message.is_empty() {
            let msg = format!("  {}", self.message);
            canvas.print(Pos::new(row + 1, n as i32), &msg, text.with_fg(pal.alert));
        }
        canvas.print(Pos::new(row + 2, 0), HELP, text);
        canvas.print(Pos::new(row + 3, 0), HELP_MORE, text);
    }

    fn tick_interval(&self) -> Option<Duration> {
        match self.phase {
            Phase::Searching => Some(self.schedule.interval()),
            Phase::Drawing { .. } => Some(self.schedule.with_base(PATH_TICK).interval()),
            Phase::Idle | Phase::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vis(rows: i32, cols: i32) -> Visualizer {
        Visualizer::new(Config {
            rows,
            cols,
            seed: Some(1),
            ..Config::default()
        })
        .unwrap()
    }

    fn keys(v: &mut Visualizer, keys: &[Key]) {
        for k in keys {
            assert!(v.update(Msg::key(*k)).is_none());
        }
    }

    /// A 5×5 grid with start at (0, 0) and goal at (4, 4).
    fn corners() -> Visualizer {
        let mut v = vis(5, 5);
        keys(&mut v, &[Key::Char('s'), Key::Space, Key::Char('g')]);
        keys(&mut v, &[Key::ArrowDown; 4]);
        keys(&mut v, &[Key::ArrowRight; 4]);
        keys(&mut v, &[Key::Space]);
        v
    }

    fn run_out(v: &mut Visualizer) -> usize {
        let mut ticks = 0;
        while v.tick_interval().is_some() {
            v.update(Msg::Tick);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn solve_animates_search_then_route() {
        let mut v = corners();
        assert_eq!(v.session().start(), Some(Pos::new(0, 0)));
        assert_eq!(v.session().goal(), Some(Pos::new(4, 4)));
        assert_eq!(v.tick_interval(), None);

        keys(&mut v, &[Key::Enter]);
        assert_eq!(v.phase(), Phase::Searching);
        assert_eq!(v.tick_interval(), Some(pathstep_core::SEARCH_TICK));

        for _ in 0..5 {
            v.update(Msg::Tick);
        }
        assert_eq!(v.info_line(), "visited: 4");
        for _ in 5..25 {
            v.update(Msg::Tick);
        }
        assert_eq!(v.phase(), Phase::Drawing { shown: 0 });
        assert_eq!(v.tick_interval(), Some(PATH_TICK));

        assert_eq!(run_out(&mut v), 9);
        assert_eq!(v.phase(), Phase::Done);
        assert_eq!(v.info_line(), "visited: 25, path length: 9, route 1/8");
    }

    #[test]
    fn tab_cycles_routes() {
        let mut v = corners();
        keys(&mut v, &[Key::Enter]);
        run_out(&mut v);
        keys(&mut v, &[Key::Tab, Key::Tab]);
        assert!(v.info_line().ends_with("route 3/8"));
        keys(&mut v, &[Key::BackTab, Key::BackTab, Key::BackTab]);
        assert!(v.info_line().ends_with("route 8/8"));
    }

    #[test]
    fn unreachable_goal_ends_without_route() {
        let mut v = corners();
        keys(&mut v, &[Key::Char('w')]);
        for col in 0..5 {
            v.update(Msg::mouse(MouseAction::Main, Pos::new(2, col * CELL_WIDTH)));
            v.update(Msg::mouse(MouseAction::Release, Pos::new(2, col * CELL_WIDTH)));
        }
        assert_eq!(v.session().grid().blocked_count(), 5);

        keys(&mut v, &[Key::Enter]);
        run_out(&mut v);
        assert_eq!(v.phase(), Phase::Done);
        assert!(v.session().solution().is_none());
        assert_eq!(v.info_line(), "visited: 9");
    }

    #[test]
    fn wall_on_route_clears_solution() {
        let mut v = corners();
        keys(&mut v, &[Key::Enter]);
        run_out(&mut v);
        let on_route = v.session().solution().unwrap().path().interior()[0];

        keys(&mut v, &[Key::Char('w')]);
        v.update(Msg::mouse(
            MouseAction::Main,
            Pos::new(on_route.row, on_route.col * CELL_WIDTH + 1),
        ));
        assert_eq!(v.session().grid().is_blocked(on_route), Some(true));
        assert!(v.session().solution().is_none());
        assert_eq!(v.phase(), Phase::Idle);
        assert_eq!(v.tick_interval(), None);
    }

    #[test]
    fn edit_mid_search_cancels_pending_tick() {
        let mut v = corners();
        keys(&mut v, &[Key::Enter]);
        v.update(Msg::Tick);
        v.update(Msg::Tick);
        keys(&mut v, &[Key::Char('w'), Key::ArrowUp, Key::Space]);
        assert_eq!(v.phase(), Phase::Idle);
        assert_eq!(v.tick_interval(), None);
        assert!(!v.session().is_running());
    }

    #[test]
    fn drag_paints_walls() {
        let mut v = vis(5, 5);
        v.update(Msg::mouse(MouseAction::Main, Pos::new(1, 0)));
        for col in 1..4 {
            v.update(Msg::mouse(MouseAction::Move, Pos::new(1, col * CELL_WIDTH)));
        }
        v.update(Msg::mouse(MouseAction::Release, Pos::new(1, 8)));
        v.update(Msg::mouse(MouseAction::Move, Pos::new(2, 0)));
        assert_eq!(v.session().grid().blocked_count(), 4);

        v.update(Msg::mouse(MouseAction::Secondary, Pos::new(1, 2)));
        assert_eq!(v.session().grid().blocked_count(), 3);
    }

    #[test]
    fn endpoint_conflicts_are_reported() {
        let mut v = corners();
        keys(&mut v, &[Key::Char('s'), Key::Space]);
        assert_eq!(v.session().start(), Some(Pos::new(0, 0)));
        assert!(!v.message().is_empty());

        keys(&mut v, &[Key::Char('w'), Key::Space]);
        assert_eq!(v.session().grid().is_blocked(Pos::new(4, 4)), Some(false));
    }

    #[test]
    fn solve_without_endpoints_is_rejected() {
        let mut v = vis(5, 5);
        keys(&mut v, &[Key::Enter]);
        assert_eq!(v.phase(), Phase::Idle);
        assert_eq!(v.tick_interval(), None);
        assert!(!v.message().is_empty());
    }

    #[test]
    fn resize_is_validated() {
        let mut v = corners();
        keys(&mut v, &[Key::Char('[')]);
        assert_eq!(v.session().grid().rows(), 5);
        assert_eq!(v.session().start(), Some(Pos::new(0, 0)));

        keys(&mut v, &[Key::Char(']')]);
        assert_eq!(v.session().grid().rows(), 6);
        assert_eq!(v.session().start(), None);
        assert_eq!(v.cursor(), Pos::ZERO);
    }

    #[test]
    fn speed_changes_tick_interval() {
        let mut v = corners();
        keys(&mut v, &[Key::Char('+'), Key::Char('+'), Key::Enter]);
        assert_eq!(v.schedule().speed(), 4);
        assert_eq!(v.tick_interval(), Some(pathstep_core::SEARCH_TICK / 4));
        keys(&mut v, &[Key::Char('-')]);
        assert_eq!(v.tick_interval(), Some(pathstep_core::SEARCH_TICK / 2));
    }

    #[test]
    fn seeded_walls_are_reproducible_and_spare_endpoints() {
        let config = Config {
            rows: 12,
            cols: 12,
            walls: Some(40),
            seed: Some(99),
            ..Config::default()
        };
        let a = Visualizer::new(config.clone()).unwrap();
        let b = Visualizer::new(config).unwrap();
        assert_eq!(a.session().grid(), b.session().grid());
        assert!(a.session().grid().blocked_count() > 0);

        let mut v = corners();
        keys(&mut v, &[Key::Char('r')]);
        assert_eq!(v.session().grid().is_blocked(Pos::new(0, 0)), Some(false));
        assert_eq!(v.session().grid().is_blocked(Pos::new(4, 4)), Some(false));
    }

    #[test]
    fn clear_keys() {
        let mut v = corners();
        keys(&mut v, &[Key::Char('w'), Key::ArrowUp, Key::Space, Key::Enter]);
        run_out(&mut v);
        keys(&mut v, &[Key::Char('c')]);
        assert!(v.session().solution().is_none());
        assert_eq!(v.session().grid().blocked_count(), 1);

        keys(&mut v, &[Key::Char('x')]);
        assert_eq!(v.session().grid().blocked_count(), 0);
        assert_eq!(v.session().start(), None);
    }

    #[test]
    fn quit_keys_end_the_app() {
        let mut v = vis(5, 5);
        assert!(matches!(v.update(Msg::key(Key::Char('q'))), Some(Effect::End)));
        assert!(matches!(v.update(Msg::key(Key::Escape)), Some(Effect::End)));
    }

    #[test]
    fn draw_marks_endpoints_and_info() {
        let mut v = corners();
        keys(&mut v, &[Key::Char('t')]);
        assert_eq!(v.theme(), Theme::Light);
        let (rows, cols) = v.screen_size();
        let mut canvas = Canvas::new(rows, cols);
        v.draw(&mut canvas);
        assert_eq!(canvas.at(Pos::new(0, 0)).ch, 'S');
        assert_eq!(canvas.at(Pos::new(4, 8)).ch, '[');
        assert_eq!(canvas.at(Pos::new(5, 0)).ch, 'v');
    }
}
