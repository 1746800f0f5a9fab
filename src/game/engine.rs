use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{
    action::Command,
    config::GameConfig,
    grid::{Cell, CollisionGrid},
    scheduler::{Activity, Scheduler},
    spawner::ObstacleSpawner,
    state::{CollisionType, Position, SnakeState},
    surface::{RenderSurface, TerminationSink},
};

/// Result of one movement tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Head moved to a free cell
    Moved { from: Position, to: Position },
    /// Head ran into something; the session is over
    Collided {
        at: Position,
        collision: CollisionType,
        elapsed_secs: u64,
    },
    /// Session already over, nothing happened
    Halted,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over {
        collision: CollisionType,
        elapsed_secs: u64,
    },
}

/// The game engine: owns the grid, the line and the timetable
pub struct GameEngine {
    config: GameConfig,
    grid: CollisionGrid,
    snake: SnakeState,
    spawner: ObstacleSpawner,
    scheduler: Scheduler,
    elapsed_secs: u64,
    status: GameStatus,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new session with the given configuration.
    ///
    /// The config is expected to have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a session whose bomb placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let center = Position::new(
            (config.grid_width / 2) as i32,
            (config.grid_height / 2) as i32,
        );
        let snake = SnakeState::new(
            center,
            config.initial_speed,
            config.min_speed,
            config.max_speed,
        );

        let mut scheduler = Scheduler::new();
        scheduler.reschedule(Activity::SpawnObstacle, config.spawn_period());
        scheduler.reschedule(Activity::Advance, config.advance_period(snake.speed()));
        scheduler.reschedule(Activity::CountSecond, config.clock_period());

        info!(
            width = config.grid_width,
            height = config.grid_height,
            speed = snake.speed(),
            "session started"
        );

        Self {
            grid: CollisionGrid::new(config.grid_width, config.grid_height),
            spawner: ObstacleSpawner::new(&config),
            snake,
            scheduler,
            elapsed_secs: 0,
            status: GameStatus::Running,
            rng,
            config,
        }
    }

    /// Draw the initial frame
    pub fn begin<S: RenderSurface>(&self, surface: &mut S) {
        surface.draw_border();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &CollisionGrid {
        &self.grid
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    /// Earliest time (since session start) at which something is due
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_due().map(|(_, at)| at)
    }

    /// Apply a player command. Returns whether it changed anything.
    pub fn handle_command(&mut self, command: Command) -> bool {
        if self.is_over() {
            return false;
        }

        match command {
            Command::Turn(direction) => {
                let accepted = self.snake.turn(direction);
                if accepted {
                    debug!("{}", direction.label());
                }
                accepted
            }
            Command::SpeedUp => {
                let changed = self.snake.speed_up();
                if changed {
                    debug!(speed = self.snake.speed(), "SPEED UP");
                }
                changed
            }
            Command::SpeedDown => {
                let changed = self.snake.speed_down();
                if changed {
                    debug!(speed = self.snake.speed(), "SPEED DOWN");
                }
                changed
            }
        }
    }

    /// Fire every activity due at or before `now`, earliest first.
    /// Returns how many firings ran.
    pub fn run_until<S: RenderSurface, T: TerminationSink>(
        &mut self,
        now: Duration,
        surface: &mut S,
        sink: &mut T,
    ) -> usize {
        let mut fired = 0;

        while let Some((activity, due)) = self.scheduler.next_due() {
            if due > now {
                break;
            }
            fired += 1;

            match activity {
                Activity::SpawnObstacle => {
                    self.spawn_obstacle(surface);
                    self.scheduler
                        .reschedule(activity, due + self.config.spawn_period());
                }
                Activity::Advance => {
                    if let AdvanceOutcome::Moved { .. } = self.advance(surface, sink) {
                        // speed may have changed since the last tick
                        let period = self.config.advance_period(self.snake.speed());
                        self.scheduler.reschedule(activity, due + period);
                    }
                }
                Activity::CountSecond => {
                    self.tick_clock();
                    self.scheduler
                        .reschedule(activity, due + self.config.clock_period());
                }
            }
        }

        fired
    }

    /// One movement tick: step the head, or end the session on a collision.
    pub fn advance<S: RenderSurface, T: TerminationSink>(
        &mut self,
        surface: &mut S,
        sink: &mut T,
    ) -> AdvanceOutcome {
        if self.is_over() {
            return AdvanceOutcome::Halted;
        }

        let from = self.snake.head;
        let to = self.snake.candidate();

        let collision = match self.grid.cell(to) {
            None => Some(CollisionType::Wall),
            Some(Cell::Line) => Some(CollisionType::Line),
            Some(Cell::Bomb) => Some(CollisionType::Bomb),
            Some(Cell::Empty) => None,
        };

        if let Some(collision) = collision {
            self.terminate(collision, sink);
            return AdvanceOutcome::Collided {
                at: to,
                collision,
                elapsed_secs: self.elapsed_secs,
            };
        }

        self.snake.head = to;
        self.grid.mark_point(to, Cell::Line);
        surface.draw_line_segment(from, to);

        AdvanceOutcome::Moved { from, to }
    }

    /// One spawner cycle. Does nothing once the session is over.
    pub fn spawn_obstacle<S: RenderSurface>(&mut self, surface: &mut S) -> Option<Position> {
        if self.is_over() {
            return None;
        }
        self.spawner.spawn(&mut self.grid, &mut self.rng, surface)
    }

    /// One second of play time. Does nothing once the session is over.
    pub fn tick_clock(&mut self) {
        if !self.is_over() {
            self.elapsed_secs += 1;
        }
    }

    fn terminate<T: TerminationSink>(&mut self, collision: CollisionType, sink: &mut T) {
        self.status = GameStatus::Over {
            collision,
            elapsed_secs: self.elapsed_secs,
        };
        self.scheduler.cancel_all();

        info!(
            ?collision,
            elapsed_secs = self.elapsed_secs,
            "COLLISION - game over"
        );
        sink.notify_game_over(self.elapsed_secs);
    }
}
