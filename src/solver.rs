use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use crate::config::{ConfigError, SearchConfig};
use crate::frontier::{Frontier, SearchNode, VisitedSet};
use crate::puzzle::{Puzzle, PuzzleError};
use crate::solvability::is_solvable;
use crate::tile::serialize_tiles;
use crate::traits::search::{Heuristic, OrderingPolicy, StartGenerator};

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{which} board is {found}x{found}, engine is configured for {expected}x{expected}")]
    SizeMismatch { which: &'static str, expected: usize, found: usize },
    #[error("gave up after {restarts} restarts without reaching the goal")]
    RestartLimitExceeded { restarts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartReason {
    /// The start board fails the parity test against the goal.
    Unsolvable,
    /// The run used up its iteration budget.
    IterationLimit,
}

/// A board whose successors were just generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub puzzle: Puzzle,
    pub heuristic: u32,
    pub moves: u32,
    pub iteration: u32,
    /// Number of restarts that preceded the run this snapshot belongs to.
    pub attempt: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub moves: u32,
    #[serde(rename = "final_grid")]
    pub puzzle: Puzzle,
    pub restarts: u32,
    pub iterations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum Outcome {
    Found(Solution),
    NoSolution { restarts: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchEvent {
    Expanded(Snapshot),
    Restarted { reason: RestartReason, start: Puzzle },
    Finished(Outcome),
}

/// Best-first search engine. Heuristic and ordering are picked by the config.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Result<Self, SolveError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn check_size(&self, which: &'static str, puzzle: &Puzzle) -> Result<(), SolveError> {
        if puzzle.size() != self.config.size {
            return Err(SolveError::SizeMismatch {
                which,
                expected: self.config.size,
                found: puzzle.size(),
            });
        }
        Ok(())
    }

    /// Lazily walks the search. Each `next()` advances until something
    /// observable happens; the last item is always `Finished` or an error.
    pub fn search<G: StartGenerator>(
        &self,
        start: Puzzle,
        goal: Puzzle,
        generator: G,
    ) -> Result<Search<G>, SolveError> {
        self.check_size("start", &start)?;
        self.check_size("goal", &goal)?;

        let heuristic = self.config.heuristic.build(&goal);
        let ordering = self.config.ordering.build();

        debug!(
            "searching {}x{} board with {} / {}",
            self.config.size,
            self.config.size,
            heuristic.name(),
            ordering.name()
        );

        Ok(Search {
            config: self.config.clone(),
            goal,
            heuristic,
            ordering,
            generator,
            start,
            frontier: Frontier::new(),
            visited: VisitedSet::default(),
            iterations: 0,
            restarts: 0,
            phase: Phase::Initializing,
            fused: false,
        })
    }

    pub fn solve<G: StartGenerator>(
        &self,
        start: Puzzle,
        goal: Puzzle,
        generator: G,
    ) -> Result<Outcome, SolveError> {
        self.solve_with(start, goal, generator, |_| {})
    }

    /// Runs to completion, handing every event to `on_event` as it happens.
    pub fn solve_with<G, F>(
        &self,
        start: Puzzle,
        goal: Puzzle,
        generator: G,
        mut on_event: F,
    ) -> Result<Outcome, SolveError>
    where
        G: StartGenerator,
        F: FnMut(&SearchEvent),
    {
        let mut search = self.search(start, goal, generator)?;

        loop {
            let event = search.advance()?;
            on_event(&event);
            if let SearchEvent::Finished(outcome) = event {
                return Ok(outcome);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initializing,
    Running,
    // budget ran out on a pop that also expanded; restart after reporting it
    BudgetSpent,
}

/// One solve in progress. Frontier and visited set belong to the current run
/// and are rebuilt whenever the start board is replaced.
pub struct Search<G> {
    config: SearchConfig,
    goal: Puzzle,
    heuristic: Box<dyn Heuristic>,
    ordering: Box<dyn OrderingPolicy>,
    generator: G,
    start: Puzzle,
    frontier: Frontier,
    visited: VisitedSet,
    iterations: u32,
    restarts: u32,
    phase: Phase,
    fused: bool,
}

impl<G: StartGenerator> Search<G> {
    /// Start board of the current run.
    pub fn start(&self) -> &Puzzle {
        &self.start
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    fn seed(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.iterations = 0;

        let heuristic = self.heuristic.estimate(&self.start);
        let node = SearchNode::new(self.start.clone(), heuristic, 0);
        self.frontier.push(node, self.ordering.as_ref());
        self.phase = Phase::Running;
    }

    fn restart(&mut self, reason: RestartReason) -> Result<SearchEvent, SolveError> {
        if self.config.max_restarts.is_some_and(|max| self.restarts >= max) {
            return Err(SolveError::RestartLimitExceeded { restarts: self.restarts });
        }

        let start = self.generator.next_start(self.config.size)?;
        if start.size() != self.config.size {
            return Err(SolveError::SizeMismatch {
                which: "generated",
                expected: self.config.size,
                found: start.size(),
            });
        }

        self.restarts += 1;
        info!(
            "restart #{} ({:?}), new start {}",
            self.restarts,
            reason,
            serialize_tiles(start.tiles())
        );

        self.start = start.clone();
        self.phase = Phase::Initializing;

        Ok(SearchEvent::Restarted { reason, start })
    }

    fn advance(&mut self) -> Result<SearchEvent, SolveError> {
        loop {
            match self.phase {
                Phase::Initializing => {
                    if self.config.verify_solvability && !is_solvable(&self.start, &self.goal) {
                        let tiles = serialize_tiles(self.start.tiles());
                        warn!("start {} cannot reach the goal", tiles);
                        return self.restart(RestartReason::Unsolvable);
                    }
                    self.seed();
                }
                Phase::BudgetSpent => return self.restart(RestartReason::IterationLimit),
                Phase::Running => {
                    let Some(node) = self.frontier.pop() else {
                        info!("frontier exhausted after {} iterations", self.iterations);
                        let outcome = Outcome::NoSolution { restarts: self.restarts };
                        return Ok(SearchEvent::Finished(outcome));
                    };

                    if node.puzzle == self.goal {
                        info!("goal reached in {} moves", node.moves);
                        return Ok(SearchEvent::Finished(Outcome::Found(Solution {
                            moves: node.moves,
                            puzzle: node.puzzle,
                            restarts: self.restarts,
                            iterations: self.iterations,
                        })));
                    }

                    let expanded = if self.visited.insert(node.puzzle.key()) {
                        for successor in node.puzzle.successors() {
                            let heuristic = self.heuristic.estimate(&successor);
                            let child = SearchNode::new(successor, heuristic, node.moves + 1);
                            self.frontier.push(child, self.ordering.as_ref());
                        }
                        Some(node)
                    } else {
                        None
                    };

                    // counted per pop, duplicates included
                    self.iterations += 1;
                    let spent = self.iterations >= self.config.max_iterations;

                    match expanded {
                        Some(node) => {
                            debug!(
                                "expanded {} (h={}, g={}), frontier {}",
                                serialize_tiles(node.puzzle.tiles()),
                                node.heuristic,
                                node.moves,
                                self.frontier.len()
                            );
                            if spent {
                                self.phase = Phase::BudgetSpent;
                            }
                            return Ok(SearchEvent::Expanded(Snapshot {
                                puzzle: node.puzzle,
                                heuristic: node.heuristic,
                                moves: node.moves,
                                iteration: self.iterations,
                                attempt: self.restarts,
                            }));
                        }
                        None if spent => return self.restart(RestartReason::IterationLimit),
                        None => {}
                    }
                }
            }
        }
    }
}

impl<G: StartGenerator> Iterator for Search<G> {
    type Item = Result<SearchEvent, SolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }

        let event = self.advance();
        if matches!(event, Err(_) | Ok(SearchEvent::Finished(_))) {
            self.fused = true;
        }
        Some(event)
    }
}
