use laby_core::Maze;

use crate::distance::Distance;
use crate::error::SearchError;
use crate::moves::Movement;
use crate::path::Path;
use crate::stepper::AstarStepper;
use crate::traits::Heuristic;

/// Search settings selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Explicit heuristic. `None` picks [`Movement::default_heuristic`].
    pub heuristic: Option<Distance>,
    pub movement: Movement,
}

impl SearchConfig {
    /// The heuristic a search built from this config will use.
    pub fn resolved_heuristic(&self) -> Distance {
        self.heuristic.unwrap_or_else(|| self.movement.default_heuristic())
    }
}

/// One-shot best-first search, generic over the heuristic.
///
/// With an admissible heuristic this is A* and returns an optimal path;
/// with [`Distance::Zero`] it is Dijkstra.
#[derive(Debug, Clone)]
pub struct PathSearch<H = Distance> {
    heuristic: H,
    movement: Movement,
}

impl Default for PathSearch<Distance> {
    fn default() -> Self {
        Self::new(Distance::Manhattan)
    }
}

impl PathSearch<Distance> {
    /// Search for a config, filling in the movement's default heuristic
    /// when none is set.
    pub fn from_config(cfg: &SearchConfig) -> Self {
        Self::new(cfg.resolved_heuristic()).with_movement(cfg.movement)
    }

    /// Zero heuristic: plain Dijkstra.
    pub fn dijkstra() -> Self {
        Self::new(Distance::Zero)
    }
}

impl<H: Heuristic> PathSearch<H> {
    /// Orthogonal search with the given heuristic.
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            movement: Movement::Orthogonal,
        }
    }

    /// Replace the movement model.
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// The heuristic in use.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// The movement model in use.
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// A stepper for `maze`, for drivers that advance the search one
    /// expansion at a time.
    pub fn stepper<'a, M: Maze + ?Sized>(
        &'a self,
        maze: &'a M,
    ) -> Result<AstarStepper<'a, M, H>, SearchError> {
        AstarStepper::new(maze, &self.heuristic, self.movement)
    }

    /// Find a path from the maze's start to its exit.
    ///
    /// `Ok(None)` means the exit cannot be reached. `Err` is reserved for a
    /// maze whose endpoints are not passable.
    pub fn find_path<M: Maze + ?Sized>(&self, maze: &M) -> Result<Option<Path>, SearchError> {
        match self.stepper(maze)?.run() {
            Ok(path) => Ok(Some(path)),
            Err(SearchError::Unsolvable { expansions }) => {
                log::debug!("no path after {expansions} expansions");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// A* with `heuristic` and orthogonal moves.
pub fn astar<M, H>(maze: &M, heuristic: H) -> Result<Option<Path>, SearchError>
where
    M: Maze + ?Sized,
    H: Heuristic,
{
    PathSearch::new(heuristic).find_path(maze)
}

/// Dijkstra with orthogonal moves: the shortest path by step count.
pub fn dijkstra<M: Maze + ?Sized>(maze: &M) -> Result<Option<Path>, SearchError> {
    PathSearch::dijkstra().find_path(maze)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use laby_core::{Cell, Grid};
    use laby_gen::MazeGen;

    use super::*;
    use crate::moves::DIAGONAL_COST;
    use crate::stepper::Step;

    const GRID1: &str = "
###############
####### #     I
#          ## #
# ## ##### ## #
# ## ## ## ## #
####    ## ## #
#    ## ##   ##
# ## ## ## # ##
# ##    ## # ##
# ## # ### # ##
# ## #   # #  #
###  ##### ## #
###        ## #
#####O#########
";

    const GRID2: &str = "
#######I##
#     # ##
## #### ##
##      ##
#### ##  #
#### ### #
#    #   #
#### # ###
###  # ###
###O######
";

    /// Exactly one shortest route, 6 steps long.
    const UNIQUE: &str = "
#####
#I  #
### #
#O  #
#####
";

    /// Breadth-first distances from the start, as an independent oracle.
    fn bfs_steps(grid: &Grid) -> Option<usize> {
        let mut dist = HashMap::from([(grid.start(), 0usize)]);
        let mut queue = VecDeque::from([grid.start()]);
        while let Some(c) = queue.pop_front() {
            let d = dist[&c];
            for n in c.neighbors_4() {
                if grid.contains(n) && !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist.get(&grid.out()).copied()
    }

    fn assert_valid(grid: &Grid, path: &Path, diagonal: bool) {
        assert_eq!(path.first(), Some(grid.start()));
        assert_eq!(path.last(), Some(grid.out()));
        for w in path.cells().windows(2) {
            let d = w[1] - w[0];
            assert!(grid.contains(w[1]));
            let (dr, dc) = (d.row.abs(), d.col.abs());
            if diagonal {
                assert!(dr <= 1 && dc <= 1 && dr + dc > 0, "bad move {} -> {}", w[0], w[1]);
            } else {
                assert_eq!(dr + dc, 1, "bad move {} -> {}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn unique_shortest_path() {
        let g = Grid::parse(UNIQUE).unwrap();
        let expected = [(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (3, 2), (3, 1)].map(Cell::from);
        for search in [PathSearch::dijkstra(), PathSearch::default()] {
            let path = search.find_path(&g).unwrap().unwrap();
            assert_eq!(path.cells(), &expected);
            assert_eq!(path.steps(), 6);
            assert_eq!(path.cost(), 6.0);
        }
    }

    #[test]
    fn unsolvable_is_reported_not_raised() {
        let g = Grid::parse("#I#O#").unwrap();
        assert_eq!(dijkstra(&g), Ok(None));
        assert_eq!(astar(&g, Distance::Manhattan), Ok(None));

        let g = Grid::parse("
#######
#I #  #
#  # O#
#######
")
        .unwrap();
        for d in Distance::ALL {
            let search = PathSearch::new(d).with_movement(Movement::Diagonal);
            assert_eq!(search.find_path(&g), Ok(None));
        }
    }

    #[test]
    fn hand_mazes_match_bfs() {
        for text in [GRID1, GRID2, UNIQUE] {
            let g = Grid::parse(text).unwrap();
            let steps = bfs_steps(&g).unwrap();
            for d in [Distance::Zero, Distance::Manhattan, Distance::Euclidean] {
                let path = astar(&g, d).unwrap().unwrap();
                assert_valid(&g, &path, false);
                assert_eq!(path.steps(), steps, "{d}");
                assert_eq!(path.cost(), steps as f64);
            }
        }
    }

    #[test]
    fn heuristics_agree_on_braided_mazes() {
        for seed in 0..15 {
            for ratio in [0.0, 0.1, 0.4] {
                let maze = MazeGen::seeded(seed).generate(9, 12, ratio).unwrap();
                let g = maze.grid();
                let steps = bfs_steps(g).unwrap();
                let zero = dijkstra(g).unwrap().unwrap();
                let manhattan = astar(g, Distance::Manhattan).unwrap().unwrap();
                assert_valid(g, &zero, false);
                assert_valid(g, &manhattan, false);
                assert_eq!(zero.steps(), steps);
                assert_eq!(manhattan.steps(), steps);
            }
        }
    }

    #[test]
    fn manhattan_expands_no_more_than_dijkstra() {
        let maze = MazeGen::seeded(8).generate(15, 15, 0.3).unwrap();
        let zero = PathSearch::dijkstra();
        let manhattan = PathSearch::default();
        let mut s0 = zero.stepper(&maze).unwrap();
        let mut s1 = manhattan.stepper(&maze).unwrap();
        s0.run().unwrap();
        s1.run().unwrap();
        assert!(s1.expansions() <= s0.expansions());
    }

    #[test]
    fn stepping_matches_one_shot() {
        for seed in 0..10 {
            for ratio in [0.0, 0.25] {
                let maze = MazeGen::seeded(seed).generate(8, 8, ratio).unwrap();
                for d in Distance::ALL {
                    for movement in [Movement::Orthogonal, Movement::Diagonal] {
                        let search = PathSearch::new(d).with_movement(movement);
                        let once = search.find_path(&maze).unwrap().unwrap();

                        let mut stepper = search.stepper(&maze).unwrap();
                        let mut steps = 0;
                        while stepper.step().unwrap() != Step::Idle {
                            steps += 1;
                        }
                        assert!(steps > 0);
                        assert_eq!(stepper.path(), Some(once));
                    }
                }
            }
        }
    }

    #[test]
    fn diagonal_moves_cost_more() {
        let g = Grid::parse("I  \n   \n  O").unwrap();
        let ortho = PathSearch::default().find_path(&g).unwrap().unwrap();
        assert_eq!(ortho.steps(), 4);
        for d in [Distance::Zero, Distance::Euclidean, Distance::Chebyshev, Distance::Octile] {
            let path = PathSearch::new(d)
                .with_movement(Movement::Diagonal)
                .find_path(&g)
                .unwrap()
                .unwrap();
            assert_valid(&g, &path, true);
            assert_eq!(path.steps(), 2);
            assert!((path.cost() - 2.0 * DIAGONAL_COST).abs() < 1e-12);
        }
    }

    #[test]
    fn diagonal_costs_agree_across_admissible_heuristics() {
        for seed in 0..8 {
            let maze = MazeGen::seeded(seed).generate(7, 9, 0.5).unwrap();
            let reference = PathSearch::dijkstra()
                .with_movement(Movement::Diagonal)
                .find_path(&maze)
                .unwrap()
                .unwrap();
            for d in [Distance::Euclidean, Distance::Chebyshev, Distance::Octile] {
                let path = PathSearch::new(d)
                    .with_movement(Movement::Diagonal)
                    .find_path(&maze)
                    .unwrap()
                    .unwrap();
                assert_valid(maze.grid(), &path, true);
                assert!((path.cost() - reference.cost()).abs() < 1e-9, "seed {seed} {d}");
            }
        }
    }

    #[test]
    fn corner_cutting_is_not_a_path() {
        let g = Grid::parse("I#\n#O").unwrap();
        let search = PathSearch::new(Distance::Octile).with_movement(Movement::Diagonal);
        assert_eq!(search.find_path(&g), Ok(None));
    }

    #[test]
    fn closures_are_heuristics() {
        let g = Grid::parse(UNIQUE).unwrap();
        let path = astar(&g, |a: Cell, b: Cell| {
            (a.row - b.row).abs() as f64 * 0.5
        })
        .unwrap()
        .unwrap();
        assert_eq!(path.steps(), 6);
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let maze = MazeGen::seeded(21).generate(10, 10, 0.35).unwrap();
        let search = PathSearch::new(Distance::Euclidean);
        let a = search.find_path(&maze).unwrap();
        let b = search.find_path(&maze).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn config_builds_search() {
        let cfg = SearchConfig {
            heuristic: Some(Distance::Euclidean),
            movement: Movement::Diagonal,
        };
        let search = PathSearch::from_config(&cfg);
        assert_eq!(*search.heuristic(), Distance::Euclidean);
        assert_eq!(search.movement(), Movement::Diagonal);
        assert_eq!(SearchConfig::default().resolved_heuristic(), Distance::Manhattan);
    }

    #[test]
    fn config_heuristic_follows_movement() {
        let cfg = SearchConfig {
            movement: Movement::Diagonal,
            ..SearchConfig::default()
        };
        let search = PathSearch::from_config(&cfg);
        assert_eq!(*search.heuristic(), Distance::Octile);

        for seed in 0..20 {
            let maze = MazeGen::seeded(seed).generate(10, 10, 0.6).unwrap();
            let reference = PathSearch::dijkstra()
                .with_movement(Movement::Diagonal)
                .find_path(&maze)
                .unwrap()
                .unwrap();
            let path = search.find_path(&maze).unwrap().unwrap();
            assert!((path.cost() - reference.cost()).abs() < 1e-9, "seed {seed}");
        }
    }
}
