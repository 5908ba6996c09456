//! Randomised checks of the engine against a breadth-first oracle.

use std::collections::VecDeque;

use pathstep_core::{Grid, Pos};
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::{MAX_PATHS, Pather, Search, Step, alternates, solve};

/// Unit-cost distance by BFS, or `None` if unreachable.
fn bfs_distance(grid: &Grid, start: Pos, goal: Pos) -> Option<i32> {
    let bounds = grid.bounds();
    let mut dist = vec![-1; bounds.len()];
    let mut queue = VecDeque::new();
    dist[bounds.index(start)?] = 0;
    queue.push_back(start);
    let mut nbuf = Vec::new();
    while let Some(p) = queue.pop_front() {
        let d = dist[bounds.index(p)?];
        if p == goal {
            return Some(d);
        }
        nbuf.clear();
        grid.neighbors(p, &mut nbuf);
        for &n in &nbuf {
            let Some(ni) = bounds.index(n) else {
                continue;
            };
            if dist[ni] < 0 {
                dist[ni] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

/// A uniform draw from `lo..=hi`.
fn roll(rng: &mut StdRng, lo: i32, hi: i32) -> i32 {
    Uniform::new_inclusive(lo, hi).unwrap().sample(rng)
}

/// A random grid with two distinct open endpoints.
fn random_case(rng: &mut StdRng, max_side: i32) -> (Grid, Pos, Pos) {
    let rows = roll(rng, 5, max_side);
    let cols = roll(rng, 5, max_side);
    let density = roll(rng, 0, 39);
    let mut grid = Grid::new(rows, cols).unwrap();
    for p in grid.bounds().iter() {
        if roll(rng, 0, 99) < density {
            grid.set_blocked(p, true);
        }
    }
    let start = Pos::new(roll(rng, 0, rows - 1), roll(rng, 0, cols - 1));
    let mut goal = start;
    while goal == start {
        goal = Pos::new(roll(rng, 0, rows - 1), roll(rng, 0, cols - 1));
    }
    grid.set_blocked(start, false);
    grid.set_blocked(goal, false);
    (grid, start, goal)
}

/// Step to completion, returning visited cells, the path and the call count.
fn run(grid: &Grid, start: Pos, goal: Pos) -> (Vec<Pos>, Option<crate::Path>, usize) {
    let mut search = Search::new(grid.bounds());
    search.init(grid, start, goal).unwrap();
    let mut visited = Vec::new();
    let mut calls = 0;
    loop {
        calls += 1;
        match search.step(grid).unwrap() {
            Step::Seeded => {}
            Step::Visited(p) => visited.push(p),
            Step::Found { path, .. } => return (visited, Some(path), calls),
            Step::Exhausted => return (visited, None, calls),
        }
    }
}

#[test]
fn paths_are_optimal_and_valid() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..80 {
        let (grid, start, goal) = random_case(&mut rng, 50);
        let expected = bfs_distance(&grid, start, goal);
        let (_, path, calls) = run(&grid, start, goal);

        assert!(calls <= grid.bounds().len(), "took {calls} steps");
        match (expected, path) {
            (None, None) => {}
            (Some(d), Some(path)) => {
                assert_eq!(path.len() as i32, d + 1, "suboptimal on\n{grid}");
                assert!(path.is_connected());
                assert_eq!(path.start(), Some(start));
                assert_eq!(path.goal(), Some(goal));
                assert!(path.iter().all(|&p| grid.is_open(p)));
            }
            (e, p) => panic!("oracle {e:?} disagrees with search {p:?} on\n{grid}"),
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let (grid, start, goal) = random_case(&mut rng, 30);
        let first = run(&grid, start, goal);
        let second = run(&grid, start, goal);
        assert_eq!(first, second);
        assert_eq!(first.1, solve(&grid, start, goal).unwrap());
    }
}

#[test]
fn alternates_are_sound() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..30 {
        let (grid, start, goal) = random_case(&mut rng, 25);
        let Some(canonical) = solve(&grid, start, goal).unwrap() else {
            continue;
        };
        let set = alternates(&grid, &canonical).unwrap();
        assert!(!set.is_empty() && set.len() <= MAX_PATHS);
        assert_eq!(set.canonical(), &canonical);
        for (i, p) in set.iter().enumerate() {
            assert_eq!(p.len(), canonical.len());
            assert!(p.is_connected());
            assert!(p.iter().all(|&c| grid.is_open(c)));
            assert!(set.iter().skip(i + 1).all(|q| q != p));
        }
    }
}
