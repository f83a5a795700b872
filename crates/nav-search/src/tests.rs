//! Unit tests for nav-search.

#[cfg(test)]
mod helpers {
    use nav_core::{Point, VertexId};
    use nav_graph::{
        Obstacle, ObstacleField, OcclusionOracle, QueryGraph, VisibilityGraph,
        VisibilityGraphBuilder,
    };

    pub fn scene(obstacles: &[Obstacle], radius: f32) -> (VisibilityGraph, ObstacleField) {
        let field = ObstacleField::from_obstacles(obstacles);
        let mut b = VisibilityGraphBuilder::new(radius).unwrap();
        for o in obstacles {
            b.add_obstacle(o).unwrap();
        }
        (b.build(&field).unwrap(), field)
    }

    pub fn square(center: (f32, f32), half: f32) -> Obstacle {
        Obstacle::new(Point::new(center.0, center.1), Point::new(half, half)).unwrap()
    }

    /// Reference shortest distance: straight line if visible, otherwise an
    /// O(V²) Dijkstra over the query overlay.
    pub fn brute_force<O: OcclusionOracle>(
        graph: &VisibilityGraph,
        oracle: &O,
        from: Point,
        to: Point,
        radius: f32,
    ) -> Option<f32> {
        if oracle.visible(from, to, radius) {
            return Some(from.distance(to));
        }
        let q = QueryGraph::new(graph, oracle, from, to, radius);
        let n = q.vertex_count();
        let mut dist = vec![f32::INFINITY; n];
        let mut done = vec![false; n];
        dist[q.start_id().index()] = 0.0;
        loop {
            let next = (0..n)
                .filter(|&i| !done[i] && dist[i].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
            let Some(u) = next else { break };
            done[u] = true;
            let pu = q.position(VertexId(u as u32));
            for v in q.neighbors(VertexId(u as u32)) {
                let d = dist[u] + pu.distance(q.position(v));
                if d < dist[v.index()] {
                    dist[v.index()] = d;
                }
            }
        }
        let d = dist[q.goal_id().index()];
        d.is_finite().then_some(d)
    }
}

// ── MinHeap ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod heap {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::MinHeap;

    #[test]
    fn extracts_in_key_order() {
        let keys = [5.0_f32, 1.0, 4.0, 2.0, 3.0];
        let mut heap = MinHeap::with_capacity(keys.len());
        for i in 0..keys.len() {
            heap.insert(i, &keys[..]);
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek_min(), Some(1));

        let order: Vec<usize> = std::iter::from_fn(|| heap.extract_min(&keys[..])).collect();
        assert_eq!(order, vec![1, 3, 4, 2, 0]);
        assert!(heap.is_empty());
        assert_eq!(heap.extract_min(&keys[..]), None);
    }

    #[test]
    #[should_panic(expected = "MinHeap overflow")]
    fn insert_past_capacity_panics() {
        let keys = [0.0_f32; 3];
        let mut heap = MinHeap::with_capacity(2);
        heap.insert(0, &keys[..]);
        heap.insert(1, &keys[..]);
        heap.insert(2, &keys[..]);
    }

    #[test]
    fn rebuild_after_key_changes() {
        let mut keys = vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut heap = MinHeap::with_capacity(keys.len());
        for i in 0..keys.len() {
            heap.insert(i, keys.as_slice());
        }
        keys[5] = 0.5;
        keys[0] = 10.0;
        heap.rebuild(keys.as_slice());
        assert!(heap.is_heap_ordered(keys.as_slice()));
        assert_eq!(heap.capacity(), 6);
        assert_eq!(heap.extract_min(keys.as_slice()), Some(5));
    }

    #[test]
    fn infinite_keys_sink() {
        let keys = [f32::INFINITY, 3.0, f32::INFINITY, 0.0];
        let mut heap = MinHeap::with_capacity(4);
        for i in 0..4 {
            heap.insert(i, &keys[..]);
        }
        assert_eq!(heap.extract_min(&keys[..]), Some(3));
        assert_eq!(heap.extract_min(&keys[..]), Some(1));
        assert!(keys[heap.extract_min(&keys[..]).unwrap()].is_infinite());
    }

    #[test]
    fn random_order_property() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(1..64);
            let mut keys: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..100.0)).collect();
            let mut heap = MinHeap::with_capacity(n);
            for i in 0..n {
                heap.insert(i, keys.as_slice());
                assert!(heap.is_heap_ordered(keys.as_slice()));
            }

            // Pull a few out, lower some of the rest, rebuild.
            for _ in 0..n / 3 {
                heap.extract_min(keys.as_slice());
            }
            let held = heap.items().to_vec();
            for i in held {
                if rng.gen_bool(0.5) {
                    keys[i] -= rng.gen_range(0.0..50.0);
                }
            }
            heap.rebuild(keys.as_slice());
            assert!(heap.is_heap_ordered(keys.as_slice()));

            let mut last = f32::NEG_INFINITY;
            while let Some(i) = heap.extract_min(keys.as_slice()) {
                assert!(keys[i] >= last);
                last = keys[i];
                assert!(heap.is_heap_ordered(keys.as_slice()));
            }
        }
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use nav_core::Point;

    use crate::Path;

    #[test]
    fn length_includes_first_leg() {
        let p = Path::new(vec![Point::new(3.0, 4.0), Point::new(3.0, 10.0)]);
        assert_eq!(p.length_from(Point::ZERO), 11.0);
        assert_eq!(p.destination(), Some(Point::new(3.0, 10.0)));
        assert!(!p.is_direct());
    }

    #[test]
    fn direct_and_empty() {
        let p = Path::direct(Point::new(1.0, 1.0));
        assert!(p.is_direct());
        assert_eq!(p.len(), 1);
        assert!(Path::default().is_empty());
        assert_eq!(Path::default().length_from(Point::ZERO), 0.0);
    }
}

// ── A* ────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use nav_core::{NavError, Point};
    use nav_graph::{Obstacle, ObstacleField, OcclusionOracle, VisibilityGraphBuilder};

    use super::helpers::{brute_force, scene, square};
    use crate::{AStar, PathPlanner, SearchError, Termination};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    /// Every leg of the path must be clear for the disk.
    fn legs_clear<O: OcclusionOracle>(oracle: &O, from: Point, path: &crate::Path, r: f32) -> bool {
        let mut prev = from;
        path.iter().all(|&p| {
            let ok = oracle.visible(prev, p, r);
            prev = p;
            ok
        })
    }

    #[test]
    fn direct_visibility_shortcut() {
        let (graph, field) = scene(&[square((5.0, 5.0), 1.0)], 1.0);
        let to = Point::new(0.0, 10.0);
        let path = AStar::new().find_path(&graph, &field, Point::ZERO, to, 1.0).unwrap();
        assert_eq!(path.waypoints, vec![to]);
    }

    #[test]
    fn around_a_square_one_corner() {
        let (graph, field) = scene(&[square((5.0, 5.0), 1.0)], 1.0);
        let from = Point::new(0.0, 0.0);
        let to = Point::new(10.0, 10.0);

        let path = AStar::new().find_path(&graph, &field, from, to, 1.0).unwrap();
        assert_eq!(path.len(), 2);
        let corner = path.waypoints[0];
        assert!(
            corner == Point::new(3.0, 7.0) || corner == Point::new(7.0, 3.0),
            "unexpected corner {corner}"
        );
        assert_eq!(path.destination(), Some(to));

        let length = path.length_from(from);
        assert!(close(length, 2.0 * 58.0_f32.sqrt()));
        assert!(length >= from.distance(to));
        assert!(close(length, brute_force(&graph, &field, from, to, 1.0).unwrap()));
        assert!(legs_clear(&field, from, &path, 1.0));
    }

    #[test]
    fn around_a_square_two_corners() {
        // Start under the box, goal above it: the route hugs one side.
        let (graph, field) = scene(&[square((5.0, 5.0), 2.0)], 1.0);
        let from = Point::new(5.0, 1.5);
        let to = Point::new(5.0, 8.5);

        let path = AStar::new().find_path(&graph, &field, from, to, 1.0).unwrap();
        assert_eq!(path.len(), 3);
        let (a, b) = (path.waypoints[0], path.waypoints[1]);
        let west = a == Point::new(2.0, 2.0) && b == Point::new(2.0, 8.0);
        let east = a == Point::new(8.0, 2.0) && b == Point::new(8.0, 8.0);
        assert!(west || east, "unexpected corners {a} {b}");
        assert!(close(path.length_from(from), 6.0 + 2.0 * 9.25_f32.sqrt()));
    }

    #[test]
    fn disconnected_is_unreachable() {
        // A wall along x = 0 that nothing can cross.
        let wall = |a: Point, b: Point, _r: f32| (a.x < 0.0) != (b.x < 0.0);
        let mut b = VisibilityGraphBuilder::new(0.5).unwrap();
        b.add_vertex(Point::new(-2.0, 3.0));
        b.add_vertex(Point::new(-2.0, -3.0));
        b.add_vertex(Point::new(2.0, 3.0));
        let graph = b.build(&wall).unwrap();

        let result = AStar::new().find_path(&graph, &wall, Point::new(-5.0, 0.0), Point::new(5.0, 0.0), 0.5);
        assert!(matches!(result, Err(SearchError::Unreachable { .. })));
    }

    #[test]
    fn unreachable_goal_inside_enclosure() {
        // Goal ringed by four walls with no gaps.
        let walls = [
            Obstacle::new(Point::new(0.0, 4.0), Point::new(4.5, 0.5)).unwrap(),
            Obstacle::new(Point::new(0.0, -4.0), Point::new(4.5, 0.5)).unwrap(),
            Obstacle::new(Point::new(4.0, 0.0), Point::new(0.5, 4.5)).unwrap(),
            Obstacle::new(Point::new(-4.0, 0.0), Point::new(0.5, 4.5)).unwrap(),
        ];
        let (graph, field) = scene(&walls, 0.5);
        let result = AStar::new().find_path(&graph, &field, Point::new(20.0, 0.0), Point::ZERO, 0.5);
        assert!(matches!(result, Err(SearchError::Unreachable { .. })));
    }

    #[test]
    fn base_graph_unchanged_by_queries() {
        let (graph, field) = scene(&[square((5.0, 5.0), 1.0)], 1.0);
        let before = graph.clone();

        AStar::new()
            .find_path(&graph, &field, Point::ZERO, Point::new(10.0, 10.0), 1.0)
            .unwrap();
        assert_eq!(graph, before);

        let never = |_: Point, _: Point, _: f32| true;
        assert!(AStar::new().find_path(&graph, &never, Point::ZERO, Point::new(1.0, 1.0), 1.0).is_err());
        assert_eq!(graph, before);
        assert_eq!(graph.vertex_count(), 4);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn negative_radius_rejected() {
        let (graph, field) = scene(&[square((5.0, 5.0), 1.0)], 1.0);
        let result = AStar::new().find_path(&graph, &field, Point::ZERO, Point::new(1.0, 0.0), -1.0);
        assert!(matches!(result, Err(SearchError::Core(NavError::NegativeRadius(_)))));
    }

    #[test]
    fn relax_termination_reaches_goal() {
        let obstacles = [square((5.0, 5.0), 1.0), square((12.0, 9.0), 1.5), square((9.0, 14.0), 1.0)];
        let (graph, field) = scene(&obstacles, 0.5);
        let from = Point::new(0.0, 0.0);
        let to = Point::new(16.0, 16.0);

        let legacy = AStar::with_termination(Termination::OnRelax);
        let path = legacy.find_path(&graph, &field, from, to, 0.5).unwrap();
        assert_eq!(path.destination(), Some(to));
        assert!(legs_clear(&field, from, &path, 0.5));

        let best = AStar::new().find_path(&graph, &field, from, to, 0.5).unwrap();
        assert!(path.length_from(from) >= best.length_from(from) - 1e-3);
    }

    #[test]
    fn matches_brute_force_on_random_layouts() {
        let mut rng = SmallRng::seed_from_u64(42);
        let radius = 0.5;
        for trial in 0..40 {
            let obstacles: Vec<Obstacle> = (0..rng.gen_range(2..8))
                .map(|_| {
                    let c = Point::new(rng.gen_range(5.0..35.0), rng.gen_range(5.0..35.0));
                    let h = Point::new(rng.gen_range(0.5..3.0), rng.gen_range(0.5..3.0));
                    Obstacle::new(c, h).unwrap()
                })
                .collect();
            let (graph, field) = scene(&obstacles, radius);
            let from = Point::new(rng.gen_range(0.0..40.0), rng.gen_range(0.0..40.0));
            let to = Point::new(rng.gen_range(0.0..40.0), rng.gen_range(0.0..40.0));

            let expected = brute_force(&graph, &field, from, to, radius);
            match (AStar::new().find_path(&graph, &field, from, to, radius), expected) {
                (Ok(path), Some(best)) => {
                    let got = path.length_from(from);
                    assert!(close(got, best), "trial {trial}: {got} vs {best}");
                    assert!(got >= from.distance(to) - 1e-4);
                    assert!(legs_clear(&field, from, &path, radius), "trial {trial}");
                }
                (Err(SearchError::Unreachable { .. }), None) => {}
                (got, want) => panic!("trial {trial}: got {got:?}, brute force {want:?}"),
            }
        }
    }

    #[test]
    fn planner_is_object_safe() {
        let planners: Vec<Box<dyn PathPlanner>> =
            vec![Box::new(AStar::new()), Box::new(AStar::with_termination(Termination::OnRelax))];
        let field = ObstacleField::new([]);
        let mut b = VisibilityGraphBuilder::new(0.0).unwrap();
        b.add_vertex(Point::ZERO);
        let graph = b.build(&field).unwrap();
        for p in &planners {
            let path = p.find_path(&graph, &field, Point::ZERO, Point::new(2.0, 0.0), 0.0).unwrap();
            assert!(path.is_direct());
        }
    }
}
