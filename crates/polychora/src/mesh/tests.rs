use super::cells::{chunk_ranges, face_adjacency_lists, worker_count};
use super::*;
use crate::catalog::Polychoron;
use crate::geom::DEFAULT_EPS;
use nalgebra::Vector4;
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

fn unit_square_cycle() -> (Vec<Edge>, Face) {
    // 0-1-2-3-0
    let edges = vec![Edge::new(0, 1), Edge::new(2, 1), Edge::new(2, 3), Edge::new(0, 3)];
    (edges, Face::new(vec![0, 1, 2, 3]))
}

#[test]
fn edge_equality_is_symmetric() {
    let a = Edge::new(3, 7);
    let b = Edge::new(7, 3);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, Edge::new(3, 8));
    assert_eq!(a.other(3), 7);
    assert_eq!(b.sorted(), (3, 7));
}

#[test]
fn face_and_cell_ignore_element_order() {
    let f1 = Face::new(vec![4, 9, 1, 6]);
    let f2 = Face::new(vec![6, 1, 4, 9]);
    assert_eq!(f1, f2);
    assert_eq!(hash_of(&f1), hash_of(&f2));
    assert_ne!(f1, Face::new(vec![4, 9, 1]));
    assert_ne!(f1, Face::new(vec![4, 9, 1, 7]));

    let c1 = Cell::new(vec![10, 2, 33, 4]);
    let c2 = Cell::new(vec![33, 4, 10, 2]);
    let mut set = HashSet::new();
    assert!(set.insert(c1));
    assert!(!set.insert(c2));
}

#[test]
fn face_validity_rejects_open_paths_and_figure_eights() {
    let (edges, square) = unit_square_cycle();
    assert!(square.is_closed_cycle(&edges));
    // Three edges of the square: endpoints have degree 1.
    assert!(!Face::new(vec![0, 1, 2]).is_closed_cycle(&edges));

    // Two triangles sharing vertex 0 form a figure eight: vertex 0 has degree 4.
    let bowtie_edges = vec![
        Edge::new(0, 1),
        Edge::new(1, 2),
        Edge::new(2, 0),
        Edge::new(0, 3),
        Edge::new(3, 4),
        Edge::new(4, 0),
    ];
    assert!(!Face::new((0..6).collect()).is_closed_cycle(&bowtie_edges));
    assert!(!Face::new(vec![]).is_closed_cycle(&bowtie_edges));
}

#[test]
fn vertex_loop_follows_the_cycle() {
    let (edges, square) = unit_square_cycle();
    let cycle = square.vertex_loop(&edges).unwrap();
    assert_eq!(cycle.len(), 4);
    for i in 0..4 {
        let (a, b) = (cycle[i], cycle[(i + 1) % 4]);
        assert!(edges.contains(&Edge::new(a, b)));
    }
    assert!(Face::new(vec![0, 1, 2]).vertex_loop(&edges).is_none());
}

#[test]
fn edges_match_length_within_tolerance() {
    // Edge length below 1 so the relative test separates eps/2 from 2 eps.
    let len = 0.5;
    let eps = 1e-6;
    let vertices = vec![
        Vector4::new(0.0, 0.0, 0.0, 0.0),
        Vector4::new(len + eps / 2.0, 0.0, 0.0, 0.0),
        Vector4::new(0.0, len - eps / 2.0, 0.0, 0.0),
        Vector4::new(0.0, 0.0, len + 2.0 * eps, 0.0),
        Vector4::new(0.0, 0.0, 0.0, len - 2.0 * eps),
    ];
    let edges = discover_edges(&vertices, len, eps);
    let got: HashSet<Edge> = edges.iter().copied().collect();
    assert!(got.contains(&Edge::new(0, 1)));
    assert!(got.contains(&Edge::new(0, 2)));
    assert!(!got.contains(&Edge::new(0, 3)));
    assert!(!got.contains(&Edge::new(0, 4)));
    // No duplicates for the same unordered pair.
    assert_eq!(got.len(), edges.len());
}

#[test]
fn no_matching_length_gives_empty_mesh_parts() {
    let params = Polychoron::Cell16.params();
    let edges = discover_edges(&params.vertices, 42.0, DEFAULT_EPS);
    assert!(edges.is_empty());
    let faces = discover_faces(params.vertices.len(), &edges, 3);
    assert!(faces.is_empty());
    let cells = discover_cells(&params.vertices, &edges, &faces, 4, 16, CellSearchCfg::default());
    assert!(cells.is_empty());
}

#[test]
#[should_panic(expected = "vertex-edge")]
fn non_uniform_vertex_degree_panics() {
    // Path 0-1-2: vertex 1 has two edges, vertices 0 and 2 have one.
    let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
    discover_faces(3, &edges, 3);
}

#[test]
#[should_panic(expected = "face-face")]
fn non_uniform_face_adjacency_panics() {
    // Two triangles glued along edge 0-1, plus a lone triangle: degrees 1, 1, 0.
    let edges = vec![
        Edge::new(0, 1),
        Edge::new(1, 2),
        Edge::new(2, 0),
        Edge::new(1, 3),
        Edge::new(3, 0),
        Edge::new(4, 5),
        Edge::new(5, 6),
        Edge::new(6, 4),
    ];
    let faces = vec![
        Face::new(vec![0, 1, 2]),
        Face::new(vec![0, 3, 4]),
        Face::new(vec![5, 6, 7]),
    ];
    let vertices = vec![Vector4::zeros(); 7];
    discover_cells(&vertices, &edges, &faces, 4, 1, CellSearchCfg::default());
}

#[test]
fn face_adjacency_shares_an_edge() {
    let mesh = Polychoron::Cell8.generate(CellSearchCfg::default());
    let lists = face_adjacency_lists(mesh.edge_count(), &mesh.faces);
    // Each tesseract square edge lies on 3 squares: 4 edges x 2 others.
    assert!(lists.iter().all(|l| l.len() == 8));
    for (i, list) in lists.iter().enumerate() {
        for &j in list {
            assert!(mesh.faces[i].edges.iter().any(|e| mesh.faces[j].edges.contains(e)));
        }
    }
    let incidence = UniformIncidence::from_lists(&lists, "face-face");
    assert_eq!(incidence.degree(), 8);
    assert_eq!(incidence.row(3), lists[3].as_slice());
}

#[test]
fn worker_count_is_clamped() {
    assert_eq!(worker_count(Some(0), 10), 1);
    assert_eq!(worker_count(Some(64), 10), 10);
    assert_eq!(worker_count(Some(3), 10), 3);
    assert_eq!(worker_count(Some(3), 0), 1);
    let auto = worker_count(None, 1000);
    assert!((1..=1000).contains(&auto));
}

#[test]
fn chunks_cover_the_range_once() {
    for (n, w) in [(10, 3), (10, 10), (7, 4), (1, 8), (96, 5)] {
        let ranges = chunk_ranges(n, w);
        assert!(ranges.len() <= w);
        let covered: Vec<usize> = ranges.into_iter().flatten().collect();
        assert_eq!(covered, (0..n).collect::<Vec<_>>());
    }
    assert!(chunk_ranges(0, 4).is_empty());
}

#[test]
fn faces_and_cells_satisfy_closure_invariants() {
    for p in Polychoron::ALL {
        let params = p.params();
        let mesh = p.generate(CellSearchCfg::default());
        for f in &mesh.faces {
            assert_eq!(f.edges.len(), params.edges_per_face);
            assert!(f.is_closed_cycle(&mesh.edges));
        }
        for c in &mesh.cells {
            assert_eq!(c.faces.len(), params.faces_per_cell);
            assert!(c.is_closed_surface(&mesh.faces));
        }
        let unique_faces: HashSet<&Face> = mesh.faces.iter().collect();
        assert_eq!(unique_faces.len(), mesh.face_count());
        let unique_cells: HashSet<&Cell> = mesh.cells.iter().collect();
        assert_eq!(unique_cells.len(), mesh.cell_count());
    }
}

#[test]
fn one_and_many_workers_find_the_same_cells() {
    for p in [Polychoron::Cell24, Polychoron::Cell600] {
        let single = p.generate(CellSearchCfg::default().with_workers(1));
        let many = p.generate(CellSearchCfg::default().with_workers(7));
        assert_eq!(single.canonical(), many.canonical(), "{p}");
        assert_eq!(single.cell_count(), p.expected_counts().cells);
    }
}

#[test]
fn extra_prunes_do_not_change_the_result() {
    for p in [
        Polychoron::Cell5,
        Polychoron::Cell8,
        Polychoron::Cell16,
        Polychoron::Cell24,
        Polychoron::Cell600,
    ] {
        let pruned = p.generate(CellSearchCfg::default());
        let bare = p.generate(CellSearchCfg::heuristic_only());
        assert_eq!(pruned.canonical(), bare.canonical(), "{p}");
    }
}

#[test]
fn early_exit_disabled_still_finds_every_cell() {
    let params = Polychoron::Cell16.params();
    let mesh = assemble(&params, CellSearchCfg::default());
    let cells = discover_cells(
        &mesh.vertices,
        &mesh.edges,
        &mesh.faces,
        params.faces_per_cell,
        0,
        CellSearchCfg::default(),
    );
    assert_eq!(cells.len(), 16);
}

#[test]
fn build_validates_params() {
    let good = Polychoron::Cell5.params();
    assert!(Mesh::build(&good, CellSearchCfg::default()).is_ok());

    let mut few = good.clone();
    few.vertices.truncate(4);
    assert!(matches!(
        Mesh::build(&few, CellSearchCfg::default()),
        Err(MeshError::InvalidParams { .. })
    ));

    let mut bad_len = good.clone();
    bad_len.edge_length = f64::NAN;
    assert!(bad_len.validate().is_err());

    let mut bad_face = good.clone();
    bad_face.edges_per_face = 2;
    assert!(bad_face.validate().is_err());

    let mut bad_cell = good.clone();
    bad_cell.faces_per_cell = 3;
    assert!(bad_cell.validate().is_err());

    let mut bad_eps = good;
    bad_eps.eps = 0.0;
    assert!(bad_eps.validate().is_err());
}

#[test]
fn shuffled_vertices_give_isomorphic_counts() {
    let mut params = Polychoron::Cell24.params();
    let mut rng = StdRng::seed_from_u64(42);
    params.vertices.shuffle(&mut rng);
    let mesh = assemble(&params, CellSearchCfg::default());
    assert_eq!(
        crate::catalog::ElementCounts::of(&mesh),
        Polychoron::Cell24.expected_counts()
    );
}

proptest! {
    #[test]
    fn face_hash_is_order_independent(mut edges in proptest::collection::vec(0usize..500, 3..12), seed in any::<u64>()) {
        edges.sort_unstable();
        edges.dedup();
        let a = Face::new(edges.clone());
        let mut shuffled = edges;
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        let b = Face::new(shuffled);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }
}
