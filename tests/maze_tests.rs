use anyhow::Result;
use mazegraph::{
    AdjListGraph, AdjMatGraph, Coordinates, DataStructure, Graph, Maze, MazeConfig, MazeError, MazeGraph,
};

fn c(row: i32, col: i32) -> Coordinates {
    Coordinates::new(row, col)
}

fn build<G: Graph>(graph: G, add_wall: bool) -> Result<Maze<G>> {
    let mut maze = Maze::new(2, 3, graph)?;
    maze.init_cells(add_wall);
    Ok(maze)
}

#[test]
fn init_cells_lays_out_grid_and_boundary() -> Result<()> {
    for kind in [DataStructure::AdjList, DataStructure::AdjMat] {
        let maze = build(MazeGraph::new(kind), true)?;
        let g = maze.graph();

        assert_eq!(g.vertex_count(), 2 * 3 + 2 * (2 + 3));
        assert!(!g.has_vertex(c(-1, -1)), "corners are not cells");

        for r in 0..2 {
            for col in 0..3 {
                assert_eq!(maze.neighbours(c(r, col)).len(), 4, "{kind:?} ({r}, {col})");
            }
        }
        for cell in maze.boundary_cells() {
            assert_eq!(maze.neighbours(cell).len(), 1, "{kind:?} {cell}");
        }
        assert_eq!(g.edge_count(), 7 + 10);
    }
    Ok(())
}

#[test]
fn boundary_edges_are_always_walled() -> Result<()> {
    let maze = build(AdjMatGraph::new(), false)?;

    assert!(maze.has_wall(c(-1, 0), c(0, 0)));
    assert!(maze.has_wall(c(1, 3), c(1, 2)));
    assert!(!maze.has_wall(c(0, 0), c(0, 1)));
    assert_eq!(maze.walls().len(), 10);
    Ok(())
}

#[test]
fn list_backend_walls_every_edge() -> Result<()> {
    let open = build(AdjListGraph::new(), false)?;
    let walled = build(AdjListGraph::new(), true)?;
    assert_eq!(open.walls(), walled.walls());
    assert_eq!(open.walls().len(), 17);
    Ok(())
}

#[test]
fn remove_wall_differs_by_backend() -> Result<()> {
    let (a, b) = (c(0, 0), c(0, 1));

    let mut matrix = build(AdjMatGraph::new(), true)?;
    matrix.remove_wall(a, b)?;
    assert!(!matrix.has_wall(a, b));
    assert!(matrix.neighbours(a).contains(&b));

    let mut list = build(AdjListGraph::new(), true)?;
    list.remove_wall(a, b)?;
    assert!(!list.has_wall(a, b));
    assert!(!list.neighbours(a).contains(&b));

    list.add_wall(a, b)?;
    assert!(list.has_wall(b, a));
    Ok(())
}

#[test]
fn wall_edits_require_adjacent_known_cells() -> Result<()> {
    let mut maze = build(AdjMatGraph::new(), true)?;

    assert!(matches!(
        maze.add_wall(c(0, 0), c(1, 1)),
        Err(MazeError::NotAdjacent(..))
    ));
    assert!(matches!(
        maze.remove_wall(c(-1, -1), c(-1, 0)),
        Err(MazeError::UnknownCell(cell)) if cell == c(-1, -1)
    ));
    Ok(())
}

#[test]
fn entrances_and_exits_must_be_on_boundary() -> Result<()> {
    let mut maze = build(AdjListGraph::new(), true)?;

    maze.add_entrance(c(-1, 0))?;
    maze.add_entrance(c(-1, 0))?;
    maze.add_exit(c(2, 2))?;

    assert_eq!(maze.entrances(), &[c(-1, 0)]);
    assert_eq!(maze.exits(), &[c(2, 2)]);
    assert!(matches!(maze.add_exit(c(1, 1)), Err(MazeError::NotBoundary(_))));
    assert!(matches!(maze.add_entrance(c(2, 3)), Err(MazeError::NotBoundary(_))));
    Ok(())
}

#[test]
fn config_builds_selected_backend() -> Result<()> {
    let cfg = MazeConfig::from_json(
        r#"{
            "rows": 2,
            "cols": 3,
            "data_structure": "adj_mat",
            "add_walls": false,
            "entrances": [{ "row": 0, "col": -1 }],
            "exits": [{ "row": 1, "col": 3 }]
        }"#,
    )?;
    let maze = cfg.build()?;

    assert_eq!((maze.row_num(), maze.col_num()), (2, 3));
    assert_eq!(maze.graph().kind(), DataStructure::AdjMat);
    assert_eq!(maze.entrances(), &[c(0, -1)]);
    assert_eq!(maze.exits(), &[c(1, 3)]);
    assert!(!maze.has_wall(c(0, 0), c(1, 0)));
    Ok(())
}

#[test]
fn config_rejects_bad_mazes() {
    let empty = MazeConfig::new(0, 3, DataStructure::AdjList);
    assert!(matches!(empty.build(), Err(MazeError::InvalidDimensions { .. })));

    let mut off_edge = MazeConfig::new(2, 2, DataStructure::AdjMat);
    off_edge.exits.push(c(0, 0));
    let err = off_edge.build().unwrap_err();
    assert_eq!(err.to_string(), "cell (0, 0) is not a boundary cell");

    let err = MazeConfig::from_json("{ \"rows\": 2 }").unwrap_err();
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn into_graph_returns_backend() -> Result<()> {
    let mut maze = build(AdjListGraph::new(), true)?;
    assert!(maze.graph_mut().remove_edge(c(0, 0), c(0, 1)));
    assert!(!maze.has_wall(c(0, 0), c(0, 1)));

    let graph = maze.into_graph();
    assert!(!graph.has_edge(c(0, 0), c(0, 1)));
    assert!(graph.has_edge(c(0, 0), c(1, 0)));
    Ok(())
}
