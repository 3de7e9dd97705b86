//! ASCII trace of a search run: paints a wall and a river on the
//! default 20x20 grid, runs Dijkstra, and prints the explored cells and
//! the reconstructed path.
//!
//! Run with `cargo run --example trace`.

use gridpath_core::{Coord, Grid, Terrain};
use gridpath_search::{Algorithm, Engine, Outcome, SearchEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::new();

    // A wall across row 8 with one gap, and a river down column 14.
    for col in 0..20 {
        if col != 16 {
            grid.set_terrain(Coord::new(8, col), Terrain::Blocked)?;
        }
    }
    for row in 9..20 {
        let c = Coord::new(row, 14);
        if c != grid.end() {
            grid.set_terrain(c, Terrain::Water)?;
        }
    }

    let engine = Engine::new();
    let mut run = engine.run(&grid, grid.start(), grid.end(), Algorithm::Dijkstra)?;

    let mut explored = Vec::new();
    for ev in run.by_ref() {
        if let SearchEvent::CellDiscovered { cell, first: true, .. } = ev {
            explored.push(cell);
        }
    }

    match run.finish() {
        Outcome::Succeeded {
            path,
            total_cost,
            discovered,
        } => {
            render(&grid, &explored, &path);
            println!("cost {total_cost}, {discovered} cells discovered");
        }
        Outcome::Exhausted { discovered } => {
            render(&grid, &explored, &[]);
            println!("no path ({discovered} cells discovered)");
        }
    }
    Ok(())
}

fn render(grid: &Grid, explored: &[Coord], path: &[Coord]) {
    for row in 0..grid.side() {
        let mut line = String::new();
        for col in 0..grid.side() {
            let c = Coord::new(row, col);
            let ch = if c == grid.start() {
                'S'
            } else if c == grid.end() {
                'E'
            } else if path.contains(&c) {
                'o'
            } else {
                match grid.terrain_at(c) {
                    Ok(Terrain::Blocked) => '#',
                    Ok(Terrain::Water) => '~',
                    _ if explored.contains(&c) => '.',
                    _ => ' ',
                }
            };
            line.push(ch);
        }
        println!("{line}");
    }
}
