use docopt::Docopt;
use log::{debug, info, warn};
use serde_derive::Deserialize;
use mazewalk::{
    config::MazeConfig,
    graph,
    grid_displays::MarkerDisplay,
    renderers,
    Maze, MoveDirection, MoveOutcome, Session,
};
use std::{
    fs::File,
    io,
    io::prelude::*,
    path::Path,
};

const USAGE: &str = "Mazewalk

Usage:
    mazewalk -h | --help
    mazewalk play [--grid-width=<w>] [--grid-height=<h>] [--cell-size=<n>] [--seed=<s>]
    mazewalk render [--grid-width=<w>] [--grid-height=<h>] [--cell-size=<n>] [--seed=<s>] [--text] [--image-out=<path>] [--cell-pixels=<n>] [--mark-start-end] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --grid-width=<w>       Overall grid columns, walls included. Odd values recommended [default: 21].
    --grid-height=<h>      Overall grid rows, walls included. Odd values recommended [default: 21].
    --cell-size=<n>        World units per grid cell [default: 20].
    --seed=<s>             Seed for a reproducible maze. A new random maze each run if not given.
    --text                 Print the maze as text. The default if no other output is chosen.
    --image-out=<path>     Output file path for an image rendering of the maze. Always PNG format.
    --cell-pixels=<n>      Pixel count to render one grid cell in an image [default: 10] max 255.
    --mark-start-end       Draw the start (green) and goal (red) cells in the image.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.

Playing:
    Type up/down/left/right, w/a/s/d or k/j/h/l and press enter to move the @ marker.
    Several moves can be given on one line, e.g. `ddw`. Type q to quit.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_play: bool,
    cmd_render: bool,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_cell_size: f64,
    flag_seed: Option<u64>,
    flag_text: bool,
    flag_image_out: String,
    flag_cell_pixels: u8,
    flag_mark_start_end: bool,
    flag_save_edges: String,
}

// Create the Error, ErrorKind, ResultExt, and Result types for the driver.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            Io(::std::io::Error);
            ImageSaveError(::image::ImageError);
            InvalidMaze(::mazewalk::MazeError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    debug!("{:?}", args);

    let config = MazeConfig {
        grid_width: args.flag_grid_width,
        grid_height: args.flag_grid_height,
        cell_size: args.flag_cell_size,
        seed: args.flag_seed,
    };
    let maze = Maze::from_config(&config)?;

    if args.cmd_play {
        play(maze)
    } else if args.cmd_render {
        render(&maze, &args)
    } else {
        Ok(())
    }
}

fn render(maze: &Maze, args: &MazeArgs) -> Result<()> {

    let image_out = !args.flag_image_out.is_empty();
    let save_edges = !args.flag_save_edges.is_empty();

    if args.flag_text || !(image_out || save_edges) {
        println!("{}", maze.grid());
    }

    if image_out {
        let render_options = renderers::RenderOptionsBuilder::new()
            .cell_side_pixels_length(args.flag_cell_pixels)
            .mark_start_end(args.flag_mark_start_end)
            .output_file(Some(Path::new(&args.flag_image_out)))
            .build();
        renderers::render_png(maze, &render_options)
            .chain_err(|| format!("Failed to write maze image {}", args.flag_image_out))?;
    }

    if save_edges {
        write_text_to_file(&graph::edge_list(maze.grid()), &args.flag_save_edges)
            .chain_err(|| format!("Failed to write maze graph to text file {}", args.flag_save_edges))?;
    }

    Ok(())
}

fn play(maze: Maze) -> Result<()> {

    let mut session = Session::new(maze);
    show(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut solved_now = false;

        for token in line.split_whitespace() {
            if token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit") {
                info!("Quit after {} moves", session.moves());
                return Ok(());
            }

            for direction in parse_moves(token) {
                if let MoveOutcome::Solved(_) = session.step(direction) {
                    solved_now = true;
                }
            }
        }

        show(&session);
        if solved_now {
            println!("Solved! You reached the goal in {} moves. Type q to quit.", session.moves());
        }
    }

    Ok(())
}

/// A whole word direction, or else a run of single key directions such as `ddw`.
/// Unrecognised keys are skipped.
fn parse_moves(token: &str) -> Vec<MoveDirection> {
    if let Ok(direction) = token.parse::<MoveDirection>() {
        return vec![direction];
    }

    token.chars()
        .filter_map(|key| match key.to_string().parse::<MoveDirection>() {
            Ok(direction) => Some(direction),
            Err(e) => {
                warn!("{}", e);
                None
            }
        })
        .collect()
}

fn show(session: &Session) {
    let display = MarkerDisplay::for_session(session);
    println!("{}", session.maze().grid().display_with(&display));
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
