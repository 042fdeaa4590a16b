use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};
use log::debug;

use crate::geometry::{WallRect, WorldPoint};
use crate::maze::Maze;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const GREEN: Rgb<u8> = Rgb([0, 0xaa, 0]);
const RED: Rgb<u8> = Rgb([0xdd, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 0xff]);

#[derive(Debug)]
pub struct RenderOptions<'path> {
    cell_side_pixels_length: u8,
    mark_start_end: bool,
    marker: Option<WorldPoint>,
    output_file: Option<&'path Path>,
}

#[derive(Debug)]
pub struct RenderOptionsBuilder<'path> {
    options: RenderOptions<'path>,
}

impl<'path> RenderOptionsBuilder<'path> {
    pub fn new() -> RenderOptionsBuilder<'path> {
        RenderOptionsBuilder {
            options: RenderOptions {
                cell_side_pixels_length: 10,
                mark_start_end: false,
                marker: None,
                output_file: None,
            },
        }
    }

    /// Zero is bumped to one pixel.
    pub fn cell_side_pixels_length(mut self, cell_side_pixels_length: u8) -> Self {
        self.options.cell_side_pixels_length = cell_side_pixels_length.max(1);
        self
    }

    pub fn mark_start_end(mut self, on: bool) -> Self {
        self.options.mark_start_end = on;
        self
    }

    pub fn marker(mut self, marker: Option<WorldPoint>) -> Self {
        self.options.marker = marker;
        self
    }

    pub fn output_file(mut self, output_file: Option<&'path Path>) -> Self {
        self.options.output_file = output_file;
        self
    }

    pub fn build(self) -> RenderOptions<'path> {
        self.options
    }
}

impl<'path> Default for RenderOptionsBuilder<'path> {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

/// Paint the maze: one black square per wall rectangle on a white background.
///
/// World `+y` is up but image rows grow downwards, so the top image row is the maze's
/// highest grid row.
pub fn render_image(maze: &Maze, options: &RenderOptions) -> RgbImage {
    let cell_pixels = u32::from(options.cell_side_pixels_length);
    let img_width = maze.cols() as u32 * cell_pixels;
    let img_height = maze.rows() as u32 * cell_pixels;
    let mut image = RgbImage::from_pixel(img_width, img_height, WHITE);

    let to_pixel_cell = |x: f64, y: f64| -> Option<(u32, u32)> {
        maze.geometry()
            .world_to_grid(WorldPoint::new(x, y))
            .map(|coord| (coord.x, maze.rows() as u32 - 1 - coord.y))
    };

    for WallRect { x, y, size } in maze.wall_rectangles() {
        // Sample the centre, the corner sits on a cell boundary.
        if let Some((col, row)) = to_pixel_cell(x + size / 2.0, y + size / 2.0) {
            fill_square(&mut image, col * cell_pixels, row * cell_pixels, cell_pixels, BLACK);
        }
    }

    let inset = cell_pixels / 4;
    let marked_size = cell_pixels - 2 * inset;
    let mut mark = |point: WorldPoint, colour: Rgb<u8>| {
        if let Some((col, row)) = to_pixel_cell(point.x, point.y) {
            fill_square(&mut image,
                        col * cell_pixels + inset,
                        row * cell_pixels + inset,
                        marked_size,
                        colour);
        }
    };

    if options.mark_start_end {
        mark(maze.start_position(), GREEN);
        mark(maze.goal_position(), RED);
    }
    if let Some(marker) = options.marker {
        mark(marker, BLUE);
    }

    image
}

/// Render and, when an output file is set, save as PNG.
pub fn render_png(maze: &Maze, options: &RenderOptions) -> ImageResult<RgbImage> {
    let image = render_image(maze, options);
    if let Some(path) = options.output_file {
        image.save(path)?;
        debug!("Saved {}x{} maze image to {}", image.width(), image.height(), path.display());
    }
    Ok(image)
}

fn fill_square(image: &mut RgbImage, left: u32, top: u32, side: u32, colour: Rgb<u8>) {
    let right = (left + side).min(image.width());
    let bottom = (top + side).min(image.height());
    for y in top..bottom {
        for x in left..right {
            image.put_pixel(x, y, colour);
        }
    }
}
