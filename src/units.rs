/// Number of corridor cells along a row, walls not included.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
/// Number of corridor cells along a column, walls not included.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

/// Overall grid columns, walls included.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridWidth(pub usize);
/// Overall grid rows, walls included.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridHeight(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

impl From<GridWidth> for Width {
    fn from(grid_width: GridWidth) -> Width {
        Width(grid_width.0.saturating_sub(1) / 2)
    }
}

impl From<GridHeight> for Height {
    fn from(grid_height: GridHeight) -> Height {
        Height(grid_height.0.saturating_sub(1) / 2)
    }
}

impl From<Width> for ColumnsCount {
    fn from(width: Width) -> ColumnsCount {
        ColumnsCount(2 * width.0 + 1)
    }
}

impl From<Height> for RowsCount {
    fn from(height: Height) -> RowsCount {
        RowsCount(2 * height.0 + 1)
    }
}
