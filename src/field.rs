use std::ops::{Index, IndexMut};

use glam::Vec2;

/// Owned row-major 2D container indexed by `(row, col)`.
///
/// Each cell holds its own value; `Field<Vec2>` cells never alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    columns: usize,
    rows: usize,
    cells: Vec<T>,
}

pub type DensityField = Field<f32>;
pub type VelocityField = Field<Vec2>;

impl<T: Clone + Default> Field<T> {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self::filled(columns, rows, T::default())
    }
}

impl<T: Clone> Field<T> {
    pub fn filled(columns: usize, rows: usize, value: T) -> Self {
        let len = columns
            .checked_mul(rows)
            .unwrap_or_else(|| panic!("field of {}x{} cells overflows usize", rows, columns));
        Self {
            columns,
            rows,
            cells: vec![value; len],
        }
    }
}

impl<T> Field<T> {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.index_of(row, col).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.index_of(row, col).map(|i| &mut self.cells[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> Index<(usize, usize)> for Field<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
            .unwrap_or_else(|| panic!("field index ({}, {}) out of bounds for {}x{}", row, col, self.rows, self.columns))
    }
}

impl<T> IndexMut<(usize, usize)> for Field<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let (rows, columns) = (self.rows, self.columns);
        self.get_mut(row, col)
            .unwrap_or_else(|| panic!("field index ({}, {}) out of bounds for {}x{}", row, col, rows, columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_initialized() {
        let density = DensityField::new(4, 3);
        assert_eq!(density.len(), 12);
        assert!(density.iter().all(|&d| d == 0.0));

        let velocity = VelocityField::new(4, 3);
        assert!(velocity.iter().all(|v| *v == Vec2::ZERO));
    }

    #[test]
    fn test_velocity_cells_are_independent() {
        let mut velocity = VelocityField::new(3, 3);
        velocity[(1, 1)].x = 2.5;

        assert_eq!(velocity[(1, 1)], Vec2::new(2.5, 0.0));
        assert_eq!(velocity[(0, 0)], Vec2::ZERO);
        assert_eq!(velocity[(2, 2)], Vec2::ZERO);
    }

    #[test]
    fn test_bounds_checked_get() {
        let density = DensityField::new(2, 5);
        assert!(density.get(4, 1).is_some());
        assert!(density.get(5, 0).is_none());
        assert!(density.get(0, 2).is_none());
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_oversized_field_panics_before_allocating() {
        let _ = DensityField::new(usize::MAX, 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let density = DensityField::new(2, 2);
        let _ = density[(2, 0)];
    }
}
