//! Temperature field storage
//!
//! The field is a square `N×N` grid stored as a flat `Vec<f64>` in row-major
//! order: row `j` runs along the y axis, column `i` along the x axis, and cell
//! `(i, j)` lives at index `j * N + i`.

/// Square grid of temperatures (°C)
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureField {
    /// Field values in row-major order (j * resolution + i)
    data: Vec<f64>,
    /// Points per axis
    resolution: usize,
}

impl TemperatureField {
    /// Create a field with every cell set to `value`
    ///
    /// # Arguments
    ///
    /// * `resolution` - Points per axis
    /// * `value` - Initial temperature for all cells (°C)
    #[must_use]
    pub fn with_value(resolution: usize, value: f64) -> Self {
        Self {
            data: vec![value; resolution * resolution],
            resolution,
        }
    }

    /// Create a field by evaluating `f(i, j)` for every cell
    #[must_use]
    pub fn from_fn(resolution: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(resolution * resolution);
        for j in 0..resolution {
            for i in 0..resolution {
                data.push(f(i, j));
            }
        }
        Self { data, resolution }
    }

    /// Wrap existing row-major data
    ///
    /// Returns `None` unless `data.len() == resolution²`.
    #[must_use]
    pub fn from_vec(resolution: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == resolution * resolution).then_some(Self { data, resolution })
    }

    /// Points per axis
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// `(columns, rows)`; always square
    pub fn dimensions(&self) -> (usize, usize) {
        (self.resolution, self.resolution)
    }

    /// Field values in row-major order
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable field values in row-major order
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// One row (constant `j`, varying `i`)
    pub fn row(&self, j: usize) -> &[f64] {
        let start = j * self.resolution;
        &self.data[start..start + self.resolution]
    }

    /// Get temperature at column `i`, row `j`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.resolution && j < self.resolution,
            "Coordinates out of bounds"
        );
        self.data[j * self.resolution + i]
    }

    /// Set temperature at column `i`, row `j`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(
            i < self.resolution && j < self.resolution,
            "Coordinates out of bounds"
        );
        self.data[j * self.resolution + i] = value;
    }

    /// Fill entire field with a value
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Overwrite this field with the contents of `other` (same resolution)
    pub fn copy_from(&mut self, other: &TemperatureField) {
        assert_eq!(
            self.resolution, other.resolution,
            "Field resolution mismatch"
        );
        self.data.copy_from_slice(&other.data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_with_value() {
        let field = TemperatureField::with_value(5, 42.0);
        assert_eq!(field.dimensions(), (5, 5));
        assert_eq!(field.as_slice().len(), 25);
        assert!(field.as_slice().iter().all(|&v| v == 42.0));
    }

    #[test]
    fn test_field_get_set_row_major() {
        let mut field = TemperatureField::with_value(10, 0.0);
        field.set(3, 4, 123.45);
        assert_eq!(field.get(3, 4), 123.45);
        assert_eq!(field.as_slice()[4 * 10 + 3], 123.45);
        assert_eq!(field.row(4)[3], 123.45);
    }

    #[test]
    fn test_from_fn_orders_columns_within_rows() {
        let field = TemperatureField::from_fn(3, |i, j| (10 * j + i) as f64);
        assert_eq!(field.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0]);
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(TemperatureField::from_vec(3, vec![0.0; 9]).is_some());
        assert!(TemperatureField::from_vec(3, vec![0.0; 8]).is_none());
    }

    #[test]
    fn test_fill_and_copy() {
        let mut a = TemperatureField::with_value(4, 1.0);
        let mut b = TemperatureField::with_value(4, 2.0);
        a.fill(9.5);
        b.copy_from(&a);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "Coordinates out of bounds")]
    fn test_field_bounds_check() {
        let field = TemperatureField::with_value(10, 0.0);
        let _ = field.get(10, 5);
    }
}
