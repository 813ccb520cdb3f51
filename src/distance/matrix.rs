//! Dense distance matrix.

use crate::error::MtspError;

/// Travel cost between two cities.
///
/// Integer-valued so that running totals never drift from a from-scratch sum.
pub type Cost = i64;

/// A dense n×n distance matrix stored in row-major order.
///
/// Indexed by city identifier, hubs included. May be asymmetric.
///
/// # Examples
///
/// ```
/// use u_mtsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 5, 8],
///     vec![5, 0, 4],
///     vec![8, 4, 0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<Cost>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<Cost>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Rejects ragged rows and negative entries.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, MtspError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MtspError::NonSquareMatrix {
                    row: from,
                    len: row.len(),
                    expected: size,
                });
            }
            if let Some(to) = row.iter().position(|&d| d < 0) {
                return Err(MtspError::NegativeDistance { from, to });
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Builds a symmetric matrix of rounded Euclidean distances between points.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = (dx * dx + dy * dy).sqrt().round() as Cost;
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: Cost) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities (hubs included) in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `d(i, j) == d(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns the nearest of `candidates` as seen from `from`.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| self.get(from, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_points() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&line_points());
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(0, 2), 8);
        assert_eq!(dm.get(0, 0), 0);
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 5);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_none());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            MtspError::NonSquareMatrix {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_rows_negative() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1], vec![-3, 0]]).unwrap_err();
        assert_eq!(err, MtspError::NegativeDistance { from: 1, to: 0 });
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42);
        assert_eq!(dm.get(0, 1), 42);
        assert_eq!(dm.get(1, 0), 0);
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_points(&line_points());
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10);
        dm.set(1, 0, 15);
        assert!(!dm.is_symmetric());
    }
}
