use num_traits::Float;
use std::fmt::Debug;

/// Element type a dense matrix can hold.
///
/// Implemented for `f32` and `f64`; `f64` is the default everywhere.
pub trait Scalar: Float + Debug + 'static {}

impl Scalar for f32 {}
impl Scalar for f64 {}

/// Generic trait representing a matrix's geometry.
///
/// Dimensions are signed so that externally supplied (and possibly invalid) geometry
/// can be represented and later rejected by a validation pass.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements.
    type Value: Scalar;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (isize, isize);

    /// Returns the number of rows.
    fn rows(&self) -> isize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> isize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }
}
