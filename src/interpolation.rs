use std::{error::Error, fmt::Display};

use nalgebra::{DMatrix, DVector};

use crate::polynomial::Polynomial;

impl Polynomial {

    /// Finds the polynomial of lowest degree passing through all given
    /// (x, y) points. For n points with distinct x values the result has
    /// degree at most n - 1. Coefficients are obtained by solving the
    /// linear system of one function value equation per point.
    /// # Example
    /// ```
    /// use real_polynomial::Polynomial;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// // points sampled from x^2 + 1
    /// let points = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)];
    /// let polynomial = Polynomial::through_points(&points).unwrap();
    ///
    /// assert_approx_eq!(polynomial.evaluate(3.0), 10.0, 1e-9);
    /// ```
    /// # Errors
    /// Error is returned when no points are given, when two points have
    /// equal x values or when the set of equations cannot be solved.
    pub fn through_points(points: &[(f64, f64)]) -> Result<Polynomial, Box<dyn Error>> {

        if points.is_empty() {
            return Err(Box::new(InterpolationError("at least one point is required".to_string())));
        }

        let mut x_values: Vec<f64> = points.iter().map(|point| point.0).collect();
        x_values.sort_by(|a, b| a.total_cmp(b));
        let has_equal_x = x_values
            .windows(2)
            .any(|pair| pair[1] - pair[0] < 1e-16);
        if has_equal_x {
            return Err(Box::new(InterpolationError("points have equal x values".to_string())));
        }

        let number_of_coefficients = points.len();
        let mut matrix = DMatrix::<f64>::zeros(number_of_coefficients, number_of_coefficients);
        let mut rhs = DVector::<f64>::zeros(number_of_coefficients);

        for (row, (x, y)) in points.iter().enumerate() {
            for power in 0..number_of_coefficients {
                matrix[(row, power)] = x.powi(power as i32);
            }
            rhs[row] = *y;
        }

        let solution = match matrix.lu().solve(&rhs) {
            Some(solution) => solution,
            None => return Err(Box::new(InterpolationError("Error while solving set of equations".to_string()))),
        };

        Ok(Polynomial::from_ascending(solution.iter().copied().collect()))
    }
}

#[derive(Debug)]
struct InterpolationError(String);

impl Display for InterpolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in interpolation: {}", self.0)
    }
}

impl Error for InterpolationError {}
