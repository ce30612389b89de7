use std::{error::Error, fmt::Display, hash::{Hash, Hasher}};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Polynomial of a single variable with real coefficients, e.g. 7x⁴+3x³-6x²+x-8.
///
/// Coefficients are stored in ascending degree order with no trailing
/// highest-degree zero entries; the zero polynomial is stored as a single 0.0
/// coefficient. Zero coefficients of terms below the leading one are kept,
/// so x³+2x+1 holds four coefficients with 0.0 at degree 2.
///
/// Values are immutable, every operation returns a new [Polynomial].
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    /// Creates [Polynomial] from coefficients listed from the highest degree
    /// term down to the constant term. Leading zero coefficients are dropped,
    /// an empty or all-zero list gives the zero polynomial.
    /// # Example
    /// ```
    /// use real_polynomial::Polynomial;
    ///
    /// // 0x^3 + 0x^2 + 5x + 3 is the same polynomial as 5x + 3
    /// let polynomial = Polynomial::new(vec![0.0, 0.0, 5.0, 3.0]);
    ///
    /// assert_eq!(1, polynomial.degree());
    /// assert_eq!(5.0, polynomial.coeff(1).unwrap());
    /// assert_eq!(3.0, polynomial.coeff(0).unwrap());
    /// ```
    pub fn new(coefficients: Vec<f64>) -> Self {
        match coefficients.iter().position(|c| *c != 0.0) {
            Some(first_non_zero) => {
                let mut ascending = coefficients[first_non_zero..].to_vec();
                ascending.reverse();
                Polynomial { coefficients: ascending }
            },
            None => Polynomial::zero(),
        }
    }

    /// Creates the zero polynomial.
    pub fn zero() -> Self {
        Polynomial { coefficients: vec![0.0] }
    }

    /// Creates [Polynomial] from coefficients in ascending degree order,
    /// stripping trailing zero entries left behind by arithmetic.
    pub(crate) fn from_ascending(mut coefficients: Vec<f64>) -> Self {
        while coefficients.len() > 1 && *coefficients.last().unwrap() == 0.0 {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        Polynomial { coefficients }
    }

    /// Returns the coefficient of the x^i term.
    /// # Errors
    /// Error is returned when `i` is greater than [Polynomial::degree].
    /// Coefficients are not zero-extended past the leading term.
    /// ```
    /// use real_polynomial::Polynomial;
    ///
    /// let polynomial = Polynomial::new(vec![5.0, 3.0]);
    /// assert!(polynomial.coeff(2).is_err());
    /// ```
    pub fn coeff(&self, i: usize) -> Result<f64, Box<dyn Error>> {
        match self.coefficients.get(i) {
            Some(coefficient) => Ok(*coefficient),
            None => Err(Box::new(
                PolynomialError(format!("no term with degree {}", i))
            )),
        }
    }

    /// Degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == 0.0
    }

    /// Returns the coefficient of the highest degree term.
    pub fn leading_coeff(&self) -> f64 {
        self.coefficients[self.degree()]
    }

    /// Calculates polynomial value for given x.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut result = 0.0;
        for i in 0..self.coefficients.len() {
            result += x.powi(i as i32) * self.coefficients[i]
        }
        result
    }

    /// Sum of two polynomials. Coefficients of terms cancelling each other
    /// out are removed from the result.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let length = self.coefficients.len().max(other.coefficients.len());
        let mut result = vec![0.0; length];
        for i in 0..length {
            if i < self.coefficients.len() {
                result[i] += self.coefficients[i];
            }
            if i < other.coefficients.len() {
                result[i] += other.coefficients[i];
            }
        }
        Polynomial::from_ascending(result)
    }

    /// Flips the sign of every term. Degree is unchanged.
    pub fn negate(&self) -> Polynomial {
        Polynomial { coefficients: self.coefficients.iter().map(|c| -c).collect() }
    }

    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.negate())
    }

    /// Product of two polynomials calculated as convolution of their
    /// coefficient sequences.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut result = vec![0.0; self.coefficients.len() + other.coefficients.len() - 1];
        for i in 0..self.coefficients.len() {
            for j in 0..other.coefficients.len() {
                result[i + j] += self.coefficients[i] * other.coefficients[j];
            }
        }
        Polynomial::from_ascending(result)
    }

    /// Long division of `self` by `divisor` returning quotient and remainder.
    ///
    /// For dividend A and non-zero divisor B the result (Q, R) satisfies
    /// A = B*Q + R with degree of R lower than degree of B. When degree of A
    /// is already lower than degree of B, Q is the zero polynomial and R = A.
    ///
    /// Each step eliminates the leading remainder term: the ratio of leading
    /// coefficients becomes the quotient coefficient at the current degree
    /// difference and the scaled, shifted divisor is subtracted from the
    /// remainder. The eliminated slot is dropped outright since trusting the
    /// floating point subtraction to leave an exact 0.0 there could stall the
    /// loop on rounding residue.
    /// # Example
    /// ```
    /// use real_polynomial::Polynomial;
    ///
    /// // (x^3 - 2x^2 - x + 4) = (x^2 + 3x + 2) * (x - 5) + (12x + 14)
    /// let dividend = Polynomial::new(vec![1.0, -2.0, -1.0, 4.0]);
    /// let divisor = Polynomial::new(vec![1.0, 3.0, 2.0]);
    ///
    /// let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(Polynomial::new(vec![1.0, -5.0]), quotient);
    /// assert_eq!(Polynomial::new(vec![12.0, 14.0]), remainder);
    /// ```
    /// # Errors
    /// Error is returned when `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial), Box<dyn Error>> {

        if divisor.is_zero() {
            return Err(Box::new(
                PolynomialError("division by zero polynomial".to_string())
            ));
        }
        if self.degree() < divisor.degree() {
            return Ok((Polynomial::zero(), self.clone()));
        }

        let divisor_lead = divisor.leading_coeff();
        let mut quotient = vec![0.0; self.degree() - divisor.degree() + 1];
        let mut remainder = self.coefficients.clone();

        while remainder.len() >= divisor.coefficients.len() {

            if remainder.len() == 1 && remainder[0] == 0.0 {
                break;
            }

            let shift = remainder.len() - divisor.coefficients.len();
            let factor = remainder[remainder.len() - 1] / divisor_lead;
            quotient[shift] = factor;

            for i in 0..divisor.coefficients.len() - 1 {
                remainder[shift + i] -= factor * divisor.coefficients[i];
            }

            // leading term cancels by construction
            remainder.pop();
            while remainder.len() > 1 && *remainder.last().unwrap() == 0.0 {
                remainder.pop();
            }
        }

        Ok((Polynomial::from_ascending(quotient), Polynomial::from_ascending(remainder)))
    }

    /// Quotient of long division, see [Polynomial::div_rem].
    /// # Errors
    /// Error is returned when `other` is the zero polynomial.
    pub fn divide(&self, other: &Polynomial) -> Result<Polynomial, Box<dyn Error>> {
        let (quotient, _) = self.div_rem(other)?;
        Ok(quotient)
    }

    /// Remainder of long division, see [Polynomial::div_rem].
    /// # Errors
    /// Error is returned when `other` is the zero polynomial.
    pub fn remainder(&self, other: &Polynomial) -> Result<Polynomial, Box<dyn Error>> {
        let (_, remainder) = self.div_rem(other)?;
        Ok(remainder)
    }

    /// First derivative of the polynomial.
    pub fn derivative(&self) -> Polynomial {
        if self.degree() == 0 {
            return Polynomial::zero();
        }
        let mut result = Vec::with_capacity(self.coefficients.len() - 1);
        for i in 1..self.coefficients.len() {
            result.push(i as f64 * self.coefficients[i]);
        }
        Polynomial::from_ascending(result)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.subtract(rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.multiply(rhs)
    }
}

impl Div for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    /// Panics when `rhs` is the zero polynomial. Use [Polynomial::divide]
    /// to handle the error instead.
    fn div(self, rhs: &Polynomial) -> Polynomial {
        self.divide(rhs).expect("division by zero polynomial")
    }
}

impl Rem for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    /// Panics when `rhs` is the zero polynomial. Use [Polynomial::remainder]
    /// to handle the error instead.
    fn rem(self, rhs: &Polynomial) -> Polynomial {
        self.remainder(rhs).expect("division by zero polynomial")
    }
}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coefficient in self.coefficients.iter() {
            // fold -0.0 into 0.0 so that equal polynomials hash alike
            let canonical = if *coefficient == 0.0 { 0.0_f64 } else { *coefficient };
            canonical.to_bits().hash(state);
        }
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut leading_term = true;
        for i in (0..self.coefficients.len()).rev() {
            let coefficient = self.coefficients[i];
            if coefficient == 0.0 {
                continue;
            }

            if leading_term {
                if coefficient < 0.0 {
                    write!(f, "-")?;
                }
                leading_term = false;
            } else if coefficient < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let magnitude = coefficient.abs();
            match i {
                0 => write!(f, "{}", magnitude)?,
                1 if magnitude == 1.0 => write!(f, "x")?,
                1 => write!(f, "{}x", magnitude)?,
                _ if magnitude == 1.0 => write!(f, "x^{}", i)?,
                _ => write!(f, "{}x^{}", magnitude, i)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
struct PolynomialError(String);

impl Display for PolynomialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Polynomial: {}", self.0)
    }
}

impl Error for PolynomialError {}
