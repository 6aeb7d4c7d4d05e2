/// closed-form equations and integrands the problem generator draws from
pub mod function_catalog;
/// Lagrange, Newton forward/backward and divided-difference interpolation
///  Example
/// ```
/// use RustedNumDrill::numerical::inter_n_extrapolate::{lagrange, Point};
/// let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(4.0, 2.0)];
/// let y = lagrange(2.0, &points);
/// assert!((y - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub mod inter_n_extrapolate;
/// ground-truth polynomials with Horner evaluation
pub mod polynomial;
/// trapezoidal, Simpson 1/3, Simpson 3/8 and open/closed Newton-Cotes rules
pub mod quadrature;
/// bisection, false position, fixed point, Newton-Raphson and secant methods for f(x) = 0
pub mod scalar_roots;
