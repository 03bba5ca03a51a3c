use std::f64::consts::TAU;
use std::fmt;
use std::iter::Sum;
use std::ops::{Neg, Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign};

use approx::AbsDiffEq;

use crate::error::{QuatError, QuatResult};
use crate::random::Randf64;

/// Default floating point bound. Magnitudes at or below it are treated as
/// zero by comparisons, classification and invertibility checks; comparisons
/// that need a different bound take it explicitly.
pub const FP_BOUND: f64 = 1e-13;

/// A number of the form `real + i𝐢 + j𝐣 + k𝐤`, with the Hamilton product
/// rules 𝐢² = 𝐣² = 𝐤² = -1, 𝐢𝐣 = 𝐤, 𝐣𝐤 = 𝐢, 𝐤𝐢 = 𝐣.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quaternion {
    pub real: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}
impl Quaternion {
    pub fn new(real: f64, i: f64, j: f64, k: f64) -> Self {
        Self { real, i, j, k }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The real unit quaternion 1.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Builds the quaternion encoding a rotation of `theta` degrees around
    /// `axis`: `cos(θ/2) + sin(θ/2)(x𝐢 + y𝐣 + z𝐤)`.
    pub fn from_rotation(theta: f64, axis: [f64; 3]) -> Self {
        let (sin, cos) = (theta.to_radians() / 2.0).sin_cos();
        Self::new(cos, axis[0]*sin, axis[1]*sin, axis[2]*sin)
    }

    /// Uniformly distributed quaternion on the unit 3-sphere.
    ///
    /// The trigonometric parametrization lands on the sphere by construction;
    /// the draw is retried on the rare rounding miss, so the result passes
    /// the exact [`is_unit`](Self::is_unit) check.
    pub fn random_unit(rand: &mut Randf64) -> Self {
        loop {
            let (a, b, c) = (rand.next(), rand.next(), rand.next());
            let r = (1.0 - a).sqrt() * (TAU * b).sin();
            let i = (1.0 - a).sqrt() * (TAU * b).cos();
            let j = a.sqrt() * (TAU * c).sin();
            let k = a.sqrt() * (TAU * c).cos();

            if r*r + i*i + j*j + k*k == 1.0 {
                return Self::new(r, i, j, k);
            }
        }
    }

    /// Fills all four components with independent uniform draws from
    /// `[low, high]`. A reversed interval is swapped; a degenerate one fills
    /// every component with that exact value.
    pub fn random_in(rand: &mut Randf64, low: f64, high: f64) -> Self {
        if low == high {
            return Self::new(low, low, low, low);
        }
        let range = if low > high { high..low } else { low..high };
        Self::new(
            rand.next_in(range.clone()),
            rand.next_in(range.clone()),
            rand.next_in(range.clone()),
            rand.next_in(range),
        )
    }

    /// [`random_in`](Self::random_in) over the default interval [-50, 50].
    pub fn random(rand: &mut Randf64) -> Self {
        Self::random_in(rand, -50.0, 50.0)
    }

    /// The imaginary parts as an owned triple.
    pub fn vector(&self) -> [f64; 3] {
        [self.i, self.j, self.k]
    }

    /// The axis-angle rotation `[angle, x, y, z]` this quaternion encodes.
    ///
    /// A non-unit quaternion is normalized on a local copy first; the
    /// receiver is never touched. A real part of exactly 1.0 is the pole of
    /// the conversion map and returns the identity rotation `[0, 1, 0, 0]`.
    pub fn rotation(&self) -> QuatResult<[f64; 4]> {
        if self.real == 1.0 {
            return Ok([0.0, 1.0, 0.0, 0.0]);
        }
        let unit = self.normalize()?;
        let theta = 2.0 * unit.real.acos();
        let sin = (theta / 2.0).sin();

        Ok([theta, unit.i/sin, unit.j/sin, unit.k/sin])
    }

    pub fn norm(&self) -> f64 {
        self.square_norm().sqrt()
    }

    pub fn square_norm(&self) -> f64 {
        self.real*self.real + self.i*self.i + self.j*self.j + self.k*self.k
    }

    /// Whether the quaternion lies exactly on the unit 3-sphere.
    ///
    /// The check is exact, unlike the tolerance-based `==`: a quaternion can
    /// compare equal to the identity and still not be a unit.
    pub fn is_unit(&self) -> bool {
        self.square_norm() == 1.0
    }

    /// Whether all three imaginary parts are within [`FP_BOUND`] of zero.
    pub fn is_real(&self) -> bool {
        self.is_real_within(FP_BOUND)
    }

    pub fn is_real_within(&self, bound: f64) -> bool {
        self.i.abs() <= bound && self.j.abs() <= bound && self.k.abs() <= bound
    }

    /// Whether the real part is negligible while some imaginary part is not.
    pub fn is_imagy(&self) -> bool {
        self.is_imagy_within(FP_BOUND)
    }

    pub fn is_imagy_within(&self, bound: f64) -> bool {
        self.real.abs() <= bound && !self.is_real_within(bound)
    }

    pub fn near_zero(&self) -> bool {
        self.real.abs() <= FP_BOUND && self.is_real()
    }

    /// Returns the conjugated quaternion, with the signs of the imaginary
    /// parts reversed.
    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.i, -self.j, -self.k)
    }

    pub fn conjugate_ip(&mut self) -> &mut Self {
        self.i = -self.i;
        self.j = -self.j;
        self.k = -self.k;
        self
    }

    /// Returns the multiplicative inverse, `conjugate / square_norm`.
    pub fn inverse(&self) -> QuatResult<Self> {
        let n2 = self.square_norm();
        if n2 <= FP_BOUND {
            return Err(QuatError::ZeroDivision);
        }
        Ok(Self::new(self.real/n2, -self.i/n2, -self.j/n2, -self.k/n2))
    }

    /// Inverts in place. The receiver is untouched on error.
    pub fn inverse_ip(&mut self) -> QuatResult<&mut Self> {
        let n2 = self.square_norm();
        if n2 <= FP_BOUND {
            return Err(QuatError::ZeroDivision);
        }
        self.real /= n2;
        self.i /= -n2;
        self.j /= -n2;
        self.k /= -n2;
        Ok(self)
    }

    /// Returns the normalized quaternion.
    pub fn normalize(&self) -> QuatResult<Self> {
        let n = self.norm();
        if n <= FP_BOUND {
            return Err(QuatError::ZeroDivision);
        }
        Ok(Self::new(self.real/n, self.i/n, self.j/n, self.k/n))
    }

    /// Normalizes in place. A norm of exactly 1.0 skips the division and
    /// leaves the fields untouched; the pure [`normalize`](Self::normalize)
    /// always recomputes. The receiver is untouched on error.
    pub fn normalize_ip(&mut self) -> QuatResult<&mut Self> {
        let n = self.norm();
        if n <= FP_BOUND {
            return Err(QuatError::ZeroDivision);
        }
        if n != 1.0 {
            self.real /= n;
            self.i /= n;
            self.j /= n;
            self.k /= n;
        }
        Ok(self)
    }

    /// Quaternionic division `self * other.inverse()`.
    ///
    /// The product is not commutative, so the divisor's inverse is applied
    /// on the right; `a.divide(b)` and `b.inverse() * a` differ in general.
    pub fn divide(self, other: Self) -> QuatResult<Self> {
        Ok(self * other.inverse()?)
    }

    /// In-place division. The receiver is untouched on error.
    pub fn divide_ip(&mut self, other: Self) -> QuatResult<&mut Self> {
        let inv = other.inverse()?;
        *self *= inv;
        Ok(self)
    }

    /// Integer power by repeated Hamilton multiplication.
    ///
    /// `powi(0)` is the identity; a negative exponent goes through the
    /// inverse and fails on an effectively zero quaternion.
    pub fn powi(self, power: i32) -> QuatResult<Self> {
        if power == 0 {
            return Ok(Self::identity());
        }
        let base = if power > 0 { self } else { self.inverse()? };
        let mut h = base;
        for _ in 1..power.unsigned_abs() {
            h *= base;
        }
        Ok(h)
    }

    /// In-place integer power. The receiver is untouched on error.
    pub fn powi_ip(&mut self, power: i32) -> QuatResult<&mut Self> {
        if power == 0 {
            *self = Self::identity();
            return Ok(self);
        }
        if power < 0 {
            self.inverse_ip()?;
        }
        let h = *self;
        for _ in 1..power.unsigned_abs() {
            *self *= h;
        }
        Ok(self)
    }

    /// Scales the quaternion onto the sphere of the given radius.
    pub fn homothety(self, radius: f64) -> QuatResult<Self> {
        Ok(self.normalize()? * radius)
    }

    /// In-place homothety, built on [`normalize_ip`](Self::normalize_ip).
    pub fn homothety_ip(&mut self, radius: f64) -> QuatResult<&mut Self> {
        self.normalize_ip()?;
        *self *= radius;
        Ok(self)
    }

    /// Projects onto the real part truncated to an integer; the imaginary
    /// parts are discarded.
    pub fn to_int(&self) -> i32 {
        self.real as i32
    }

    pub fn to_float(&self) -> f32 {
        self.real as f32
    }

    pub fn to_double(&self) -> f64 {
        self.real
    }

    /// Rounds every component to `decimals` decimal places.
    pub fn round(self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);
        Self::new(
            (self.real * scale).round() / scale,
            (self.i * scale).round() / scale,
            (self.j * scale).round() / scale,
            (self.k * scale).round() / scale,
        )
    }
}

impl PartialEq for Quaternion {
    /// Two quaternions are equal when the norm of their difference is within
    /// [`FP_BOUND`]; `!=` is the strict complement.
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).norm() <= FP_BOUND
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        FP_BOUND
    }

    /// The `==` predicate with an explicit bound.
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        (*self - *other).norm() <= epsilon
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.i, -self.j, -self.k)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, other: Self) {
        self.real += other.real;
        self.i += other.i;
        self.j += other.j;
        self.k += other.k;
    }
}

impl Add<f64> for Quaternion {
    type Output = Self;

    fn add(self, other: f64) -> Self::Output {
        Self::new(self.real + other, self.i, self.j, self.k)
    }
}

impl AddAssign<f64> for Quaternion {
    fn add_assign(&mut self, other: f64) {
        self.real += other;
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self::Output {
        self -= other;
        self
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, other: Self) {
        self.real -= other.real;
        self.i -= other.i;
        self.j -= other.j;
        self.k -= other.k;
    }
}

impl Sub<f64> for Quaternion {
    type Output = Self;

    fn sub(self, other: f64) -> Self::Output {
        Self::new(self.real - other, self.i, self.j, self.k)
    }
}

impl SubAssign<f64> for Quaternion {
    fn sub_assign(&mut self, other: f64) {
        self.real -= other;
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(mut self, other: Self) -> Self::Output {
        self *= other;
        self
    }
}

impl MulAssign for Quaternion {
    /// Hamilton product: `𝐢𝐣 = 𝐤` but `𝐣𝐢 = -𝐤`, so `a*b != b*a` in general.
    fn mul_assign(&mut self, other: Self) {
        let real = self.real*other.real - self.i*other.i - self.j*other.j - self.k*other.k;
        let i = self.real*other.i + self.i*other.real + self.j*other.k - self.k*other.j;
        let j = self.real*other.j + self.j*other.real - self.i*other.k + self.k*other.i;
        let k = self.real*other.k + self.k*other.real + self.i*other.j - self.j*other.i;

        *self = Self::new(real, i, j, k);
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.real * other, self.i * other, self.j * other, self.k * other)
    }
}

impl MulAssign<f64> for Quaternion {
    fn mul_assign(&mut self, other: f64) {
        self.real *= other;
        self.i *= other;
        self.j *= other;
        self.k *= other;
    }
}

impl Div for Quaternion {
    type Output = Self;

    /// Operator sugar for [`Quaternion::divide`].
    ///
    /// # Panics
    ///
    /// Panics on an effectively zero divisor, like integer division by zero;
    /// [`Quaternion::divide`] is the fallible form.
    fn div(self, other: Self) -> Self::Output {
        match self.divide(other) {
            Ok(quat) => quat,
            Err(e) => panic!("{e}"),
        }
    }
}

impl DivAssign for Quaternion {
    fn div_assign(&mut self, other: Self) {
        if let Err(e) = self.divide_ip(other) {
            panic!("{e}");
        }
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.real / other, self.i / other, self.j / other, self.k / other)
    }
}

impl DivAssign<f64> for Quaternion {
    fn div_assign(&mut self, other: f64) {
        self.real /= other;
        self.i /= other;
        self.j /= other;
        self.k /= other;
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Quaternion {
        Quaternion::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(quat: Quaternion) -> [f64; 4] {
        [quat.real, quat.i, quat.j, quat.k]
    }
}

impl<'a> Sum<&'a Quaternion> for Quaternion {
    fn sum<I>(iter: I) -> Self where I: Iterator<Item = &'a Self> {
        iter.fold(Quaternion::zero(), |acc, quat| acc + *quat)
    }
}

impl fmt::Display for Quaternion {
    /// Renders as `real±i𝐢±j𝐣±k𝐤`, newline terminated, with an explicit `+`
    /// on non-negative components and shortest round-trip decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |x: f64| if x >= 0.0 { "+" } else { "" };
        writeln!(f, "{}{}{}i{}{}j{}{}k",
            self.real,
            sign(self.i), self.i,
            sign(self.j), self.j,
            sign(self.k), self.k,
        )
    }
}




#[test]
fn additive_identities() {
    let quat = Quaternion::new(1.5, -2.0, 3.0, 0.5);

    assert!(quat + -quat == Quaternion::zero());
    assert!(quat + 0.0 == quat);

    let total: Quaternion = [quat, -quat].iter().sum();
    assert!(total == Quaternion::zero());
}

#[test]
fn multiplying_by_the_inverse_recovers_the_identity() {
    let quat = Quaternion::new(1.0, -2.0, 4.0, 8.0);
    assert!(quat * quat.inverse().unwrap() == Quaternion::identity());
}

#[test]
fn hamilton_product_is_not_commutative() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    assert!(i * j == k);
    assert!(j * i == -k);
    assert!(i * j != j * i);
}

#[test]
fn division_right_multiplies_by_the_inverse() {
    let x = Quaternion::new(0.0, 1.0, 1.0, 1.0);
    let y = Quaternion::new(1.0, -1.0, 1.0, 4.0);

    assert!(x / y == x * y.inverse().unwrap());
    assert!(y / x == y * x.inverse().unwrap());
    assert!(x / y != y / x);

    let mut z = x;
    z /= y;
    assert!(z == x / y);
}

#[test]
fn conjugation_is_an_involution() {
    let quat = Quaternion::new(0.3, -1.7, 2.2, -9.1);
    let back = quat.conjugate().conjugate();

    assert!(back.real == quat.real && back.i == quat.i);
    assert!(back.j == quat.j && back.k == quat.k);

    let mut ip = quat;
    ip.conjugate_ip();
    assert!(ip == quat.conjugate());
}

#[test]
fn normalizing_lands_within_the_bound_of_unit_norm() {
    let quat = Quaternion::new(3.0, -4.0, 12.0, 0.5);
    assert!((quat.normalize().unwrap().norm() - 1.0).abs() <= FP_BOUND);
}

#[test]
fn normalize_ip_skips_exact_units() {
    let mut unit = Quaternion::new(0.6, 0.8, 0.0, 0.0);
    unit.normalize_ip().unwrap();
    assert!(unit.real == 0.6 && unit.i == 0.8);

    let mut quat = Quaternion::new(2.0, 0.0, 0.0, 0.0);
    quat.normalize_ip().unwrap();
    assert!(quat.real == 1.0);
}

#[test]
fn is_unit_is_exact_while_eq_is_tolerant() {
    let quat = Quaternion::new(1.0 + 1e-14, 0.0, 0.0, 0.0);

    assert!(quat == Quaternion::identity());
    assert!(!quat.is_unit());
    assert!(Quaternion::new(0.6, 0.8, 0.0, 0.0).is_unit());
}

#[test]
fn integer_powers() {
    let quat = Quaternion::new(1.0, -1.0, 0.5, 2.0);

    assert!(quat.powi(0).unwrap() == Quaternion::identity());
    assert!(quat.powi(2).unwrap() == quat * quat);
    assert!(quat.powi(3).unwrap() == quat * quat * quat);

    let inv = quat.inverse().unwrap();
    assert!(quat.powi(-2).unwrap() == inv.powi(2).unwrap());

    let mut ip = quat;
    ip.powi_ip(-2).unwrap();
    assert!(ip == inv * inv);

    let mut one = quat;
    one.powi_ip(0).unwrap();
    assert!(one == Quaternion::identity());
}

#[test]
fn classification() {
    let real = Quaternion::new(4.2, 0.0, 0.0, 0.0);
    assert!(real.is_real());
    assert!(!real.is_imagy());

    let imagy = Quaternion::new(0.0, 1.0, 0.0, 2.0);
    assert!(!imagy.is_real());
    assert!(imagy.is_imagy());

    assert!(Quaternion::zero().is_real());
    assert!(!Quaternion::zero().is_imagy());
    assert!(Quaternion::zero().near_zero());
}

#[test]
fn zero_division_errors() {
    let zero = Quaternion::zero();

    assert!(zero.inverse() == Err(QuatError::ZeroDivision));
    assert!(zero.normalize() == Err(QuatError::ZeroDivision));
    assert!(zero.homothety(2.0) == Err(QuatError::ZeroDivision));
    assert!(Quaternion::identity().divide(zero) == Err(QuatError::ZeroDivision));
}

#[test]
fn failed_in_place_ops_leave_the_receiver_untouched() {
    // square norm 1e-16 is below the bound, but the norm 1e-8 is not
    let mut tiny = Quaternion::new(1e-8, 0.0, 0.0, 0.0);
    assert!(tiny.inverse_ip().is_err());
    assert!(tiny.real == 1e-8 && tiny.i == 0.0);
    assert!(tiny.normalize_ip().is_ok());

    let mut zero = Quaternion::zero();
    assert!(zero.normalize_ip().is_err());
    assert!(zero.real == 0.0);
}

#[test]
#[should_panic]
fn dividing_by_the_zero_quaternion_panics() {
    let _ = Quaternion::identity() / Quaternion::zero();
}

#[test]
fn homothety_scales_onto_the_radius() {
    let quat = Quaternion::new(1.0, 2.0, -2.0, 4.0);

    let scaled = quat.homothety(3.0).unwrap();
    assert!((scaled.norm() - 3.0).abs() <= FP_BOUND);

    let mut ip = quat;
    ip.homothety_ip(3.0).unwrap();
    assert!(ip == scaled);
}

#[test]
fn scalar_operands() {
    let quat = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert!(quat + 2.0 == Quaternion::new(3.0, 2.0, 3.0, 4.0));
    assert!(quat - 0.5 == Quaternion::new(0.5, 2.0, 3.0, 4.0));
    assert!(quat * 2.0 == Quaternion::new(2.0, 4.0, 6.0, 8.0));
    assert!(quat / 2.0 == Quaternion::new(0.5, 1.0, 1.5, 2.0));

    let mut ip = quat;
    ip += 1.0;
    ip -= 1.0;
    ip *= 2.0;
    ip /= 2.0;
    assert!(ip == quat);
}

#[test]
fn real_projections() {
    let quat = Quaternion::new(3.7, -1.0, 2.0, 5.0);

    assert!(quat.to_int() == 3);
    assert!(quat.to_float() == 3.7f32);
    assert!(quat.to_double() == 3.7);
}

#[test]
fn axis_angle_round_trip() {
    use std::f64::consts::FRAC_PI_2;

    let quat = Quaternion::from_rotation(90.0, [1.0, 0.0, 0.0]);
    let rot = quat.rotation().unwrap();

    assert!((rot[0] - FRAC_PI_2).abs() <= 1e-12);
    assert!((rot[1] - 1.0).abs() <= 1e-12);
    assert!(rot[2].abs() <= 1e-12 && rot[3].abs() <= 1e-12);

    assert!(Quaternion::identity().rotation().unwrap() == [0.0, 1.0, 0.0, 0.0]);
    assert!(Quaternion::zero().rotation().is_err());
}

#[test]
fn vector_returns_the_imaginary_triple() {
    let quat = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(quat.vector() == [2.0, 3.0, 4.0]);
}

#[test]
fn random_unit_lies_exactly_on_the_unit_sphere() {
    let mut rand = Randf64::seed(7);
    for _ in 0..100 {
        assert!(Quaternion::random_unit(&mut rand).is_unit());
    }
}

#[test]
fn random_in_respects_the_interval() {
    let mut rand = Randf64::seed(99);
    for _ in 0..100 {
        let quat = Quaternion::random_in(&mut rand, -2.0, 3.0);
        for x in <[f64; 4]>::from(quat) {
            assert!((-2.0..=3.0).contains(&x));
        }
    }

    // reversed bounds sample the same interval
    let quat = Quaternion::random_in(&mut rand, 3.0, -2.0);
    for x in <[f64; 4]>::from(quat) {
        assert!((-2.0..=3.0).contains(&x));
    }

    // degenerate interval fills exactly
    let quat = Quaternion::random_in(&mut rand, 1.5, 1.5);
    assert!(<[f64; 4]>::from(quat) == [1.5; 4]);
}

#[test]
fn bound_can_be_widened_per_comparison() {
    use approx::abs_diff_eq;

    let a = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    let b = Quaternion::new(1.0, 1e-6, 0.0, 0.0);

    assert!(a != b);
    assert!(abs_diff_eq!(a, b, epsilon = 1e-5));
    assert!(!abs_diff_eq!(a, b));
}

#[test]
fn rendering() {
    assert!(Quaternion::new(1.0, -1.0, 1.0, 4.0).to_string() == "1-1i+1j+4k\n");
    assert!(Quaternion::zero().to_string() == "0+0i+0j+0k\n");
    assert!(Quaternion::new(0.5, 0.25, -0.125, 0.0).to_string() == "0.5+0.25i-0.125j+0k\n");
}

#[test]
fn rounding() {
    let quat = Quaternion::new(1.2345, -0.0049, 2.5551, 0.0).round(2);
    assert!(quat.real == 1.23 && quat.i == 0.0);
    assert!(quat.j == 2.56 && quat.k == 0.0);
}

#[test]
fn array_conversions() {
    let quat = Quaternion::from([1.0, 2.0, 3.0, 4.0]);
    assert!(quat == Quaternion::new(1.0, 2.0, 3.0, 4.0));

    let arr: [f64; 4] = bytemuck::cast(quat);
    assert!(arr == <[f64; 4]>::from(quat));
}
