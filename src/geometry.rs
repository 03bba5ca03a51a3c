use crate::error::{QuatError, QuatResult};
use crate::quaternion::{Quaternion, FP_BOUND};

impl Quaternion {
    /// Rotates a 3D point by this quaternion.
    ///
    /// The point is embedded as a pure imaginary quaternion and conjugated
    /// by a normalized copy of the receiver, `q⁻¹ · p · q`;
    /// [`rotate_point_passive`](Self::rotate_point_passive) applies the
    /// opposite conjugation.
    pub fn rotate_point(&self, point: [f64; 3]) -> QuatResult<[f64; 3]> {
        let p = Self::new(0.0, point[0], point[1], point[2]);
        let unit = self.normalize()?;

        Ok((unit.inverse()? * p * unit).vector())
    }

    /// The passive (inverse) rotation of a 3D point, `q · p · q⁻¹`.
    pub fn rotate_point_passive(&self, point: [f64; 3]) -> QuatResult<[f64; 3]> {
        let p = Self::new(0.0, point[0], point[1], point[2]);
        let unit = self.normalize()?;

        Ok((unit * p * unit.inverse()?).vector())
    }

    /// Euclidean dot product of the vector parts.
    pub fn dot(&self, other: Self) -> f64 {
        self.i*other.i + self.j*other.j + self.k*other.k
    }

    /// Cross product of the vector parts, relative to the orientation
    /// determined by the ordered basis 𝐢, 𝐣, 𝐤 of R3.
    pub fn cross(&self, other: Self) -> [f64; 3] {
        [
            self.j*other.k - self.k*other.j,
            self.k*other.i - self.i*other.k,
            self.i*other.j - self.j*other.i,
        ]
    }

    /// Commutator of the vector parts: twice their cross product.
    pub fn commutator(&self, other: Self) -> [f64; 3] {
        let cross = self.cross(other);
        [2.0*cross[0], 2.0*cross[1], 2.0*cross[2]]
    }

    /// Quaternionic exponential. The vector norm divides the direction, so a
    /// real quaternion is a zero division.
    pub fn exp(&self) -> QuatResult<Self> {
        if self.is_real() {
            return Err(QuatError::ZeroDivision);
        }
        let v_norm = (self.i*self.i + self.j*self.j + self.k*self.k).sqrt();
        let ecos = self.real.exp() * v_norm.cos();
        let esin = self.real.exp() * v_norm.sin();

        Ok(Self::new(
            ecos,
            self.i/v_norm * esin,
            self.j/v_norm * esin,
            self.k/v_norm * esin,
        ))
    }

    /// Quaternionic base-2 logarithm, with the same realness restriction as
    /// [`exp`](Self::exp).
    pub fn log2(&self) -> QuatResult<Self> {
        if self.is_real() {
            return Err(QuatError::ZeroDivision);
        }
        let v_norm = (self.i*self.i + self.j*self.j + self.k*self.k).sqrt();
        let angle = (self.real/v_norm).acos();

        Ok(Self::new(
            v_norm.log2(),
            self.i/v_norm * angle,
            self.j/v_norm * angle,
            self.k/v_norm * angle,
        ))
    }

    /// Geodesic distance between two unit quaternions: the absolute angle
    /// subtended by them along a great arc of the 3-sphere.
    pub fn geodesic_dist(&self, other: Self) -> QuatResult<f64> {
        if (self.norm() - 1.0).abs() > FP_BOUND || (other.norm() - 1.0).abs() > FP_BOUND {
            return Err(QuatError::NotUnit);
        }
        let dot = self.dot(other);

        Ok((2.0*dot*dot - 1.0).acos())
    }
}




#[test]
fn dot_and_cross_use_the_vector_parts() {
    let q1 = Quaternion::new(9.0, 4.0, 3.0, 6.0);
    let q2 = Quaternion::new(-5.0, 2.0, 9.0, 3.0);

    assert!(q1.dot(q2) == 53.0);
    assert!(q1.cross(q2) == [-45.0, 0.0, 30.0]);
    assert!(q1.commutator(q2) == [-90.0, 0.0, 60.0]);
}

#[test]
fn rotating_the_x_axis_about_z() {
    let quat = Quaternion::from_rotation(90.0, [0.0, 0.0, 1.0]);

    let active = quat.rotate_point([1.0, 0.0, 0.0]).unwrap();
    assert!(active[0].abs() <= FP_BOUND);
    assert!((active[1] + 1.0).abs() <= FP_BOUND);
    assert!(active[2].abs() <= FP_BOUND);

    let passive = quat.rotate_point_passive([1.0, 0.0, 0.0]).unwrap();
    assert!(passive[0].abs() <= FP_BOUND);
    assert!((passive[1] - 1.0).abs() <= FP_BOUND);
    assert!(passive[2].abs() <= FP_BOUND);
}

#[test]
fn rotating_by_the_zero_quaternion_fails() {
    let zero = Quaternion::zero();
    assert!(zero.rotate_point([1.0, 0.0, 0.0]) == Err(QuatError::ZeroDivision));
}

#[test]
fn exponential_of_a_pure_imaginary() {
    use std::f64::consts::PI;

    let quat = Quaternion::new(0.0, PI, 0.0, 0.0);
    assert!(quat.exp().unwrap() == Quaternion::new(-1.0, 0.0, 0.0, 0.0));

    assert!(Quaternion::new(2.0, 0.0, 0.0, 0.0).exp() == Err(QuatError::ZeroDivision));
}

#[test]
fn logarithm_of_a_pure_imaginary() {
    use std::f64::consts::FRAC_PI_2;

    let quat = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    assert!(quat.log2().unwrap() == Quaternion::new(0.0, FRAC_PI_2, 0.0, 0.0));

    assert!(Quaternion::identity().log2() == Err(QuatError::ZeroDivision));
}

#[test]
fn geodesic_distance_needs_unit_arguments() {
    use std::f64::consts::PI;

    let quat = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    assert!(quat.geodesic_dist(quat).unwrap() == 0.0);

    let far = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    assert!((quat.geodesic_dist(far).unwrap() - PI).abs() <= FP_BOUND);

    let fat = Quaternion::new(2.0, 0.0, 0.0, 0.0);
    assert!(quat.geodesic_dist(fat) == Err(QuatError::NotUnit));
}
