//! Running average of unit quaternions.
//!
//! The mean is the normalized arithmetic mean of the quaternion coordinates,
//! not a spherical mean. It is only a good estimate while all samples are
//! close to each other (small angular separation).
//!
//! `q` and `-q` describe the same rotation but cancel when summed, so every
//! sample is first flipped onto the hemisphere of a fixed reference
//! quaternion, conventionally the first sample of the session.

use log::{debug, trace};
use nalgebra::{Quaternion, UnitQuaternion, Vector4};

use crate::error::{Error, Result};

/// Negates all four components. This is not the inverse rotation.
pub fn inverse_sign_quaternion(q: &Quaternion<f32>) -> Quaternion<f32> {
    -*q
}

/// True if `a` and `b` lie on the same hemisphere (`a · b >= 0`).
pub fn are_quaternions_close(a: &Quaternion<f32>, b: &Quaternion<f32>) -> bool {
    a.dot(b) >= 0.0
}

/// Scales `q` by the reciprocal of its magnitude.
pub fn normalize_quaternion(q: &Quaternion<f32>) -> Result<UnitQuaternion<f32>> {
    let norm = q.norm();

    if norm == 0.0 || !norm.is_finite() {
        debug!("refusing to normalize quaternion {:?} with norm {}", q.coords, norm);
        return Err(Error::DegenerateAccumulator);
    }

    let inv_norm = 1.0 / norm;

    Ok(UnitQuaternion::new_unchecked(Quaternion::from(
        q.coords * inv_norm,
    )))
}

fn accumulate(
    cumulative: &mut Vector4<f32>,
    sample: &Quaternion<f32>,
    reference: &Quaternion<f32>,
) {
    if are_quaternions_close(sample, reference) {
        *cumulative += sample.coords;
    } else {
        trace!("flipping sign of sample {:?}", sample.coords);
        *cumulative += inverse_sign_quaternion(sample).coords;
    }
}

fn mean_of(cumulative: &Vector4<f32>, count: u32) -> Result<UnitQuaternion<f32>> {
    if count == 0 {
        return Err(Error::NonPositiveSampleCount(0));
    }

    let scale = 1.0 / count as f32;

    normalize_quaternion(&Quaternion::from(cumulative * scale))
}

/// Folds `new_sample` into a caller-owned accumulator and returns the
/// current mean.
///
/// `add_amount` is the number of samples folded in so far, including this
/// one. `reference` must be the same quaternion on every call of a session.
///
/// Fails without touching `cumulative` if `add_amount <= 0`.
pub fn average_quaternion(
    cumulative: &mut Vector4<f32>,
    new_sample: &Quaternion<f32>,
    reference: &Quaternion<f32>,
    add_amount: i32,
) -> Result<UnitQuaternion<f32>> {
    if add_amount <= 0 {
        return Err(Error::NonPositiveSampleCount(add_amount.into()));
    }

    accumulate(cumulative, new_sample, reference);

    mean_of(cumulative, add_amount as u32)
}

/// Accumulator state of an averaging session.
///
/// Each [`add`](QuaternionAverage::add) returns the next state, so a session
/// is a plain fold over the samples:
///
/// ```
/// use engine_math::QuaternionAverage;
/// use nalgebra::{UnitQuaternion, Vector3};
///
/// let samples = [0.10_f32, 0.12, 0.08]
///     .iter()
///     .map(|&angle| UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle));
///
/// let average = samples.fold(QuaternionAverage::new(), |avg, q| avg.add(&q));
/// let mean = average.mean().unwrap();
///
/// assert!((mean.angle() - 0.10).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuaternionAverage {
    cumulative: Vector4<f32>,
    count: u32,
    reference: Option<Quaternion<f32>>,
}

impl Default for QuaternionAverage {
    fn default() -> Self {
        Self::new()
    }
}

impl QuaternionAverage {
    /// Empty session. The first added sample becomes the reference.
    pub fn new() -> Self {
        Self {
            cumulative: Vector4::zeros(),
            count: 0,
            reference: None,
        }
    }

    /// Empty session with a fixed sign reference.
    pub fn with_reference(reference: Quaternion<f32>) -> Self {
        Self {
            reference: Some(reference),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn add(mut self, sample: &Quaternion<f32>) -> Self {
        let reference = *self.reference.get_or_insert(*sample);

        accumulate(&mut self.cumulative, sample, &reference);
        self.count += 1;

        self
    }

    /// Current mean estimate. Fails if no sample has been added.
    pub fn mean(&self) -> Result<UnitQuaternion<f32>> {
        mean_of(&self.cumulative, self.count)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn cumulative(&self) -> &Vector4<f32> {
        &self.cumulative
    }

    pub fn reference(&self) -> Option<&Quaternion<f32>> {
        self.reference.as_ref()
    }
}
