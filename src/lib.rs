//! Small numeric helpers for a game engine: integer GCD, nearest point in an
//! integer box, and a running quaternion average.

pub mod bounds;
pub mod error;
pub mod gcd;
pub mod parser;
pub mod quaternion;

pub use bounds::{closest_point_in_box, BoundsInt};
pub use error::{Error, Result};
pub use gcd::{gcd, gcd2, gcd3, gcd_all};
pub use quaternion::{
    are_quaternions_close, average_quaternion, inverse_sign_quaternion, normalize_quaternion,
    QuaternionAverage,
};
