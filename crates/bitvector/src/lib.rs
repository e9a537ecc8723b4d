//! A growable vector of bits packed into 64-bit limbs.
//!
//! ## Usage
//!
//! ```
//! use bitvector::BitVector;
//!
//! let mut bits = BitVector::init(10)?;
//! bits.push(true)?;
//! bits.push(false)?;
//! assert!(bits.get(0)?);
//! assert!(bits.get(2).is_err());
//!
//! // Read as a little-endian binary number, 0b01 + 1 = 0b10.
//! assert!(!bits.increment());
//! assert_eq!(bits.iter().collect::<Vec<_>>(), [false, true]);
//!
//! assert_eq!(bits.pop(), Some(true));
//! # Ok::<(), bitvector::Error>(())
//! ```
pub mod limb;

mod bitvector;
mod error;
mod iter;

pub use bitvector::BitVector;
pub use error::Error;
pub use iter::Iter;
