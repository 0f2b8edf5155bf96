//! # Structural Sequences
//!
//! An immutable cons sequence and the structural-recursion algebra around it.
//!
//! ## Modules
//!
//! - [`sequence`]: the [`Sequence`] type, construction and structural accessors
//! - [`fold`]: `fold_right`, `fold_left` and operations derived from them
//! - [`transform`]: append, map, filter, flat_map, zip_with and prefix search
//! - [`numeric`]: sums and products over number sequences
//! - [`error`]: [`EmptyStructureError`]
//!
//! ## Design Principles
//!
//! 1. **Immutable**: every operation returns a new sequence; nothing is mutated
//! 2. **Shared, not copied**: surviving tails are reused through `Rc`
//! 3. **Fold first**: derived operations go through `fold_right` where it fits
//! 4. **Stack safe**: traversals and destruction run in constant stack space
//!
//! ## Example
//!
//! ```
//! use structural_sequence::Sequence;
//!
//! let s: Sequence<i64> = (1..=5).collect();
//! assert_eq!(s.sum(), 15);
//! assert_eq!(s.filter(|x| x % 2 == 1).to_string(), "[1, 3, 5]");
//! assert_eq!(s.reverse().head(), Some(&5));
//! ```

pub mod error;
pub mod fold;
pub mod numeric;
pub mod sequence;
pub mod transform;

pub use error::{EmptyStructureError, Result};
pub use sequence::{Cons, Iter, Sequence};
