//! # Line BASIC
//!
//! A small line-numbered BASIC with integer variables.
//!
//! The [`lang`] module turns text into statements. The [`mach`] module
//! stores numbered lines and runs them.
//!
//! ```
//! use basic::mach::{Runtime, Transcript};
//!
//! let mut runtime = Runtime::new();
//! let mut console = Transcript::new();
//! runtime.enter("10 LET X = 6", &mut console).unwrap();
//! runtime.enter("20 PRINT X * 7", &mut console).unwrap();
//! runtime.enter("RUN", &mut console).unwrap();
//! assert_eq!(console.output(), "42\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
