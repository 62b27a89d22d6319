//! libdwarf-fixup - patches the generated `libdwarf.h` so it can be included
//! alongside `libelf.h`.
//!
//! The patch pass is line oriented and applies two exact-match rules:
//! - `#define _LIBDWARF_H` is followed by an inserted `#include <libelf.h>`
//! - `typedef struct Elf Elf;` is removed
//!
//! # Example
//!
//! ```no_run
//! use libdwarf_fixup::patch;
//! use std::path::Path;
//!
//! let stats = patch(Path::new("libdwarf.h.in"), Path::new("libdwarf.h")).unwrap();
//! println!("removed {} typedef(s)", stats.typedefs_removed);
//! ```

pub mod error;
pub mod patch;
pub mod rules;

pub use error::{FixupError, Result};
pub use patch::{PatchStats, patch, patch_stream};
