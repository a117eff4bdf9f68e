//! Chain expression handling: tokenization and assignment scanning.
//!
//! A *chain* is a dotted/colon navigation path ending at the cursor, e.g.
//! `game.Lighting.Ambient` or `part.Touched:Connect(`. The tokenizer splits
//! it into separator-tagged tokens; the assignment scanner is the resolver's
//! first-token fallback, following `local <name> = <rhs>` lines textually.

mod assignment;
mod tokenizer;

pub use assignment::{AssignmentMatch, last_local_assignment};
pub use tokenizer::{ChainToken, Separator, tokenize};
