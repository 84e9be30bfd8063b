pub mod comment;
pub mod engine;
pub mod error;
pub mod indent;
pub mod key;
pub mod languages;
pub mod lines;
pub mod newline;
pub mod offsets;
pub mod pairs;
pub mod traits;
pub mod types;
pub mod width;

pub use crate::comment::{CommentRule, toggle_block_comment, toggle_line_comment};
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::{Error, Result};
pub use crate::indent::{indent_text, outdent_text};
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::languages::{LanguageEntry, LanguageRegistry, LanguageRules};
pub use crate::newline::{backspace, enter};
pub use crate::pairs::{ClosingPairsRules, ResolvedClosingPairs, closing_pair_on_key};
pub use crate::traits::{TextSurface, apply_action};
pub use crate::types::{
    Action, IndentOptions, InputState, PatchAction, PatchMode, SelectAction, SelectionDirection,
};
