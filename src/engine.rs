use std::sync::Arc;

use crate::comment::CommentRule;
use crate::indent::{indent_text, outdent_text};
use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::languages::{LanguageRegistry, LanguageRules};
use crate::newline::{backspace, enter};
use crate::pairs::closing_pair_on_key;
use crate::types::{Action, IndentOptions, InputState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Indent,
    Outdent,
    Enter,
    Backspace,
    DeletePair,
    ClosingPair,
    ToggleComment,
    ToggleBlockComment,
}

#[derive(Debug, Clone)]
pub struct Engine {
    options: IndentOptions,
    registry: Arc<LanguageRegistry>,
    language: String,
}

pub struct EngineBuilder {
    options: IndentOptions,
    registry: Option<Arc<LanguageRegistry>>,
    language: String,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            options: IndentOptions::default(),
            registry: None,
            language: String::new(),
        }
    }
}

impl EngineBuilder {
    pub fn indent_options(mut self, options: IndentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.options.tab_size = tab_size.max(1);
        self
    }

    pub fn insert_spaces(mut self, insert_spaces: bool) -> Self {
        self.options.insert_spaces = insert_spaces;
        self
    }

    pub fn registry(mut self, registry: impl Into<Arc<LanguageRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            options: IndentOptions {
                tab_size: self.options.tab_size.max(1),
                ..self.options
            },
            registry: self
                .registry
                .unwrap_or_else(|| Arc::new(LanguageRegistry::with_defaults())),
            language: self.language,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn indent_options(&self) -> IndentOptions {
        self.options
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    fn rules(&self) -> Option<&LanguageRules> {
        self.registry.get(&self.language)
    }

    fn comments(&self) -> Option<&CommentRule> {
        self.rules().and_then(|rules| rules.comments.as_ref())
    }

    fn closing_pair(&self, state: &InputState, key: KeyCode) -> Action {
        self.rules()
            .map(|rules| closing_pair_on_key(state, key, &rules.closing_pairs))
            .unwrap_or_default()
    }

    /// Computes what `key` does to `state`.
    ///
    /// A no-op result means the host should let the key through.
    pub fn handle_key(&self, state: &InputState, key: KeyEvent) -> Action {
        let mods = key.mods;
        let (operation, action) = match key.code {
            KeyCode::Tab if key.has_command_modifier() => return Action::none(),
            KeyCode::Tab if mods.contains(Modifiers::SHIFT) => {
                (Operation::Outdent, outdent_text(state, &self.options))
            }
            KeyCode::Tab => (Operation::Indent, indent_text(state, &self.options)),
            KeyCode::Enter if mods.is_empty() => (Operation::Enter, enter(state, &self.options)),
            KeyCode::Backspace if mods.is_empty() => {
                let action = self.closing_pair(state, KeyCode::Backspace);
                if action.is_noop() {
                    (Operation::Backspace, backspace(state, &self.options))
                } else {
                    (Operation::DeletePair, action)
                }
            }
            KeyCode::Char('/')
                if mods.intersects(Modifiers::CTRL | Modifiers::META)
                    && !mods.contains(Modifiers::ALT) =>
            {
                let action = self
                    .comments()
                    .map(|rule| rule.toggle(state))
                    .unwrap_or_default();
                (Operation::ToggleComment, action)
            }
            KeyCode::Char(c)
                if c.eq_ignore_ascii_case(&'a')
                    && mods.contains(Modifiers::ALT | Modifiers::SHIFT)
                    && !mods.intersects(Modifiers::CTRL | Modifiers::META) =>
            {
                let action = self
                    .comments()
                    .map(|rule| rule.toggle_block(state))
                    .unwrap_or_default();
                (Operation::ToggleBlockComment, action)
            }
            KeyCode::Char(c) if !key.has_command_modifier() => {
                (Operation::ClosingPair, self.closing_pair(state, KeyCode::Char(c)))
            }
            _ => return Action::none(),
        };

        tracing::trace!(
            target: "textarea_keys::engine",
            language = %self.language,
            ?key,
            ?operation,
            edited = !action.is_noop(),
            "handled key"
        );
        action
    }
}
