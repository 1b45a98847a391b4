//! The built-in system prompt.
//!
//! The skeleton in `templates/system.md` has five fragment slots, each
//! chosen by a narrow slice of the context:
//!
//! | slot               | chosen by                        | variants |
//! |--------------------|----------------------------------|----------|
//! | `workflow`         | investigator available           | 2        |
//! | `sandbox`          | sandbox mode                     | 3        |
//! | `repository`       | is repository                    | 0 or 1   |
//! | `refactor_example` | investigator available, repository | 2 (+1 line) |
//! | `lookup_example`   | investigator available           | 2        |
//!
//! Tool-name slots (`{read_file_tool}` and friends) are filled from
//! [`ToolNames`] in the skeleton and inside every fragment.
//!
//! Optional fragments carry their own leading separator, so an absent
//! fragment leaves no blank line behind.

use super::template::{Slots, TemplateError, render, slots};
use crate::config::ToolNames;
use crate::context::{PromptContext, SandboxMode};
use serde::Serialize;

/// Embedded template text (canonical source: `templates/`), trimmed.
macro_rules! embed_template {
    ($name:literal) => {
        include_str!(concat!("../../templates/", $name)).trim_ascii()
    };
}

const SKELETON: &str = embed_template!("system.md");

const WORKFLOW_INVESTIGATOR: &str = embed_template!("fragments/workflow_investigator.md");
const WORKFLOW_SEARCH: &str = embed_template!("fragments/workflow_search.md");

const SANDBOX_RESTRICTED_HOST: &str = embed_template!("fragments/sandbox_restricted_host.md");
const SANDBOX_CONTAINER: &str = embed_template!("fragments/sandbox_container.md");
const SANDBOX_NONE: &str = embed_template!("fragments/sandbox_none.md");

const REPOSITORY: &str = embed_template!("fragments/repository.md");

const REFACTOR_INVESTIGATOR: &str = embed_template!("fragments/example_refactor_investigator.md");
const REFACTOR_SEARCH: &str = embed_template!("fragments/example_refactor_search.md");
const LOOKUP_INVESTIGATOR: &str = embed_template!("fragments/example_lookup_investigator.md");
const LOOKUP_SEARCH: &str = embed_template!("fragments/example_lookup_search.md");

/// Line the refactor transcript gains inside a repository.
const COMMIT_OFFER: &str = "Would you like me to write a commit message and commit these changes?";

/// Separator between top-level sections.
const SECTION_BREAK: &str = "\n\n";

/// Which exploration workflow the prompt teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowVariant {
    /// Use the investigator tool as the first exploration step.
    Investigator,
    /// Explore with search and read primitives directly.
    Search,
}

impl WorkflowVariant {
    pub fn select(investigator_available: bool) -> Self {
        if investigator_available {
            Self::Investigator
        } else {
            Self::Search
        }
    }

    fn steps(self) -> &'static str {
        match self {
            Self::Investigator => WORKFLOW_INVESTIGATOR,
            Self::Search => WORKFLOW_SEARCH,
        }
    }

    fn refactor_example(self) -> &'static str {
        match self {
            Self::Investigator => REFACTOR_INVESTIGATOR,
            Self::Search => REFACTOR_SEARCH,
        }
    }

    fn lookup_example(self) -> &'static str {
        match self {
            Self::Investigator => LOOKUP_INVESTIGATOR,
            Self::Search => LOOKUP_SEARCH,
        }
    }
}

fn sandbox_notice(mode: SandboxMode) -> &'static str {
    match mode {
        SandboxMode::RestrictedHost => SANDBOX_RESTRICTED_HOST,
        SandboxMode::GenericContainer => SANDBOX_CONTAINER,
        SandboxMode::None => SANDBOX_NONE,
    }
}

/// Fragment selection for the built-in prompt.
///
/// Holds only the three inputs the slots depend on, so every distinct
/// rendering corresponds to one value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BuiltinTemplate {
    pub workflow: WorkflowVariant,
    pub sandbox: SandboxMode,
    pub repository: bool,
}

impl BuiltinTemplate {
    pub fn for_context(ctx: &PromptContext) -> Self {
        Self {
            workflow: WorkflowVariant::select(ctx.investigator_available),
            sandbox: ctx.sandbox_mode,
            repository: ctx.is_repository,
        }
    }

    /// Resolve every slot of the skeleton.
    pub fn slots(&self, tools: &ToolNames) -> Result<Slots, TemplateError> {
        let tool_slots = slots(tools.slots());

        let mut example_slots = tool_slots.clone();
        let commit_offer = if self.repository {
            format!("\n{}", COMMIT_OFFER)
        } else {
            String::new()
        };
        example_slots.insert("commit_offer".to_string(), commit_offer);

        let repository = if self.repository {
            format!("{}{}", SECTION_BREAK, REPOSITORY)
        } else {
            String::new()
        };

        let mut resolved = tool_slots.clone();
        resolved.insert(
            "workflow".to_string(),
            render(self.workflow.steps(), &tool_slots)?,
        );
        resolved.insert(
            "sandbox".to_string(),
            format!(
                "{}{}",
                SECTION_BREAK,
                render(sandbox_notice(self.sandbox), &tool_slots)?
            ),
        );
        resolved.insert("repository".to_string(), repository);
        resolved.insert(
            "refactor_example".to_string(),
            render(self.workflow.refactor_example(), &example_slots)?,
        );
        resolved.insert(
            "lookup_example".to_string(),
            render(self.workflow.lookup_example(), &tool_slots)?,
        );

        Ok(resolved)
    }

    /// Render the built-in base prompt.
    pub fn render(&self, tools: &ToolNames) -> Result<String, TemplateError> {
        let rendered = render(SKELETON, &self.slots(tools)?)?;
        Ok(rendered.trim().to_string())
    }
}
