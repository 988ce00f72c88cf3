//! Few-shot prompt construction for commit message suggestions.

use crate::commit::style::{MessageConfig, Style};
use crate::openai::Message;

/// Marker the model is told to answer with when it cannot describe a diff.
pub const UNSURE_MARKER: &str = "unsure";

const ROLE_DESCRIPTION: &str = "You are a helpful assistant that suggests commit messages. \
The commit message should explain the changes made in the files. \
The structure of the commit message can be flexible, varying based on the size and complexity of the changes.";

const FORMAT_RULES: &str = "Formatting rules:
- The commit subject must be at most 50 characters and written in imperative mood.
- Separate the subject from the body with a blank line.
- Wrap the body at 72 characters.
- Respond only with the commit subject and the commit body, nothing else.
- If you cannot tell what the changes do, respond only with the word 'unsure'.";

const CONVENTIONAL_RULES: &str = "Follow the Conventional Commits specification: \
prefix the subject with a type such as feat, fix, docs, refactor, test or chore (e.g., 'feat: ...'). \
Breaking changes must be denoted with a '!' after the type (e.g., 'feat!: ...').";

/// Exemplar diff shown to the model before the real one.
pub const EXAMPLE_DIFF: &str = "diff --git a/README.md b/README.md
new file mode 100644
index 0000000..ca34b6a
--- /dev/null
+++ b/README.md
@@ -0,0 +1,6 @@
+# Commit Message
+
+Create a commit message suggestion from the git diff using the openAI API.
+
+Note that this means that filename and lines changed is sent to openAI. If that
+bothers you - don't use this tool.";

const EXAMPLE_SUBJECT: &str = "Add README.md to explain the tool usage";
const EXAMPLE_CONVENTIONAL_SUBJECT: &str = "docs: Add README.md to explain the tool usage";

/// Exemplar answer for [`EXAMPLE_DIFF`] in the requested style.
pub fn example_answer(config: &MessageConfig) -> String {
    let subject = if config.conventional_commit {
        EXAMPLE_CONVENTIONAL_SUBJECT
    } else {
        EXAMPLE_SUBJECT
    };

    format!("{subject}\n\n{}", example_body(config.style))
}

fn example_body(style: Style) -> &'static str {
    match style {
        Style::Descriptive => {
            "Introduce a README.md that describes how the tool suggests commit
messages using the OpenAI API. It also notes that file names and
changed lines are sent to OpenAI."
        }
        Style::Conversational => {
            "Added a README so folks know what this tool is for. Heads up: it
mentions that file names and changed lines get sent to OpenAI, so
anyone uneasy about that can skip it."
        }
        Style::ListBased => {
            "- Add README.md describing the commit message suggestion tool
- Explain that suggestions come from the OpenAI API
- Note that file names and changed lines are sent to OpenAI"
        }
        Style::ProblemSolution => {
            "There was no documentation explaining what the tool does or what
data it shares with OpenAI.

Add a README.md that describes the tool and states that file names
and changed lines are sent to the OpenAI API."
        }
    }
}

/// System message for the requested style and compliance.
pub fn system_prompt(config: &MessageConfig) -> String {
    let mut prompt = format!(
        "{ROLE_DESCRIPTION}\n\n{FORMAT_RULES}\n\nStyle: {}",
        config.style.description()
    );

    if config.conventional_commit {
        prompt.push_str("\n\n");
        prompt.push_str(CONVENTIONAL_RULES);
    }

    prompt
}

/// Build the four-message conversation for `git_diff`.
///
/// Order is fixed: system message, exemplar diff, exemplar answer, real diff.
pub fn build_messages(git_diff: &str, config: &MessageConfig) -> Vec<Message> {
    vec![
        Message::system(system_prompt(config)),
        Message::user(EXAMPLE_DIFF),
        Message::assistant(example_answer(config)),
        // The message the assistant should actually respond to.
        Message::user(git_diff),
    ]
}
