//! Rich-text formatting toolbar.
//!
//! Formatting runs through the web view's `document.execCommand`; the editor
//! only ever sees the markup read back from the editing surface.

use dioxus::prelude::*;

use crate::state::AppState;

/// DOM id of the contenteditable editing surface
pub const CONTENT_ELEMENT_ID: &str = "keep-editor-content";

/// A native editing command with its optional argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCommand {
    pub command: &'static str,
    pub value: Option<&'static str>,
    /// Ask the user for the value instead; cancelling skips the command
    pub prompt: Option<&'static str>,
    pub icon: &'static str,
    pub title: &'static str,
}

/// Buttons in toolbar order
pub const FORMAT_COMMANDS: [FormatCommand; 11] = [
    FormatCommand { command: "insertUnorderedList", value: None, prompt: None, icon: "☰", title: "Bulleted list" },
    FormatCommand { command: "insertOrderedList", value: None, prompt: None, icon: "≡", title: "Numbered list" },
    FormatCommand { command: "bold", value: None, prompt: None, icon: "B", title: "Bold" },
    FormatCommand { command: "italic", value: None, prompt: None, icon: "I", title: "Italic" },
    FormatCommand { command: "underline", value: None, prompt: None, icon: "U", title: "Underline" },
    FormatCommand { command: "strikeThrough", value: None, prompt: None, icon: "S", title: "Strikethrough" },
    FormatCommand { command: "foreColor", value: Some("#ff0000"), prompt: None, icon: "A", title: "Text color" },
    FormatCommand { command: "fontSize", value: Some("4"), prompt: None, icon: "T", title: "Text size" },
    FormatCommand { command: "insertImage", value: None, prompt: Some("Image URL"), icon: "🖼", title: "Image" },
    FormatCommand { command: "formatBlock", value: Some("blockquote"), prompt: None, icon: "❝", title: "Quote" },
    FormatCommand { command: "formatBlock", value: Some("pre"), prompt: None, icon: "</>", title: "Code block" },
];

impl FormatCommand {
    /// Script running the command and returning the surface's new markup
    #[must_use]
    pub fn script(&self) -> String {
        if let Some(prompt) = self.prompt {
            return format!(
                "const value = window.prompt('{prompt}'); if (value) {{ document.execCommand('{}', false, value); }} {}",
                self.command,
                read_markup_script()
            );
        }
        let value = self
            .value
            .map_or_else(|| "null".to_string(), |value| format!("'{value}'"));
        format!(
            "document.execCommand('{}', false, {value}); {}",
            self.command,
            read_markup_script()
        )
    }
}

/// Script returning the current markup of the editing surface
#[must_use]
pub fn read_markup_script() -> String {
    format!(
        "const el = document.getElementById('{CONTENT_ELEMENT_ID}'); return el ? el.innerHTML : '';"
    )
}

/// Script replacing the markup of the editing surface
#[must_use]
pub fn write_markup_script(markup: &str) -> Option<String> {
    let literal = serde_json::to_string(markup).ok()?;
    Some(format!(
        "const el = document.getElementById('{CONTENT_ELEMENT_ID}'); if (el) {{ el.innerHTML = {literal}; }}"
    ))
}

/// Run `script` in the web view and decode the returned markup
pub async fn eval_markup(script: &str) -> Option<String> {
    match document::eval(script).join::<String>().await {
        Ok(markup) => Some(markup),
        Err(error) => {
            tracing::warn!("Failed to read editor markup: {:?}", error);
            None
        }
    }
}

/// Toolbar of native formatting commands; reports the resulting markup
#[component]
pub fn FormatToolbar(on_change: EventHandler<String>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "format-toolbar",
            style: "
                display: flex;
                flex-wrap: wrap;
                gap: 4px;
                padding: 6px 0;
                border-bottom: 1px solid {colors.border};
            ",

            for (index, format) in FORMAT_COMMANDS.into_iter().enumerate() {
                button {
                    key: "{index}",
                    r#type: "button",
                    title: format.title,
                    style: "
                        min-width: 28px;
                        height: 28px;
                        border: 1px solid {colors.border};
                        border-radius: 4px;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                        cursor: pointer;
                    ",
                    // Keep the text selection inside the editing surface
                    onmousedown: move |evt| evt.prevent_default(),
                    onclick: move |_| {
                        spawn(async move {
                            if let Some(markup) = eval_markup(&format.script()).await {
                                on_change.call(markup);
                            }
                        });
                    },
                    "{format.icon}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_command_prompts_for_url() {
        let image = FORMAT_COMMANDS
            .into_iter()
            .find(|format| format.command == "insertImage")
            .unwrap();
        let script = image.script();
        assert!(script.starts_with("const value = window.prompt('Image URL');"));
        assert!(script.contains("if (value) { document.execCommand('insertImage', false, value); }"));
        assert!(script.ends_with(&read_markup_script()));
    }

    #[test]
    fn script_passes_value_or_null() {
        let bold = FORMAT_COMMANDS[2];
        assert!(bold.script().starts_with("document.execCommand('bold', false, null);"));

        let quote = FORMAT_COMMANDS[9];
        assert!(quote
            .script()
            .starts_with("document.execCommand('formatBlock', false, 'blockquote');"));
    }

    #[test]
    fn write_script_escapes_markup() {
        let script = write_markup_script("<p>\"quoted\"</p>").unwrap();
        assert!(script.contains(r#"el.innerHTML = "<p>\"quoted\"</p>";"#));
    }
}
