//! Editor deep-links
//!
//! Each supported editor is a URL template with `{filepath}` and `{line}`
//! placeholders. Building a link is plain substitution.

use crate::error::{CheckError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Editor {
    PhpStorm,
    Atom,
    Sublime,
    #[default]
    VsCode,
    VsCodeRemote,
    /// User supplied template
    Custom(String),
}

impl Editor {
    pub fn id(&self) -> &'static str {
        match self {
            Editor::PhpStorm => "phpstorm",
            Editor::Atom => "atom",
            Editor::Sublime => "sublime",
            Editor::VsCode => "vs_code",
            Editor::VsCodeRemote => "vs_code_remote",
            Editor::Custom(_) => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Editor::PhpStorm => "PhpStorm",
            Editor::Atom => "Atom",
            Editor::Sublime => "Sublime",
            Editor::VsCode => "Vs Code",
            Editor::VsCodeRemote => "Vs Code Remote",
            Editor::Custom(_) => "Custom",
        }
    }

    pub fn template(&self) -> &str {
        match self {
            Editor::PhpStorm => "phpstorm://open?file={filepath}&line={line}",
            Editor::Atom => "atom://core/open/file?filename={filepath}&line={line}",
            Editor::Sublime => "subl://open?url=file://{filepath}&line={line}",
            Editor::VsCode => "vscode://file/{filepath}:{line}",
            Editor::VsCodeRemote => "vscode://vscode-remote/{filepath}:{line}",
            Editor::Custom(template) => template,
        }
    }

    /// Resolve an editor id, with `template` used for `custom`.
    pub fn resolve(id: &str, template: Option<&str>) -> Result<Self> {
        let editor: Editor = id.parse()?;
        match editor {
            Editor::Custom(_) => {
                let template = template.map(str::trim).unwrap_or_default();
                if template.is_empty() {
                    return Err(CheckError::InvalidConfig(
                        "editor 'custom' needs editor_template / DS_CUSTOM_EDITOR".to_string(),
                    ));
                }
                Ok(Editor::Custom(template.to_string()))
            }
            other => Ok(other),
        }
    }

    /// Deep-link to `filepath` at one-based `line`
    pub fn link(&self, filepath: &str, line: usize) -> String {
        render_link(self.template(), filepath, line)
    }
}

impl FromStr for Editor {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "phpstorm" => Ok(Editor::PhpStorm),
            "atom" => Ok(Editor::Atom),
            "sublime" | "subl" => Ok(Editor::Sublime),
            "vs_code" | "vscode" => Ok(Editor::VsCode),
            "vs_code_remote" | "vscode_remote" => Ok(Editor::VsCodeRemote),
            "custom" => Ok(Editor::Custom(String::new())),
            _ => Err(CheckError::UnknownEditor(s.to_string())),
        }
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Substitute `{filepath}` and `{line}` in `template`
pub fn render_link(template: &str, filepath: &str, line: usize) -> String {
    template
        .replace("{filepath}", filepath)
        .replace("{line}", &line.to_string())
}
