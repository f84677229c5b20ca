//! Output formatting for CLI commands

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                message: format!("expected 'text' or 'json', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Payload of a rendered outline in JSON mode
#[derive(Debug, Serialize)]
pub struct OutlineOutput<'a> {
    pub target: String,
    pub files: usize,
    pub symbols: usize,
    pub outline: &'a str,
}

/// Output context for consistent formatting across commands
///
/// This is the single sink for outlines, warnings and errors; commands
/// never print directly.
#[derive(Debug, Clone)]
pub struct OutputContext {
    /// Project root for relative path calculation
    root: PathBuf,
    format: OutputFormat,
    /// Outline destination; stdout when unset
    destination: Option<PathBuf>,
}

impl OutputContext {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            format: OutputFormat::default(),
            destination: None,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Convert an absolute path to relative (if within project root)
    pub fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.display().to_string())
    }

    /// Resolve a user-supplied path against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Print (or write) a rendered outline
    pub fn print_outline(&self, payload: OutlineOutput<'_>) -> std::io::Result<()> {
        let content = match self.format {
            OutputFormat::Text => payload.outline.to_string(),
            OutputFormat::Json => {
                let response = serde_json::json!({
                    "success": true,
                    "data": payload,
                });
                to_pretty_json(&response) + "\n"
            }
        };

        match &self.destination {
            Some(path) => {
                std::fs::write(path, &content)?;
                tracing::info!("Wrote outline to {}", path.display());
                Ok(())
            }
            None => {
                print!("{content}");
                Ok(())
            }
        }
    }

    /// Print a successful response
    pub fn print_success<T: Serialize>(&self, data: T) {
        match self.format {
            OutputFormat::Json => {
                let response = serde_json::json!({
                    "success": true,
                    "data": data
                });
                println!("{}", to_pretty_json(&response));
            }
            OutputFormat::Text => {
                let value = serde_json::to_value(data).unwrap_or(serde_json::Value::Null);
                print_text_value(&value, 0);
            }
        }
    }

    /// Report that there was nothing to operate on
    pub fn print_warning(&self, message: &str) {
        tracing::warn!("{}", message);
        match self.format {
            OutputFormat::Json => {
                let response = serde_json::json!({
                    "success": false,
                    "warning": message
                });
                println!("{}", to_pretty_json(&response));
            }
            OutputFormat::Text => eprintln!("warning: {message}"),
        }
    }

    /// Print an error response
    pub fn print_error(&self, message: &str) {
        match self.format {
            OutputFormat::Json => {
                let response = serde_json::json!({
                    "success": false,
                    "error": message
                });
                println!("{}", to_pretty_json(&response));
            }
            OutputFormat::Text => eprintln!("error: {message}"),
        }
    }
}

fn to_pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Failed to serialize output: {e}"}}"#)
    })
}

/// `key: value` lines, nested objects indented by two spaces
fn print_text_value(value: &serde_json::Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                if value.is_object() {
                    println!("{pad}{key}:");
                    print_text_value(value, indent + 1);
                } else {
                    println!("{pad}{key}: {}", scalar(value));
                }
            }
        }
        other => println!("{pad}{}", scalar(other)),
    }
}

fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_relative_path() {
        let ctx = OutputContext::new(PathBuf::from("/project"));

        assert_eq!(
            ctx.relative_path(Path::new("/project/src/main.rs")),
            "src/main.rs"
        );

        // Path outside project stays absolute
        assert_eq!(
            ctx.relative_path(Path::new("/other/file.rs")),
            "/other/file.rs"
        );
    }

    #[test]
    fn test_resolve() {
        let ctx = OutputContext::new(PathBuf::from("/project"));
        assert_eq!(
            ctx.resolve(Path::new("src/a.ts")),
            PathBuf::from("/project/src/a.ts")
        );
        assert_eq!(ctx.resolve(Path::new("/tmp/b.ts")), PathBuf::from("/tmp/b.ts"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_outline_written_to_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("outline.txt");
        let ctx = OutputContext::new(temp.path().to_path_buf()).with_destination(Some(dest.clone()));

        ctx.print_outline(OutlineOutput {
            target: "a.ts".to_string(),
            files: 1,
            symbols: 1,
            outline: "Function foo: void\n",
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(dest).unwrap(), "Function foo: void\n");
    }

    #[test]
    fn test_json_outline_envelope() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("outline.json");
        let ctx = OutputContext::new(temp.path().to_path_buf())
            .with_format(OutputFormat::Json)
            .with_destination(Some(dest.clone()));

        ctx.print_outline(OutlineOutput {
            target: "src".to_string(),
            files: 2,
            symbols: 3,
            outline: "a.ts\n---\n\n",
        })
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dest).unwrap()).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["files"], 2);
        assert_eq!(value["data"]["outline"], "a.ts\n---\n\n");
    }
}
