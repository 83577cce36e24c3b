//! Rendering decoded keymaps as JSON or YAML

use anyhow::Result;

use crate::config::OutputFormat;
use crate::keymap::Keymap;

/// Serialize a keymap in the requested format
///
/// `pretty` selects indented JSON; YAML is always block style.
pub fn render(keymap: &Keymap, format: OutputFormat, pretty: bool) -> Result<String> {
    let text = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(keymap)?,
        OutputFormat::Json => serde_json::to_string(keymap)?,
        OutputFormat::Yaml => serde_yaml::to_string(keymap)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::parse_keymap;

    #[test]
    fn test_render_pretty_json() {
        let keymap = parse_keymap("KEY 0 65 40 0").unwrap();
        let text = render(&keymap, OutputFormat::Json, true).unwrap();
        assert!(text.starts_with("{\n  \"actions\": []"));
        assert!(text.contains("\"key_char\": \"A\""));
    }

    #[test]
    fn test_render_compact_json() {
        let keymap = parse_keymap("").unwrap();
        let text = render(&keymap, OutputFormat::Json, false).unwrap();
        assert_eq!(text, r#"{"actions":[],"scripts":[],"keys":[]}"#);
    }

    #[test]
    fn test_render_yaml() {
        let keymap = parse_keymap("SCR 516 0 RS1 \"d\" a.lua").unwrap();
        let text = render(&keymap, OutputFormat::Yaml, true).unwrap();
        assert!(text.contains("instance_behavior: Always start a new instance"));
        assert!(text.contains("type: SCR"));
    }
}
