//! Build configurations declared in a project file.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::ProjectError;
use crate::xml::XmlNode;

/// Macro expanded to the directory holding the project file.
pub const PROJ_DIR_MACRO: &str = "$PROJ_DIR$";

const DEFINES_OPTION: &str = "CCDefines";
const INCLUDE_PATHS_OPTION: &str = "CCIncludePath2";
const PRE_INCLUDE_OPTION: &str = "PreInclude";

/// A preprocessor definition, `ID` or `ID=VALUE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Define {
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Define {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('=') {
            Some((identifier, value)) => Self {
                identifier: identifier.trim().to_string(),
                value: Some(value.trim().to_string()),
            },
            None => Self {
                identifier: raw.trim().to_string(),
                value: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolchain: Option<String>,
    pub debug: bool,
    pub defines: Vec<Define>,
    pub include_paths: Vec<PathBuf>,
    pub pre_includes: Vec<PathBuf>,
}

impl Configuration {
    /// Derive every configuration declared directly under the `<project>` root.
    ///
    /// Order follows the document. A `<configuration>` without a name fails
    /// the whole derivation.
    pub fn from_xml(root: &XmlNode, project_path: &Path) -> Result<Vec<Self>, ProjectError> {
        let project_dir = project_path.parent().unwrap_or_else(|| Path::new(""));

        root.children_named("configuration")
            .enumerate()
            .map(|(index, node)| Self::from_node(node, project_path, project_dir, index))
            .collect()
    }

    fn from_node(
        node: &XmlNode,
        project_path: &Path,
        project_dir: &Path,
        index: usize,
    ) -> Result<Self, ProjectError> {
        let name = node
            .child_text("name")
            .ok_or_else(|| ProjectError::InvalidConfiguration {
                path: project_path.to_path_buf(),
                message: format!("configuration #{} has no name", index + 1),
            })?
            .to_string();

        let toolchain = node
            .child("toolchain")
            .and_then(|t| t.child_text("name"))
            .map(String::from);

        let debug = node.child_text("debug") == Some("1");

        let defines = option_states(node, DEFINES_OPTION)
            .iter()
            .map(|raw| Define::parse(raw))
            .collect();

        let include_paths = option_states(node, INCLUDE_PATHS_OPTION)
            .iter()
            .map(|raw| resolve_path(raw, project_dir))
            .collect();

        let pre_includes = option_states(node, PRE_INCLUDE_OPTION)
            .iter()
            .map(|raw| resolve_path(raw, project_dir))
            .collect();

        Ok(Self {
            name,
            toolchain,
            debug,
            defines,
            include_paths,
            pre_includes,
        })
    }
}

/// Non-empty `<state>` values of every `<settings>/<data>/<option>` named
/// `option_name`, first occurrence kept.
fn option_states(configuration: &XmlNode, option_name: &str) -> Vec<String> {
    let mut states: Vec<String> = Vec::new();

    for settings in configuration.children_named("settings") {
        for data in settings.children_named("data") {
            for option in data.children_named("option") {
                if option.child_text("name") != Some(option_name) {
                    continue;
                }
                for state in option.children_named("state") {
                    let value = state.text();
                    if !value.is_empty() && !states.iter().any(|s| s == value) {
                        states.push(value.to_string());
                    }
                }
            }
        }
    }

    states
}

/// Expand a leading `$PROJ_DIR$`, normalize separators and anchor relative
/// paths at the project directory, joining it at most once.
fn resolve_path(raw: &str, project_dir: &Path) -> PathBuf {
    let normalized = raw.replace('\\', "/");

    if let Some(rest) = normalized.strip_prefix(PROJ_DIR_MACRO) {
        let rest = rest.trim_start_matches('/');
        return match (project_dir.as_os_str().is_empty(), rest.is_empty()) {
            (true, true) => PathBuf::from("."),
            (true, false) => PathBuf::from(rest),
            (false, true) => project_dir.to_path_buf(),
            (false, false) => project_dir.join(rest),
        };
    }

    let path = PathBuf::from(normalized);
    if path.is_absolute() {
        path
    } else {
        project_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <fileVersion>3</fileVersion>
  <configuration>
    <name>Debug</name>
    <toolchain><name>ARM</name></toolchain>
    <debug>1</debug>
    <settings>
      <name>ICCARM</name>
      <data>
        <option>
          <name>CCDefines</name>
          <state>DEBUG</state>
          <state>BOARD_REV=2</state>
          <state></state>
          <state>DEBUG</state>
        </option>
        <option>
          <name>CCIncludePath2</name>
          <state>$PROJ_DIR$\inc</state>
          <state>drivers/include</state>
          <state>/opt/sdk/include</state>
        </option>
        <option>
          <name>PreInclude</name>
          <state>$PROJ_DIR$\config\board.h</state>
        </option>
      </data>
    </settings>
  </configuration>
  <configuration>
    <name>Release</name>
    <toolchain><name>ARM</name></toolchain>
    <debug>0</debug>
  </configuration>
</project>
"#;

    fn parse() -> Vec<Configuration> {
        let root = XmlNode::parse(PROJECT).unwrap();
        Configuration::from_xml(&root, Path::new("/work/fw/app.ewp")).unwrap()
    }

    #[test]
    fn test_configurations_in_document_order() {
        let configs = parse();
        let names: Vec<_> = configs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Debug", "Release"]);
    }

    #[test]
    fn test_toolchain_and_debug_flag() {
        let configs = parse();
        assert_eq!(configs[0].toolchain.as_deref(), Some("ARM"));
        assert!(configs[0].debug);
        assert!(!configs[1].debug);
    }

    #[test]
    fn test_defines_are_split_and_deduplicated() {
        let configs = parse();
        assert_eq!(
            configs[0].defines,
            vec![
                Define {
                    identifier: "DEBUG".to_string(),
                    value: None
                },
                Define {
                    identifier: "BOARD_REV".to_string(),
                    value: Some("2".to_string())
                },
            ]
        );
        assert!(configs[1].defines.is_empty());
    }

    #[test]
    fn test_paths_expand_project_dir() {
        let configs = parse();
        assert_eq!(
            configs[0].include_paths,
            vec![
                PathBuf::from("/work/fw/inc"),
                PathBuf::from("/work/fw/drivers/include"),
                PathBuf::from("/opt/sdk/include"),
            ]
        );
        assert_eq!(
            configs[0].pre_includes,
            vec![PathBuf::from("/work/fw/config/board.h")]
        );
    }

    fn include_paths_for(project_path: &str) -> Vec<PathBuf> {
        let root = XmlNode::parse(
            r#"<project><configuration><name>Debug</name><settings><data><option>
                <name>CCIncludePath2</name>
                <state>$PROJ_DIR$\inc</state>
                <state>drivers/include</state>
                <state>$PROJ_DIR$</state>
            </option></data></settings></configuration></project>"#,
        )
        .unwrap();
        let configs = Configuration::from_xml(&root, Path::new(project_path)).unwrap();
        configs[0].include_paths.clone()
    }

    #[test]
    fn test_relative_project_dir_is_joined_once() {
        assert_eq!(
            include_paths_for("fw/app.ewp"),
            vec![
                PathBuf::from("fw/inc"),
                PathBuf::from("fw/drivers/include"),
                PathBuf::from("fw"),
            ]
        );
        assert_eq!(
            include_paths_for("./app/app.ewp"),
            vec![
                PathBuf::from("./app/inc"),
                PathBuf::from("./app/drivers/include"),
                PathBuf::from("./app"),
            ]
        );
    }

    #[test]
    fn test_bare_project_file_name_keeps_paths_relative() {
        let paths = include_paths_for("app.ewp");
        assert_eq!(
            paths,
            vec![
                PathBuf::from("inc"),
                PathBuf::from("drivers/include"),
                PathBuf::from("."),
            ]
        );
        assert!(paths.iter().all(|p| p.is_relative()));
    }

    #[test]
    fn test_no_configurations_yields_empty_list() {
        let root = XmlNode::parse("<project><fileVersion>3</fileVersion></project>").unwrap();
        let configs = Configuration::from_xml(&root, Path::new("empty.ewp")).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_nameless_configuration_is_rejected() {
        let root = XmlNode::parse(
            "<project><configuration><name>A</name></configuration><configuration/></project>",
        )
        .unwrap();
        let err = Configuration::from_xml(&root, Path::new("bad.ewp")).unwrap_err();
        assert!(matches!(err, ProjectError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("configuration #2 has no name"));
    }

    #[test]
    fn test_define_parse_trims_parts() {
        let define = Define::parse(" FOO = bar ");
        assert_eq!(define.identifier, "FOO");
        assert_eq!(define.value.as_deref(), Some("bar"));
    }
}
