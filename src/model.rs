/// Records delivered by the upstream query service.
///
/// Field names follow the upstream wire shape (camelCase).
use serde::{Deserialize, Serialize};

/// Jump target: a byte offset into a file's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub file_id: i64,
    pub offset: i64,
}

/// How a file is identified at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileRef {
    Id(i64),
    Path { project: String, path: String },
}

impl From<i64> for FileRef {
    fn from(id: i64) -> Self {
        FileRef::Id(id)
    }
}

impl FileRef {
    pub fn path(project: impl Into<String>, path: impl Into<String>) -> Self {
        FileRef::Path {
            project: project.into(),
            path: path.into(),
        }
    }
}

/// Fully-qualified symbol name, e.g. `com.acme.Widget#run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handle {
    pub name: String,
}

/// Reference to a type by qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: TypeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub handle: Handle,
    #[serde(rename = "type")]
    pub ty: TypeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_target: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub handle: Handle,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: TypeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_target: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassType {
    pub handle: Handle,
    pub kind: ClassKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_target: Option<SourceLocation>,
    /// Absent upstream lists deserialize as empty.
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub methods: Vec<Method>,
    /// How often the type is referenced across the index.
    #[serde(default)]
    pub use_count: u64,
}

/// One symbol as listed for a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum SymbolRecord {
    ClassType(ClassType),
    Field(Field),
    Method(Method),
}

impl SymbolRecord {
    pub fn handle(&self) -> &Handle {
        match self {
            SymbolRecord::ClassType(c) => &c.handle,
            SymbolRecord::Field(f) => &f.handle,
            SymbolRecord::Method(m) => &m.handle,
        }
    }
}

/// An entry of a directory listing, relative to the queried directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryChild {
    pub name: String,
    pub is_directory: bool,
}

impl DirectoryChild {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }

    /// Parse a legacy child that upstream returned as a path.
    ///
    /// The queried directory plus its separator is stripped; a trailing `/`
    /// marks a directory.
    pub fn from_legacy(queried_path: &str, raw: &str) -> Self {
        let prefix = format!("{}/", queried_path.trim_end_matches('/'));
        let rel = raw.strip_prefix(prefix.as_str()).unwrap_or(raw);
        match rel.strip_suffix('/') {
            Some(dir) => Self::directory(dir),
            None => Self::file(rel),
        }
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub rank: i64,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub summary: String,
    pub jump_target: SourceLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
}

/// What a completion hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HitKind {
    Type,
    File,
    #[serde(other)]
    Other,
}

/// A completion candidate for a partially typed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionHit {
    pub kind: HitKind,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub path: String,
    pub jump_target: SourceLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
}

/// Payload of a "source" response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    pub id: i64,
    pub project: String,
    pub path: String,
    /// Raw file text.
    pub source: String,
    /// The same text wrapped in annotation markup.
    pub annotated_source: String,
}
