/// Symbol listings for the source view's outline panel.
///
/// Records are wrapped with a display label, never rewritten.
use serde::Serialize;

use crate::model::{ClassKind, ClassType, Field, Method, SymbolRecord};
use crate::names::{short_member, short_type};

/// A record plus its UI label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decorated<T> {
    pub display_name: String,
    #[serde(flatten)]
    pub record: T,
}

/// A class with its members, all labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOutline {
    pub display_name: String,
    pub kind: String,
    pub qualified_name: String,
    pub fields: Vec<Decorated<Field>>,
    pub methods: Vec<Decorated<Method>>,
}

pub fn class_display_name(class: &ClassType) -> String {
    short_type(short_member(&class.handle.name)).to_string()
}

/// `name: Type`
pub fn field_display_name(field: &Field) -> String {
    format!(
        "{}: {}",
        short_member(&field.handle.name),
        short_type(&field.ty.name)
    )
}

/// `name: Ret` or `name(A, B): Ret`
pub fn method_display_name(method: &Method) -> String {
    let name = short_member(&method.handle.name);
    let ret = short_type(&method.return_type.name);
    if method.parameters.is_empty() {
        return format!("{name}: {ret}");
    }
    let params = method
        .parameters
        .iter()
        .map(|p| short_type(&p.ty.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{name}({params}): {ret}")
}

pub fn display_name(record: &SymbolRecord) -> String {
    match record {
        SymbolRecord::ClassType(c) => class_display_name(c),
        SymbolRecord::Field(f) => field_display_name(f),
        SymbolRecord::Method(m) => method_display_name(m),
    }
}

/// Label every record, keeping input order. No sorting, no dedup.
pub fn build_listing(records: Vec<SymbolRecord>) -> Vec<Decorated<SymbolRecord>> {
    records
        .into_iter()
        .map(|record| Decorated {
            display_name: display_name(&record),
            record,
        })
        .collect()
}

/// Label classes together with their nested fields and methods.
pub fn build_outline(classes: &[ClassType]) -> Vec<ClassOutline> {
    classes
        .iter()
        .map(|class| ClassOutline {
            display_name: class_display_name(class),
            kind: kind_label(Some(class.kind)),
            qualified_name: class.handle.name.clone(),
            fields: class
                .fields
                .iter()
                .map(|f| Decorated {
                    display_name: field_display_name(f),
                    record: f.clone(),
                })
                .collect(),
            methods: class
                .methods
                .iter()
                .map(|m| Decorated {
                    display_name: method_display_name(m),
                    record: m.clone(),
                })
                .collect(),
        })
        .collect()
}

/// `[class]`, `[interface]`, …; `[unknown]` when there is no class type.
pub fn kind_label(kind: Option<ClassKind>) -> String {
    let name = match kind {
        Some(ClassKind::Class) => "class",
        Some(ClassKind::Interface) => "interface",
        Some(ClassKind::Enum) => "enum",
        Some(ClassKind::Annotation) => "annotation",
        None => "unknown",
    };
    format!("[{name}]")
}
