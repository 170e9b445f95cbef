//! Symbol records - the parsed symbol table handed to DexView
//!
//! The tree model only reads `qualified_name` and method `name`. Everything
//! else is opaque payload consumed by renderers, and is optional in the
//! serialized form.

use serde::{Deserialize, Serialize};

/// An ordered collection of class records, immutable for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSource {
    pub classes: Vec<ClassRecord>,
}

impl SymbolSource {
    pub fn new(classes: Vec<ClassRecord>) -> Self {
        Self { classes }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Look up a class by its fully-qualified name
    pub fn class(&self, qualified_name: &str) -> Option<&ClassRecord> {
        self.classes
            .iter()
            .find(|c| c.qualified_name == qualified_name)
    }

    /// Classes nested inside `outer` (`outer$Inner`), in source order
    pub fn member_classes<'a>(&'a self, outer: &'a str) -> impl Iterator<Item = &'a ClassRecord> {
        self.classes.iter().filter(move |c| {
            c.qualified_name
                .strip_prefix(outer)
                .is_some_and(|rest| rest.starts_with('$') && rest.len() > 1)
        })
    }
}

/// A class as yielded by the external parser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub qualified_name: String,
    #[serde(default)]
    pub access: Vec<String>,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub source_file: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
    #[serde(default)]
    pub methods: Vec<MethodRecord>,
}

impl ClassRecord {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Self::default()
        }
    }

    pub fn with_methods(mut self, methods: impl IntoIterator<Item = MethodRecord>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldRecord>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_access(mut self, access: &[&str]) -> Self {
        self.access = access.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn is_interface(&self) -> bool {
        self.access.iter().any(|a| a == "interface")
    }

    pub fn is_enum(&self) -> bool {
        self.access.iter().any(|a| a == "enum")
    }

    pub fn is_annotation(&self) -> bool {
        self.access.iter().any(|a| a == "annotation")
    }

    pub fn method(&self, name: &str) -> Option<&MethodRecord> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// A method of a class record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    #[serde(default)]
    pub access: Vec<String>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterRecord>,
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Opaque body lines (already disassembled or decompiled)
    #[serde(default)]
    pub body: Vec<String>,
}

impl MethodRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_access(mut self, access: &[&str]) -> Self {
        self.access = access.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push(ParameterRecord {
            name: Some(name.into()),
            type_name: type_name.into(),
        });
        self
    }

    pub fn with_body(mut self, lines: &[&str]) -> Self {
        self.body = lines.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Declared return type, `void` when the parser left it out
    pub fn return_type(&self) -> &str {
        self.return_type.as_deref().unwrap_or("void")
    }

    pub fn has_access(&self, flag: &str) -> bool {
        self.access.iter().any(|a| a == flag)
    }

    pub fn is_constructor(&self) -> bool {
        self.name == "<init>" || self.name == "<clinit>"
    }
}

/// A method parameter; names are often stripped from release builds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub type_name: String,
}

/// A field of a class record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub access: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Static initial value, already formatted as a literal
    #[serde(default)]
    pub value: Option<String>,
}

impl FieldRecord {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn with_access(mut self, access: &[&str]) -> Self {
        self.access = access.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let json = r#"{"classes":[{"qualified_name":"a.B","methods":[{"name":"foo"}]}]}"#;
        let source: SymbolSource = serde_json::from_str(json).unwrap();

        assert_eq!(source.classes.len(), 1);
        assert_eq!(source.classes[0].methods[0].name, "foo");
        assert_eq!(source.classes[0].methods[0].return_type(), "void");
        assert!(source.classes[0].fields.is_empty());
    }

    #[test]
    fn member_classes_requires_dollar_separator() {
        let source = SymbolSource::new(vec![
            ClassRecord::new("a.Outer"),
            ClassRecord::new("a.Outer$Inner"),
            ClassRecord::new("a.OuterX"),
            ClassRecord::new("a.Outer$"),
        ]);

        let names: Vec<_> = source
            .member_classes("a.Outer")
            .map(|c| c.qualified_name.as_str())
            .collect();
        assert_eq!(names, vec!["a.Outer$Inner"]);
    }

    #[test]
    fn class_lookup_by_qualified_name() {
        let source = SymbolSource::new(vec![
            ClassRecord::new("a.B").with_methods([MethodRecord::new("foo")]),
        ]);

        assert!(source.class("a.B").is_some());
        assert!(source.class("B").is_none());
        assert!(source.class("a.B").unwrap().method("foo").is_some());
    }
}
