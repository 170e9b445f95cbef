//! Java renderer
//!
//! Writes Java-like source. Method bodies are opaque lines from the parser
//! and are emitted as-is.
//!
//! Display flags:
//! - `NAME`: `package` line, class declaration and braces
//! - `DETAILS`: `extends`/`implements` (as comments when `NAME` is off),
//!   source file and member classes
//! - `ANNOTATIONS`: `@` class annotations
//! - `FIELDS`: field declarations

use std::fmt;

use crate::domain::entities::{
    ClassRecord, FieldRecord, MethodRecord, SymbolSource, DEFAULT_PACKAGE,
};
use crate::domain::ports::Renderer;
use crate::domain::value_objects::{DisplayOptions, Indentation, QualifiedName};
use crate::error::DexViewResult;

/// Access flags that never appear as Java modifiers
const NON_MODIFIERS: &[&str] = &[
    "interface",
    "enum",
    "annotation",
    "synthetic",
    "super",
    "constructor",
    "bridge",
    "varargs",
    "declared-synchronized",
];

/// Java renderer
pub struct JavaRenderer;

impl JavaRenderer {
    pub const NAME: &'static str = "Java";

    pub fn new() -> Self {
        Self
    }

    fn declaration(&self, class: &ClassRecord, options: DisplayOptions) -> String {
        let simple = QualifiedName::split(&class.qualified_name).display_name();
        let is_interface = class.is_interface() || class.is_annotation();

        let mut decl: Vec<&str> = modifiers(&class.access)
            .filter(|m| !(is_interface && *m == "abstract"))
            .filter(|m| !(class.is_enum() && *m == "final"))
            .collect();
        decl.push(if class.is_annotation() {
            "@interface"
        } else if class.is_interface() {
            "interface"
        } else if class.is_enum() {
            "enum"
        } else {
            "class"
        });
        decl.push(simple);

        let mut line = decl.join(" ");
        if options.contains(DisplayOptions::DETAILS) {
            if let Some(superclass) = explicit_superclass(class) {
                line.push_str(" extends ");
                line.push_str(superclass);
            }
            if !class.interfaces.is_empty() {
                line.push_str(if is_interface { " extends " } else { " implements " });
                line.push_str(&class.interfaces.join(", "));
            }
        }
        line
    }

    fn write_field(
        &self,
        field: &FieldRecord,
        out: &mut dyn fmt::Write,
        indent: Indentation,
    ) -> fmt::Result {
        for annotation in &field.annotations {
            writeln!(out, "{}@{}", indent, annotation)?;
        }
        write!(out, "{}", indent)?;
        for modifier in modifiers(&field.access) {
            write!(out, "{} ", modifier)?;
        }
        write!(out, "{} {}", field.type_name, field.name)?;
        if let Some(value) = &field.value {
            write!(out, " = {}", value)?;
        }
        writeln!(out, ";")
    }

    fn signature(&self, class: &ClassRecord, method: &MethodRecord) -> String {
        if method.name == "<clinit>" {
            return "static".to_string();
        }

        let mut sig = String::new();
        for modifier in modifiers(&method.access) {
            sig.push_str(modifier);
            sig.push(' ');
        }
        if method.name == "<init>" {
            sig.push_str(QualifiedName::split(&class.qualified_name).display_name());
        } else {
            sig.push_str(method.return_type());
            sig.push(' ');
            sig.push_str(&method.name);
        }

        let params: Vec<String> = method
            .parameters
            .iter()
            .enumerate()
            .map(|(i, p)| match &p.name {
                Some(name) => format!("{} {}", p.type_name, name),
                None => format!("{} arg{}", p.type_name, i),
            })
            .collect();
        sig.push('(');
        sig.push_str(&params.join(", "));
        sig.push(')');
        sig
    }
}

impl Default for JavaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JavaRenderer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render_class(
        &self,
        source: &SymbolSource,
        class: &ClassRecord,
        options: DisplayOptions,
        out: &mut dyn fmt::Write,
    ) -> DexViewResult<()> {
        let show_header = options.contains(DisplayOptions::NAME);
        let show_details = options.contains(DisplayOptions::DETAILS);

        if show_header {
            let package = QualifiedName::split(&class.qualified_name).package();
            if !package.is_empty() && package != DEFAULT_PACKAGE {
                writeln!(out, "package {};", package)?;
                writeln!(out)?;
            }
        }

        if options.contains(DisplayOptions::ANNOTATIONS) {
            for annotation in &class.annotations {
                writeln!(out, "@{}", annotation)?;
            }
        }

        if show_header {
            writeln!(out, "{} {{", self.declaration(class, options))?;
        } else if show_details {
            if let Some(superclass) = explicit_superclass(class) {
                writeln!(out, "// extends {}", superclass)?;
            }
            if !class.interfaces.is_empty() {
                writeln!(out, "// implements {}", class.interfaces.join(", "))?;
            }
        }

        let indent = if show_header {
            Indentation::new().deeper()
        } else {
            Indentation::new()
        };
        let mut wrote_member = false;

        if show_details {
            if let Some(file) = &class.source_file {
                writeln!(out, "{}// source: {}", indent, file)?;
                wrote_member = true;
            }
            for member in source.member_classes(&class.qualified_name) {
                writeln!(out, "{}// member class: {}", indent, member.qualified_name)?;
                wrote_member = true;
            }
        }

        if options.contains(DisplayOptions::FIELDS) && !class.fields.is_empty() {
            if wrote_member {
                writeln!(out)?;
            }
            for field in &class.fields {
                self.write_field(field, out, indent)?;
            }
            wrote_member = true;
        }

        for method in &class.methods {
            if wrote_member {
                writeln!(out)?;
            }
            self.render_method(source, class, method, out, indent, false)?;
            wrote_member = true;
        }

        if show_header {
            writeln!(out, "}}")?;
        }
        Ok(())
    }

    fn render_method(
        &self,
        _source: &SymbolSource,
        class: &ClassRecord,
        method: &MethodRecord,
        out: &mut dyn fmt::Write,
        indent: Indentation,
        standalone: bool,
    ) -> DexViewResult<()> {
        if standalone {
            writeln!(out, "{}// {}", indent, class.qualified_name)?;
        }
        for annotation in &method.annotations {
            writeln!(out, "{}@{}", indent, annotation)?;
        }

        let signature = self.signature(class, method);
        let bodiless = method.body.is_empty()
            && (method.has_access("abstract")
                || method.has_access("native")
                || class.is_interface());
        if bodiless {
            writeln!(out, "{}{};", indent, signature)?;
            return Ok(());
        }

        writeln!(out, "{}{} {{", indent, signature)?;
        let inner = indent.deeper();
        for line in &method.body {
            writeln!(out, "{}{}", inner, line)?;
        }
        writeln!(out, "{}}}", indent)?;
        Ok(())
    }
}

fn modifiers(access: &[String]) -> impl Iterator<Item = &str> {
    access
        .iter()
        .map(String::as_str)
        .filter(|flag| !NON_MODIFIERS.contains(flag))
}

fn explicit_superclass(class: &ClassRecord) -> Option<&str> {
    class
        .superclass
        .as_deref()
        .filter(|s| *s != "java.lang.Object" && *s != "java.lang.Enum")
}
