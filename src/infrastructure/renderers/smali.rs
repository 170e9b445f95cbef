//! Smali renderer
//!
//! Writes smali-style assembler directives with JVM type descriptors.
//! Each enabled section is separated by a blank line; methods always render.

use std::fmt;

use crate::domain::entities::{ClassRecord, MethodRecord, SymbolSource};
use crate::domain::ports::Renderer;
use crate::domain::value_objects::{DisplayOptions, Indentation};
use crate::error::DexViewResult;

/// Smali renderer
pub struct SmaliRenderer;

impl SmaliRenderer {
    pub const NAME: &'static str = "Smali";

    pub fn new() -> Self {
        Self
    }
}

impl Default for SmaliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// JVM descriptor for a Java-style type name (`int[]` → `[I`)
pub fn descriptor(type_name: &str) -> String {
    let mut base = type_name.trim();
    let mut dims = 0;
    while let Some(inner) = base.strip_suffix("[]") {
        dims += 1;
        base = inner.trim_end();
    }

    let core = match base {
        "void" => "V".to_string(),
        "boolean" => "Z".to_string(),
        "byte" => "B".to_string(),
        "short" => "S".to_string(),
        "char" => "C".to_string(),
        "int" => "I".to_string(),
        "long" => "J".to_string(),
        "float" => "F".to_string(),
        "double" => "D".to_string(),
        other => format!("L{};", other.replace('.', "/")),
    };
    format!("{}{}", "[".repeat(dims), core)
}

/// `keyword flags... rest`, skipping the flags when there are none
fn directive(keyword: &str, access: &[String], rest: &str) -> String {
    if access.is_empty() {
        format!("{} {}", keyword, rest)
    } else {
        format!("{} {} {}", keyword, access.join(" "), rest)
    }
}

fn method_descriptor(method: &MethodRecord) -> String {
    let params: String = method
        .parameters
        .iter()
        .map(|p| descriptor(&p.type_name))
        .collect();
    format!("{}({}){}", method.name, params, descriptor(method.return_type()))
}

fn separate(out: &mut dyn fmt::Write, wrote: &mut bool) -> fmt::Result {
    if *wrote {
        writeln!(out)?;
    }
    *wrote = true;
    Ok(())
}

impl Renderer for SmaliRenderer {
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
        let mut wrote = false;

        if options.contains(DisplayOptions::NAME) {
            separate(out, &mut wrote)?;
            writeln!(
                out,
                "{}",
                directive(".class", &class.access, &descriptor(&class.qualified_name))
            )?;
        }

        if options.contains(DisplayOptions::DETAILS) {
            if class.superclass.is_some() || class.source_file.is_some() {
                separate(out, &mut wrote)?;
                if let Some(superclass) = &class.superclass {
                    writeln!(out, ".super {}", descriptor(superclass))?;
                }
                if let Some(file) = &class.source_file {
                    writeln!(out, ".source \"{}\"", file)?;
                }
            }
            if !class.interfaces.is_empty() {
                separate(out, &mut wrote)?;
                writeln!(out, "# interfaces")?;
                for interface in &class.interfaces {
                    writeln!(out, ".implements {}", descriptor(interface))?;
                }
            }
            let members: Vec<_> = source.member_classes(&class.qualified_name).collect();
            if !members.is_empty() {
                separate(out, &mut wrote)?;
                writeln!(out, "# member classes")?;
                for member in members {
                    writeln!(out, "# {}", descriptor(&member.qualified_name))?;
                }
            }
        }

        if options.contains(DisplayOptions::ANNOTATIONS) && !class.annotations.is_empty() {
            separate(out, &mut wrote)?;
            writeln!(out, "# annotations")?;
            for annotation in &class.annotations {
                writeln!(out, ".annotation runtime {}", descriptor(annotation))?;
                writeln!(out, ".end annotation")?;
            }
        }

        if options.contains(DisplayOptions::FIELDS) && !class.fields.is_empty() {
            separate(out, &mut wrote)?;
            writeln!(out, "# fields")?;
            for field in &class.fields {
                let mut line = directive(
                    ".field",
                    &field.access,
                    &format!("{}:{}", field.name, descriptor(&field.type_name)),
                );
                if let Some(value) = &field.value {
                    line.push_str(" = ");
                    line.push_str(value);
                }
                writeln!(out, "{}", line)?;
            }
        }

        for method in &class.methods {
            separate(out, &mut wrote)?;
            self.render_method(source, class, method, out, Indentation::new(), false)?;
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
            writeln!(out, "{}# {}", indent, descriptor(&class.qualified_name))?;
        }
        writeln!(
            out,
            "{}{}",
            indent,
            directive(".method", &method.access, &method_descriptor(method))
        )?;

        let inner = indent.deeper();
        for annotation in &method.annotations {
            writeln!(out, "{}.annotation runtime {}", inner, descriptor(annotation))?;
            writeln!(out, "{}.end annotation", inner)?;
        }
        for line in &method.body {
            writeln!(out, "{}{}", inner, line)?;
        }
        writeln!(out, "{}.end method", indent)?;
        Ok(())
    }
}
