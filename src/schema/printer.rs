use super::schema::*;
use crate::value::Value;
use std::{fmt, fmt::Write};

/// Trait for printing schema nodes as GraphQL SDL to a new String allocated on the heap.
///
/// This is implemented by a [Schema], all of its named types and fields, type references and
/// values. Mostly this will be used via `Schema::print`, which prints every registered type in
/// registration order. Built-in scalars and the `schema { ... }` block are left out, since the root
/// types always carry their conventional names.
pub trait PrintNode {
    /// Write a node to a buffer implementing the [Write] trait.
    ///
    /// The `level` indicates the level of nesting, which increases with each block of fields and
    /// is typically initialized as zero (`0`).
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Print a node to SDL as a String allocated on the heap.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

impl PrintNode for Value {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Null => buffer.write_str("null"),
            Value::Boolean(true) => buffer.write_str("true"),
            Value::Boolean(false) => buffer.write_str("false"),
            Value::Int(value) => write!(buffer, "{}", value),
            Value::Float(value) => {
                let mut buf = [b'0'; lexical_core::BUFFER_SIZE];
                let digits = lexical_core::write(*value, &mut buf);
                buffer.write_str(std::str::from_utf8(digits).map_err(|_| fmt::Error)?)
            }
            Value::String(value) => write_string(value, buffer),
            Value::Enum(value) => buffer.write_str(value),
            Value::List(values) => {
                buffer.write_char('[')?;
                let mut first = true;
                for value in values.iter() {
                    if first {
                        first = false;
                    } else {
                        buffer.write_str(", ")?;
                    }
                    value.write_to_buffer(level, buffer)?;
                }
                buffer.write_char(']')
            }
            Value::Object(fields) => {
                buffer.write_char('{')?;
                let mut first = true;
                for (name, value) in fields.iter() {
                    if first {
                        first = false;
                    } else {
                        buffer.write_str(", ")?;
                    }
                    write!(buffer, "{}: ", name)?;
                    value.write_to_buffer(level, buffer)?;
                }
                buffer.write_char('}')
            }
        }
    }
}

impl<'a> PrintNode for TypeRef<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            TypeRef::Named(of_type) => buffer.write_str(of_type.name()),
            TypeRef::List(of_type) => {
                buffer.write_char('[')?;
                of_type.write_to_buffer(level, buffer)?;
                buffer.write_char(']')
            }
            TypeRef::NonNull(of_type) => {
                of_type.write_to_buffer(level, buffer)?;
                buffer.write_char('!')
            }
        }
    }
}

impl<'a> PrintNode for SchemaInputField<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        write!(buffer, "{}: ", self.name)?;
        self.input_type.write_to_buffer(level, buffer)?;
        if let Some(default_value) = self.default_value {
            buffer.write_str(" = ")?;
            default_value.write_to_buffer(level, buffer)?;
        }
        write_deprecation(self.deprecation_reason, buffer)
    }
}

impl<'a> PrintNode for SchemaField<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        buffer.write_str(self.name)?;
        if !self.arguments.is_empty() {
            buffer.write_char('(')?;
            if self.arguments.iter().any(|arg| arg.description.is_some()) {
                for argument in self.arguments.iter() {
                    buffer.write_char('\n')?;
                    write_indent(level + 1, buffer)?;
                    argument.write_to_buffer(level + 1, buffer)?;
                }
                buffer.write_char('\n')?;
                write_indent(level, buffer)?;
            } else {
                let mut first = true;
                for argument in self.arguments.iter() {
                    if first {
                        first = false;
                    } else {
                        buffer.write_str(", ")?;
                    }
                    argument.write_to_buffer(level, buffer)?;
                }
            }
            buffer.write_char(')')?;
        }
        buffer.write_str(": ")?;
        self.output_type.write_to_buffer(level, buffer)?;
        write_deprecation(self.deprecation_reason, buffer)
    }
}

impl<'a> PrintNode for SchemaEnumValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        buffer.write_str(self.name)?;
        write_deprecation(self.deprecation_reason, buffer)
    }
}

impl<'a> PrintNode for SchemaObject<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        write!(buffer, "type {}", self.name)?;
        write_interfaces(self.get_interfaces(), buffer)?;
        write_block(self.get_fields(), level, buffer)
    }
}

impl<'a> PrintNode for SchemaInterface<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        write!(buffer, "interface {}", self.name)?;
        write_interfaces(self.get_interfaces(), buffer)?;
        write_block(self.get_fields(), level, buffer)
    }
}

impl<'a> PrintNode for SchemaUnion<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        write!(buffer, "union {}", self.name)?;
        let mut first = true;
        for possible_type in self.get_possible_types() {
            if first {
                first = false;
                buffer.write_str(" = ")?;
            } else {
                buffer.write_str(" | ")?;
            }
            buffer.write_str(possible_type.name)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for SchemaScalar<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        write!(buffer, "scalar {}", self.name)?;
        if let Some(url) = self.specified_by_url {
            buffer.write_str(" @specifiedBy(url: ")?;
            write_string(url, buffer)?;
            buffer.write_char(')')?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for SchemaEnum<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        write!(buffer, "enum {}", self.name)?;
        write_block(&self.values, level, buffer)
    }
}

impl<'a> PrintNode for SchemaInputObject<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(self.description, level, buffer)?;
        write!(buffer, "input {}", self.name)?;
        write_block(self.get_fields(), level, buffer)
    }
}

impl<'a> PrintNode for SchemaType<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            SchemaType::InputObject(x) => x.write_to_buffer(level, buffer),
            SchemaType::Object(x) => x.write_to_buffer(level, buffer),
            SchemaType::Union(x) => x.write_to_buffer(level, buffer),
            SchemaType::Interface(x) => x.write_to_buffer(level, buffer),
            SchemaType::Scalar(x) => x.write_to_buffer(level, buffer),
            SchemaType::Enum(x) => x.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for Schema<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let mut first = true;
        for schema_type in self.types() {
            if matches!(schema_type, SchemaType::Scalar(scalar) if scalar.is_builtin()) {
                continue;
            }
            if first {
                first = false;
            } else {
                buffer.write_str("\n\n")?;
            }
            schema_type.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }
}

fn write_interfaces(interfaces: &[&SchemaInterface<'_>], buffer: &mut dyn Write) -> fmt::Result {
    let mut first = true;
    for interface in interfaces {
        if first {
            first = false;
            buffer.write_str(" implements ")?;
        } else {
            buffer.write_str(" & ")?;
        }
        buffer.write_str(interface.name)?;
    }
    Ok(())
}

/// Writes a braced block with one member per line, or nothing for an empty block.
fn write_block<T: PrintNode>(members: &[T], level: usize, buffer: &mut dyn Write) -> fmt::Result {
    if !members.is_empty() {
        let level = level + 1;
        buffer.write_str(" {")?;
        for member in members {
            buffer.write_char('\n')?;
            write_indent(level, buffer)?;
            member.write_to_buffer(level, buffer)?;
        }
        buffer.write_char('\n')?;
        write_indent(level - 1, buffer)?;
        buffer.write_char('}')
    } else {
        Ok(())
    }
}

/// Writes a description as a block string, followed by the indentation of the described element.
fn write_description(
    description: Option<&str>,
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    let Some(description) = description else {
        return Ok(());
    };
    let description = description.replace(r#"""""#, r#"\""""#);
    buffer.write_str("\"\"\"\n")?;
    for line in description.lines() {
        if !line.trim().is_empty() {
            write_indent(level, buffer)?;
            buffer.write_str(line)?;
        }
        buffer.write_char('\n')?;
    }
    write_indent(level, buffer)?;
    buffer.write_str("\"\"\"")?;
    buffer.write_char('\n')?;
    write_indent(level, buffer)
}

fn write_deprecation(reason: Option<&str>, buffer: &mut dyn Write) -> fmt::Result {
    match reason {
        Some(reason) if is_default_deprecation(reason) => buffer.write_str(" @deprecated"),
        Some(reason) => {
            buffer.write_str(" @deprecated(reason: ")?;
            write_string(reason, buffer)?;
            buffer.write_char(')')
        }
        None => Ok(()),
    }
}

// See: https://github.com/graphql-rust/graphql-parser/blob/ff34bae/src/format.rs#L127-L167
fn write_string(value: &str, buffer: &mut dyn Write) -> fmt::Result {
    use lexical_core::*;
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();
    let mut buf = [b'0'; u32::FORMATTED_SIZE];

    buffer.write_char('"')?;
    for c in value.chars() {
        match c {
            '\r' => buffer.write_str(r"\r")?,
            '\n' => buffer.write_str(r"\n")?,
            '\t' => buffer.write_str(r"\t")?,
            '"' => buffer.write_str("\\\"")?,
            '\\' => buffer.write_str(r"\\")?,
            '\u{0020}'..='\u{FFFF}' => buffer.write_char(c)?,
            _ => {
                let digits = write_with_options::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                let digits = std::str::from_utf8(digits).map_err(|_| fmt::Error)?;
                write!(buffer, "\\u{:0>4}", digits)?;
            }
        };
    }
    buffer.write_char('"')
}

#[inline(always)]
fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?
    }
    Ok(())
}
