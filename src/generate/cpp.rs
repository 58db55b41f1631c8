use crate::generate::left_pad;
use crate::types::{InsertionType, MessageDeclaration};
use std::fmt::Write;

const BASE_EXCEPTION: &str = "Exception";
const BASE_EXCEPTION_HEADER: &str = "\"Exception.h\"";

fn insertion_type_to_cpp_type(insertion_type: InsertionType) -> &'static str {
    match insertion_type {
        InsertionType::WideChar => "wchar_t",
        InsertionType::I16 => "short",
        InsertionType::I32 => "int",
        InsertionType::Long => "long",
        InsertionType::U16 => "unsigned short",
        InsertionType::U32 => "unsigned int",
        InsertionType::ULong => "unsigned long",
        InsertionType::NarrowString => "char const*",
        InsertionType::WideString => "wchar_t const*",
        InsertionType::ConstPointer => "void const*",
    }
}

/// Includes already wrapped in quotes or angle brackets are kept as is.
fn include_directive(include: &str) -> String {
    let include = include.trim();
    if (include.starts_with('"') && include.ends_with('"') && include.len() > 1)
        || (include.starts_with('<') && include.ends_with('>'))
    {
        include.to_string()
    } else {
        format!("\"{include}\"")
    }
}

#[derive(Debug, Default)]
struct CppSourceBuilder {
    buffer: String,
    indentation: usize,
}

macro_rules! cpp_source_builder_writeln {
    ($self:expr) => {{
        writeln!($self.buffer).unwrap();
    }};
    ($self:expr, $($arg:tt)*) => {{
        if $self.indentation != 0 {
            left_pad($self.indentation, &mut $self.buffer).unwrap();
        }
        writeln!($self.buffer, $($arg)*).unwrap();
    }};
}

impl CppSourceBuilder {
    #[inline]
    pub fn push_indentation_level(&mut self) {
        self.indentation += 4;
    }

    #[inline]
    pub fn pop_indentation_level(&mut self) {
        if self.indentation >= 4 {
            self.indentation -= 4;
        }
    }
}

impl CppSourceBuilder {
    #[inline]
    pub fn result(self) -> String {
        self.buffer
    }

    #[inline]
    pub fn write_header_guard_start(&mut self, module_name: &str) {
        cpp_source_builder_writeln!(self, "#ifndef __AUTOGEN_{module_name}_H_");
        cpp_source_builder_writeln!(self, "#define __AUTOGEN_{module_name}_H_");
        cpp_source_builder_writeln!(self);
    }

    #[inline]
    pub fn write_header_guard_end(&mut self, module_name: &str) {
        cpp_source_builder_writeln!(self, "#endif\t// __AUTOGEN_{module_name}_H_");
    }

    #[inline]
    pub fn write_include_headers(&mut self, includes: &[String]) {
        cpp_source_builder_writeln!(self, "#include {BASE_EXCEPTION_HEADER}");
        for include in includes {
            cpp_source_builder_writeln!(self, "#include {}", include_directive(include));
        }
        cpp_source_builder_writeln!(self);
    }

    #[inline]
    pub fn write_warning_level_start(&mut self) {
        cpp_source_builder_writeln!(self, "#pragma warning(push, 4)");
        cpp_source_builder_writeln!(self);
    }

    #[inline]
    pub fn write_warning_level_end(&mut self) {
        cpp_source_builder_writeln!(self, "#pragma warning(pop)");
        cpp_source_builder_writeln!(self);
    }

    /// Constructor argument types depend on _UNICODE, so refuse to compile
    /// in a project configured the other way.
    pub fn write_unicode_check(&mut self, wide_char_mode: bool) {
        if wide_char_mode {
            cpp_source_builder_writeln!(self, "#ifndef _UNICODE");
            cpp_source_builder_writeln!(
                self,
                "#error Auto-generated exception classes require _UNICODE to be defined for this project"
            );
        } else {
            cpp_source_builder_writeln!(self, "#ifdef _UNICODE");
            cpp_source_builder_writeln!(
                self,
                "#error Auto-generated exception classes require _UNICODE is not defined for this project"
            );
        }
        cpp_source_builder_writeln!(self, "#endif");
        cpp_source_builder_writeln!(self);
    }

    pub fn write_message_comment(&mut self, declaration: &MessageDeclaration) {
        cpp_source_builder_writeln!(self, "// {}", declaration.type_name);
        cpp_source_builder_writeln!(self, "//");
        for line in declaration
            .message_text
            .lines()
            .filter(|line| !line.is_empty())
        {
            cpp_source_builder_writeln!(self, "// {line}");
        }
    }

    #[inline]
    pub fn write_struct_start(&mut self, struct_name: &str) {
        cpp_source_builder_writeln!(self, "struct {struct_name} : public {BASE_EXCEPTION}");
        cpp_source_builder_writeln!(self, "{{");
    }

    #[inline]
    pub fn write_struct_end(&mut self) {
        cpp_source_builder_writeln!(self, "}};\n");
    }

    pub fn write_constructor(&mut self, declaration: &MessageDeclaration) {
        let struct_name = &declaration.type_name;

        let parameters = declaration
            .insertions
            .iter()
            .map(|insertion| {
                format!(
                    "{} {}",
                    insertion_type_to_cpp_type(insertion.ty),
                    insertion.name
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        let arguments = std::iter::once(declaration.symbolic_name.as_str())
            .chain(
                declaration
                    .insertions
                    .iter()
                    .map(|insertion| insertion.name.as_str()),
            )
            .collect::<Vec<_>>()
            .join(", ");

        self.push_indentation_level();
        cpp_source_builder_writeln!(
            self,
            "explicit {struct_name}({parameters}) : {BASE_EXCEPTION}{{ {arguments} }} {{}}"
        );
        self.pop_indentation_level();
    }

    #[inline]
    pub fn write_destructor(&mut self, struct_name: &str) {
        self.push_indentation_level();
        cpp_source_builder_writeln!(self, "virtual ~{struct_name}()=default;");
        self.pop_indentation_level();
    }
}

/// Renders one exception type per declaration, in input order.
pub(crate) fn generate_exceptions(
    module_name: &str,
    declarations: &[MessageDeclaration],
    includes: &[String],
    wide_char_mode: bool,
) -> String {
    let mut source_builder = CppSourceBuilder::default();

    source_builder.write_header_guard_start(module_name);
    source_builder.write_include_headers(includes);
    source_builder.write_warning_level_start();
    source_builder.write_unicode_check(wide_char_mode);

    for declaration in declarations {
        source_builder.write_message_comment(declaration);
        source_builder.write_struct_start(&declaration.type_name);
        source_builder.write_constructor(declaration);
        source_builder.write_destructor(&declaration.type_name);
        source_builder.write_struct_end();
    }

    source_builder.write_warning_level_end();
    source_builder.write_header_guard_end(module_name);

    source_builder.result()
}
