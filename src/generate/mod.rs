pub mod cpp;

use std::path::Path;

pub(crate) fn left_pad<W: std::fmt::Write>(padding: usize, mut buffer: W) -> std::fmt::Result {
    write!(buffer, "{:padding$}", "")
}

/// Derives the module name of a generated file from its path: the file stem,
/// uppercased, with anything that cannot appear in a macro name replaced by `_`.
pub(crate) fn module_name(output: &Path) -> String {
    output
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_name_is_uppercased_file_stem() {
        assert_eq!(module_name(Path::new("out/messages.h")), "MESSAGES");
        assert_eq!(module_name(Path::new("vm-errors.v2.h")), "VM_ERRORS_V2");
        assert_eq!(module_name(Path::new("exceptions")), "EXCEPTIONS");
    }

    #[test]
    fn left_pad_writes_spaces() {
        let mut buffer = String::from("x");
        left_pad(4, &mut buffer).unwrap();
        assert_eq!(buffer, "x    ");
    }
}
