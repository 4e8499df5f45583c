//! Go import block collection and rendering.

use std::collections::BTreeSet;

use crate::CodeBuilder;

/// Collects import paths and renders them as a single gofmt-style block.
///
/// Standard library packages come first, followed by a blank line and the
/// third-party packages. Both groups are sorted.
#[derive(Debug, Default, Clone)]
pub struct GoImports {
    std: BTreeSet<String>,
    external: BTreeSet<String>,
}

impl GoImports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path. Duplicates are ignored.
    pub fn add(&mut self, path: &str) {
        if is_std(path) {
            self.std.insert(path.to_string());
        } else {
            self.external.insert(path.to_string());
        }
    }

    /// Builder-style variant of [`GoImports::add`].
    pub fn with(mut self, path: &str) -> Self {
        self.add(path);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.std.is_empty() && self.external.is_empty()
    }

    /// Render the import block followed by a blank line, or nothing if empty.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.is_empty() {
            return builder;
        }

        let separate = !self.std.is_empty() && !self.external.is_empty();
        builder
            .line("import (")
            .indent()
            .each(&self.std, |b, path| b.line(&format!("\"{}\"", path)))
            .when(separate, |b| b.blank())
            .each(&self.external, |b, path| b.line(&format!("\"{}\"", path)))
            .dedent()
            .line(")")
            .blank()
    }
}

/// Standard library paths have no dot in their first element.
fn is_std(path: &str) -> bool {
    let first = path.split('/').next().unwrap_or(path);
    !first.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        let code = GoImports::new().render(CodeBuilder::new()).build();
        assert_eq!(code, "");
    }

    #[test]
    fn test_groups_and_sorting() {
        let imports = GoImports::new()
            .with("gorm.io/gorm")
            .with("net/http")
            .with("encoding/json")
            .with("net/http");
        let code = imports.render(CodeBuilder::new()).build();

        assert_eq!(
            code,
            "import (\n\t\"encoding/json\"\n\t\"net/http\"\n\n\t\"gorm.io/gorm\"\n)\n\n"
        );
    }

    #[test]
    fn test_single_group() {
        let code = GoImports::new()
            .with("time")
            .render(CodeBuilder::new())
            .build();
        assert_eq!(code, "import (\n\t\"time\"\n)\n\n");
    }
}
