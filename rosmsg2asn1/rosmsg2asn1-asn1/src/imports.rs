//! Per-record aggregation of ASN.1 import clauses.

/// Mapping from import library to the type names required from it.
///
/// First-insertion order of both libraries and type names is preserved so
/// that a given record always renders the same `IMPORTS` clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `type_name` must be imported from `library`.
    ///
    /// A type already present for that library is not duplicated.
    pub fn add(&mut self, library: &str, type_name: &str) {
        match self.entries.iter_mut().find(|(lib, _)| lib == library) {
            Some((_, types)) => {
                if !types.iter().any(|t| t == type_name) {
                    types.push(type_name.to_string());
                }
            }
            None => self
                .entries
                .push((library.to_string(), vec![type_name.to_string()])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the `IMPORTS` clause: per library the comma-joined type names
    /// followed by `FROM <library>`, terminated with `;`.
    pub fn render(&self) -> String {
        let mut out = String::from("IMPORTS ");
        for (library, types) in &self.entries {
            out.push_str(&types.join(", "));
            out.push_str(" FROM ");
            out.push_str(library);
            out.push(' ');
        }
        out.push_str(";\n");
        out
    }
}
