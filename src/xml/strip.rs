use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static XMLNS_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s*xmlns(:[A-Za-z_][\w.\-]*)?\s*=\s*("[^"]*"|'[^']*')"#)
        .expect("xmlns pattern is valid")
});

/// Removes every `xmlns` / `xmlns:<prefix>` attribute declaration from raw
/// XML text, leaving tag names and all other attributes untouched.
///
/// Model-generated plans frequently carry a `targetNamespace` declaration
/// copied from the schema they were prompted with; stripping it lets the
/// graph builder match tag names without caring about prefixes. This is a
/// pure text substitution: malformed XML is not detected here, only by the
/// parser downstream.
pub fn strip_namespaces(xml: &str) -> Cow<'_, str> {
    XMLNS_DECLARATION.replace_all(xml, "")
}
