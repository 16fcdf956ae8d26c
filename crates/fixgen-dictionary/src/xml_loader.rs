use crate::error::{ParseError, ParseResult};
use roxmltree::{Document, Node};

/// The `(type, major, minor)` triple from the root `fix` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixVersion {
    pub r#type: String,
    pub major: String,
    pub minor: String,
}

impl FixVersion {
    pub fn as_tag(&self) -> String {
        format!("{}.{}.{}", self.r#type, self.major, self.minor)
    }
}

pub fn parse_document(xml: &str) -> ParseResult<Document> {
    Document::parse(xml).map_err(|e| ParseError::XmlParse(e.to_string()))
}

/// Validates the root element and extracts the version triple.
pub fn root_version(root: Node) -> ParseResult<FixVersion> {
    if root.tag_name().name() != "fix" {
        return Err(ParseError::BadRoot {
            found: root.tag_name().name().to_string(),
        });
    }
    let attr = |name: &'static str| {
        root.attribute(name)
            .map(str::to_string)
            .ok_or(ParseError::MissingRootAttr(name))
    };
    Ok(FixVersion {
        r#type: attr("type")?,
        major: attr("major")?,
        minor: attr("minor")?,
    })
}

/// Finds a required direct child of the root by tag name (`fields`,
/// `components`, `messages`, `header`, `trailer`).
pub fn required_child<'a, 'input>(
    root: Node<'a, 'input>,
    name: &'static str,
) -> ParseResult<Node<'a, 'input>> {
    root.children()
        .find(|n| n.has_tag_name(name))
        .ok_or_else(|| ParseError::XmlParse(format!("`fix` element is missing `{name}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_version_triple() {
        let doc = parse_document(r#"<fix type="FIX" major="4" minor="4"></fix>"#).unwrap();
        let version = root_version(doc.root_element()).unwrap();
        assert_eq!(version.as_tag(), "FIX.4.4");
    }

    #[test]
    fn rejects_non_fix_root() {
        let doc = parse_document("<notfix></notfix>").unwrap();
        let err = root_version(doc.root_element()).unwrap_err();
        assert!(matches!(err, ParseError::BadRoot { .. }));
    }

    #[test]
    fn rejects_missing_attribute() {
        let doc = parse_document(r#"<fix type="FIX" major="4"></fix>"#).unwrap();
        let err = root_version(doc.root_element()).unwrap_err();
        assert_eq!(err, ParseError::MissingRootAttr("minor"));
    }
}
