////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use lazy_static::*;
use regex::Regex;
use xmltree::{Element, XMLNode};

lazy_static! {
    static ref SPACE_BEFORE_POINTER: Regex = Regex::new(r"\s+\*").unwrap();
}

/// One piece of a C type as written in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Free character data, e.g. `const ` or ` *`.
    Text(&'a str),
    /// The content of a `<ptype>` element, e.g. `GLint`.
    TypeName(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Fragment::Text(text) | Fragment::TypeName(text) => text,
        }
    }
}

/// The type part of a `<proto>` or `<param>`, kept as the ordered fragments it was split into.
///
/// The type is the element's leading text, then the first `<ptype>` child, then the text right
/// after that `<ptype>`. Anything after the next element (the `<name>`) is not part of the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr<'a> {
    pub fragments: Vec<Fragment<'a>>,
}

impl<'a> TypeExpr<'a> {
    pub fn of(element: &'a Element) -> TypeExpr<'a> {
        let mut fragments = Vec::with_capacity(3);

        fragments.extend(text_run(&element.children).map(Fragment::Text));

        let ptype = element.children.iter().enumerate().find_map(|(index, node)| match node {
            XMLNode::Element(child) if child.name == "ptype" => Some((index, child)),
            _ => None,
        });
        if let Some((index, ptype)) = ptype {
            fragments.extend(text_run(&ptype.children).map(Fragment::TypeName));
            fragments.extend(text_run(&element.children[index + 1..]).map(Fragment::Text));
        }

        TypeExpr { fragments }
    }

    /// The fragments joined exactly as they appear in the registry.
    pub fn raw(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }

    /// The canonical spelling used in generated code, see [`tidy_type`].
    pub fn normalized(&self) -> String {
        tidy_type(&self.raw())
    }
}

/// Character data at the start of `nodes`, up to the first element.
///
/// Comments between two runs of text do not end the run.
pub fn text_run<'a>(nodes: &'a [XMLNode]) -> impl Iterator<Item = &'a str> + 'a {
    nodes
        .iter()
        .take_while(|node| !matches!(node, XMLNode::Element(_)))
        .filter_map(|node| match node {
            XMLNode::Text(text) | XMLNode::CData(text) => Some(text.as_str()),
            _ => None,
        })
}

/// Removes whitespace in front of every `*` and trims the result.
///
/// `"const GLchar *const*"` becomes `"const GLchar*const*"`.
pub fn tidy_type(type_text: &str) -> String {
    SPACE_BEFORE_POINTER.replace_all(type_text, "*").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    fn normalized(xml: &str) -> String {
        TypeExpr::of(&parse(xml)).normalized()
    }

    #[test]
    fn modifier_typename_and_pointer_are_all_kept() {
        let element = parse("<proto>const <ptype>GLint</ptype> *<name>glFoo</name></proto>");
        let ty = TypeExpr::of(&element);

        assert_eq!(ty.fragments, [Fragment::Text("const "), Fragment::TypeName("GLint"), Fragment::Text(" *")]);
        assert_eq!(ty.raw(), "const GLint *");
        assert_eq!(ty.normalized(), "const GLint*");
    }

    #[test]
    fn plain_text_types() {
        assert_eq!(normalized("<proto>void <name>glFinish</name></proto>"), "void");
        assert_eq!(normalized("<param>const void *<name>data</name></param>"), "const void*");
        assert_eq!(normalized("<param>void *<name>userParam</name></param>"), "void*");
    }

    #[test]
    fn typename_only() {
        assert_eq!(normalized("<param><ptype>GLenum</ptype> <name>target</name></param>"), "GLenum");
        assert_eq!(normalized("<proto><ptype>GLuint</ptype> <name>glCreateProgram</name></proto>"), "GLuint");
    }

    #[test]
    fn pointer_to_pointer() {
        assert_eq!(
            normalized("<param>const <ptype>GLchar</ptype> *const*<name>string</name></param>"),
            "const GLchar*const*"
        );
        assert_eq!(normalized("<param><ptype>GLint</ptype> **<name>p</name></param>"), "GLint**");
    }

    #[test]
    fn text_split_by_a_comment_or_cdata_stays_in_order() {
        assert_eq!(normalized("<param>const <!-- note -->void *<name>data</name></param>"), "const void*");
        assert_eq!(normalized("<param><![CDATA[const ]]><ptype>GLint</ptype> *<name>p</name></param>"), "const GLint*");
    }

    #[test]
    fn text_after_the_name_is_ignored() {
        assert_eq!(normalized("<param><ptype>GLfloat</ptype> <name>v</name>[4]</param>"), "GLfloat");
    }

    #[test]
    fn tidy_type_collapses_any_whitespace_run_before_a_pointer() {
        assert_eq!(tidy_type("  const GLint  * "), "const GLint*");
        assert_eq!(tidy_type("GLint\t*"), "GLint*");
        assert_eq!(tidy_type("GLsync"), "GLsync");
        assert_eq!(tidy_type(""), "");
    }
}
