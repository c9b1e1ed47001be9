////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::{collections::BTreeSet, fmt, fs::File, io, path::Path, str::FromStr};

use xmltree::{Element, XMLNode};

use crate::error::{Error, Result};

pub mod fragment;

use self::fragment::TypeExpr;

/// The value matched against the `api` attribute of `<feature>` sections, e.g. `gles2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile(pub String);

impl Profile {
    pub fn new<S: Into<String>>(name: S) -> Profile {
        Profile(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

/// Names of the commands a profile requires. A name required by several features is kept once.
pub type RequiredSet = BTreeSet<String>;

/// A parsed registry, reduced to the top-level sections the generators read.
///
/// Loading happens in two phases: the document is parsed into a tree, then the root's children
/// are scanned once to locate the sections. Extraction only starts after both succeeded.
#[derive(Debug, Clone)]
pub struct Registry {
    commands: Element,
    features: Vec<Element>,
}

impl Registry {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Registry> {
        let path = path.as_ref();
        debug!("loading registry from {}", path.display());
        Registry::from_reader(io::BufReader::new(File::open(path)?))
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Registry> {
        let root = Element::parse(reader).map_err(|e| Error::MalformedRegistry(e.to_string()))?;
        Registry::from_document(root)
    }

    /// Locates the `<commands>` section and every `<feature>` section below the root.
    pub fn from_document(root: Element) -> Result<Registry> {
        let mut commands = None;
        let mut features = Vec::new();

        for node in root.children {
            let element = match node {
                XMLNode::Element(element) => element,
                _ => continue,
            };
            if element.name == "commands" {
                if commands.is_some() {
                    return Err(Error::DuplicateSection("commands"));
                }
                commands = Some(element);
            } else if element.name == "feature" {
                features.push(element);
            }
        }

        let commands = commands.ok_or(Error::MissingSection("commands"))?;
        debug!("registry declares {} command(s) and {} feature(s)", elements(&commands).count(), features.len());

        Ok(Registry { commands, features })
    }

    /// Every command name required by a feature whose `api` is `profile`.
    ///
    /// Names are not checked against the command definitions here.
    pub fn required_commands(&self, profile: &Profile) -> RequiredSet {
        let mut required = RequiredSet::new();

        for feature in self.features.iter().filter(|f| attr(f, "api") == Some(profile.as_str())) {
            for require in elements_named(feature, "require") {
                for command in elements_named(require, "command") {
                    match attr(command, "name") {
                        Some(name) => {
                            required.insert(name.to_owned());
                        },
                        None => warn!("feature {:?} requires a command without a name", attr(feature, "name")),
                    }
                }
            }
        }

        debug!("profile {} requires {} command(s)", profile, required.len());
        required
    }

    /// All command definitions in declaration order.
    ///
    /// Fails on the first command whose prototype cannot be resolved to a name.
    pub fn commands(&self) -> Result<Vec<Command<'_>>> {
        elements(&self.commands).enumerate().map(|(index, element)| Command::from_element(index, element)).collect()
    }
}

impl FromStr for Registry {
    type Err = Error;

    fn from_str(xml: &str) -> Result<Registry> {
        Registry::from_reader(xml.as_bytes())
    }
}

fn attr<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element.attributes.get(name).map(String::as_str)
}

fn elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(XMLNode::as_element)
}

fn elements_named<'a>(element: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    elements(element).filter(move |child| child.name == name)
}

/// A view over one `<command>` definition.
#[derive(Debug, Clone, Copy)]
pub struct Command<'a> {
    pub name: &'a str,
    proto: &'a Element,
    element: &'a Element,
}

impl<'a> Command<'a> {
    fn from_element(index: usize, element: &'a Element) -> Result<Command<'a>> {
        if element.name != "command" {
            return Err(Error::UnexpectedElement { found: element.name.clone() });
        }

        let proto = elements(element)
            .next()
            .filter(|first| first.name == "proto")
            .ok_or(Error::MissingPrototype { index })?;

        let name = elements_named(proto, "name")
            .next()
            .and_then(|name| fragment::text_run(&name.children).next())
            .ok_or(Error::MissingName { index })?;

        Ok(Command { name, proto, element })
    }

    pub fn return_type(&self) -> TypeExpr<'a> {
        TypeExpr::of(self.proto)
    }

    /// Parameter types in declaration order. Parameter names are not part of the result.
    pub fn param_types(&self) -> Vec<TypeExpr<'a>> {
        elements_named(self.element, "param").map(TypeExpr::of).collect()
    }
}
