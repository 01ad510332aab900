//! Document model for front matter updates
//!
//! A document is an optional leading YAML block delimited by `---` lines,
//! followed by a body that is carried through untouched.

use crate::error::{HeroError, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Front matter delimiter line
pub const DELIMITER: &str = "---";

/// Key that points at the hero image
pub const IMAGE_KEY: &str = "image";

/// Directory the image reference is written relative to
pub const IMAGE_DIR: &str = "images";

/// A text document split into front matter and body
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    front_matter: Mapping,
    has_block: bool,
    body: String,
}

impl Document {
    /// Split `content` into front matter and body
    ///
    /// `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let Some((block, body)) = split_front_matter(content, path)? else {
            return Ok(Self {
                front_matter: Mapping::new(),
                has_block: false,
                body: content.to_string(),
            });
        };

        let front_matter = if block.trim().is_empty() {
            Mapping::new()
        } else {
            match serde_yaml::from_str::<Value>(block) {
                Ok(Value::Mapping(map)) => map,
                Ok(Value::Null) => Mapping::new(),
                Ok(other) => {
                    return Err(HeroError::invalid_front_matter(
                        path,
                        format!("expected a mapping, found {}", kind_name(&other)),
                    ))
                }
                Err(e) => return Err(HeroError::invalid_front_matter(path, e.to_string())),
            }
        };

        Ok(Self {
            front_matter,
            has_block: true,
            body: body.to_string(),
        })
    }

    pub fn front_matter(&self) -> &Mapping {
        &self.front_matter
    }

    /// Whether the source text had a front matter block
    pub fn has_block(&self) -> bool {
        self.has_block
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.front_matter.get(key)
    }

    /// Set a key, replacing its value in place or appending it
    pub fn set(&mut self, key: &str, value: Value) {
        self.front_matter.insert(Value::String(key.to_string()), value);
    }

    /// Point the `image` key at `images/<file name of image_path>`
    pub fn set_image<P: AsRef<Path>>(&mut self, image_path: P) -> Result<String> {
        let reference = image_reference(image_path)?;
        self.set(IMAGE_KEY, Value::String(reference.clone()));
        Ok(reference)
    }

    /// Render the document back to text
    pub fn to_text(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&Value::Mapping(self.front_matter.clone()))?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n{}", self.body))
    }
}

/// Relative reference to an image as stored in front matter
pub fn image_reference<P: AsRef<Path>>(image_path: P) -> Result<String> {
    let image_path = image_path.as_ref();
    let name = image_path.file_name().ok_or_else(|| {
        HeroError::config(format!(
            "image path {} has no file name",
            image_path.display()
        ))
    })?;
    Ok(format!("{IMAGE_DIR}/{}", name.to_string_lossy()))
}

/// Find the `---` delimited block at the very start of `content`
///
/// Returns the block text and the body after the closing line, or `None`
/// when the document does not open with a delimiter line.
fn split_front_matter<'a>(content: &'a str, path: &Path) -> Result<Option<(&'a str, &'a str)>> {
    let Some(after_open) = strip_delimiter_line(content) else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if is_delimiter(line) {
            let block = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return Ok(Some((block, body)));
        }
        offset += line.len();
    }

    Err(HeroError::invalid_front_matter(
        path,
        "missing closing '---' delimiter",
    ))
}

/// If `content` starts with a delimiter line, return what follows it
fn strip_delimiter_line(content: &str) -> Option<&str> {
    let first_len = content.find('\n').map_or(content.len(), |i| i + 1);
    let first = &content[..first_len];
    is_delimiter(first).then(|| &content[first_len..])
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches('\n').trim_end_matches('\r') == DELIMITER
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
