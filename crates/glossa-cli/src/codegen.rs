//! Generates `bundle_lines!` enums from bundle keys.

use std::collections::HashMap;

use thiserror::Error;

/// Errors produced while generating a key enum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodegenError {
    #[error("bundle has no keys")]
    NoKeys,

    #[error("key {key:?} has no letters or digits to name a variant")]
    EmptyVariant { key: String },

    #[error("keys {first:?} and {second:?} both map to variant {variant}")]
    Collision {
        first: String,
        second: String,
        variant: String,
    },
}

/// Turn a bundle key into an UpperCamelCase variant name.
///
/// Any run of characters other than ASCII letters and digits separates words.
pub fn to_variant_name(key: &str) -> Result<String, CodegenError> {
    let mut name = String::with_capacity(key.len());
    for word in key.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.extend(chars);
        }
    }

    if name.is_empty() {
        return Err(CodegenError::EmptyVariant {
            key: key.to_string(),
        });
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if name == "Self" {
        name.push('_');
    }
    Ok(name)
}

/// Render a `bundle_lines!` invocation declaring `enum_name` over `keys`.
pub fn generate_enum<'a>(
    enum_name: &str,
    source_file: &str,
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<String, CodegenError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut variants = Vec::new();

    for key in keys {
        let variant = to_variant_name(key)?;
        if let Some(first) = seen.get(&variant) {
            return Err(CodegenError::Collision {
                first: first.to_string(),
                second: key.to_string(),
                variant,
            });
        }
        seen.insert(variant.clone(), key);
        variants.push((variant, key));
    }

    if variants.is_empty() {
        return Err(CodegenError::NoKeys);
    }

    let mut out = format!("// Generated by glossa from {source_file}. Do not edit.\n\n");
    out.push_str("glossa_i18n::bundle_lines! {\n");
    out.push_str(&format!("    /// Keys of `{source_file}`.\n"));
    out.push_str(&format!("    pub enum {enum_name} {{\n"));
    for (variant, key) in &variants {
        let line = if variant == key {
            format!("        {variant},\n")
        } else {
            format!("        {variant} = {key:?},\n")
        };
        out.push_str(&line);
    }
    out.push_str("    }\n}\n");

    tracing::debug!(enum_name, variants = variants.len(), "generated key enum");
    Ok(out)
}
