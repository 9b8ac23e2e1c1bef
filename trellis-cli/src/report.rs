//! Reports produced by the subcommands.
//!
//! Each report is a plain serializable struct. `--json` prints it through
//! `serde_json`; otherwise [`Render`] turns it into aligned terminal text.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use serde::Serialize;
use trellis_attributes::{AttributeBytes, RawAttribute, TextEncoding};
use trellis_content::{
    Category, Condition, ConditionalMembership, Model, allows_child, categories_for,
    conditional_memberships, is_known_element, is_void, model_for, resolve_model,
};

/// Terminal styling, or none of it.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn tag(self, tag: &str) -> String {
        let text = format!("<{tag}>");
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text
        }
    }

    fn label(self, label: &str) -> String {
        let text = format!("{label:<12}");
        if self.color {
            text.dimmed().to_string()
        } else {
            text
        }
    }

    fn verdict(self, allowed: bool) -> String {
        match (allowed, self.color) {
            (true, true) => "allowed".green().bold().to_string(),
            (true, false) => "allowed".to_string(),
            (false, true) => "not allowed".red().bold().to_string(),
            (false, false) => "not allowed".to_string(),
        }
    }
}

/// Human-readable form of a report.
pub trait Render {
    fn render(&self, palette: Palette) -> String;
}

/// `trellis categories <TAG>`
#[derive(Debug, Serialize)]
pub struct CategoriesReport<'a> {
    pub tag: &'a str,
    pub known: bool,
    pub categories: BTreeSet<Category>,
    pub conditional: Vec<&'static ConditionalMembership>,
}

impl<'a> CategoriesReport<'a> {
    pub fn new(tag: &'a str) -> Self {
        Self {
            tag,
            known: is_known_element(tag),
            categories: categories_for(tag),
            conditional: conditional_memberships(tag).collect(),
        }
    }
}

impl Render for CategoriesReport<'_> {
    fn render(&self, palette: Palette) -> String {
        let mut lines = vec![
            palette.tag(self.tag),
            format!("  {}{}", palette.label("categories"), join(&self.categories)),
        ];
        for (index, membership) in self.conditional.iter().enumerate() {
            let label = if index == 0 { "conditional" } else { "" };
            lines.push(format!(
                "  {}{} {}",
                palette.label(label),
                membership.category,
                describe_condition(&membership.condition)
            ));
        }
        lines.join("\n")
    }
}

/// `trellis model <TAG>`
#[derive(Debug, Serialize)]
pub struct ModelReport<'a> {
    pub tag: &'a str,
    pub ancestors: &'a [String],
    pub model: Model,
    pub resolved: Model,
    pub void: bool,
    pub allows_text: bool,
}

impl<'a> ModelReport<'a> {
    pub fn new(tag: &'a str, ancestors: &'a [String]) -> Self {
        let resolved = resolve_model(tag, ancestors);
        Self {
            tag,
            ancestors,
            model: model_for(tag),
            allows_text: resolved.allows_text(),
            resolved,
            void: is_void(tag),
        }
    }
}

impl Render for ModelReport<'_> {
    fn render(&self, palette: Palette) -> String {
        let mut lines = vec![
            palette.tag(self.tag),
            format!("  {}{}", palette.label("model"), describe_model(&self.model)),
        ];
        if self.resolved != self.model {
            lines.push(format!(
                "  {}{}",
                palette.label("resolved"),
                describe_model(&self.resolved)
            ));
        }
        lines.push(format!("  {}{}", palette.label("void"), yes_no(self.void)));
        lines.push(format!(
            "  {}{}",
            palette.label("text"),
            yes_no(self.allows_text)
        ));
        lines.join("\n")
    }
}

/// `trellis allows <PARENT> <CHILD>`
#[derive(Debug, Serialize)]
pub struct AllowsReport<'a> {
    pub parent: &'a str,
    pub child: &'a str,
    pub ancestors: &'a [String],
    pub parent_model: Model,
    pub allowed: bool,
}

impl<'a> AllowsReport<'a> {
    pub fn new(parent: &'a str, child: &'a str, ancestors: &'a [String]) -> Self {
        Self {
            parent,
            child,
            ancestors,
            parent_model: resolve_model(parent, ancestors),
            allowed: allows_child(parent, child, ancestors),
        }
    }
}

impl Render for AllowsReport<'_> {
    fn render(&self, palette: Palette) -> String {
        [
            format!(
                "{} in {}: {}",
                palette.tag(self.child),
                palette.tag(self.parent),
                palette.verdict(self.allowed)
            ),
            format!(
                "  {}{}",
                palette.label("parent"),
                describe_model(&self.parent_model)
            ),
            format!(
                "  {}{}",
                palette.label("child"),
                join(&categories_for(self.child))
            ),
        ]
        .join("\n")
    }
}

/// `trellis attr <NAME>`
#[derive(Debug, Serialize)]
pub struct AttributeReport {
    pub name: String,
    pub kind: &'static str,
    pub encoding: String,
    pub bytes: Vec<u8>,
    pub emitted: bool,
    pub markup: String,
}

impl AttributeReport {
    /// Serialize `attribute` and decode it under `encoding`.
    ///
    /// # Errors
    ///
    /// Fails when the bytes are not valid in `encoding`.
    pub fn new(attribute: &RawAttribute, encoding: TextEncoding) -> Result<Self> {
        let markup = attribute.to_markup(encoding).with_context(|| {
            format!(
                "cannot decode `{}` as {encoding}",
                attribute.attribute_name()
            )
        })?;
        Ok(Self {
            name: attribute.attribute_name().to_string(),
            kind: if attribute.is_boolean() {
                "boolean"
            } else {
                "string"
            },
            encoding: encoding.to_string(),
            bytes: attribute.to_bytes(),
            emitted: attribute.is_emitted(),
            markup,
        })
    }
}

impl Render for AttributeReport {
    fn render(&self, palette: Palette) -> String {
        let markup = if self.emitted {
            self.markup.clone()
        } else {
            "(omitted)".to_string()
        };
        [
            format!("{} ({})", self.name, self.kind),
            format!("  {}{}", palette.label("bytes"), self.bytes.len()),
            format!("  {}{}", palette.label(&self.encoding), markup),
        ]
        .join("\n")
    }
}

/// Build the attribute the `attr` subcommand describes.
///
/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// "Attribute names must consist of one or more characters other than
/// controls, U+0020 SPACE, U+0022 ("), U+0027 ('), U+003E (>), U+002F (/),
/// U+003D (=), and noncharacters."
///
/// # Errors
///
/// Fails when `name` is empty or contains one of those characters.
pub fn build_attribute(
    name: &str,
    value: Option<String>,
    boolean: Option<bool>,
) -> Result<RawAttribute> {
    if name.is_empty() {
        bail!("attribute name must not be empty");
    }
    if let Some(bad) = name
        .chars()
        .find(|&c| c.is_control() || matches!(c, ' ' | '"' | '\'' | '>' | '/' | '='))
    {
        bail!("attribute name `{name}` contains {bad:?}");
    }
    Ok(match value {
        Some(value) => RawAttribute::string(name, value),
        None => RawAttribute::boolean(name, boolean.unwrap_or(true)),
    })
}

fn join(categories: &BTreeSet<Category>) -> String {
    if categories.is_empty() {
        return "none".to_string();
    }
    categories
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_model(model: &Model) -> String {
    match model {
        Model::Nothing => "nothing".to_string(),
        Model::Text => "text".to_string(),
        Model::Transparent => "transparent".to_string(),
        Model::Categories(categories) => join(categories),
    }
}

fn describe_condition(condition: &Condition) -> String {
    match *condition {
        Condition::DescendantOf { ancestor } => format!("inside <{ancestor}>"),
        Condition::AttributePresent { attribute } => format!("with `{attribute}`"),
        Condition::AttributeNotValue { attribute, value } => {
            format!("unless `{attribute}` is \"{value}\"")
        }
        Condition::AllowedInBody => "when allowed in the body".to_string(),
        Condition::HierarchicallyCorrect => "when hierarchically correct".to_string(),
        Condition::HasDescendant { descendant } => format!("containing <{descendant}>"),
        Condition::ChildrenInclude { child } => format!("with a <{child}> child"),
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: Palette = Palette::new(false);

    #[test]
    fn test_categories_report_lists_conditions() {
        let text = CategoriesReport::new("a").render(PLAIN);
        assert!(text.starts_with("<a>\n"));
        assert!(text.contains("flow, phrasing, palpable"));
        assert!(text.contains("interactive with `href`"));
    }

    #[test]
    fn test_model_report_shows_resolution() {
        let ancestors = vec!["p".to_string()];
        let report = ModelReport::new("a", &ancestors);
        assert_eq!(report.model, Model::Transparent);
        assert_eq!(report.resolved, Model::categories([Category::Phrasing]));
        assert!(report.render(PLAIN).contains("resolved    phrasing"));
    }

    #[test]
    fn test_allows_report() {
        let report = AllowsReport::new("select", "span", &[]);
        assert!(!report.allowed);
        assert!(report.render(PLAIN).starts_with("<span> in <select>: not allowed"));
        assert!(AllowsReport::new("select", "div", &[]).allowed);
    }

    #[test]
    fn test_allows_report_evaluates_ancestors() {
        let ancestors = vec!["html".to_string()];
        let report = AllowsReport::new("body", "main", &ancestors);
        assert!(report.allowed);
        assert!(report.render(PLAIN).starts_with("<main> in <body>: allowed"));
    }

    #[test]
    fn test_attribute_report_json() {
        let attribute = build_attribute("disabled", None, Some(true)).unwrap();
        let report = AttributeReport::new(&attribute, TextEncoding::Utf8).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "boolean");
        assert_eq!(json["markup"], "disabled");
        assert_eq!(json["bytes"].as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn test_false_boolean_is_omitted() {
        let attribute = build_attribute("hidden", None, Some(false)).unwrap();
        let report = AttributeReport::new(&attribute, TextEncoding::Ascii).unwrap();
        assert!(!report.emitted);
        assert!(report.render(PLAIN).contains("(omitted)"));
    }

    #[test]
    fn test_undecodable_attribute_is_an_error() {
        let attribute = build_attribute("title", Some("é".to_string()), None).unwrap();
        let err = AttributeReport::new(&attribute, TextEncoding::Ascii).unwrap_err();
        assert!(err.to_string().contains("cannot decode `title` as ascii"));
    }

    #[test]
    fn test_invalid_attribute_names() {
        assert!(build_attribute("", None, None).is_err());
        assert!(build_attribute("a b", None, None).is_err());
        assert!(build_attribute("x=y", Some(String::new()), None).is_err());
        assert!(build_attribute("data-x", None, None).is_ok());
    }
}
