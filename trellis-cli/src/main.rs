//! Trellis CLI
//!
//! Inspect the HTML content model and attribute serialization from the
//! terminal.

mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use trellis_attributes::TextEncoding;
use trellis_common::warning::warn_once;
use trellis_content::is_known_element;

use report::{
    AllowsReport, AttributeReport, CategoriesReport, ModelReport, Palette, Render, build_attribute,
};

/// Trellis: typed HTML content model inspector
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Categories of an element, conditional ones included
    trellis categories a

    # Content model of <a> inside <p>
    trellis model a --ancestor p

    # May a <div> go inside a <span>?
    trellis allows span div

    # Canonical bytes of an attribute
    trellis attr title --value "日本" --encoding utf-8
    trellis attr disabled --boolean false

    # Machine-readable output
    trellis --json categories input
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the content categories of an element
    Categories {
        /// Element tag name
        tag: String,
    },

    /// Show the content model of an element
    Model {
        /// Element tag name
        tag: String,

        /// Enclosing element, nearest first; repeat for each level
        #[arg(long = "ancestor", value_name = "TAG")]
        ancestors: Vec<String>,
    },

    /// Check whether CHILD may appear inside PARENT
    Allows {
        /// Parent tag name
        parent: String,

        /// Child tag name
        child: String,

        /// Elements enclosing PARENT, nearest first
        #[arg(long = "ancestor", value_name = "TAG")]
        ancestors: Vec<String>,
    },

    /// Serialize an attribute and decode the bytes
    Attr {
        /// Attribute name
        name: String,

        /// Value of a string attribute
        #[arg(long, conflicts_with = "boolean")]
        value: Option<String>,

        /// State of a boolean attribute (default: true)
        #[arg(long, value_name = "true|false")]
        boolean: Option<bool>,

        /// Encoding used to decode the serialized bytes
        #[arg(long, default_value = "utf-8", value_name = "utf-8|ascii|latin1")]
        encoding: TextEncoding,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let palette = Palette::new(!cli.no_color);

    match cli.command {
        Command::Categories { tag } => {
            warn_if_unknown(&tag);
            emit(&CategoriesReport::new(&tag), cli.json, palette)
        }
        Command::Model { tag, ancestors } => {
            warn_if_unknown(&tag);
            emit(&ModelReport::new(&tag, &ancestors), cli.json, palette)
        }
        Command::Allows {
            parent,
            child,
            ancestors,
        } => {
            warn_if_unknown(&parent);
            warn_if_unknown(&child);
            emit(
                &AllowsReport::new(&parent, &child, &ancestors),
                cli.json,
                palette,
            )
        }
        Command::Attr {
            name,
            value,
            boolean,
            encoding,
        } => {
            let attribute = build_attribute(&name, value, boolean)?;
            emit(&AttributeReport::new(&attribute, encoding)?, cli.json, palette)
        }
    }
}

/// Print a report as JSON or as terminal text.
fn emit<R: Serialize + Render>(report: &R, json: bool, palette: Palette) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("failed to serialize report")?;
        println!("{text}");
    } else {
        println!("{}", report.render(palette));
    }
    Ok(())
}

/// Unknown tags still get an answer (flow content, no categories), so only
/// warn.
fn warn_if_unknown(tag: &str) {
    if !is_known_element(tag) {
        let _ = warn_once(
            "Content",
            &format!("<{tag}> is not a known HTML element; treating it as flow content"),
        );
    }
}
