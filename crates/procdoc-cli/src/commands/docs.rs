use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueEnum, builder::PossibleValue};

use procdoc_render::{
    DocumentationPage, MethodDocumentation, Palette, build_documentation,
    output::{escape_html, paint, to_ansi, to_html},
};

use crate::commands::command::{
    CommandDefinition, config_file_arg, get, get_required, output_arg, write_output,
};
use crate::config::load_config;
use crate::env::{Environment, PROCDOC_COLOR};

pub(crate) struct DocsCommandDefinition {}

impl CommandDefinition for DocsCommandDefinition {
    fn command(&self) -> Command {
        Command::new("docs")
            .about("Generate documentation with example requests and responses")
            .arg(config_file_arg())
            .arg(output_arg())
            .arg(
                Arg::new("format")
                    .long("format")
                    .short('f')
                    .value_parser(clap::builder::EnumValueParser::<DocsFormat>::new())
                    .help("Output format. Default: ansi")
                    .default_value("ansi"),
            )
    }

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()> {
        let config_path: PathBuf = get_required(matches, "config")?;
        let config = load_config(&config_path, env)?;

        let page = build_documentation(&config.route(), &config.docs)?;

        let format: DocsFormat = get(matches, "format").unwrap_or(DocsFormat::Ansi);

        let content = match format {
            DocsFormat::Json => serde_json::to_string_pretty(&page)?,
            DocsFormat::Html => html_page(&page, &config.palette),
            DocsFormat::Ansi => {
                let color = match env.enabled(PROCDOC_COLOR)? {
                    Some(color) => color,
                    None => colored::control::SHOULD_COLORIZE.should_colorize(),
                };
                ansi_page(&page, &config.palette, color)
            }
        };

        write_output(matches, &content)
    }
}

fn identifier(method: &MethodDocumentation) -> String {
    format!("{}{}{}", method.name, method.delimiter, method.method)
}

fn html_page(page: &DocumentationPage, palette: &Palette) -> String {
    let mut html = format!(
        "<h1>{}</h1>\n<p><code>{}</code></p>\n",
        escape_html(&page.title),
        escape_html(&page.uri)
    );

    for method in &page.procedures {
        html.push_str(&format!(
            "<section>\n<h2>{}</h2>\n<p>{}</p>\n<pre>{}</pre>\n<pre>{}</pre>\n</section>\n",
            escape_html(&identifier(method)),
            escape_html(method.description.as_deref().unwrap_or_default()),
            to_html(&method.request, palette),
            to_html(&method.response, palette),
        ));
    }

    html
}

fn ansi_page(page: &DocumentationPage, palette: &Palette, color: bool) -> String {
    let mut text = format!("{}\n{}\n", paint(&page.title, palette.key, color), page.uri);

    for method in &page.procedures {
        text.push_str(&format!(
            "\n{}\n",
            paint(&identifier(method), palette.key, color)
        ));
        if let Some(description) = &method.description {
            text.push_str(&format!("{}\n", description));
        }
        text.push_str(&format!(
            "\nRequest:\n{}\n\nResponse:\n{}\n",
            to_ansi(&method.request, palette, color),
            to_ansi(&method.response, palette, color),
        ));
    }

    text
}

#[derive(Clone, Debug)]
enum DocsFormat {
    Ansi,
    Html,
    Json,
}

impl ValueEnum for DocsFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Ansi, Self::Html, Self::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Ansi => Some(PossibleValue::new("ansi")),
            Self::Html => Some(PossibleValue::new("html")),
            Self::Json => Some(PossibleValue::new("json")),
        }
    }
}
