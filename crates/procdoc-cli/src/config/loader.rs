use std::path::Path;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use procdoc_model::{
    Annotation, DEFAULT_DELIMITER, MethodDeclaration, ParameterDescriptor, ResultDescriptor,
    ServiceTable, Visibility,
};
use procdoc_render::{PageSettings, Palette, TokenClass};

use crate::env::{
    Environment, PROCDOC_BASE_URL, PROCDOC_DELIMITER, PROCDOC_TARGET, PROCDOC_TITLE,
};

use super::model::{Config, RouteConfig};

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ConfigSer {
    pub route: RouteSer,
    pub docs: Option<DocsSer>,
    pub palette: Option<PaletteSer>,
    #[serde(default)]
    pub services: Vec<ServiceSer>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct RouteSer {
    pub target: String,
    pub delimiter: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct DocsSer {
    pub title: Option<String>,
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PaletteSer {
    pub key: Option<String>,
    pub string: Option<String>,
    pub number: Option<String>,
    pub boolean: Option<String>,
    pub null: Option<String>,
    pub plain: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ServiceSer {
    #[serde(rename = "type")]
    pub type_name: String,
    /// A missing name is reported when the services are scanned
    pub name: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodSer>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct MethodSer {
    pub name: String,
    pub doc: Option<String>,
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub constructor: bool,
    #[serde(default)]
    pub params: Vec<ParamSer>,
    #[serde(default)]
    pub results: Vec<ResultSer>,
    /// Names of annotations that carry no parameter or result metadata
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ParamSer {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub optional: bool,
    pub default: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ResultSer {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    pub example: Option<serde_json::Value>,
}

impl TryFrom<ConfigSer> for Config {
    type Error = anyhow::Error;

    fn try_from(config: ConfigSer) -> Result<Self, Self::Error> {
        let docs = config.docs.unwrap_or_default();

        Ok(Config {
            route: RouteConfig {
                target: config.route.target,
                delimiter: config
                    .route
                    .delimiter
                    .unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
            },
            docs: PageSettings {
                title: docs.title.unwrap_or_default(),
                base_url: docs.base_url.unwrap_or_default(),
            },
            palette: config
                .palette
                .map(Palette::try_from)
                .transpose()?
                .unwrap_or_default(),
            services: config.services.into_iter().map(ServiceTable::from).collect(),
        })
    }
}

impl TryFrom<PaletteSer> for Palette {
    type Error = anyhow::Error;

    fn try_from(config: PaletteSer) -> Result<Self, Self::Error> {
        let overrides = [
            (TokenClass::Key, config.key),
            (TokenClass::String, config.string),
            (TokenClass::Number, config.number),
            (TokenClass::Boolean, config.boolean),
            (TokenClass::Null, config.null),
            (TokenClass::Plain, config.plain),
        ];

        overrides
            .into_iter()
            .try_fold(
                Palette::default(),
                |palette, (class, color)| -> Result<Palette> {
                    match color {
                        Some(color) => Ok(palette.with_color(class, color.parse()?)),
                        None => Ok(palette),
                    }
                },
            )
    }
}

impl From<ServiceSer> for ServiceTable {
    fn from(service: ServiceSer) -> Self {
        ServiceTable {
            type_name: service.type_name,
            service_name: service.name,
            methods: service
                .methods
                .into_iter()
                .map(MethodDeclaration::from)
                .collect(),
        }
    }
}

impl From<ParamSer> for ParameterDescriptor {
    fn from(param: ParamSer) -> Self {
        ParameterDescriptor {
            name: param.name,
            type_name: param.type_name,
            optional: param.optional,
            default: param.default,
        }
    }
}

impl From<ResultSer> for ResultDescriptor {
    fn from(result: ResultSer) -> Self {
        ResultDescriptor {
            name: result.name,
            type_name: result.type_name,
            example: result.example,
        }
    }
}

impl From<MethodSer> for MethodDeclaration {
    fn from(method: MethodSer) -> Self {
        let annotations = method
            .params
            .into_iter()
            .map(|param| Annotation::Param(param.into()))
            .chain(
                method
                    .results
                    .into_iter()
                    .map(|result| Annotation::Result(result.into())),
            )
            .chain(method.annotations.into_iter().map(Annotation::Other))
            .collect();

        MethodDeclaration {
            name: method.name,
            visibility: method.visibility.unwrap_or_default(),
            constructor: method.constructor,
            doc_comment: method.doc,
            annotations,
        }
    }
}

fn load_config_from_file(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read file '{}': {}", path.display(), e))?;
    let config: ConfigSer = toml::from_str(&toml_str)
        .map_err(|e| anyhow!("Failed to parse TOML file '{}': {}", path.display(), e))?;

    config.try_into()
}

/// Load declarations from `path`, then apply environment overrides.
pub fn load_config(path: &Path, env: &dyn Environment) -> Result<Config> {
    let mut config = load_config_from_file(path)?;

    if let Some(target) = env.get(PROCDOC_TARGET) {
        config.route.target = target;
    }
    if let Some(delimiter) = env.get(PROCDOC_DELIMITER) {
        config.route.delimiter = delimiter;
    }
    if let Some(title) = env.get(PROCDOC_TITLE) {
        config.docs.title = title;
    }
    if let Some(base_url) = env.get(PROCDOC_BASE_URL) {
        config.docs.base_url = base_url;
    }

    tracing::debug!(
        "Loaded {} service declaration(s) from '{}'",
        config.services.len(),
        path.display()
    );

    Ok(config)
}
