use std::sync::Arc;

use procdoc_model::{ProcedureSet, Route, ServiceDeclaration, ServiceTable};
use procdoc_render::{PageSettings, Palette};

#[derive(Debug, PartialEq)]
pub struct Config {
    pub route: RouteConfig,
    pub docs: PageSettings,
    pub palette: Palette,
    pub services: Vec<ServiceTable>,
}

#[derive(Debug, PartialEq)]
pub struct RouteConfig {
    pub target: String,
    pub delimiter: String,
}

impl Config {
    /// The route as the routing layer would hand it to the introspection pipeline
    pub fn route(&self) -> Route {
        let services = self
            .services
            .iter()
            .map(|service| Arc::new(service.clone()) as Arc<dyn ServiceDeclaration>)
            .collect();

        Route::new(
            &self.route.target,
            ProcedureSet::new(services).with_delimiter(&self.route.delimiter),
        )
    }
}
