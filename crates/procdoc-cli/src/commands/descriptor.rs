use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgMatches, Command};

use procdoc_introspection::build_service_descriptor;

use crate::commands::command::{
    CommandDefinition, config_file_arg, get_required, output_arg, write_output,
};
use crate::config::load_config;
use crate::env::Environment;

pub(crate) struct DescriptorCommandDefinition {}

impl CommandDefinition for DescriptorCommandDefinition {
    fn command(&self) -> Command {
        Command::new("descriptor")
            .about("Generate the SMD service descriptor")
            .arg(config_file_arg())
            .arg(output_arg())
    }

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()> {
        let config_path: PathBuf = get_required(matches, "config")?;
        let config = load_config(&config_path, env)?;

        let document = build_service_descriptor(&config.route())?;

        write_output(matches, &serde_json::to_string_pretty(&document)?)
    }
}
